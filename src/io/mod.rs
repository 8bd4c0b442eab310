//! I/O module
//!
//! Handles reading command lines and writing the session transcript.
//!
//! # Components
//!
//! - `line_source` - Interactive and script line sources behind one trait
//! - `repl` - The interpreter loop that ties a source, a machine and an output together

pub mod line_source;
pub mod repl;

pub use line_source::{EditorSource, LineSource, ScriptSource};
pub use repl::{run_session, BANNER};
