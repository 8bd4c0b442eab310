//! Benchmark suite for command execution
//!
//! Measures the interpreter loop and the purchase path using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Scripts
//!
//! Scripts are generated in memory. Each customer inserts a five-dollar bill
//! and buys one cola, so every purchase plans and pays out change.

use vending_machine::core::VendingMachine;
use vending_machine::io::{run_session, ScriptSource};

fn main() {
    divan::main();
}

/// Service-mode setup with enough stock, cups and change for `customers` purchases
fn restock_script(customers: usize) -> String {
    format!(
        "add cups {customers}\n\
         add cola coke {customers}\n\
         add coins nickel {customers}\n\
         add coins quarter {}\n\
         add bills 1 {}\n\
         lock password\n",
        customers * 2,
        customers * 3
    )
}

fn customer_script(customers: usize) -> String {
    let mut script = restock_script(customers);
    for _ in 0..customers {
        script.push_str("bill 5\ncola coke -no_ice\n");
    }
    script.push_str("status\nexit\n");
    script
}

/// Full interpreter loop over a generated script, transcript kept in memory
#[divan::bench(args = [10, 100, 1000])]
fn session_purchases(bencher: divan::Bencher, customers: usize) {
    let script = customer_script(customers);

    bencher.bench_local(|| {
        let mut machine = VendingMachine::default();
        let mut source = ScriptSource::new(script.as_bytes());
        let mut output = Vec::new();

        run_session(&mut machine, &mut source, &mut output).expect("Session failed");
        divan::black_box(output)
    });
}

/// Direct `execute` calls without the loop or transcript
#[divan::bench(args = [10, 100, 1000])]
fn execute_purchases(bencher: divan::Bencher, customers: usize) {
    let setup = restock_script(customers);

    bencher.bench_local(|| {
        let mut machine = VendingMachine::default();
        for line in setup.lines() {
            machine.execute(line).expect("Restock failed");
        }
        for _ in 0..customers {
            machine.execute("bill 5").expect("Deposit failed");
            machine.execute("cola coke").expect("Purchase failed");
        }
        divan::black_box(machine.status())
    });
}

/// Parsing and dispatch of a mixed command line set
#[divan::bench]
fn parse_and_dispatch() {
    let lines = [
        "coin quarter",
        "bill 5",
        "cola sprite -no_ice",
        "add coins dime 20",
        "remove bills 1 3",
        "status",
        "vend coke",
    ];
    let mut machine = VendingMachine::default();
    for line in lines {
        let _ = divan::black_box(machine.execute(divan::black_box(line)));
    }
}
