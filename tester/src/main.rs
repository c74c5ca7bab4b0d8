extern crate colored;
extern crate env_logger;
extern crate libharness;

mod arith;
mod demo_case;

use colored::*;
use std::process;
use libharness::runner::Runner;
use self::demo_case::demo_suite;

fn main() {
    env_logger::init();
    let suite = demo_suite();
    println!("{}", "Running fixture demo suite...".blue().bold());
    println!("");
    let report = Runner::new().run(&suite);
    println!("");
    for problem in report.problems() {
        println!("{}", format!("{} in `{}`:", problem.outcome().label(), problem.name()).red().bold());
        println!("\t{}", problem.outcome().description());
        println!("");
    }
    let elapsed = report.elapsed();
    println!(
        "Ran {} tests in {}.{:03}s",
        report.tests_run(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    if report.ok() {
        println!("{}", format!("{} tests passed!", report.passed()).green().bold());
    } else {
        println!(
            "{}",
            format!("{} failures, {} errors", report.failures(), report.errors()).red().bold()
        );
    }
    println!("");
    if !report.ok() {
        process::exit(1);
    }
}
