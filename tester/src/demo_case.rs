use libharness::assert::expect_equal;
use libharness::runner::Runner;
use libharness::suite::TestSuite;
use libharness::test_case::TestCase;
use super::arith::{add, minors};

/// The demo case: two arithmetic tests wrapped in all four lifecycle
/// hooks, each hook printing the line it is named after.
pub fn demo_case() -> TestCase {
    TestCase::named("TestDemo")
        .set_up_case(|| println!("setup class"))
        .tear_down_case(|| println!("teardown class"))
        .set_up(|| println!("setup test"))
        .tear_down(|| println!("teardown test"))
        .test("test_add", || expect_equal(add(1, 2), 3))
        .test("test_minors", || expect_equal(minors(1, 2), -1))
}

pub fn demo_suite() -> TestSuite {
    let mut suite = TestSuite::new();
    suite.add_case(demo_case());
    suite
}

#[test]
fn test_demo_suite_reports_two_clean_passes() {
    let report = Runner::new().run(&demo_suite());
    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.failures(), 0);
    assert_eq!(report.errors(), 0);
    assert!(report.ok());
}

#[test]
fn test_demo_suite_registers_tests_alphabetically() {
    let case = demo_case();
    let names: Vec<&str> = case.tests().iter().map(|test| test.name()).collect();
    assert_eq!(names, vec!["test_add", "test_minors"]);
}

#[test]
fn test_repeated_demo_runs_are_identical() {
    let first = Runner::new().run(&demo_suite());
    let second = Runner::new().run(&demo_suite());
    assert_eq!(first.outcomes(), second.outcomes());
    assert!(second.ok());
}
