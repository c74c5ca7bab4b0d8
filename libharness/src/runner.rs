use std::any::Any;
use std::cell::RefCell;
use std::panic;
use std::rc::Rc;
use std::time::{Duration, Instant};
use super::assert::expect_equal;
use super::suite::TestSuite;
use super::test_case::{TestCase, TestMethod};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Pass,
    Fail(String),
    Error(String),
}

impl Outcome {

    pub fn is_pass(&self) -> bool {
        match *self {
            Outcome::Pass => true,
            _ => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Outcome::Pass => "PASS",
            Outcome::Fail(_) => "FAIL",
            Outcome::Error(_) => "ERROR",
        }
    }

    pub fn description(&self) -> &str {
        match *self {
            Outcome::Pass => "",
            Outcome::Fail(ref message) => message,
            Outcome::Error(ref message) => message,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct TestOutcome {
    name: String,
    outcome: Outcome,
}

impl TestOutcome {

    fn new(case: &str, test: &str, outcome: Outcome) -> TestOutcome {
        TestOutcome {
            name: format!("{}::{}", case, test),
            outcome: outcome,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

pub struct RunReport {
    outcomes: Vec<TestOutcome>,
    hook_errors: Vec<TestOutcome>,
    elapsed: Duration,
}

impl RunReport {

    pub fn tests_run(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter()
            .filter(|test_outcome| test_outcome.outcome.is_pass())
            .count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter()
            .filter(|test_outcome| match test_outcome.outcome {
                Outcome::Fail(_) => true,
                _ => false,
            })
            .count()
    }

    pub fn errors(&self) -> usize {
        self.outcomes.iter()
            .filter(|test_outcome| match test_outcome.outcome {
                Outcome::Error(_) => true,
                _ => false,
            })
            .count()
            + self.hook_errors.len()
    }

    pub fn ok(&self) -> bool {
        self.failures() == 0 && self.errors() == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Every non-passing entry, test outcomes first, then case-hook errors.
    pub fn problems(&self) -> Vec<&TestOutcome> {
        self.outcomes.iter()
            .chain(self.hook_errors.iter())
            .filter(|test_outcome| !test_outcome.outcome.is_pass())
            .collect()
    }
}

pub struct Runner {

}

impl Runner {

    pub fn new() -> Runner {
        Runner {
        }
    }

    pub fn run(&self, suite: &TestSuite) -> RunReport {
        let started = Instant::now();
        let mut outcomes = Vec::new();
        let mut hook_errors = Vec::new();
        for case in suite.cases() {
            self.run_case(case, &mut outcomes, &mut hook_errors);
        }
        RunReport {
            outcomes: outcomes,
            hook_errors: hook_errors,
            elapsed: started.elapsed(),
        }
    }

    fn run_case(
        &self,
        case: &TestCase,
        outcomes: &mut Vec<TestOutcome>,
        hook_errors: &mut Vec<TestOutcome>,
    ) {
        if case.tests().is_empty() {
            debug!("case `{}` has no tests, skipping", case.name());
            return;
        }
        debug!("running case `{}`", case.name());
        if let Err(description) = contain(|| case.invoke_set_up_case()) {
            for test in case.tests() {
                outcomes.push(TestOutcome::new(
                    case.name(),
                    test.name(),
                    Outcome::Error(format!("case setup failed: {}", description)),
                ));
            }
            return;
        }
        for test in case.tests() {
            outcomes.push(self.run_test(case, test));
        }
        if let Err(description) = contain(|| case.invoke_tear_down_case()) {
            hook_errors.push(TestOutcome::new(
                case.name(),
                "tear_down_case",
                Outcome::Error(description),
            ));
        }
    }

    fn run_test(&self, case: &TestCase, test: &TestMethod) -> TestOutcome {
        debug!("running test `{}::{}`", case.name(), test.name());
        if let Err(description) = contain(|| case.invoke_set_up()) {
            return TestOutcome::new(
                case.name(),
                test.name(),
                Outcome::Error(format!("setup failed: {}", description)),
            );
        }
        let mut outcome = match contain(|| test.run()) {
            Ok(Ok(())) => Outcome::Pass,
            Ok(Err(message)) => Outcome::Fail(message),
            Err(description) => Outcome::Error(description),
        };
        if let Err(description) = contain(|| case.invoke_tear_down()) {
            outcome = Outcome::Error(format!("teardown failed: {}", description));
        }
        TestOutcome::new(case.name(), test.name(), outcome)
    }
}

fn contain<F, T>(f: F) -> Result<T, String>
    where F: FnOnce() -> T
{
    panic::catch_unwind(panic::AssertUnwindSafe(f)).map_err(describe_panic)
}

fn describe_panic(payload: Box<Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

type EventLog = Rc<RefCell<Vec<String>>>;

fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn events(log: &EventLog) -> Vec<String> {
    log.borrow().clone()
}

fn fixture_case(log: &EventLog) -> TestCase {
    let set_up_case_log = log.clone();
    let tear_down_case_log = log.clone();
    let set_up_log = log.clone();
    let tear_down_log = log.clone();
    let first_log = log.clone();
    let second_log = log.clone();
    TestCase::named("Fixture")
        .set_up_case(move || set_up_case_log.borrow_mut().push("setup class".to_string()))
        .tear_down_case(move || tear_down_case_log.borrow_mut().push("teardown class".to_string()))
        .set_up(move || set_up_log.borrow_mut().push("setup test".to_string()))
        .tear_down(move || tear_down_log.borrow_mut().push("teardown test".to_string()))
        .test("test_one", move || {
            first_log.borrow_mut().push("test_one".to_string());
            Ok(())
        })
        .test("test_two", move || {
            second_log.borrow_mut().push("test_two".to_string());
            Ok(())
        })
}

fn run_single(case: TestCase) -> RunReport {
    let mut suite = TestSuite::new();
    suite.add_case(case);
    Runner::new().run(&suite)
}

#[test]
fn test_passing_suite_reports_every_pass() {
    let log = event_log();
    let report = run_single(fixture_case(&log));
    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.passed(), 2);
    assert_eq!(report.failures(), 0);
    assert_eq!(report.errors(), 0);
    assert!(report.ok());
    assert!(report.problems().is_empty());
}

#[test]
fn test_hooks_interleave_in_documented_order() {
    let log = event_log();
    run_single(fixture_case(&log));
    assert_eq!(events(&log), vec![
        "setup class".to_string(),
        "setup test".to_string(),
        "test_one".to_string(),
        "teardown test".to_string(),
        "setup test".to_string(),
        "test_two".to_string(),
        "teardown test".to_string(),
        "teardown class".to_string(),
    ]);
}

#[test]
fn test_failing_test_still_runs_remaining_tests() {
    let log = event_log();
    let tear_down_log = log.clone();
    let case = TestCase::named("Mixed")
        .tear_down(move || tear_down_log.borrow_mut().push("teardown test".to_string()))
        .test("test_failing", || expect_equal(2, 3))
        .test("test_passing", || Ok(()));
    let report = run_single(case);
    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.failures(), 1);
    assert_eq!(report.passed(), 1);
    assert_eq!(events(&log), vec![
        "teardown test".to_string(),
        "teardown test".to_string(),
    ]);
    let problems = report.problems();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].name(), "Mixed::test_failing");
    assert_eq!(problems[0].outcome(), &Outcome::Fail("Expecting 3, found 2".to_string()));
}

#[test]
fn test_panicking_body_is_an_error_and_tear_down_still_runs() {
    let log = event_log();
    let tear_down_log = log.clone();
    let case = TestCase::named("Panicky")
        .tear_down(move || tear_down_log.borrow_mut().push("teardown test".to_string()))
        .test("test_exploding", || panic!("subject blew up"));
    let report = run_single(case);
    assert_eq!(report.errors(), 1);
    assert_eq!(report.failures(), 0);
    assert_eq!(events(&log), vec!["teardown test".to_string()]);
    assert_eq!(report.problems()[0].outcome().description(), "subject blew up");
}

#[test]
fn test_set_up_panic_skips_body_and_tear_down() {
    let log = event_log();
    let body_log = log.clone();
    let tear_down_log = log.clone();
    let case = TestCase::named("BrokenSetup")
        .set_up(|| panic!("no database"))
        .tear_down(move || tear_down_log.borrow_mut().push("teardown test".to_string()))
        .test("test_never_runs", move || {
            body_log.borrow_mut().push("body".to_string());
            Ok(())
        });
    let report = run_single(case);
    assert_eq!(report.errors(), 1);
    assert!(events(&log).is_empty());
    assert_eq!(report.problems()[0].outcome().description(), "setup failed: no database");
}

#[test]
fn test_case_setup_panic_errors_every_test_and_skips_case_teardown() {
    let log = event_log();
    let tear_down_case_log = log.clone();
    let case = TestCase::named("BrokenCase")
        .set_up_case(|| panic!("fixture unavailable"))
        .tear_down_case(move || tear_down_case_log.borrow_mut().push("teardown class".to_string()))
        .test("test_one", || Ok(()))
        .test("test_two", || Ok(()));
    let report = run_single(case);
    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.errors(), 2);
    assert!(events(&log).is_empty());
    for problem in report.problems() {
        assert_eq!(
            problem.outcome().description(),
            "case setup failed: fixture unavailable"
        );
    }
}

#[test]
fn test_tear_down_panic_upgrades_outcome_to_error() {
    let case = TestCase::named("LeakyTeardown")
        .tear_down(|| panic!("leaked handle"))
        .test("test_passing", || Ok(()));
    let report = run_single(case);
    assert_eq!(report.passed(), 0);
    assert_eq!(report.errors(), 1);
    assert_eq!(report.problems()[0].outcome().description(), "teardown failed: leaked handle");
}

#[test]
fn test_case_teardown_panic_is_reported() {
    let case = TestCase::named("LeakyCase")
        .tear_down_case(|| panic!("socket left open"))
        .test("test_passing", || Ok(()));
    let report = run_single(case);
    assert_eq!(report.tests_run(), 1);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.errors(), 1);
    assert!(!report.ok());
    assert_eq!(report.problems()[0].name(), "LeakyCase::tear_down_case");
}

#[test]
fn test_empty_case_is_skipped_entirely() {
    let log = event_log();
    let set_up_case_log = log.clone();
    let case = TestCase::named("Hollow")
        .set_up_case(move || set_up_case_log.borrow_mut().push("setup class".to_string()));
    let report = run_single(case);
    assert_eq!(report.tests_run(), 0);
    assert!(report.ok());
    assert!(events(&log).is_empty());
}

#[test]
fn test_failure_in_one_case_does_not_stop_the_next() {
    let mut suite = TestSuite::new();
    suite.add_case(TestCase::named("Flaky").test("test_failing", || expect_equal(1, 2)));
    suite.add_case(TestCase::named("Steady").test("test_passing", || Ok(())));
    let report = Runner::new().run(&suite);
    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.failures(), 1);
    assert_eq!(report.passed(), 1);
}

#[test]
fn test_repeated_runs_report_identical_outcomes() {
    let log = event_log();
    let suite = {
        let mut suite = TestSuite::new();
        suite.add_case(fixture_case(&log));
        suite
    };
    let first = Runner::new().run(&suite);
    let second = Runner::new().run(&suite);
    assert_eq!(first.outcomes(), second.outcomes());
    assert_eq!(first.failures(), second.failures());
    assert_eq!(first.errors(), second.errors());
}
