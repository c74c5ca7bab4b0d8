pub type TestResult = Result<(), String>;

pub struct TestMethod {
    name: String,
    body: Box<Fn() -> TestResult>,
}

impl TestMethod {

    pub fn new<F>(name: &str, body: F) -> TestMethod
        where F: Fn() -> TestResult + 'static
    {
        TestMethod {
            name: name.to_string(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self) -> TestResult {
        (self.body)()
    }
}

/// A named group of test methods sharing four optional lifecycle hooks.
/// Case-scoped hooks run once per case, test-scoped hooks once per test;
/// the two cardinalities are independent slots.
pub struct TestCase {
    name: String,
    tests: Vec<TestMethod>,
    set_up: Option<Box<Fn()>>,
    tear_down: Option<Box<Fn()>>,
    set_up_case: Option<Box<Fn()>>,
    tear_down_case: Option<Box<Fn()>>,
}

impl TestCase {

    pub fn named(name: &str) -> TestCase {
        TestCase {
            name: name.to_string(),
            tests: Vec::new(),
            set_up: None,
            tear_down: None,
            set_up_case: None,
            tear_down_case: None,
        }
    }

    /// Runs immediately before every test method.
    pub fn set_up<F>(mut self, hook: F) -> TestCase
        where F: Fn() + 'static
    {
        self.set_up = Some(Box::new(hook));
        self
    }

    /// Runs immediately after every test method that started.
    pub fn tear_down<F>(mut self, hook: F) -> TestCase
        where F: Fn() + 'static
    {
        self.tear_down = Some(Box::new(hook));
        self
    }

    /// Runs once, before the first test method of the case.
    pub fn set_up_case<F>(mut self, hook: F) -> TestCase
        where F: Fn() + 'static
    {
        self.set_up_case = Some(Box::new(hook));
        self
    }

    /// Runs once, after the last test method of the case.
    pub fn tear_down_case<F>(mut self, hook: F) -> TestCase
        where F: Fn() + 'static
    {
        self.tear_down_case = Some(Box::new(hook));
        self
    }

    /// Registers a test method. Registration order is execution order.
    pub fn test<F>(mut self, name: &str, body: F) -> TestCase
        where F: Fn() -> TestResult + 'static
    {
        self.tests.push(TestMethod::new(name, body));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tests(&self) -> &[TestMethod] {
        &self.tests
    }

    pub fn invoke_set_up(&self) {
        if let Some(ref hook) = self.set_up {
            hook()
        }
    }

    pub fn invoke_tear_down(&self) {
        if let Some(ref hook) = self.tear_down {
            hook()
        }
    }

    pub fn invoke_set_up_case(&self) {
        if let Some(ref hook) = self.set_up_case {
            hook()
        }
    }

    pub fn invoke_tear_down_case(&self) {
        if let Some(ref hook) = self.tear_down_case {
            hook()
        }
    }
}

#[test]
fn test_registration_order_is_preserved() {
    let case = TestCase::named("Ordering")
        .test("test_b", || Ok(()))
        .test("test_a", || Ok(()));
    let names: Vec<&str> = case.tests().iter().map(|test| test.name()).collect();
    assert_eq!(names, vec!["test_b", "test_a"]);
}

#[test]
fn test_unset_hooks_are_no_ops() {
    let case = TestCase::named("Bare").test("test_nothing", || Ok(()));
    case.invoke_set_up_case();
    case.invoke_set_up();
    case.invoke_tear_down();
    case.invoke_tear_down_case();
}

#[test]
fn test_method_surfaces_its_result() {
    let passing = TestMethod::new("test_passing", || Ok(()));
    assert_eq!(passing.run(), Ok(()));

    let failing = TestMethod::new("test_failing", || Err("Expecting 1, found 2".to_string()));
    assert_eq!(failing.run(), Err("Expecting 1, found 2".to_string()));
}
