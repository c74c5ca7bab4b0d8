use super::test_case::TestCase;

pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {

    pub fn new() -> TestSuite {
        TestSuite {
            cases: Vec::new(),
        }
    }

    pub fn add_case(&mut self, case: TestCase) {
        self.cases.push(case)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn test_count(&self) -> usize {
        self.cases.iter().map(|case| case.tests().len()).sum()
    }
}

#[test]
fn test_cases_keep_insertion_order() {
    let mut suite = TestSuite::new();
    suite.add_case(TestCase::named("First"));
    suite.add_case(TestCase::named("Second"));
    let names: Vec<&str> = suite.cases().iter().map(|case| case.name()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_counts_tests_across_cases() {
    let mut suite = TestSuite::new();
    suite.add_case(
        TestCase::named("Pair")
            .test("test_one", || Ok(()))
            .test("test_two", || Ok(()))
    );
    suite.add_case(TestCase::named("Single").test("test_only", || Ok(())));
    assert_eq!(suite.test_count(), 3);
}
