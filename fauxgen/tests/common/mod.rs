//! A stand-in for the host framework used by the integration suites: one
//! collected test function with declared parameters, attached marks, and a
//! record of every registration the resolver performs.

#![allow(dead_code)]

use fauxgen::{ArgNames, Mark, Metafunc, UsageError, UsageResult, Value, generate_tests};

pub struct Registration {
    pub argnames: Vec<String>,
    pub values: Vec<Value>,
    pub ids: Option<Vec<String>>,
}

pub struct FakeMetafunc {
    name: String,
    params: Vec<String>,
    marks: Vec<Mark>,
    pub registrations: Vec<Registration>,
}

impl FakeMetafunc {
    pub fn new(name: &str, params: &[&str]) -> Self {
        FakeMetafunc {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            marks: Vec::new(),
            registrations: Vec::new(),
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// Run the collection hook against this test function.
    pub fn collect(&mut self) -> UsageResult<()> {
        generate_tests(self)
    }

    /// Total parametrized invocations registered so far.
    pub fn invocations(&self) -> usize {
        self.registrations.iter().map(|r| r.values.len()).sum()
    }

    pub fn registration(&self) -> &Registration {
        self.registrations.first().expect("nothing was registered")
    }
}

impl Metafunc for FakeMetafunc {
    fn function_name(&self) -> &str {
        &self.name
    }

    fn take_marks(&mut self) -> Vec<Mark> {
        std::mem::take(&mut self.marks)
    }

    fn parametrize(
        &mut self,
        argnames: &ArgNames,
        values: Vec<Value>,
        ids: Option<Vec<String>>,
    ) -> UsageResult<()> {
        // The host-side binding check: every resolved name must be declared
        // by the test function.
        for name in argnames.names() {
            if !self.params.iter().any(|param| param == name) {
                return Err(UsageError::binding_mismatch(self.name.as_str(), name));
            }
        }
        self.registrations.push(Registration {
            argnames: argnames.names().iter().map(|s| s.to_string()).collect(),
            values,
            ids,
        });
        Ok(())
    }
}
