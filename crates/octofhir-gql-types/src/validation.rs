//! Input validation results
//!
//! A rejected input is an expected outcome of serving requests, so validation
//! reports problems as data instead of returning an error.

use octofhir_gql_diagnostics::Diagnostic;

/// Outcome of validating one input value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    problems: Vec<Diagnostic>,
}

impl ValidationResult {
    /// A result with no problems
    pub fn valid() -> Self {
        Self::default()
    }

    /// Record a problem
    pub fn add_problem(&mut self, problem: Diagnostic) {
        self.problems.push(problem);
    }

    /// Fold another result's problems into this one, nesting them under `segment`
    pub fn merge(&mut self, other: ValidationResult, segment: Option<&str>) {
        for problem in other.problems {
            let problem = match segment {
                Some(segment) => problem.nested_in(segment),
                None => problem,
            };
            self.problems.push(problem);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[Diagnostic] {
        &self.problems
    }

    /// Problem messages, in the order they were recorded
    pub fn messages(&self) -> Vec<&str> {
        self.problems.iter().map(|p| p.message.as_str()).collect()
    }
}

impl From<Diagnostic> for ValidationResult {
    fn from(problem: Diagnostic) -> Self {
        Self {
            problems: vec![problem],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_gql_diagnostics::GQL0100;

    #[test]
    fn test_merge_nests_paths() {
        let problem = Diagnostic::error(GQL0100, "bad color").with_path(["color"]);
        let inner = ValidationResult::from(problem);

        let mut outer = ValidationResult::valid();
        assert!(outer.is_valid());
        outer.merge(inner, Some("paint"));

        assert!(!outer.is_valid());
        assert_eq!(outer.problems()[0].path, vec!["paint".to_string(), "color".to_string()]);
        assert_eq!(outer.messages(), vec!["bad color"]);
    }
}
