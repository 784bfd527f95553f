//! Human-readable descriptions of deduction steps.

use crate::elimination_list::EliminationList;
use itertools::Itertools;

/// One line of explanation for a single deduction.
#[derive(Clone, Debug)]
pub struct LogicalStepDesc {
    step: String,
}

impl LogicalStepDesc {
    /// Creates a description from a plain line.
    pub fn from_desc(desc: &str) -> Self {
        Self {
            step: desc.to_owned(),
        }
    }

    /// Creates a description of the form `<desc> => <eliminations>`.
    pub fn from_elims(desc: &str, elims: &EliminationList) -> Self {
        Self {
            step: format!("{} => {}", desc, elims),
        }
    }

    /// Returns the description prefixed with the given string, typically
    /// the acting step or constraint name.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            step: format!("{}{}", prefix, self.step),
        }
    }
}

impl From<&str> for LogicalStepDesc {
    fn from(step: &str) -> Self {
        Self::from_desc(step)
    }
}

impl From<String> for LogicalStepDesc {
    fn from(step: String) -> Self {
        Self { step }
    }
}

impl std::fmt::Display for LogicalStepDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.step)
    }
}

/// An ordered list of step descriptions, one per line when displayed.
#[derive(Clone, Debug, Default)]
pub struct LogicalStepDescList {
    steps: Vec<LogicalStepDesc>,
}

impl LogicalStepDescList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The number of steps in the list.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the list has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends a step.
    pub fn push(&mut self, step: LogicalStepDesc) {
        self.steps.push(step);
    }

    /// Appends a step from a plain line.
    pub fn add_step(&mut self, desc: &str) {
        self.push(LogicalStepDesc::from_desc(desc));
    }

    /// Appends a step of the form `<desc> => <eliminations>`.
    pub fn add_step_with_elims(&mut self, desc: &str, elims: &EliminationList) {
        self.push(LogicalStepDesc::from_elims(desc, elims));
    }

    /// Appends all steps from another list.
    pub fn extend(&mut self, other: &LogicalStepDescList) {
        self.steps.extend(other.steps.iter().cloned());
    }

    /// Iterates the steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &LogicalStepDesc> {
        self.steps.iter()
    }
}

impl std::fmt::Display for LogicalStepDescList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.iter().map(|s| s.to_string()).join("\n"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let mut list = LogicalStepDescList::new();
        list.add_step("first");
        list.push(LogicalStepDesc::from_desc("second").with_prefix("Step: "));
        assert_eq!(list.to_string(), "first\nStep: second");
        assert_eq!(list.len(), 2);
    }
}
