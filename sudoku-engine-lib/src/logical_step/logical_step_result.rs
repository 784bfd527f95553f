//! Contains [`LogicalStepResult`], the outcome of one logical step pass.

use crate::logical_step_desc::LogicalStepDesc;

/// The outcome of running a [`crate::logical_step::LogicalStep`], with an
/// optional description of what happened.
#[derive(Clone, Debug)]
pub enum LogicalStepResult {
    /// The step found nothing to do.
    None,
    /// The step changed the board.
    Changed(Option<LogicalStepDesc>),
    /// The step proved the board invalid.
    Invalid(Option<LogicalStepDesc>),
}

impl LogicalStepResult {
    pub fn is_none(&self) -> bool {
        matches!(self, LogicalStepResult::None)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, LogicalStepResult::Changed(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, LogicalStepResult::Invalid(_))
    }

    pub fn description(&self) -> Option<&LogicalStepDesc> {
        match self {
            LogicalStepResult::None => None,
            LogicalStepResult::Changed(desc) => desc.as_ref(),
            LogicalStepResult::Invalid(desc) => desc.as_ref(),
        }
    }

    /// Returns the same result with the description prefixed, keeping a
    /// missing description missing.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let prefixed = |desc: &Option<LogicalStepDesc>| {
            desc.as_ref().map(|desc| desc.with_prefix(prefix))
        };
        match self {
            LogicalStepResult::None => LogicalStepResult::None,
            LogicalStepResult::Changed(desc) => LogicalStepResult::Changed(prefixed(desc)),
            LogicalStepResult::Invalid(desc) => LogicalStepResult::Invalid(prefixed(desc)),
        }
    }
}

impl std::fmt::Display for LogicalStepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description() {
            Some(desc) => write!(f, "{}", desc),
            None => write!(f, "No Description"),
        }
    }
}
