//! Strength classification - maps the number of satisfied rules to a label.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rules::RULE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

/// Label for every possible passed count, indexed by count.
///
/// The length is tied to [`RULE_COUNT`], so adding a rule without
/// extending the table does not compile.
pub const STRENGTH_TABLE: [StrengthLabel; RULE_COUNT + 1] = [
    StrengthLabel::Weak,
    StrengthLabel::Weak,
    StrengthLabel::Medium,
    StrengthLabel::Medium,
    StrengthLabel::Strong,
];

/// Returns the label for `passed_count` satisfied rules.
///
/// # Panics
/// If `passed_count > RULE_COUNT`. Evaluation can never produce such a
/// count; reaching this is a bug.
pub fn classify(passed_count: usize) -> StrengthLabel {
    match STRENGTH_TABLE.get(passed_count) {
        Some(label) => *label,
        None => {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Strength table has no entry for {} passed rules (rule count {})",
                passed_count,
                RULE_COUNT
            );
            unreachable!("passed count {passed_count} exceeds rule count {RULE_COUNT}")
        }
    }
}

impl StrengthLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0:?}")]
pub struct ParseStrengthLabelError(pub String);

impl FromStr for StrengthLabel {
    type Err = ParseStrengthLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            _ => Err(ParseStrengthLabelError(s.to_string())),
        }
    }
}
