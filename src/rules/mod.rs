//! Password checklist rules
//!
//! Each rule is an independent, total predicate over the candidate.
//! The set is closed and fixed at compile time.

mod length;
mod variety;

use thiserror::Error;

pub use length::{MIN_LENGTH, length_rule};
pub use variety::{digit_rule, special_rule, uppercase_rule};

/// Number of rules in [`RULE_SET`].
pub const RULE_COUNT: usize = 4;

/// The rules in display order.
pub static RULE_SET: [PasswordRule; RULE_COUNT] = [
    PasswordRule::MinLength,
    PasswordRule::Digit,
    PasswordRule::Uppercase,
    PasswordRule::SpecialChar,
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown password rule id: {0}")]
pub struct UnknownRuleError(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    MinLength,
    Digit,
    Uppercase,
    SpecialChar,
}

impl PasswordRule {
    /// Stable identifier, never reused.
    pub const fn id(self) -> u8 {
        match self {
            Self::MinLength => 1,
            Self::Digit => 2,
            Self::Uppercase => 3,
            Self::SpecialChar => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinLength => "Must contain at least 8 characters.",
            Self::Digit => "Must contain at least 1 number.",
            Self::Uppercase => "Must contain at least 1 uppercase letter.",
            Self::SpecialChar => "Must contain at least 1 special character.",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        RULE_SET.iter().copied().find(|rule| rule.id() == id)
    }

    /// Runs the rule's predicate against `password`.
    pub fn is_satisfied_by(self, password: &str) -> bool {
        let check: fn(&str) -> bool = match self {
            Self::MinLength => length_rule,
            Self::Digit => digit_rule,
            Self::Uppercase => uppercase_rule,
            Self::SpecialChar => special_rule,
        };
        check(password)
    }
}

impl TryFrom<u8> for PasswordRule {
    type Error = UnknownRuleError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(UnknownRuleError(id))
    }
}
