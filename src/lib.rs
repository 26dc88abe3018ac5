//! Password checklist library
//!
//! This library scores a password against a fixed checklist of rules and
//! classifies it as weak, medium or strong, with per-rule feedback for
//! live display.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checklist::{evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.strength, StrengthLabel::Strong);
//! println!("{}", evaluation);
//! for (rule, status) in evaluation.feedback() {
//!     println!("{:?} {}", status, rule.label());
//! }
//! ```

// Internal modules
mod evaluator;
#[cfg(feature = "async")]
mod live;
mod rules;
mod strength;

// Public API
pub use evaluator::{EvaluationResult, FeedbackStatus, RuleOutcome, evaluate_password_strength};
pub use rules::{MIN_LENGTH, PasswordRule, RULE_COUNT, RULE_SET, UnknownRuleError};
pub use strength::{ParseStrengthLabelError, STRENGTH_TABLE, StrengthLabel, classify};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};

#[cfg(feature = "async")]
pub use live::LiveEvaluator;
