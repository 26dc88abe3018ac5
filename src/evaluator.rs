//! Password checklist evaluator - runs every rule and classifies the result.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{PasswordRule, RULE_COUNT, RULE_SET};
use crate::strength::{StrengthLabel, classify};

/// Quiet period before an async evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Pass/fail of one rule against the evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: PasswordRule,
    pub passed: bool,
}

/// How a rule line should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStatus {
    /// Nothing typed yet.
    Pending,
    Passed,
    Failed,
}

#[derive(Debug)]
pub struct EvaluationResult {
    candidate: SecretString,
    pub outcomes: Vec<RuleOutcome>,
    pub passed_count: usize,
    pub strength: StrengthLabel,
}

impl EvaluationResult {
    pub fn candidate(&self) -> &SecretString {
        &self.candidate
    }

    /// Per-rule display status, in rule order.
    ///
    /// Every rule is `Pending` while the candidate is empty.
    pub fn feedback(&self) -> impl Iterator<Item = (PasswordRule, FeedbackStatus)> + '_ {
        let empty = self.candidate.expose_secret().is_empty();
        self.outcomes.iter().map(move |outcome| {
            let status = match (empty, outcome.passed) {
                (true, _) => FeedbackStatus::Pending,
                (false, true) => FeedbackStatus::Passed,
                (false, false) => FeedbackStatus::Failed,
            };
            (outcome.rule, status)
        })
    }

    /// Share of satisfied rules, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.passed_count as f64 / RULE_COUNT as f64
    }

    pub fn failed_rules(&self) -> impl Iterator<Item = PasswordRule> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.rule)
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password is {}", self.strength)
    }
}

/// Evaluates the password against every rule and classifies it.
///
/// Pure and total: any string, including the empty one, yields a result.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    let pwd = password.expose_secret();

    let outcomes: Vec<RuleOutcome> = RULE_SET
        .iter()
        .map(|&rule| RuleOutcome {
            rule,
            passed: rule.is_satisfied_by(pwd),
        })
        .collect();

    let passed_count = outcomes.iter().filter(|outcome| outcome.passed).count();
    let strength = classify(passed_count);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: {}/{} rules passed, strength {}",
        passed_count,
        RULE_COUNT,
        strength
    );

    EvaluationResult {
        candidate: SecretString::new(pwd.into()),
        outcomes,
        passed_count,
        strength,
    }
}

/// Async version that sends the evaluation result via channel after
/// [`DEBOUNCE`].
///
/// If `token` is cancelled at any point before the result is handed to the
/// channel, a newer input has superseded this one and nothing is sent. That
/// includes waiting for channel capacity behind a slow receiver.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    let permit = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded while waiting for the receiver");
            return;
        }
        permit = tx.reserve() => permit,
    };

    match permit {
        Ok(permit) if !token.is_cancelled() => permit.send(evaluation),
        Ok(_) => {}
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}
