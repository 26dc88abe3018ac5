//! Debounced live evaluation for input boxes.
//!
//! Every keystroke submits the whole candidate. A submission cancels the
//! one still waiting out its debounce, so only the latest candidate is
//! evaluated and delivered when typing is fast.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::evaluator::{EvaluationResult, evaluate_password_strength_tx};

pub struct LiveEvaluator {
    tx: mpsc::Sender<EvaluationResult>,
    pending: Option<CancellationToken>,
}

impl LiveEvaluator {
    pub fn new(tx: mpsc::Sender<EvaluationResult>) -> Self {
        Self { tx, pending: None }
    }

    /// Schedules an evaluation of `candidate`, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, candidate: SecretString) {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let tx = self.tx.clone();
        tokio::spawn(async move {
            evaluate_password_strength_tx(&candidate, token.clone(), tx).await;
            // Retire the token so a finished evaluation is no longer pending.
            token.cancel();
        });
    }

    /// Drops the pending evaluation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Cancelling pending password evaluation");
            token.cancel();
        }
    }

    /// True from a submission until its result is delivered, or until it is
    /// cancelled or superseded.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for LiveEvaluator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::DEBOUNCE;
    use crate::strength::StrengthLabel;
    use secrecy::ExposeSecret;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_submission_is_delivered() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx);

        live.submit(secret("Abcdefg1"));

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength, StrengthLabel::Medium);
        assert_eq!(evaluation.candidate().expose_secret(), "Abcdefg1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_submission_is_delivered() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx);

        live.submit(secret("A"));
        live.submit(secret("Abcdefg"));
        live.submit(secret("Abcdefg1!"));

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.candidate().expose_secret(), "Abcdefg1!");
        assert_eq!(evaluation.strength, StrengthLabel::Strong);

        drop(live);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_pending_after_delivery() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx);

        live.submit(secret("abc"));
        assert!(live.has_pending());

        rx.recv().await.expect("Should receive evaluation");
        assert!(!live.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_result_behind_slow_receiver_is_dropped() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut live = LiveEvaluator::new(tx);

        // "a" fills the only slot, "ab" then waits for capacity.
        live.submit(secret("a"));
        tokio::time::sleep(DEBOUNCE * 2).await;
        live.submit(secret("ab"));
        tokio::time::sleep(DEBOUNCE * 2).await;
        live.submit(secret("abc"));

        let mut delivered = Vec::new();
        while delivered.len() < 2 {
            let evaluation = rx.recv().await.expect("Should receive evaluation");
            delivered.push(evaluation.candidate().expose_secret().to_string());
        }
        drop(live);
        assert!(rx.recv().await.is_none());

        assert_eq!(delivered, vec!["a", "abc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut live = LiveEvaluator::new(tx);

        live.submit(secret("Abcdefg1!"));
        assert!(live.has_pending());

        live.cancel();
        assert!(!live.has_pending());

        drop(live);
        assert!(rx.recv().await.is_none());
    }
}
