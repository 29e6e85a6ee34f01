//! Single-shot confirmation dialogs.
//!
//! An operation that needs the user's consent calls [`request`], shows the
//! prompt, and awaits the returned [`Decision`]. Whoever handles the dialog
//! resolves the [`ConfirmationRequest`] exactly once. Dropping the request
//! without answering counts as a refusal.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

/// The pending side of a dialog, held by whatever renders it.
#[derive(Debug)]
pub struct ConfirmationRequest {
    prompt: String,
    responder: oneshot::Sender<bool>,
}

/// Resolves to the user's answer.
#[derive(Debug)]
pub struct Decision {
    receiver: oneshot::Receiver<bool>,
}

/// Open a dialog with the given prompt.
#[must_use]
pub fn request(prompt: impl Into<String>) -> (ConfirmationRequest, Decision) {
    let (responder, receiver) = oneshot::channel();
    (
        ConfirmationRequest {
            prompt: prompt.into(),
            responder,
        },
        Decision { receiver },
    )
}

impl ConfirmationRequest {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer the dialog.
    pub fn resolve(self, confirmed: bool) {
        // The waiting operation may have been abandoned; nothing to tell it then.
        let _ = self.responder.send(confirmed);
    }

    pub fn confirm(self) {
        self.resolve(true);
    }

    pub fn cancel(self) {
        self.resolve(false);
    }
}

impl Decision {
    /// A decision that is already made, for callers that skip the dialog.
    #[must_use]
    pub fn immediate(confirmed: bool) -> Self {
        let (request, decision) = request("");
        request.resolve(confirmed);
        decision
    }
}

impl Future for Decision {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_confirm_resolves_true() {
        let (req, decision) = request("Delete 'Hello'?");
        assert_eq!(req.prompt(), "Delete 'Hello'?");
        req.confirm();
        assert!(decision.await);
    }

    #[tokio::test]
    async fn test_cancel_resolves_false() {
        let (req, decision) = request("Delete?");
        req.cancel();
        assert!(!decision.await);
    }

    #[tokio::test]
    async fn test_dropped_request_is_refusal() {
        let (req, decision) = request("Delete?");
        drop(req);
        assert!(!decision.await);
    }

    #[tokio::test]
    async fn test_decision_waits_for_answer() {
        let (req, decision) = request("Delete?");
        let waiter = tokio::spawn(decision);
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());
        req.confirm();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_immediate() {
        assert!(Decision::immediate(true).await);
        assert!(!Decision::immediate(false).await);
    }
}
