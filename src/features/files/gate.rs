//! Password gate for protected file actions.
//!
//! A file carrying a password digest requires the caller to present the
//! matching password before any of download, preview, rename or delete runs.
//! The gate owns a single pending-action slot: the slot is always fully
//! replaced or cleared by a transition, never partially updated. Verification
//! strictly precedes dispatch, and a matched submission hands the captured
//! action back to the caller exactly once.

use crate::core::error::AppError;
use crate::features::files::digest::password_digest;
use crate::features::files::models::FileRecord;

/// The four file actions that can sit behind the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Download,
    Preview,
    Rename,
    Delete,
}

/// An action captured while waiting for password confirmation.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub record: FileRecord,
}

/// Outcome of requesting an action through the gate.
#[derive(Debug)]
pub enum RequestOutcome {
    /// The record is not protected: run the action immediately.
    Dispatch(PendingAction),
    /// The record is protected: a password must be submitted first.
    PasswordRequired,
}

/// Outcome of submitting a password for the pending action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Digest matched: run the captured action, exactly once.
    Dispatch(PendingAction),
    /// Digest mismatch: the pending action is retained for a retry.
    IncorrectPassword,
    /// Nothing is awaiting a password.
    NothingPending,
}

/// The gate state machine.
#[derive(Debug, Default)]
pub struct PasswordGate {
    pending: Option<PendingAction>,
}

impl PasswordGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a prompt is currently open.
    #[allow(dead_code)]
    pub fn is_awaiting_password(&self) -> bool {
        self.pending.is_some()
    }

    /// Request an action on a record.
    ///
    /// Unprotected records dispatch immediately and never open a prompt.
    /// Protected records fill the slot and ask for a password. A new request
    /// while a prompt is already open replaces the slot: last request wins,
    /// the abandoned action never runs.
    pub fn request(&mut self, kind: ActionKind, record: FileRecord) -> RequestOutcome {
        let action = PendingAction { kind, record };
        if action.record.password_hash.is_none() {
            self.pending = None;
            RequestOutcome::Dispatch(action)
        } else {
            self.pending = Some(action);
            RequestOutcome::PasswordRequired
        }
    }

    /// Dismiss the prompt without submitting. The captured action never runs.
    #[allow(dead_code)]
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Submit a password for the pending action.
    ///
    /// Computes the digest of the submission and compares it to the stored
    /// one. A mismatch keeps the slot filled so the caller may retry; there
    /// is no attempt counter and no backoff. A match clears the slot and
    /// hands the action back for dispatch.
    pub fn submit(&mut self, password: &str) -> SubmitOutcome {
        let Some(action) = self.pending.take() else {
            return SubmitOutcome::NothingPending;
        };

        let stored = action.record.password_hash.as_deref().unwrap_or_default();
        if password_digest(password) == stored {
            SubmitOutcome::Dispatch(action)
        } else {
            self.pending = Some(action);
            SubmitOutcome::IncorrectPassword
        }
    }
}

/// Drive the gate for a single request cycle.
///
/// A protected record with no password submitted answers with
/// [`AppError::PasswordRequired`] (the prompt), a wrong password with the
/// retryable [`AppError::IncorrectPassword`]. Returns `Ok` only when the
/// requested action may run.
pub fn verify_access(
    record: &FileRecord,
    kind: ActionKind,
    password: Option<&str>,
) -> Result<(), AppError> {
    let mut gate = PasswordGate::new();
    match gate.request(kind, record.clone()) {
        RequestOutcome::Dispatch(_) => Ok(()),
        RequestOutcome::PasswordRequired => {
            let Some(password) = password.filter(|p| !p.is_empty()) else {
                return Err(AppError::PasswordRequired);
            };
            match gate.submit(password) {
                SubmitOutcome::Dispatch(_) => Ok(()),
                SubmitOutcome::IncorrectPassword => Err(AppError::IncorrectPassword),
                SubmitOutcome::NothingPending => Err(AppError::PasswordRequired),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(password: Option<&str>) -> FileRecord {
        FileRecord {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            name: "report.pdf".to_string(),
            description: None,
            size_bytes: 2_400_000,
            content_type: "application/pdf".to_string(),
            encrypted: true,
            file_path: "user-1/report.pdf".to_string(),
            password_hash: password.map(password_digest),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_unprotected_record_dispatches_without_prompt() {
        let mut gate = PasswordGate::new();
        match gate.request(ActionKind::Download, record(None)) {
            RequestOutcome::Dispatch(action) => assert_eq!(action.kind, ActionKind::Download),
            RequestOutcome::PasswordRequired => panic!("unprotected file opened a prompt"),
        }
        assert!(!gate.is_awaiting_password());
    }

    #[test]
    fn test_correct_password_dispatches_exactly_once() {
        let mut gate = PasswordGate::new();
        assert!(matches!(
            gate.request(ActionKind::Download, record(Some("secret"))),
            RequestOutcome::PasswordRequired
        ));

        match gate.submit("secret") {
            SubmitOutcome::Dispatch(action) => assert_eq!(action.kind, ActionKind::Download),
            other => panic!("expected dispatch, got {:?}", other),
        }

        // The slot is cleared: a second submission has nothing to dispatch.
        assert!(matches!(gate.submit("secret"), SubmitOutcome::NothingPending));
        assert!(!gate.is_awaiting_password());
    }

    #[test]
    fn test_wrong_password_keeps_prompt_open_for_retry() {
        let mut gate = PasswordGate::new();
        gate.request(ActionKind::Delete, record(Some("secret")));

        assert!(matches!(gate.submit("wrong"), SubmitOutcome::IncorrectPassword));
        assert!(gate.is_awaiting_password());

        // Retry with the right password still dispatches the original action.
        match gate.submit("secret") {
            SubmitOutcome::Dispatch(action) => assert_eq!(action.kind, ActionKind::Delete),
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_discards_pending_action() {
        let mut gate = PasswordGate::new();
        gate.request(ActionKind::Preview, record(Some("secret")));
        gate.cancel();

        assert!(!gate.is_awaiting_password());
        assert!(matches!(gate.submit("secret"), SubmitOutcome::NothingPending));
    }

    #[test]
    fn test_new_request_replaces_pending_action() {
        let mut gate = PasswordGate::new();
        gate.request(ActionKind::Download, record(Some("secret")));
        gate.request(ActionKind::Rename, record(Some("secret")));

        // Last request wins; the abandoned download never runs.
        match gate.submit("secret") {
            SubmitOutcome::Dispatch(action) => assert_eq!(action.kind, ActionKind::Rename),
            other => panic!("expected dispatch, got {:?}", other),
        }
        assert!(matches!(gate.submit("secret"), SubmitOutcome::NothingPending));
    }

    #[test]
    fn test_gated_preview_selects_embedded_viewer() {
        use crate::features::files::classifier::{classify, PreviewKind};
        use crate::features::files::preview::{render, PreviewTarget};

        let mut gate = PasswordGate::new();
        gate.request(ActionKind::Preview, record(Some("1234")));

        let action = match gate.submit("1234") {
            SubmitOutcome::Dispatch(action) => action,
            other => panic!("expected dispatch, got {:?}", other),
        };
        assert_eq!(action.kind, ActionKind::Preview);

        let kind = classify(&action.record.name);
        assert_eq!(kind, PreviewKind::Pdf);

        let response = render(
            PreviewTarget {
                name: action.record.name.clone(),
                url: "http://minio.local/vault/user-1/report.pdf?signed".to_string(),
                content_type: Some(action.record.content_type.clone()),
            },
            kind,
        );
        assert!(response.url.is_some());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_verify_access_unprotected() {
        assert!(verify_access(&record(None), ActionKind::Download, None).is_ok());
    }

    #[test]
    fn test_verify_access_requires_password() {
        let protected = record(Some("secret"));
        assert!(matches!(
            verify_access(&protected, ActionKind::Download, None),
            Err(AppError::PasswordRequired)
        ));
        // An empty submission is not a password.
        assert!(matches!(
            verify_access(&protected, ActionKind::Download, Some("")),
            Err(AppError::PasswordRequired)
        ));
    }

    #[test]
    fn test_verify_access_checks_digest() {
        let protected = record(Some("secret"));
        assert!(matches!(
            verify_access(&protected, ActionKind::Rename, Some("wrong")),
            Err(AppError::IncorrectPassword)
        ));
        assert!(verify_access(&protected, ActionKind::Rename, Some("secret")).is_ok());
    }
}
