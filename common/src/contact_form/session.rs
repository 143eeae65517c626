use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::games::{GameBroadcaster, GameStateUpdate, ScheduledTask};
use crate::log;
use super::validate::{ContactFormErrors, validate_contact_form};

pub const SEND_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormStatus {
    Idle,
    Invalid,
    Sending,
    Sent,
}

impl ContactFormStatus {
    pub fn text(&self) -> &'static str {
        match self {
            ContactFormStatus::Idle => "",
            ContactFormStatus::Invalid => "Please check the form: some fields have errors.",
            ContactFormStatus::Sending => "Sending...",
            ContactFormStatus::Sent => "Message sent (simulated).",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormSnapshot {
    pub status: ContactFormStatus,
    pub errors: ContactFormErrors,
    /// Bumped every time the form should be emptied.
    pub reset_token: u64,
}

struct SessionInner {
    status: ContactFormStatus,
    errors: ContactFormErrors,
    reset_token: u64,
    generation: u64,
    send_task: Option<ScheduledTask>,
}

impl SessionInner {
    fn snapshot(&self) -> ContactFormSnapshot {
        ContactFormSnapshot {
            status: self.status,
            errors: self.errors.clone(),
            reset_token: self.reset_token,
        }
    }
}

#[derive(Clone)]
pub struct ContactFormSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    broadcaster: B,
}

impl<B: GameBroadcaster> ContactFormSession<B> {
    pub fn new(broadcaster: B) -> Self {
        let inner = SessionInner {
            status: ContactFormStatus::Idle,
            errors: ContactFormErrors::default(),
            reset_token: 0,
            generation: 0,
            send_task: None,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> ContactFormSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn publish(&self) {
        let inner = self.inner.lock().await;
        self.broadcast(&inner).await;
    }

    /// Returns `true` when the submission was accepted for sending.
    pub async fn submit(&self, name: &str, email: &str, message: &str) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.status == ContactFormStatus::Sending {
            return false;
        }

        inner.errors = validate_contact_form(name, email, message);
        if !inner.errors.is_empty() {
            inner.status = ContactFormStatus::Invalid;
            self.broadcast(&inner).await;
            return false;
        }

        inner.status = ContactFormStatus::Sending;
        self.schedule_send(&mut inner);
        self.broadcast(&inner).await;
        true
    }

    /// Drops a pending send and clears the form.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        if let Some(task) = inner.send_task.take() {
            task.cancel();
        }
        inner.status = ContactFormStatus::Idle;
        inner.errors = ContactFormErrors::default();
        inner.reset_token += 1;
        self.broadcast(&inner).await;
    }

    fn schedule_send(&self, inner: &mut SessionInner) {
        let session = self.clone();
        let generation = inner.generation;
        let task = ScheduledTask::after(SEND_DELAY, async move {
            session.complete_send(generation).await;
        });
        inner.send_task = Some(task);
    }

    async fn complete_send(&self, generation: u64) {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return;
        }
        if let Some(task) = inner.send_task.take() {
            task.detach();
        }
        inner.status = ContactFormStatus::Sent;
        inner.reset_token += 1;
        log!("[contact] Message sent");
        self.broadcast(&inner).await;
    }

    async fn broadcast(&self, inner: &SessionInner) {
        self.broadcaster
            .broadcast_state(GameStateUpdate::ContactForm(inner.snapshot()))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::test_support::RecordingBroadcaster;

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submission_reports_errors() {
        let broadcaster = RecordingBroadcaster::default();
        let session = ContactFormSession::new(broadcaster.clone());

        assert!(!session.submit("", "nope", "hi").await);
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, ContactFormStatus::Invalid);
        assert!(snapshot.errors.name.is_some());
        assert_eq!(snapshot.reset_token, 0);
        assert_eq!(broadcaster.state_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_submission_sends_after_delay() {
        let broadcaster = RecordingBroadcaster::default();
        let session = ContactFormSession::new(broadcaster.clone());

        assert!(session.submit("Ann", "ann@site.com", "A long enough message").await);
        assert_eq!(session.snapshot().await.status, ContactFormStatus::Sending);
        assert!(!session.submit("Ann", "ann@site.com", "A long enough message").await);

        tokio::time::sleep(Duration::from_millis(599)).await;
        assert_eq!(session.snapshot().await.status, ContactFormStatus::Sending);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, ContactFormStatus::Sent);
        assert_eq!(snapshot.reset_token, 1);
        assert!(snapshot.errors.is_empty());
        assert!(matches!(
            broadcaster.last_state(),
            Some(GameStateUpdate::ContactForm(ContactFormSnapshot {
                status: ContactFormStatus::Sent,
                ..
            }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_after_fixing_errors() {
        let session = ContactFormSession::new(RecordingBroadcaster::default());
        session.submit("Ann", "ann@site", "A long enough message").await;
        assert!(session.submit("Ann", "ann@site.com", "A long enough message").await);
        assert!(session.snapshot().await.errors.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_send() {
        let session = ContactFormSession::new(RecordingBroadcaster::default());
        session.submit("Ann", "ann@site.com", "A long enough message").await;
        session.reset().await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, ContactFormStatus::Idle);
        assert_eq!(snapshot.reset_token, 1);
    }
}
