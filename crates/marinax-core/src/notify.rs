// ── Notification channel ──
//
// Fire-and-forget notices from store operations to whatever surface is
// listening (toast area, CLI printer, test harness). Validation errors
// never flow here -- they stay inline with the offending field.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A user-visible notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

/// Cheaply cloneable handle onto the notice channel.
///
/// Sending is fire-and-forget: a notice emitted while nobody is listening
/// is dropped silently, which is the correct behavior for transient toasts.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to notices. Late subscribers only see notices emitted
    /// after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notice: Notice) {
        let _ = self.tx.send(notice);
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(Notice {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
        });
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(Notice {
            title: title.into(),
            body: body.into(),
            severity: Severity::Success,
        });
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(Notice {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_notice() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.success("Job created", "id j1");

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.title, "Job created");
        assert_eq!(notice.severity, Severity::Success);
    }

    #[test]
    fn send_without_subscribers_is_silent() {
        let notifier = Notifier::new();
        notifier.error("Failed to load jobs", "network down");
    }
}
