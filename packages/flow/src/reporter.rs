//! Outcome reporter: the single transient notice a flow shows.

/// Identity of one shown notice, used to guard its hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

/// Holds at most one notice. A newer notice replaces the old one, and the old
/// one's hide timer then no longer matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeReporter {
    current: Option<Notice>,
    next: u64,
}

impl OutcomeReporter {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.show(NoticeKind::Error, message.into())
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.show(NoticeKind::Success, message.into())
    }

    /// Hide the notice `id`, if it is still the one showing.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Hide the current notice if it is an error (user resumed typing).
    pub fn dismiss_error(&mut self) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.kind == NoticeKind::Error)
        {
            self.current = None;
            return true;
        }
        false
    }

    fn show(&mut self, kind: NoticeKind, message: String) -> NoticeId {
        let id = NoticeId(self.next);
        self.next = self.next.wrapping_add(1);
        self.current = Some(Notice { id, kind, message });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_only_matching_notice() {
        let mut reporter = OutcomeReporter::default();
        let old = reporter.error("first");
        let new = reporter.error("second");
        assert!(!reporter.expire(old));
        assert_eq!(reporter.current().unwrap().message, "second");
        assert!(reporter.expire(new));
        assert!(reporter.current().is_none());
    }

    #[test]
    fn test_dismiss_error_keeps_success() {
        let mut reporter = OutcomeReporter::default();
        reporter.success("done");
        assert!(!reporter.dismiss_error());
        assert!(reporter.current().is_some());
        reporter.error("oops");
        assert!(reporter.dismiss_error());
        assert!(reporter.current().is_none());
    }
}
