//! Single-slot transient notices.

/// Message kind; selects the banner color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn color(self) -> &'static str {
        match self {
            NoticeKind::Success => "#20B2AA",
            NoticeKind::Error => "#dc3545",
            NoticeKind::Info => "#6c757d",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

/// Holds at most one notice. Showing a new one replaces the old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.current = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the notice `id` if it is still the one showing.
    ///
    /// A late dismissal for a replaced notice leaves the newer one alone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match self.current {
            Some(ref n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut slot = NoticeSlot::default();
        slot.show(NoticeKind::Info, "first");
        slot.show(NoticeKind::Error, "second");

        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NoticeKind::Error);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut slot = NoticeSlot::default();
        let old = slot.show(NoticeKind::Info, "old");
        let new = slot.show(NoticeKind::Success, "new");

        assert!(!slot.dismiss(old));
        assert_eq!(slot.current().unwrap().message, "new");

        assert!(slot.dismiss(new));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(new));
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(NoticeKind::Success.color(), "#20B2AA");
        assert_eq!(NoticeKind::Error.color(), "#dc3545");
        assert_eq!(NoticeKind::Info.color(), "#6c757d");
    }
}
