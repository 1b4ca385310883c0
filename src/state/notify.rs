//! Transient notice state for surfacing request outcomes.
//!
//! DESIGN
//! ======
//! Every network failure surfaces as a dismissible notice rather than a fatal
//! error; the user can always retry the action. Partial failures (bulk delete
//! leftovers, rejected CSV rows) use the warning kind so they read differently
//! from outright failures. The list is bounded so a flapping backend cannot
//! grow it without limit.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Maximum notices retained at once; older ones are evicted first.
pub const NOTICE_CAP: usize = 5;

/// Visual category of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    /// Partial failure inside a nominally successful response.
    Warning,
    Error,
}

/// One transient notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Bounded queue of live notices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotifyState {
    next_id: u64,
    pub notices: Vec<Notice>,
}

impl NotifyState {
    /// Append a notice, evicting the oldest once the cap is reached.
    /// Returns the new notice id for targeted dismissal.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.notices.len() >= NOTICE_CAP {
            self.notices.remove(0);
        }
        self.notices.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Warning, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Remove a notice by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
