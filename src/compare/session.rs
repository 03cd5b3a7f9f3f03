//! Comparison state machine.
//!
//! Two states, `Inactive` and `Active`. Toggling on computes the diff
//! immediately; edits while active recompute; toggling off or switching
//! language resets to `Inactive` and drops the last result. The session is
//! pure over line slices so it can be driven without a terminal; applying
//! markers to editors is the caller's job.

use tracing::debug;

use super::diff::{diff_lines_with, DiffPolicy, LineDiff};

/// Whether live comparison is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Markers cleared; edits are observed but not recomputed.
    #[default]
    Inactive,
    /// Markers live; every edit recomputes the diff.
    Active,
}

/// The comparison session: mode flag plus the most recent diff while active.
#[derive(Debug, Clone, Default)]
pub struct CompareSession {
    mode: CompareMode,
    policy: DiffPolicy,
    last: Option<LineDiff>,
}

impl CompareSession {
    /// New inactive session with the default (positional) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// New inactive session with an explicit diff policy.
    pub const fn with_policy(policy: DiffPolicy) -> Self {
        Self {
            mode: CompareMode::Inactive,
            policy,
            last: None,
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> CompareMode {
        self.mode
    }

    /// True while comparison is live.
    pub const fn is_active(&self) -> bool {
        matches!(self.mode, CompareMode::Active)
    }

    /// The most recently computed diff, present only while active.
    pub const fn last_diff(&self) -> Option<&LineDiff> {
        self.last.as_ref()
    }

    /// Toggle comparison on or off.
    ///
    /// Activating computes the diff immediately and returns it; deactivating
    /// returns `None` and the caller clears all markers.
    pub fn toggle(&mut self, left: &[String], right: &[String]) -> Option<&LineDiff> {
        match self.mode {
            CompareMode::Inactive => {
                self.mode = CompareMode::Active;
                self.last = Some(diff_lines_with(left, right, self.policy));
                debug!(policy = ?self.policy, "comparison activated");
                self.last.as_ref()
            }
            CompareMode::Active => {
                self.reset();
                None
            }
        }
    }

    /// Handle a content-change notification.
    ///
    /// While active, recomputes against the buffers as of this notification
    /// and returns the fresh diff. While inactive, the edit is observed but
    /// produces nothing.
    pub fn on_edit(&mut self, left: &[String], right: &[String]) -> Option<&LineDiff> {
        if self.is_active() {
            self.last = Some(diff_lines_with(left, right, self.policy));
            self.last.as_ref()
        } else {
            None
        }
    }

    /// Force the session back to `Inactive`, dropping the last diff.
    ///
    /// Used on toggle-off and on language change.
    pub fn reset(&mut self) {
        if self.is_active() {
            debug!("comparison deactivated");
        }
        self.mode = CompareMode::Inactive;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_starts_inactive_with_no_diff() {
        let session = CompareSession::new();
        assert_eq!(session.mode(), CompareMode::Inactive);
        assert!(session.last_diff().is_none());
    }

    #[test]
    fn test_toggle_on_computes_immediately() {
        let mut session = CompareSession::new();
        let l = lines(&["a", "b"]);
        let r = lines(&["a", "x"]);

        let diff = session.toggle(&l, &r).expect("activation returns a diff");
        assert_eq!(diff.left, BTreeSet::from([1]));
        assert!(session.is_active());
    }

    #[test]
    fn test_toggle_off_clears_state() {
        let mut session = CompareSession::new();
        let l = lines(&["a"]);
        let r = lines(&["b"]);

        session.toggle(&l, &r);
        assert!(session.toggle(&l, &r).is_none());
        assert!(!session.is_active());
        assert!(session.last_diff().is_none());
    }

    #[test]
    fn test_edit_while_active_recomputes() {
        let mut session = CompareSession::new();
        let l = lines(&["a", "b"]);
        let r = lines(&["a", "b"]);
        session.toggle(&l, &r);
        assert!(session.last_diff().unwrap().is_empty());

        let r = lines(&["a", "changed"]);
        let diff = session.on_edit(&l, &r).expect("active edits recompute");
        assert_eq!(diff.right, BTreeSet::from([1]));
    }

    #[test]
    fn test_edit_while_inactive_is_observed_but_ignored() {
        let mut session = CompareSession::new();
        let l = lines(&["a"]);
        let r = lines(&["b"]);
        assert!(session.on_edit(&l, &r).is_none());
        assert!(session.last_diff().is_none());
    }

    #[test]
    fn test_retoggle_reproduces_identical_diff() {
        let mut session = CompareSession::new();
        let l = lines(&["a", "b", "c"]);
        let r = lines(&["a", "x", "c"]);

        let first = session.toggle(&l, &r).unwrap().clone();
        session.toggle(&l, &r); // off
        let second = session.toggle(&l, &r).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_from_active() {
        let mut session = CompareSession::new();
        let l = lines(&["a"]);
        session.toggle(&l, &l.clone());
        session.reset();
        assert!(!session.is_active());
        assert!(session.last_diff().is_none());
    }

    #[test]
    fn test_aligned_policy_flows_through() {
        let mut session = CompareSession::with_policy(DiffPolicy::Aligned);
        let l = lines(&["a", "b", "c"]);
        let r = lines(&["a", "new", "b", "c"]);

        let diff = session.toggle(&l, &r).unwrap();
        assert!(diff.left.is_empty());
        assert_eq!(diff.right, BTreeSet::from([1]));
    }
}
