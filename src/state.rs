//! View State
//!
//! The moment list plus the two drafts, owned by whoever drives the board and
//! reached through [`BoardStore`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::draft::{CommentDraft, MomentDraft};
use crate::labels::BoardSettings;
use crate::model::{Moment, MomentId};

/// Everything the board renders from
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    /// Snapshot of the last successful list fetch, plus transient local patches
    pub moments: Vec<Moment>,
    pub moment_draft: MomentDraft,
    pub comment_draft: CommentDraft,
    pub settings: BoardSettings,
    /// Message of the most recent failure, cleared by the next success
    pub last_error: Option<String>,
    /// Gateway calls currently in flight
    pub pending: usize,
}

impl BoardState {
    pub fn new(settings: BoardSettings) -> Self {
        Self {
            moments: Vec::new(),
            moment_draft: MomentDraft::new(),
            comment_draft: CommentDraft::new(settings.ratings_enabled),
            settings,
            last_error: None,
            pending: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Replace the list wholesale with the server's snapshot
    pub fn replace_moments(&mut self, moments: Vec<Moment>) {
        self.moments = moments;
    }

    pub fn append_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    /// Swap the first entry with `id` for `moment`. Returns `false` and leaves
    /// the list alone when no entry matches.
    pub fn replace_moment(&mut self, id: MomentId, moment: Moment) -> bool {
        match self.moments.iter().position(|m| m.id == id) {
            Some(pos) => {
                self.moments[pos] = moment;
                true
            }
            None => false,
        }
    }

    /// Drop every entry with `id`; returns how many were removed
    pub fn remove_moment(&mut self, id: MomentId) -> usize {
        let before = self.moments.len();
        self.moments.retain(|m| m.id != id);
        before - self.moments.len()
    }

    pub fn find_moment(&self, id: MomentId) -> Option<&Moment> {
        self.moments.iter().find(|m| m.id == id)
    }

    pub fn reset_moment_draft(&mut self) {
        self.moment_draft.reset();
    }

    pub fn reset_comment_draft(&mut self) {
        self.comment_draft.reset(self.settings.ratings_enabled);
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardSettings::default())
    }
}

/// Shared access to a [`BoardState`].
///
/// Each call is one atomic mutation; implementations must not be re-entered
/// from inside the closure, and callers never hold access across an await.
pub trait BoardStore {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R;

    fn write<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;

    /// Clone of the current state
    fn snapshot(&self) -> BoardState {
        self.read(BoardState::clone)
    }
}

impl BoardStore for RefCell<BoardState> {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: BoardStore + ?Sized> BoardStore for Rc<T> {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        (**self).write(f)
    }
}

impl<T: BoardStore + ?Sized> BoardStore for &T {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        (**self).write(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(id: MomentId, title: &str) -> Moment {
        Moment {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = BoardState::new(BoardSettings::plain());
        assert!(state.moments.is_empty());
        assert_eq!(state.moment_draft.id(), 0);
        assert_eq!(state.comment_draft.comment().rate, None);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_replace_first_match_only() {
        let mut state = BoardState::default();
        state.replace_moments(vec![moment(1, "a"), moment(2, "b"), moment(2, "c")]);

        assert!(state.replace_moment(2, moment(2, "new")));
        let titles: Vec<_> = state.moments.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "new", "c"]);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut state = BoardState::default();
        state.replace_moments(vec![moment(1, "a")]);

        assert!(!state.replace_moment(5, moment(5, "x")));
        assert_eq!(state.moments, vec![moment(1, "a")]);
    }

    #[test]
    fn test_remove_all_duplicates() {
        let mut state = BoardState::default();
        state.replace_moments(vec![moment(3, "a"), moment(4, "b"), moment(3, "c")]);

        assert_eq!(state.remove_moment(3), 2);
        assert_eq!(state.moments, vec![moment(4, "b")]);
        assert_eq!(state.remove_moment(3), 0);
    }

    #[test]
    fn test_reset_comment_draft_follows_settings() {
        let mut state = BoardState::new(BoardSettings::rated());
        state.comment_draft.set_rating(Some(5));
        state.reset_comment_draft();
        assert_eq!(state.comment_draft.comment().rate, Some(0));
    }

    #[test]
    fn test_refcell_store() {
        let store = Rc::new(RefCell::new(BoardState::default()));
        store.write(|s| s.append_moment(moment(1, "a")));
        assert_eq!(store.read(|s| s.moments.len()), 1);
        assert_eq!(store.snapshot().moments[0].title, "a");
    }
}
