//! Draft Buffers
//!
//! One editable moment and one editable comment. Fields are merged by name,
//! the way form inputs report them; values are never validated.

use crate::model::{Comment, CommentPayload, Moment, MomentId, MomentPayload, UNSAVED_ID};

/// Errors raised by draft field updates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Unknown field '{0}'")]
    UnknownField(String),
}

/// What submitting the moment draft will do
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(MomentPayload),
    Update(MomentId, MomentPayload),
}

/// The moment being composed or edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentDraft {
    moment: Moment,
}

impl MomentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moment(&self) -> &Moment {
        &self.moment
    }

    pub fn id(&self) -> MomentId {
        self.moment.id
    }

    /// Whether submission updates an existing moment
    pub fn is_editing(&self) -> bool {
        self.moment.id != UNSAVED_ID
    }

    /// Merge one named text field into the draft
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let slot = match name {
            "title" => &mut self.moment.title,
            "description" => &mut self.moment.description,
            other => return Err(DraftError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Replace the image with an encoded payload, or clear it
    pub fn set_image(&mut self, image: Option<String>) {
        self.moment.image = image;
    }

    /// Load a persisted moment; its nonzero id switches submission to update
    pub fn load_for_edit(&mut self, moment: &Moment) {
        self.moment = moment.clone();
    }

    pub fn reset(&mut self) {
        self.moment = Moment::default();
    }

    pub fn submission(&self) -> Submission {
        let payload = self.moment.payload();
        if self.is_editing() {
            Submission::Update(self.moment.id, payload)
        } else {
            Submission::Create(payload)
        }
    }
}

/// The comment being composed, shared by every moment's comment form
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    comment: Comment,
}

impl CommentDraft {
    /// Empty draft; rated boards start at 0, unrated ones carry no rating
    pub fn new(ratings_enabled: bool) -> Self {
        Self {
            comment: Comment {
                rate: ratings_enabled.then_some(0),
                ..Default::default()
            },
        }
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// Merge one named field into the draft
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let slot = match name {
            "username" => &mut self.comment.username,
            "text" => &mut self.comment.text,
            other => return Err(DraftError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Point the draft at the moment whose form is being submitted
    pub fn bind(&mut self, moment_id: MomentId) {
        self.comment.moment_id = moment_id;
    }

    /// Store the picked rating; a cleared picker counts as 0
    pub fn set_rating(&mut self, rate: Option<u8>) {
        self.comment.rate = Some(i64::from(rate.unwrap_or(0)));
    }

    pub fn reset(&mut self, ratings_enabled: bool) {
        *self = Self::new(ratings_enabled);
    }

    /// Request body bound to `moment_id`, whatever foreign key the draft held
    pub fn payload_for(&self, moment_id: MomentId, ratings_enabled: bool) -> CommentPayload {
        let mut payload = self.comment.payload();
        payload.moment_id = moment_id;
        payload.rate = if ratings_enabled {
            Some(payload.rate.unwrap_or(0))
        } else {
            None
        };
        payload
    }
}

impl Default for CommentDraft {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted() -> Moment {
        Moment {
            id: 7,
            title: "Trip".to_string(),
            description: "Beach day".to_string(),
            image: Some("data:image/png;base64,AAAA".to_string()),
            created_at: "t1".to_string(),
            updated_at: "t1".to_string(),
            comments: vec![],
        }
    }

    #[test]
    fn test_empty_draft_creates() {
        let mut draft = MomentDraft::new();
        draft.update_field("title", "Trip").unwrap();
        draft.update_field("description", "Beach day").unwrap();

        match draft.submission() {
            Submission::Create(payload) => {
                assert_eq!(payload.title, "Trip");
                assert_eq!(payload.description, "Beach day");
                assert!(payload.image.is_none());
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_leaves_draft() {
        let mut draft = MomentDraft::new();
        let err = draft.update_field("id", "9").unwrap_err();
        assert_eq!(err, DraftError::UnknownField("id".to_string()));
        assert_eq!(draft, MomentDraft::new());
    }

    #[test]
    fn test_load_for_edit_updates_with_same_fields() {
        let moment = persisted();
        let mut draft = MomentDraft::new();
        draft.load_for_edit(&moment);

        assert!(draft.is_editing());
        assert_eq!(draft.submission(), Submission::Update(7, moment.payload()));
    }

    #[test]
    fn test_load_for_edit_last_write_wins() {
        let mut draft = MomentDraft::new();
        draft.update_field("title", "unsaved").unwrap();
        draft.load_for_edit(&persisted());

        let other = Moment {
            id: 9,
            title: "Other".to_string(),
            ..Default::default()
        };
        draft.load_for_edit(&other);
        assert_eq!(draft.id(), 9);
        assert_eq!(draft.moment().title, "Other");
    }

    #[test]
    fn test_reset_restores_zero_value() {
        let mut draft = MomentDraft::new();
        draft.load_for_edit(&persisted());
        draft.reset();
        assert_eq!(draft.id(), 0);
        assert!(draft.moment().title.is_empty());
        assert!(draft.moment().image.is_none());
    }

    #[test]
    fn test_comment_foreign_key_overwritten() {
        let mut draft = CommentDraft::new(true);
        draft.comment.moment_id = 3;
        draft.update_field("username", "ana").unwrap();
        draft.update_field("text", "nice").unwrap();
        draft.set_rating(Some(4));

        let payload = draft.payload_for(7, true);
        assert_eq!(payload.moment_id, 7);
        assert_eq!(payload.rate, Some(4));
        assert_eq!(payload.username, "ana");
    }

    #[test]
    fn test_bind_sets_foreign_key() {
        let mut draft = CommentDraft::new(false);
        draft.bind(12);
        assert_eq!(draft.comment().moment_id, 12);
    }

    #[test]
    fn test_cleared_rating_is_zero() {
        let mut draft = CommentDraft::new(true);
        draft.set_rating(Some(3));
        draft.set_rating(None);
        assert_eq!(draft.comment().rate, Some(0));
    }

    #[test]
    fn test_unrated_payload_has_no_rate() {
        let mut draft = CommentDraft::new(false);
        assert_eq!(draft.comment().rate, None);
        draft.set_rating(Some(5));
        assert_eq!(draft.payload_for(1, false).rate, None);
    }
}
