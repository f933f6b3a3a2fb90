//! Domain Types
//!
//! Moments and comments as the Moments API serves them, plus the request
//! bodies sent back to it.

use serde::{Deserialize, Serialize};

/// Server-assigned moment identifier. `0` means "not created yet".
pub type MomentId = u64;

/// Server-assigned comment identifier.
pub type CommentId = u64;

/// Sentinel id carried by a moment that has not been persisted.
pub const UNSAVED_ID: MomentId = 0;

/// A journal post with optional image and its comments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub id: MomentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Data URI of the attached image, opaque to this client
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub comments: Vec<Comment>,
}

impl Moment {
    /// Whether the server has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Request body for create/update: every field except the id
    pub fn payload(&self) -> MomentPayload {
        MomentPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            comments: self.comments.clone(),
        }
    }
}

/// A reply to a moment, optionally rated 0-5
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub moment_id: MomentId,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Signed so out-of-range server values still deserialize
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,
}

impl Comment {
    /// Request body for comment creation: every field except the id
    pub fn payload(&self) -> CommentPayload {
        CommentPayload {
            username: self.username.clone(),
            text: self.text.clone(),
            moment_id: self.moment_id,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            rate: self.rate,
        }
    }
}

/// Body of `POST /moments` and `PUT /moments/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentPayload {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub comments: Vec<Comment>,
}

impl MomentPayload {
    /// Attach an id, producing the moment this payload describes
    pub fn into_moment(self, id: MomentId) -> Moment {
        Moment {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
            comments: self.comments,
        }
    }
}

/// Body of `POST /moments/{id}/comments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub username: String,
    pub text: String,
    pub moment_id: MomentId,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,
}

impl CommentPayload {
    /// Attach an id, producing the comment this payload describes
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            username: self.username,
            text: self.text,
            moment_id: self.moment_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            rate: self.rate,
        }
    }
}

/// Envelope of `GET /moments`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MomentList {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub data: Vec<Moment>,
}

/// Treat `null` like a missing array
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_deserialize_minimal() {
        let moment: Moment = serde_json::from_str(r#"{"id": 3, "title": "Trip"}"#).unwrap();
        assert_eq!(moment.id, 3);
        assert_eq!(moment.title, "Trip");
        assert!(moment.image.is_none());
        assert!(moment.comments.is_empty());
    }

    #[test]
    fn test_moment_null_comments() {
        let moment: Moment =
            serde_json::from_str(r#"{"id": 3, "image": null, "comments": null}"#).unwrap();
        assert!(moment.comments.is_empty());
    }

    #[test]
    fn test_payload_omits_id() {
        let moment = Moment {
            id: 7,
            title: "Trip".to_string(),
            description: "Beach day".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(moment.payload()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Trip");
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["comments"], serde_json::json!([]));
    }

    #[test]
    fn test_comment_payload_without_rate() {
        let payload = CommentPayload {
            username: "ana".to_string(),
            text: "nice".to_string(),
            moment_id: 7,
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("rate").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["moment_id"], 7);
    }

    #[test]
    fn test_comment_out_of_range_rate() {
        let comment: Comment =
            serde_json::from_str(r#"{"id": 1, "username": "ana", "text": "x", "moment_id": 7, "rate": 6}"#)
                .unwrap();
        assert_eq!(comment.rate, Some(6));
    }

    #[test]
    fn test_moment_list_envelope() {
        let list: MomentList = serde_json::from_str(
            r#"{"data": [{"id": 1, "title": "a", "comments": [{"id": 2, "moment_id": 1}]}]}"#,
        )
        .unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].comments[0].moment_id, 1);
    }
}
