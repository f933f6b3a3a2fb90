//! MomentBoard Reconciliation
//!
//! Turns draft submissions into gateway calls and keeps the displayed list in
//! step with the server.
//!
//! ## Data Flow
//!
//! 1. Field edits mutate the drafts in the store
//! 2. A submission calls the gateway
//! 3. Moment create/update patches the list locally (append / replace)
//! 4. A full list fetch then replaces the list wholesale
//!
//! Deletion filters the list without refetching; comment creation only
//! refetches. Failures are logged and recorded in
//! [`BoardState::last_error`]; nothing is retried or rolled back.
//!
//! Two actions may overlap at the network layer. Whichever refetch lands last
//! decides what is displayed.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::draft::{DraftError, Submission};
use crate::gateway::{MomentGateway, TransportError};
use crate::labels::BoardSettings;
use crate::model::{Moment, MomentId};
use crate::state::{BoardState, BoardStore};

/// Store used when the board owns its state outright
pub type LocalStore = Rc<RefCell<BoardState>>;

/// The Moments board controller
pub struct MomentBoard<G, S = LocalStore> {
    gateway: G,
    store: S,
}

impl<G: MomentGateway> MomentBoard<G> {
    /// Board with a fresh, privately held state
    pub fn new(gateway: G, settings: BoardSettings) -> Self {
        Self::with_store(gateway, Rc::new(RefCell::new(BoardState::new(settings))))
    }
}

impl<G: MomentGateway, S: BoardStore> MomentBoard<G, S> {
    /// Board driving an externally owned store (e.g. a UI signal)
    pub fn with_store(gateway: G, store: S) -> Self {
        Self { gateway, store }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Clone of the current view state
    pub fn state(&self) -> BoardState {
        self.store.snapshot()
    }

    pub fn moments(&self) -> Vec<Moment> {
        self.store.read(|s| s.moments.clone())
    }

    pub fn settings(&self) -> BoardSettings {
        self.store.read(|s| s.settings)
    }

    // ============ Drafts ============

    pub fn update_moment_field(&self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let value = value.into();
        self.store.write(|s| s.moment_draft.update_field(name, value))
    }

    pub fn update_comment_field(&self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let value = value.into();
        self.store.write(|s| s.comment_draft.update_field(name, value))
    }

    /// Set the draft image to an already encoded data URI (or clear it)
    pub fn set_moment_image(&self, image: Option<String>) {
        self.store.write(|s| s.moment_draft.set_image(image));
    }

    /// Read an image file and attach it to the moment draft once encoded
    #[cfg(feature = "native")]
    pub async fn attach_image(&self, path: &std::path::Path) -> Result<(), crate::image::ImageError> {
        let uri = crate::image::load_image(path).await?;
        self.set_moment_image(Some(uri));
        Ok(())
    }

    pub fn set_comment_rating(&self, rate: Option<u8>) {
        self.store.write(|s| s.comment_draft.set_rating(rate));
    }

    pub fn load_moment_for_edit(&self, moment: &Moment) {
        self.store.write(|s| s.moment_draft.load_for_edit(moment));
    }

    /// Load the listed moment with `id` into the draft; `false` if not listed
    pub fn edit_moment(&self, id: MomentId) -> bool {
        self.store.write(|s| match s.find_moment(id).cloned() {
            Some(moment) => {
                s.moment_draft.load_for_edit(&moment);
                true
            }
            None => false,
        })
    }

    pub fn reset_moment_draft(&self) {
        self.store.write(BoardState::reset_moment_draft);
    }

    pub fn reset_comment_draft(&self) {
        self.store.write(BoardState::reset_comment_draft);
    }

    // ============ Reconciliation ============

    /// Initial load. On failure the list stays as it was (empty on a fresh board).
    pub async fn mount(&self) -> Result<usize, TransportError> {
        tracing::info!("Mounting moment board");
        self.refresh().await
    }

    /// Replace the list with the server's; returns the number of moments
    pub async fn refresh(&self) -> Result<usize, TransportError> {
        match self.tracked(self.gateway.list_moments()).await {
            Ok(moments) => {
                let count = moments.len();
                self.store.write(|s| {
                    s.replace_moments(moments);
                    s.clear_error();
                });
                tracing::debug!(count, "Moment list refreshed");
                Ok(count)
            }
            Err(e) => Err(self.fail("list moments", e)),
        }
    }

    /// Submit the moment draft: create when its id is 0, update otherwise
    pub async fn submit_moment(&self) -> Result<Moment, TransportError> {
        let submission = self.store.read(|s| s.moment_draft.submission());

        let saved = match submission {
            Submission::Create(payload) => {
                let created = self
                    .tracked(self.gateway.create_moment(&payload))
                    .await
                    .map_err(|e| self.fail("create moment", e))?;

                tracing::info!(moment_id = created.id, "Created moment");
                self.store.write(|s| {
                    s.append_moment(created.clone());
                    s.reset_moment_draft();
                    s.clear_error();
                });
                created
            }
            Submission::Update(id, payload) => {
                let updated = self
                    .tracked(self.gateway.update_moment(id, &payload))
                    .await
                    .map_err(|e| self.fail("update moment", e))?;

                tracing::info!(moment_id = id, "Updated moment");
                let replaced = self.store.write(|s| {
                    let replaced = s.replace_moment(id, updated.clone());
                    s.reset_moment_draft();
                    s.clear_error();
                    replaced
                });
                if !replaced {
                    tracing::debug!(moment_id = id, "Updated moment not in local list");
                }
                updated
            }
        };

        self.reconcile().await;
        Ok(saved)
    }

    /// Delete a moment; on success every listed entry with that id is dropped
    pub async fn delete_moment(&self, id: MomentId) -> Result<usize, TransportError> {
        self.tracked(self.gateway.delete_moment(id))
            .await
            .map_err(|e| self.fail("delete moment", e))?;

        let removed = self.store.write(|s| {
            s.clear_error();
            s.remove_moment(id)
        });
        tracing::info!(moment_id = id, removed, "Deleted moment");
        Ok(removed)
    }

    /// Submit the comment draft under `moment_id`, then refetch so the new
    /// comment arrives through server state
    pub async fn submit_comment(&self, moment_id: MomentId) -> Result<(), TransportError> {
        let payload = self.store.write(|s| {
            s.comment_draft.bind(moment_id);
            s.comment_draft.payload_for(moment_id, s.settings.ratings_enabled)
        });

        self.tracked(self.gateway.create_comment(moment_id, &payload))
            .await
            .map_err(|e| self.fail("create comment", e))?;

        tracing::info!(moment_id, "Added comment");
        self.store.write(|s| {
            s.reset_comment_draft();
            s.clear_error();
        });

        self.reconcile().await;
        Ok(())
    }

    /// Refetch after a successful mutation. A failure here is logged and
    /// recorded but does not undo the mutation.
    async fn reconcile(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!("Reconciliation skipped, list may be stale: {}", e);
        }
    }

    /// Run a gateway call while counting it as in flight
    async fn tracked<T, F>(&self, call: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        self.store.write(|s| s.pending += 1);
        let result = call.await;
        self.store.write(|s| s.pending = s.pending.saturating_sub(1));
        result
    }

    fn fail(&self, operation: &str, error: TransportError) -> TransportError {
        tracing::error!(operation, error = %error, "Moment API call failed");
        self.store
            .write(|s| s.record_error(format!("Failed to {}: {}", operation, error)));
        error
    }
}
