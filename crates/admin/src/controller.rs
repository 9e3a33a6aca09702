//! Generic list-edit-save controller.
//!
//! Responsibilities:
//! - Load the full list and expose its filtered, paged view.
//! - Hold at most one edit session (add, edit or copy).
//! - Save and delete through the backend, reloading on success.
//!
//! Does NOT handle:
//! - Rendering or prompting; confirmation is delegated to [`Confirm`].
//!
//! Invariants:
//! - A failed load leaves every piece of state untouched.
//! - A failed save or delete pushes exactly one error toast and keeps the
//!   edit session.
//! - A successful save or delete clears the session and reloads the list
//!   before returning.

use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::CrudBackend;
use crate::confirm::Confirm;
use crate::edit::{EditMode, EditSession};
use crate::entity::AdminEntity;
use crate::error::{AdminError, Result};
use crate::list_view::{ListView, PageState};
use crate::notify::{Toast, Toasts};

/// View model for a list of entities with a single edit draft.
pub struct ListEditController<E: AdminEntity, B> {
    pub(crate) backend: Arc<B>,
    pub(crate) view: ListView<E>,
    pub(crate) session: Option<EditSession<E>>,
    pub(crate) toasts: Toasts,
}

impl<E, B> ListEditController<E, B>
where
    E: AdminEntity,
    B: CrudBackend<E>,
{
    pub fn new(backend: Arc<B>, page: PageState) -> Self {
        Self {
            backend,
            view: ListView::new(page),
            session: None,
            toasts: Toasts::new(),
        }
    }

    pub fn view(&self) -> &ListView<E> {
        &self.view
    }

    pub fn session(&self) -> Option<&EditSession<E>> {
        self.session.as_ref()
    }

    /// The draft of the active session, for in-place edits.
    pub fn draft_mut(&mut self) -> Option<&mut E> {
        self.session.as_mut().map(EditSession::draft_mut)
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    /// Fetches the full list, replacing items and discarding any edit session.
    pub async fn load(&mut self) -> Result<()> {
        match self.backend.list().await {
            Ok(items) => {
                self.session = None;
                self.view.set_items(items);
                Ok(())
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "Failed to load list");
                Err(e.into())
            }
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.view.set_filter(filter);
    }

    pub fn set_page(&mut self, index: usize) {
        self.view.set_page(index);
    }

    pub fn set_page_size(&mut self, size: Option<usize>) {
        self.view.set_page_size(size);
    }

    /// Starts editing a new default entity.
    pub fn begin_add(&mut self) {
        self.session = Some(EditSession::adding(E::default()));
    }

    /// Starts editing a copy of a loaded entity.
    pub fn begin_edit(&mut self, id: &E::Id) -> Result<()> {
        let entity = self.find(id)?.clone();
        self.session = Some(EditSession::editing(entity));
        Ok(())
    }

    /// Starts adding a copy of a loaded entity without its identifier.
    pub fn begin_copy(&mut self, id: &E::Id) -> Result<()> {
        let mut entity = self.find(id)?.clone();
        entity.clear_id();
        self.session = Some(EditSession::adding(entity));
        Ok(())
    }

    /// Discards the edit session.
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Creates or updates the draft, then reloads.
    pub async fn save(&mut self) -> Result<()> {
        let Some(session) = &self.session else {
            return Err(AdminError::NoEditSession);
        };

        let draft = session.draft();
        let result: Result<()> = match (session.mode(), draft.id()) {
            (EditMode::Adding, _) => self
                .backend
                .create(draft)
                .await
                .map(|_| ())
                .map_err(Into::into),
            (EditMode::Editing, Some(id)) => self
                .backend
                .update(&id, draft)
                .await
                .map(|_| ())
                .map_err(Into::into),
            (EditMode::Editing, None) => Err(AdminError::MissingId { label: E::LABEL }),
        };

        match result {
            Ok(()) => {
                info!(entity = E::LABEL, id = ?session.draft().id().map(|i| i.to_string()), "Saved");
                self.session = None;
                self.load().await
            }
            Err(e) => {
                warn!(entity = E::LABEL, error = %e, "Save failed");
                self.toasts.push(save_error_toast::<E>());
                Err(e)
            }
        }
    }

    /// Deletes an entity after confirmation.
    ///
    /// Returns `Ok(false)` when the user declined.
    pub async fn delete(&mut self, id: &E::Id, confirm: &impl Confirm) -> Result<bool> {
        if !confirm
            .confirm(E::DELETE_TITLE, &E::delete_message(id))
            .await
        {
            return Ok(false);
        }

        match self.backend.delete(id).await {
            Ok(()) => {
                info!(entity = E::LABEL, %id, "Deleted");
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                warn!(entity = E::LABEL, %id, error = %e, "Delete failed");
                self.toasts.push(save_error_toast::<E>());
                Err(e.into())
            }
        }
    }

    pub(crate) fn find(&self, id: &E::Id) -> Result<&E> {
        self.view
            .find(id)
            .ok_or_else(|| AdminError::not_found(E::LABEL, id))
    }
}

pub(crate) fn save_error_toast<E: AdminEntity>() -> Toast {
    Toast::error(format!("Error saving {}", E::LABEL))
}
