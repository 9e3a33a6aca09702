//! The single entity being edited by a controller.

/// Whether saving the session creates or updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Adding,
    Editing,
}

/// An independent working copy of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T> {
    draft: T,
    mode: EditMode,
}

impl<T> EditSession<T> {
    pub fn new(draft: T, mode: EditMode) -> Self {
        Self { draft, mode }
    }

    pub fn adding(draft: T) -> Self {
        Self::new(draft, EditMode::Adding)
    }

    pub fn editing(draft: T) -> Self {
        Self::new(draft, EditMode::Editing)
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn into_draft(self) -> T {
        self.draft
    }
}
