//! Message template administration.
//!
//! Responsibilities:
//! - Server-side search with params and paging; params reset the page.
//! - Edit drafts fetched fresh from the server, with script resource paths
//!   held as an ordered, never-empty list of entries.
//! - Category-driven defaults for names and the first resource path.
//!
//! Invariants:
//! - A draft always has at least one path entry and a description per
//!   configured language.
//! - A failed save or delete pushes one "Error saving message template"
//!   toast with a 5 second TTL and keeps the session.

use std::sync::Arc;
use std::time::Duration;

use niord_client::{PagedSearchResult, Template, TemplateDesc, TemplateSearchParams};
use niord_config::ViewConfig;
use serde_json::Value;
use tracing::{info, warn};

use crate::backend::TemplateBackend;
use crate::confirm::Confirm;
use crate::edit::{EditMode, EditSession};
use crate::error::{AdminError, Result};
use crate::list_view::PageState;
use crate::notify::{Toast, Toasts};

const LABEL: &str = "message template";
const ERROR_TOAST_TTL: Duration = Duration::from_secs(5);

/// One entry of the ordered script resource path list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    pub path: String,
}

impl ResourcePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A template being edited, with its paths split out for list editing.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDraft {
    pub template: Template,
    pub paths: Vec<ResourcePath>,
}

impl TemplateDraft {
    fn from_template(mut template: Template, languages: &[String]) -> Self {
        let mut paths: Vec<ResourcePath> = std::mem::take(&mut template.script_resource_paths)
            .into_iter()
            .map(ResourcePath::new)
            .collect();
        if paths.is_empty() {
            paths.push(ResourcePath::default());
        }
        ensure_descs(&mut template, languages);
        Self { template, paths }
    }

    /// The template with its paths serialized back to plain strings.
    pub fn to_template(&self) -> Template {
        let mut template = self.template.clone();
        template.script_resource_paths = self.paths.iter().map(|p| p.path.clone()).collect();
        template
    }

    /// Inserts an empty entry after `index`.
    pub fn add_path(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.paths.insert(index + 1, ResourcePath::default());
        Ok(())
    }

    /// Removes the entry at `index`, keeping at least one entry.
    pub fn delete_path(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.paths.remove(index);
        if self.paths.is_empty() {
            self.paths.push(ResourcePath::default());
        }
        Ok(())
    }

    /// Moves the entry at `from` so it ends up at `to`.
    pub fn move_path(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let entry = self.paths.remove(from);
        self.paths.insert(to, entry);
        Ok(())
    }

    pub fn set_path(&mut self, index: usize, path: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.paths[index].path = path.into();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.paths.len() {
            Ok(())
        } else {
            Err(AdminError::IndexOutOfRange {
                index,
                len: self.paths.len(),
            })
        }
    }
}

/// Orders descriptions by model language, adding empty ones where missing.
/// Descriptions in other languages are kept after the model languages.
fn ensure_descs(template: &mut Template, languages: &[String]) {
    let mut existing = std::mem::take(&mut template.descs);
    let mut descs = Vec::with_capacity(languages.len());
    for lang in languages {
        match existing.iter().position(|d| &d.lang == lang) {
            Some(pos) => {
                let mut desc = existing.remove(pos);
                desc.name.get_or_insert_with(String::new);
                descs.push(desc);
            }
            None => descs.push(TemplateDesc::empty(lang.clone())),
        }
    }
    descs.extend(existing);
    template.descs = descs;
}

/// `templates/tmpl/<name>.ftl` with the name lower-cased and spaces as hyphens.
fn default_template_path(name: &str) -> String {
    format!("templates/tmpl/{}.ftl", name.to_lowercase().replace(' ', "-"))
}

/// View model for the message template page.
pub struct TemplatesController<B> {
    backend: Arc<B>,
    languages: Vec<String>,
    params: TemplateSearchParams,
    page: PageState,
    result: PagedSearchResult<Template>,
    session: Option<EditSession<TemplateDraft>>,
    toasts: Toasts,
}

impl<B: TemplateBackend> TemplatesController<B> {
    pub fn new(backend: Arc<B>, view: &ViewConfig) -> Self {
        Self {
            backend,
            languages: view.languages.clone(),
            params: TemplateSearchParams::default(),
            page: PageState::sized(view.template_page_size),
            result: PagedSearchResult::default(),
            session: None,
            toasts: Toasts::new(),
        }
    }

    pub fn params(&self) -> &TemplateSearchParams {
        &self.params
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn result(&self) -> &PagedSearchResult<Template> {
        &self.result
    }

    pub fn session(&self) -> Option<&EditSession<TemplateDraft>> {
        self.session.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut TemplateDraft> {
        self.session.as_mut().map(EditSession::draft_mut)
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    /// Runs the search for the current params and page, discarding any session.
    pub async fn load(&mut self) -> Result<()> {
        let max_size = self.page.size.unwrap_or(usize::MAX);
        match self
            .backend
            .search(&self.params, self.page.index, max_size)
            .await
        {
            Ok(result) => {
                self.session = None;
                self.result = result;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to search templates");
                Err(e.into())
            }
        }
    }

    /// Replaces the search params, returns to the first page and reloads.
    pub async fn set_params(&mut self, params: TemplateSearchParams) -> Result<()> {
        self.params = params;
        self.page.index = 0;
        self.load().await
    }

    pub async fn set_page(&mut self, index: usize) -> Result<()> {
        self.page.index = index;
        self.load().await
    }

    pub fn begin_add(&mut self) {
        let draft = TemplateDraft::from_template(Template::default(), &self.languages);
        self.session = Some(EditSession::adding(draft));
    }

    /// Fetches the template and starts editing it.
    pub async fn begin_edit(&mut self, id: i64) -> Result<()> {
        let template = self.backend.get(id).await?;
        let draft = TemplateDraft::from_template(template, &self.languages);
        self.session = Some(EditSession::editing(draft));
        Ok(())
    }

    /// Fetches the template and starts adding a copy without its id.
    pub async fn begin_copy(&mut self, id: i64) -> Result<()> {
        let mut template = self.backend.get(id).await?;
        template.id = None;
        let draft = TemplateDraft::from_template(template, &self.languages);
        self.session = Some(EditSession::adding(draft));
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    pub fn add_resource_path(&mut self, index: usize) -> Result<()> {
        self.require_draft()?.add_path(index)
    }

    pub fn delete_resource_path(&mut self, index: usize) -> Result<()> {
        self.require_draft()?.delete_path(index)
    }

    pub fn move_resource_path(&mut self, from: usize, to: usize) -> Result<()> {
        self.require_draft()?.move_path(from, to)
    }

    pub fn set_resource_path(&mut self, index: usize, path: impl Into<String>) -> Result<()> {
        self.require_draft()?.set_path(index, path)
    }

    /// Fills empty names from the draft category and, from its English name,
    /// the single empty resource path.
    pub async fn category_changed(&mut self) -> Result<()> {
        let Some(category_id) = self
            .session
            .as_ref()
            .and_then(|s| s.draft().template.category.as_ref())
            .and_then(|c| c.id)
        else {
            return Ok(());
        };

        let category = self.backend.get_category(category_id).await?;
        let draft = self.require_draft()?;
        for desc in &category.descs {
            if let Some(tmpl_desc) = draft.template.desc_mut(&desc.lang)
                && tmpl_desc.name.as_deref().is_none_or(str::is_empty)
            {
                tmpl_desc.name = desc.name.clone();
            }
            if desc.lang == "en"
                && draft.paths.len() == 1
                && draft.paths[0].path.is_empty()
                && let Some(name) = &desc.name
            {
                draft.paths[0].path = default_template_path(name);
            }
        }
        Ok(())
    }

    /// Creates or updates the draft, then reloads.
    pub async fn save(&mut self) -> Result<()> {
        let Some(session) = &self.session else {
            return Err(AdminError::NoEditSession);
        };

        let template = session.draft().to_template();
        let result: Result<Template> = match (session.mode(), template.id) {
            (EditMode::Adding, _) => self.backend.create(&template).await.map_err(Into::into),
            (EditMode::Editing, Some(id)) => {
                self.backend.update(id, &template).await.map_err(Into::into)
            }
            (EditMode::Editing, None) => Err(AdminError::MissingId { label: LABEL }),
        };

        match result {
            Ok(saved) => {
                info!(id = ?saved.id, "Saved message template");
                self.session = None;
                self.load().await
            }
            Err(e) => {
                warn!(error = %e, "Failed to save message template");
                self.push_save_error();
                Err(e)
            }
        }
    }

    /// Deletes a template after confirmation. Returns `Ok(false)` when declined.
    pub async fn delete(&mut self, id: i64, confirm: &impl Confirm) -> Result<bool> {
        if !confirm
            .confirm("Delete message Template?", "Delete message template?")
            .await
        {
            return Ok(false);
        }

        match self.backend.delete(id).await {
            Ok(()) => {
                info!(id, "Deleted message template");
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to delete message template");
                self.push_save_error();
                Err(e.into())
            }
        }
    }

    /// Runs the draft against an existing message and returns the result.
    pub async fn execute(&mut self, message_id: &str) -> Result<Value> {
        let template = self
            .session
            .as_ref()
            .ok_or(AdminError::NoEditSession)?
            .draft()
            .to_template();

        match self.backend.execute(&template, message_id).await {
            Ok(message) => Ok(message),
            Err(e) => {
                let code = e
                    .status()
                    .map_or_else(|| "n/a".to_string(), |s| s.to_string());
                warn!(message_id, error = %e, "Failed to execute template");
                self.toasts.push(
                    Toast::error(format!("Error executing template (code: {})", code))
                        .with_ttl(ERROR_TOAST_TTL),
                );
                Err(e.into())
            }
        }
    }

    /// Download URL of the full template export.
    pub async fn export_url(&self) -> Result<String> {
        Ok(self.backend.export_url().await?)
    }

    /// Uploads a JSON file of templates and reloads the current page.
    ///
    /// Returns the server's report of what was imported.
    pub async fn upload(&mut self, file_name: &str, content: Vec<u8>) -> Result<String> {
        match self.backend.upload(file_name, content).await {
            Ok(report) => {
                info!(file_name, "Uploaded message templates");
                self.load().await?;
                Ok(report)
            }
            Err(e) => {
                warn!(file_name, error = %e, "Failed to upload message templates");
                self.toasts.push(
                    Toast::error("Error uploading message templates").with_ttl(ERROR_TOAST_TTL),
                );
                Err(e.into())
            }
        }
    }

    fn require_draft(&mut self) -> Result<&mut TemplateDraft> {
        self.draft_mut().ok_or(AdminError::NoEditSession)
    }

    fn push_save_error(&mut self) {
        self.toasts.push(
            Toast::error(format!("Error saving {}", LABEL)).with_ttl(ERROR_TOAST_TTL),
        );
    }
}
