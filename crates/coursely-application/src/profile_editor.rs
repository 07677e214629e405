//! Profile editor: the edit-session state machine over the profile store.
//!
//! The editor owns the live [`ProfileStore`], the [`AcademicProfile`], the
//! shared program catalog and at most one [`EditSession`]. The UI layer calls
//! one method per interaction and re-renders from the [`EditorEvent`]s it
//! receives through [`subscribe`](ProfileEditor::subscribe).
//!
//! ```text
//! Idle --begin_edit--> Editing(field) --commit ok / cancel--> Idle
//!                        |  ^
//!      input/select      |  | commit failed (error message set)
//!                        v  |
//!                  Editing(field, dropdowns)
//! ```

use std::sync::Arc;

use coursely_core::academic::AcademicProfile;
use coursely_core::catalog::{ProgramCatalog, ProgramKind};
use coursely_core::config::EditorSettings;
use coursely_core::error::{CourselyError, Result};
use coursely_core::feature::PendingFeature;
use coursely_core::field::FieldId;
use coursely_core::search;
use coursely_core::storage::PersistenceAdapter;
use coursely_core::user::{ProfilePatch, UserProfile};

use crate::edit_session::validation::{self, CommitAction};
use crate::edit_session::{EditSession, EditState, OutsideClickRegistry, OutsideClickSource};
use crate::profile_store::ProfileStore;

/// Something the UI should re-render.
#[derive(Debug, Clone, Copy)]
pub enum EditorEvent<'a> {
    ProfileChanged(&'a UserProfile),
    AcademicChanged(&'a AcademicProfile),
    /// The edit session changed; `None` once it has ended.
    SessionChanged(Option<&'a EditSession>),
}

/// Handle returned by [`ProfileEditor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&EditorEvent<'_>) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Profile,
    Academic,
    Session,
}

pub struct ProfileEditor {
    store: ProfileStore,
    academic: AcademicProfile,
    catalog: Arc<dyn ProgramCatalog>,
    settings: EditorSettings,
    outside_click: Arc<dyn OutsideClickSource>,
    session: Option<EditSession>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl ProfileEditor {
    /// Creates an editor over the initial academic profile.
    pub fn new(
        adapter: Arc<dyn PersistenceAdapter>,
        catalog: Arc<dyn ProgramCatalog>,
        settings: EditorSettings,
    ) -> Self {
        Self::with_academic_profile(adapter, catalog, settings, AcademicProfile::default())
    }

    /// Creates an editor over `academic`; the fallback profile is seeded from it.
    ///
    /// The major and minor of a persisted profile replace those of `academic`,
    /// dropping any second program they now collide with.
    pub fn with_academic_profile(
        adapter: Arc<dyn PersistenceAdapter>,
        catalog: Arc<dyn ProgramCatalog>,
        settings: EditorSettings,
        mut academic: AcademicProfile,
    ) -> Self {
        let store = ProfileStore::initialize(adapter, &academic);

        let profile = store.get();
        if academic.set_major(profile.major.clone()) {
            tracing::info!("Second major matched the stored major and was cleared");
        }
        if academic.set_minor(profile.minor.clone().filter(|m| !m.is_empty())) {
            tracing::info!("Second minor matched the stored minor and was cleared");
        }

        Self {
            store,
            academic,
            catalog,
            settings,
            outside_click: Arc::new(OutsideClickRegistry::new()),
            session: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Routes outside-click listener attachment to the host's `source`.
    pub fn with_outside_click_source(mut self, source: Arc<dyn OutsideClickSource>) -> Self {
        self.outside_click = source;
        self
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn profile(&self) -> &UserProfile {
        self.store.get()
    }

    pub fn academic_profile(&self) -> &AcademicProfile {
        &self.academic
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn catalog(&self) -> &Arc<dyn ProgramCatalog> {
        &self.catalog
    }

    pub fn state(&self) -> EditState {
        self.session
            .as_ref()
            .map(EditSession::state)
            .unwrap_or(EditState::Idle)
    }

    // ============================================================================
    // Observers
    // ============================================================================

    /// Registers a render callback, invoked after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&EditorEvent<'_>) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a render callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: Change) {
        let event = match change {
            Change::Profile => EditorEvent::ProfileChanged(self.store.get()),
            Change::Academic => EditorEvent::AcademicChanged(&self.academic),
            Change::Session => EditorEvent::SessionChanged(self.session.as_ref()),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ============================================================================
    // Edit session transitions
    // ============================================================================

    /// Opens an edit session on `field`, seeded with the field's current value.
    ///
    /// An edit already in progress is cancelled first.
    pub fn begin_edit(&mut self, field: FieldId) {
        if let Some(previous) = self.session.take() {
            tracing::debug!(field = %previous.field(), "Discarding open edit for a new one");
        }

        let seed = self.current_value(field);
        tracing::debug!(%field, "Edit started");
        self.session = Some(EditSession::begin(field, seed));
        self.notify(Change::Session);
    }

    /// Handles typing in the field's main input.
    ///
    /// Recomputes and opens the primary candidate list for fields backed by a
    /// catalog list. For `major`/`minor` the text also becomes the pending
    /// program, written to the profile now when optimistic patching is on.
    pub fn on_primary_input(&mut self, value: &str) -> Result<()> {
        let field = self.active_field()?;

        let candidates = self.primary_candidates(field, value);

        if field.is_primary_program() {
            self.apply_program_text(field, value)?;
        }

        let source = Arc::clone(&self.outside_click);
        let session = self.session_mut()?;
        session.set_temp_value(value);
        if let Some(candidates) = candidates {
            session.open_primary(candidates, &source);
        }
        self.notify(Change::Session);
        Ok(())
    }

    /// Handles typing in the second-program input.
    ///
    /// Candidates are the counterpart program list without the current
    /// primary program.
    pub fn on_secondary_input(&mut self, value: &str) -> Result<()> {
        let field = self.active_field()?;

        let candidates = field
            .program_kind()
            .map(|kind| self.second_program_candidates(kind, value));

        let source = Arc::clone(&self.outside_click);
        let session = self.session_mut()?;
        session.set_temp_value(value);
        if let Some(candidates) = candidates {
            session.open_secondary(candidates, &source);
        }
        self.notify(Change::Session);
        Ok(())
    }

    /// Picks `option` from the primary dropdown and closes it.
    pub fn select_primary(&mut self, option: &str) -> Result<()> {
        let field = self.active_field()?;

        if field.is_primary_program() {
            self.apply_program_text(field, option)?;
        }

        let source = Arc::clone(&self.outside_click);
        let session = self.session_mut()?;
        session.set_temp_value(option);
        session.close_primary(&source);
        self.notify(Change::Session);
        Ok(())
    }

    /// Picks `option` from the secondary dropdown and closes it.
    pub fn select_secondary(&mut self, option: &str) -> Result<()> {
        let source = Arc::clone(&self.outside_click);
        let session = self.session_mut()?;
        session.set_temp_value(option);
        session.close_secondary(&source);
        self.notify(Change::Session);
        Ok(())
    }

    /// Closes both dropdowns after an interaction outside the editor.
    ///
    /// The typed value and the session are kept. Does nothing when idle.
    pub fn dismiss_dropdowns(&mut self) {
        let source = Arc::clone(&self.outside_click);
        if let Some(session) = self.session.as_mut() {
            session.dismiss_dropdowns(&source);
            self.notify(Change::Session);
        }
    }

    /// Validates and applies the edit.
    ///
    /// On failure the session stays open with its error message set and the
    /// validation error is returned. On success the session ends.
    pub fn commit(&mut self) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| CourselyError::invalid_state("commit without an open edit"))?;
        let field = session.field();

        let action = match validation::validate(field, session.temp_value(), self.store.get()) {
            Ok(action) => action,
            Err(e) => {
                tracing::debug!(%field, error = %e, "Commit rejected");
                session.set_error(e.to_string());
                self.notify(Change::Session);
                return Err(e);
            }
        };
        let draft = session.take_program_draft();

        let mut changes = Vec::new();
        match action {
            CommitAction::SetGpa(gpa) => {
                self.store.set(&ProfilePatch::new().gpa(gpa))?;
                changes.push(Change::Profile);
            }
            CommitAction::SetSecondMajor(second_major) => {
                self.academic.second_major = second_major;
                changes.push(Change::Academic);
            }
            CommitAction::SetSecondMinor(second_minor) => {
                self.academic.second_minor = second_minor;
                changes.push(Change::Academic);
            }
            CommitAction::SetHassPathway(pathway) => {
                self.academic.hass_pathway = pathway;
                changes.push(Change::Academic);
            }
            CommitAction::SyncMajor => {
                if let Some(major) = draft {
                    self.store.set(&ProfilePatch::new().major(major))?;
                    changes.push(Change::Profile);
                }
                let major = self.store.get().major.clone();
                if self.academic.set_major(major) {
                    tracing::info!("Second major matched the new major and was cleared");
                }
                changes.push(Change::Academic);
            }
            CommitAction::SyncMinor => {
                if let Some(minor) = draft {
                    self.store
                        .set(&ProfilePatch::new().minor(validation::non_empty(minor.trim())))?;
                    changes.push(Change::Profile);
                }
                let minor = self.store.get().minor.clone().filter(|m| !m.is_empty());
                if self.academic.set_minor(minor) {
                    tracing::info!("Second minor matched the new minor and was cleared");
                }
                changes.push(Change::Academic);
            }
        }

        tracing::info!(%field, "Edit committed");
        self.session = None;
        for change in changes {
            self.notify(change);
        }
        self.notify(Change::Session);
        Ok(())
    }

    /// Ends the edit without touching the profile or the academic profile.
    ///
    /// With optimistic patching on, major/minor text already written while
    /// typing stays in the profile.
    pub fn cancel(&mut self) -> Result<()> {
        let session = self
            .session
            .take()
            .ok_or_else(|| CourselyError::invalid_state("cancel without an open edit"))?;
        tracing::debug!(field = %session.field(), "Edit cancelled");
        drop(session);
        self.notify(Change::Session);
        Ok(())
    }

    /// Placeholder actions (progress views, track selection, avatar edit).
    ///
    /// Always returns [`CourselyError::NotImplemented`]; no state changes.
    pub fn request_feature(&self, feature: &PendingFeature) -> Result<()> {
        feature.invoke()
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn active_field(&self) -> Result<FieldId> {
        self.session
            .as_ref()
            .map(EditSession::field)
            .ok_or_else(|| CourselyError::invalid_state("no edit in progress"))
    }

    fn session_mut(&mut self) -> Result<&mut EditSession> {
        self.session
            .as_mut()
            .ok_or_else(|| CourselyError::invalid_state("no edit in progress"))
    }

    /// The value an edit of `field` starts from.
    fn current_value(&self, field: FieldId) -> String {
        let profile = self.store.get();
        match field {
            FieldId::Major => profile.major.clone(),
            FieldId::Minor => profile.minor.clone().unwrap_or_default(),
            FieldId::SecondMajor => self.academic.second_major.clone().unwrap_or_default(),
            FieldId::SecondMinor => self.academic.second_minor.clone().unwrap_or_default(),
            FieldId::HassPathway => self.academic.hass_pathway.clone(),
            FieldId::Gpa => profile.gpa.to_string(),
        }
    }

    /// Matches for the primary input, if the field has a catalog list.
    ///
    /// Second-program fields never offer the current primary program.
    fn primary_candidates(&self, field: FieldId, query: &str) -> Option<Vec<String>> {
        match field {
            FieldId::HassPathway => Some(search::filter(&self.catalog.list_pathway_names(), query)),
            FieldId::Gpa => None,
            FieldId::Major => Some(search::filter(&self.catalog.list_major_names(), query)),
            FieldId::Minor => Some(search::filter(&self.catalog.list_minor_names(), query)),
            FieldId::SecondMajor => Some(self.second_program_candidates(ProgramKind::Major, query)),
            FieldId::SecondMinor => Some(self.second_program_candidates(ProgramKind::Minor, query)),
        }
    }

    fn second_program_candidates(&self, kind: ProgramKind, query: &str) -> Vec<String> {
        let excluded = self.current_primary_program(kind);
        search::filter_excluding(&self.catalog.names_for(kind), excluded.as_deref(), query)
    }

    /// The primary program second-program candidates must exclude.
    ///
    /// While the primary program itself is being edited, that is its pending text.
    fn current_primary_program(&self, kind: ProgramKind) -> Option<String> {
        let editing_primary = match kind {
            ProgramKind::Major => FieldId::Major,
            ProgramKind::Minor => FieldId::Minor,
        };
        let draft = self
            .session
            .as_ref()
            .filter(|s| s.field() == editing_primary)
            .and_then(|s| s.program_draft().map(str::to_string));

        draft.or_else(|| match kind {
            ProgramKind::Major => Some(self.store.get().major.clone()),
            ProgramKind::Minor => self.store.get().minor.clone(),
        })
    }

    /// Records typed or picked major/minor text.
    ///
    /// Kept in the session until commit, or written straight to the profile
    /// when optimistic patching is enabled.
    fn apply_program_text(&mut self, field: FieldId, text: &str) -> Result<()> {
        if self.settings.optimistic_program_patch {
            let patch = match field {
                FieldId::Major => ProfilePatch::new().major(text),
                _ => ProfilePatch::new().minor(validation::non_empty(text.trim())),
            };
            self.store.set(&patch)?;
            self.notify(Change::Profile);
        } else {
            self.session_mut()?.set_program_draft(text);
        }
        Ok(())
    }
}
