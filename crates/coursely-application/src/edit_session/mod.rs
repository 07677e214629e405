//! Transient per-field edit sessions.
//!
//! An [`EditSession`] exists only while a field is being edited. Its
//! transitions are driven by [`ProfileEditor`](crate::ProfileEditor); this
//! module holds the session state itself, the commit rules and the
//! outside-click subscription lifecycle.

mod subscription;
pub mod validation;

use std::sync::Arc;

use serde::Serialize;

use coursely_core::field::FieldId;

pub use subscription::{
    OutsideClickRegistry, OutsideClickSource, OutsideClickSubscription, SubscriptionId,
};

/// Observable editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum EditState {
    Idle,
    #[serde(rename_all = "camelCase")]
    Editing {
        field: FieldId,
        primary_open: bool,
        secondary_open: bool,
    },
}

#[derive(Debug, Default)]
struct Dropdown {
    open: bool,
    candidates: Vec<String>,
}

/// Working state of one field edit.
#[derive(Debug)]
pub struct EditSession {
    field: FieldId,
    temp_value: String,
    /// Buffered major/minor text, applied to the profile on commit.
    program_draft: Option<String>,
    primary: Dropdown,
    secondary: Dropdown,
    error_message: Option<String>,
    outside_click: Option<OutsideClickSubscription>,
}

impl EditSession {
    pub(crate) fn begin(field: FieldId, seed: String) -> Self {
        Self {
            field,
            temp_value: seed,
            program_draft: None,
            primary: Dropdown::default(),
            secondary: Dropdown::default(),
            error_message: None,
            outside_click: None,
        }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn temp_value(&self) -> &str {
        &self.temp_value
    }

    pub fn program_draft(&self) -> Option<&str> {
        self.program_draft.as_deref()
    }

    pub fn is_primary_open(&self) -> bool {
        self.primary.open
    }

    pub fn is_secondary_open(&self) -> bool {
        self.secondary.open
    }

    pub fn primary_candidates(&self) -> &[String] {
        &self.primary.candidates
    }

    pub fn secondary_candidates(&self) -> &[String] {
        &self.secondary.candidates
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether an outside-click listener is currently attached for this session.
    pub fn is_listening_outside_click(&self) -> bool {
        self.outside_click.is_some()
    }

    pub fn state(&self) -> EditState {
        EditState::Editing {
            field: self.field,
            primary_open: self.primary.open,
            secondary_open: self.secondary.open,
        }
    }

    pub(crate) fn set_temp_value(&mut self, value: impl Into<String>) {
        self.temp_value = value.into();
    }

    pub(crate) fn set_program_draft(&mut self, value: impl Into<String>) {
        self.program_draft = Some(value.into());
    }

    pub(crate) fn take_program_draft(&mut self) -> Option<String> {
        self.program_draft.take()
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub(crate) fn open_primary(
        &mut self,
        candidates: Vec<String>,
        source: &Arc<dyn OutsideClickSource>,
    ) {
        self.primary = Dropdown {
            open: true,
            candidates,
        };
        self.sync_outside_click(source);
    }

    pub(crate) fn open_secondary(
        &mut self,
        candidates: Vec<String>,
        source: &Arc<dyn OutsideClickSource>,
    ) {
        self.secondary = Dropdown {
            open: true,
            candidates,
        };
        self.sync_outside_click(source);
    }

    pub(crate) fn close_primary(&mut self, source: &Arc<dyn OutsideClickSource>) {
        self.primary.open = false;
        self.sync_outside_click(source);
    }

    pub(crate) fn close_secondary(&mut self, source: &Arc<dyn OutsideClickSource>) {
        self.secondary.open = false;
        self.sync_outside_click(source);
    }

    /// Closes both dropdowns, keeping the typed value and the session.
    pub(crate) fn dismiss_dropdowns(&mut self, source: &Arc<dyn OutsideClickSource>) {
        self.primary.open = false;
        self.secondary.open = false;
        self.sync_outside_click(source);
    }

    /// Holds a listener exactly while at least one dropdown is open.
    fn sync_outside_click(&mut self, source: &Arc<dyn OutsideClickSource>) {
        let any_open = self.primary.open || self.secondary.open;
        match (any_open, self.outside_click.is_some()) {
            (true, false) => {
                self.outside_click = Some(OutsideClickSubscription::acquire(source));
            }
            (false, true) => {
                self.outside_click = None;
            }
            _ => {}
        }
    }
}
