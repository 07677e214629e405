pub mod edit_session;
pub mod profile_editor;
pub mod profile_store;

pub use edit_session::{EditSession, EditState, OutsideClickRegistry, OutsideClickSource};
pub use profile_editor::{EditorEvent, ListenerId, ProfileEditor};
pub use profile_store::ProfileStore;
