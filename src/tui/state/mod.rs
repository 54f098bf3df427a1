//! TUI state model split by feature domain.

mod address_list_state;
mod app_state;
mod category;
mod choice_state;
mod collaborators;
mod credentials_state;
mod editor;
mod navigation_state;
mod purge_state;
mod text_buffer;
mod tip_state;

pub(crate) use address_list_state::{AddressListEditor, AddressListKind};
pub(crate) use app_state::SessionState;
pub use app_state::{SessionExit, SettingsApp};
pub use category::Category;
pub(crate) use choice_state::{ChoiceEditor, ChoiceSetting, DNS_CUSTOM_INDEX, PROTOCOL_VALUES, SPLIT_TUNNEL_ENABLE_INDEX};
pub use collaborators::Collaborators;
pub(crate) use credentials_state::{CredentialsEditor, CredentialsField};
pub(crate) use editor::{Editor, EditorOutcome, UnavailableEditor};
pub use navigation_state::{HoverDirection, NavigationState};
pub(crate) use purge_state::{PURGE_OPTIONS, PURGE_QUESTION, PurgeEditor};
pub(crate) use text_buffer::TextBuffer;
pub use tip_state::TipLine;
pub(crate) use tip_state::DEFAULT_TIP;
