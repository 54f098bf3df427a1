//! The closed set of editors shown in the detail pane.

use super::{
    AddressListEditor, Category, ChoiceEditor, ChoiceSetting, CredentialsEditor, CredentialsField, PurgeEditor, SessionExit,
};
use crate::config::{ConfigError, ConfigStore, KEY_USERNAME, USER_SECTION};
use crate::log_warn;

const CHOICE_TIP: &str = "Use the up and down arrows to select the option. Pressing enter saves the choice.";
const CREDENTIALS_FIELD_TIP: &str = "Type your credentials. Up, Down or Enter moves to the next field.";
const CREDENTIALS_CONFIRM_TIP: &str = "If you want to save and exit, press Enter, if not, just hit the left or right arrow keys.";
const ADDRESS_LIST_TIP: &str = "One entry per line. Enter on an empty line saves, Left or Right discards.";
const PURGE_TIP: &str = "Choosing YES stops the VPN, deletes every setting and exits.";
const UNAVAILABLE_TIP: &str = "Press Enter, Left or Right to go back.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnavailableEditor {
    pub(crate) category: Category,
    pub(crate) reason: String,
}

#[derive(Debug, Clone)]
pub(crate) enum Editor {
    Credentials(CredentialsEditor),
    Choice(ChoiceEditor),
    AddressList(AddressListEditor),
    Purge(PurgeEditor),
    /// The category could not be loaded; shows why.
    Unavailable(UnavailableEditor),
}

/// Result of feeding one event to an editor.
#[derive(Debug)]
pub(crate) enum EditorOutcome {
    Continue,
    /// State was persisted; leave the editor.
    Commit { notice: String },
    /// Nothing was persisted; leave the editor.
    Cancel,
    /// Replace the active editor with a follow-up editor.
    Chain(Box<Editor>),
    /// End the whole session.
    Exit(SessionExit),
}

impl Editor {
    /// Build the editor for `category` from the current store contents.
    pub(crate) fn open(category: Category, store: &dyn ConfigStore) -> Editor {
        match Self::try_open(category, store) {
            Ok(editor) => editor,
            Err(err) => {
                log_warn!("Could not open editor for {}: {}", category.display_name(), err);
                Editor::Unavailable(UnavailableEditor {
                    category,
                    reason: err.to_string(),
                })
            }
        }
    }

    fn try_open(category: Category, store: &dyn ConfigStore) -> Result<Editor, ConfigError> {
        let editor = match category {
            Category::Credentials => Editor::Credentials(CredentialsEditor::new(store.get(USER_SECTION, KEY_USERNAME)?)),
            Category::PlanTier => Editor::Choice(ChoiceEditor::open(ChoiceSetting::PlanTier, store)?),
            Category::Protocol => Editor::Choice(ChoiceEditor::open(ChoiceSetting::Protocol, store)?),
            Category::DnsManagement => Editor::Choice(ChoiceEditor::open(ChoiceSetting::Dns, store)?),
            Category::KillSwitch => Editor::Choice(ChoiceEditor::open(ChoiceSetting::KillSwitch, store)?),
            Category::SplitTunneling => Editor::Choice(ChoiceEditor::open(ChoiceSetting::SplitTunnel, store)?),
            Category::Purge => Editor::Purge(PurgeEditor::new()),
        };
        Ok(editor)
    }

    pub(crate) fn tip(&self) -> &'static str {
        match self {
            Editor::Credentials(editor) if editor.field == CredentialsField::Confirm => CREDENTIALS_CONFIRM_TIP,
            Editor::Credentials(_) => CREDENTIALS_FIELD_TIP,
            Editor::Choice(_) => CHOICE_TIP,
            Editor::AddressList(_) => ADDRESS_LIST_TIP,
            Editor::Purge(_) => PURGE_TIP,
            Editor::Unavailable(_) => UNAVAILABLE_TIP,
        }
    }
}
