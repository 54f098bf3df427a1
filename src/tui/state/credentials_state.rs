//! Username/password editor state.

use super::TextBuffer;

pub(crate) const MASK_GLYPH: char = '*';

/// Which part of the credentials form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CredentialsField {
    Username,
    Password,
    /// Both buffers done; waiting for Enter (save) or Left/Right (discard).
    Confirm,
}

#[derive(Debug, Clone)]
pub(crate) struct CredentialsEditor {
    pub(crate) username: TextBuffer,
    pub(crate) password: TextBuffer,
    pub(crate) field: CredentialsField,
}

impl CredentialsEditor {
    pub(crate) fn new(current_username: Option<String>) -> Self {
        Self {
            username: current_username.as_deref().map(TextBuffer::with_text).unwrap_or_default(),
            password: TextBuffer::new(),
            field: CredentialsField::Username,
        }
    }

    pub(crate) fn focused_buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        match self.field {
            CredentialsField::Username => Some(&mut self.username),
            CredentialsField::Password => Some(&mut self.password),
            CredentialsField::Confirm => None,
        }
    }

    /// Finish the current buffer and move to the next step.
    pub(crate) fn advance_field(&mut self) {
        self.field = match self.field {
            CredentialsField::Username => CredentialsField::Password,
            CredentialsField::Password | CredentialsField::Confirm => CredentialsField::Confirm,
        };
    }

    /// One mask glyph per password character.
    pub(crate) fn masked_password(&self) -> String {
        std::iter::repeat_n(MASK_GLYPH, self.password.char_count()).collect()
    }
}
