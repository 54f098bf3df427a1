//! Credentials editor rendering.

use crate::tui::state::{CredentialsEditor, CredentialsField, TextBuffer};
use crate::tui::ui::theme::{self, display_width};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const USERNAME_PROMPT: &str = "Enter your VPN username:";
const PASSWORD_PROMPT: &str = "Enter your VPN password:";
const CONFIRM_HINT: &str = "Press Enter to save these credentials.";
const INDENT: u16 = 2;
const USERNAME_ROW: u16 = 2;
const PASSWORD_ROW: u16 = 5;

pub(crate) fn render_credentials_editor(frame: &mut Frame, area: Rect, editor: &CredentialsEditor, focused: bool) {
    if area.width <= INDENT || area.height == 0 {
        return;
    }

    let label_style = |field: CredentialsField| {
        if focused && editor.field == field {
            theme::prompt_style()
        } else {
            theme::hint_style()
        }
    };

    let masked = editor.masked_password();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(USERNAME_PROMPT, label_style(CredentialsField::Username))),
        Line::from(Span::raw(editor.username.as_str().to_string())),
        Line::from(""),
        Line::from(Span::styled(PASSWORD_PROMPT, label_style(CredentialsField::Password))),
        Line::from(Span::raw(masked)),
        Line::from(""),
    ];
    if focused && editor.field == CredentialsField::Confirm {
        lines.push(Line::from(Span::styled(CONFIRM_HINT, theme::prompt_style())));
    }

    let text_area = Rect::new(area.x + INDENT, area.y, area.width - INDENT, area.height);
    frame.render_widget(Paragraph::new(lines), text_area);

    if !focused {
        return;
    }
    let cursor = match editor.field {
        CredentialsField::Username => Some((USERNAME_ROW, cursor_column(&editor.username, false))),
        CredentialsField::Password => Some((PASSWORD_ROW, cursor_column(&editor.password, true))),
        CredentialsField::Confirm => None,
    };
    if let Some((row, column)) = cursor
        && row < text_area.height
    {
        let x = text_area.x + column.min(text_area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, text_area.y + row));
    }
}

/// Column of the cursor inside a rendered buffer. Masked buffers use one column per character.
fn cursor_column(buffer: &TextBuffer, masked: bool) -> u16 {
    let columns = if masked {
        buffer.cursor()
    } else {
        let before: String = buffer.as_str().chars().take(buffer.cursor()).collect();
        display_width(&before)
    };
    u16::try_from(columns).unwrap_or(u16::MAX)
}
