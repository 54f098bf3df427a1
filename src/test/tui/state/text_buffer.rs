use super::TextBuffer;

#[test]
fn typing_then_backspacing_returns_to_empty() {
    let mut buffer = TextBuffer::new();
    for ch in "user42".chars() {
        buffer.insert_char(ch);
    }
    assert_eq!(buffer.as_str(), "user42");
    assert_eq!(buffer.cursor(), 6);

    for _ in 0..6 {
        buffer.backspace();
    }
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn backspace_at_start_is_a_no_op() {
    let mut buffer = TextBuffer::new();
    buffer.backspace();
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn seeded_buffer_puts_cursor_at_end() {
    let mut buffer = TextBuffer::with_text("1.1.1.1\n");
    assert_eq!(buffer.cursor(), 8);

    buffer.backspace();
    assert_eq!(buffer.as_str(), "1.1.1.1");
    buffer.insert_char('9');
    assert_eq!(buffer.as_str(), "1.1.1.19");
}

#[test]
fn multibyte_characters_count_as_one() {
    let mut buffer = TextBuffer::with_text("añb");
    assert_eq!(buffer.char_count(), 3);
    buffer.backspace();
    buffer.backspace();
    assert_eq!(buffer.as_str(), "a");
}
