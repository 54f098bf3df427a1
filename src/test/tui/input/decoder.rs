use super::{InputDecoder, InputEvent, KeyDecoder, decode_bytes};
use crate::tui::input::{RawInput, ScriptedSource};

#[test]
fn arrow_sequences_decode_to_single_events() {
    assert_eq!(decode_bytes(&[0x1B, 0x5B, 0x41]), vec![InputEvent::Up]);
    assert_eq!(decode_bytes(&[0x1B, 0x5B, 0x42]), vec![InputEvent::Down]);
    assert_eq!(decode_bytes(&[0x1B, 0x5B, 0x43]), vec![InputEvent::Right]);
    assert_eq!(decode_bytes(&[0x1B, 0x5B, 0x44]), vec![InputEvent::Left]);
    assert!(InputEvent::Left.is_cancel());
    assert!(InputEvent::Right.is_cancel());
    assert!(!InputEvent::Enter.is_cancel());
}

#[test]
fn unknown_escape_continuation_is_discarded() {
    assert!(decode_bytes(&[0x1B, 0x5B, 0x45]).is_empty());
    assert!(decode_bytes(&[0x1B, 0x4F, 0x41]).is_empty());
    assert_eq!(decode_bytes(&[0x1B, 0x5B, 0x5A, b'a']), vec![InputEvent::Char('a')]);
}

#[test]
fn printable_enter_and_backspace() {
    assert_eq!(
        decode_bytes(b"a Z}\r\n\x7f"),
        vec![
            InputEvent::Char('a'),
            InputEvent::Char(' '),
            InputEvent::Char('Z'),
            InputEvent::Char('}'),
            InputEvent::Enter,
            InputEvent::Enter,
            InputEvent::Backspace,
        ]
    );
}

#[test]
fn control_bytes_and_tilde_are_dropped() {
    assert!(decode_bytes(&[0x00, 0x01, 0x09, 0x1F, 0x7E]).is_empty());
}

#[test]
fn lone_escape_waits_for_two_more_bytes() {
    let mut decoder = KeyDecoder::new();
    assert_eq!(decoder.push(0x1B), None);
    assert!(decoder.is_pending());
    assert_eq!(decoder.push(b'a'), None);
    assert!(decoder.is_pending());
    assert_eq!(decoder.push(b'b'), None);
    assert!(!decoder.is_pending());
    assert_eq!(decoder.push(b'c'), Some(InputEvent::Char('c')));
}

#[test]
fn resize_does_not_break_a_split_escape_sequence() {
    let source = ScriptedSource::new([
        RawInput::Bytes(vec![0x1B]),
        RawInput::Resize,
        RawInput::Bytes(vec![0x5B, 0x42]),
        RawInput::Bytes(b"x".to_vec()),
    ]);
    let mut input = InputDecoder::new(source);

    assert_eq!(input.next_event().expect("event"), InputEvent::Resize);
    assert_eq!(input.next_event().expect("event"), InputEvent::Down);
    assert_eq!(input.next_event().expect("event"), InputEvent::Char('x'));
    assert_eq!(input.next_event().expect("event"), InputEvent::CtrlC);
}

#[test]
fn several_keys_in_one_read_are_delivered_in_order() {
    let source = ScriptedSource::new([RawInput::Bytes(vec![b'h', 0x1B, 0x5B, 0x41, b'i'])]);
    let mut input = InputDecoder::new(source);

    assert_eq!(input.next_event().expect("event"), InputEvent::Char('h'));
    assert_eq!(input.next_event().expect("event"), InputEvent::Up);
    assert_eq!(input.next_event().expect("event"), InputEvent::Char('i'));
}
