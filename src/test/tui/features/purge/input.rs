use crate::test_support::{Call, TestPorts};
use crate::tui::input::InputEvent;
use crate::tui::state::{EditorOutcome, PurgeEditor, SessionExit};

#[test]
fn starts_on_no_and_enter_cancels() {
    let (mut ports, log) = TestPorts::new().build();
    let mut editor = PurgeEditor::new();
    assert!(!editor.confirmed());

    assert!(matches!(editor.handle_event(InputEvent::Enter, &mut ports), EditorOutcome::Cancel));
    assert!(log.calls().is_empty());
}

#[test]
fn yes_terminates_session_before_deleting_and_exits() {
    let (mut ports, log) = TestPorts::new().build();
    let mut editor = PurgeEditor::new();

    assert!(matches!(editor.handle_event(InputEvent::Up, &mut ports), EditorOutcome::Continue));
    assert!(editor.confirmed());

    let outcome = editor.handle_event(InputEvent::Enter, &mut ports);
    assert!(matches!(outcome, EditorOutcome::Exit(SessionExit::Purged)));
    assert_eq!(log.calls(), vec![Call::Terminate, Call::Purge]);
}

#[test]
fn failed_delete_still_exits_with_failure() {
    let (mut ports, log) = TestPorts::new().failing_purge().build();
    let mut editor = PurgeEditor::new();
    editor.handle_event(InputEvent::Down, &mut ports);

    match editor.handle_event(InputEvent::Enter, &mut ports) {
        EditorOutcome::Exit(exit) => {
            assert!(matches!(exit, SessionExit::PurgeFailed(_)));
            assert!(!exit.is_success());
        }
        other => panic!("expected exit, got {other:?}"),
    }
    assert_eq!(log.calls(), vec![Call::Terminate, Call::Purge]);
}

#[test]
fn arrows_cancel_without_side_effects() {
    let (mut ports, log) = TestPorts::new().build();
    let mut editor = PurgeEditor::new();
    editor.handle_event(InputEvent::Up, &mut ports);

    assert!(matches!(editor.handle_event(InputEvent::Left, &mut ports), EditorOutcome::Cancel));
    assert!(log.calls().is_empty());
}
