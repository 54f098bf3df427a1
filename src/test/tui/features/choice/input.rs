use crate::config::{
    KEY_CUSTOM_DNS, KEY_DEFAULT_PROTOCOL, KEY_DNS_LEAK_PROTECTION, KEY_KILLSWITCH, KEY_SPLIT_TUNNEL, KEY_SPLIT_TUNNEL_IPS, KEY_TIER,
    USER_SECTION,
};
use crate::test_support::{Call, TestPorts};
use crate::tui::input::InputEvent;
use crate::tui::state::{AddressListKind, ChoiceEditor, ChoiceSetting, Editor, EditorOutcome};

fn run(editor: &mut ChoiceEditor, ports: TestPorts, events: &[InputEvent]) -> (Vec<EditorOutcome>, Vec<Call>) {
    let (mut collaborators, log) = ports.build();
    let outcomes = events
        .iter()
        .map(|event| editor.handle_event(*event, &mut collaborators).expect("handle event"))
        .collect();
    (outcomes, log.calls())
}

#[test]
fn committing_a_tier_writes_its_index_once() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::PlanTier, None);
    let (outcomes, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Down, InputEvent::Down, InputEvent::Enter]);

    assert!(matches!(outcomes.last(), Some(EditorOutcome::Commit { .. })));
    assert_eq!(calls, vec![Call::set(KEY_TIER, "2")]);
}

#[test]
fn cancelling_after_moving_writes_nothing() {
    for cancel in [InputEvent::Left, InputEvent::Right] {
        let mut editor = ChoiceEditor::new(ChoiceSetting::KillSwitch, Some(0));
        let (outcomes, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Down, InputEvent::Up, InputEvent::Up, cancel]);

        assert!(matches!(outcomes.last(), Some(EditorOutcome::Cancel)));
        assert!(calls.is_empty());
    }
}

#[test]
fn in_progress_index_wraps() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::PlanTier, None);
    editor.move_up();
    assert_eq!(editor.in_progress, 3);
    editor.move_down();
    assert_eq!(editor.in_progress, 0);
}

#[test]
fn opens_on_the_persisted_choice() {
    let (collaborators, _) = TestPorts::new().with_value(KEY_TIER, "3").with_value(KEY_DEFAULT_PROTOCOL, "TCP").build();

    let tier = ChoiceEditor::open(ChoiceSetting::PlanTier, collaborators.store.as_ref()).expect("open tier");
    assert_eq!((tier.persisted, tier.in_progress), (Some(3), 3));

    let protocol = ChoiceEditor::open(ChoiceSetting::Protocol, collaborators.store.as_ref()).expect("open protocol");
    assert_eq!(protocol.persisted, Some(1));

    let killswitch = ChoiceEditor::open(ChoiceSetting::KillSwitch, collaborators.store.as_ref()).expect("open killswitch");
    assert_eq!((killswitch.persisted, killswitch.in_progress), (None, 0));
}

#[test]
fn out_of_range_saved_index_is_ignored() {
    let (collaborators, _) = TestPorts::new().with_value(KEY_KILLSWITCH, "9").build();
    let editor = ChoiceEditor::open(ChoiceSetting::KillSwitch, collaborators.store.as_ref()).expect("open");
    assert_eq!(editor.persisted, None);
}

#[test]
fn protocol_is_stored_lower_case() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::Protocol, Some(0));
    let (_, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Down, InputEvent::Enter]);
    assert_eq!(calls, vec![Call::set(KEY_DEFAULT_PROTOCOL, "tcp")]);
}

#[test]
fn dns_persisted_choice_is_derived() {
    let (leak, _) = TestPorts::new().with_value(KEY_DNS_LEAK_PROTECTION, "1").build();
    let (custom, _) = TestPorts::new().with_value(KEY_DNS_LEAK_PROTECTION, "0").with_value(KEY_CUSTOM_DNS, "1.1.1.1").build();
    let (disabled, _) = TestPorts::new().with_value(KEY_DNS_LEAK_PROTECTION, "0").with_value(KEY_CUSTOM_DNS, "None").build();

    assert_eq!(ChoiceSetting::Dns.persisted(leak.store.as_ref()).expect("leak"), Some(0));
    assert_eq!(ChoiceSetting::Dns.persisted(custom.store.as_ref()).expect("custom"), Some(1));
    assert_eq!(ChoiceSetting::Dns.persisted(disabled.store.as_ref()).expect("disabled"), Some(2));
}

#[test]
fn dns_leak_protection_and_disable_clear_custom_servers() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::Dns, None);
    let (_, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Enter]);
    assert_eq!(calls, vec![Call::set(KEY_DNS_LEAK_PROTECTION, "1"), Call::set(KEY_CUSTOM_DNS, "None")]);

    let mut editor = ChoiceEditor::new(ChoiceSetting::Dns, None);
    let (_, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Up, InputEvent::Enter]);
    assert_eq!(calls, vec![Call::set(KEY_DNS_LEAK_PROTECTION, "0"), Call::set(KEY_CUSTOM_DNS, "None")]);
}

#[test]
fn custom_dns_chains_into_seeded_list_editor() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::Dns, None);
    let ports = TestPorts::new().with_value(KEY_CUSTOM_DNS, "9.9.9.9, 1.1.1.1");
    let (mut outcomes, calls) = run(&mut editor, ports, &[InputEvent::Down, InputEvent::Enter]);

    assert!(calls.is_empty());
    match outcomes.pop() {
        Some(EditorOutcome::Chain(next)) => match *next {
            Editor::AddressList(list) => {
                assert_eq!(list.kind, AddressListKind::DnsServers);
                assert_eq!(list.buffer.as_str(), "9.9.9.9\n1.1.1.1\n");
            }
            other => panic!("expected address list editor, got {other:?}"),
        },
        other => panic!("expected chain, got {other:?}"),
    }
}

#[test]
fn split_tunneling_disable_writes_flag_and_enable_chains() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::SplitTunnel, Some(1));
    let (_, calls) = run(&mut editor, TestPorts::new(), &[InputEvent::Up, InputEvent::Enter]);
    assert_eq!(calls, vec![Call::set(KEY_SPLIT_TUNNEL, "0")]);

    let mut editor = ChoiceEditor::new(ChoiceSetting::SplitTunnel, Some(0));
    let ports = TestPorts::new().with_value(KEY_SPLIT_TUNNEL_IPS, "10.0.0.0/8");
    let (mut outcomes, calls) = run(&mut editor, ports, &[InputEvent::Down, InputEvent::Enter]);
    assert!(calls.is_empty());
    match outcomes.pop() {
        Some(EditorOutcome::Chain(next)) => {
            assert!(matches!(*next, Editor::AddressList(ref list) if list.kind == AddressListKind::SplitTunnelExclusions));
        }
        other => panic!("expected chain, got {other:?}"),
    }
}

#[test]
fn store_failure_is_reported_to_the_caller() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::PlanTier, None);
    let (mut collaborators, log) = TestPorts::new().failing_write(KEY_TIER).build();

    assert!(editor.handle_event(InputEvent::Enter, &mut collaborators).is_err());
    assert!(log.calls().is_empty());
}

#[test]
fn dns_choice_writes_both_keys_or_neither() {
    let mut editor = ChoiceEditor::new(ChoiceSetting::Dns, None);
    let (mut collaborators, log) = TestPorts::new().failing_write(KEY_CUSTOM_DNS).build();

    assert!(editor.handle_event(InputEvent::Enter, &mut collaborators).is_err());
    assert!(log.calls().is_empty());
    assert_eq!(collaborators.store.get(USER_SECTION, KEY_DNS_LEAK_PROTECTION).expect("get"), None);
}
