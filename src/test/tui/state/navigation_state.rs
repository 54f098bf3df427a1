use super::{HoverDirection, NavigationState};

#[test]
fn hover_wraps_in_both_directions() {
    let mut nav = NavigationState::new(7);
    nav.move_hover(HoverDirection::Up);
    assert_eq!(nav.hovered(), 6);
    nav.move_hover(HoverDirection::Down);
    assert_eq!(nav.hovered(), 0);
}

#[test]
fn hover_stays_in_range_for_any_sequence() {
    let mut nav = NavigationState::new(7);
    let moves = [HoverDirection::Up, HoverDirection::Down, HoverDirection::Up, HoverDirection::Up];
    for step in 0..200 {
        nav.move_hover(moves[step % moves.len()]);
        assert!(nav.hovered() < nav.len());
    }
}

#[test]
fn selection_is_none_until_commit() {
    let mut nav = NavigationState::new(7);
    assert_eq!(nav.selected(), None);

    nav.move_hover(HoverDirection::Down);
    nav.move_hover(HoverDirection::Down);
    assert_eq!(nav.selected(), None);

    assert_eq!(nav.commit(), 2);
    assert_eq!(nav.selected(), Some(2));
}

#[test]
fn hover_returns_to_selection_after_editing() {
    let mut nav = NavigationState::new(7);
    nav.move_hover(HoverDirection::Down);
    nav.commit();
    nav.move_hover(HoverDirection::Down);
    nav.move_hover(HoverDirection::Down);
    assert_eq!(nav.hovered(), 3);

    nav.rest_on_selection();
    assert_eq!(nav.hovered(), 1);
}

#[test]
fn rest_without_selection_keeps_hover() {
    let mut nav = NavigationState::new(7);
    nav.move_hover(HoverDirection::Up);
    nav.rest_on_selection();
    assert_eq!(nav.hovered(), 6);
}
