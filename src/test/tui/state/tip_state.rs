use super::{DEFAULT_TIP, EASTER_EGG_ODDS, EASTER_EGGS, TipLine};

fn never() -> u32 {
    0
}

fn always() -> u32 {
    256
}

fn second_egg() -> u32 {
    EASTER_EGG_ODDS + 256
}

#[test]
fn starts_with_default_tip() {
    let tips = TipLine::with_roll(never);
    assert_eq!(tips.text(), DEFAULT_TIP);
}

#[test]
fn set_and_reset() {
    let mut tips = TipLine::with_roll(never);
    tips.set("Pick one");
    assert_eq!(tips.text(), "Pick one");
    tips.reset();
    assert_eq!(tips.text(), DEFAULT_TIP);
}

#[test]
fn winning_roll_substitutes_an_easter_egg() {
    let tips = TipLine::with_roll(always);
    assert_eq!(tips.text(), EASTER_EGGS[0]);

    let mut tips = TipLine::with_roll(second_egg);
    tips.set("Pick one");
    assert_eq!(tips.text(), EASTER_EGGS[1]);
}

#[test]
fn notice_overrides_until_cleared() {
    let mut tips = TipLine::with_roll(never);
    tips.notify("VPN plan updated");
    assert_eq!(tips.text(), "VPN plan updated");

    tips.refresh();
    assert_eq!(tips.text(), "VPN plan updated");

    tips.clear_notice();
    assert_eq!(tips.text(), DEFAULT_TIP);
}

#[test]
fn update_only_applies_changed_tips() {
    let mut tips = TipLine::with_roll(never);
    tips.update(DEFAULT_TIP);
    assert_eq!(tips.text(), DEFAULT_TIP);
    tips.update("Next field");
    assert_eq!(tips.text(), "Next field");
}
