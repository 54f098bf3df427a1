//! Tip line text.

pub(crate) const DEFAULT_TIP: &str = "Press CTRL-C to exit VPN Settings";

const EASTER_EGG_ODDS: u32 = 501;
const EASTER_EGG_HIT: u32 = 256;
const EASTER_EGGS: [&str; 5] = [
    "Look up! Those are our servers in the sky!",
    "Soon™",
    "Made with <3",
    "Every packet deserves a good tunnel",
    "Powered by artificial quantum singularities",
];

/// Helper text for the bottom row.
///
/// Whenever a tip is applied there is a 1 in 501 chance it is swapped for an
/// easter egg. A one-shot notice, when set, replaces the tip until cleared.
#[derive(Debug, Clone)]
pub struct TipLine {
    base: String,
    shown: String,
    notice: Option<String>,
    roll: fn() -> u32,
}

impl TipLine {
    pub fn new() -> Self {
        Self::with_roll(random_roll)
    }

    pub fn with_roll(roll: fn() -> u32) -> Self {
        let mut tips = Self {
            base: String::new(),
            shown: String::new(),
            notice: None,
            roll,
        };
        tips.set(DEFAULT_TIP);
        tips
    }

    pub fn set(&mut self, tip: &str) {
        self.base = tip.to_string();
        self.shown = self.substitute(tip);
    }

    /// Apply `tip` only if it differs from the current one.
    pub(crate) fn update(&mut self, tip: &str) {
        if self.base != tip {
            self.set(tip);
        }
    }

    pub fn reset(&mut self) {
        self.set(DEFAULT_TIP);
    }

    /// Re-apply the current tip, used on redraw after resize.
    pub fn refresh(&mut self) {
        let base = self.base.clone();
        self.shown = self.substitute(&base);
    }

    pub fn notify(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn text(&self) -> &str {
        self.notice.as_deref().unwrap_or(&self.shown)
    }

    fn substitute(&self, tip: &str) -> String {
        let roll = (self.roll)();
        if roll % EASTER_EGG_ODDS == EASTER_EGG_HIT {
            let index = (roll / EASTER_EGG_ODDS) as usize % EASTER_EGGS.len();
            return EASTER_EGGS[index].to_string();
        }
        tip.to_string()
    }
}

impl Default for TipLine {
    fn default() -> Self {
        Self::new()
    }
}

fn random_roll() -> u32 {
    let mut bytes = [0u8; 4];
    match getrandom::fill(&mut bytes) {
        Ok(()) => u32::from_ne_bytes(bytes),
        Err(_) => 0,
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/tip_state.rs"]
mod tests;
