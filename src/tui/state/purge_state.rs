//! Purge confirmation state.

pub(crate) const PURGE_QUESTION: &str = "Are you sure you want to purge the configuration?";
pub(crate) const PURGE_OPTIONS: [&str; 2] = ["YES", "NO"];
pub(crate) const PURGE_YES: usize = 0;
pub(crate) const PURGE_NO: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PurgeEditor {
    pub(crate) in_progress: usize,
}

impl PurgeEditor {
    /// Starts on "NO" so a stray Enter cannot wipe anything.
    pub(crate) fn new() -> Self {
        Self { in_progress: PURGE_NO }
    }

    pub(crate) fn move_up(&mut self) {
        self.in_progress = (self.in_progress + PURGE_OPTIONS.len() - 1) % PURGE_OPTIONS.len();
    }

    pub(crate) fn move_down(&mut self) {
        self.in_progress = (self.in_progress + 1) % PURGE_OPTIONS.len();
    }

    pub(crate) fn confirmed(&self) -> bool {
        self.in_progress == PURGE_YES
    }
}
