//! Feature-sliced TUI behavior.

pub(crate) mod address_list;
pub(crate) mod choice;
pub(crate) mod credentials;
pub(crate) mod detail;
pub(crate) mod navigation;
pub(crate) mod purge;
