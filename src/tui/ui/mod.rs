//! Shared rendering helpers and frame chrome.

pub(crate) mod chrome;
pub(crate) mod option_list;
pub(crate) mod status_line;
pub(crate) mod theme;
