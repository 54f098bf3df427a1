mod events;
mod run;

pub use run::run_settings;
