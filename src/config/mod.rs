//! Config module — project-level settings from `.securevault.toml`.

pub mod settings;

pub use settings::Settings;
