//! Application layer: the behavioral core and its coordinator.
//!
//! - `regions` / `tracker` / `navigator` - the scroll-spy and navigation
//!   logic, kept free of widget handles where possible
//! - `theme` / `settings` / `platform` - display preference, persistence,
//!   and the ambient-signal probe
//! - `state` - the coordinator driven by the dispatch loop in main

pub mod error;
pub mod links;
pub mod messages;
pub mod navigator;
pub mod platform;
pub mod regions;
pub mod settings;
pub mod state;
pub mod theme;
pub mod tracker;

// Re-exports for convenient external access
pub use messages::Message;
pub use regions::RegionId;
pub use settings::AppSettings;
pub use state::AppState;
pub use theme::ThemePreference;
