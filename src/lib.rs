//! Desktop brochure for Fundación Luz de Vida.
//!
//! One window: a fixed header with scroll-spy navigation, a scrollable
//! column of content sections, and a persisted light/dark theme.

pub mod app;
pub mod ui;
