//! Layout Components
//!
//! Header and other application chrome.

pub mod header;
pub mod log_panel;
