//! Domain Types
//!
//! Plain data types shared between services, state, and the UI.

pub mod config;
pub mod employee;
