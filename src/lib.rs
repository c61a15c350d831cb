//! RosterView Client Library
//!
//! This crate provides the main application logic for RosterView, a native
//! GUI client that browses an employee roster with client-side filtering,
//! sorting, and progressive loading.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
