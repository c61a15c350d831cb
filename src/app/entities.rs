//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency to avoid unnecessary re-renders.

use gpui::{App, AppContext, Entity, Global};

use crate::state::log_state::LogState;
use crate::state::roster_state::RosterState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Employee roster view state
    pub roster: Entity<RosterState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            roster: cx.new(|_| RosterState::default()),
            logs: cx.new(|_| LogState::default()),
        }
    }
}
