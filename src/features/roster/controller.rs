//! Roster Controller
//!
//! The mutating entry points from the rendering surface into the roster
//! state machine: filter changes, sort requests, and load-more.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::employee::SortKey;
use crate::eventing::app_event::AppEvent;
use crate::services::hub::{ServiceCommand, ServiceHub};
use crate::state::roster_state::GenderFilter;

/// Roster page controller
pub struct RosterController {
    entities: AppEntities,
}

impl RosterController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Kick off the one-time roster fetch
    pub fn load(&self, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.begin_loading();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchRoster);
        }
    }

    /// Change the gender selection; re-filters immediately
    pub fn set_gender(&self, gender: GenderFilter, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.set_gender(gender);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!(
                "Gender filter: {}",
                gender.label()
            )));
        }
    }

    /// Change the city substring; called on every keystroke
    pub fn set_city(&self, city: &str, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.set_city(city);
            cx.notify();
        });
    }

    /// Reset both filters to their defaults
    pub fn clear_filters(&self, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.clear_filters();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info("Filters cleared"));
        }
    }

    /// Sort the rows currently on screen
    pub fn sort_by(&self, key: SortKey, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.sort_by(key);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!("Sorted by {}", key.label())));
        }
    }

    /// Reveal the next page of the filtered set
    pub fn load_more(&self, cx: &mut App) {
        self.entities.roster.update(cx, |state, cx| {
            state.load_more();
            cx.notify();
        });
    }
}
