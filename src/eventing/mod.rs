//! Eventing - Service to UI Event Types

pub mod app_event;
