//! Service Layer
//!
//! Async operations live here, isolated from the UI thread.
//!
//! ```text
//! UI (GPUI)  --ServiceCommand-->  ServiceHub (tokio thread)
//!            <--AppEvent--------  EmployeeApi (reqwest)
//! ```

pub mod api;
pub mod hub;
