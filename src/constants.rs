//! UI Constants
//!
//! Centralized constants for consistent layout and paging behavior.

/// Number of rows revealed per load increment
pub const PAGE_SIZE: usize = 10;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Table row geometry
pub const TABLE_ROW_HEIGHT: f32 = 44.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;

/// Log panel height
pub const LOG_PANEL_HEIGHT: f32 = 120.0;

/// Log ring buffer capacity
pub const GLOBAL_LOG_CAPACITY: usize = 500;

/// Default roster endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users";

/// Default request timeout for the roster fetch
pub const FETCH_TIMEOUT_SECS: u64 = 30;
