//! DataTable Component
//!
//! A reusable data table with sortable headers and progressive loading.

pub mod column;
pub mod data_table;

pub use column::Column;
pub use data_table::DataTable;
