//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, SharedString};

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width in pixels
    pub width: f32,
    /// Whether clicking the header requests a sort on this column
    pub sortable: bool,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement + 'static>,
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: 120.0,
            sortable: false,
            render: Box::new(render),
        }
    }

    /// Set the column width
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
