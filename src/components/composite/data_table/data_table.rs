//! DataTable Component
//!
//! A scrollable data table with sortable column headers and a load-more
//! sentinel row at the bottom of the scroll region. The sentinel is the
//! surface that drives progressive loading; the table itself never decides
//! when more rows exist.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::column::Column;
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::theme::colors::UiColors;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    /// Whether the sentinel row offers more data
    has_more: bool,
    empty_message: SharedString,
    end_message: SharedString,
    on_sort: Option<Rc<dyn Fn(SharedString, &mut App) + 'static>>,
    on_load_more: Option<Rc<dyn Fn(&mut App) + 'static>>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            loading: false,
            has_more: false,
            empty_message: "No data".into(),
            end_message: "No more items to load".into(),
            on_sort: None,
            on_load_more: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set whether more rows can be revealed
    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Handler invoked with the column id when a sortable header is clicked
    pub fn on_sort(&mut self, handler: impl Fn(SharedString, &mut App) + 'static) {
        self.on_sort = Some(Rc::new(handler));
    }

    /// Handler invoked when the load-more sentinel is activated
    pub fn on_load_more(&mut self, handler: impl Fn(&mut App) + 'static) {
        self.on_load_more = Some(Rc::new(handler));
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        let on_sort = self.on_sort.clone();

        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(UiColors::table_header_bg())
            .border_b_1()
            .border_color(UiColors::border())
            .children(self.columns.iter().map(|col| {
                let cell = div()
                    .w(px(col.width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(UiColors::text_primary());

                if col.sortable {
                    let col_id = col.id.clone();
                    let on_sort = on_sort.clone();
                    cell.child(
                        div()
                            .id(col.id.clone())
                            .flex()
                            .items_center()
                            .gap_1()
                            .cursor_pointer()
                            .hover(|s| s.text_color(UiColors::accent()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                if let Some(handler) = &on_sort {
                                    handler(col_id.clone(), cx);
                                }
                            })
                            .child(col.label.clone())
                            .child(
                                div()
                                    .text_size(px(9.0))
                                    .text_color(UiColors::text_muted())
                                    .child("▲"),
                            ),
                    )
                    .into_any_element()
                } else {
                    cell.child(col.label.clone()).into_any_element()
                }
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            UiColors::content_bg()
        } else {
            UiColors::table_row_alt()
        };

        div()
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(UiColors::table_row_hover()))
            .border_b_1()
            .border_color(UiColors::border())
            .children(self.columns.iter().map(|col| {
                let cell_content = col.render_cell(row);
                div()
                    .w(px(col.width))
                    .px_3()
                    .text_sm()
                    .text_color(UiColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }))
    }

    /// Render the sentinel row that reveals the next page, or the end message
    fn render_footer(&self) -> impl IntoElement {
        if self.has_more {
            let on_load_more = self.on_load_more.clone();
            div()
                .id("load-more-sentinel")
                .w_full()
                .py_3()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(UiColors::accent())
                .cursor_pointer()
                .hover(|s| s.bg(UiColors::table_row_hover()))
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    if let Some(handler) = &on_load_more {
                        handler(cx);
                    }
                })
                .child("Load more")
                .into_any_element()
        } else {
            div()
                .w_full()
                .py_3()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(UiColors::text_muted())
                .child(self.end_message.clone())
                .into_any_element()
        }
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(UiColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(UiColors::text_muted())
            .child("Loading...")
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::content_bg())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                )
                .child(self.render_footer());
            table = table.child(rows_content);
        }

        table
    }
}
