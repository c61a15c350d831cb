//! Roster Page
//!
//! Displays the employee roster in a data table with a filter bar above it.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::TextInput;
use crate::domain::employee::{Employee, SortKey};
use crate::features::roster::controller::RosterController;
use crate::state::roster_state::GenderFilter;
use crate::theme::colors::UiColors;
use crate::utils::format::truncate;

/// Roster page component
pub struct RosterPage {
    entities: AppEntities,
    controller: Rc<RosterController>,
    table: Entity<DataTable<Employee>>,
    city_input: Entity<TextInput>,
}

impl RosterPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = Rc::new(RosterController::new(entities.clone()));

        let table = cx.new(|cx| {
            let mut table = DataTable::<Employee>::new(cx);
            table.set_columns(Self::create_columns());
            table.set_empty_message("No employees match the current filters");

            let sort_controller = controller.clone();
            table.on_sort(move |column_id, cx| {
                let key = match column_id.as_ref() {
                    "id" => Some(SortKey::Id),
                    "full-name" => Some(SortKey::FirstName),
                    "demography" => Some(SortKey::Age),
                    _ => None,
                };
                if let Some(key) = key {
                    sort_controller.sort_by(key, cx);
                }
            });

            let more_controller = controller.clone();
            table.on_load_more(move |cx| more_controller.load_more(cx));

            table
        });

        let city_input = cx.new(|cx| {
            let mut input = TextInput::new("city-filter", cx);
            input.set_placeholder("Filter by City");
            let city_controller = controller.clone();
            input.on_change(move |value, cx| city_controller.set_city(value, cx));
            input
        });

        // Mirror roster state into the table entity.
        let table_clone = table.clone();
        cx.observe(&entities.roster, move |_this, roster, cx| {
            let (rows, loading, has_more) = {
                let state = roster.read(cx);
                (state.visible.clone(), state.loading, state.has_more)
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                table.set_has_more(has_more);
                cx.notify();
            });
        })
        .detach();

        // One fetch at mount; the record set is never refetched.
        controller.load(cx);

        Self {
            entities,
            controller,
            table,
            city_input,
        }
    }

    fn create_columns() -> Vec<Column<Employee>> {
        vec![
            Column::new("id", "Id", |row: &Employee| {
                div().text_sm().child(row.id.to_string()).into_any_element()
            })
            .width(60.0)
            .sortable(),
            Column::new("image", "Image", |row: &Employee| {
                // Avatar placeholder; image decoding is out of scope.
                div()
                    .w(px(48.0))
                    .h(px(28.0))
                    .rounded_sm()
                    .bg(UiColors::table_row_hover())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(10.0))
                    .text_color(UiColors::text_muted())
                    .child(if row.image.is_empty() { "—" } else { "img" })
                    .into_any_element()
            })
            .width(80.0),
            Column::new("full-name", "Full Name", |row: &Employee| {
                div().text_sm().child(row.full_name()).into_any_element()
            })
            .width(180.0)
            .sortable(),
            Column::new("company", "Company", |row: &Employee| {
                div()
                    .text_sm()
                    .child(truncate(&row.company.name, 24))
                    .into_any_element()
            })
            .width(190.0),
            Column::new("demography", "Demography", |row: &Employee| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(row.demography())
                    .into_any_element()
            })
            .width(110.0)
            .sortable(),
            Column::new("designation", "Designation", |row: &Employee| {
                div()
                    .text_sm()
                    .text_color(UiColors::text_secondary())
                    .child(truncate(&row.company.title, 24))
                    .into_any_element()
            })
            .width(190.0),
            Column::new("location", "Location", |row: &Employee| {
                div()
                    .text_sm()
                    .text_color(UiColors::text_secondary())
                    .child(row.address.city.clone())
                    .into_any_element()
            })
            .width(140.0),
        ]
    }

    fn render_filter_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let gender = self.entities.roster.read(cx).filter.gender;
        let gender_controller = self.controller.clone();
        let clear_controller = self.controller.clone();
        let clear_input = self.city_input.clone();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_secondary())
                            .child("Gender:"),
                    )
                    .child(
                        Select::new("gender-filter")
                            .options(vec![
                                SelectOption::new("", "All"),
                                SelectOption::new("male", "Male"),
                                SelectOption::new("female", "Female"),
                            ])
                            .selected(gender.value())
                            .on_change(move |value, _window, cx| {
                                gender_controller
                                    .set_gender(GenderFilter::from_value(value), cx);
                            }),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_secondary())
                            .child("City:"),
                    )
                    .child(self.city_input.clone()),
            )
            .child(
                Button::ghost("clear-filters", "Clear").on_click(
                    move |_event, _window, cx| {
                        clear_input.update(cx, |input, cx| {
                            input.set_value("");
                            cx.notify();
                        });
                        clear_controller.clear_filters(cx);
                    },
                ),
            )
    }
}

impl Render for RosterPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let roster = self.entities.roster.read(cx);
        let shown = roster.visible.len();
        let matching = roster.filtered_count();
        let filter_bar = self.render_filter_bar(cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Title row
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Employees"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_secondary())
                            .child(format!("{shown} of {matching} shown")),
                    ),
            )
            // Filter bar
            .child(filter_bar)
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
    }
}
