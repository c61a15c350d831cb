//! LogPanel Component
//!
//! Bottom panel showing recent service events on a dark background.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::LOG_PANEL_HEIGHT;
use crate::theme::colors::UiColors;
use crate::utils::format::format_time;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.read(cx);

        div()
            .h(px(LOG_PANEL_HEIGHT))
            .w_full()
            .bg(UiColors::log_panel_bg())
            .border_t_1()
            .border_color(UiColors::border())
            .flex()
            .flex_col()
            .child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_3()
                    .py_1()
                    .children(logs.entries().iter().rev().map(|entry| {
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .text_size(px(12.0))
                            .child(
                                div()
                                    .text_color(UiColors::text_muted())
                                    .child(format_time(&entry.timestamp)),
                            )
                            .child(
                                div()
                                    .w(px(44.0))
                                    .text_color(entry.level.color())
                                    .child(entry.level.label()),
                            )
                            .child(
                                div()
                                    .text_color(UiColors::text_light())
                                    .child(entry.message.clone()),
                            )
                    })),
            )
    }
}
