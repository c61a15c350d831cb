//! Header Component
//!
//! The application header with logo, title, and fetch status.

use gpui::{
    div, px, Context, IntoElement, ParentElement, Render, Styled, Window, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::theme::colors::UiColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.roster, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let roster = self.entities.roster.read(cx);
        let status: Option<(gpui::Rgba, String)> = if roster.loading {
            Some((UiColors::text_header(), "Loading...".to_string()))
        } else if let Some(err) = &roster.fetch_error {
            Some((UiColors::danger(), err.clone()))
        } else {
            None
        };

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(UiColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(UiColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("R"),
                    )
                    .child(
                        div()
                            .text_color(UiColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("RosterView"),
                    ),
            )
            // Right side: fetch status
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(status.map(|(color, text)| {
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(color)
                            .text_size(px(13.0))
                            .child(text)
                    })),
            )
    }
}
