//! Select Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::UiColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select control. Clicking advances to the next option (wrapping), which
/// keeps the control self-contained; a floating dropdown needs window-level
/// overlay plumbing this app does not carry.
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    on_change: Option<Box<dyn Fn(&str, &mut Window, &mut App) + 'static>>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            on_change: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Handler invoked with the newly selected value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Value that a click advances to
    fn next_value(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        let current = self
            .selected
            .as_ref()
            .and_then(|v| self.options.iter().position(|o| &o.value == v));
        let next = match current {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        Some(self.options[next].value.clone())
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or(self.placeholder.clone());

        let text_color = if self.selected.is_some() {
            UiColors::text_primary()
        } else {
            UiColors::input_placeholder()
        };

        let next = self.next_value();
        let on_change = self.on_change;

        let mut element = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(UiColors::input_bg())
            .border_1()
            .border_color(UiColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(120.0))
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .hover(|s| s.border_color(UiColors::border_focus()))
            .child(display_text)
            .child(
                div()
                    .text_color(UiColors::text_muted())
                    .text_size(px(10.0))
                    .child("▼"),
            );

        if let (Some(next), Some(handler)) = (next, on_change) {
            element = element.on_click(move |_event: &ClickEvent, window, cx| {
                handler(&next, window, cx);
            });
        }

        element
    }
}
