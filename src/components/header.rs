//! Header component for the Roster Admin GUI

use gpui::{
    div, prelude::FluentBuilder, Context, FontWeight, IntoElement, ParentElement, Styled,
};

use crate::app::App;

impl App {
    pub fn render_header(&self, _cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(theme.background_secondary)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_xl().child("🗂️"))
                    .child(
                        div()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.accent_cyan)
                                    .child("Employee Roster"),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_muted)
                                    .child(self.api_client.get_base_url().to_string()),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                div().w_2().h_2().rounded_full().bg(if self.is_loading {
                                    theme.accent_yellow
                                } else {
                                    theme.accent_green
                                }),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.foreground_dim)
                                    .child(if self.is_loading { "Loading..." } else { "Ready" }),
                            ),
                    )
                    .when_some(self.last_refreshed.clone(), |el, at| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(theme.foreground_muted)
                                .child(format!("Updated {}", at)),
                        )
                    }),
            )
    }
}
