//! Placeholder sign-in gate for the Roster Admin GUI
//!
//! No credential is checked or transmitted; submitting simply opens the
//! roster view.

use gpui::{
    div, px, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled,
};
use gpui_component::input::{Input, InputState};

use crate::app::App;

impl App {
    pub fn render_login(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(360.))
                    .p_6()
                    .rounded_lg()
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border)
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent_cyan)
                            .mb_1()
                            .child("Employee Roster"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .mb_4()
                            .child("Sign in to continue"),
                    )
                    .child(self.login_field(&self.username_input))
                    .child(self.login_field(&self.password_input))
                    .child(
                        div()
                            .id("sign-in-btn")
                            .cursor_pointer()
                            .w_full()
                            .py_2()
                            .mt_2()
                            .rounded_lg()
                            .bg(theme.accent_cyan)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.background)
                            .flex()
                            .justify_center()
                            .hover(|style| style.bg(theme.accent_cyan.opacity(0.8)))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.sign_in(cx);
                            }))
                            .child("Sign In"),
                    ),
            )
    }

    fn login_field(&self, state: &Entity<InputState>) -> impl IntoElement {
        let theme = &self.theme;
        div()
            .w_full()
            .px_3()
            .py_2()
            .mb_3()
            .rounded(px(6.))
            .bg(theme.background)
            .border_1()
            .border_color(theme.border)
            .child(Input::new(state).appearance(false))
    }
}
