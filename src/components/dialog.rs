//! Modal dialogs: delete confirmation and blocking notices

use gpui::{
    div, px, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled,
};

use crate::app::App;
use crate::models::Employee;

impl App {
    /// Interactive confirmation before a delete is issued. Declining aborts
    /// with no request.
    pub fn render_confirm_dialog(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id("confirm-delete-overlay")
            .occlude()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(theme.overlay_scrim)
            .child(
                div()
                    .w(px(420.))
                    .p_6()
                    .rounded_lg()
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border)
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent_red)
                            .mb_2()
                            .child("Delete Employee"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.foreground)
                            .mb_4()
                            .child(format!(
                                "Are you sure you want to delete {}? This cannot be undone.",
                                employee.name
                            )),
                    )
                    .child(
                        div()
                            .flex()
                            .justify_end()
                            .gap_2()
                            .child(
                                div()
                                    .id("confirm-delete-cancel")
                                    .cursor_pointer()
                                    .px_4()
                                    .py_2()
                                    .rounded_lg()
                                    .bg(theme.background_elevated)
                                    .text_sm()
                                    .text_color(theme.foreground)
                                    .hover(|style| style.bg(theme.background_highlight))
                                    .on_click(cx.listener(|this, _event, _window, cx| {
                                        this.cancel_delete(cx);
                                    }))
                                    .child("Cancel"),
                            )
                            .child(
                                div()
                                    .id("confirm-delete-accept")
                                    .cursor_pointer()
                                    .px_4()
                                    .py_2()
                                    .rounded_lg()
                                    .bg(theme.accent_red)
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(theme.background)
                                    .hover(|style| style.bg(theme.accent_red.opacity(0.8)))
                                    .on_click(cx.listener(|this, _event, _window, cx| {
                                        this.confirm_delete(cx);
                                    }))
                                    .child("Delete"),
                            ),
                    ),
            )
    }

    /// Blocking notice used for load failures and export results.
    pub fn render_notice_dialog(&self, notice: String, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .id("notice-overlay")
            .occlude()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(theme.overlay_scrim)
            .child(
                div()
                    .w(px(420.))
                    .p_6()
                    .rounded_lg()
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border)
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent_yellow)
                            .mb_2()
                            .child("Notice"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.foreground)
                            .mb_4()
                            .child(notice),
                    )
                    .child(
                        div().flex().justify_end().child(
                            div()
                                .id("notice-dismiss")
                                .cursor_pointer()
                                .px_4()
                                .py_2()
                                .rounded_lg()
                                .bg(theme.accent_cyan)
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(theme.background)
                                .hover(|style| style.bg(theme.accent_cyan.opacity(0.8)))
                                .on_click(cx.listener(|this, _event, _window, cx| {
                                    this.dismiss_notice(cx);
                                }))
                                .child("OK"),
                        ),
                    ),
            )
    }
}
