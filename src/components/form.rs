//! Add/edit form for the Roster Admin GUI

use gpui::{
    div, img, prelude::FluentBuilder, px, Context, Entity, FontWeight, InteractiveElement,
    IntoElement, ParentElement, StatefulInteractiveElement, Styled,
};
use gpui_component::input::{Input, InputState};

use crate::app::App;
use crate::models::ViewMode;

impl App {
    pub fn render_form(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let is_edit = self.view.mode == ViewMode::Edit;
        let title = if is_edit { "Update Employee" } else { "Add New Employee" };

        div()
            .flex_1()
            .flex()
            .justify_center()
            .p_4()
            .child(
                div()
                    .w(px(550.))
                    .h_full()
                    .flex()
                    .flex_col()
                    .p_6()
                    .rounded_lg()
                    .bg(theme.card_bg)
                    .border_1()
                    .border_color(theme.border)
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .mb_4()
                            .child(title),
                    )
                    .child(self.form_field("Name", &self.name_input))
                    .child(self.form_field("Email", &self.email_input))
                    .child(self.form_field("Department", &self.department_input))
                    .child(self.form_field("Salary", &self.salary_input))
                    .child(self.form_field("Profile image", &self.image_path_input))
                    .when_some(self.form_preview.clone(), |el, preview| {
                        el.child(
                            div()
                                .mb_3()
                                .flex()
                                .items_center()
                                .gap_3()
                                .child(img(preview).w(px(64.)).h(px(64.)).rounded_full())
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(theme.foreground_muted)
                                        .child("Preview"),
                                ),
                        )
                    })
                    .when_some(self.form_error.clone(), |el, problem| {
                        el.child(
                            div()
                                .mb_3()
                                .text_sm()
                                .text_color(theme.accent_red)
                                .child(problem),
                        )
                    })
                    .child(
                        div()
                            .id("save-employee-btn")
                            .cursor_pointer()
                            .w_full()
                            .py_2()
                            .rounded_lg()
                            .bg(theme.accent_cyan)
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.background)
                            .flex()
                            .justify_center()
                            .hover(|style| style.bg(theme.accent_cyan.opacity(0.8)))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.submit_form(cx);
                            }))
                            .child(if is_edit { "Update Employee" } else { "Add Employee" }),
                    )
                    .child(
                        div()
                            .id("cancel-form-btn")
                            .cursor_pointer()
                            .w_full()
                            .py_2()
                            .mt_2()
                            .rounded_lg()
                            .bg(theme.background_elevated)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.foreground)
                            .flex()
                            .justify_center()
                            .hover(|style| style.bg(theme.background_highlight))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.cancel_form(cx);
                            }))
                            .child("Cancel"),
                    ),
            )
    }

    fn form_field(&self, label: &'static str, state: &Entity<InputState>) -> impl IntoElement {
        let theme = &self.theme;
        div()
            .w_full()
            .mb_3()
            .child(
                div()
                    .text_xs()
                    .text_color(theme.foreground_muted)
                    .mb_1()
                    .child(label),
            )
            .child(
                div()
                    .w_full()
                    .px_3()
                    .py_2()
                    .rounded(px(6.))
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .child(Input::new(state).appearance(false)),
            )
    }
}
