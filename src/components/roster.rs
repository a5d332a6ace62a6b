//! Roster list view: search, CSV export, the employee table, add/edit/delete
//! entry points

use gpui::{
    div, img, prelude::FluentBuilder, px, AnyElement, Context, FontWeight, InteractiveElement,
    IntoElement, ParentElement, SharedString, StatefulInteractiveElement, Styled,
};
use gpui_component::input::Input;

use crate::app::App;
use crate::images::ImageSlot;
use crate::models::filter_roster;

impl App {
    pub fn render_roster(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let visible = filter_roster(&self.roster, &self.view.filter);

        div()
            .flex_1()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                // Toolbar: live filter plus the two list-level actions.
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .flex_1()
                            .max_w(px(420.))
                            .px_3()
                            .py_2()
                            .rounded(px(6.))
                            .bg(theme.background_secondary)
                            .border_1()
                            .border_color(theme.border)
                            .child(Input::new(&self.search_input).appearance(false)),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(format!("{} of {} shown", visible.len(), self.roster.len())),
                    )
                    .child(div().flex_1())
                    .child(
                        div()
                            .id("export-csv-btn")
                            .cursor_pointer()
                            .px_4()
                            .py_2()
                            .rounded_lg()
                            .bg(theme.accent_orange)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.background)
                            .hover(|style| style.bg(theme.accent_orange.opacity(0.8)))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.export_filtered_csv(cx);
                            }))
                            .child("Export to CSV"),
                    )
                    .child(
                        div()
                            .id("add-employee-btn")
                            .cursor_pointer()
                            .px_4()
                            .py_2()
                            .rounded_lg()
                            .bg(theme.accent_green)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.background)
                            .hover(|style| style.bg(theme.accent_green.opacity(0.8)))
                            .on_click(cx.listener(|this, _event, window, cx| {
                                this.open_add(window, cx);
                            }))
                            .child("Add Employee"),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .rounded_lg()
                    .overflow_hidden()
                    .border_1()
                    .border_color(theme.border)
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .bg(theme.table_header_bg)
                            .child(self.header_cell("Image").w(px(64.)))
                            .child(self.header_cell("Name").flex_1())
                            .child(self.header_cell("Email").flex_1())
                            .child(self.header_cell("Department").w(px(160.)))
                            .child(self.header_cell("Salary").w(px(110.)))
                            .child(self.header_cell("Actions").w(px(190.))),
                    )
                    .child(
                        div()
                            .id("roster-rows")
                            .flex_1()
                            .overflow_y_scroll()
                            .bg(theme.row_bg)
                            .when(visible.is_empty(), |el| {
                                el.child(
                                    div()
                                        .w_full()
                                        .px_3()
                                        .py_4()
                                        .flex()
                                        .justify_center()
                                        .text_sm()
                                        .text_color(theme.foreground_muted)
                                        .child("No employees found."),
                                )
                            })
                            .children(visible.iter().map(|employee| {
                                let edit_target = employee.clone();
                                let delete_target = employee.clone();

                                div()
                                    .id(SharedString::from(format!("employee-row-{}", employee.id)))
                                    .w_full()
                                    .flex()
                                    .items_center()
                                    .border_b_1()
                                    .border_color(theme.border)
                                    .hover(|style| style.bg(theme.row_hover_bg))
                                    .child(
                                        div()
                                            .w(px(64.))
                                            .px_3()
                                            .py_2()
                                            .child(self.render_avatar(employee.id)),
                                    )
                                    .child(self.body_cell(employee.name.clone()).flex_1())
                                    .child(self.body_cell(employee.email.clone()).flex_1())
                                    .child(self.body_cell(employee.department.clone()).w(px(160.)))
                                    .child(self.body_cell(employee.salary.clone()).w(px(110.)))
                                    .child(
                                        div()
                                            .w(px(190.))
                                            .px_3()
                                            .py_2()
                                            .flex()
                                            .items_center()
                                            .gap_2()
                                            .child(
                                                div()
                                                    .id(SharedString::from(format!(
                                                        "edit-{}",
                                                        employee.id
                                                    )))
                                                    .cursor_pointer()
                                                    .px_3()
                                                    .py_1()
                                                    .rounded(px(5.))
                                                    .bg(theme.accent_purple)
                                                    .text_sm()
                                                    .font_weight(FontWeight::MEDIUM)
                                                    .text_color(theme.background)
                                                    .hover(|style| {
                                                        style.bg(theme.accent_purple.opacity(0.8))
                                                    })
                                                    .on_click(cx.listener(
                                                        move |this, _event, window, cx| {
                                                            this.open_edit(
                                                                &edit_target,
                                                                window,
                                                                cx,
                                                            );
                                                        },
                                                    ))
                                                    .child("Edit"),
                                            )
                                            .child(
                                                div()
                                                    .id(SharedString::from(format!(
                                                        "delete-{}",
                                                        employee.id
                                                    )))
                                                    .cursor_pointer()
                                                    .px_3()
                                                    .py_1()
                                                    .rounded(px(5.))
                                                    .bg(theme.accent_red)
                                                    .text_sm()
                                                    .font_weight(FontWeight::MEDIUM)
                                                    .text_color(theme.background)
                                                    .hover(|style| {
                                                        style.bg(theme.accent_red.opacity(0.8))
                                                    })
                                                    .on_click(cx.listener(
                                                        move |this, _event, _window, cx| {
                                                            this.request_delete(
                                                                delete_target.clone(),
                                                                cx,
                                                            );
                                                        },
                                                    ))
                                                    .child("Delete"),
                                            ),
                                    )
                            })),
                    ),
            )
    }

    fn header_cell(&self, label: &'static str) -> gpui::Div {
        let theme = &self.theme;
        div()
            .px_3()
            .py_2()
            .text_sm()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.foreground)
            .child(label)
    }

    fn body_cell(&self, text: String) -> gpui::Div {
        div()
            .px_3()
            .py_2()
            .text_sm()
            .overflow_hidden()
            .child(text)
    }

    /// Resolved images render as a round thumbnail; anything else gets the
    /// placeholder glyph.
    fn render_avatar(&self, id: i64) -> AnyElement {
        let theme = &self.theme;
        match self.images.get(id) {
            Some(ImageSlot::Resolved(image)) => img(image.clone())
                .w(px(40.))
                .h(px(40.))
                .rounded_full()
                .into_any_element(),
            _ => div()
                .w(px(40.))
                .h(px(40.))
                .rounded_full()
                .bg(theme.background_elevated)
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .child("👤")
                .into_any_element(),
        }
    }
}
