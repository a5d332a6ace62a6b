//! Core App state and initialization for the Roster Admin GUI

use std::path::PathBuf;
use std::sync::Arc;

use gpui::{
    div, prelude::FluentBuilder, AppContext as _, Context, Entity, Image, IntoElement,
    ParentElement, Render, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use crate::api::ApiClient;
use crate::images::{self, ImageCache};
use crate::models::{Employee, ViewMode, ViewState};
use crate::theme::MonokaiTheme;

/// Main application state
pub struct App {
    pub theme: MonokaiTheme,
    pub api_client: ApiClient,

    /// Placeholder login gate; no real check is performed.
    pub logged_in: bool,

    /// Last fetched employee list, replaced wholesale on every reload.
    pub roster: Vec<Employee>,
    pub view: ViewState,
    pub images: ImageCache,

    pub is_loading: bool,
    pub last_refreshed: Option<String>,

    /// Blocking modal notice (load failures, export results).
    pub notice: Option<String>,
    /// Employee awaiting delete confirmation.
    pub pending_delete: Option<Employee>,
    /// First validation problem blocking the current form, if any.
    pub form_error: Option<String>,
    /// Preview shown in the add/edit form: the chosen file, or the target
    /// row's already-resolved image.
    pub form_preview: Option<Arc<Image>>,

    // Input components
    pub search_input: Entity<GpuiInputState>,
    pub name_input: Entity<GpuiInputState>,
    pub email_input: Entity<GpuiInputState>,
    pub department_input: Entity<GpuiInputState>,
    pub salary_input: Entity<GpuiInputState>,
    pub image_path_input: Entity<GpuiInputState>,
    pub username_input: Entity<GpuiInputState>,
    pub password_input: Entity<GpuiInputState>,
}

impl App {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let api_client = ApiClient::new(std::env::var("ROSTER_API_URL").ok());

        let search_input = cx.new(|cx| {
            GpuiInputState::new(window, cx).placeholder("Search by name or department...")
        });
        let name_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Name"));
        let email_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Email"));
        let department_input =
            cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Department"));
        let salary_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Salary"));
        let image_path_input = cx.new(|cx| {
            GpuiInputState::new(window, cx).placeholder("Image file path (optional)")
        });
        let username_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Username"));
        let password_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Password"));

        // The filter is recomputed on every keystroke; no debouncing.
        cx.subscribe_in(
            &search_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                let text = input_state.read(cx).value().to_string();
                if this.view.filter != text {
                    this.view.filter = text;
                    cx.notify();
                }
            },
        )
        .detach();

        // Keep the draft in sync with the form inputs.
        cx.subscribe_in(
            &name_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                this.view.draft.name = input_state.read(cx).value().to_string();
            },
        )
        .detach();
        cx.subscribe_in(
            &email_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                this.view.draft.email = input_state.read(cx).value().to_string();
            },
        )
        .detach();
        cx.subscribe_in(
            &department_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                this.view.draft.department = input_state.read(cx).value().to_string();
            },
        )
        .detach();
        cx.subscribe_in(
            &salary_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                this.view.draft.salary = input_state.read(cx).value().to_string();
            },
        )
        .detach();
        cx.subscribe_in(
            &image_path_input,
            window,
            |this, input_state: &Entity<GpuiInputState>, _event: &InputEvent, _window, cx| {
                let text = input_state.read(cx).value().to_string();
                let trimmed = text.trim();
                this.view.draft.image_path = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
                this.refresh_form_preview(cx);
            },
        )
        .detach();

        // Enter on the password field signs in, like submitting the form.
        cx.subscribe_in(
            &password_input,
            window,
            |this, _input_state: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.sign_in(cx);
                }
            },
        )
        .detach();

        Self {
            theme: MonokaiTheme::new(),
            api_client,
            logged_in: false,
            roster: vec![],
            view: ViewState::new(),
            images: ImageCache::new(),
            is_loading: false,
            last_refreshed: None,
            notice: None,
            pending_delete: None,
            form_error: None,
            form_preview: None,
            search_input,
            name_input,
            email_input,
            department_input,
            salary_input,
            image_path_input,
            username_input,
            password_input,
        }
    }

    /// Placeholder gate: any submit passes. Loads the roster on entry.
    pub fn sign_in(&mut self, cx: &mut Context<Self>) {
        if self.logged_in {
            return;
        }
        self.logged_in = true;
        tracing::info!(base_url = %self.api_client.get_base_url(), "signed in");
        self.load_roster(cx);
        cx.notify();
    }

    /// Fetch the full list. On failure the prior roster is left untouched
    /// and a blocking notice is raised.
    pub fn load_roster(&mut self, cx: &mut Context<Self>) {
        self.is_loading = true;
        cx.notify();

        let api_client = self.api_client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.fetch_employees() })
                .await;

            let _ = this.update(cx, |app, cx| {
                app.is_loading = false;
                match result {
                    Ok(employees) => {
                        tracing::debug!(count = employees.len(), "roster loaded");
                        app.roster = employees;
                        app.last_refreshed =
                            Some(chrono::Local::now().format("%H:%M").to_string());
                        // Shed cached images for records that disappeared
                        // server-side, then resolve the newly visible ones.
                        let live: std::collections::HashSet<i64> =
                            app.roster.iter().map(|e| e.id).collect();
                        app.images.retain(|id| live.contains(&id));
                        app.resolve_missing_images(cx);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to fetch employees");
                        app.notice = Some(format!("Failed to fetch employees: {}", e));
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Lazily resolve profile images for roster rows without a cached slot.
    /// Failures become the placeholder, permanently for this load cycle.
    pub fn resolve_missing_images(&mut self, cx: &mut Context<Self>) {
        let missing: Vec<i64> = self
            .roster
            .iter()
            .map(|e| e.id)
            .filter(|id| !self.images.contains(*id))
            .collect();

        for id in missing {
            let api_client = self.api_client.clone();
            cx.spawn(async move |this, cx| {
                let result = cx
                    .background_spawn(async move { api_client.fetch_image(id) })
                    .await;

                let _ = this.update(cx, |app, cx| {
                    // The record may have been deleted while the fetch was in
                    // flight; caching a slot for it would leak the handle.
                    if !app.roster.iter().any(|e| e.id == id) {
                        return;
                    }
                    match result.ok().and_then(images::image_from_bytes) {
                        Some(image) => app.images.insert_resolved(id, image),
                        None => app.images.insert_placeholder(id),
                    }
                    cx.notify();
                });
            })
            .detach();
        }
    }
}

impl Render for App {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        if !self.logged_in {
            return div()
                .size_full()
                .bg(theme.background)
                .text_color(theme.foreground)
                .child(self.render_login(cx))
                .into_any_element();
        }

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(match self.view.mode {
                ViewMode::List => self.render_roster(cx).into_any_element(),
                ViewMode::Add | ViewMode::Edit => self.render_form(cx).into_any_element(),
            })
            .when_some(self.pending_delete.clone(), |el, employee| {
                el.child(self.render_confirm_dialog(&employee, cx))
            })
            .when_some(self.notice.clone(), |el, notice| {
                el.child(self.render_notice_dialog(notice, cx))
            })
            .into_any_element()
    }
}
