//! Mutation and flow handlers for the Roster Admin GUI

use gpui::{AppContext as _, Context, Window};

use crate::api::ImagePayload;
use crate::app::App;
use crate::export;
use crate::images;
use crate::models::{filter_roster, Employee};

impl App {
    /// List → Add with an empty draft.
    pub fn open_add(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.view.open_add();
        self.form_error = None;
        self.form_preview = None;
        self.sync_form_inputs(window, cx);
        cx.notify();
    }

    /// List → Edit with the draft populated from the row, previewing the
    /// row's resolved image when there is one.
    pub fn open_edit(&mut self, employee: &Employee, window: &mut Window, cx: &mut Context<Self>) {
        self.view.open_edit(employee);
        self.form_error = None;
        self.form_preview = self.images.resolved(employee.id);
        self.sync_form_inputs(window, cx);
        cx.notify();
    }

    /// Add/Edit → List, discarding the draft. No network call.
    pub fn cancel_form(&mut self, cx: &mut Context<Self>) {
        self.view.cancel();
        self.form_error = None;
        self.form_preview = None;
        cx.notify();
    }

    /// Validate the draft, then send the create or update and reload.
    /// Success and failure are treated alike past the input-level checks:
    /// the view returns to List and re-reads the server's state.
    pub fn submit_form(&mut self, cx: &mut Context<Self>) {
        if let Err(problem) = self.view.draft.validate() {
            self.form_error = Some(problem);
            cx.notify();
            return;
        }

        let image = match self.load_image_payload() {
            Ok(image) => image,
            Err(problem) => {
                self.form_error = Some(problem);
                cx.notify();
                return;
            }
        };

        self.form_error = None;
        let draft = self.view.draft.clone();
        let edit_target = self.view.edit_target;
        let api_client = self.api_client.clone();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move {
                    match edit_target {
                        Some(id) => api_client.update_employee(id, &draft, image),
                        None => api_client.create_employee(&draft, image),
                    }
                })
                .await;

            let _ = this.update(cx, |app, cx| {
                if let Err(e) = result {
                    tracing::error!(error = %e, "submit failed");
                }
                app.view.finish_submit();
                app.form_preview = None;
                app.load_roster(cx);
                cx.notify();
            });
        })
        .detach();
    }

    fn load_image_payload(&self) -> Result<Option<ImagePayload>, String> {
        let Some(path) = &self.view.draft.image_path else {
            return Ok(None);
        };
        let bytes =
            std::fs::read(path).map_err(|e| format!("Could not read image file: {}", e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        Ok(Some(ImagePayload { file_name, bytes }))
    }

    /// Re-derive the form preview: a readable chosen file wins, otherwise
    /// the edit target's already-resolved image.
    pub fn refresh_form_preview(&mut self, cx: &mut Context<Self>) {
        self.form_preview = match &self.view.draft.image_path {
            Some(path) if path.is_file() => {
                std::fs::read(path).ok().and_then(images::image_from_bytes)
            }
            Some(_) => None,
            None => self.view.edit_target.and_then(|id| self.images.resolved(id)),
        };
        cx.notify();
    }

    /// Open the delete confirmation dialog for a row.
    pub fn request_delete(&mut self, employee: Employee, cx: &mut Context<Self>) {
        self.pending_delete = Some(employee);
        cx.notify();
    }

    /// Decline: abort with no request issued.
    pub fn cancel_delete(&mut self, cx: &mut Context<Self>) {
        self.pending_delete = None;
        cx.notify();
    }

    /// Confirm: issue the delete, drop the cached image handle, reload.
    pub fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        let Some(employee) = self.pending_delete.take() else {
            return;
        };
        let id = employee.id;
        let api_client = self.api_client.clone();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { api_client.delete_employee(id) })
                .await;

            let _ = this.update(cx, |app, cx| {
                if let Err(e) = result {
                    tracing::error!(id, error = %e, "delete failed");
                }
                app.images.remove(id);
                app.load_roster(cx);
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    /// Export the currently filtered view to employees.csv. An empty view
    /// produces a "no data" notice and no file.
    pub fn export_filtered_csv(&mut self, cx: &mut Context<Self>) {
        let rows = filter_roster(&self.roster, &self.view.filter);
        if rows.is_empty() {
            self.notice = Some("No data to export!".to_string());
            cx.notify();
            return;
        }

        match export::write_csv(&rows) {
            Ok(path) => {
                tracing::info!(rows = rows.len(), path = %path.display(), "exported roster");
                self.notice = Some(format!(
                    "Exported {} employees to {}",
                    rows.len(),
                    path.display()
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.notice = Some(format!("Export failed: {}", e));
            }
        }
        cx.notify();
    }

    pub fn dismiss_notice(&mut self, cx: &mut Context<Self>) {
        self.notice = None;
        cx.notify();
    }

    fn sync_form_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let draft = self.view.draft.clone();
        self.name_input.update(cx, |state, cx| {
            state.set_value(draft.name.clone(), window, cx);
        });
        self.email_input.update(cx, |state, cx| {
            state.set_value(draft.email.clone(), window, cx);
        });
        self.department_input.update(cx, |state, cx| {
            state.set_value(draft.department.clone(), window, cx);
        });
        self.salary_input.update(cx, |state, cx| {
            state.set_value(draft.salary.clone(), window, cx);
        });
        let image_path = draft
            .image_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.image_path_input.update(cx, |state, cx| {
            state.set_value(image_path.clone(), window, cx);
        });
    }
}
