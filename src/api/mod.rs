//! Blocking REST client for the employee backend
//!
//! All calls here run on the background executor (see `App`); the UI thread
//! never blocks on the network.

use anyhow::{Context as _, Result};
use reqwest::blocking::multipart::{Form, Part};

use crate::models::{Employee, EmployeeDraft};

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Image bytes selected for upload, already read from disk.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Client for the `/api/employees` REST collection.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/employees", self.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/api/employees/{}", self.base_url, id)
    }

    /// GET the full employee list. Any network or parse failure is an error;
    /// the caller leaves its prior state untouched in that case.
    pub fn fetch_employees(&self) -> Result<Vec<Employee>> {
        let employees = self
            .http
            .get(self.collection_url())
            .send()
            .context("request failed")?
            .error_for_status()
            .context("server rejected the request")?
            .json::<Vec<Employee>>()
            .context("response was not a valid employee list")?;
        Ok(employees)
    }

    /// POST a new employee as multipart form data.
    pub fn create_employee(&self, draft: &EmployeeDraft, image: Option<ImagePayload>) -> Result<()> {
        let response = self
            .http
            .post(self.collection_url())
            .multipart(Self::form_body(draft, image))
            .send()
            .context("create request failed")?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "create was rejected by the server");
        }
        Ok(())
    }

    /// PUT updated fields for an existing employee.
    pub fn update_employee(
        &self,
        id: i64,
        draft: &EmployeeDraft,
        image: Option<ImagePayload>,
    ) -> Result<()> {
        let response = self
            .http
            .put(self.record_url(id))
            .multipart(Self::form_body(draft, image))
            .send()
            .context("update request failed")?;
        if !response.status().is_success() {
            tracing::warn!(id, status = %response.status(), "update was rejected by the server");
        }
        Ok(())
    }

    /// DELETE an employee by identifier.
    pub fn delete_employee(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.record_url(id))
            .send()
            .context("delete request failed")?;
        if !response.status().is_success() {
            tracing::warn!(id, status = %response.status(), "delete was rejected by the server");
        }
        Ok(())
    }

    /// GET the profile image bytes for an employee. A non-success status is
    /// an error; the caller substitutes the placeholder.
    pub fn fetch_image(&self, id: i64) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(format!("{}/image", self.record_url(id)))
            .send()
            .context("image request failed")?
            .error_for_status()
            .context("no image for employee")?
            .bytes()
            .context("image body could not be read")?;
        Ok(bytes.to_vec())
    }

    /// The request body shared by create and update: the four draft fields
    /// as text parts, plus an optional `image` file part.
    fn form_body(draft: &EmployeeDraft, image: Option<ImagePayload>) -> Form {
        let mut form = Form::new();
        for (key, value) in draft.form_fields() {
            form = form.text(key, value);
        }
        if let Some(payload) = image {
            form = form.part("image", Part::bytes(payload.bytes).file_name(payload.file_name));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_overrides() {
        let client = ApiClient::new(None);
        assert_eq!(client.get_base_url(), "http://localhost:8080");
        assert_eq!(client.collection_url(), "http://localhost:8080/api/employees");
        assert_eq!(client.record_url(3), "http://localhost:8080/api/employees/3");

        let custom = ApiClient::new(Some("http://10.0.0.2:9090".to_string()));
        assert_eq!(custom.record_url(12), "http://10.0.0.2:9090/api/employees/12");
    }
}
