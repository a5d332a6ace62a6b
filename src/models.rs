//! Data models and view state for the Roster Admin GUI

use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// An employee record as returned by the backend.
///
/// The client copy is transient: it is replaced wholesale after every reload
/// and never written back except through the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Kept as text; the backend may transmit it as a JSON number or string.
    #[serde(deserialize_with = "salary_as_text")]
    pub salary: String,
}

fn salary_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "salary must be a number or string, got {}",
            other
        ))),
    }
}

/// In-progress form values for a create or update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: String,
    /// Optional profile image, selected by file path.
    pub image_path: Option<PathBuf>,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            salary: employee.salary.clone(),
            image_path: None,
        }
    }

    /// The four text parts every create/update request body carries.
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("department", self.department.clone()),
            ("salary", self.salary.clone()),
        ]
    }

    /// Input-level validation: all four fields mandatory, email must look
    /// like an address, salary must be numeric. Returns the first blocking
    /// problem, to be shown next to the Save button.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if let Ok(re) = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
            if !re.is_match(self.email.trim()) {
                return Err("Email address is not valid".to_string());
            }
        }
        if self.department.trim().is_empty() {
            return Err("Department is required".to_string());
        }
        if self.salary.trim().is_empty() {
            return Err("Salary is required".to_string());
        }
        if self.salary.trim().parse::<f64>().is_err() {
            return Err("Salary must be a number".to_string());
        }
        Ok(())
    }
}

/// The three mutually exclusive UI modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Add,
    Edit,
}

/// All mode/form/filter state, mutated only through the transition methods.
///
/// Invariant: `edit_target` is `Some` if and only if `mode` is `Edit`.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub draft: EmployeeDraft,
    pub edit_target: Option<i64>,
    pub filter: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::List,
            draft: EmployeeDraft::default(),
            edit_target: None,
            filter: String::new(),
        }
    }

    /// List → Add: empty draft, no edit target.
    pub fn open_add(&mut self) {
        self.draft = EmployeeDraft::default();
        self.edit_target = None;
        self.mode = ViewMode::Add;
    }

    /// List → Edit: draft populated from the row's current values.
    pub fn open_edit(&mut self, employee: &Employee) {
        self.draft = EmployeeDraft::from_employee(employee);
        self.edit_target = Some(employee.id);
        self.mode = ViewMode::Edit;
    }

    /// Add/Edit → List without a network call; the draft is discarded.
    pub fn cancel(&mut self) {
        self.draft = EmployeeDraft::default();
        self.edit_target = None;
        self.mode = ViewMode::List;
    }

    /// Add/Edit → List after a submit has been issued.
    pub fn finish_submit(&mut self) {
        self.cancel();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match against name OR department.
/// An empty query matches everything; input order is preserved.
pub fn filter_roster(roster: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, department: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: department.to_string(),
            salary: "50000".to_string(),
        }
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let roster = vec![
            employee(1, "Ann", "Engineering"),
            employee(2, "Bob", "Sales"),
            employee(3, "Cleo", "Support"),
        ];
        assert_eq!(filter_roster(&roster, ""), roster);
    }

    #[test]
    fn filter_matches_name_or_department_case_insensitively() {
        let roster = vec![
            employee(1, "Ann", "Engineering"),
            employee(2, "Bob", "Sales"),
            employee(3, "Glenn", "Customer Success"),
        ];

        let by_name = filter_roster(&roster, "aNN");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        // "en" hits Engineering by department and Glenn by name.
        let mixed = filter_roster(&roster, "en");
        assert_eq!(mixed.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(filter_roster(&roster, "zzz").is_empty());
    }

    #[test]
    fn open_edit_populates_draft_from_row() {
        let emp = employee(7, "Ann", "Engineering");
        let mut view = ViewState::new();
        view.open_edit(&emp);

        assert_eq!(view.mode, ViewMode::Edit);
        assert_eq!(view.edit_target, Some(7));
        assert_eq!(view.draft.name, "Ann");
        assert_eq!(view.draft.email, "ann@example.com");
        assert_eq!(view.draft.department, "Engineering");
        assert_eq!(view.draft.salary, "50000");
        assert_eq!(view.draft.image_path, None);

        // Submitting without changes must send exactly the row's values.
        let fields = view.draft.form_fields();
        assert_eq!(fields[0], ("name", "Ann".to_string()));
        assert_eq!(fields[3], ("salary", "50000".to_string()));
    }

    #[test]
    fn cancel_returns_to_list_and_discards_draft() {
        let emp = employee(7, "Ann", "Engineering");
        let mut view = ViewState::new();
        view.open_edit(&emp);
        view.cancel();

        assert_eq!(view.mode, ViewMode::List);
        assert_eq!(view.edit_target, None);
        assert_eq!(view.draft, EmployeeDraft::default());
    }

    #[test]
    fn edit_target_matches_mode_across_transitions() {
        let emp = employee(1, "Ann", "Engineering");
        let mut view = ViewState::new();
        assert!(view.edit_target.is_none());

        view.open_add();
        assert_eq!(view.mode, ViewMode::Add);
        assert!(view.edit_target.is_none());

        view.open_edit(&emp);
        assert!(view.edit_target.is_some());

        view.finish_submit();
        assert_eq!(view.mode, ViewMode::List);
        assert!(view.edit_target.is_none());
    }

    #[test]
    fn draft_validation_requires_all_fields() {
        let mut draft = EmployeeDraft::default();
        assert_eq!(draft.validate(), Err("Name is required".to_string()));

        draft.name = "Ann".to_string();
        assert_eq!(draft.validate(), Err("Email is required".to_string()));

        draft.email = "not-an-address".to_string();
        assert_eq!(
            draft.validate(),
            Err("Email address is not valid".to_string())
        );

        draft.email = "a@x.com".to_string();
        assert_eq!(draft.validate(), Err("Department is required".to_string()));

        draft.department = "Eng".to_string();
        assert_eq!(draft.validate(), Err("Salary is required".to_string()));

        draft.salary = "lots".to_string();
        assert_eq!(draft.validate(), Err("Salary must be a number".to_string()));

        draft.salary = "100".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn salary_deserializes_from_number_or_string() {
        let from_number: Employee = serde_json::from_str(
            r#"{"id":1,"name":"Ann","email":"a@x.com","department":"Eng","salary":100}"#,
        )
        .unwrap();
        assert_eq!(from_number.salary, "100");

        let from_string: Employee = serde_json::from_str(
            r#"{"id":2,"name":"Bob","email":"b@x.com","department":"Sales","salary":"72500.5"}"#,
        )
        .unwrap();
        assert_eq!(from_string.salary, "72500.5");

        let bad = serde_json::from_str::<Employee>(
            r#"{"id":3,"name":"Cleo","email":"c@x.com","department":"Ops","salary":null}"#,
        );
        assert!(bad.is_err());
    }
}
