//! Create and edit forms

use std::fmt::Write;

use uuid::Uuid;

use super::{error_list, escape, layout};
use crate::models::{Gender, Person, PersonForm};

/// Which form to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Values shown in the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mobile_number: String,
}

impl FormValues {
    /// Replace stored values with whatever the user submitted.
    pub fn overlay(mut self, form: &PersonForm) -> Self {
        if let Some(name) = &form.name {
            self.name = name.clone();
        }
        if let Some(age) = &form.age {
            self.age = age.clone();
        }
        if let Some(gender) = &form.gender {
            self.gender = gender.clone();
        }
        if let Some(mobile_number) = &form.mobile_number {
            self.mobile_number = mobile_number.clone();
        }
        self
    }
}

impl From<&Person> for FormValues {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            age: p.age.to_string(),
            gender: p.gender.to_string(),
            mobile_number: p.mobile_number.clone(),
        }
    }
}

impl From<&PersonForm> for FormValues {
    fn from(form: &PersonForm) -> Self {
        Self::default().overlay(form)
    }
}

/// Render the person form with any error messages above it.
pub fn person_form(mode: FormMode, values: &FormValues, errors: &[String]) -> String {
    let (title, action, submit) = match mode {
        FormMode::Create => ("Add Person".to_string(), "/person".to_string(), "Create"),
        FormMode::Edit(id) => (
            "Edit Person".to_string(),
            format!("/person/{}?_method=PUT", id),
            "Update",
        ),
    };

    let mut options = String::from("          <option value=\"\">Select gender</option>\n");
    for gender in Gender::ALL {
        let selected = if values.gender == gender.as_str() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            options,
            "          <option value=\"{g}\"{selected}>{g}</option>",
            g = gender.as_str(),
            selected = selected,
        );
    }

    let mut body = String::new();
    let _ = write!(
        body,
        r#"    <h1>{title}</h1>
{errors}    <form method="POST" action="{action}">
      <label>Name
        <input type="text" name="name" value="{name}" required>
      </label>
      <label>Age
        <input type="number" name="age" min="0" value="{age}" required>
      </label>
      <label>Gender
        <select name="gender" required>
{options}        </select>
      </label>
      <label>Mobile Number
        <input type="tel" name="mobileNumber" value="{mobile}" required>
      </label>
      <div class="form-actions">
        <button type="submit">{submit}</button>
        <a href="/person">Cancel</a>
      </div>
    </form>
"#,
        title = title,
        errors = error_list(errors),
        action = escape(&action),
        name = escape(&values.name),
        age = escape(&values.age),
        options = options,
        mobile = escape(&values.mobile_number),
        submit = submit,
    );

    layout(&title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_posts_to_collection() {
        let html = person_form(FormMode::Create, &FormValues::default(), &[]);
        assert!(html.contains(r#"action="/person""#));
        assert!(html.contains("Add Person"));
        assert!(!html.contains("class=\"errors\""));
    }

    #[test]
    fn edit_form_overrides_method() {
        let id = Uuid::new_v4();
        let html = person_form(FormMode::Edit(id), &FormValues::default(), &[]);
        assert!(html.contains(&format!("action=\"/person/{}?_method=PUT\"", id)));
        assert!(html.contains("Edit Person"));
    }

    #[test]
    fn selected_gender_is_marked() {
        let values = FormValues {
            gender: "Female".into(),
            ..Default::default()
        };
        let html = person_form(FormMode::Create, &values, &[]);
        assert!(html.contains(r#"<option value="Female" selected>Female</option>"#));
        assert!(html.contains(r#"<option value="Male">Male</option>"#));
    }

    #[test]
    fn errors_and_values_are_rendered() {
        let values = FormValues {
            name: "\"quoted\"".into(),
            age: "-1".into(),
            ..Default::default()
        };
        let errors = vec!["Valid age is required".to_string()];
        let html = person_form(FormMode::Create, &values, &errors);
        assert!(html.contains("<li>Valid age is required</li>"));
        assert!(html.contains(r#"value="&quot;quoted&quot;""#));
        assert!(html.contains(r#"value="-1""#));
    }

    #[test]
    fn overlay_prefers_submitted_fields() {
        let stored = FormValues {
            name: "Old".into(),
            age: "40".into(),
            gender: "Male".into(),
            mobile_number: "555".into(),
        };
        let submitted = PersonForm {
            name: Some("".into()),
            age: None,
            gender: Some("Other".into()),
            mobile_number: None,
        };
        let merged = stored.overlay(&submitted);
        assert_eq!(merged.name, "");
        assert_eq!(merged.age, "40");
        assert_eq!(merged.gender, "Other");
        assert_eq!(merged.mobile_number, "555");
    }
}
