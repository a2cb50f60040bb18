//! Person record, its gender enum, and form validation

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use super::ValidationError;

/// Allowed gender values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Every variant, in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidGender {
                value: s.to_owned(),
            })
    }
}

/// Person record as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub mobile_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated business fields for insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct PersonFields {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub mobile_number: String,
}

/// Raw person form as submitted (urlencoded or JSON)
///
/// Every field is optional so a missing field becomes a validation
/// message instead of a rejected request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonForm {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub age: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default, rename = "mobileNumber")]
    pub mobile_number: Option<String>,
}

impl PersonForm {
    /// Validate the form, collecting every failure in field order.
    ///
    /// # Example
    /// ```
    /// use personbook_server::models::{PersonForm, ValidationError};
    ///
    /// let form = PersonForm {
    ///     name: Some("".into()),
    ///     age: Some("-1".into()),
    ///     gender: Some("Female".into()),
    ///     mobile_number: Some("555-0100".into()),
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors, vec![ValidationError::NameRequired, ValidationError::InvalidAge]);
    /// ```
    pub fn validate(&self) -> Result<PersonFields, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = non_blank(self.name.as_deref());
        if name.is_none() {
            errors.push(ValidationError::NameRequired);
        }

        let age = self.age.as_deref().and_then(parse_age);
        if age.is_none() {
            errors.push(ValidationError::InvalidAge);
        }

        let gender = match non_blank(self.gender.as_deref()) {
            None => {
                errors.push(ValidationError::GenderRequired);
                None
            }
            Some(raw) => match raw.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
        };

        let mobile_number = non_blank(self.mobile_number.as_deref());
        if mobile_number.is_none() {
            errors.push(ValidationError::MobileNumberRequired);
        }

        match (name, age, gender, mobile_number) {
            (Some(name), Some(age), Some(gender), Some(mobile_number)) if errors.is_empty() => {
                Ok(PersonFields {
                    name: name.to_owned(),
                    age,
                    gender,
                    mobile_number: mobile_number.to_owned(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Trimmed value, or `None` when missing or blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a submitted age.
///
/// The text must read as a finite, non-negative number. The stored value is
/// its leading integer, so `"12.7"` is 12, `"1e3"` is 1 and `"0x1A"` is 26.
fn parse_age(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return i32::from_str_radix(hex, 16).ok();
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    leading_integer(trimmed)
}

/// Optional sign followed by decimal digits, read from the start of `text`
fn leading_integer(text: &str) -> Option<i32> {
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

/// Accept either a string or a JSON number, keeping it as text
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, age: &str, gender: &str, mobile: &str) -> PersonForm {
        PersonForm {
            name: Some(name.into()),
            age: Some(age.into()),
            gender: Some(gender.into()),
            mobile_number: Some(mobile.into()),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let fields = form("  Ada Lovelace ", " 36 ", "Female", " 555-0100 ")
            .validate()
            .unwrap();
        assert_eq!(
            fields,
            PersonFields {
                name: "Ada Lovelace".into(),
                age: 36,
                gender: Gender::Female,
                mobile_number: "555-0100".into(),
            }
        );
    }

    #[test]
    fn empty_name_is_required() {
        let errors = form("", "30", "Male", "555").validate().unwrap_err();
        assert_eq!(errors, vec![ValidationError::NameRequired]);
    }

    #[test]
    fn negative_age_is_invalid() {
        let errors = form("Bob", "-1", "Male", "555").validate().unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidAge]);
    }

    #[test]
    fn non_numeric_age_is_invalid() {
        for age in ["", "abc", "NaN", "inf", "12abc", ".5", "0x", "0xZZ", "99999999999"] {
            let errors = form("Bob", age, "Male", "555").validate().unwrap_err();
            assert_eq!(errors, vec![ValidationError::InvalidAge], "age {:?}", age);
        }
    }

    #[test]
    fn zero_and_fractional_ages() {
        assert_eq!(form("Bob", "0", "Male", "555").validate().unwrap().age, 0);
        assert_eq!(form("Bob", "12.7", "Male", "555").validate().unwrap().age, 12);
        assert_eq!(form("Bob", "-0", "Male", "555").validate().unwrap().age, 0);
    }

    #[test]
    fn age_keeps_only_the_leading_integer() {
        assert_eq!(form("Bob", "1e3", "Male", "555").validate().unwrap().age, 1);
        assert_eq!(form("Bob", "+42", "Male", "555").validate().unwrap().age, 42);
        assert_eq!(form("Bob", "0x1A", "Male", "555").validate().unwrap().age, 26);
        assert_eq!(form("Bob", "7.", "Male", "555").validate().unwrap().age, 7);
    }

    #[test]
    fn errors_follow_field_order() {
        let errors = PersonForm::default().validate().unwrap_err();
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Valid age is required",
                "Gender is required",
                "Mobile number is required",
            ]
        );
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let errors = form("Bob", "30", "male", "555").validate().unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidGender { value }] if value == "male"
        ));
    }

    #[test]
    fn gender_round_trips_through_str() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
    }

    #[test]
    fn json_age_may_be_a_number() {
        let form: PersonForm = serde_json::from_str(
            r#"{"name": "Eve", "age": 41, "gender": "Other", "mobileNumber": "555"}"#,
        )
        .unwrap();
        assert_eq!(form.age.as_deref(), Some("41"));
        assert_eq!(form.validate().unwrap().age, 41);
    }

    #[test]
    fn missing_json_fields_are_none() {
        let form: PersonForm = serde_json::from_str(r#"{"name": "Eve"}"#).unwrap();
        assert!(form.age.is_none());
        assert!(form.mobile_number.is_none());
    }
}
