//! Field identifiers and the raw value record bound to the form controls.
//!
//! DESIGN
//! ======
//! Values are stored exactly as the controls report them. The gender select
//! yields raw option strings (including the empty "Select" sentinel and the
//! capitalized `Other` option), so `gender` stays a `String` here and
//! [`Gender`] is only used by validators that need the typed constant.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown in the submitted-values panel for a field that has no snapshot value.
pub const SUBMITTED_PLACEHOLDER: &str = "Not Submitted";

/// One of the four controls on the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Gender,
}

impl Field {
    /// All fields in render order.
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Gender];

    /// Control name, matching the serialized record key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Gender => "gender",
        }
    }

    /// Human-readable label rendered next to the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Gender => "Gender",
        }
    }

    /// Text shown in the live preview while the field is empty.
    #[must_use]
    pub fn watch_placeholder(self) -> &'static str {
        match self {
            Self::Gender => "Not selected",
            _ => "Not entered",
        }
    }

    /// Look up a field by its control name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted gender constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Wire names of every accepted constant, in declaration order.
    pub const NAMES: &'static [&'static str] = &["male", "female", "other"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parse an exact lowercase constant. `"Other"` is not accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// One `<option>` of the gender select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options rendered by the gender select. The empty value is the initial
/// non-selection sentinel.
pub const GENDER_OPTIONS: [SelectOption; 4] = [
    SelectOption { value: "", label: "Select" },
    SelectOption { value: "male", label: "Male" },
    SelectOption { value: "female", label: "Female" },
    SelectOption { value: "Other", label: "Other" },
];

/// Current contents of the four controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
}

impl FormValues {
    /// Build a record from the four raw control values.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            gender: gender.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Gender => &self.gender,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Gender => &mut self.gender,
        };
        *slot = value.into();
    }

    /// True when every control is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Value for the live preview, falling back to the field placeholder.
    #[must_use]
    pub fn watched(&self, field: Field) -> &str {
        let value = self.get(field);
        if value.is_empty() { field.watch_placeholder() } else { value }
    }
}
