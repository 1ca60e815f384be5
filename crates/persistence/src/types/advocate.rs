//! Advocate records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::{FieldValue, Searchable};

/// An advocate as stored, including the engine-assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Engine-assigned identifier, increasing in insertion order.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// City of practice.
    pub city: String,
    /// Degree abbreviation (e.g. `PhD`, `MD`).
    pub degree: String,
    /// Areas of practice, in the order they were entered.
    pub specialties: Vec<String>,
    /// Years in practice.
    pub years_of_experience: i32,
    /// Ten-digit phone number.
    pub phone_number: i64,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

/// An advocate that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvocate {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// City of practice.
    pub city: String,
    /// Degree abbreviation.
    pub degree: String,
    /// Areas of practice.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Years in practice.
    pub years_of_experience: i32,
    /// Ten-digit phone number.
    pub phone_number: i64,
}

impl NewAdvocate {
    /// Creates a record with no specialties.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            degree: degree.into(),
            specialties: Vec::new(),
            years_of_experience: 1,
            phone_number: 0,
        }
    }

    /// Sets the specialties.
    pub fn with_specialties<I, T>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the years of experience.
    pub fn with_years_of_experience(mut self, years: i32) -> Self {
        self.years_of_experience = years;
        self
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = phone_number;
        self
    }

    /// Attaches the engine-assigned fields.
    pub fn into_stored(self, id: i64, created_at: DateTime<Utc>) -> Advocate {
        Advocate {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties: self.specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
            created_at,
        }
    }
}

fn advocate_field<'a>(
    name: &str,
    first_name: &'a str,
    last_name: &'a str,
    city: &'a str,
    degree: &'a str,
    specialties: &'a [String],
) -> Option<FieldValue<'a>> {
    match name {
        "firstName" => Some(FieldValue::Text(first_name)),
        "lastName" => Some(FieldValue::Text(last_name)),
        "city" => Some(FieldValue::Text(city)),
        "degree" => Some(FieldValue::Text(degree)),
        "specialties" => Some(FieldValue::List(specialties)),
        _ => None,
    }
}

impl Searchable for Advocate {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        advocate_field(
            name,
            &self.first_name,
            &self.last_name,
            &self.city,
            &self.degree,
            &self.specialties,
        )
    }
}

impl Searchable for NewAdvocate {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        advocate_field(
            name,
            &self.first_name,
            &self.last_name,
            &self.city,
            &self.degree,
            &self.specialties,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ADVOCATE_FIELDS, Predicate};
    use serde_json::json;

    fn sample() -> NewAdvocate {
        NewAdvocate::new("Emily", "Davis", "Portland", "PhD")
            .with_specialties(["Depression", "Trauma"])
            .with_years_of_experience(10)
            .with_phone_number(3456789012)
    }

    #[test]
    fn test_serializes_camel_case() {
        let stored = sample().into_stored(6, DateTime::<Utc>::UNIX_EPOCH);
        let value = serde_json::to_value(&stored).unwrap();

        assert_eq!(value["id"], 6);
        assert_eq!(value["firstName"], "Emily");
        assert_eq!(value["yearsOfExperience"], 10);
        assert_eq!(value["phoneNumber"], 3456789012_i64);
        assert_eq!(value["specialties"], json!(["Depression", "Trauma"]));
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_new_advocate_from_json() {
        let record: NewAdvocate = serde_json::from_value(json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "city": "Boston",
            "degree": "PsyD",
            "yearsOfExperience": 8,
            "phoneNumber": 6175550123_i64
        }))
        .unwrap();

        assert!(record.specialties.is_empty());
        assert_eq!(record.phone_number, 6175550123);
    }

    #[test]
    fn test_searchable_fields() {
        let stored = sample().into_stored(1, Utc::now());
        for field in ADVOCATE_FIELDS.iter() {
            assert!(stored.field_value(field.name).is_some(), "{}", field.name);
        }
        assert!(stored.field_value("phoneNumber").is_none());

        let trauma = ADVOCATE_FIELDS.iter().find(|f| f.name == "specialties").unwrap();
        assert!(Predicate::contains(*trauma, "trauma").matches(&stored));
        assert!(Predicate::contains(*trauma, "trauma").matches(&sample()));
    }
}
