//! Field validation for new advocate records.
//!
//! These are the rules the intake form enforces, applied again at the API
//! boundary. The repository itself never validates.

use regex::Regex;

use crate::error::{ValidationDetail, ValidationError};

use super::advocate::NewAdvocate;

const NAME_PATTERN: &str = r"^[\p{L}\s'-]+$";
const DEGREE_PATTERN: &str = r"^[\p{L}\s'.]+$";
// 1234567890, (123) 456-7890, 123-456-7890, 123.456.7890
const PHONE_PATTERN: &str = r"^(\d{10}|\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4})$";

/// Compiled validation rules for [`NewAdvocate`].
#[derive(Debug, Clone)]
pub struct AdvocateValidator {
    name: Regex,
    degree: Regex,
    phone: Regex,
}

impl AdvocateValidator {
    /// Compiles the rules.
    pub fn new() -> Result<Self, ValidationError> {
        Ok(Self {
            name: compile("name", NAME_PATTERN)?,
            degree: compile("degree", DEGREE_PATTERN)?,
            phone: compile("phone", PHONE_PATTERN)?,
        })
    }

    /// Checks every field and reports all violations at once.
    pub fn validate(&self, record: &NewAdvocate) -> Result<(), ValidationError> {
        let mut details = Vec::new();

        if !self.is_valid_name(&record.first_name, 128) {
            details.push(ValidationDetail::new(
                "firstName",
                "must be 1 to 128 letters, spaces, apostrophes or hyphens",
            ));
        }
        if !self.is_valid_name(&record.last_name, 128) {
            details.push(ValidationDetail::new(
                "lastName",
                "must be 1 to 128 letters, spaces, apostrophes or hyphens",
            ));
        }
        if !self.is_valid_name(&record.city, 255) {
            details.push(ValidationDetail::new(
                "city",
                "must be 1 to 255 letters, spaces, apostrophes or hyphens",
            ));
        }
        if !self.is_valid_degree(&record.degree) {
            details.push(ValidationDetail::new(
                "degree",
                "must be 1 to 4 letters, spaces, apostrophes or periods",
            ));
        }
        if record.specialties.is_empty() {
            details.push(ValidationDetail::new(
                "specialties",
                "must list at least one specialty",
            ));
        }
        for (index, specialty) in record.specialties.iter().enumerate() {
            if !self.is_valid_name(specialty, 255) {
                details.push(ValidationDetail::new(
                    format!("specialties[{index}]"),
                    "must be 1 to 255 letters, spaces, apostrophes or hyphens",
                ));
            }
        }
        if !is_valid_years(record.years_of_experience) {
            details.push(ValidationDetail::new(
                "yearsOfExperience",
                "must be between 1 and 100",
            ));
        }
        if !self.is_valid_phone_number(&record.phone_number.to_string()) {
            details.push(ValidationDetail::new(
                "phoneNumber",
                "must be a valid US phone number",
            ));
        }

        if details.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidRecord {
                message: format!("{} field(s) failed validation", details.len()),
                details,
            })
        }
    }

    /// Names, cities and specialties.
    pub fn is_valid_name(&self, value: &str, max_len: usize) -> bool {
        within(value, max_len) && self.name.is_match(value)
    }

    /// Degree abbreviations such as `PhD` or `M.D.`.
    pub fn is_valid_degree(&self, value: &str) -> bool {
        within(value, 4) && self.degree.is_match(value)
    }

    /// Accepts `2345678901`, `(234) 567-8901`, `234-567-8901` and
    /// `234.567.8901`. The digits must form a US number whose area code and
    /// exchange both start with 2 to 9.
    pub fn is_valid_phone_number(&self, value: &str) -> bool {
        if !self.phone.is_match(value) {
            return false;
        }
        let digits: Vec<u8> = value.bytes().filter(u8::is_ascii_digit).collect();
        digits.len() == 10 && digits[0] >= b'2' && digits[3] >= b'2'
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex, ValidationError> {
    Regex::new(pattern).map_err(|e| ValidationError::InvalidRule {
        rule: rule.to_string(),
        message: e.to_string(),
    })
}

fn within(value: &str, max_len: usize) -> bool {
    let len = value.chars().count();
    len >= 1 && len <= max_len
}

fn is_valid_years(years: i32) -> bool {
    (1..=100).contains(&years)
}
