//! Test data fixtures.
//!
//! Advocates are kept as JSON so the same values can be posted to
//! `/api/seed` or inserted straight into storage.

use advocate_persistence::types::NewAdvocate;
use serde_json::{Value, json};

/// The seven-advocate reference directory, in insertion order.
///
/// Jane Smith's phone number has no valid area code, so this set is seeded
/// through storage rather than through `/api/seed`.
pub fn directory_json() -> Vec<Value> {
    vec![
        advocate_json("John", "Doe", "New York", "PhD", &["CBT", "Depression"], 5, 2345678901),
        advocate_json("Jane", "Smith", "Boston", "PsyD", &["Anxiety", "PTSD"], 8, 1234567890),
        advocate_json(
            "Bob",
            "Johnson",
            "Chicago",
            "MD",
            &["Depression", "Anxiety", "CBT"],
            12,
            9876543210,
        ),
        advocate_json("Sarah", "Williams", "Los Angeles", "PhD", &["PTSD", "Trauma"], 15, 5678901234),
        advocate_json(
            "Michael",
            "Brown",
            "Seattle",
            "PsyD",
            &["CBT", "Anxiety", "Depression"],
            7,
            4567890123,
        ),
        advocate_json("Emily", "Davis", "Portland", "PhD", &["Depression", "Trauma"], 10, 3456789012),
        advocate_json("David", "Miller", "Austin", "MD", &["Anxiety", "CBT", "PTSD"], 9, 6789012345),
    ]
}

/// The reference directory as insertable records.
pub fn directory() -> Vec<NewAdvocate> {
    directory_json()
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("fixture is a valid NewAdvocate"))
        .collect()
}

/// Builds one advocate body.
pub fn advocate_json(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
    phone_number: i64,
) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "city": city,
        "degree": degree,
        "specialties": specialties,
        "yearsOfExperience": years_of_experience,
        "phoneNumber": phone_number,
    })
}

/// A body that passes every field rule.
pub fn valid_seed_body() -> Value {
    advocate_json("Ada", "O'Neil", "Salt Lake City", "LCSW", &["Grief", "Anxiety"], 6, 8015550123)
}
