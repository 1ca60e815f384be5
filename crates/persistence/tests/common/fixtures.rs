//! Test fixtures for directory searches.
//!
//! The seven-advocate directory below is the reference data set for search
//! tests. Records are inserted in order, so on a fresh database advocate
//! `n` gets id `n`.

use advocate_persistence::types::NewAdvocate;

/// An advocate fixture for testing.
#[derive(Debug, Clone)]
pub struct AdvocateFixture {
    /// First name.
    pub first_name: &'static str,
    /// Last name.
    pub last_name: &'static str,
    /// City.
    pub city: &'static str,
    /// Degree.
    pub degree: &'static str,
    /// Specialties, in entry order.
    pub specialties: Vec<&'static str>,
    /// Years of experience.
    pub years_of_experience: i32,
    /// Phone number.
    pub phone_number: i64,
}

impl AdvocateFixture {
    /// Creates a fixture with the given names and location.
    pub fn new(
        first_name: &'static str,
        last_name: &'static str,
        city: &'static str,
        degree: &'static str,
    ) -> Self {
        Self {
            first_name,
            last_name,
            city,
            degree,
            specialties: vec![],
            years_of_experience: 1,
            phone_number: 2125550100,
        }
    }

    /// Sets specialties.
    pub fn with_specialties(mut self, specialties: Vec<&'static str>) -> Self {
        self.specialties = specialties;
        self
    }

    /// Sets years of experience.
    pub fn with_years(mut self, years: i32) -> Self {
        self.years_of_experience = years;
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone_number: i64) -> Self {
        self.phone_number = phone_number;
        self
    }

    /// Builds the insertable record.
    pub fn build(&self) -> NewAdvocate {
        NewAdvocate::new(self.first_name, self.last_name, self.city, self.degree)
            .with_specialties(self.specialties.iter().copied())
            .with_years_of_experience(self.years_of_experience)
            .with_phone_number(self.phone_number)
    }
}

/// The reference directory.
pub fn directory_fixtures() -> Vec<AdvocateFixture> {
    vec![
        AdvocateFixture::new("John", "Doe", "New York", "PhD")
            .with_specialties(vec!["CBT", "Depression"])
            .with_years(5)
            .with_phone(2345678901),
        AdvocateFixture::new("Jane", "Smith", "Boston", "PsyD")
            .with_specialties(vec!["Anxiety", "PTSD"])
            .with_years(8)
            .with_phone(1234567890),
        AdvocateFixture::new("Bob", "Johnson", "Chicago", "MD")
            .with_specialties(vec!["Depression", "Anxiety", "CBT"])
            .with_years(12)
            .with_phone(9876543210),
        AdvocateFixture::new("Sarah", "Williams", "Los Angeles", "PhD")
            .with_specialties(vec!["PTSD", "Trauma"])
            .with_years(15)
            .with_phone(5678901234),
        AdvocateFixture::new("Michael", "Brown", "Seattle", "PsyD")
            .with_specialties(vec!["CBT", "Anxiety", "Depression"])
            .with_years(7)
            .with_phone(4567890123),
        AdvocateFixture::new("Emily", "Davis", "Portland", "PhD")
            .with_specialties(vec!["Depression", "Trauma"])
            .with_years(10)
            .with_phone(3456789012),
        AdvocateFixture::new("David", "Miller", "Austin", "MD")
            .with_specialties(vec!["Anxiety", "CBT", "PTSD"])
            .with_years(9)
            .with_phone(6789012345),
    ]
}

/// The reference directory as insertable records.
pub fn directory() -> Vec<NewAdvocate> {
    directory_fixtures().iter().map(AdvocateFixture::build).collect()
}

/// `count` generated advocates for paging tests, all with the same
/// specialty.
pub fn generated(count: usize, specialty: &'static str) -> Vec<NewAdvocate> {
    (0..count)
        .map(|i| {
            NewAdvocate::new(format!("Advocate{i}"), "Generated", "Denver", "LCSW")
                .with_specialties([specialty])
                .with_years_of_experience(1 + (i % 40) as i32)
                .with_phone_number(2125550100 + i as i64)
        })
        .collect()
}
