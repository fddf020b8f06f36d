//! Transformed records: flat field mappings for the six record kinds.
//!
//! Every field is a `String`; an empty string means "unknown" (the keyword
//! was not found), which is a valid value, not an error. A [`JobPosting`] is
//! the staged-JSON unit the load stage consumes: one job row plus one row of
//! each child kind, keyed to the job by the store.

use serde::{Deserialize, Serialize};

/// Fields of the `job` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFields {
    pub title: String,
    pub industry: String,
    pub description: String,
    pub employment_type: String,
    pub date_posted: String,
}

/// Fields of the `company` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyFields {
    pub name: String,
    pub link: String,
}

/// Fields of the `education` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationFields {
    pub required_credential: String,
}

/// Fields of the `experience` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceFields {
    pub months_of_experience: String,
    pub seniority_level: String,
}

/// Fields of the `salary` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryFields {
    pub currency: String,
    pub min_value: String,
    pub max_value: String,
    pub unit: String,
}

/// Fields of the `location` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFields {
    pub country: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub street_address: String,
    pub latitude: String,
    pub longitude: String,
}

/// One fully transformed posting: a job row and its five child rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub job: JobFields,
    pub company: CompanyFields,
    pub education: EducationFields,
    pub experience: ExperienceFields,
    pub salary: SalaryFields,
    pub location: LocationFields,
}

impl JobPosting {
    /// Check whether no field of any kind was populated.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
