//! Record kinds and the keyword dictionary.
//!
//! The relational schema has six record kinds. One job row owns zero-or-one
//! row of each of the other five kinds; every field is located in free text
//! by a human-readable keyword phrase ("job title", "seniority level", ...).
//!
//! The dictionary is static configuration: built once at startup, never
//! mutated. A custom dictionary can be loaded from JSON; the default carries
//! the stock phrases for all six kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six target record categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Job,
    Company,
    Education,
    Experience,
    Salary,
    Location,
}

impl RecordKind {
    /// All record kinds, in schema order (job first, since it owns the rest).
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Job,
        RecordKind::Company,
        RecordKind::Education,
        RecordKind::Experience,
        RecordKind::Salary,
        RecordKind::Location,
    ];

    /// The kind's name as it appears in staged JSON and table names.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Job => "job",
            RecordKind::Company => "company",
            RecordKind::Education => "education",
            RecordKind::Experience => "experience",
            RecordKind::Salary => "salary",
            RecordKind::Location => "location",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested mapping from record kind to field name to keyword phrase.
///
/// Field order is declaration order (it drives the order fields are
/// extracted and serialized in), hence the `IndexMap` backing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordDict(IndexMap<RecordKind, IndexMap<String, String>>);

impl KeywordDict {
    /// Create an empty dictionary.
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    /// Add a keyword phrase for a field (builder pattern).
    pub fn with_keyword(
        mut self,
        kind: RecordKind,
        field: impl Into<String>,
        phrase: impl Into<String>,
    ) -> Self {
        self.0
            .entry(kind)
            .or_default()
            .insert(field.into(), phrase.into());
        self
    }

    /// Get the keyword phrase for a field, if declared.
    pub fn keyword(&self, kind: RecordKind, field: &str) -> Option<&str> {
        self.0.get(&kind)?.get(field).map(String::as_str)
    }

    /// Iterate the declared fields of a kind as `(field, phrase)` pairs.
    pub fn fields(&self, kind: RecordKind) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .get(&kind)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(f, p)| (f.as_str(), p.as_str())))
    }

    /// Iterate all `(kind, field, phrase)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (RecordKind, &str, &str)> {
        self.0.iter().flat_map(|(kind, fields)| {
            fields.iter().map(|(f, p)| (*kind, f.as_str(), p.as_str()))
        })
    }

    /// Total number of declared fields across all kinds.
    pub fn len(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// Check whether no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeywordDict {
    /// The stock dictionary covering every column of the six tables.
    fn default() -> Self {
        Self::empty()
            .with_keyword(RecordKind::Job, "title", "job title")
            .with_keyword(RecordKind::Job, "industry", "industry")
            .with_keyword(RecordKind::Job, "description", "description")
            .with_keyword(RecordKind::Job, "employment_type", "employment type")
            .with_keyword(RecordKind::Job, "date_posted", "date posted")
            .with_keyword(RecordKind::Company, "name", "company name")
            .with_keyword(RecordKind::Company, "link", "company link")
            .with_keyword(
                RecordKind::Education,
                "required_credential",
                "education requirements",
            )
            .with_keyword(
                RecordKind::Experience,
                "months_of_experience",
                "months of experience",
            )
            .with_keyword(RecordKind::Experience, "seniority_level", "seniority level")
            .with_keyword(RecordKind::Salary, "currency", "currency")
            .with_keyword(RecordKind::Salary, "min_value", "minimum salary")
            .with_keyword(RecordKind::Salary, "max_value", "maximum salary")
            .with_keyword(RecordKind::Salary, "unit", "unit")
            .with_keyword(RecordKind::Location, "country", "country")
            .with_keyword(RecordKind::Location, "locality", "locality")
            .with_keyword(RecordKind::Location, "region", "region")
            .with_keyword(RecordKind::Location, "postal_code", "postal code")
            .with_keyword(RecordKind::Location, "street_address", "street address")
            .with_keyword(RecordKind::Location, "latitude", "latitude")
            .with_keyword(RecordKind::Location, "longitude", "longitude")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dict_covers_all_kinds() {
        let dict = KeywordDict::default();
        for kind in RecordKind::ALL {
            assert!(
                dict.fields(kind).count() > 0,
                "no fields declared for {kind}"
            );
        }
        assert_eq!(dict.len(), 21);
    }

    #[test]
    fn test_keyword_lookup() {
        let dict = KeywordDict::default();
        assert_eq!(dict.keyword(RecordKind::Job, "title"), Some("job title"));
        assert_eq!(
            dict.keyword(RecordKind::Education, "required_credential"),
            Some("education requirements")
        );
        assert_eq!(dict.keyword(RecordKind::Job, "nonexistent"), None);
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let dict = KeywordDict::default();
        let job_fields: Vec<&str> = dict.fields(RecordKind::Job).map(|(f, _)| f).collect();
        assert_eq!(
            job_fields,
            vec![
                "title",
                "industry",
                "description",
                "employment_type",
                "date_posted"
            ]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let dict = KeywordDict::empty()
            .with_keyword(RecordKind::Job, "title", "job title")
            .with_keyword(RecordKind::Salary, "currency", "currency");

        let json = serde_json::to_string(&dict).unwrap();
        let parsed: KeywordDict = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.keyword(RecordKind::Job, "title"), Some("job title"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_custom_dict_from_json() {
        let json = r#"{"job": {"title": "position"}, "company": {"name": "employer"}}"#;
        let dict: KeywordDict = serde_json::from_str(json).unwrap();

        assert_eq!(dict.keyword(RecordKind::Job, "title"), Some("position"));
        assert_eq!(dict.keyword(RecordKind::Company, "name"), Some("employer"));
    }
}
