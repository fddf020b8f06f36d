//! Keyword-pattern field extraction.
//!
//! The core of the transform stage: given free-form posting text and a
//! keyword phrase, find the first line-bounded occurrence of the keyword and
//! return the trailing text on that line as the field value. A keyword that
//! never appears yields an empty string — absence is a first-class "unknown"
//! value, never an error.
//!
//! Extraction is a pure function of `(text, keyword)`: no state, no side
//! effects, deterministic.

use indexmap::IndexMap;
use regex::Regex;

use crate::schema::{KeywordDict, RecordKind};
use crate::types::record::{
    CompanyFields, EducationFields, ExperienceFields, JobFields, JobPosting, LocationFields,
    SalaryFields,
};

/// A compiled keyword pattern for one field.
///
/// The keyword matches case-insensitively and may be followed by a separator
/// run of `:`, `-`, `=`, or horizontal whitespace before the value. The value
/// is the remainder of the keyword's line, trimmed. The separator run stops
/// at end of line, so a keyword with nothing after it on its line binds no
/// value (a later occurrence that does carry one may).
///
/// Partial-word matches are accepted by default ("industry" matches inside
/// "agroindustry"); construct with [`FieldPattern::with_word_boundaries`] to
/// require the keyword to stand alone.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    keyword: String,
    regex: Regex,
}

impl FieldPattern {
    /// Compile a pattern for a keyword phrase.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self::compile(keyword.into(), false)
    }

    /// Compile a pattern that only matches the keyword at word boundaries.
    pub fn with_word_boundaries(keyword: impl Into<String>) -> Self {
        Self::compile(keyword.into(), true)
    }

    fn compile(keyword: String, word_boundaries: bool) -> Self {
        let escaped = regex::escape(&keyword);
        let pattern = if word_boundaries {
            format!(r"(?i)\b{escaped}\b[ \t:=-]*([^\n]+)")
        } else {
            format!(r"(?i){escaped}[ \t:=-]*([^\n]+)")
        };
        // The keyword is escaped, so the assembled pattern is always valid.
        let regex = Regex::new(&pattern).expect("escaped keyword pattern compiles");
        Self { keyword, regex }
    }

    /// The keyword phrase this pattern was compiled from.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Extract the field value from `text`.
    ///
    /// Returns the trimmed remainder of the first matching line, or an empty
    /// string if the keyword does not appear with a value.
    pub fn extract(&self, text: &str) -> String {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

/// Precompiled patterns for every field of a keyword dictionary.
///
/// Built once at startup from an immutable [`KeywordDict`]; each extraction
/// call is then a lookup plus a single regex scan.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: IndexMap<RecordKind, IndexMap<String, FieldPattern>>,
}

impl FieldExtractor {
    /// Compile an extractor for a dictionary.
    pub fn new(dict: &KeywordDict) -> Self {
        Self::with_options(dict, false)
    }

    /// Compile with word-boundary matching for every keyword.
    pub fn with_word_boundaries(dict: &KeywordDict) -> Self {
        Self::with_options(dict, true)
    }

    fn with_options(dict: &KeywordDict, word_boundaries: bool) -> Self {
        let mut patterns: IndexMap<RecordKind, IndexMap<String, FieldPattern>> = IndexMap::new();
        for (kind, field, phrase) in dict.iter() {
            let pattern = if word_boundaries {
                FieldPattern::with_word_boundaries(phrase)
            } else {
                FieldPattern::new(phrase)
            };
            patterns
                .entry(kind)
                .or_default()
                .insert(field.to_string(), pattern);
        }
        Self { patterns }
    }

    /// Extract a single declared field, or `""` if the field is not declared
    /// or its keyword does not appear in the text.
    pub fn extract_field(&self, text: &str, kind: RecordKind, field: &str) -> String {
        self.patterns
            .get(&kind)
            .and_then(|fields| fields.get(field))
            .map(|pattern| pattern.extract(text))
            .unwrap_or_default()
    }

    /// Extract every declared field of one kind into a flat mapping.
    pub fn extract_kind(&self, text: &str, kind: RecordKind) -> IndexMap<String, String> {
        self.patterns
            .get(&kind)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(field, pattern)| (field.clone(), pattern.extract(text)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract all six record kinds from one posting body.
    pub fn extract_posting(&self, text: &str) -> JobPosting {
        JobPosting {
            job: JobFields {
                title: self.extract_field(text, RecordKind::Job, "title"),
                industry: self.extract_field(text, RecordKind::Job, "industry"),
                description: self.extract_field(text, RecordKind::Job, "description"),
                employment_type: self.extract_field(text, RecordKind::Job, "employment_type"),
                date_posted: self.extract_field(text, RecordKind::Job, "date_posted"),
            },
            company: CompanyFields {
                name: self.extract_field(text, RecordKind::Company, "name"),
                link: self.extract_field(text, RecordKind::Company, "link"),
            },
            education: EducationFields {
                required_credential: self.extract_field(
                    text,
                    RecordKind::Education,
                    "required_credential",
                ),
            },
            experience: ExperienceFields {
                months_of_experience: self.extract_field(
                    text,
                    RecordKind::Experience,
                    "months_of_experience",
                ),
                seniority_level: self.extract_field(
                    text,
                    RecordKind::Experience,
                    "seniority_level",
                ),
            },
            salary: SalaryFields {
                currency: self.extract_field(text, RecordKind::Salary, "currency"),
                min_value: self.extract_field(text, RecordKind::Salary, "min_value"),
                max_value: self.extract_field(text, RecordKind::Salary, "max_value"),
                unit: self.extract_field(text, RecordKind::Salary, "unit"),
            },
            location: LocationFields {
                country: self.extract_field(text, RecordKind::Location, "country"),
                locality: self.extract_field(text, RecordKind::Location, "locality"),
                region: self.extract_field(text, RecordKind::Location, "region"),
                postal_code: self.extract_field(text, RecordKind::Location, "postal_code"),
                street_address: self.extract_field(text, RecordKind::Location, "street_address"),
                latitude: self.extract_field(text, RecordKind::Location, "latitude"),
                longitude: self.extract_field(text, RecordKind::Location, "longitude"),
            },
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(&KeywordDict::default())
    }
}
