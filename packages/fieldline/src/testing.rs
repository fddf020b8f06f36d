//! Test fixtures shared by unit, integration, and downstream tests.

pub use crate::ingestors::{MockIngestor, MockIngestorBuilder};

/// A posting body that labels every field of the stock dictionary.
pub fn full_posting_body() -> &'static str {
    "job title: Data Engineer\n\
     industry: Information Technology\n\
     description: Build and operate batch data pipelines.\n\
     employment type: FULL_TIME\n\
     date posted: 2025-01-26\n\
     company name: Acme Analytics\n\
     company link: https://careers.example.com/acme\n\
     education requirements: bachelor degree\n\
     months of experience: 24\n\
     seniority level: Mid-Senior\n\
     currency: USD\n\
     minimum salary: 52000\n\
     maximum salary: 78000\n\
     unit: YEAR\n\
     country: DE\n\
     locality: Berlin\n\
     region: BE\n\
     postal code: 10115\n\
     street address: Invalidenstr. 12\n\
     latitude: 52.53\n\
     longitude: 13.38"
}

/// A posting body that labels only a couple of fields.
pub fn sparse_posting_body() -> &'static str {
    "We are hiring!\njob title: Junior Analyst\nApply by email."
}
