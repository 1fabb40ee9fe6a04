//! Read-only deployment inspection
//!
//! Answers "what state is the target database in" without writing anything:
//! collection list, per-collection document counts, and one sample feedback
//! document. Safe to run repeatedly, including against an uninitialized
//! deployment (the report simply comes back empty).

use crate::db::{schema, Database};
use crate::error::Result;
use mongodb::bson::{doc, Document};

/// Snapshot of the target database's state.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Name of the inspected database
    pub database: String,
    /// Collection name and document count, sorted by name
    pub collections: Vec<(String, u64)>,
    /// One feedback document, if any exist (`_id` elided)
    pub sample_feedback: Option<Document>,
}

impl CheckReport {
    /// True when every collection in the expected layout is present.
    pub fn has_expected_layout(&self) -> bool {
        schema::collection_names()
            .iter()
            .all(|name| self.collections.iter().any(|(n, _)| n == name))
    }
}

/// Inspect the target database.
pub async fn inspect(db: &Database) -> Result<CheckReport> {
    let mut names = db.target().list_collection_names().await?;
    names.sort();

    let mut collections = Vec::with_capacity(names.len());
    for name in &names {
        let count = db
            .target()
            .collection::<Document>(name)
            .count_documents(doc! {})
            .await?;
        collections.push((name.clone(), count));
    }

    let mut sample_feedback = db
        .target()
        .collection::<Document>(schema::CUSTOMER_FEEDBACK)
        .find_one(doc! {})
        .await?;
    if let Some(doc) = sample_feedback.as_mut() {
        doc.remove("_id");
    }

    tracing::info!(
        database = %db.name(),
        collections = collections.len(),
        "inspected deployment"
    );

    Ok(CheckReport {
        database: db.name().to_string(),
        collections,
        sample_feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_missing_layout() {
        let report = CheckReport::default();
        assert!(!report.has_expected_layout());
    }

    #[test]
    fn test_full_layout_detected() {
        let report = CheckReport {
            database: "source_mongo_db".to_string(),
            collections: vec![
                ("clickstream_logs".to_string(), 0),
                ("customer_feedback".to_string(), 5),
                ("product_reviews".to_string(), 0),
                ("user_sessions".to_string(), 2),
            ],
            sample_feedback: None,
        };
        assert!(report.has_expected_layout());
    }

    #[test]
    fn test_partial_layout_detected_as_incomplete() {
        let report = CheckReport {
            database: "source_mongo_db".to_string(),
            collections: vec![("customer_feedback".to_string(), 5)],
            sample_feedback: None,
        };
        assert!(!report.has_expected_layout());
    }
}
