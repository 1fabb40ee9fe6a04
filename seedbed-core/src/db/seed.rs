//! Literal seed documents for manual testing and demos
//!
//! Two collections receive seed data: five feedback documents and two user
//! sessions. The values are fixed; only `created_at` is stamped at insertion
//! time. There is no duplicate guard, so reseeding a populated database
//! either duplicates the feedback rows or trips the unique session index.

use crate::db::{schema, Database};
use crate::error::Result;
use crate::types::{CustomerFeedback, UserSession};
use chrono::{DateTime, Utc};

/// Per-collection insert counts from a seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub customer_feedback: usize,
    pub user_sessions: usize,
}

fn ts(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// The five feedback documents, stamped with `created_at`.
pub fn feedback_seed(created_at: DateTime<Utc>) -> Result<Vec<CustomerFeedback>> {
    Ok(vec![
        CustomerFeedback {
            feedback_id: "FB001".to_string(),
            customer_id: 1,
            customer_email: "ivanov@example.com".to_string(),
            product_id: 1,
            product_name: "Dell XPS 13 Laptop".to_string(),
            rating: 5,
            comment: "Great laptop, fast and light. The battery lasts a long time!".to_string(),
            feedback_date: ts("2024-01-15T10:30:00Z")?,
            helpful_votes: 12,
            verified_purchase: true,
            sentiment_score: 0.9,
            created_at,
        },
        CustomerFeedback {
            feedback_id: "FB002".to_string(),
            customer_id: 2,
            customer_email: "petrova@example.com".to_string(),
            product_id: 2,
            product_name: "iPhone 15 Smartphone".to_string(),
            rating: 4,
            comment: "Good phone, but overpriced. The camera is excellent.".to_string(),
            feedback_date: ts("2024-01-16T14:45:00Z")?,
            helpful_votes: 8,
            verified_purchase: true,
            sentiment_score: 0.7,
            created_at,
        },
        CustomerFeedback {
            feedback_id: "FB003".to_string(),
            customer_id: 3,
            customer_email: "sidorov@example.com".to_string(),
            product_id: 3,
            product_name: "Nike Air Max Sneakers".to_string(),
            rating: 3,
            comment: "Comfortable, but they wear out quickly. Scuff marks showed up after a month."
                .to_string(),
            feedback_date: ts("2024-01-17T09:15:00Z")?,
            helpful_votes: 5,
            verified_purchase: true,
            sentiment_score: 0.4,
            created_at,
        },
        CustomerFeedback {
            feedback_id: "FB004".to_string(),
            customer_id: 4,
            customer_email: "kuznetsova@example.com".to_string(),
            product_id: 1,
            product_name: "Dell XPS 13 Laptop".to_string(),
            rating: 5,
            comment: "Best purchase in years! I work with graphics and everything just flies."
                .to_string(),
            feedback_date: ts("2024-01-18T16:20:00Z")?,
            helpful_votes: 25,
            verified_purchase: true,
            sentiment_score: 0.95,
            created_at,
        },
        CustomerFeedback {
            feedback_id: "FB005".to_string(),
            customer_id: 5,
            customer_email: "smirnov@example.com".to_string(),
            product_id: 5,
            product_name: "Python for Data Analysis (book)".to_string(),
            rating: 4,
            comment: "A good book for beginners, plenty of practical examples.".to_string(),
            feedback_date: ts("2024-01-19T11:10:00Z")?,
            helpful_votes: 3,
            verified_purchase: true,
            sentiment_score: 0.8,
            created_at,
        },
    ])
}

/// The two session documents, stamped with `created_at`.
pub fn session_seed(created_at: DateTime<Utc>) -> Result<Vec<UserSession>> {
    Ok(vec![
        UserSession {
            session_id: "SESS001".to_string(),
            user_id: 1,
            email: "ivanov@example.com".to_string(),
            start_time: ts("2024-01-15T10:00:00Z")?,
            end_time: ts("2024-01-15T10:45:00Z")?,
            device_type: "desktop".to_string(),
            browser: "Chrome".to_string(),
            os: "Windows 11".to_string(),
            country: "Russia".to_string(),
            city: "Moscow".to_string(),
            pages_visited: 12,
            session_duration_seconds: 2700,
            conversions: 1,
            created_at,
        },
        UserSession {
            session_id: "SESS002".to_string(),
            user_id: 2,
            email: "petrova@example.com".to_string(),
            start_time: ts("2024-01-16T14:30:00Z")?,
            end_time: ts("2024-01-16T15:15:00Z")?,
            device_type: "mobile".to_string(),
            browser: "Safari".to_string(),
            os: "iOS".to_string(),
            country: "Russia".to_string(),
            city: "Saint Petersburg".to_string(),
            pages_visited: 8,
            session_duration_seconds: 1800,
            conversions: 0,
            created_at,
        },
    ])
}

/// Bulk-insert the seed documents, stamping `created_at` with the current
/// instant. Duplicate-key errors propagate unchanged.
pub async fn insert_seed_data(db: &Database) -> Result<SeedCounts> {
    let now = Utc::now();
    let feedback = feedback_seed(now)?;
    let sessions = session_seed(now)?;

    let feedback_result = db
        .target()
        .collection::<CustomerFeedback>(schema::CUSTOMER_FEEDBACK)
        .insert_many(&feedback)
        .await?;

    let session_result = db
        .target()
        .collection::<UserSession>(schema::USER_SESSIONS)
        .insert_many(&sessions)
        .await?;

    let counts = SeedCounts {
        customer_feedback: feedback_result.inserted_ids.len(),
        user_sessions: session_result.inserted_ids.len(),
    };

    tracing::info!(
        feedback = counts.customer_feedback,
        sessions = counts.user_sessions,
        "inserted seed documents"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feedback_seed_has_five_documents() {
        let now = Utc::now();
        let docs = feedback_seed(now).unwrap();
        assert_eq!(docs.len(), 5);

        let ids: Vec<_> = docs.iter().map(|d| d.feedback_id.as_str()).collect();
        assert_eq!(ids, vec!["FB001", "FB002", "FB003", "FB004", "FB005"]);
    }

    #[test]
    fn test_session_seed_has_two_unique_sessions() {
        let now = Utc::now();
        let docs = session_seed(now).unwrap();
        assert_eq!(docs.len(), 2);

        let ids: HashSet<_> = docs.iter().map(|d| d.session_id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("SESS001"));
        assert!(ids.contains("SESS002"));
    }

    #[test]
    fn test_created_at_is_the_stamp_not_the_event_date() {
        let stamp = Utc::now();
        for doc in feedback_seed(stamp).unwrap() {
            assert_eq!(doc.created_at, stamp);
            assert_ne!(doc.created_at, doc.feedback_date);
        }
        for doc in session_seed(stamp).unwrap() {
            assert_eq!(doc.created_at, stamp);
            assert_ne!(doc.created_at, doc.start_time);
        }
    }

    #[test]
    fn test_session_seed_literal_values() {
        let docs = session_seed(Utc::now()).unwrap();

        assert_eq!(docs[0].device_type, "desktop");
        assert_eq!(docs[0].session_duration_seconds, 2700);
        assert_eq!(docs[0].conversions, 1);

        assert_eq!(docs[1].device_type, "mobile");
        assert_eq!(docs[1].session_duration_seconds, 1800);
        assert_eq!(docs[1].conversions, 0);

        for doc in &docs {
            assert!(doc.end_time > doc.start_time);
        }
    }

    #[test]
    fn test_feedback_ratings_in_range() {
        for doc in feedback_seed(Utc::now()).unwrap() {
            assert!((1..=5).contains(&doc.rating));
            assert!((0.0..=1.0).contains(&doc.sentiment_score));
        }
    }
}
