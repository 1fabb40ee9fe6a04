//! Seed document types for the source analytics database
//!
//! These are the documents the initializer inserts; downstream ETL and
//! analytics code reads them back through the same field names. The store
//! itself is schema-less, so these structs are the only place the document
//! shape is written down.
//!
//! Datetime fields serialize as BSON datetimes (not strings) so that the
//! descending date indexes sort correctly server-side.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's review of a product.
///
/// `customer_id` and `product_id` are free-form references; nothing enforces
/// them against another collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerFeedback {
    /// Business identifier, e.g. "FB001"; not unique server-side
    pub feedback_id: String,
    pub customer_id: i32,
    pub customer_email: String,
    pub product_id: i32,
    pub product_name: String,
    /// Star rating, 1-5
    pub rating: i32,
    pub comment: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub feedback_date: DateTime<Utc>,
    pub helpful_votes: i32,
    pub verified_purchase: bool,
    /// Model-scored sentiment in [0, 1]
    pub sentiment_score: f64,
    /// Stamped at insertion time, distinct from `feedback_date`
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// One browsing session of a site visitor.
///
/// `session_id` is unique across the collection, enforced by a unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    /// Business identifier, e.g. "SESS001"; unique server-side
    pub session_id: String,
    pub user_id: i32,
    pub email: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub end_time: DateTime<Utc>,
    /// "desktop", "mobile", "tablet"
    pub device_type: String,
    pub browser: String,
    pub os: String,
    pub country: String,
    pub city: String,
    pub pages_visited: i32,
    pub session_duration_seconds: i32,
    pub conversions: i32,
    /// Stamped at insertion time, distinct from `start_time`
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
