//! Collection and index layout for the source database
//!
//! The whole layout is declared as one static table and applied in a single
//! pass. Downstream analytics queries depend on exactly this index set, so
//! any change here is a contract change for the consumers.

use crate::db::Database;
use crate::error::Result;
use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

/// Collection names, referenced by the seed and check layers as well.
pub const CUSTOMER_FEEDBACK: &str = "customer_feedback";
pub const PRODUCT_REVIEWS: &str = "product_reviews";
pub const CLICKSTREAM_LOGS: &str = "clickstream_logs";
pub const USER_SESSIONS: &str = "user_sessions";

/// Sort order of an indexed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// BSON key value for the index specification.
    fn key(self) -> i32 {
        match self {
            Order::Ascending => 1,
            Order::Descending => -1,
        }
    }
}

/// A single-field secondary index.
#[derive(Debug, Clone, Copy)]
pub struct IndexSpec {
    pub field: &'static str,
    pub order: Order,
    pub unique: bool,
}

const fn asc(field: &'static str) -> IndexSpec {
    IndexSpec {
        field,
        order: Order::Ascending,
        unique: false,
    }
}

const fn desc(field: &'static str) -> IndexSpec {
    IndexSpec {
        field,
        order: Order::Descending,
        unique: false,
    }
}

const fn unique_asc(field: &'static str) -> IndexSpec {
    IndexSpec {
        field,
        order: Order::Ascending,
        unique: true,
    }
}

/// A named collection with its index set.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub indexes: &'static [IndexSpec],
}

/// The collections the downstream analytics consumers expect, with the
/// index sets they query against.
pub const COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        name: CUSTOMER_FEEDBACK,
        indexes: &[
            asc("customer_id"),
            asc("product_id"),
            desc("feedback_date"),
            asc("rating"),
        ],
    },
    CollectionSpec {
        name: PRODUCT_REVIEWS,
        indexes: &[asc("product_id"), desc("review_date"), desc("helpful_votes")],
    },
    CollectionSpec {
        name: CLICKSTREAM_LOGS,
        indexes: &[asc("session_id"), desc("timestamp"), asc("user_id")],
    },
    CollectionSpec {
        name: USER_SESSIONS,
        indexes: &[unique_asc("session_id"), asc("user_id"), desc("start_time")],
    },
];

impl IndexSpec {
    /// Driver index model for this spec.
    fn model(&self) -> IndexModel {
        let mut keys = Document::new();
        keys.insert(self.field, self.order.key());

        if self.unique {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        } else {
            IndexModel::builder().keys(keys).build()
        }
    }
}

impl CollectionSpec {
    /// Driver index models for the whole collection.
    pub fn index_models(&self) -> Vec<IndexModel> {
        self.indexes.iter().map(IndexSpec::model).collect()
    }
}

/// Names of every collection in the layout, in creation order.
pub fn collection_names() -> Vec<&'static str> {
    COLLECTIONS.iter().map(|spec| spec.name).collect()
}

/// Create every collection in the layout.
///
/// Uses strict `createCollection` semantics: an existing collection is an
/// error, which propagates.
pub async fn create_collections(db: &Database) -> Result<usize> {
    for spec in COLLECTIONS {
        tracing::info!(collection = spec.name, "creating collection");
        db.target().create_collection(spec.name).await?;
    }
    Ok(COLLECTIONS.len())
}

/// Create the index set for every collection. Returns the number of indexes
/// created.
pub async fn create_indexes(db: &Database) -> Result<usize> {
    let mut created = 0;
    for spec in COLLECTIONS {
        let models = spec.index_models();
        let result = db
            .target()
            .collection::<Document>(spec.name)
            .create_indexes(models)
            .await?;
        tracing::info!(
            collection = spec.name,
            indexes = result.index_names.len(),
            "created indexes"
        );
        created += result.index_names.len();
    }
    Ok(created)
}
