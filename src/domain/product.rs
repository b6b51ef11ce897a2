use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::object_id::ObjectId;
use crate::pagination::Pagination;

/// Prefix addressing an individual reviewer score inside an update payload,
/// e.g. `ratings.nifar`.
pub const RATINGS_FIELD_PREFIX: &str = "ratings.";

/// The fixed set of reviewers contributing to a product's ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reviewer {
    Nifar,
    Afia,
    Rumi,
    Sadia,
}

impl Reviewer {
    /// All reviewers, in the order their scores are stored.
    pub const ALL: [Reviewer; 4] = [
        Reviewer::Nifar,
        Reviewer::Afia,
        Reviewer::Rumi,
        Reviewer::Sadia,
    ];

    /// The key naming this reviewer inside the `ratings` mapping.
    pub fn as_key(&self) -> &'static str {
        match self {
            Reviewer::Nifar => "nifar",
            Reviewer::Afia => "afia",
            Reviewer::Rumi => "rumi",
            Reviewer::Sadia => "sadia",
        }
    }

    /// Resolve a ratings key back to a reviewer. Returns `None` for keys
    /// outside the fixed set.
    pub fn from_key(key: &str) -> Option<Reviewer> {
        Reviewer::ALL
            .into_iter()
            .find(|reviewer| reviewer.as_key() == key)
    }
}

/// Scores given by each of the four reviewers. Absent scores default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratings {
    pub nifar: f64,
    pub afia: f64,
    pub rumi: f64,
    pub sadia: f64,
}

impl Ratings {
    /// Score currently held by `reviewer`.
    pub fn score(&self, reviewer: Reviewer) -> f64 {
        match reviewer {
            Reviewer::Nifar => self.nifar,
            Reviewer::Afia => self.afia,
            Reviewer::Rumi => self.rumi,
            Reviewer::Sadia => self.sadia,
        }
    }
}

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, immutable once created.
    pub id: ObjectId,
    /// Human-readable name of the product.
    pub name: String,
    /// Ordered list of image URLs; may be empty.
    pub image_urls: Vec<String>,
    /// Scores from the fixed reviewer set.
    pub ratings: Ratings,
    /// Free-form comment, empty by default.
    pub comment: String,
    /// Timestamp set once when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp refreshed on every successful update.
    pub last_modified_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Ordered list of image URLs; may be empty.
    pub image_urls: Vec<String>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and no images.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_urls: Vec::new(),
        }
    }

    /// Attach image URLs to the product payload.
    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }
}

/// A single reviewer score carried by a ratings update.
///
/// The score keeps the caller's JSON numeral so the applied document echoes
/// it unchanged; [`RatingScore::value`] is what reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingScore {
    pub reviewer: Reviewer,
    pub score: Number,
}

impl RatingScore {
    pub fn new(reviewer: Reviewer, score: Number) -> Self {
        Self { reviewer, score }
    }

    /// Numeric value persisted for this score.
    pub fn value(&self) -> f64 {
        self.score.as_f64().unwrap_or_default()
    }
}

/// Classified product update, decided before any store call.
///
/// A payload carrying any `ratings.`-prefixed field is a ratings update and
/// an accompanying comment is dropped; a payload carrying only a comment is a
/// comment update. Payloads with neither are rejected during classification
/// and never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductUpdate {
    /// Replace the comment, leaving all other fields untouched.
    CommentOnly { comment: String },
    /// Replace the supplied reviewer scores.
    Ratings { scores: Vec<RatingScore> },
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name search term.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
