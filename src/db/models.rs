/// Data models for tenant content
///
/// All models map to tables in a tenant's database and use sqlx for
/// type-safe queries. Each record type has a matching input struct for
/// creation; updates reuse the input struct.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company's customer record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// A display card, optionally tied to a client
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub client_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    pub client_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: i32,
}

/// A promotional banner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub image_path: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerInput {
    pub title: String,
    pub image_path: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
}

/// A subscription price plan
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PricePlan {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    pub duration_days: i32,
    pub features: Option<String>, // JSON array
    pub active: bool,
    pub created_at: String, // ISO 8601 format from SQLite
}

impl PricePlan {
    /// Parse features from JSON string
    pub fn get_features(&self) -> Vec<String> {
        self.features
            .as_ref()
            .and_then(|f| serde_json::from_str(f).ok())
            .unwrap_or_default()
    }

    /// Set features as JSON string
    pub fn set_features(&mut self, features: Vec<String>) -> Result<(), serde_json::Error> {
        self.features = Some(serde_json::to_string(&features)?);
        Ok(())
    }
}

/// Input for creating or updating a price plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePlanInput {
    pub name: String,
    pub price_cents: i64,
    pub duration_days: i32,
    pub features: Vec<String>,
}

/// A hosted or embedded video
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_path: Option<String>,
    pub category: Option<String>,
    pub published: bool,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInput {
    pub title: String,
    pub url: String,
    pub thumbnail_path: Option<String>,
    pub category: Option<String>,
}

/// A published result announcement
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamResult {
    pub id: i64,
    pub title: String,
    pub result_date: String,
    pub content: Option<String>,
    pub published: bool,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResultInput {
    pub title: String,
    pub result_date: String,
    pub content: Option<String>,
}

/// A scrolling flash-news item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FlashNews {
    pub id: i64,
    pub content: String,
    pub priority: i32,
    pub active: bool,
    pub starts_at: Option<String>,
    pub expires_at: Option<String>,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// Input for creating or updating a flash-news item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashNewsInput {
    pub content: String,
    pub priority: i32,
    pub starts_at: Option<String>,
    pub expires_at: Option<String>,
}

/// A client search hit with its match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMatch {
    pub client: Client,
    pub score: f64, // Fuzzy match score
}
