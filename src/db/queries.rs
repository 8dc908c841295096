/// SQL query functions for tenant content
///
/// Every method runs against one tenant's database through the handle it
/// is called on; cross-tenant access is impossible by construction.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use chrono::Utc;
use sqlx::Row;

/// Timestamp format matching SQLite's CURRENT_TIMESTAMP
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in SQLite's timestamp format
fn now_timestamp() -> String {
    Utc::now().format(SQLITE_TIMESTAMP_FORMAT).to_string()
}

impl Database {
    // ---- clients ----

    /// Create a new client
    ///
    /// # Returns
    /// * `Ok(i64)` - The new client's ID
    pub async fn create_client(&self, input: ClientInput) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO clients (name, phone, email, address) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a client by ID
    pub async fn get_client(&self, id: i64) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(client)
    }

    /// List clients, optionally filtered by status
    pub async fn list_clients(&self, status: Option<&str>) -> Result<Vec<Client>> {
        let clients = if let Some(status) = status {
            sqlx::query_as::<_, Client>(
                "SELECT * FROM clients WHERE status = ? ORDER BY name",
            )
            .bind(status)
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
                .fetch_all(self.pool())
                .await?
        };

        Ok(clients)
    }

    /// Search clients by name (case-insensitive substring)
    pub async fn search_clients(&self, query: &str, limit: i64) -> Result<Vec<Client>> {
        let pattern = format!("%{}%", query);

        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE name LIKE ? ORDER BY name LIMIT ?",
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(clients)
    }

    /// Update a client's details
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether a row was actually changed
    pub async fn update_client(&self, id: i64, input: ClientInput) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE clients SET name = ?, phone = ?, email = ?, address = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Set a client's status ('active', 'suspended', ...)
    pub async fn set_client_status(&self, id: i64, status: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE clients SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a client
    pub async fn delete_client(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- cards ----

    /// Create a new card
    pub async fn create_card(&self, input: CardInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO cards (client_id, title, description, image_path, sort_order)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(input.client_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image_path)
        .bind(input.sort_order)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a card by ID
    pub async fn get_card(&self, id: i64) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(card)
    }

    /// List cards in display order
    pub async fn list_cards(&self, active_only: bool) -> Result<Vec<Card>> {
        let cards = if active_only {
            sqlx::query_as::<_, Card>(
                "SELECT * FROM cards WHERE active = 1 ORDER BY sort_order, id",
            )
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, Card>("SELECT * FROM cards ORDER BY sort_order, id")
                .fetch_all(self.pool())
                .await?
        };

        Ok(cards)
    }

    /// Update a card
    pub async fn update_card(&self, id: i64, input: CardInput) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cards
            SET client_id = ?, title = ?, description = ?, image_path = ?, sort_order = ?
            WHERE id = ?
            "#,
        )
        .bind(input.client_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image_path)
        .bind(input.sort_order)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a card
    pub async fn delete_card(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- banners ----

    /// Create a new banner
    pub async fn create_banner(&self, input: BannerInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO banners (title, image_path, link_url, sort_order)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.image_path)
        .bind(&input.link_url)
        .bind(input.sort_order)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a banner by ID
    pub async fn get_banner(&self, id: i64) -> Result<Option<Banner>> {
        let banner = sqlx::query_as::<_, Banner>("SELECT * FROM banners WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(banner)
    }

    /// List banners in display order
    pub async fn list_banners(&self, active_only: bool) -> Result<Vec<Banner>> {
        let banners = if active_only {
            sqlx::query_as::<_, Banner>(
                "SELECT * FROM banners WHERE active = 1 ORDER BY sort_order, id",
            )
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, Banner>("SELECT * FROM banners ORDER BY sort_order, id")
                .fetch_all(self.pool())
                .await?
        };

        Ok(banners)
    }

    /// Update a banner
    pub async fn update_banner(&self, id: i64, input: BannerInput) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE banners SET title = ?, image_path = ?, link_url = ?, sort_order = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.image_path)
        .bind(&input.link_url)
        .bind(input.sort_order)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Show or hide a banner
    pub async fn set_banner_active(&self, id: i64, active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE banners SET active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a banner
    pub async fn delete_banner(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM banners WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- price plans ----

    /// Create a new price plan
    pub async fn create_price_plan(&self, input: PricePlanInput) -> Result<i64> {
        let features = serde_json::to_string(&input.features)?;

        let result = sqlx::query(
            r#"
            INSERT INTO price_plans (name, price_cents, duration_days, features)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.price_cents)
        .bind(input.duration_days)
        .bind(&features)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a price plan by ID
    pub async fn get_price_plan(&self, id: i64) -> Result<Option<PricePlan>> {
        let plan = sqlx::query_as::<_, PricePlan>("SELECT * FROM price_plans WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(plan)
    }

    /// List price plans, cheapest first
    pub async fn list_price_plans(&self, active_only: bool) -> Result<Vec<PricePlan>> {
        let plans = if active_only {
            sqlx::query_as::<_, PricePlan>(
                "SELECT * FROM price_plans WHERE active = 1 ORDER BY price_cents",
            )
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, PricePlan>("SELECT * FROM price_plans ORDER BY price_cents")
                .fetch_all(self.pool())
                .await?
        };

        Ok(plans)
    }

    /// Update a price plan
    pub async fn update_price_plan(&self, id: i64, input: PricePlanInput) -> Result<bool> {
        let features = serde_json::to_string(&input.features)?;

        let result = sqlx::query(
            r#"
            UPDATE price_plans
            SET name = ?, price_cents = ?, duration_days = ?, features = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(input.price_cents)
        .bind(input.duration_days)
        .bind(&features)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a price plan
    pub async fn delete_price_plan(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM price_plans WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- videos ----

    /// Create a new video
    pub async fn create_video(&self, input: VideoInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO videos (title, url, thumbnail_path, category)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.thumbnail_path)
        .bind(&input.category)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a video by ID
    pub async fn get_video(&self, id: i64) -> Result<Option<Video>> {
        let video = sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(video)
    }

    /// List videos, newest first, optionally filtered by category
    pub async fn list_videos(&self, category: Option<&str>) -> Result<Vec<Video>> {
        let videos = if let Some(category) = category {
            sqlx::query_as::<_, Video>(
                "SELECT * FROM videos WHERE category = ? ORDER BY created_at DESC",
            )
            .bind(category)
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, Video>("SELECT * FROM videos ORDER BY created_at DESC")
                .fetch_all(self.pool())
                .await?
        };

        Ok(videos)
    }

    /// Publish or unpublish a video
    pub async fn set_video_published(&self, id: i64, published: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE videos SET published = ? WHERE id = ?")
            .bind(published)
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update a video
    pub async fn update_video(&self, id: i64, input: VideoInput) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE videos SET title = ?, url = ?, thumbnail_path = ?, category = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.thumbnail_path)
        .bind(&input.category)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a video
    pub async fn delete_video(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- results ----

    /// Create a new result announcement
    pub async fn create_result(&self, input: ExamResultInput) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO results (title, result_date, content) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.result_date)
        .bind(&input.content)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a result by ID
    pub async fn get_result(&self, id: i64) -> Result<Option<ExamResult>> {
        let result = sqlx::query_as::<_, ExamResult>("SELECT * FROM results WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(result)
    }

    /// Update a result's text and date
    pub async fn update_result(&self, id: i64, input: ExamResultInput) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE results SET title = ?, result_date = ?, content = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.result_date)
        .bind(&input.content)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List results, most recent date first
    pub async fn list_results(&self, published_only: bool) -> Result<Vec<ExamResult>> {
        let results = if published_only {
            sqlx::query_as::<_, ExamResult>(
                "SELECT * FROM results WHERE published = 1 ORDER BY result_date DESC",
            )
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, ExamResult>("SELECT * FROM results ORDER BY result_date DESC")
                .fetch_all(self.pool())
                .await?
        };

        Ok(results)
    }

    /// Publish or unpublish a result
    pub async fn set_result_published(&self, id: i64, published: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE results SET published = ? WHERE id = ?")
            .bind(published)
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a result
    pub async fn delete_result(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM results WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- flash news ----

    /// Create a new flash-news item
    pub async fn create_flash_news(&self, input: FlashNewsInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO flash_news (content, priority, starts_at, expires_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.content)
        .bind(input.priority)
        .bind(&input.starts_at)
        .bind(&input.expires_at)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get a flash-news item by ID
    pub async fn get_flash_news(&self, id: i64) -> Result<Option<FlashNews>> {
        let item = sqlx::query_as::<_, FlashNews>("SELECT * FROM flash_news WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(item)
    }

    /// List every flash-news item, highest priority first
    pub async fn list_flash_news(&self) -> Result<Vec<FlashNews>> {
        let items = sqlx::query_as::<_, FlashNews>(
            "SELECT * FROM flash_news ORDER BY priority DESC, id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }

    /// List items currently on air: active, started, not yet expired
    pub async fn list_current_flash_news(&self) -> Result<Vec<FlashNews>> {
        let now = now_timestamp();

        let items = sqlx::query_as::<_, FlashNews>(
            r#"
            SELECT * FROM flash_news
            WHERE active = 1
              AND (starts_at IS NULL OR starts_at <= ?)
              AND (expires_at IS NULL OR expires_at > ?)
            ORDER BY priority DESC, id
            "#,
        )
        .bind(&now)
        .bind(&now)
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }

    /// Update a flash-news item
    pub async fn update_flash_news(&self, id: i64, input: FlashNewsInput) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE flash_news
            SET content = ?, priority = ?, starts_at = ?, expires_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.content)
        .bind(input.priority)
        .bind(&input.starts_at)
        .bind(&input.expires_at)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a flash-news item
    pub async fn delete_flash_news(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM flash_news WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str) -> ClientInput {
        ClientInput {
            name: name.to_string(),
            phone: Some("555-0100".to_string()),
            email: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_client_crud() {
        let db = Database::new_test().await.unwrap();

        let id = db.create_client(client("Acme Industries")).await.unwrap();
        assert!(id > 0);

        let fetched = db.get_client(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Acme Industries");
        assert_eq!(fetched.status, "active");

        let mut updated = client("Acme Industries Ltd");
        updated.email = Some("hello@acme.test".to_string());
        assert!(db.update_client(id, updated).await.unwrap());

        let fetched = db.get_client(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Acme Industries Ltd");
        assert_eq!(fetched.email.as_deref(), Some("hello@acme.test"));

        assert!(db.delete_client(id).await.unwrap());
        assert!(db.get_client(id).await.unwrap().is_none());
        assert!(!db.delete_client(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_client_status_filter() {
        let db = Database::new_test().await.unwrap();

        let a = db.create_client(client("Alpha")).await.unwrap();
        db.create_client(client("Beta")).await.unwrap();
        db.set_client_status(a, "suspended").await.unwrap();

        let suspended = db.list_clients(Some("suspended")).await.unwrap();
        assert_eq!(suspended.len(), 1);
        assert_eq!(suspended[0].name, "Alpha");

        let all = db.list_clients(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_card_crud() {
        let db = Database::new_test().await.unwrap();

        let owner = db.create_client(client("Acme Industries")).await.unwrap();

        let id = db
            .create_card(CardInput {
                client_id: Some(owner),
                title: "Acme spotlight".to_string(),
                description: None,
                image_path: Some("cards/acme.png".to_string()),
                sort_order: 2,
            })
            .await
            .unwrap();

        let card = db.get_card(id).await.unwrap().unwrap();
        assert_eq!(card.title, "Acme spotlight");
        assert_eq!(card.client_id, Some(owner));
        assert!(card.active);

        assert!(db
            .update_card(
                id,
                CardInput {
                    client_id: None,
                    title: "House card".to_string(),
                    description: Some("unsponsored".to_string()),
                    image_path: None,
                    sort_order: 1,
                },
            )
            .await
            .unwrap());

        let card = db.get_card(id).await.unwrap().unwrap();
        assert_eq!(card.title, "House card");
        assert_eq!(card.client_id, None);
        assert_eq!(db.list_cards(true).await.unwrap().len(), 1);

        assert!(db.delete_card(id).await.unwrap());
        assert!(db.get_card(id).await.unwrap().is_none());
        assert!(db.list_cards(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_banner_visibility() {
        let db = Database::new_test().await.unwrap();

        let id = db
            .create_banner(BannerInput {
                title: "Summer sale".to_string(),
                image_path: Some("banners/summer.png".to_string()),
                link_url: None,
                sort_order: 1,
            })
            .await
            .unwrap();

        assert_eq!(db.list_banners(true).await.unwrap().len(), 1);

        db.set_banner_active(id, false).await.unwrap();
        assert!(db.list_banners(true).await.unwrap().is_empty());
        assert_eq!(db.list_banners(false).await.unwrap().len(), 1);

        let banner = db.get_banner(id).await.unwrap().unwrap();
        assert!(!banner.active);
        assert_eq!(banner.title, "Summer sale");
    }

    #[tokio::test]
    async fn test_price_plan_features_round_trip() {
        let db = Database::new_test().await.unwrap();

        let id = db
            .create_price_plan(PricePlanInput {
                name: "Gold".to_string(),
                price_cents: 49_900,
                duration_days: 30,
                features: vec!["hd".to_string(), "vod".to_string()],
            })
            .await
            .unwrap();

        let plan = db.get_price_plan(id).await.unwrap().unwrap();
        assert_eq!(plan.get_features(), vec!["hd", "vod"]);
    }

    #[tokio::test]
    async fn test_video_category_filter() {
        let db = Database::new_test().await.unwrap();

        db.create_video(VideoInput {
            title: "Launch event".to_string(),
            url: "https://videos.test/launch".to_string(),
            thumbnail_path: None,
            category: Some("events".to_string()),
        })
        .await
        .unwrap();

        db.create_video(VideoInput {
            title: "Tutorial".to_string(),
            url: "https://videos.test/tut".to_string(),
            thumbnail_path: None,
            category: Some("howto".to_string()),
        })
        .await
        .unwrap();

        let events = db.list_videos(Some("events")).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Launch event");
        assert_eq!(db.list_videos(None).await.unwrap().len(), 2);

        let video = db.get_video(events[0].id).await.unwrap().unwrap();
        assert_eq!(video.url, "https://videos.test/launch");
    }

    #[tokio::test]
    async fn test_result_publishing() {
        let db = Database::new_test().await.unwrap();

        let id = db
            .create_result(ExamResultInput {
                title: "August draw".to_string(),
                result_date: "2026-08-20".to_string(),
                content: None,
            })
            .await
            .unwrap();

        assert!(db.list_results(true).await.unwrap().is_empty());

        db.set_result_published(id, true).await.unwrap();
        assert_eq!(db.list_results(true).await.unwrap().len(), 1);

        // Corrections keep the published flag untouched
        assert!(db
            .update_result(
                id,
                ExamResultInput {
                    title: "August draw (corrected)".to_string(),
                    result_date: "2026-08-21".to_string(),
                    content: Some("ticket 4411".to_string()),
                },
            )
            .await
            .unwrap());

        let result = db.get_result(id).await.unwrap().unwrap();
        assert_eq!(result.title, "August draw (corrected)");
        assert_eq!(result.result_date, "2026-08-21");
        assert!(result.published);
    }

    #[tokio::test]
    async fn test_flash_news_windowing() {
        let db = Database::new_test().await.unwrap();

        // No window: always current while active
        db.create_flash_news(FlashNewsInput {
            content: "Office open as usual".to_string(),
            priority: 1,
            starts_at: None,
            expires_at: None,
        })
        .await
        .unwrap();

        // Expired long ago
        db.create_flash_news(FlashNewsInput {
            content: "New year greetings".to_string(),
            priority: 5,
            starts_at: None,
            expires_at: Some("2026-01-02 00:00:00".to_string()),
        })
        .await
        .unwrap();

        // Starts far in the future
        db.create_flash_news(FlashNewsInput {
            content: "Scheduled maintenance".to_string(),
            priority: 3,
            starts_at: Some("2099-01-01 00:00:00".to_string()),
            expires_at: None,
        })
        .await
        .unwrap();

        let current = db.list_current_flash_news().await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].content, "Office open as usual");

        assert_eq!(db.list_flash_news().await.unwrap().len(), 3);

        let item = db.get_flash_news(current[0].id).await.unwrap().unwrap();
        assert_eq!(item.content, "Office open as usual");
    }
}
