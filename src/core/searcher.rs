/// Client searcher with fuzzy matching
///
/// Re-ranks a tenant's clients with fuzzy matching so operators find
/// "Rajan Cables" when they type "rjn cable".

use crate::db::{ClientMatch, Database};
use crate::error::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Candidates pulled from the database before re-ranking. Clients beyond
/// this cap are not searchable; no tenant is anywhere near it.
const CANDIDATE_LIMIT: i64 = 1000;

/// Handles client searching within one tenant's database
pub struct Searcher {
    db: Database,
    matcher: SkimMatcherV2,
}

impl Searcher {
    /// Create a new searcher over a tenant database
    pub fn new(db: Database) -> Self {
        Self {
            db,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search clients with fuzzy matching
    ///
    /// # Arguments
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// * `Ok(Vec<ClientMatch>)` - Matches sorted by score, best first
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<ClientMatch>> {
        // Pull every candidate - fuzzy matching can't run in SQL, and a
        // LIKE prefilter would drop abbreviation matches like "rjn cbl"
        let clients = self.db.search_clients("", CANDIDATE_LIMIT).await?;

        let mut matches: Vec<ClientMatch> = clients
            .into_iter()
            .filter_map(|client| {
                self.matcher
                    .fuzzy_match(&client.name, query)
                    .map(|score| ClientMatch {
                        client,
                        score: score as f64,
                    })
            })
            .collect();

        // Sort by score (highest first)
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

        matches.truncate(limit);

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ClientInput;

    async fn setup() -> Searcher {
        let db = Database::new_test().await.unwrap();

        let names = vec![
            "Rajan Cable Network",
            "Star Vision",
            "City Cable Services",
            "Lakeside Broadband",
        ];

        for name in names {
            db.create_client(ClientInput {
                name: name.to_string(),
                phone: None,
                email: None,
                address: None,
            })
            .await
            .unwrap();
        }

        Searcher::new(db)
    }

    #[tokio::test]
    async fn test_fuzzy_search() {
        let searcher = setup().await;

        let results = searcher.search("cable", 10).await.unwrap();
        assert!(results.len() >= 2);
        assert!(results[0].client.name.to_lowercase().contains("cable"));
    }

    #[tokio::test]
    async fn test_fuzzy_abbreviation() {
        let searcher = setup().await;

        // Skim handles dropped letters
        let results = searcher.search("rjn cbl", 10).await.unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].client.name, "Rajan Cable Network");
    }

    #[tokio::test]
    async fn test_no_match() {
        let searcher = setup().await;

        let results = searcher.search("zzzzqqqq", 10).await.unwrap();
        assert!(results.is_empty());
    }
}
