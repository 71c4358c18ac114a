//! Wire models for the search backend's JSON responses
//!
//! The backend answers `POST /api/search` with the full result of one
//! search: the crawled articles, the keyword tags extracted from them,
//! and the generated content (main topic, blog post, thread, card news).

use serde::Deserialize;

/// Successful response body from `POST /api/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Unique keyword tags across all articles, in display order
    pub keywords: Vec<String>,
    /// Crawled articles, in relevance order
    pub articles: Vec<Article>,
    /// Extracted main topic of the result set
    pub main_topic: String,
    /// Generated long-form blog post
    pub blog_post: String,
    /// Generated social-thread content
    pub thread_content: String,
    /// Generated card-news snippets
    pub cardnews: Vec<CardNewsItem>,
}

/// A single crawled news article
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub keywords: Vec<String>,
}

/// One card-news snippet. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardNewsItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CardNewsItem {
    /// Display title, falling back to `"Card N"` (1-based) when the
    /// title is absent or empty
    pub fn display_title(&self, index: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Card {}", index + 1),
        }
    }

    /// Display content, falling back to the empty string
    pub fn display_content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_response() {
        let body = r#"{
            "keywords": ["AI", "로봇"],
            "articles": [
                {"title": "T1", "link": "http://x", "summary": "S1", "keywords": ["AI"]},
                {"title": "T2", "link": "http://y", "summary": "S2", "keywords": ["로봇"]}
            ],
            "main_topic": "M",
            "blog_post": "B",
            "thread_content": "C",
            "cardnews": [{"title": "", "content": "X"}]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.keywords, vec!["AI", "로봇"]);
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].title, "T1");
        assert_eq!(response.main_topic, "M");
        assert_eq!(response.cardnews.len(), 1);
    }

    #[test]
    fn response_missing_required_fields_is_an_error() {
        // A body without the expected result shape must not parse as
        // success; the controller surfaces it as a request failure.
        let body = r#"{"keywords": ["AI"]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn cardnews_title_falls_back_to_numbered_card() {
        let empty_title: CardNewsItem = serde_json::from_str(r#"{"title": "", "content": "X"}"#).unwrap();
        assert_eq!(empty_title.display_title(0), "Card 1");
        assert_eq!(empty_title.display_content(), "X");

        let missing: CardNewsItem = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.display_title(2), "Card 3");
        assert_eq!(missing.display_content(), "");

        let named: CardNewsItem =
            serde_json::from_str(r#"{"title": "Headline", "content": "Y"}"#).unwrap();
        assert_eq!(named.display_title(0), "Headline");
    }
}
