// UI surface abstraction
//
// The renderers and the filter engine never touch the terminal directly.
// They mutate a retained model of named regions through the `UiSurface`
// trait: show/hide a region, set its text, clear or append child nodes.
// `ScreenModel` is the one implementation - the TUI draws from it every
// frame, and tests assert against it.

use std::collections::HashMap;

/// Named UI regions the view layer reads from and writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    KeywordInput,
    Loading,
    ErrorPanel,
    Results,
    FilterBar,
    ArticleCount,
    ArticleList,
    MainTopic,
    BlogPost,
    ThreadContent,
    CardNews,
}

/// A clickable keyword-filter button. `keyword` is `None` for the
/// "Show All" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub keyword: Option<String>,
    pub active: bool,
}

/// A rendered article card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    /// Index-prefixed title, e.g. "1. Some headline"
    pub title: String,
    pub link: String,
    pub summary: String,
    /// One "#keyword" badge per article keyword, no dedup
    pub badges: Vec<String>,
    /// Comma-joined keyword list, the filter engine matches against this
    pub keyword_data: String,
    pub visible: bool,
}

/// A rendered card-news card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub content: String,
}

/// Capability interface the renderers and filter engine work against
pub trait UiSurface {
    fn show(&mut self, region: Region);
    fn hide(&mut self, region: Region);
    fn set_text(&mut self, region: Region, text: &str);
    fn clear_children(&mut self, region: Region);

    fn push_filter_button(&mut self, button: FilterButton);
    fn push_article_card(&mut self, card: ArticleCard);
    fn push_news_card(&mut self, card: NewsCard);

    fn filter_buttons_mut(&mut self) -> &mut [FilterButton];
    fn article_cards_mut(&mut self) -> &mut [ArticleCard];

    /// Raise a blocking notice the user must dismiss
    fn alert(&mut self, message: &str);
}

/// Retained in-memory screen model
#[derive(Debug, Default)]
pub struct ScreenModel {
    visible: HashMap<Region, bool>,
    text: HashMap<Region, String>,
    filter_buttons: Vec<FilterButton>,
    article_cards: Vec<ArticleCard>,
    news_cards: Vec<NewsCard>,
    pending_alert: Option<String>,
}

impl ScreenModel {
    pub fn new() -> Self {
        let mut model = Self::default();
        // Everything starts hidden except the input field
        model.visible.insert(Region::KeywordInput, true);
        model
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    pub fn text(&self, region: Region) -> &str {
        self.text.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn filter_buttons(&self) -> &[FilterButton] {
        &self.filter_buttons
    }

    pub fn article_cards(&self) -> &[ArticleCard] {
        &self.article_cards
    }

    pub fn news_cards(&self) -> &[NewsCard] {
        &self.news_cards
    }

    /// Visible article cards, in render order
    pub fn visible_cards(&self) -> impl Iterator<Item = &ArticleCard> {
        self.article_cards.iter().filter(|card| card.visible)
    }

    /// Take the pending alert, if any. The TUI pops this into a modal.
    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }
}

impl UiSurface for ScreenModel {
    fn show(&mut self, region: Region) {
        self.visible.insert(region, true);
    }

    fn hide(&mut self, region: Region) {
        self.visible.insert(region, false);
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.text.insert(region, text.to_string());
    }

    fn clear_children(&mut self, region: Region) {
        match region {
            Region::FilterBar => self.filter_buttons.clear(),
            Region::ArticleList => self.article_cards.clear(),
            Region::CardNews => self.news_cards.clear(),
            _ => {}
        }
    }

    fn push_filter_button(&mut self, button: FilterButton) {
        self.filter_buttons.push(button);
    }

    fn push_article_card(&mut self, card: ArticleCard) {
        self.article_cards.push(card);
    }

    fn push_news_card(&mut self, card: NewsCard) {
        self.news_cards.push(card);
    }

    fn filter_buttons_mut(&mut self) -> &mut [FilterButton] {
        &mut self.filter_buttons
    }

    fn article_cards_mut(&mut self) -> &mut [ArticleCard] {
        &mut self.article_cards
    }

    fn alert(&mut self, message: &str) {
        self.pending_alert = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_default_hidden_except_input() {
        let model = ScreenModel::new();
        assert!(model.is_visible(Region::KeywordInput));
        assert!(!model.is_visible(Region::Loading));
        assert!(!model.is_visible(Region::ErrorPanel));
        assert!(!model.is_visible(Region::Results));
    }

    #[test]
    fn clear_children_only_touches_the_named_region() {
        let mut model = ScreenModel::new();
        model.push_filter_button(FilterButton {
            label: "Show All".to_string(),
            keyword: None,
            active: true,
        });
        model.push_news_card(NewsCard {
            title: "Card 1".to_string(),
            content: "x".to_string(),
        });

        model.clear_children(Region::FilterBar);
        assert!(model.filter_buttons().is_empty());
        assert_eq!(model.news_cards().len(), 1);
    }

    #[test]
    fn take_alert_drains_the_pending_notice() {
        let mut model = ScreenModel::new();
        model.alert("Please enter a search keyword.");
        assert_eq!(
            model.take_alert().as_deref(),
            Some("Please enter a search keyword.")
        );
        assert!(model.take_alert().is_none());
    }
}
