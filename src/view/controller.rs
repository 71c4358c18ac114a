// Search orchestration and session state
//
// One search runs at a time from the user's point of view:
//
//   Idle -> Loading -> { Error, Showing } -> Loading -> ...
//
// `Error` and `Showing` are only reachable from `Loading`, never from
// each other. The controller owns the state transitions and drives the
// renderers; the actual request dispatch belongs to the caller (the TUI
// spawns it, the headless path awaits it inline).

use super::filter::FilterEngine;
use super::render::{render_articles, render_content_panels, render_filter_bar};
use super::surface::{Region, UiSurface};
use crate::api::models::SearchResponse;

/// Session-level UI state. Exactly one of loading / error / results is
/// presented at a time.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Loading { keyword: String },
    Error(String),
    Showing(SearchResponse),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading { .. } => "loading",
            SessionState::Error(_) => "error",
            SessionState::Showing(_) => "results",
        }
    }
}

pub struct SearchController {
    state: SessionState,
    filter: FilterEngine,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            filter: FilterEngine::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selected_keyword(&self) -> Option<&str> {
        self.filter.selected()
    }

    /// Apply a keyword filter to the current result set
    pub fn apply_filter(&mut self, surface: &mut dyn UiSurface, keyword: Option<&str>) {
        self.filter.apply(surface, keyword);
    }

    /// Validate the input and move into `Loading`.
    ///
    /// Returns the trimmed keyword the caller should dispatch, or `None`
    /// after raising a blocking alert for empty input (no other state
    /// changes in that case).
    pub fn begin_search(&mut self, surface: &mut dyn UiSurface, raw_input: &str) -> Option<String> {
        let keyword = raw_input.trim();
        if keyword.is_empty() {
            surface.alert("Please enter a search keyword.");
            return None;
        }

        surface.show(Region::Loading);
        surface.hide(Region::ErrorPanel);
        surface.hide(Region::Results);

        tracing::info!(keyword, "starting search");
        self.state = SessionState::Loading {
            keyword: keyword.to_string(),
        };
        Some(keyword.to_string())
    }

    /// Render a successful response and move into `Showing`.
    ///
    /// Rebuilding the filter bar implicitly resets the filter selection
    /// to "Show All". Loading is hidden last, as on the failure path.
    pub fn apply_success(&mut self, surface: &mut dyn UiSurface, response: SearchResponse) {
        self.filter.reset();

        render_filter_bar(surface, &response.keywords);
        render_articles(surface, &response.articles);
        render_content_panels(
            surface,
            &response.main_topic,
            &response.blog_post,
            &response.thread_content,
            &response.cardnews,
        );

        surface.show(Region::Results);
        surface.hide(Region::Loading);

        tracing::info!(
            articles = response.articles.len(),
            keywords = response.keywords.len(),
            "search finished"
        );
        self.state = SessionState::Showing(response);
    }

    /// Surface a failure message and move into `Error`. The results
    /// panel stays hidden; a previous result is gone until re-searched.
    pub fn apply_failure(&mut self, surface: &mut dyn UiSurface, message: String) {
        surface.set_text(Region::ErrorPanel, &message);
        surface.show(Region::ErrorPanel);
        surface.hide(Region::Loading);

        tracing::warn!(%message, "search failed");
        self.state = SessionState::Error(message);
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Article, CardNewsItem};
    use crate::view::render::SHOW_ALL_LABEL;
    use crate::view::surface::ScreenModel;

    fn sample_response() -> SearchResponse {
        SearchResponse {
            keywords: vec!["AI".to_string(), "로봇".to_string()],
            articles: vec![
                Article {
                    title: "T1".to_string(),
                    link: "http://x".to_string(),
                    summary: "S1".to_string(),
                    keywords: vec!["AI".to_string()],
                },
                Article {
                    title: "T2".to_string(),
                    link: "http://y".to_string(),
                    summary: "S2".to_string(),
                    keywords: vec!["로봇".to_string()],
                },
            ],
            main_topic: "M".to_string(),
            blog_post: "B".to_string(),
            thread_content: "C".to_string(),
            cardnews: vec![CardNewsItem {
                title: Some(String::new()),
                content: Some("X".to_string()),
            }],
        }
    }

    #[test]
    fn empty_input_alerts_and_changes_nothing() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();

        for raw in ["", "   ", "\t\n"] {
            assert_eq!(controller.begin_search(&mut surface, raw), None);
            assert!(surface.take_alert().is_some());
            assert!(matches!(controller.state(), SessionState::Idle));
            assert!(!surface.is_visible(Region::Loading));
        }
    }

    #[test]
    fn begin_search_trims_and_enters_loading() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();

        let keyword = controller.begin_search(&mut surface, "  AI news  ");

        assert_eq!(keyword.as_deref(), Some("AI news"));
        assert!(matches!(controller.state(), SessionState::Loading { .. }));
        assert!(surface.is_visible(Region::Loading));
        assert!(!surface.is_visible(Region::ErrorPanel));
        assert!(!surface.is_visible(Region::Results));
        assert!(surface.take_alert().is_none());
    }

    #[test]
    fn success_renders_everything_and_shows_results() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();
        controller.begin_search(&mut surface, "AI");

        controller.apply_success(&mut surface, sample_response());

        assert!(matches!(controller.state(), SessionState::Showing(_)));
        assert!(surface.is_visible(Region::Results));
        assert!(!surface.is_visible(Region::Loading));

        // Filter bar: keywords + "Show All", all-button active
        let buttons = surface.filter_buttons();
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0].label, SHOW_ALL_LABEL);
        assert!(buttons[0].active);
        assert_eq!(controller.selected_keyword(), None);

        assert_eq!(surface.article_cards().len(), 2);
        assert_eq!(surface.text(Region::ArticleCount), "2");
        assert_eq!(surface.text(Region::MainTopic), "M");
        assert_eq!(surface.text(Region::BlogPost), "B");
        assert_eq!(surface.text(Region::ThreadContent), "C");
        assert_eq!(surface.news_cards()[0].title, "Card 1");
        assert_eq!(surface.news_cards()[0].content, "X");
    }

    #[test]
    fn failure_shows_server_message_and_hides_loading() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();
        controller.begin_search(&mut surface, "AI");

        controller.apply_failure(&mut surface, "rate limited".to_string());

        assert!(matches!(controller.state(), SessionState::Error(_)));
        assert_eq!(surface.text(Region::ErrorPanel), "rate limited");
        assert!(surface.is_visible(Region::ErrorPanel));
        assert!(!surface.is_visible(Region::Loading));
        assert!(!surface.is_visible(Region::Results));
    }

    #[test]
    fn new_search_result_resets_the_filter_selection() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();

        controller.begin_search(&mut surface, "AI");
        controller.apply_success(&mut surface, sample_response());
        controller.apply_filter(&mut surface, Some("AI"));
        assert_eq!(surface.text(Region::ArticleCount), "1");

        controller.begin_search(&mut surface, "AI");
        controller.apply_success(&mut surface, sample_response());

        assert_eq!(controller.selected_keyword(), None);
        assert_eq!(surface.visible_cards().count(), 2);
        assert_eq!(surface.text(Region::ArticleCount), "2");
    }

    #[test]
    fn session_recovers_from_error_on_next_search() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();

        controller.begin_search(&mut surface, "AI");
        controller.apply_failure(&mut surface, "boom".to_string());

        controller.begin_search(&mut surface, "AI");
        assert!(matches!(controller.state(), SessionState::Loading { .. }));
        assert!(!surface.is_visible(Region::ErrorPanel));

        controller.apply_success(&mut surface, sample_response());
        assert!(surface.is_visible(Region::Results));
        assert!(!surface.is_visible(Region::ErrorPanel));
    }

    #[test]
    fn scenario_filter_by_ai_leaves_one_visible_card() {
        let mut surface = ScreenModel::new();
        let mut controller = SearchController::new();
        controller.begin_search(&mut surface, "AI");
        controller.apply_success(&mut surface, sample_response());

        controller.apply_filter(&mut surface, Some("AI"));

        let visible: Vec<&str> = surface.visible_cards().map(|c| c.title.as_str()).collect();
        assert_eq!(visible, vec!["1. T1"]);
        assert_eq!(surface.text(Region::ArticleCount), "1");
    }
}
