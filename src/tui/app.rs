// TUI application state
//
// Holds the keyword input buffer, the retained surface model, the search
// controller, and per-panel UI state (scroll offsets, content view,
// pending alert). The event loop mutates this; the draw function reads it.

use crate::api::models::SearchResponse;
use crate::logging::LogBuffer;
use crate::view::controller::SearchController;
use crate::view::surface::{Region, ScreenModel};

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Content panels on the right-hand side of the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Topic,
    Blog,
    Thread,
    Cards,
}

impl ContentView {
    pub const ALL: [ContentView; 4] = [
        ContentView::Topic,
        ContentView::Blog,
        ContentView::Thread,
        ContentView::Cards,
    ];

    /// Display name for the tab header
    pub fn name(&self) -> &'static str {
        match self {
            ContentView::Topic => "Topic",
            ContentView::Blog => "Blog Post",
            ContentView::Thread => "Thread",
            ContentView::Cards => "Card News",
        }
    }

    /// The text region this view presents, if it is a single-text view
    pub fn region(&self) -> Option<Region> {
        match self {
            ContentView::Topic => Some(Region::MainTopic),
            ContentView::Blog => Some(Region::BlogPost),
            ContentView::Thread => Some(Region::ThreadContent),
            ContentView::Cards => None,
        }
    }
}

/// Outcome of a dispatched search request, sent back to the event loop
#[derive(Debug)]
pub enum SearchOutcome {
    Success(SearchResponse),
    Failure(String),
}

/// Main application state for the TUI
pub struct App {
    /// Keyword input buffer
    pub input: String,

    /// Retained surface model the renderers write into
    pub surface: ScreenModel,

    /// Session state machine and filter engine
    pub controller: SearchController,

    /// Which content panel is shown (F1-F4)
    pub content_view: ContentView,

    /// Blocking alert, absorbs all input until dismissed
    pub alert: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Scroll offset for the article list
    pub article_scroll: usize,

    /// Scroll offset for the content panel
    pub content_scroll: usize,

    /// Log buffer for the system-log panel
    pub log_buffer: LogBuffer,

    /// Current spinner frame index
    pub spinner_frame: usize,
}

impl App {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            input: String::new(),
            surface: ScreenModel::new(),
            controller: SearchController::new(),
            content_view: ContentView::default(),
            alert: None,
            should_quit: false,
            article_scroll: 0,
            content_scroll: 0,
            log_buffer,
            spinner_frame: 0,
        }
    }

    /// Advance the loading spinner
    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Promote a pending surface alert into the blocking modal
    pub fn sync_alert(&mut self) {
        if self.alert.is_none() {
            self.alert = self.surface.take_alert();
        }
    }

    pub fn set_content_view(&mut self, view: ContentView) {
        if self.content_view != view {
            self.content_view = view;
            self.content_scroll = 0;
        }
    }

    /// Move the active filter button one step and apply it
    pub fn cycle_filter(&mut self, forward: bool) {
        let buttons = self.surface.filter_buttons();
        if buttons.is_empty() {
            return;
        }

        let current = buttons.iter().position(|b| b.active).unwrap_or(0);
        let next = if forward {
            (current + 1) % buttons.len()
        } else {
            (current + buttons.len() - 1) % buttons.len()
        };
        let keyword = buttons[next].keyword.clone();

        self.controller
            .apply_filter(&mut self.surface, keyword.as_deref());
        self.article_scroll = 0;
    }

    pub fn scroll_articles_up(&mut self) {
        self.article_scroll = self.article_scroll.saturating_sub(1);
    }

    pub fn scroll_articles_down(&mut self) {
        let visible = self.surface.visible_cards().count();
        if self.article_scroll + 1 < visible {
            self.article_scroll += 1;
        }
    }

    pub fn scroll_content_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    pub fn scroll_content_down(&mut self) {
        self.content_scroll += 1;
    }

    /// Copy the active content panel through the given clipboard
    /// writer and tell the user how it went. The writer is injected so
    /// the failure path is reachable without a real clipboard. Failures
    /// are logged and never propagate; nothing else changes either way.
    pub fn copy_active_panel(&mut self, write: fn(&str) -> anyhow::Result<()>) {
        let Some(text) = self.copy_text_for_view() else {
            return;
        };

        match write(&text) {
            Ok(()) => self.alert = Some("Copied to clipboard.".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.alert = Some("Copy failed.".to_string());
            }
        }
    }

    /// Text of the active content panel, for clipboard copy.
    /// None when no results are shown.
    pub fn copy_text_for_view(&self) -> Option<String> {
        if !self.surface.is_visible(Region::Results) {
            return None;
        }

        match self.content_view.region() {
            Some(region) => Some(self.surface.text(region).to_string()),
            None => {
                // Card news: join the cards as plain text
                let joined = self
                    .surface
                    .news_cards()
                    .iter()
                    .map(|card| format!("{}\n{}", card.title, card.content))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                Some(joined)
            }
        }
    }
}
