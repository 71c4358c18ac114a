// Client-side keyword filtering of the rendered article list

use super::surface::{Region, UiSurface};

/// Tracks the selected filter keyword and applies it to the surface.
///
/// `None` means "show all". The selection resets whenever the filter bar
/// is rebuilt for a new search result.
#[derive(Debug, Default)]
pub struct FilterEngine {
    selected: Option<String>,
}

impl FilterEngine {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clear the selection without touching the surface. Used when a new
    /// result replaces the filter bar, which starts at "Show All".
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Apply a keyword filter (or none) to the rendered cards.
    ///
    /// Exactly one button ends up active: the one whose keyword equals
    /// the selection. Card visibility uses substring inclusion on the
    /// comma-joined keyword metadata, same as the original web UI - a
    /// keyword that is a substring of another tag also matches.
    /// Idempotent: reapplying the same keyword changes nothing.
    pub fn apply(&mut self, surface: &mut dyn UiSurface, keyword: Option<&str>) {
        self.selected = keyword.map(str::to_string);

        for button in surface.filter_buttons_mut() {
            button.active = button.keyword.as_deref() == keyword;
        }

        let mut visible_count = 0usize;
        for card in surface.article_cards_mut() {
            card.visible = match keyword {
                None => true,
                Some(k) => card.keyword_data.contains(k),
            };
            if card.visible {
                visible_count += 1;
            }
        }

        surface.set_text(Region::ArticleCount, &visible_count.to_string());
    }
}
