// Renderers for search results
//
// Each renderer clears its region and rebuilds it from the response data,
// mirroring one section of the results screen: the keyword filter bar,
// the article list, and the generated-content panels.

use super::surface::{ArticleCard, FilterButton, NewsCard, Region, UiSurface};
use crate::api::models::{Article, CardNewsItem};

/// Label of the filter button that clears the keyword filter
pub const SHOW_ALL_LABEL: &str = "Show All";

/// Badge strings for an article's keyword tags ("#keyword" each).
/// Keywords are taken as-is: no normalization, no dedup.
pub fn badge_labels(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| format!("#{}", k)).collect()
}

/// Rebuild the keyword filter bar: one "Show All" button first (active),
/// then one button per keyword in input order.
pub fn render_filter_bar(surface: &mut dyn UiSurface, keywords: &[String]) {
    surface.clear_children(Region::FilterBar);

    surface.push_filter_button(FilterButton {
        label: SHOW_ALL_LABEL.to_string(),
        keyword: None,
        active: true,
    });

    for keyword in keywords {
        surface.push_filter_button(FilterButton {
            label: keyword.clone(),
            keyword: Some(keyword.clone()),
            active: false,
        });
    }
}

/// Rebuild the article list and publish the total count.
///
/// Every card stores its comma-joined keyword list as filter metadata.
/// The count published here is the unfiltered total; the filter engine
/// overwrites it when a keyword filter is applied.
pub fn render_articles(surface: &mut dyn UiSurface, articles: &[Article]) {
    surface.clear_children(Region::ArticleList);

    for (index, article) in articles.iter().enumerate() {
        surface.push_article_card(ArticleCard {
            title: format!("{}. {}", index + 1, article.title),
            link: article.link.clone(),
            summary: article.summary.clone(),
            badges: badge_labels(&article.keywords),
            keyword_data: article.keywords.join(","),
            visible: true,
        });
    }

    surface.set_text(Region::ArticleCount, &articles.len().to_string());
}

/// Set the generated-content regions and rebuild the card-news cards.
/// All text is inserted verbatim - nothing is interpreted as markup.
pub fn render_content_panels(
    surface: &mut dyn UiSurface,
    main_topic: &str,
    blog_post: &str,
    thread_content: &str,
    cardnews: &[CardNewsItem],
) {
    surface.set_text(Region::MainTopic, main_topic);
    surface.set_text(Region::BlogPost, blog_post);
    surface.set_text(Region::ThreadContent, thread_content);

    surface.clear_children(Region::CardNews);
    for (index, item) in cardnews.iter().enumerate() {
        surface.push_news_card(NewsCard {
            title: item.display_title(index),
            content: item.display_content().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::surface::ScreenModel;

    fn article(title: &str, keywords: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            link: format!("http://example.com/{}", title),
            summary: format!("summary of {}", title),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn filter_bar_has_one_button_per_keyword_plus_show_all() {
        let mut surface = ScreenModel::new();
        let keywords = vec!["AI".to_string(), "로봇".to_string()];

        render_filter_bar(&mut surface, &keywords);

        let buttons = surface.filter_buttons();
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0].label, SHOW_ALL_LABEL);
        assert_eq!(buttons[0].keyword, None);
        assert!(buttons[0].active);
        assert_eq!(buttons[1].keyword.as_deref(), Some("AI"));
        assert_eq!(buttons[2].keyword.as_deref(), Some("로봇"));
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn rerender_replaces_previous_buttons() {
        let mut surface = ScreenModel::new();
        render_filter_bar(&mut surface, &["old".to_string()]);
        render_filter_bar(&mut surface, &["new".to_string()]);

        let labels: Vec<&str> = surface
            .filter_buttons()
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec![SHOW_ALL_LABEL, "new"]);
    }

    #[test]
    fn articles_render_with_numbered_titles_and_badges() {
        let mut surface = ScreenModel::new();
        let articles = vec![article("T1", &["AI", "tech"]), article("T2", &["로봇"])];

        render_articles(&mut surface, &articles);

        let cards = surface.article_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "1. T1");
        assert_eq!(cards[1].title, "2. T2");
        assert_eq!(cards[0].badges, vec!["#AI", "#tech"]);
        assert_eq!(cards[0].keyword_data, "AI,tech");
        assert!(cards.iter().all(|c| c.visible));
        assert_eq!(surface.text(Region::ArticleCount), "2");
    }

    #[test]
    fn duplicate_keywords_are_kept_as_is() {
        let mut surface = ScreenModel::new();
        render_articles(&mut surface, &[article("T1", &["AI", "AI"])]);

        let card = &surface.article_cards()[0];
        assert_eq!(card.badges, vec!["#AI", "#AI"]);
        assert_eq!(card.keyword_data, "AI,AI");
    }

    #[test]
    fn content_panels_set_text_verbatim() {
        let mut surface = ScreenModel::new();
        render_content_panels(
            &mut surface,
            "M",
            "# not markdown\n<b>not html</b>",
            "C",
            &[],
        );

        assert_eq!(surface.text(Region::MainTopic), "M");
        assert_eq!(surface.text(Region::BlogPost), "# not markdown\n<b>not html</b>");
        assert_eq!(surface.text(Region::ThreadContent), "C");
        assert!(surface.news_cards().is_empty());
    }

    #[test]
    fn cardnews_uses_fallback_titles() {
        let mut surface = ScreenModel::new();
        let cards = vec![
            CardNewsItem {
                title: Some(String::new()),
                content: Some("X".to_string()),
            },
            CardNewsItem {
                title: Some("Headline".to_string()),
                content: None,
            },
        ];

        render_content_panels(&mut surface, "", "", "", &cards);

        let rendered = surface.news_cards();
        assert_eq!(rendered[0].title, "Card 1");
        assert_eq!(rendered[0].content, "X");
        assert_eq!(rendered[1].title, "Headline");
        assert_eq!(rendered[1].content, "");
    }
}
