use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A channel landing page after a single, complete fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPage {
    pub channel: String,
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub response_time: Duration,
    pub body: String,
}

/// One anchor element lifted out of the page markup. The target attribute
/// is optional in real-world markup, so its absence is preserved rather
/// than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub href: Option<String>,
}

impl ChannelPage {
    /// All anchor elements of the page, in document order.
    pub fn hyperlinks(&self) -> Vec<Hyperlink> {
        let document = Html::parse_document(&self.body);
        let link_selector = Selector::parse("a").unwrap();

        document
            .select(&link_selector)
            .map(|element| Hyperlink {
                href: element.value().attr("href").map(|href| href.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_body(body: &str) -> ChannelPage {
        ChannelPage {
            channel: "somechannel".to_string(),
            url: "https://www.twitch.tv/somechannel".to_string(),
            status_code: 200,
            content_type: Some("text/html".to_string()),
            response_time: Duration::from_millis(10),
            body: body.to_string(),
        }
    }

    #[test]
    fn hyperlinks_come_back_in_document_order() {
        let page = page_with_body(
            r#"<html><body>
                <a href="/first">First</a>
                <p>filler</p>
                <a href="/second">Second</a>
                <a href="/third">Third</a>
            </body></html>"#,
        );

        let hrefs: Vec<Option<String>> =
            page.hyperlinks().into_iter().map(|l| l.href).collect();

        assert_eq!(
            hrefs,
            vec![
                Some("/first".to_string()),
                Some("/second".to_string()),
                Some("/third".to_string()),
            ]
        );
    }

    #[test]
    fn anchor_without_target_is_kept_with_absent_href() {
        let page = page_with_body(
            r#"<html><body>
                <a name="top">Anchor only</a>
                <a href="https://example.com/somewhere">Somewhere</a>
            </body></html>"#,
        );

        let links = page.hyperlinks();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, None);
        assert_eq!(
            links[1].href,
            Some("https://example.com/somewhere".to_string())
        );
    }

    #[test]
    fn page_without_anchors_has_no_hyperlinks() {
        let page = page_with_body("<html><body><p>Nothing to see</p></body></html>");
        assert!(page.hyperlinks().is_empty());
    }
}
