//! Show directory and show page parsers for EZTV.

use scraper::{Html, Selector};

use crate::error::{EztvError, Result};
use crate::types::{ShowDetail, ShowSummary};

use super::listing::parse_episode_listing;

/// Show links on the directory page
const SHOW_LINK_SELECTOR: &str = "a.thread_link";

/// Show title on a show page
const SHOW_TITLE_SELECTOR: &str = "b > span[itemprop='name']";

/// Cover image on a show page
const SHOW_COVER_SELECTOR: &str = ".show_info_main_logo > img:nth-child(1)";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EztvError::Selector(format!("{}: {:?}", css, e)))
}

/// Parse the show directory, keeping shows whose link text contains `keyword`.
///
/// The match is a literal, case-sensitive substring test against the raw
/// anchor text. Titles are returned untrimmed; a missing href becomes `""`.
///
/// # Errors
/// * `EztvError::EmptyResponse` if no show link matches
/// * `EztvError::ShowNotFound` if matching produced no summaries
pub fn parse_show_list(html: &str, keyword: &str) -> Result<Vec<ShowSummary>> {
    let document = Html::parse_document(html);
    let link_selector = selector(SHOW_LINK_SELECTOR)?;

    let matched: Vec<_> = document
        .select(&link_selector)
        .map(|link| (link.text().collect::<String>(), link))
        .filter(|(text, _)| text.contains(keyword))
        .collect();

    if matched.is_empty() {
        return Err(EztvError::EmptyResponse);
    }

    let shows: Vec<ShowSummary> = matched
        .into_iter()
        .map(|(title, link)| ShowSummary {
            title,
            url: link.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect();

    if shows.is_empty() {
        return Err(EztvError::ShowNotFound(keyword.to_string()));
    }

    tracing::debug!(keyword, matches = shows.len(), "parsed show directory");
    Ok(shows)
}

/// Parse a show page into its title, cover and episode listing.
///
/// Title and cover fall back to `""` when the page lacks them.
///
/// # Arguments
/// * `html` - Raw HTML content of the show page
/// * `path` - Path the page was requested with, stored as the show url
pub fn parse_show_detail(html: &str, path: &str) -> Result<ShowDetail> {
    let document = Html::parse_document(html);

    let episodes = parse_episode_listing(&document)?;
    let title = extract_show_title(&document)?;
    let cover = extract_cover(&document)?;

    Ok(ShowDetail {
        title,
        url: path.to_string(),
        cover,
        episodes,
    })
}

/// Text of the first labelled name span, or `""`.
fn extract_show_title(document: &Html) -> Result<String> {
    let title_selector = selector(SHOW_TITLE_SELECTOR)?;
    Ok(document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default())
}

/// `src` of the show logo image, or `""`.
fn extract_cover(document: &Html) -> Result<String> {
    let cover_selector = selector(SHOW_COVER_SELECTOR)?;
    Ok(document
        .select(&cover_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn directory(titles: &[&str]) -> String {
        let links: String = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                format!(
                    r#"<tr><td class="forum_thread_post"><a href="/shows/{}/" class="thread_link">{}</a></td></tr>"#,
                    i, title
                )
            })
            .collect();
        format!(
            r#"<html><body><table class="forum_header_border">{}</table></body></html>"#,
            links
        )
    }

    #[test]
    fn test_parse_show_list_filters_by_substring() {
        let html = directory(&["Breaking Bad", "Bad Education", "Lost", "Badlands"]);

        let shows = parse_show_list(&html, "Bad").unwrap();

        let titles: Vec<_> = shows.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Breaking Bad", "Bad Education", "Badlands"]);
        assert_eq!(shows[0].url, "/shows/0/");
        assert_eq!(shows[2].url, "/shows/3/");
    }

    #[test]
    fn test_parse_show_list_is_case_sensitive() {
        let html = directory(&["Breaking Bad"]);

        let result = parse_show_list(&html, "bad");
        assert!(matches!(result, Err(EztvError::EmptyResponse)));
    }

    #[test]
    fn test_parse_show_list_no_match() {
        let html = directory(&["Lost", "Fringe"]);
        assert!(matches!(
            parse_show_list(&html, "Dexter"),
            Err(EztvError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_show_list_ignores_other_anchors() {
        let html = r#"<html><body>
            <a href="/login/">Login to Lost</a>
            <a href="/shows/1/lost/" class="thread_link">Lost</a>
        </body></html>"#;

        let shows = parse_show_list(html, "Lost").unwrap();
        assert_eq!(
            shows,
            vec![ShowSummary {
                title: "Lost".to_string(),
                url: "/shows/1/lost/".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_show_list_missing_href() {
        let html = r#"<html><body><a class="thread_link">Lost</a></body></html>"#;

        let shows = parse_show_list(html, "Lost").unwrap();
        assert_eq!(shows[0].url, "");
    }

    #[test]
    fn test_parse_show_detail() {
        let html = r#"<html><body>
            <div class="show_info_main_logo"><img src="/ezimg/thumbs/lost-449.jpg" alt="Lost"></div>
            <b><span itemprop="name">Lost</span></b>
            <table>
              <tr class="forum_header_border">
                <td><a href="/ep/1/lost-s01e01/" class="epinfo">Lost S01E01 720p</a></td>
                <td><a href="magnet:?xt=urn:btih:1" class="magnet" title="Lost S01E01 720p Magnet Link"></a></td>
              </tr>
            </table>
        </body></html>"#;

        let detail = parse_show_detail(html, "/shows/449/lost/").unwrap();

        assert_eq!(detail.title, "Lost");
        assert_eq!(detail.url, "/shows/449/lost/");
        assert_eq!(detail.cover, "/ezimg/thumbs/lost-449.jpg");
        let variant = detail.episodes.get("S01E01", "720p").unwrap();
        assert_eq!(variant.url, "/ep/1/lost-s01e01/");
        assert_eq!(variant.magnet, "magnet:?xt=urn:btih:1");
    }

    #[test]
    fn test_parse_show_detail_missing_title_and_cover() {
        let detail = parse_show_detail("<html><body></body></html>", "/shows/1/x/").unwrap();

        assert_eq!(detail.title, "");
        assert_eq!(detail.cover, "");
        assert_eq!(detail.url, "/shows/1/x/");
        assert!(detail.episodes.is_empty());
    }

    #[test]
    fn test_cover_takes_first_child_image_only() {
        let html = r#"<html><body><div class="show_info_main_logo">
            <span>badge</span><img src="/second.jpg">
        </div></body></html>"#;

        assert_eq!(parse_show_detail(html, "/").unwrap().cover, "");
    }

    proptest! {
        #[test]
        fn prop_show_list_only_returns_matching_titles(
            titles in prop::collection::vec("[A-Za-z0-9]{1,12}( [A-Za-z0-9]{1,12})?", 1..12),
            keyword in "[A-Za-z]{1,2}",
        ) {
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let expected = titles.iter().filter(|t| t.contains(keyword.as_str())).count();

            match parse_show_list(&directory(&refs), &keyword) {
                Ok(shows) => {
                    prop_assert_eq!(shows.len(), expected);
                    for show in &shows {
                        prop_assert!(show.title.contains(keyword.as_str()));
                    }
                }
                Err(EztvError::EmptyResponse) => {
                    prop_assert_eq!(expected, 0);
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error: {}", other);
                }
            }
        }
    }
}
