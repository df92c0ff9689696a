use scraper::{Html, Selector};

use crate::domain::Article;

// Selectors tied to the one supported site's markup. Paragraphs must be
// direct children of the story body; deeper-nested ones are intentionally
// ignored.
const HEADLINE_SELECTOR: &str = "h1.Page-headline";
const AUTHOR_SELECTOR: &str = "div.Page-authors span.Link";
const BODY_PARAGRAPH_SELECTOR: &str = "div.RichTextStoryBody.RichTextBody > p";
const DATE_SELECTOR: &str = "div.Page-dateModified span[data-date]";

#[derive(Debug, thiserror::Error)]
#[error("failed to scrape {url}")]
pub struct ScrapeError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Fetch the page at `url` and extract the article fields from it. The url
/// is used verbatim; a malformed url surfaces as a fetch failure, and a
/// non-2xx status from the target site is a failure too.
pub async fn scrape_article(client: &reqwest::Client, url: &str) -> Result<Article, ScrapeError> {
    let html = fetch_page(client, url).await.map_err(|e| ScrapeError {
        url: url.to_string(),
        source: e,
    })?;

    Ok(parse_article(&html))
}

async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// Pure extraction over already-fetched HTML. Always produces an [`Article`];
/// missing markup degrades the matching field to an empty value.
pub fn parse_article(html: &str) -> Article {
    let headline_selector = Selector::parse(HEADLINE_SELECTOR).unwrap();
    let author_selector = Selector::parse(AUTHOR_SELECTOR).unwrap();
    let paragraph_selector = Selector::parse(BODY_PARAGRAPH_SELECTOR).unwrap();
    let date_selector = Selector::parse(DATE_SELECTOR).unwrap();

    let document = Html::parse_document(html);

    let title = document
        .select(&headline_selector)
        .next()
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let authors: Vec<String> = document
        .select(&author_selector)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let mut content = String::new();
    for tag in document.select(&paragraph_selector) {
        let paragraph: String = tag.text().collect();
        content.push_str(paragraph.trim());
        content.push('\n');
    }
    let content = content.trim().to_string();

    let published_date = document
        .select(&date_selector)
        .next()
        .and_then(|tag| tag.value().attr("data-date"))
        .map(|raw| raw.trim().to_string())
        .unwrap_or_default();

    Article {
        title,
        authors,
        content,
        published_date,
    }
}
