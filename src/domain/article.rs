use serde::Serialize;

/// Everything extracted from a single article page. Fields degrade to empty
/// values when the page carries no matching markup; absence of a field is
/// never an error.
#[derive(Debug, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub authors: Vec<String>,
    pub content: String,
    #[serde(rename = "publishedDate")]
    pub published_date: String,
}
