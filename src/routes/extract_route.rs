use actix_web::{post, web, Either, HttpResponse};
use serde::Deserialize;

use crate::services::scrape_article;

#[derive(Deserialize)]
pub struct ExtractArticleBody {
    url: String,
}

/// Accepts the target url as a JSON or url-encoded form body. Scraping
/// failures are logged with detail and answered with a generic JSON error;
/// nothing about the underlying failure reaches the caller.
#[post("/")]
async fn extract_article(
    http_client: web::Data<reqwest::Client>,
    body: Either<web::Json<ExtractArticleBody>, web::Form<ExtractArticleBody>>,
) -> HttpResponse {
    let ExtractArticleBody { url } = body.into_inner();

    log::info!("Scraping article at {}", url);

    match scrape_article(&http_client, &url).await {
        Ok(article) => HttpResponse::Ok().json(article),
        Err(e) => {
            log::error!("Scraping error: {:?}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Error scraping the URL." }))
        }
    }
}
