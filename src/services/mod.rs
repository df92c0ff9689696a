pub mod article_scraper;

pub use article_scraper::*;
