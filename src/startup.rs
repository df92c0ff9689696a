use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    error::{InternalError, JsonPayloadError, UrlencodedError},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse, HttpServer,
};

use crate::routes::extract_route;

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let http_client = web::Data::new(reqwest::Client::new());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(extract_route::extract_article)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .app_data(http_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Failures before the scrape boundary (malformed or unreadable request
// bodies) respond with a plain-text 500, unlike the JSON shape used for
// scraping failures.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("Failed to parse request body: {:?}", err);
    InternalError::from_response(err, internal_server_error()).into()
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("Failed to parse request body: {:?}", err);
    InternalError::from_response(err, internal_server_error()).into()
}

fn internal_server_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("Internal Server Error")
}
