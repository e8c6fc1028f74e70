// API module entry
// Routes item registry requests to their endpoint handlers

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

/// Path prefix for single-item lookups; the identifier is the remainder
const ITEM_BY_ID_PREFIX: &str = "/get/itemById/";

/// Request dispatcher
///
/// Matches on method and path. Routing is entirely the dispatcher's job:
/// handlers never inspect paths themselves, so unknown routes uniformly
/// produce 404 and wrong methods 405.
pub async fn handle_request<B: Body>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    if let Some(id) = path.strip_prefix(ITEM_BY_ID_PREFIX) {
        if method == Method::GET {
            return handlers::handle_get_item_by_id(id, state).await;
        }
        logger::log_request(method.as_str(), &path, 405);
        return Ok(response::method_not_allowed());
    }

    match (method, path.as_str()) {
        (Method::POST, "/post/items") => {
            if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
                logger::log_request("POST", &path, 413);
                return Ok(resp);
            }
            handlers::handle_add_item(req, state).await
        }
        (Method::GET, "/get/items") => handlers::handle_list_items(state).await,
        (method, "/post/items" | "/get/items") => {
            logger::log_request(method.as_str(), &path, 405);
            Ok(response::method_not_allowed())
        }
        (method, _) => {
            logger::log_request(method.as_str(), &path, 404);
            Ok(response::not_found())
        }
    }
}

/// Reject bodies whose declared Content-Length exceeds the configured limit.
fn check_body_size<B: Body>(
    req: &Request<B>,
    max_body_size: usize,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    match content_length {
        Some(len) if len > max_body_size => Some(response::payload_too_large()),
        _ => None,
    }
}
