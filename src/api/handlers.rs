// Item endpoint handlers module

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{bad_request, json_response, text_response};
use crate::config::AppState;
use crate::logger;
use crate::store::NewItem;

/// Reserved identifier values, never valid lookups
const SENTINEL_IDS: [&str; 2] = ["", "0"];

/// POST /post/items
///
/// Decodes the body into a create payload, stores the item with a freshly
/// assigned identifier, and echoes the stored item back with 201.
pub async fn handle_add_item<B: Body>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let whole_body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            logger::log_request("POST", "/post/items", 400);
            return Ok(bad_request("Failed to read request body"));
        }
    };

    let payload: NewItem = match serde_json::from_slice(&whole_body) {
        Ok(p) => p,
        Err(e) => {
            logger::log_request("POST", "/post/items", 400);
            return Ok(bad_request(&format!("Invalid JSON: {e}")));
        }
    };

    let item = state.store.add(payload).await;

    logger::log_request("POST", "/post/items", 201);
    json_response(StatusCode::CREATED, &item)
}

/// GET /get/items
///
/// Always 200; an empty store serializes to an empty JSON array.
pub async fn handle_list_items(state: Arc<AppState>) -> Result<Response<Full<Bytes>>, Infallible> {
    let items = state.store.list().await;

    logger::log_request("GET", "/get/items", 200);
    json_response(StatusCode::OK, &items)
}

/// GET /get/itemById/{id}
///
/// The empty string and "0" are reserved and rejected before the lookup.
pub async fn handle_get_item_by_id(
    id: &str,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = format!("/get/itemById/{id}");

    if SENTINEL_IDS.contains(&id) {
        logger::log_request("GET", &path, 400);
        return Ok(bad_request("Invalid ID"));
    }

    match state.store.get_by_id(id).await {
        Some(item) => {
            logger::log_request("GET", &path, 200);
            json_response(StatusCode::OK, &item)
        }
        None => {
            logger::log_request("GET", &path, 404);
            Ok(text_response(StatusCode::NOT_FOUND, "Item Not Found"))
        }
    }
}
