use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, ValidatedQuery,
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreatedItem, Item, ItemCount, ItemEntry, ItemValue, SampleQuery};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        count_items,
        get_item,
        update_item,
        delete_item,
        head_items,
        tail_items,
    ),
    components(
        schemas(Item, ItemValue, CreatedItem, ItemCount),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "String item management endpoints"),
        (name = "Sampling", description = "Head and tail views of the collection")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
///
/// `/items/count` takes precedence over `/items/{id}`, so `PUT` and `DELETE`
/// on `/items/count` answer 405. Generated ids are UUIDs and never collide
/// with it.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/count", get(count_items))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/head", get(head_items))
        .route("/tail", get(tail_items))
        .with_state(shared_service)
}

/// List all items in insertion order
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = ItemValue,
    responses(
        (status = 201, description = "Item created successfully", body = CreatedItem),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let created = service.add_item(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Count stored items
#[utoipa::path(
    get,
    path = "/items/count",
    tag = "Items",
    responses(
        (status = 200, description = "Item count", body = ItemCount),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemCount>> {
    let count = service.count().await?;
    Ok(Json(ItemCount { count }))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found, keyed by its ID", body = HashMap<String, String>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<ItemEntry>> {
    let entry = service.get_item_by_id(&id).await?;
    Ok(Json(entry))
}

/// Replace the value of an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    request_body = ItemValue,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(input) = payload?;
    let item = service.update_item(&id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Oldest items first
#[utoipa::path(
    get,
    path = "/head",
    tag = "Sampling",
    params(SampleQuery),
    responses(
        (status = 200, description = "Up to `num_samples` items in insertion order", body = Vec<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn head_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(query): ValidatedQuery<SampleQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.head(query.num_samples).await?;
    Ok(Json(items))
}

/// Newest items first
#[utoipa::path(
    get,
    path = "/tail",
    tag = "Sampling",
    params(SampleQuery),
    responses(
        (status = 200, description = "Up to `num_samples` items, newest first", body = Vec<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn tail_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(query): ValidatedQuery<SampleQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.tail(query.num_samples).await?;
    Ok(Json(items))
}
