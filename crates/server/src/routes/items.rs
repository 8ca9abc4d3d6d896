use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use models::{errors::ModelError, item};

#[utoipa::path(
    get, path = "/GetItems", tag = "items",
    responses(
        (status = 200, description = "All items"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<item::Model>>, JsonApiError> {
    match item::list(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list items");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "List Failed",
            Some(e.to_string()),
        )),
    }
}

#[utoipa::path(
    post, path = "/AddItem/{name}", tag = "items",
    params(("name" = String, Path, description = "Name of the new item")),
    responses(
        (status = 201, description = "Created, id in Location header"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<item::Model>), JsonApiError> {
    match item::create(&state.db, &name).await {
        Ok(m) => {
            info!(id = m.id, name = %m.name, "created item");
            let location = [(header::LOCATION, m.id.to_string())];
            Ok((StatusCode::CREATED, location, Json(m)))
        }
        Err(e @ ModelError::Validation(_)) => Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some(e.to_string()),
        )),
        Err(e) => {
            error!(err = %e, "create item failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Create Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    put, path = "/UpdateItem/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 201, description = "Completion flag flipped, id in Location header"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<item::Model>), JsonApiError> {
    match item::toggle_complete(&state.db, id).await {
        // The original service answers Created with a Location header on
        // update; preserved for client compatibility.
        Ok(Some(m)) => {
            info!(id = m.id, is_complete = m.is_complete, "toggled item");
            let location = [(header::LOCATION, m.id.to_string())];
            Ok((StatusCode::CREATED, location, Json(m)))
        }
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)),
        Err(e) => {
            error!(err = %e, "toggle item failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Update Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    delete, path = "/DeleteItem/{id}", tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match item::delete(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted item");
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete item failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
