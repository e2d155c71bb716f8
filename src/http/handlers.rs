//! Catalog endpoint handlers.
//!
//! Handlers borrow the shared dataset, build a view of references and
//! serialize it before returning, so no record is ever cloned.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::catalog::{query, Computer, Field, DEFAULT_SORT_FIELD};
use crate::http::request::QueryParams;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// `GET /computers/`: sorted by model, narrowed by every query parameter.
pub async fn list_computers(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, ApiError> {
    let mut view = query::sort(state.dataset.iter(), DEFAULT_SORT_FIELD.name())?;
    for (name, value) in params.iter() {
        view = query::filter(view, name, value);
    }

    tracing::debug!(
        filters = ?params.names().collect::<Vec<_>>(),
        results = view.len(),
        "Listed computers"
    );
    Ok(Json(view).into_response())
}

/// `GET /computers/sorted/`: ordered by the field named in the first parameter.
///
/// Unknown names and empty queries keep insertion order.
pub async fn list_sorted(State(state): State<AppState>, params: QueryParams) -> Response {
    let field = params.first_name().and_then(Field::from_name);
    let view: Vec<&Computer> = match field {
        Some(field) => query::sort_by_field(state.dataset.iter(), field),
        None => state.dataset.iter().collect(),
    };

    tracing::debug!(
        sort = field.map(Field::name).unwrap_or("none"),
        results = view.len(),
        "Listed sorted computers"
    );
    Json(view).into_response()
}

/// Redirect a collection path to its trailing-slash form, keeping the query.
pub async fn redirect_with_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&target)
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::UnknownRoute
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
