//! JSON HTTP API over the [`Container`] use cases.
//!
//! | Method | Path                 | Body                                        |
//! |--------|----------------------|---------------------------------------------|
//! | POST   | `/api/query`         | `{"question": "..."}`                       |
//! | GET    | `/api/products`      |                                             |
//! | GET    | `/api/products/{id}` |                                             |
//! | POST   | `/api/products`      | `{"name","quantity","price","supplierId"}`  |
//! | GET    | `/api/suppliers`     |                                             |
//! | POST   | `/api/suppliers`     | `{"name": "..."}`                           |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::application::QueryRow;
use crate::domain::{DomainError, NewProduct, NewSupplier, Product, Supplier};

use super::Container;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Maps a [`DomainError`] onto a status code and `{"error": "..."}` body.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn http_router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/api/query", post(execute_query))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/suppliers", get(list_suppliers).post(create_supplier))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, http_router(container)).await?;
    Ok(())
}

async fn execute_query(
    State(container): State<Arc<Container>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<Vec<QueryRow>>, ApiError> {
    let rows = container.ask_use_case().execute(&request.question).await?;
    Ok(Json(rows))
}

async fn list_products(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(container.list_products_use_case().execute().await?))
}

async fn get_product(
    State(container): State<Arc<Container>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(container.get_product_use_case().execute(id).await?))
}

async fn create_product(
    State(container): State<Arc<Container>>,
    Json(request): Json<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(
        container.create_product_use_case().execute(request).await?,
    ))
}

async fn list_suppliers(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    Ok(Json(container.list_suppliers_use_case().execute().await?))
}

async fn create_supplier(
    State(container): State<Arc<Container>>,
    Json(request): Json<NewSupplier>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(
        container.create_supplier_use_case().execute(request).await?,
    ))
}
