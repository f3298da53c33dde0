//! Entity service for products, built on the shared transport client.
//!
//! Transport failures pass through untouched; the default messages below are
//! used only when the server supplied none.

use contracts::domain::product::Product;

use crate::shared::http::{self, ServiceError};

const BASE_PATH: &str = "/api/productos";

pub async fn list() -> Result<Vec<Product>, ServiceError> {
    http::get_json(BASE_PATH).await
}

pub async fn create(payload: &Product) -> Result<Product, ServiceError> {
    http::post_json(BASE_PATH, payload, "Error al crear producto").await
}

pub async fn update(id: i64, payload: &Product) -> Result<Product, ServiceError> {
    http::put_json(
        &format!("{}/{}", BASE_PATH, id),
        payload,
        "Error al actualizar producto",
    )
    .await
}

pub async fn delete(id: i64) -> Result<bool, ServiceError> {
    http::delete(
        &format!("{}/{}", BASE_PATH, id),
        "Error al eliminar producto",
    )
    .await
}
