//! Entity service for categories, built on the shared transport client.
//!
//! Transport failures pass through untouched; the default messages below are
//! used only when the server supplied none.

use contracts::domain::category::Category;

use crate::shared::http::{self, ServiceError};

const BASE_PATH: &str = "/api/categorias";

pub async fn list() -> Result<Vec<Category>, ServiceError> {
    http::get_json(BASE_PATH).await
}

pub async fn create(payload: &Category) -> Result<Category, ServiceError> {
    http::post_json(BASE_PATH, payload, "Error al crear categoría").await
}

pub async fn update(id: i64, payload: &Category) -> Result<Category, ServiceError> {
    http::put_json(
        &format!("{}/{}", BASE_PATH, id),
        payload,
        "Error al actualizar categoría",
    )
    .await
}

pub async fn delete(id: i64) -> Result<bool, ServiceError> {
    http::delete(
        &format!("{}/{}", BASE_PATH, id),
        "Error al eliminar categoría",
    )
    .await
}
