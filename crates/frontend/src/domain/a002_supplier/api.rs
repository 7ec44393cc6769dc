use crate::shared::api_utils::{delete, get_data, post_json, put_json, search_data};
use contracts::domain::a002_supplier::{Supplier, SupplierPayload};
use contracts::shared::error::SearchError;

/// Fetch all suppliers
pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    get_data("/suppliers")
        .await
        .map_err(|e| format!("Failed to fetch suppliers: {}", e))
}

pub async fn fetch_supplier(id: &str) -> Result<Supplier, String> {
    get_data(&format!("/suppliers/{}", id))
        .await
        .map_err(|e| format!("Failed to load supplier: {}", e))
}

pub async fn create_supplier(payload: &SupplierPayload) -> Result<(), String> {
    post_json("/suppliers", payload)
        .await
        .map_err(|e| format!("Failed to create supplier: {}", e))
}

pub async fn update_supplier(id: &str, payload: &SupplierPayload) -> Result<(), String> {
    put_json(&format!("/suppliers/{}", id), payload)
        .await
        .map_err(|e| format!("Failed to update supplier: {}", e))
}

pub async fn search_suppliers(input: &str) -> Result<Vec<Supplier>, SearchError> {
    search_data("/suppliers", input).await
}

pub async fn delete_supplier(id: &str) -> Result<(), String> {
    delete(&format!("/suppliers/{}", id))
        .await
        .map_err(|e| format!("Failed to delete supplier: {}", e))
}
