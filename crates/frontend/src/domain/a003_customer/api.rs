use crate::shared::api_utils::{delete, get_data, post_json, put_json, search_data};
use contracts::domain::a003_customer::{Customer, CustomerPayload};
use contracts::shared::error::SearchError;

/// Fetch all customers
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    get_data("/customers")
        .await
        .map_err(|e| format!("Failed to fetch customers: {}", e))
}

pub async fn fetch_customer(id: &str) -> Result<Customer, String> {
    get_data(&format!("/customers/{}", id))
        .await
        .map_err(|e| format!("Failed to load customer: {}", e))
}

pub async fn create_customer(payload: &CustomerPayload) -> Result<(), String> {
    post_json("/customers", payload)
        .await
        .map_err(|e| format!("Failed to create customer: {}", e))
}

pub async fn update_customer(id: &str, payload: &CustomerPayload) -> Result<(), String> {
    put_json(&format!("/customers/{}", id), payload)
        .await
        .map_err(|e| format!("Failed to update customer: {}", e))
}

pub async fn search_customers(input: &str) -> Result<Vec<Customer>, SearchError> {
    search_data("/customers", input).await
}

pub async fn delete_customer(id: &str) -> Result<(), String> {
    delete(&format!("/customers/{}", id))
        .await
        .map_err(|e| format!("Failed to delete customer: {}", e))
}
