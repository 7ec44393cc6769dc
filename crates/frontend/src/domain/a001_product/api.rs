use crate::shared::api_utils::{delete, get_data, post_json, put_json, search_data};
use contracts::domain::a001_product::{Product, ProductPayload, ProductSearchDto, ProductSearchItem};
use contracts::shared::error::SearchError;
use contracts::shared::lookup::LookupItem;

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_data("/products")
        .await
        .map_err(|e| format!("Failed to fetch products: {}", e))
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    get_data(&format!("/products/{}", id))
        .await
        .map_err(|e| format!("Failed to load product: {}", e))
}

pub async fn create_product(payload: &ProductPayload) -> Result<(), String> {
    post_json("/products", payload)
        .await
        .map_err(|e| format!("Failed to create product: {}", e))
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<(), String> {
    put_json(&format!("/products/{}", id), payload)
        .await
        .map_err(|e| format!("Failed to update product: {}", e))
}

/// Поиск товаров для покупки (`productId/productName` -> `id/name`)
pub async fn search_products(input: &str) -> Result<Vec<ProductSearchItem>, SearchError> {
    let found: Vec<ProductSearchDto> = search_data("/products", input).await?;
    Ok(found.into_iter().map(ProductSearchItem::from).collect())
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    delete(&format!("/products/{}", id))
        .await
        .map_err(|e| format!("Failed to delete product: {}", e))
}

// Справочники формы товара

pub async fn fetch_brands() -> Result<Vec<LookupItem>, SearchError> {
    get_data("/brands").await
}

pub async fn fetch_categories() -> Result<Vec<LookupItem>, SearchError> {
    get_data("/categories").await
}

pub async fn fetch_subcategories(category_id: &str) -> Result<Vec<LookupItem>, SearchError> {
    get_data(&format!("/categories/{}/subcategories", category_id)).await
}
