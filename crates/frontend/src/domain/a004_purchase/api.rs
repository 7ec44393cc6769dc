use crate::shared::api_utils::post_json;
use contracts::domain::a004_purchase::CreatePurchaseDto;

/// Create new purchase
pub async fn create_purchase(dto: &CreatePurchaseDto) -> Result<(), String> {
    post_json("/purchases", dto)
        .await
        .map_err(|e| format!("Failed to create purchase: {}", e))
}
