use crate::shared::error::DraftError;
use crate::shared::form::non_empty;
use crate::shared::record::{deserialize_id, Record};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Товар
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub brand_id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub category_id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub subcategory_id: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Product {
    pub fn to_record(&self) -> Record {
        Record::from_serialize(self)
    }
}

/// Данные формы товара. Справочные поля хранят id, пустая строка - не выбрано.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub brand_id: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub sku: String,
    pub barcode: String,
    pub image_url: String,
    pub active: bool,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            brand_id: String::new(),
            category_id: String::new(),
            subcategory_id: String::new(),
            sku: String::new(),
            barcode: String::new(),
            image_url: String::new(),
            active: true,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            display_name: p.display_name.unwrap_or_default(),
            description: p.description.unwrap_or_default(),
            brand_id: p.brand_id,
            category_id: p.category_id,
            subcategory_id: p.subcategory_id,
            sku: p.sku.unwrap_or_default(),
            barcode: p.barcode.unwrap_or_default(),
            image_url: p.image_url.unwrap_or_default(),
            active: p.active,
        }
    }
}

impl ProductDto {
    /// Смена категории сбрасывает подкатегорию
    pub fn set_category(&mut self, category_id: String) {
        if self.category_id != category_id {
            self.subcategory_id.clear();
        }
        self.category_id = category_id;
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Required("Product name"));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        self.validate()?;
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            display_name: non_empty(&self.display_name),
            description: non_empty(&self.description),
            brand_id: non_empty(&self.brand_id),
            category_id: non_empty(&self.category_id),
            subcategory_id: non_empty(&self.subcategory_id),
            sku: non_empty(&self.sku),
            barcode: non_empty(&self.barcode),
            image_url: non_empty(&self.image_url),
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
}

/// Товар в ответе поиска бэкенда
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Кандидат для выпадающего списка поиска товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchItem {
    pub id: String,
    pub name: String,
    pub sku: Option<String>,
    pub barcode: Option<String>,
}

impl From<ProductSearchDto> for ProductSearchItem {
    fn from(dto: ProductSearchDto) -> Self {
        Self {
            id: dto.product_id,
            name: dto.product_name,
            sku: dto.sku,
            barcode: dto.barcode,
        }
    }
}

impl ProductSearchItem {
    pub fn to_record(&self) -> Record {
        Record::from_serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_dto_mapping() {
        let dto: ProductSearchDto = serde_json::from_str(
            r#"{"productId": 17, "productName": "SSD Kingston 500GB", "sku": "SSD-500"}"#,
        )
        .unwrap();
        let item = ProductSearchItem::from(dto);
        assert_eq!(item.id, "17");
        assert_eq!(item.name, "SSD Kingston 500GB");
        assert_eq!(item.sku.as_deref(), Some("SSD-500"));
        assert_eq!(item.barcode, None);
    }

    #[test]
    fn test_product_defaults_and_record() {
        let product: Product =
            serde_json::from_str(r#"{"id": "4", "name": "Monitor", "salePrice": 120.5}"#).unwrap();
        assert!(product.active);
        assert_eq!(product.stock, 0);
        let record = product.to_record();
        assert_eq!(record.id(), Some("4".to_string()));
        assert_eq!(record.text("salePrice"), Some("120.5".to_string()));
    }

    #[test]
    fn test_form_round_trip_from_entity() {
        let product: Product = serde_json::from_str(
            r#"{"id": 9, "name": "Filtro de aceite", "categoryId": 2, "subcategoryId": 5, "sku": "FA-9"}"#,
        )
        .unwrap();
        let mut dto = ProductDto::from(product);
        assert_eq!(dto.id.as_deref(), Some("9"));
        assert_eq!(dto.category_id, "2");
        assert_eq!(dto.subcategory_id, "5");

        dto.set_category("2".into());
        assert_eq!(dto.subcategory_id, "5");
        dto.set_category("3".into());
        assert_eq!(dto.subcategory_id, "");

        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.sku.as_deref(), Some("FA-9"));
        assert_eq!(payload.subcategory_id, None);
        assert_eq!(payload.brand_id, None);
    }

    #[test]
    fn test_name_is_required() {
        let dto = ProductDto {
            name: "   ".into(),
            ..ProductDto::default()
        };
        assert_eq!(dto.to_payload(), Err(DraftError::Required("Product name")));
    }
}
