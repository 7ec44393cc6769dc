use crate::domain::a001_product::ProductSearchItem;
use crate::shared::error::DraftError;
use crate::shared::lookup::LookupItem;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Типы документов покупки
pub static PURCHASE_DOCUMENT_TYPES: Lazy<Vec<LookupItem>> = Lazy::new(|| {
    vec![
        LookupItem::new("1", "Invoice"),
        LookupItem::new("2", "Receipt"),
        LookupItem::new("3", "Ticket"),
    ]
});

/// Текущая дата в формате YYYY-MM-DD
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Шапка документа покупки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseHeader {
    pub purchase_number: String,
    pub supplier_id: String,
    /// Дата документа (YYYY-MM-DD)
    pub date: String,
    pub document_type_id: String,
    pub document_number: String,
}

impl Default for PurchaseHeader {
    fn default() -> Self {
        Self {
            purchase_number: String::new(),
            supplier_id: String::new(),
            date: today(),
            document_type_id: String::new(),
            document_number: String::new(),
        }
    }
}

/// Редактируемые числовые поля строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseLineField {
    Quantity,
    PurchasePrice,
    SalePrice,
}

/// Строка табличной части «Товары»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    /// Ключ строки для UI; один товар может встречаться несколько раз
    #[serde(skip)]
    pub line_id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub sale_price: f64,
}

impl PurchaseLine {
    pub fn new(product: &ProductSearchItem) -> Self {
        Self {
            line_id: uuid::Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity: 1.0,
            purchase_price: 0.0,
            sale_price: 0.0,
        }
    }

    /// Сумма строки = количество × цена закупки
    pub fn amount(&self) -> f64 {
        self.quantity * self.purchase_price
    }
}

/// Черновик покупки, который заполняет форма
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDraft {
    pub header: PurchaseHeader,
    pub lines: Vec<PurchaseLine>,
}

impl PurchaseDraft {
    pub fn add_product(&mut self, product: &ProductSearchItem) {
        self.lines.push(PurchaseLine::new(product));
    }

    /// Обновляет поле строки из текста ввода; нечисловой ввод даёт 0
    pub fn update_line(
        &mut self,
        index: usize,
        field: PurchaseLineField,
        raw: &str,
    ) -> Result<(), DraftError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(DraftError::NoSuchLine(index))?;
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        match field {
            PurchaseLineField::Quantity => line.quantity = value,
            PurchaseLineField::PurchasePrice => line.purchase_price = value,
            PurchaseLineField::SalePrice => line.sale_price = value,
        }
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<PurchaseLine, DraftError> {
        if index >= self.lines.len() {
            return Err(DraftError::NoSuchLine(index));
        }
        Ok(self.lines.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(PurchaseLine::amount).sum()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.lines.is_empty() {
            return Err(DraftError::NoLines);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Тело запроса на создание покупки
    pub fn to_create_dto(&self) -> Result<CreatePurchaseDto, DraftError> {
        self.validate()?;
        Ok(CreatePurchaseDto {
            header: self.header.clone(),
            items: self.lines.clone(),
            total: self.total(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseDto {
    #[serde(flatten)]
    pub header: PurchaseHeader,
    pub items: Vec<PurchaseLine>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> ProductSearchItem {
        ProductSearchItem {
            id: id.to_string(),
            name: name.to_string(),
            sku: None,
            barcode: None,
        }
    }

    #[test]
    fn test_amounts_and_total() {
        let mut draft = PurchaseDraft::default();
        draft.add_product(&product("1", "Laptop Dell XPS"));
        draft.add_product(&product("2", "Mouse Logitech G502"));

        draft.update_line(0, PurchaseLineField::Quantity, "2").unwrap();
        draft.update_line(0, PurchaseLineField::PurchasePrice, "1500.50").unwrap();
        draft.update_line(1, PurchaseLineField::Quantity, "3").unwrap();
        draft.update_line(1, PurchaseLineField::PurchasePrice, "40").unwrap();
        draft.update_line(1, PurchaseLineField::SalePrice, "65").unwrap();

        assert_eq!(draft.lines[0].amount(), 3001.0);
        assert_eq!(draft.lines[1].amount(), 120.0);
        assert_eq!(draft.total(), 3121.0);
        // цена продажи на сумму не влияет
        assert_eq!(draft.lines[1].sale_price, 65.0);
    }

    #[test]
    fn test_invalid_input_becomes_zero() {
        let mut draft = PurchaseDraft::default();
        draft.add_product(&product("1", "Laptop"));
        draft.update_line(0, PurchaseLineField::Quantity, "abc").unwrap();
        assert_eq!(draft.lines[0].quantity, 0.0);
        assert_eq!(
            draft.update_line(5, PurchaseLineField::Quantity, "1"),
            Err(DraftError::NoSuchLine(5))
        );
    }

    #[test]
    fn test_same_product_can_be_added_twice() {
        let mut draft = PurchaseDraft::default();
        draft.add_product(&product("1", "Laptop"));
        draft.add_product(&product("1", "Laptop"));
        assert_eq!(draft.lines.len(), 2);
        assert_ne!(draft.lines[0].line_id, draft.lines[1].line_id);

        let removed = draft.remove_line(0).unwrap();
        assert_eq!(removed.product_id, "1");
        assert_eq!(draft.lines.len(), 1);
    }

    #[test]
    fn test_validate_and_reset() {
        let mut draft = PurchaseDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::NoLines));
        assert!(draft.to_create_dto().is_err());

        draft.header.purchase_number = "C-001".into();
        draft.add_product(&product("1", "Laptop"));
        let dto = draft.to_create_dto().unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["purchaseNumber"], "C-001");
        assert_eq!(json["items"][0]["productId"], "1");
        assert!(json["items"][0].get("lineId").is_none());

        draft.reset();
        assert!(draft.lines.is_empty());
        assert_eq!(draft.header.purchase_number, "");
        assert_eq!(draft.header.date.len(), 10);
    }
}
