use crate::domain::a001_product::Product;
use crate::domain::a004_purchase::today;
use crate::shared::error::DraftError;
use crate::shared::lookup::LookupItem;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub static SALE_DOCUMENT_TYPES: Lazy<Vec<LookupItem>> = Lazy::new(|| {
    vec![
        LookupItem::new("1", "Sale note"),
        LookupItem::new("2", "Receipt"),
        LookupItem::new("3", "Invoice"),
    ]
});

pub static PAYMENT_METHODS: Lazy<Vec<LookupItem>> = Lazy::new(|| {
    vec![
        LookupItem::new("1", "Cash"),
        LookupItem::new("2", "Yape"),
        LookupItem::new("3", "Plin"),
    ]
});

/// Минимальная длина запроса для локального поиска товаров
pub const LOCAL_SEARCH_MIN_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleHeader {
    pub document_type: String,
    pub sale_number: String,
    pub client_name: String,
    pub client_dni: String,
    pub client_phone: String,
    pub user_name: String,
    pub payment_method: String,
    /// Дата продажи (YYYY-MM-DD)
    pub sale_date: String,
}

impl Default for SaleHeader {
    fn default() -> Self {
        Self {
            document_type: "1".to_string(),
            sale_number: String::new(),
            client_name: String::new(),
            client_dni: String::new(),
            client_phone: String::new(),
            user_name: "ADMINISTRATOR".to_string(),
            payment_method: "1".to_string(),
            sale_date: today(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub product_id: String,
    pub name: String,
    pub stock: i64,
    pub purchase_price: f64,
    pub quantity: u32,
    pub sale_price: f64,
}

impl SaleLine {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            stock: product.stock,
            purchase_price: product.purchase_price,
            quantity: 1,
            sale_price: product.sale_price,
        }
    }

    /// Итог строки = количество × цена продажи
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.sale_price
    }
}

/// Черновик продажи
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleDraft {
    pub header: SaleHeader,
    pub lines: Vec<SaleLine>,
}

impl SaleDraft {
    /// Товар добавляется один раз, повтор отклоняется
    pub fn add_product(&mut self, product: &Product) -> Result<(), DraftError> {
        if self.lines.iter().any(|line| line.product_id == product.id) {
            return Err(DraftError::AlreadyAdded(product.name.clone()));
        }
        self.lines.push(SaleLine::new(product));
        Ok(())
    }

    /// Количество из текста ввода: нечисловой ввод даёт 1, значения < 1
    /// игнорируются. Возвращает `true`, если количество изменилось.
    pub fn set_quantity(&mut self, product_id: &str, raw: &str) -> bool {
        let parsed = raw.trim().parse::<i64>().unwrap_or(1);
        if parsed < 1 {
            return false;
        }
        let quantity = u32::try_from(parsed).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(SaleLine::total).sum()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.lines.is_empty() {
            return Err(DraftError::NoLines);
        }
        Ok(())
    }

    pub fn validate_client(&self) -> Result<(), DraftError> {
        if self.header.client_dni.trim().is_empty() || self.header.client_name.trim().is_empty() {
            return Err(DraftError::ClientIncomplete);
        }
        Ok(())
    }

    /// Сброс после успешной продажи: строки и клиент очищаются,
    /// тип документа, способ оплаты и дата сохраняются.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.header.sale_number.clear();
        self.header.client_name.clear();
        self.header.client_dni.clear();
        self.header.client_phone.clear();
    }
}

/// Локальный поиск товаров по названию (не меньше двух символов)
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() || query.chars().count() < LOCAL_SEARCH_MIN_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Итог в формате `0.00`
pub fn format_total(value: f64) -> String {
    format!("{:.2}", value)
}
