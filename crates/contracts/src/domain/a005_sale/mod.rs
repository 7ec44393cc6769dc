pub mod aggregate;

pub use aggregate::{
    format_total, search_products, SaleDraft, SaleHeader, SaleLine, LOCAL_SEARCH_MIN_LEN,
    PAYMENT_METHODS, SALE_DOCUMENT_TYPES,
};
