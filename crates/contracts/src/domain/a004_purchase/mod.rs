pub mod aggregate;

pub use aggregate::{
    today, CreatePurchaseDto, PurchaseDraft, PurchaseHeader, PurchaseLine, PurchaseLineField,
    PURCHASE_DOCUMENT_TYPES,
};
