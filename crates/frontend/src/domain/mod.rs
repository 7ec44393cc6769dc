pub mod a001_product;
pub mod a002_supplier;
pub mod a003_customer;
pub mod a004_purchase;
pub mod a005_sale;
