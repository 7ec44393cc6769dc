pub mod aggregate;

pub use aggregate::{Product, ProductDto, ProductPayload, ProductSearchDto, ProductSearchItem};
