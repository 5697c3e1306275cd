pub mod aggregate;

pub use aggregate::{
    ProductImageRequest, ProductImageResponse, ProductImageUploadRequest,
    ProductImageUploadResponse,
};
