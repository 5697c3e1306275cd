use crate::shared::api::{ApiError, PickingGateway};
use crate::shared::image_store::{ImageStoreError, LocalImageStore};
use std::path::PathBuf;
use thiserror::Error;

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Captured image is empty")]
    Empty,
    #[error("Captured image is not a JPEG")]
    NotJpeg,
}

/// Photo of a product taken with the device camera
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub product_code: String,
    jpeg: Vec<u8>,
}

impl CapturedPhoto {
    pub fn new(product_code: &str, jpeg: Vec<u8>) -> Result<Self, CameraError> {
        if jpeg.is_empty() {
            return Err(CameraError::Empty);
        }
        if !jpeg.starts_with(&JPEG_MAGIC) {
            return Err(CameraError::NotJpeg);
        }
        Ok(Self {
            product_code: product_code.to_string(),
            jpeg,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.jpeg
    }

    /// Keep the photo in the device image cache, replacing any previous one
    pub async fn store_locally(&self, store: &LocalImageStore) -> Result<PathBuf, ImageStoreError> {
        store.save(&self.product_code, &self.jpeg).await
    }

    /// Send the photo to the server as the product's image
    pub async fn upload(&self, gateway: &dyn PickingGateway) -> Result<(), ApiError> {
        gateway
            .upload_product_image(&self.product_code, &self.jpeg)
            .await
    }
}
