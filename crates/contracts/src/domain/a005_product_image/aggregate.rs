use serde::{Deserialize, Serialize};

/// Запрос фото товара (POST /produto/imagem)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImageRequest {
    #[serde(rename = "codigo")]
    pub product_code: String,
}

/// Image payload travels as a Base64 JPEG inside JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImageResponse {
    pub success: bool,
    #[serde(rename = "imagemBase64", default)]
    pub image_base64: Option<String>,
}

/// POST /produto/imagem/gravar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImageUploadRequest {
    #[serde(rename = "codigo")]
    pub product_code: String,
    #[serde(rename = "imagemBase64")]
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImageUploadResponse {
    pub success: bool,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}
