use super::endpoints;
use super::error::ApiError;
use super::gateway::PickingGateway;
use crate::shared::config::BackendConfig;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use contracts::domain::a001_order::{Order, OrderLookupRequest, OrderLookupResponse};
use contracts::domain::a002_separation_item::{
    SeparationItem, SeparationListRequest, SeparationListResponse,
};
use contracts::domain::a003_delivery_item::{
    DeliveryItem, DeliveryListRequest, DeliveryListResponse,
};
use contracts::domain::a004_order_history::{HistoryRecord, HistoryRequest, HistoryResponse};
use contracts::domain::a005_product_image::{
    ProductImageRequest, ProductImageResponse, ProductImageUploadRequest,
    ProductImageUploadResponse,
};
use contracts::system::auth::{PasswordValidationRequest, PasswordValidationResponse};
use contracts::usecases::u501_commit_separation::{
    CommitSeparationRequest, CommitSeparationResponse,
};
use contracts::usecases::u502_commit_delivery::CommitDeliveryRequest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// HTTP-клиент сервера отбора заказов
///
/// One instance per process; it holds no per-request state.
pub struct HttpPickingGateway {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpPickingGateway {
    /// Build the client from `[backend]` settings.
    ///
    /// `ca_cert_path` points to the PEM of the internal CA; it is added as a
    /// trusted root. Certificate validation is only switched off when
    /// `tls.accept_invalid_certs` is set.
    pub fn new(config: &BackendConfig, ca_cert_path: Option<&Path>) -> anyhow::Result<Self> {
        let connect = Duration::from_secs(config.connect_timeout_secs);
        let read = Duration::from_secs(config.read_timeout_secs);
        // reqwest has no separate write timeout, it is covered by the total
        let total = connect + read + Duration::from_secs(config.write_timeout_secs);

        let mut builder = reqwest::Client::builder()
            .connect_timeout(connect)
            .read_timeout(read)
            .timeout(total);

        if let Some(path) = ca_cert_path {
            let pem = std::fs::read(path)
                .map_err(|e| anyhow::anyhow!("Cannot read CA certificate {}: {}", path.display(), e))?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| anyhow::anyhow!("Invalid CA certificate {}: {}", path.display(), e))?;
            tracing::info!("Trusting internal CA from {}", path.display());
            builder = builder.add_root_certificate(cert);
        }

        if config.tls.accept_invalid_certs {
            tracing::warn!(
                "TLS certificate validation is DISABLED for {} (backend.tls.accept_invalid_certs = true)",
                config.base_url
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and decode the JSON answer.
    /// No retries: the first failure is returned to the screen.
    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!("Picking API: POST {} (login='{}')", url, self.username);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error on {}: {}", url, e);
                ApiError::Connection(e.to_string())
            })?;

        let status = response.status();
        tracing::info!("Picking API response: {} for {}", status, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Picking API request failed: HTTP {} {}: {}", status, url, body);
            return Err(ApiError::Comm {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read body from {}: {}", url, e);
            ApiError::Connection(e.to_string())
        })?;

        let preview: String = body.chars().take(300).collect();
        tracing::debug!("Picking API response preview: {}", preview);

        serde_json::from_str::<Resp>(&body).map_err(|e| {
            tracing::error!("Failed to parse JSON from {}: {}. Body: {}", url, e, preview);
            ApiError::Decode(format!("{}: {}", path, e))
        })
    }
}

#[async_trait]
impl PickingGateway for HttpPickingGateway {
    async fn lookup_order(&self, order_number: &str) -> Result<Order, ApiError> {
        let request = OrderLookupRequest {
            order_number: order_number.to_string(),
        };
        let response: OrderLookupResponse = self.post(endpoints::ORDER_LOOKUP, &request).await?;

        Order::from_lookup(order_number, &response)
            .ok_or_else(|| ApiError::NotFound(format!("Pedido {} não encontrado", order_number)))
    }

    async fn list_for_separation(
        &self,
        order_number: &str,
        sectors: &str,
    ) -> Result<Vec<SeparationItem>, ApiError> {
        let request = SeparationListRequest {
            order_number: order_number.to_string(),
            sectors: sectors.to_string(),
        };
        let response: SeparationListResponse =
            self.post(endpoints::SEPARATION_LIST, &request).await?;

        if !response.success || response.items.is_empty() {
            return Err(ApiError::Empty);
        }
        tracing::info!(
            "Order {}: {} items for separation ({})",
            order_number,
            response.items.len(),
            sectors
        );
        Ok(response.items)
    }

    async fn list_for_delivery(
        &self,
        order_number: &str,
        sectors: &str,
    ) -> Result<Vec<DeliveryItem>, ApiError> {
        let request = DeliveryListRequest {
            order_number: order_number.to_string(),
            sectors: sectors.to_string(),
        };
        let response: DeliveryListResponse = self.post(endpoints::DELIVERY_LIST, &request).await?;

        if !response.success || response.items.is_empty() {
            return Err(ApiError::Empty);
        }
        tracing::info!(
            "Order {}: {} items for delivery ({})",
            order_number,
            response.items.len(),
            sectors
        );
        Ok(response.items)
    }

    async fn validate_password(&self, password: &str) -> Result<String, ApiError> {
        let request = PasswordValidationRequest {
            password: password.to_string(),
        };
        let response: PasswordValidationResponse =
            self.post(endpoints::PASSWORD_VALIDATION, &request).await?;

        if !response.success {
            return Err(ApiError::NotFound("Senha inválida".to_string()));
        }
        Ok(response.user_name)
    }

    async fn commit_separation(&self, request: &CommitSeparationRequest) -> Result<(), ApiError> {
        let response: CommitSeparationResponse =
            self.post(endpoints::SEPARATION_COMMIT, request).await?;

        if !response.success {
            let message = response.message.unwrap_or_default();
            tracing::error!(
                "Separation of order {} rejected: {}",
                request.order_number,
                message
            );
            return Err(ApiError::Failure(message));
        }
        tracing::info!(
            "Order {}: {} items separated by '{}'",
            request.order_number,
            request.items.len(),
            request.user_name
        );
        Ok(())
    }

    async fn commit_delivery(&self, request: &CommitDeliveryRequest) -> Result<(), ApiError> {
        // The backend has no confirmation step for deliveries yet, nothing is sent
        tracing::info!(
            "Delivery of {} items for order {} accepted locally ({} not called)",
            request.items.len(),
            request.order_number,
            endpoints::DELIVERY_COMMIT
        );
        Ok(())
    }

    async fn fetch_history(&self, order_number: &str) -> Result<HistoryRecord, ApiError> {
        let request = HistoryRequest {
            order_number: order_number.to_string(),
        };
        let response: HistoryResponse = self.post(endpoints::ORDER_HISTORY, &request).await?;

        if !response.success {
            return Err(ApiError::NotFound(format!(
                "Histórico do pedido {} não encontrado",
                order_number
            )));
        }
        Ok(HistoryRecord::from_response(order_number, response))
    }

    async fn fetch_product_image(&self, product_code: &str) -> Result<Option<Vec<u8>>, ApiError> {
        let request = ProductImageRequest {
            product_code: product_code.to_string(),
        };
        let response: ProductImageResponse = self.post(endpoints::PRODUCT_IMAGE, &request).await?;

        let encoded = match response.image_base64 {
            Some(encoded) if response.success && !encoded.trim().is_empty() => encoded,
            _ => return Ok(None),
        };

        let bytes = BASE64.decode(encoded.trim()).map_err(|e| {
            tracing::error!("Image of product {} is not valid Base64: {}", product_code, e);
            ApiError::Decode(format!("image {}: {}", product_code, e))
        })?;
        Ok(Some(bytes))
    }

    async fn upload_product_image(&self, product_code: &str, jpeg: &[u8]) -> Result<(), ApiError> {
        let request = ProductImageUploadRequest {
            product_code: product_code.to_string(),
            image_base64: BASE64.encode(jpeg),
        };
        let response: ProductImageUploadResponse =
            self.post(endpoints::PRODUCT_IMAGE_UPLOAD, &request).await?;

        if !response.success {
            return Err(ApiError::Failure(response.message.unwrap_or_default()));
        }
        tracing::info!("Uploaded image for product {} ({} bytes)", product_code, jpeg.len());
        Ok(())
    }
}
