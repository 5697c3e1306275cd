//! HttpPickingGateway against an in-process fake backend

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use client::shared::api::{ApiError, HttpPickingGateway, PickingGateway};
use client::shared::config::{BackendConfig, TlsConfig};
use contracts::enums::Sector;
use contracts::usecases::u501_commit_separation::{CommitSeparationRequest, SeparationCommitItem};
use contracts::usecases::u502_commit_delivery::{CommitDeliveryRequest, DeliveryCommitItem};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Call {
    path: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct FakeBackend {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeBackend {
    fn reply(&self, path: &str, status: StatusCode, body: Value) {
        self.reply_raw(path, status, &body.to_string());
    }

    fn reply_raw(&self, path: &str, status: StatusCode, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("/api{}", path), (status, body.to_string()));
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

async fn handle(
    State(backend): State<FakeBackend>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    backend.calls.lock().unwrap().push(Call {
        path: uri.path().to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    backend
        .responses
        .lock()
        .unwrap()
        .get(uri.path())
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

fn backend_config(base_url: String) -> BackendConfig {
    BackendConfig {
        base_url,
        username: "u".to_string(),
        password: "p".to_string(),
        connect_timeout_secs: 5,
        read_timeout_secs: 5,
        write_timeout_secs: 5,
        tls: TlsConfig::default(),
    }
}

async fn start() -> (FakeBackend, HttpPickingGateway) {
    let backend = FakeBackend::default();
    let app = Router::new().fallback(handle).with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let gateway =
        HttpPickingGateway::new(&backend_config(format!("http://{}/api/", addr)), None).unwrap();
    (backend, gateway)
}

#[tokio::test]
async fn test_lookup_order_sends_basic_auth_and_maps_flags() {
    let (backend, gateway) = start().await;
    backend.reply(
        "/pedido/consultar",
        StatusCode::OK,
        json!({
            "success": true,
            "nomeCliente": "Cliente X ",
            "laser": "Sim",
            "chapa": "Não",
            "tubo": "sim"
        }),
    );

    let order = gateway.lookup_order("12345").await.unwrap();
    assert_eq!(order.number, "12345");
    assert_eq!(order.customer_name, "Cliente X");
    assert_eq!(order.available_sectors(), vec![Sector::Laser]);
    assert_eq!(order.sectors.len(), 14);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/api/pedido/consultar");
    // base64("u:p")
    assert_eq!(calls[0].authorization.as_deref(), Some("Basic dTpw"));
    assert_eq!(calls[0].body, json!({ "numeroPedido": "12345" }));
}

#[tokio::test]
async fn test_lookup_order_not_found() {
    let (backend, gateway) = start().await;
    backend.reply("/pedido/consultar", StatusCode::OK, json!({ "success": false }));

    let err = gateway.lookup_order("1").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("Pedido 1 não encontrado".to_string()));
}

#[tokio::test]
async fn test_separation_list_and_empty() {
    let (backend, gateway) = start().await;
    backend.reply(
        "/separacao/listar",
        StatusCode::OK,
        json!({
            "success": true,
            "itens": [
                { "codigo": "A", "saldo": 2.0, "unidade": "PC", "setor": "0004", "codigoLocal": "L1" },
                { "codigo": "B", "saldo": 0.0, "unidade": "KG", "setor": "0004" }
            ]
        }),
    );

    let items = gateway
        .list_for_separation("12345", "'0004'")
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_separable());
    assert!(!items[1].is_separable());
    assert!(items[1].location.is_blank());
    assert_eq!(
        backend.calls()[0].body,
        json!({ "numeroPedido": "12345", "setores": "'0004'" })
    );

    backend.reply(
        "/separacao/listar",
        StatusCode::OK,
        json!({ "success": true, "itens": [] }),
    );
    assert_eq!(
        gateway.list_for_separation("12345", "'0004'").await.unwrap_err(),
        ApiError::Empty
    );
}

#[tokio::test]
async fn test_delivery_list_failure_flag_is_empty() {
    let (backend, gateway) = start().await;
    backend.reply("/entrega/listar", StatusCode::OK, json!({ "success": false }));

    assert_eq!(
        gateway.list_for_delivery("9", "'0002'").await.unwrap_err(),
        ApiError::Empty
    );
}

#[tokio::test]
async fn test_http_error_is_comm_error() {
    let (backend, gateway) = start().await;
    backend.reply_raw("/usuario/validarSenha", StatusCode::INTERNAL_SERVER_ERROR, "boom");

    let err = gateway.validate_password("x").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Comm {
            status: 500,
            body: "boom".to_string()
        }
    );
    assert_eq!(err.user_message(), "Erro de comunicação com o servidor (HTTP 500)");
}

#[tokio::test]
async fn test_password_validation() {
    let (backend, gateway) = start().await;
    backend.reply(
        "/usuario/validarSenha",
        StatusCode::OK,
        json!({ "success": true, "nomeUsuario": "maria" }),
    );
    assert_eq!(gateway.validate_password("1234").await.unwrap(), "maria");
    assert_eq!(backend.calls()[0].body, json!({ "senha": "1234" }));

    backend.reply("/usuario/validarSenha", StatusCode::OK, json!({ "success": false }));
    assert!(matches!(
        gateway.validate_password("0000").await,
        Err(ApiError::NotFound(_))
    ));
}

fn separation_request() -> CommitSeparationRequest {
    CommitSeparationRequest {
        order_number: "12345".to_string(),
        items: vec![SeparationCommitItem {
            product_code: "A".to_string(),
            sector: "0004".to_string(),
            unit: "PC".to_string(),
        }],
        user_name: "maria".to_string(),
    }
}

#[tokio::test]
async fn test_commit_separation_reads_misspelled_flag() {
    let (backend, gateway) = start().await;
    backend.reply("/separacao/gravar", StatusCode::OK, json!({ "sucess": true }));

    gateway.commit_separation(&separation_request()).await.unwrap();
    let body = &backend.calls()[0].body;
    assert_eq!(body["numeroPedido"], "12345");
    assert_eq!(body["usuario"], "maria");
    assert_eq!(body["itens"][0]["codigo"], "A");
    assert_eq!(body["itens"][0]["setor"], "0004");
    assert_eq!(body["itens"][0]["unidade"], "PC");
}

#[tokio::test]
async fn test_commit_separation_correct_spelling_is_decode_error() {
    let (backend, gateway) = start().await;
    backend.reply("/separacao/gravar", StatusCode::OK, json!({ "success": true }));

    assert!(matches!(
        gateway.commit_separation(&separation_request()).await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_commit_separation_rejected() {
    let (backend, gateway) = start().await;
    backend.reply(
        "/separacao/gravar",
        StatusCode::OK,
        json!({ "sucess": false, "mensagem": "Saldo insuficiente" }),
    );

    assert_eq!(
        gateway.commit_separation(&separation_request()).await.unwrap_err(),
        ApiError::Failure("Saldo insuficiente".to_string())
    );
}

#[tokio::test]
async fn test_commit_delivery_does_not_call_backend() {
    let (backend, gateway) = start().await;
    let request = CommitDeliveryRequest {
        order_number: "12345".to_string(),
        items: vec![DeliveryCommitItem {
            product_code: "A".to_string(),
            sector: "0002".to_string(),
            quantity: 3.0,
        }],
        user_name: "maria".to_string(),
    };

    gateway.commit_delivery(&request).await.unwrap();
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_history_dates() {
    let (backend, gateway) = start().await;
    backend.reply(
        "/pedido/historico",
        StatusCode::OK,
        json!({
            "success": true,
            "dataVenda": "20250115",
            "dataInclusao": "00000000",
            "entregas": [
                { "ordemProducao": "OP-1", "produto": "A", "quantidade": 1.0,
                  "dataRetirada": "20250201", "colaborador": "joao", "setor": "Laser" }
            ]
        }),
    );

    let record = gateway.fetch_history("12345").await.unwrap();
    assert_eq!(record.order_number, "12345");
    assert_eq!(record.milestones[0].display_date(), "15/01/2025");
    assert!(!record.milestones[1].is_set());
    assert_eq!(record.deliveries[0].withdrawal_date_display(), "01/02/2025");
}

#[tokio::test]
async fn test_product_image_base64() {
    let (backend, gateway) = start().await;
    // FF D8 FF
    backend.reply(
        "/produto/imagem",
        StatusCode::OK,
        json!({ "success": true, "imagemBase64": "/9j/" }),
    );
    assert_eq!(
        gateway.fetch_product_image("A").await.unwrap(),
        Some(vec![0xFF, 0xD8, 0xFF])
    );

    backend.reply("/produto/imagem", StatusCode::OK, json!({ "success": true }));
    assert_eq!(gateway.fetch_product_image("A").await.unwrap(), None);

    backend.reply(
        "/produto/imagem",
        StatusCode::OK,
        json!({ "success": true, "imagemBase64": "***" }),
    );
    assert!(matches!(
        gateway.fetch_product_image("A").await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_product_image_upload() {
    let (backend, gateway) = start().await;
    backend.reply("/produto/imagem/gravar", StatusCode::OK, json!({ "success": true }));

    gateway
        .upload_product_image("A", &[0xFF, 0xD8, 0xFF])
        .await
        .unwrap();
    assert_eq!(
        backend.calls()[0].body,
        json!({ "codigo": "A", "imagemBase64": "/9j/" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let (backend, gateway) = start().await;
    backend.reply_raw("/pedido/consultar", StatusCode::OK, "<html>");

    let err = gateway.lookup_order("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message(), "Resposta inválida do servidor");
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway =
        HttpPickingGateway::new(&backend_config(format!("http://{}/api", addr)), None).unwrap();
    assert!(matches!(
        gateway.lookup_order("1").await,
        Err(ApiError::Connection(_))
    ));
}
