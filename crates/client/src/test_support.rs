//! In-memory gateway and fixtures for screen tests

use crate::shared::api::{ApiError, PickingGateway};
use async_trait::async_trait;
use contracts::domain::a001_order::{Order, SectorFlags};
use contracts::domain::a002_separation_item::{ItemLocation, SeparationItem};
use contracts::domain::a003_delivery_item::DeliveryItem;
use contracts::domain::a004_order_history::HistoryRecord;
use contracts::enums::Sector;
use contracts::usecases::u501_commit_separation::CommitSeparationRequest;
use contracts::usecases::u502_commit_delivery::CommitDeliveryRequest;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted answers; list responses are consumed in order, the last one
/// repeats when the queue runs dry
pub struct FakeGateway {
    pub order: Mutex<Result<Order, ApiError>>,
    pub separation: Mutex<VecDeque<Result<Vec<SeparationItem>, ApiError>>>,
    pub delivery: Mutex<VecDeque<Result<Vec<DeliveryItem>, ApiError>>>,
    pub password: Mutex<Result<String, ApiError>>,
    pub separation_commit: Mutex<Result<(), ApiError>>,
    pub history: Mutex<Result<HistoryRecord, ApiError>>,
    pub image: Mutex<Result<Option<Vec<u8>>, ApiError>>,

    pub lookups: Mutex<Vec<String>>,
    pub separation_lists: Mutex<Vec<(String, String)>>,
    pub separation_commits: Mutex<Vec<CommitSeparationRequest>>,
    pub delivery_commits: Mutex<Vec<CommitDeliveryRequest>>,
    pub uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            order: Mutex::new(Err(ApiError::NotFound("Pedido não encontrado".into()))),
            separation: Mutex::new(VecDeque::new()),
            delivery: Mutex::new(VecDeque::new()),
            password: Mutex::new(Err(ApiError::NotFound("Senha inválida".into()))),
            separation_commit: Mutex::new(Ok(())),
            history: Mutex::new(Err(ApiError::Connection("offline".into()))),
            image: Mutex::new(Ok(None)),
            lookups: Mutex::new(Vec::new()),
            separation_lists: Mutex::new(Vec::new()),
            separation_commits: Mutex::new(Vec::new()),
            delivery_commits: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
        }
    }
}

impl FakeGateway {
    pub fn with_order(self, order: Order) -> Self {
        *self.order.lock().unwrap() = Ok(order);
        self
    }

    pub fn with_password(self, user_name: &str) -> Self {
        *self.password.lock().unwrap() = Ok(user_name.to_string());
        self
    }

    pub fn push_separation(&self, result: Result<Vec<SeparationItem>, ApiError>) {
        self.separation.lock().unwrap().push_back(result);
    }

    pub fn push_delivery(&self, result: Result<Vec<DeliveryItem>, ApiError>) {
        self.delivery.lock().unwrap().push_back(result);
    }
}

fn next<T: Clone>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    let mut queue = queue.lock().unwrap();
    if queue.len() > 1 {
        queue.pop_front().unwrap()
    } else {
        queue.front().cloned().unwrap_or(Err(ApiError::Empty))
    }
}

#[async_trait]
impl PickingGateway for FakeGateway {
    async fn lookup_order(&self, order_number: &str) -> Result<Order, ApiError> {
        self.lookups.lock().unwrap().push(order_number.to_string());
        self.order.lock().unwrap().clone()
    }

    async fn list_for_separation(
        &self,
        order_number: &str,
        sectors: &str,
    ) -> Result<Vec<SeparationItem>, ApiError> {
        self.separation_lists
            .lock()
            .unwrap()
            .push((order_number.to_string(), sectors.to_string()));
        next(&self.separation)
    }

    async fn list_for_delivery(
        &self,
        _order_number: &str,
        _sectors: &str,
    ) -> Result<Vec<DeliveryItem>, ApiError> {
        next(&self.delivery)
    }

    async fn validate_password(&self, _password: &str) -> Result<String, ApiError> {
        self.password.lock().unwrap().clone()
    }

    async fn commit_separation(&self, request: &CommitSeparationRequest) -> Result<(), ApiError> {
        self.separation_commits.lock().unwrap().push(request.clone());
        self.separation_commit.lock().unwrap().clone()
    }

    async fn commit_delivery(&self, request: &CommitDeliveryRequest) -> Result<(), ApiError> {
        self.delivery_commits.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn fetch_history(&self, _order_number: &str) -> Result<HistoryRecord, ApiError> {
        self.history.lock().unwrap().clone()
    }

    async fn fetch_product_image(&self, _product_code: &str) -> Result<Option<Vec<u8>>, ApiError> {
        self.image.lock().unwrap().clone()
    }

    async fn upload_product_image(&self, product_code: &str, jpeg: &[u8]) -> Result<(), ApiError> {
        self.uploads
            .lock()
            .unwrap()
            .push((product_code.to_string(), jpeg.to_vec()));
        Ok(())
    }
}

pub fn order(number: &str, customer: &str, applicable: &[Sector]) -> Order {
    Order {
        number: number.to_string(),
        customer_name: customer.to_string(),
        sectors: SectorFlags::from_applicable(applicable).availability(),
    }
}

pub fn separation_item(code: &str, balance: f64, location: &str) -> SeparationItem {
    SeparationItem {
        product_code: code.to_string(),
        description: format!("Produto {}", code),
        quantity: 10.0,
        balance,
        quantity_to_separate: balance,
        unit: "PC".to_string(),
        secondary_unit_quantity: 0.0,
        sector: "0004".to_string(),
        location: ItemLocation {
            code: location.to_string(),
            ..ItemLocation::default()
        },
        separated_by: None,
        separated_at: None,
        pending_shortage: false,
    }
}

pub fn delivery_item(code: &str, balance: f64, location: &str) -> DeliveryItem {
    DeliveryItem {
        product_code: code.to_string(),
        description: format!("Produto {}", code),
        quantity: 10.0,
        separated_quantity: 10.0,
        balance_to_deliver: balance,
        unit: "PC".to_string(),
        sector: "0002".to_string(),
        origin: "Tubo".to_string(),
        location_code: location.to_string(),
    }
}
