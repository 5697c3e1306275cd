//! Missing-material report sent by e-mail to the warehouse office.
//!
//! The message is composed here; delivery goes through [`ShortageNotifier`],
//! implemented by whatever mail facility the device offers.

use crate::shared::config::NotificationsConfig;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use contracts::domain::a002_separation_item::SeparationItem;
use contracts::enums::Sector;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("No recipients configured for shortage reports")]
    NoRecipients,

    #[error("No items to report")]
    NothingToReport,

    #[error("Failed to send report: {0}")]
    Delivery(String),
}

impl NotifyError {
    pub fn user_message(&self) -> String {
        match self {
            NotifyError::NoRecipients => "Nenhum destinatário configurado".to_string(),
            NotifyError::NothingToReport => "Selecione os itens em falta".to_string(),
            NotifyError::Delivery(_) => "Não foi possível enviar o e-mail".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortageLine {
    pub product_code: String,
    pub description: String,
    pub missing_quantity: f64,
    pub unit: String,
    pub location: String,
}

impl ShortageLine {
    pub fn from_item(item: &SeparationItem) -> Self {
        Self {
            product_code: item.product_code.clone(),
            description: item.description.clone(),
            missing_quantity: item.balance,
            unit: item.unit.clone(),
            location: item.location.summary(),
        }
    }
}

/// Отчёт о нехватке материала
#[derive(Debug, Clone)]
pub struct ShortageReport {
    pub order_number: String,
    pub customer_name: String,
    pub sectors: Vec<Sector>,
    pub reporter: String,
    pub lines: Vec<ShortageLine>,
    pub reported_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortageMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl ShortageReport {
    pub fn compose(&self, config: &NotificationsConfig) -> Result<ShortageMessage, NotifyError> {
        let to: Vec<String> = config
            .recipients
            .iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if to.is_empty() {
            return Err(NotifyError::NoRecipients);
        }
        if self.lines.is_empty() {
            return Err(NotifyError::NothingToReport);
        }

        let subject = format!(
            "Falta de material - Pedido {} - {}",
            self.order_number, self.customer_name
        );

        let sectors = self
            .sectors
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        let mut body = String::new();
        body.push_str(&format!("Pedido: {}\n", self.order_number));
        body.push_str(&format!("Cliente: {}\n", self.customer_name));
        body.push_str(&format!("Setores: {}\n", sectors));
        body.push_str(&format!("Informado por: {}\n", self.reporter));
        body.push_str(&format!(
            "Data: {}\n\n",
            self.reported_at.format("%d/%m/%Y %H:%M")
        ));
        body.push_str("Itens em falta:\n");
        for line in &self.lines {
            body.push_str(&format!(
                "- {} {} | falta {} {}",
                line.product_code, line.description, line.missing_quantity, line.unit
            ));
            if !line.location.is_empty() {
                body.push_str(&format!(" | local {}", line.location));
            }
            body.push('\n');
        }

        Ok(ShortageMessage {
            from: config.sender.clone(),
            to,
            subject,
            body,
        })
    }
}

#[async_trait]
pub trait ShortageNotifier: Send + Sync {
    async fn send(&self, message: &ShortageMessage) -> Result<(), NotifyError>;
}

/// Records the report in the application log only
pub struct TracingShortageNotifier;

#[async_trait]
impl ShortageNotifier for TracingShortageNotifier {
    async fn send(&self, message: &ShortageMessage) -> Result<(), NotifyError> {
        tracing::info!(
            "Shortage report to {:?}: {}\n{}",
            message.to,
            message.subject,
            message.body
        );
        Ok(())
    }
}
