//! Screen flow of the application.
//!
//! ```text
//! Splash -> Main -> SectorSelection -> StatusSeparation -> SeparationMaterial
//!                                                       -> RegisterDelivery
//!                                                       -> OrderHistory
//! ```
//!
//! Back from a child returns to StatusSeparation (Main when no sectors are
//! loaded); back from SectorSelection or StatusSeparation returns to Main and
//! drops the order context.

use contracts::domain::a001_order::{Order, SectorAvailability};
use contracts::enums::Sector;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Context carried from sector selection into the order screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderContext {
    pub order_number: String,
    pub customer_name: String,
    pub sectors: Vec<Sector>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Main,
    SectorSelection {
        order_number: String,
        customer_name: String,
        /// Derived from the lookup; not kept in snapshots
        available_sectors: Vec<SectorAvailability>,
    },
    StatusSeparation(OrderContext),
    SeparationMaterial(OrderContext),
    RegisterDelivery(OrderContext),
    OrderHistory(OrderContext),
}

impl Screen {
    pub fn tag(&self) -> ScreenTag {
        match self {
            Screen::Splash => ScreenTag::Splash,
            Screen::Main => ScreenTag::Main,
            Screen::SectorSelection { .. } => ScreenTag::SectorSelection,
            Screen::StatusSeparation(_) => ScreenTag::StatusSeparation,
            Screen::SeparationMaterial(_) => ScreenTag::SeparationMaterial,
            Screen::RegisterDelivery(_) => ScreenTag::RegisterDelivery,
            Screen::OrderHistory(_) => ScreenTag::OrderHistory,
        }
    }

    pub fn order_context(&self) -> Option<&OrderContext> {
        match self {
            Screen::StatusSeparation(ctx)
            | Screen::SeparationMaterial(ctx)
            | Screen::RegisterDelivery(ctx)
            | Screen::OrderHistory(ctx) => Some(ctx),
            _ => None,
        }
    }
}

/// Actions offered on the order status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    SeparateMaterial,
    RegisterDelivery,
    OrderHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    SplashElapsed,
    OrderFound(Order),
    SectorsConfirmed(Vec<Sector>),
    Open(StatusAction),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Event {event} is not valid on screen {screen:?}")]
    InvalidTransition {
        screen: ScreenTag,
        event: &'static str,
    },

    #[error("At least one sector must be selected")]
    NoSectorSelected,

    #[error("Sector {0} is not available for this order")]
    SectorUnavailable(Sector),

    #[error("Order {got} does not match the order on screen ({expected})")]
    OrderMismatch { expected: String, got: String },
}

impl FlowEvent {
    fn name(&self) -> &'static str {
        match self {
            FlowEvent::SplashElapsed => "SplashElapsed",
            FlowEvent::OrderFound(_) => "OrderFound",
            FlowEvent::SectorsConfirmed(_) => "SectorsConfirmed",
            FlowEvent::Open(_) => "Open",
            FlowEvent::Back => "Back",
        }
    }
}

/// Машина состояний экранов
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    screen: Screen,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Splash,
        }
    }

    pub fn current(&self) -> &Screen {
        &self.screen
    }

    pub fn handle(&mut self, event: FlowEvent) -> Result<&Screen, FlowError> {
        let from = self.screen.tag();
        let invalid = FlowError::InvalidTransition {
            screen: from,
            event: event.name(),
        };

        let next = match (&self.screen, event) {
            (Screen::Splash, FlowEvent::SplashElapsed) => Screen::Main,

            (Screen::Main, FlowEvent::OrderFound(order)) => Screen::SectorSelection {
                order_number: order.number,
                customer_name: order.customer_name,
                available_sectors: order.sectors,
            },

            (
                Screen::SectorSelection {
                    order_number,
                    customer_name,
                    available_sectors,
                },
                FlowEvent::SectorsConfirmed(sectors),
            ) => {
                if sectors.is_empty() {
                    return Err(FlowError::NoSectorSelected);
                }
                // Availability is unknown right after a restore; the sector
                // screen only offers flagged sectors anyway
                if !available_sectors.is_empty() {
                    if let Some(unavailable) = sectors.iter().find(|s| {
                        !available_sectors
                            .iter()
                            .any(|a| a.sector == **s && a.available)
                    }) {
                        return Err(FlowError::SectorUnavailable(*unavailable));
                    }
                }
                Screen::StatusSeparation(OrderContext {
                    order_number: order_number.clone(),
                    customer_name: customer_name.clone(),
                    sectors,
                })
            }

            (Screen::SectorSelection { .. }, FlowEvent::Back) => Screen::Main,
            (Screen::StatusSeparation(_), FlowEvent::Back) => Screen::Main,

            (Screen::StatusSeparation(ctx), FlowEvent::Open(action)) => {
                let ctx = ctx.clone();
                match action {
                    StatusAction::SeparateMaterial => Screen::SeparationMaterial(ctx),
                    StatusAction::RegisterDelivery => Screen::RegisterDelivery(ctx),
                    StatusAction::OrderHistory => Screen::OrderHistory(ctx),
                }
            }

            (
                Screen::SeparationMaterial(ctx)
                | Screen::RegisterDelivery(ctx)
                | Screen::OrderHistory(ctx),
                FlowEvent::Back,
            ) => {
                if ctx.sectors.is_empty() {
                    Screen::Main
                } else {
                    Screen::StatusSeparation(ctx.clone())
                }
            }

            _ => return Err(invalid),
        };

        tracing::debug!("Screen flow: {:?} -> {:?}", from, next.tag());
        self.screen = next;
        Ok(&self.screen)
    }

    /// Wait out the splash delay and move to the main screen
    pub async fn run_splash(&mut self, delay: Duration) -> Result<&Screen, FlowError> {
        tokio::time::sleep(delay).await;
        self.handle(FlowEvent::SplashElapsed)
    }

    /// Sector selection restored from a snapshot has no availability data
    pub fn needs_sector_refresh(&self) -> bool {
        matches!(
            &self.screen,
            Screen::SectorSelection { available_sectors, .. } if available_sectors.is_empty()
        )
    }

    /// Fill sector availability again after a restore, from a new lookup
    pub fn refresh_sectors(&mut self, order: Order) -> Result<(), FlowError> {
        match &mut self.screen {
            Screen::SectorSelection {
                order_number,
                customer_name,
                available_sectors,
            } => {
                if *order_number != order.number {
                    return Err(FlowError::OrderMismatch {
                        expected: order_number.clone(),
                        got: order.number,
                    });
                }
                *customer_name = order.customer_name;
                *available_sectors = order.sectors;
                Ok(())
            }
            other => Err(FlowError::InvalidTransition {
                screen: other.tag(),
                event: "RefreshSectors",
            }),
        }
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let mut snapshot = FlowSnapshot {
            screen: self.screen.tag(),
            order_number: String::new(),
            customer_name: String::new(),
            sector_codes: Vec::new(),
        };
        match &self.screen {
            Screen::SectorSelection {
                order_number,
                customer_name,
                ..
            } => {
                snapshot.order_number = order_number.clone();
                snapshot.customer_name = customer_name.clone();
            }
            other => {
                if let Some(ctx) = other.order_context() {
                    snapshot.order_number = ctx.order_number.clone();
                    snapshot.customer_name = ctx.customer_name.clone();
                    snapshot.sector_codes =
                        ctx.sectors.iter().map(|s| s.code().to_string()).collect();
                }
            }
        }
        snapshot
    }

    /// Rebuild the flow from a snapshot. Screens that need an order fall
    /// back to Main when the snapshot has none.
    pub fn restore(snapshot: FlowSnapshot) -> Self {
        let has_order = !snapshot.order_number.trim().is_empty();
        let context = || OrderContext {
            order_number: snapshot.order_number.clone(),
            customer_name: snapshot.customer_name.clone(),
            sectors: snapshot
                .sector_codes
                .iter()
                .filter_map(|code| Sector::from_code(code))
                .collect(),
        };

        let screen = match snapshot.screen {
            ScreenTag::Splash => Screen::Splash,
            ScreenTag::Main => Screen::Main,
            _ if !has_order => Screen::Main,
            ScreenTag::SectorSelection => Screen::SectorSelection {
                order_number: snapshot.order_number.clone(),
                customer_name: snapshot.customer_name.clone(),
                available_sectors: Vec::new(),
            },
            ScreenTag::StatusSeparation => Screen::StatusSeparation(context()),
            ScreenTag::SeparationMaterial => Screen::SeparationMaterial(context()),
            ScreenTag::RegisterDelivery => Screen::RegisterDelivery(context()),
            ScreenTag::OrderHistory => Screen::OrderHistory(context()),
        };

        tracing::info!("Screen flow restored at {:?}", screen.tag());
        Self { screen }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenTag {
    Splash,
    Main,
    SectorSelection,
    StatusSeparation,
    SeparationMaterial,
    RegisterDelivery,
    OrderHistory,
}

/// What survives a device rotation: the screen and primitive context only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub screen: ScreenTag,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub sector_codes: Vec<String>,
}
