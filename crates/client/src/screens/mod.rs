pub mod flow;
pub mod main_screen;
pub mod order_history;
pub mod register_delivery;
pub mod sector_selection;
pub mod selection;
pub mod separation_material;
pub mod ticket;

pub use flow::{FlowEvent, FlowSnapshot, OrderContext, Screen, ScreenFlow, StatusAction};
pub use selection::{ItemList, LocationFilter, LocationKey};
