pub mod aggregate;

pub use aggregate::{
    Order, OrderLookupRequest, OrderLookupResponse, SectorAvailability, SectorFlags,
    SECTOR_APPLICABLE,
};
