pub mod sector;

pub use sector::{code_for, format_sectors, Sector, UNKNOWN_SECTOR_CODE};
