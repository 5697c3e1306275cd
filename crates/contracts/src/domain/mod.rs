pub mod a001_order;
pub mod a002_separation_item;
pub mod a003_delivery_item;
pub mod a004_order_history;
pub mod a005_product_image;
