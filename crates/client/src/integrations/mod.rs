pub mod camera;
pub mod shortage_notifier;
pub mod voice_search;
