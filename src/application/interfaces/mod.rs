/// Zendure API interface
pub mod api;
