pub mod server;
pub mod totem_service;
