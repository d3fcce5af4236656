pub mod filesystem;
pub mod http;
