pub mod skin_source;

pub use skin_source::{build_http_client, McHeadsSkinSource, SkinSource};
