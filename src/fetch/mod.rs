pub mod http;
pub mod payload;
pub mod source;

pub use http::HttpSource;
pub use payload::format_payload;
pub use source::{FetchError, JsonSource};
