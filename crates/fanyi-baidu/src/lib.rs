//! # fanyi-baidu
//!
//! Baidu general translation API integration: request signing, the wire
//! format, an HTTP transport, and the detect-then-translate flow.

pub mod http;
pub mod sign;
pub mod translator;
pub mod wire;

pub use http::HttpTransport;
pub use translator::BaiduTranslator;
