//! HTTP adapter: parses `/mandel` queries into render configurations and
//! returns the encoded image.

pub mod handler;
pub mod query;
pub mod server;
