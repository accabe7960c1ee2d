//! Network boundary: one call, `POST {base_url}/generate`.

mod client;
mod error;

pub use client::{ArticleGenerator, GenerateRequest, GenerateResponse, HttpGenerator};
pub use error::GenerateError;
