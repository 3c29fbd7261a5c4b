#![doc = include_str!("../README.md")]

mod b64url;
mod serde;

pub use b64url::{B64Url, NotB64UrlEncoded};
pub use serde::FromStrVisitor;
