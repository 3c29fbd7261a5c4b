//! One Gateway SDK Client

#[allow(clippy::module_inception)]
mod client;
#[allow(missing_docs)]
pub mod client_settings;
#[allow(missing_docs)]
pub mod internal;
pub use client::Client;
pub use client_settings::ClientSettings;
pub use internal::{ApiConfiguration, InternalClient};
