// marinax-api: Async Rust client for the Marine-Axis admin REST API

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use auth::{Credentials, PrincipalKind};
pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{Envelope, LoginData, Page, PrincipalRecord};
