//! Typed client for the League of Legends web APIs.
//!
//! [`api::LolApiClient`] wraps the authenticated REST endpoints, [`ddragon::DataDragonClient`]
//! the versioned static asset CDN and [`static_data::StaticDataClient`] the cached reference
//! documents. All three share the request executor in [`api::client`] and talk through an
//! injectable [`api::HttpTransport`].

pub mod api;
pub mod cache;
pub mod ddragon;
pub mod static_data;
pub mod types;

pub use api::{ApiClientBase, HttpTransport, LolApiClient, ReqwestTransport};
pub use ddragon::DataDragonClient;
pub use static_data::StaticDataClient;
pub use types::{RiotApiError, RiotApiResponse};
