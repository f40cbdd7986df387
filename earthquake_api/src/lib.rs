//! Typed blocking client for the USGS FDSN earthquake event web service.
//!
//! Build an [`EventQuery`], then run it through [`Client::count`],
//! [`Client::query`] or [`Client::query_paged`].

mod client;
mod config;
mod errors;
mod paging;
mod query;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::paging::PagePlan;
pub use self::query::{
    AlertLevel, EventQuery, OrderBy, ParseEnumError, ReviewStatus, FORMAT_GEOJSON,
};
pub use self::transport::{HttpTransport, Transport};
