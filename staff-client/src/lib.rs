//! Staff Client - narrative generation client
//!
//! Talks to the external text-generation service that writes workforce
//! summaries and employee bios. The service is reached through the
//! [`NarrativeGenerator`] trait so callers can swap in a stub.

pub mod config;
pub mod error;
pub mod http;
pub mod narrative;

pub use config::NarrativeConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpNarrativeClient;
pub use narrative::{
    BIO_FALLBACK, NarrativeGenerator, NarrativeKind, NarrativeRequest, TREND_FALLBACK, narrate,
};
