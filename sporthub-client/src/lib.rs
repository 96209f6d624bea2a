//! HTTP client for the SportHub upstream API
//!
//! Typed wrappers over the FastAPI system of record. The client is
//! constructed once from a [`ClientConfig`] and injected wherever it is
//! needed; no module owns a global instance. All calls are one-shot:
//! no retries, no caching, failures surface immediately. The one
//! documented exception is [`FailurePolicy::FailClosed`] on the slot
//! verification.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FailurePolicy};
pub use http::HttpClient;

pub use api::disponibilidad::{extraer_proximos, normalizar_disponibilidad};
pub use api::horarios::ordenar_horarios;
pub use api::ocupacion::resumen_ocupacion;
