//! Client core for the hero API.
//!
//! # Overview
//! `HeroClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `HeroService` drives it through an
//! `HttpTransport`, records each outcome in a `MessageSink`, and turns every
//! failure into a fallback value.
//!
//! # Design
//! - `HeroClient` is stateless: it holds only the base URL and resource path.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the parsers are testable on their own.
//! - Collaborators are passed to `HeroService::new` explicitly.
//! - DTOs are defined independently from the hero-server crate; the live
//!   integration test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod logger;
pub mod message;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{HeroClient, HEROES_PATH};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use message::{MessageService, MessageSink};
pub use service::HeroService;
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{Ack, Hero, NewHero};
