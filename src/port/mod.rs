//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points that adapters implement to integrate
//! with external systems.
//!
//! # Available Ports
//!
//! - [`QuoteProvider`] - Live coin prices

pub mod outbound;

pub use outbound::quote::QuoteProvider;
