//! Telegram command handling.
//!
//! Parses `/start`, `/help` and `/price`, runs price lookups and renders
//! replies. The polling loop itself lives in [`bot`] and needs the
//! `telegram` feature.

pub mod command;
pub mod handler;
pub mod reply;

#[cfg(feature = "telegram")]
pub mod bot;
