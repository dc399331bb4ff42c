//! API Client
//!
//! HTTP calls to the MediLabel API.

pub mod client;

pub use client::*;
