//! HTTP transport layer — `ZoraHttp` posts GraphQL documents, one shot.

pub mod client;

pub use client::{Transport, ZoraHttp};
