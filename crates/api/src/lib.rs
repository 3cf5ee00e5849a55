//! Public facade for the monument catalog
//!
//! [`MonumentService`] wires the storage, search and history pieces together
//! behind one handle; [`ServiceConfig`] locates the seed dataset. See
//! `examples/search_demo.rs` for an end-to-end call.

pub mod config;
pub mod service;

pub use config::ServiceConfig;
pub use service::MonumentService;
