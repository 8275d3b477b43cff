//! Topic catalog, routing, and search for State Primer.
//!
//! The study guide's content ships inside the binary: every topic is a TOML
//! document embedded at compile time, parsed and validated once into a
//! [`TopicRegistry`], and shared read-only for the life of the process.
//!
//! # Module Organization
//!
//! - [`embedded`] - The authored documents, `include_str!`ed
//! - [`raw`] - Serde schema the documents are written against
//! - [`registry`] - Validated catalog with id/parent indexes
//! - [`route`] - Path parsing and resolution (`/concepts/{id}`, nested children)
//! - [`filter`] - Substring search plus category filtering
//! - [`error`] - [`ContentError`] and the crate [`Result`]

pub mod embedded;
pub mod error;
pub mod filter;
pub mod raw;
pub mod registry;
pub mod route;

pub use error::{ContentError, Result};
pub use filter::{CategoryFilter, TopicQuery, search};
pub use registry::TopicRegistry;
pub use route::{Resolution, Route, canonical_path, resolve};
