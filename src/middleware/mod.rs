//! Framework adapters. Each one only translates host request and response
//! types; every decision is made by [`Cors`].

use crate::cors::Cors;
use std::sync::Arc;

#[cfg(feature = "actix")]
pub mod actix;
#[cfg(feature = "axum")]
pub mod axum;

/// Handle shared by every request a server processes.
pub type SharedCors = Arc<Cors>;
