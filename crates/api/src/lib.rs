//! HTTP surface: localized page routes behind the access gate, plus the
//! tenant settings API.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
