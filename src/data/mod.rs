//! Data module for retrieving body data over HTTP
//!
//! This module provides the HTTP client capability the planet service
//! fetches through, along with its blocking network backend.

mod client;

pub use client::{HttpClient, HttpResponse, ReqwestClient, DEFAULT_TIMEOUT_SECS};
