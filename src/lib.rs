//! Planetfield: planets and moons of the solar system with surface gravity
//!
//! This crate fetches the planets and their moons from the Solar System
//! OpenData REST API and computes the surface gravity of every moon.
//!
//! ```no_run
//! use planetfield::{PlanetService, ReqwestClient};
//!
//! let service = PlanetService::new(ReqwestClient::new()?);
//! for planet in service.get_all_planets()? {
//!     for moon in planet.moons() {
//!         println!("{} / {}: {:.3} m/s^2", planet.name(), moon.name, moon.gravity);
//!     }
//! }
//! # Ok::<(), planetfield::PlanetfieldError>(())
//! ```

use thiserror::Error;

pub mod bodies;
pub mod constants;
pub mod data;
pub mod gravity;
pub mod service;

// Re-export commonly used types
pub use bodies::{Moon, Planet};
pub use data::{HttpClient, HttpResponse, ReqwestClient};
pub use gravity::surface_gravity;
pub use service::{LogSink, MoonFailurePolicy, PlanetService, WarningSink};

/// Main error type for the planetfield library
#[derive(Debug, Error)]
pub enum PlanetfieldError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request for moon '{id}' failed with status {status}")]
    MoonRequest { id: String, status: u16 },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    #[error("Moon reference has no usable identifier: {0}")]
    InvalidReference(String),
}

/// Result type for planetfield operations
pub type Result<T> = std::result::Result<T, PlanetfieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlanetfieldError::MoonRequest {
            id: "lune".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "Request for moon 'lune' failed with status 503");

        let err = PlanetfieldError::InvalidReference("Phobos".to_string());
        assert!(err.to_string().contains("Phobos"));
    }
}
