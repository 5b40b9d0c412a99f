//! Planets and moons of the solar system
//!
//! The types in this module are built from the wire records in
//! [`records`] once every moon has been fetched and given a surface
//! gravity.

pub mod records;

pub use records::{BodiesEnvelope, MassRecord, MoonRecord, MoonReference, PlanetRecord};

use crate::gravity::surface_gravity;

/// A moon with its physical parameters and computed surface gravity
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    /// API identifier (e.g. `lune`)
    pub id: String,
    /// Name as reported by the API
    pub name: String,
    /// English name, when the API provides one
    pub english_name: Option<String>,
    /// URL or identifier this moon was fetched through
    pub reference: Option<String>,
    /// Mass mantissa
    pub mass_value: f64,
    /// Base-10 exponent of the mass in kilograms
    pub mass_exponent: f64,
    /// Mean radius in kilometers
    pub mean_radius: f64,
    /// Surface gravity in m/s^2, `0.0` when it cannot be computed
    pub gravity: f64,
}

impl Moon {
    /// Build a moon from its full record and compute its gravity
    pub fn from_record(record: MoonRecord, reference: Option<String>) -> Self {
        let (mass_value, mass_exponent) = record.mass_parts();
        let mut moon = Self {
            id: record.id,
            name: record.name,
            english_name: record.english_name,
            reference,
            mass_value,
            mass_exponent,
            mean_radius: record.mean_radius.unwrap_or(0.0),
            gravity: 0.0,
        };
        moon.compute_gravity();
        moon
    }

    /// Recompute and store the surface gravity, returning the new value
    pub fn compute_gravity(&mut self) -> f64 {
        self.gravity = surface_gravity(self.mass_value, self.mass_exponent, self.mean_radius);
        self.gravity
    }

    /// English name if known, otherwise the API name
    pub fn display_name(&self) -> &str {
        self.english_name.as_deref().unwrap_or(&self.name)
    }
}

/// A planet together with its fully populated moons
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    id: String,
    name: String,
    english_name: Option<String>,
    moons: Vec<Moon>,
}

impl Planet {
    /// Build a planet from its listing record and its enriched moons
    ///
    /// The moon references carried by `record` are dropped in favor of
    /// `moons`.
    pub fn from_record(record: PlanetRecord, moons: Vec<Moon>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            english_name: record.english_name,
            moons,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn english_name(&self) -> Option<&str> {
        self.english_name.as_deref()
    }

    /// English name if known, otherwise the API name
    pub fn display_name(&self) -> &str {
        self.english_name().unwrap_or(&self.name)
    }

    /// Moons in the order the planet listing referenced them
    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn moon_count(&self) -> usize {
        self.moons.len()
    }

    pub fn has_moons(&self) -> bool {
        !self.moons.is_empty()
    }

    /// Mean surface gravity of this planet's moons, `None` without moons
    pub fn average_moon_gravity(&self) -> Option<f64> {
        if self.moons.is_empty() {
            return None;
        }
        let total: f64 = self.moons.iter().map(|moon| moon.gravity).sum();
        Some(total / self.moons.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn moon_record(id: &str, mass_value: f64, mass_exponent: f64, radius: f64) -> MoonRecord {
        MoonRecord {
            id: id.to_string(),
            name: id.to_string(),
            mass_value: Some(mass_value),
            mass_exponent: Some(mass_exponent),
            mean_radius: Some(radius),
            ..Default::default()
        }
    }

    #[test]
    fn test_moon_from_record_computes_gravity() {
        let moon = Moon::from_record(moon_record("lune", 7.342, 22.0, 1737.4), None);
        assert_relative_eq!(moon.gravity, 1.62, epsilon = 0.01);
        assert_eq!(moon.display_name(), "lune");
    }

    #[test]
    fn test_moon_without_mass_has_zero_gravity() {
        let record = MoonRecord {
            id: "s2004s3".to_string(),
            name: "S/2004 S 3".to_string(),
            mean_radius: Some(2.5),
            ..Default::default()
        };
        let moon = Moon::from_record(record, None);
        assert_eq!(moon.gravity, 0.0);
    }

    #[test]
    fn test_planet_drops_references() {
        let record = PlanetRecord {
            id: "mars".to_string(),
            name: "Mars".to_string(),
            english_name: Some("Mars".to_string()),
            moons: Some(vec![MoonReference {
                moon: Some("Phobos".to_string()),
                rel: "phobos".to_string(),
                ..Default::default()
            }]),
        };
        let phobos = Moon::from_record(moon_record("phobos", 1.06, 16.0, 11.1), None);
        let planet = Planet::from_record(record, vec![phobos]);

        assert_eq!(planet.id(), "mars");
        assert_eq!(planet.moon_count(), 1);
        assert_eq!(planet.moons()[0].id, "phobos");
    }

    #[test]
    fn test_average_moon_gravity() {
        let record = PlanetRecord {
            id: "mars".to_string(),
            name: "Mars".to_string(),
            ..Default::default()
        };
        let mut a = Moon::from_record(moon_record("a", 1.0, 20.0, 10.0), None);
        let mut b = a.clone();
        a.gravity = 1.0;
        b.gravity = 3.0;
        let planet = Planet::from_record(record.clone(), vec![a, b]);
        assert_relative_eq!(planet.average_moon_gravity().unwrap(), 2.0);

        let moonless = Planet::from_record(record, Vec::new());
        assert!(!moonless.has_moons());
        assert_eq!(moonless.average_moon_gravity(), None);
    }
}
