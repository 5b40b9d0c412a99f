//! Wire records for the Solar System OpenData API
//!
//! These mirror the JSON returned by the `bodies` endpoints. Unknown
//! fields are ignored, and numeric fields that are missing, `null` or not
//! numbers decode as `None` instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::gravity::surface_gravity;

/// Top-level envelope wrapping a list of bodies
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodiesEnvelope {
    /// Bodies in the order the API returned them
    #[serde(default)]
    pub bodies: Vec<PlanetRecord>,
}

/// A planet as listed by the "all planets with moons" request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanetRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    /// Moon references, `None` when the API sends `null` or omits the field
    #[serde(default)]
    pub moons: Option<Vec<MoonReference>>,
}

impl PlanetRecord {
    /// Moon references of this planet, empty when there are none
    pub fn moon_references(&self) -> &[MoonReference] {
        self.moons.as_deref().unwrap_or(&[])
    }
}

/// Lightweight pointer to a moon's full record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoonReference {
    /// Display name of the moon
    #[serde(default)]
    pub moon: Option<String>,
    /// URL of the moon's full record
    #[serde(default)]
    pub rel: String,
    /// Explicit endpoint identifier
    #[serde(default)]
    pub url_id: Option<String>,
    /// Body identifier
    #[serde(default)]
    pub id: Option<String>,
}

impl MoonReference {
    /// Identifier to request from the body endpoint
    ///
    /// `url_id` wins over `id`, which wins over the last non-empty path
    /// segment of `rel`, so `https://.../bodies/lune` resolves to `lune`.
    pub fn url_id(&self) -> Option<&str> {
        let explicit = [self.url_id.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|id| !id.is_empty());

        explicit.or_else(|| {
            self.rel
                .trim()
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .filter(|id| !id.is_empty())
        })
    }
}

/// Nested mass object used by the API (`"mass": {"massValue": .., "massExponent": ..}`)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MassRecord {
    #[serde(rename = "massValue", default, deserialize_with = "lenient_f64")]
    pub mass_value: Option<f64>,
    #[serde(rename = "massExponent", default, deserialize_with = "lenient_f64")]
    pub mass_exponent: Option<f64>,
}

/// Full record of a single moon
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoonRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,
    #[serde(rename = "massValue", default, deserialize_with = "lenient_f64")]
    pub mass_value: Option<f64>,
    #[serde(rename = "massExponent", default, deserialize_with = "lenient_f64")]
    pub mass_exponent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_mass")]
    pub mass: Option<MassRecord>,
    /// Mean radius in kilometers
    #[serde(rename = "meanRadius", default, deserialize_with = "lenient_f64")]
    pub mean_radius: Option<f64>,
}

impl MoonRecord {
    /// Mass mantissa and exponent, preferring the nested `mass` object
    pub fn mass_parts(&self) -> (f64, f64) {
        match self.mass {
            Some(mass) => (
                mass.mass_value.unwrap_or(0.0),
                mass.mass_exponent.unwrap_or(0.0),
            ),
            None => (
                self.mass_value.unwrap_or(0.0),
                self.mass_exponent.unwrap_or(0.0),
            ),
        }
    }

    /// Mean radius in kilometers, `0.0` when unknown
    pub fn mean_radius_km(&self) -> f64 {
        self.mean_radius.unwrap_or(0.0)
    }

    /// Surface gravity in m/s^2 computed from this record
    pub fn surface_gravity(&self) -> f64 {
        let (mass_value, mass_exponent) = self.mass_parts();
        surface_gravity(mass_value, mass_exponent, self.mean_radius_km())
    }
}

/// Accept any JSON value, keeping it only when it is a number
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Accept any JSON value, keeping it only when it is a mass object
fn lenient_mass<'de, D>(deserializer: D) -> std::result::Result<Option<MassRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_envelope_with_null_moons() {
        let json = r#"{"bodies":[
            {"id":"mercure","name":"Mercure","englishName":"Mercury","moons":null},
            {"id":"terre","name":"La Terre","englishName":"Earth",
             "moons":[{"moon":"La Lune",
                       "rel":"https://api.le-systeme-solaire.net/rest/bodies/lune"}]}
        ]}"#;
        let envelope: BodiesEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.bodies.len(), 2);
        assert!(envelope.bodies[0].moons.is_none());
        assert!(envelope.bodies[0].moon_references().is_empty());
        assert_eq!(envelope.bodies[1].english_name.as_deref(), Some("Earth"));
        assert_eq!(
            envelope.bodies[1].moon_references()[0].url_id(),
            Some("lune")
        );
    }

    #[test]
    fn test_reference_with_rel_and_ids() {
        let json = r#"{"bodies":[{"id":"terre","name":"La Terre","moons":[
            {"moon":"La Lune","rel":"https://x/bodies/lune","id":"lune"},
            {"moon":"Other","rel":"https://x/bodies/a","id":"b","url_id":"c"}
        ]}]}"#;
        let envelope: BodiesEnvelope = serde_json::from_str(json).unwrap();

        let references = envelope.bodies[0].moon_references();
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].url_id(), Some("lune"));
        assert_eq!(references[0].rel, "https://x/bodies/lune");
        assert_eq!(references[1].url_id(), Some("c"));
    }

    #[test]
    fn test_reference_id_forms() {
        let reference: MoonReference = serde_json::from_str(r#"{"url_id":"phobos"}"#).unwrap();
        assert_eq!(reference.url_id(), Some("phobos"));

        let reference: MoonReference = serde_json::from_str(r#"{"id":"  "}"#).unwrap();
        assert_eq!(reference.url_id(), None);

        let json = r#"{"rel":"https://example.org/rest/bodies/deimos/"}"#;
        let reference: MoonReference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.url_id(), Some("deimos"));

        let reference: MoonReference = serde_json::from_str(r#"{"moon":"Nameless"}"#).unwrap();
        assert_eq!(reference.url_id(), None);
    }

    #[test]
    fn test_moon_nested_mass() {
        let json = r#"{"id":"lune","name":"La Lune","englishName":"Moon",
            "mass":{"massValue":7.346,"massExponent":22},
            "meanRadius":1737.0,"density":3.344}"#;
        let record: MoonRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.mass_parts(), (7.346, 22.0));
        assert_relative_eq!(record.surface_gravity(), 1.62, epsilon = 0.01);
    }

    #[test]
    fn test_moon_flat_mass() {
        let json = r#"{"id":"lune","name":"La Lune",
            "massValue":7.342,"massExponent":22,"meanRadius":1737.4}"#;
        let record: MoonRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.mass_parts(), (7.342, 22.0));
        assert_relative_eq!(record.surface_gravity(), 1.62, epsilon = 0.01);
    }

    #[test]
    fn test_moon_missing_or_invalid_fields() {
        let json = r#"{"id":"s2004s3","name":"S/2004 S 3","mass":null,"meanRadius":"unknown"}"#;
        let record: MoonRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.mass_parts(), (0.0, 0.0));
        assert_eq!(record.mean_radius_km(), 0.0);
        assert_eq!(record.surface_gravity(), 0.0);
    }
}
