//! Planet service: fetches every planet and enriches its moons
//!
//! Requests are issued one at a time. The planet listing is fetched
//! first, then each referenced moon in listing order, and every moon is
//! given a surface gravity before it is attached to its planet.

use crate::bodies::{BodiesEnvelope, Moon, MoonRecord, MoonReference, Planet};
use crate::constants::{ALL_PLANETS_WITH_MOONS_PATH, BODY_BY_ID_PATH};
use crate::data::{HttpClient, HttpResponse};
use crate::{PlanetfieldError, Result};

/// Prefix of the warning emitted when the planet listing request fails
pub const GET_REQUEST_FAILED: &str = "GET request failed with status code: ";

/// Sink for warning-level messages
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// What to do when a single moon cannot be fetched or decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoonFailurePolicy {
    /// Fail the whole call with the moon's error
    #[default]
    Propagate,
    /// Drop the moon from its planet, emit a warning and continue
    SkipAndWarn,
}

/// Fetches planets and their moons through an injected HTTP client
pub struct PlanetService<C, W = LogSink> {
    client: C,
    sink: W,
    moon_failure_policy: MoonFailurePolicy,
}

impl<C: HttpClient> PlanetService<C> {
    /// Create a service that logs warnings through the `log` facade
    pub fn new(client: C) -> Self {
        Self {
            client,
            sink: LogSink,
            moon_failure_policy: MoonFailurePolicy::default(),
        }
    }
}

impl<C: HttpClient, W: WarningSink> PlanetService<C, W> {
    /// Replace the warning sink
    pub fn with_warning_sink<S: WarningSink>(self, sink: S) -> PlanetService<C, S> {
        PlanetService {
            client: self.client,
            sink,
            moon_failure_policy: self.moon_failure_policy,
        }
    }

    /// Set how failed moon requests are handled
    pub fn with_moon_failure_policy(mut self, policy: MoonFailurePolicy) -> Self {
        self.moon_failure_policy = policy;
        self
    }

    /// Fetch every planet with its moons, each moon carrying its gravity
    ///
    /// A non-success status on the planet listing emits a warning and
    /// yields an empty list, as does a listing body that is `null` or
    /// cannot be decoded. Transport failures are returned as errors.
    /// Per-moon failures follow the configured [`MoonFailurePolicy`].
    pub fn get_all_planets(&self) -> Result<Vec<Planet>> {
        let mut planets = Vec::new();

        let response = self.client.get(ALL_PLANETS_WITH_MOONS_PATH)?;
        if !response.is_success() {
            self.sink.warn(&format!("{}{}", GET_REQUEST_FAILED, response.status));
            return Ok(planets);
        }

        let envelope = match decode_envelope(&response.body) {
            Some(envelope) => envelope,
            None => return Ok(planets),
        };

        for mut record in envelope.bodies {
            let moons = match record.moons.take() {
                Some(references) if !references.is_empty() => self.fetch_moons(&references)?,
                _ => Vec::new(),
            };
            planets.push(Planet::from_record(record, moons));
        }

        log::debug!("Fetched {} planets", planets.len());
        Ok(planets)
    }

    /// Fetch every referenced moon in order
    fn fetch_moons(&self, references: &[MoonReference]) -> Result<Vec<Moon>> {
        let mut moons = Vec::with_capacity(references.len());

        for reference in references {
            match self.fetch_moon(reference) {
                Ok(moon) => moons.push(moon),
                Err(e) => match self.moon_failure_policy {
                    MoonFailurePolicy::Propagate => return Err(e),
                    MoonFailurePolicy::SkipAndWarn => {
                        self.sink.warn(&format!("Skipping moon: {}", e));
                    }
                },
            }
        }

        Ok(moons)
    }

    /// Fetch a single moon and compute its gravity
    fn fetch_moon(&self, reference: &MoonReference) -> Result<Moon> {
        let id = reference
            .url_id()
            .ok_or_else(|| PlanetfieldError::InvalidReference(describe(reference)))?;

        let response = self.client.get(&format!("{}{}", BODY_BY_ID_PATH, id))?;
        let record = decode_moon(id, &response)?;

        let location = if reference.rel.trim().is_empty() {
            id.to_string()
        } else {
            reference.rel.clone()
        };
        Ok(Moon::from_record(record, Some(location)))
    }
}

/// Decode the planet listing, `None` for `null`, empty or malformed bodies
fn decode_envelope(body: &str) -> Option<BodiesEnvelope> {
    match serde_json::from_str::<Option<BodiesEnvelope>>(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::debug!("Discarding undecodable planet listing: {}", e);
            None
        }
    }
}

fn decode_moon(id: &str, response: &HttpResponse) -> Result<MoonRecord> {
    if !response.is_success() {
        return Err(PlanetfieldError::MoonRequest {
            id: id.to_string(),
            status: response.status,
        });
    }

    serde_json::from_str(&response.body).map_err(|source| PlanetfieldError::Decode {
        context: format!("moon '{}'", id),
        source,
    })
}

fn describe(reference: &MoonReference) -> String {
    match &reference.moon {
        Some(name) => format!("{} (rel: {:?})", name, reference.rel),
        None => format!("rel: {:?}", reference.rel),
    }
}
