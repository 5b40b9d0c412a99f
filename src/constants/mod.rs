//! Constants module for gravity calculations and API endpoints

// Physics
/// Newtonian constant of gravitation in m^3/(kg s^2) (CODATA 2018)
pub const G: f64 = 6.674_30e-11;

// Units
/// Meters in a kilometer
pub const M_PER_KM: f64 = 1_000.0;

// Solar System OpenData API
/// Root URL of the Solar System OpenData REST API
pub const DEFAULT_API_URL: &str = "https://api.le-systeme-solaire.net/rest/";
/// Path listing every planet together with its moon references
pub const ALL_PLANETS_WITH_MOONS_PATH: &str =
    "bodies?data=id,name,englishName,moons,moon,rel&filter[]=isPlanet,neq,false";
/// Path prefix for a single body, followed by its identifier
pub const BODY_BY_ID_PATH: &str = "bodies/";
