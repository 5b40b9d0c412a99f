//! Planet Gravity Tool
//!
//! This binary fetches every planet and its moons from the Solar System
//! OpenData API and prints the surface gravity of each moon, along with
//! the average moon gravity per planet.
//!
//! Usage:
//!   cargo run --bin planet_gravity -- [--planet NAME] [--skip-failed-moons]

use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};
use planetfield::constants::DEFAULT_API_URL;
use planetfield::data::DEFAULT_TIMEOUT_SECS;
use planetfield::{MoonFailurePolicy, Planet, PlanetService, ReqwestClient};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Planet Gravity Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Lists the planets of the solar system with the surface gravity of their moons",
    long_about = None
)]
struct Args {
    /// Base URL of the bodies API
    #[arg(long, env = "PLANETFIELD_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Skip moons that cannot be fetched instead of aborting
    #[arg(long, action = ArgAction::SetTrue)]
    skip_failed_moons: bool,

    /// Only show the planet with this name (API or English, case-insensitive)
    #[arg(short, long)]
    planet: Option<String>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Whether a planet matches the name filter
fn matches_name(planet: &Planet, filter: &str) -> bool {
    planet.name().eq_ignore_ascii_case(filter)
        || planet
            .english_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(filter))
        || planet.id().eq_ignore_ascii_case(filter)
}

/// Displays a planet and the gravity of each of its moons
fn display_planet(planet: &Planet) {
    let title = format!(
        "{} ({} moons)",
        planet.display_name(),
        planet.moon_count()
    );
    print_section_header(&title);

    if !planet.has_moons() {
        println!("No moons.");
        return;
    }

    println!(
        "{:<24} {:>10} {:>6} {:>12} {:>14}",
        "Moon", "Mass", "Exp", "Radius (km)", "Gravity (m/s²)"
    );
    for moon in planet.moons() {
        println!(
            "{:<24} {:>10.4} {:>6} {:>12.1} {:>14.4}",
            moon.display_name(),
            moon.mass_value,
            moon.mass_exponent,
            moon.mean_radius,
            moon.gravity
        );
    }

    if let Some(average) = planet.average_moon_gravity() {
        println!("Average moon gravity: {:.4} m/s²", average);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let args = Args::parse();

    let policy = if args.skip_failed_moons {
        MoonFailurePolicy::SkipAndWarn
    } else {
        MoonFailurePolicy::Propagate
    };

    let client = ReqwestClient::with_base_url(&args.base_url, Duration::from_secs(args.timeout))?;
    let service = PlanetService::new(client).with_moon_failure_policy(policy);

    println!("Fetching planets from {}", args.base_url);
    let start_time = Instant::now();
    let planets = service.get_all_planets()?;

    if planets.is_empty() {
        println!("No planets returned.");
        return Ok(());
    }

    let mut shown = 0;
    for planet in &planets {
        if let Some(filter) = args.planet.as_deref() {
            if !matches_name(planet, filter) {
                continue;
            }
        }
        display_planet(planet);
        shown += 1;
    }

    if shown == 0 {
        if let Some(filter) = &args.planet {
            println!("\nNo planet named '{}'.", filter);
        }
    }

    let moon_total: usize = planets.iter().map(Planet::moon_count).sum();
    println!(
        "\n{} planets, {} moons fetched in {:.2?} ({})",
        planets.len(),
        moon_total,
        start_time.elapsed(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
