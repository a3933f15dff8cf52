//! Day Facts Tool
//!
//! Prints the derived astronomical and Malayalam calendar facts for a date
//! and location: sunrise/sunset, lunar phase, Malayalam date, and nakshatra.
//!
//! Usage:
//!   cargo run --bin day_facts -- [--json] [--lat LAT --lon LON] [2024-01-01]

use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser};
use panchangam::{compute_day_facts, CivilDate, GeoCoordinate};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Default latitude (Kochi) when no location is given
const DEFAULT_LAT: f64 = 10.1632;
/// Default longitude (Kochi) when no location is given
const DEFAULT_LON: f64 = 76.6413;

/// Day Facts Tool
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Displays sunrise/sunset, lunar phase, Malayalam date and nakshatra for a date",
    long_about = None
)]
struct Args {
    /// Latitude in degrees, positive north
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude in degrees, positive east
    #[arg(long, requires = "lat")]
    lon: Option<f64>,

    /// Skip the location-dependent facts entirely
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["lat", "lon"])]
    no_location: bool,

    /// Emit the facts as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Date to query (YYYY-MM-DD); defaults to today (UTC)
    date: Option<String>,
}

fn format_event(event: Option<chrono::DateTime<Utc>>) -> String {
    match event {
        Some(instant) => instant.format("%H:%M UTC").to_string(),
        None => "—".to_string(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let date = match &args.date {
        Some(text) => CivilDate::from(NaiveDate::parse_from_str(text, "%Y-%m-%d")?),
        None => CivilDate::from(Utc::now().date_naive()),
    };

    let location = if args.no_location {
        None
    } else {
        let lat = args.lat.unwrap_or(DEFAULT_LAT);
        let lon = args.lon.unwrap_or(DEFAULT_LON);
        Some(GeoCoordinate::new(lat, lon)?)
    };

    let facts = compute_day_facts(date, location);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
        return Ok(());
    }

    println!("Day facts for {}", facts.date);
    match facts.location {
        Some(coordinate) => println!("Location: {}", coordinate),
        None => println!("Location: (none)"),
    }

    println!("\nSun");
    println!("  Sunrise: {}", format_event(facts.sun.sunrise));
    println!("  Sunset:  {}", format_event(facts.sun.sunset));

    println!("\nMoon");
    println!("  Phase:        {}", facts.moon.phase);
    println!("  Age:          {:.1} days", facts.moon.age_days);
    println!(
        "  Illumination: {:.0}%",
        facts.moon.illuminated_fraction * 100.0
    );

    println!("\nCalendar");
    println!("  Malayalam date: {}", facts.malayalam);
    println!("  Nakshatra:      {}", facts.nakshatra);

    Ok(())
}
