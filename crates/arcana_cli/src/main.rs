use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arcana_aspects::detect_aspect;
use arcana_chart::{Planet, house_cusps, house_of, zodiac_placement};
use arcana_reading::{FixedEphemeris, build_request, compute_reading, narrate};
use arcana_time::resolve_utc_instant;
use arcana_tree::{digit_root, gematria_sum, planet_sephirah};

#[derive(Parser)]
#[command(name = "arcana", about = "Tree-of-Life natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign from ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Detect the aspect between two placed bodies
    Aspect {
        /// First body name (Sun..Pluto)
        #[arg(long)]
        body_a: String,
        /// First body ecliptic longitude in degrees
        #[arg(long)]
        lon_a: f64,
        /// Second body name
        #[arg(long)]
        body_b: String,
        /// Second body ecliptic longitude in degrees
        #[arg(long)]
        lon_b: f64,
    },
    /// House cusps from ascendant and midheaven
    Cusps {
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Midheaven longitude in degrees
        #[arg(long)]
        mc: f64,
        /// Optional longitude to place into a house
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Sephirah illuminated by a planet
    Sephirah {
        /// Planet name (Sun..Pluto)
        planet: String,
    },
    /// Gematria sum and digit root over tokens
    Gematria {
        /// Sephirah or Hebrew letter names
        tokens: Vec<String>,
    },
    /// Digit root of an integer
    DigitRoot {
        n: u32,
    },
    /// Full reading from birth data and a positions file
    Reading {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// IANA zone name or abbreviation (default UTC)
        #[arg(long, default_value = "UTC")]
        zone: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// JSON file mapping planet names to ecliptic longitudes
        #[arg(long)]
        positions: PathBuf,
        /// Emit the structured reading as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Emit the LLM interpretation request payload
        #[arg(long)]
        prompt: bool,
    },
}

fn parse_planet(s: &str) -> Planet {
    Planet::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid planet name: {s}");
        eprintln!("Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto");
        std::process::exit(1);
    })
}

fn load_positions(path: &PathBuf) -> FixedEphemeris {
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read positions file: {e}");
        std::process::exit(1);
    });
    let map: std::collections::BTreeMap<String, f64> =
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            eprintln!("Failed to parse positions file: {e}");
            std::process::exit(1);
        });
    let pairs: Vec<(Planet, f64)> = map
        .iter()
        .map(|(name, &lon)| (parse_planet(name), lon))
        .collect();
    FixedEphemeris::from_longitudes(&pairs)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { lon } => {
            let z = zodiac_placement(lon);
            println!(
                "{} ({:.4} deg in sign, absolute {:.4})",
                z.sign.name(),
                z.degree_in_sign,
                z.absolute_degree
            );
        }

        Commands::Aspect {
            body_a,
            lon_a,
            body_b,
            lon_b,
        } => {
            let a = parse_planet(&body_a);
            let b = parse_planet(&body_b);
            match detect_aspect(a, lon_a, b, lon_b) {
                Some(aspect) => println!(
                    "{} {} {} - separation {:.4} deg, deviation {:.4} deg, {}, {:?}",
                    a.name(),
                    aspect.kind.name(),
                    b.name(),
                    aspect.separation_deg,
                    aspect.deviation_deg,
                    aspect.quality.name(),
                    aspect.illumination
                ),
                None => println!("no aspect"),
            }
        }

        Commands::Cusps { asc, mc, lon } => {
            let cusps = house_cusps(asc, mc).unwrap_or_else(|e| {
                eprintln!("Failed to divide houses: {e}");
                std::process::exit(1);
            });
            for (i, cusp) in cusps.cusps.iter().enumerate() {
                println!("House {:2}: {:8.4} deg", i + 1, cusp);
            }
            if let Some(lon) = lon {
                println!("Longitude {:.4} deg falls in house {}", lon, house_of(lon, &cusps));
            }
        }

        Commands::Sephirah { planet } => {
            let p = parse_planet(&planet);
            let s = planet_sephirah(p);
            println!("{} illuminates {} ({})", p.name(), s.name(), s.hebrew());
        }

        Commands::Gematria { tokens } => {
            let sum = gematria_sum(&tokens);
            for t in &sum.breakdown {
                let flag = if t.known { "" } else { " (unknown, counted 0)" };
                println!("{:12} {:5}{flag}", t.token, t.value);
            }
            println!("total {} -> digit root {}", sum.total, sum.digit_root);
        }

        Commands::DigitRoot { n } => {
            println!("{}", digit_root(n));
        }

        Commands::Reading {
            date,
            time,
            zone,
            lat,
            lon,
            positions,
            json,
            prompt,
        } => {
            let instant = resolve_utc_instant(&date, &time, &zone).unwrap_or_else(|e| {
                eprintln!("Failed to resolve birth instant: {e}");
                std::process::exit(1);
            });
            let eph = load_positions(&positions);
            let reading = compute_reading(&eph, instant, lat, lon).unwrap_or_else(|e| {
                eprintln!("Failed to compute reading: {e}");
                std::process::exit(1);
            });
            if prompt {
                let request = build_request(&reading);
                println!("{}", to_json(&request));
            } else if json {
                println!("{}", to_json(&reading));
            } else {
                println!("{}", narrate(&reading));
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    })
}
