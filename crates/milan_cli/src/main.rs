mod places;

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use milan_rs::{
    AyanamshaModel, BirthMoment, BirthProfile, CachedResolver, Chart, ChartConfig, Engine, Gender,
    GeoLocation, MatchConfig, MatchReport, Nakshatra, PlaceResolver, Rashi, SortKey,
    compute_chart, current_dasha, find_best_matches, kuja_dosha_details, marriage_years,
    match_profiles, parse_local, resolve_offset, top_matches, wedding_month,
};
use milan_search::match_parties;
use milan_time::jd_from_naive_utc;
use milan_vedic_base::{
    MatchParty, NakshatraPlacement, nakshatra_from_longitude, rashi_from_longitude, rashis_for_nakshatra,
};
use serde::Serialize;

use crate::places::PlaceTable;

#[derive(Parser)]
#[command(name = "milan", about = "Birth charts and Guna Milan compatibility")]
struct Cli {
    /// JSON place table used to resolve --city/--country
    #[arg(long, global = true)]
    places: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Birth data for one person.
#[derive(Args, Clone)]
struct BirthArgs {
    /// Local date/time, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset in hours, used when the city cannot be resolved
    #[arg(long, default_value = "5.5", allow_hyphen_values = true)]
    tz: f64,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    country: Option<String>,
}

#[derive(Args)]
struct ChartArgs {
    /// Omit Rahu and Ketu
    #[arg(long)]
    no_nodes: bool,
    /// Omit the Ascendant
    #[arg(long)]
    no_ascendant: bool,
    /// Ayanamsha model: linear (default) or precessional
    #[arg(long, default_value = "linear")]
    ayanamsha: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Sidereal birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Full Guna Milan report for two births
    Match {
        #[arg(long)]
        boy_date: String,
        #[arg(long, allow_hyphen_values = true)]
        boy_lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        boy_lon: Option<f64>,
        #[arg(long, default_value = "5.5", allow_hyphen_values = true)]
        boy_tz: f64,
        #[arg(long)]
        boy_city: Option<String>,
        #[arg(long)]
        boy_country: Option<String>,
        #[arg(long)]
        girl_date: String,
        #[arg(long, allow_hyphen_values = true)]
        girl_lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        girl_lon: Option<f64>,
        #[arg(long, default_value = "5.5", allow_hyphen_values = true)]
        girl_tz: f64,
        #[arg(long)]
        girl_city: Option<String>,
        #[arg(long)]
        girl_country: Option<String>,
        /// Attach Kuja Dosha for both parties
        #[arg(long)]
        kuja: bool,
        /// Attach the running dasha of both parties (evaluated now)
        #[arg(long)]
        dasha: bool,
        /// Attach both charts (JSON output only)
        #[arg(long)]
        charts: bool,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Guna Milan from known Moon stars, no birth data
    Stars {
        /// Boy's nakshatra name
        #[arg(long)]
        boy_nakshatra: String,
        /// Boy's Moon rashi (needed when the nakshatra spans two signs)
        #[arg(long)]
        boy_rashi: Option<String>,
        #[arg(long)]
        girl_nakshatra: String,
        #[arg(long)]
        girl_rashi: Option<String>,
    },
    /// Rank all 108 nakshatra padas against one party
    BestMatches {
        #[arg(long)]
        nakshatra: String,
        /// Defaults to the rashi the pada falls in
        #[arg(long)]
        rashi: Option<String>,
        #[arg(long, default_value = "1")]
        pada: u8,
        /// Gender of the given party: male or female
        #[arg(long, default_value = "male")]
        gender: String,
        /// Sort key: final (default) or raw
        #[arg(long, default_value = "final")]
        sort: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Kuja Dosha analysis
    Kuja {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Running Vimshottari dasha
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query instant, local "YYYY-MM-DD HH:MM" at the birth offset (default: now)
        #[arg(long)]
        at: Option<String>,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Rashi of a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Wedding month window and Jupiter-favoured years for a Moon sign
    Wedding {
        #[arg(long)]
        rashi: String,
        /// First year of the forecast (default: this year)
        #[arg(long)]
        from: Option<i32>,
        #[arg(long, default_value = "5")]
        years: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    let resolver = cli.places.as_ref().map(|path| {
        CachedResolver::new(or_exit(PlaceTable::load(path), "Failed to load places"))
    });
    let resolver = resolver.as_ref().map(|r| r as &dyn PlaceResolver);
    let engine = Engine::default();

    match cli.command {
        Commands::Chart { birth, chart } => {
            let profile = build_profile("Native", &birth, resolver);
            let chart = or_exit(
                compute_chart(&engine, &profile, &chart_config(&chart)),
                "Chart failed",
            );
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Match {
            boy_date,
            boy_lat,
            boy_lon,
            boy_tz,
            boy_city,
            boy_country,
            girl_date,
            girl_lat,
            girl_lon,
            girl_tz,
            girl_city,
            girl_country,
            kuja,
            dasha,
            charts,
            chart,
        } => {
            let boy = BirthArgs {
                date: boy_date,
                lat: boy_lat,
                lon: boy_lon,
                tz: boy_tz,
                city: boy_city,
                country: boy_country,
            };
            let girl = BirthArgs {
                date: girl_date,
                lat: girl_lat,
                lon: girl_lon,
                tz: girl_tz,
                city: girl_city,
                country: girl_country,
            };
            let boy = build_profile("Boy", &boy, resolver);
            let girl = build_profile("Girl", &girl, resolver);
            let config = MatchConfig {
                include_charts: charts,
                include_dasha: dasha,
                include_kuja_dosha: kuja,
                query_jd: dasha.then(now_jd),
            };
            let report = or_exit(
                match_profiles(&engine, &boy, &girl, &chart_config(&chart), &config),
                "Match failed",
            );
            if cli.json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::Stars {
            boy_nakshatra,
            boy_rashi,
            girl_nakshatra,
            girl_rashi,
        } => {
            let boy = require_party(&boy_nakshatra, boy_rashi.as_deref());
            let girl = require_party(&girl_nakshatra, girl_rashi.as_deref());
            let report = match_parties(&boy, &girl);
            if cli.json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::BestMatches {
            nakshatra,
            rashi,
            pada,
            gender,
            sort,
            limit,
        } => {
            let nakshatra = require_nakshatra(&nakshatra);
            let rashi = match rashi {
                Some(r) => require_rashi(&r),
                None => match NakshatraPlacement::from_pada(nakshatra, pada) {
                    Some(p) => p.rashi,
                    None => {
                        eprintln!("Pada must be 1-4, got {pada}");
                        std::process::exit(1);
                    }
                },
            };
            let candidates = or_exit(
                find_best_matches(
                    nakshatra,
                    rashi,
                    pada,
                    parse_gender(&gender),
                    parse_sort(&sort),
                ),
                "Search failed",
            );
            let top = top_matches(candidates, limit);
            if cli.json {
                print_json(&top);
            } else {
                println!(
                    "{:<4} {:<18} {:>4} {:<10} {:>5} {:>5}  {:<6} {:<6} {}",
                    "#", "Nakshatra", "Pada", "Rashi", "Raw", "Final", "Rajju", "Vedha", "Safety"
                );
                for (i, c) in top.iter().enumerate() {
                    println!(
                        "{:<4} {:<18} {:>4} {:<10} {:>5.1} {:>5.1}  {:<6} {:<6} {}",
                        i + 1,
                        c.nakshatra.name(),
                        c.pada,
                        c.rashi.name(),
                        c.raw_total,
                        c.final_total,
                        c.rajju.name(),
                        c.vedha.name(),
                        c.safety.name()
                    );
                }
            }
        }

        Commands::Kuja { birth, chart } => {
            let profile = build_profile("Native", &birth, resolver);
            let chart = or_exit(
                compute_chart(&engine, &profile, &chart_config(&chart)),
                "Chart failed",
            );
            let analysis = or_exit(kuja_dosha_details(&chart), "Kuja Dosha analysis failed");
            if cli.json {
                print_json(&analysis);
            } else {
                for d in &analysis.details {
                    println!(
                        "{:<10} house {:>2}  {:<11} {}",
                        d.reference.name(),
                        d.house,
                        d.state.name(),
                        d.detail
                    );
                }
                println!(
                    "Kuja Dosha: {} (severity {:.1})",
                    analysis.status.name(),
                    analysis.severity
                );
            }
        }

        Commands::Dasha { birth, at, chart } => {
            let profile = build_profile("Native", &birth, resolver);
            let query_jd = match at {
                Some(s) => {
                    let local = or_exit(parse_local(&s), "Invalid --at");
                    let offset = profile.moment().utc_offset_hours();
                    or_exit(BirthMoment::new(local, offset), "Invalid --at").jd_ut()
                }
                None => now_jd(),
            };
            let chart = or_exit(
                compute_chart(&engine, &profile, &chart_config(&chart)),
                "Chart failed",
            );
            let dasha = or_exit(
                current_dasha(&chart, profile.jd_ut(), query_jd),
                "Dasha failed",
            );
            if cli.json {
                print_json(&dasha);
            } else {
                println!(
                    "Mahadasha: {} ({}), JD {:.2} - {:.2}",
                    dasha.lord.name(),
                    dasha.tone.name(),
                    dasha.start_jd,
                    dasha.end_jd
                );
                println!(
                    "Antardasha: {}, JD {:.2} - {:.2}",
                    dasha.antardasha.lord.name(),
                    dasha.antardasha.start_jd,
                    dasha.antardasha.end_jd
                );
                println!("Age: {:.2} years", dasha.elapsed_years);
            }
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                    info.nakshatra.name(),
                    info.nakshatra.index(),
                    info.pada,
                    info.degrees_in_nakshatra
                );
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} - {} ({:.4} deg in rashi)",
                    info.rashi.label(),
                    info.dms,
                    info.degrees_in_rashi
                );
            }
        }

        Commands::Wedding { rashi, from, years } => {
            let rashi = require_rashi(&rashi);
            let first = from.unwrap_or_else(|| Utc::now().year());
            let forecast = or_exit(
                marriage_years(&engine, rashi, first, years, AyanamshaModel::default()),
                "Forecast failed",
            );
            let window = wedding_month(rashi);
            if cli.json {
                #[derive(Serialize)]
                struct Wedding<'a> {
                    moon_rashi: Rashi,
                    wedding_window: &'a str,
                    years: Vec<milan_rs::JupiterYear>,
                }
                print_json(&Wedding {
                    moon_rashi: rashi,
                    wedding_window: window,
                    years: forecast,
                });
            } else {
                println!("Wedding window for {}: {window}", rashi.label());
                for y in &forecast {
                    println!(
                        "{}  Jupiter in {:<10} {:<14} ({})",
                        y.year,
                        y.jupiter_rashi.name(),
                        y.rating.name(),
                        y.detail
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn or_exit<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{context}: {e}");
        std::process::exit(1);
    })
}

fn build_profile(name: &str, birth: &BirthArgs, resolver: Option<&dyn PlaceResolver>) -> BirthProfile {
    let local = or_exit(parse_local(&birth.date), "Invalid date");
    let mut offset = birth.tz;
    let mut place = None;
    if let Some(city) = &birth.city {
        let country = birth.country.as_deref().unwrap_or("");
        let resolved = resolve_offset(resolver, city, country, local, birth.tz);
        if resolved.resolved {
            eprintln!("{}", resolved.message);
        } else {
            eprintln!("Warning: {}", resolved.message);
        }
        offset = resolved.utc_offset_hours;
        place = resolved.place;
    }

    let location = match (birth.lat, birth.lon, place) {
        (Some(lat), Some(lon), _) => or_exit(GeoLocation::new(lat, lon), "Invalid location"),
        (_, _, Some(p)) => or_exit(p.location(), "Invalid location"),
        _ => {
            eprintln!("{name}: give --lat and --lon, or a --city found in --places");
            std::process::exit(1);
        }
    };
    or_exit(
        BirthProfile::parse(name, &birth.date, offset, location),
        "Invalid birth data",
    )
}

fn chart_config(args: &ChartArgs) -> ChartConfig {
    ChartConfig {
        include_nodes: !args.no_nodes,
        include_ascendant: !args.no_ascendant,
        ayanamsha: parse_ayanamsha(&args.ayanamsha),
    }
}

fn now_jd() -> f64 {
    jd_from_naive_utc(Utc::now().naive_utc())
}

fn parse_ayanamsha(s: &str) -> AyanamshaModel {
    match s.to_lowercase().as_str() {
        "linear" | "lahiri" => AyanamshaModel::Linear,
        "precessional" | "iau" => AyanamshaModel::Precessional,
        _ => {
            eprintln!("Invalid ayanamsha model: {s}");
            eprintln!("Valid: linear (default), precessional");
            std::process::exit(1);
        }
    }
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" | "boy" => Gender::Male,
        "female" | "f" | "girl" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn parse_sort(s: &str) -> SortKey {
    match s.to_lowercase().as_str() {
        "final" => SortKey::Final,
        "raw" => SortKey::Raw,
        _ => {
            eprintln!("Invalid sort key: {s} (final or raw)");
            std::process::exit(1);
        }
    }
}

fn require_nakshatra(s: &str) -> Nakshatra {
    Nakshatra::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid nakshatra: {s}");
        std::process::exit(1);
    })
}

fn require_rashi(s: &str) -> Rashi {
    Rashi::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid rashi: {s}");
        std::process::exit(1);
    })
}

/// Party from a star name and an optional sign; the sign may be omitted
/// only when the nakshatra lies within a single rashi.
fn require_party(nakshatra: &str, rashi: Option<&str>) -> MatchParty {
    let nakshatra = require_nakshatra(nakshatra);
    let spans = rashis_for_nakshatra(nakshatra);
    let rashi = match (rashi, spans.as_slice()) {
        (Some(r), _) => require_rashi(r),
        (None, [only]) => *only,
        (None, _) => {
            eprintln!("{} spans two rashis; give --*-rashi", nakshatra.name());
            std::process::exit(1);
        }
    };
    if !spans.contains(&rashi) {
        eprintln!("{} does not fall in {}", nakshatra.name(), rashi.name());
        std::process::exit(1);
    }
    MatchParty::new(nakshatra, rashi)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "JSON encoding failed"));
}

fn print_chart(chart: &Chart) {
    println!("JD (UT): {:.6}", chart.jd_ut);
    println!("Ayanamsha: {:.4} deg", chart.ayanamsha_deg);
    for p in &chart.positions {
        let info = rashi_from_longitude(p.longitude_deg);
        println!(
            "{:<10} {:>9.4}  {:<10} {}",
            p.body.name(),
            p.longitude_deg,
            info.rashi.name(),
            info.dms
        );
    }
    println!(
        "Moon: {} pada {}, {}; navamsa {}",
        chart.moon.nakshatra,
        chart.moon.pada,
        chart.moon.rashi.name(),
        chart.moon_navamsa_rashi.name()
    );
}

fn print_report(report: &MatchReport) {
    println!(
        "Boy:  {} ({})    Girl: {} ({})",
        report.boy_party.nakshatra,
        report.boy_party.rashi.name(),
        report.girl_party.nakshatra,
        report.girl_party.rashi.name()
    );
    println!();
    println!("{:<8} {:>5} {:>5} {:>4}  {}", "Koota", "Raw", "Final", "Max", "Notes");
    for k in &report.kootas {
        let note = match k.cancellation_reason {
            Some(reason) => format!("{} [restored: {reason}]", k.rationale),
            None => k.rationale.clone(),
        };
        println!(
            "{:<8} {:>5.1} {:>5.1} {:>4.0}  {note}",
            k.koota.name(),
            k.raw_score,
            k.final_score,
            k.max_score
        );
    }
    println!();
    println!("Total: {:.1}/36 (raw {:.1})", report.final_total, report.raw_total);
    println!(
        "Rajju: {}  Vedha: {}  Safety: {}",
        report.rajju.name(),
        report.vedha.name(),
        report.safety.name()
    );
    println!(
        "Mahendra: {}  Stree Deergha: {}",
        if report.poruthams.mahendra { "Yes" } else { "No" },
        report.poruthams.stree_deergha.name()
    );
    for (who, party) in [("Boy", &report.boy), ("Girl", &report.girl)] {
        if let Some(k) = &party.kuja_dosha {
            println!("{who} Kuja Dosha: {}", k.status.name());
        }
        if let Some(d) = &party.dasha {
            println!(
                "{who} dasha: {} / {} ({})",
                d.lord.name(),
                d.antardasha.lord.name(),
                d.tone.name()
            );
        }
    }
    println!("Verdict: {}", report.verdict);
}
