use std::path::PathBuf;

use astrolabe_rs::{
    AstrolabeError, Body, BodyObservation, ChartConfig, ChartRequest, EquatorialCoord, Instant,
    ProviderWindow, compute_body_positions, compute_house_chart, deg_to_dms, delta_t_seconds,
    ecliptic_to_zodiac, horizons_query, julian_day_ut,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "astrolabe", about = "Tropical chart calculator")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascendant, MC and house cusps for a date, time and place
    Houses {
        /// Date: YYYY-MM-DD or "bc YYYY-Mon-DD"
        #[arg(long)]
        date: String,
        /// UTC time: HH:MM or HH:MM:SS
        #[arg(long)]
        time: String,
        /// Geographic latitude in degrees (north positive)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Geographic longitude in degrees (east positive)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// House system: placidus, equal, whole-sign, koch
        #[arg(long)]
        system: Option<String>,
    },
    /// Zodiac sign and position from ecliptic longitude
    Zodiac {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ecliptic longitude/latitude of date from apparent RA/Dec
    Ecliptic {
        /// Right ascension in degrees
        #[arg(long, allow_hyphen_values = true)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_hyphen_values = true)]
        dec: f64,
        /// Date: YYYY-MM-DD or "bc YYYY-Mon-DD"
        #[arg(long)]
        date: String,
        /// UTC time: HH:MM or HH:MM:SS
        #[arg(long)]
        time: String,
        /// Label carried into the output
        #[arg(long, default_value = "body")]
        body: String,
    },
    /// Julian Day (UT and TT) for a civil instant
    JulianDay {
        /// Date: YYYY-MM-DD or "bc YYYY-Mon-DD"
        #[arg(long)]
        date: String,
        /// UTC time: HH:MM or HH:MM:SS
        #[arg(long)]
        time: String,
    },
    /// One-minute provider query window and parameters
    ProviderWindow {
        /// Date: YYYY-MM-DD or "bc YYYY-Mon-DD"
        #[arg(long)]
        date: String,
        /// UTC time: HH:MM or HH:MM:SS
        #[arg(long)]
        time: String,
        /// Body name ("Mars") or provider code ("499")
        #[arg(long, default_value = "Sun")]
        body: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

#[derive(Serialize)]
struct JulianDayReport {
    instant: String,
    jd_ut: f64,
    delta_t_seconds: f64,
    jd_tt: f64,
}

#[derive(Serialize)]
struct ProviderQueryReport {
    body: Body,
    window: ProviderWindow,
    params: Vec<(&'static str, String)>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig, AstrolabeError> {
    match path {
        Some(p) => ChartConfig::load(p),
        None => Ok(ChartConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AstrolabeError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| AstrolabeError::Config(e.to_string()))?;
    println!("{text}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), AstrolabeError> {
    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "configuration loaded");
    match cli.command {
        Commands::Houses {
            date,
            time,
            lat,
            lon,
            system,
        } => {
            let request = ChartRequest {
                date,
                time,
                latitude: lat,
                longitude: lon,
                house_system: system,
            };
            let chart = compute_house_chart(&request, &config)?;
            if cli.json {
                return print_json(&chart);
            }
            println!("Instant:    {} UTC", chart.instant);
            println!("System:     {}", chart.system);
            println!("JD (UT):    {:.6}", chart.jd_ut);
            println!("ΔT:         {:.2} s", chart.delta_t_seconds);
            println!("LST:        {:.6} deg", chart.lst_deg);
            println!("Obliquity:  {:.6} deg", chart.obliquity_deg);
            println!(
                "Ascendant:  {:.6} deg  {}",
                chart.angles.ascendant_deg, chart.ascendant_position
            );
            println!(
                "MC:         {:.6} deg  {}",
                chart.angles.midheaven_deg, chart.midheaven_position
            );
            for (i, (cusp, pos)) in chart
                .cusps
                .cusps
                .iter()
                .zip(chart.cusp_positions.iter())
                .enumerate()
            {
                println!("House {:>2}:   {cusp:>10.4} deg  {pos}", i + 1);
            }
        }
        Commands::Zodiac { lon } => {
            let pos = ecliptic_to_zodiac(lon)?;
            if cli.json {
                return print_json(&pos);
            }
            println!("{pos}");
            println!(
                "Element: {:?}, modality: {:?}, ruler: {}",
                pos.sign.element(),
                pos.sign.modality(),
                pos.sign.ruler()
            );
        }
        Commands::Ecliptic {
            ra,
            dec,
            date,
            time,
            body,
        } => {
            let observation = BodyObservation {
                body,
                equatorial: EquatorialCoord::new(ra, dec),
                instant: Instant::parse(&date, &time)?,
            };
            let positions = compute_body_positions(&[observation], &config)?;
            if cli.json {
                return print_json(&positions);
            }
            for p in &positions {
                println!(
                    "{}: lon {:.6} deg, lat {:.6} deg  {}",
                    p.body, p.ecliptic.lon_deg, p.ecliptic.lat_deg, p.zodiac
                );
            }
        }
        Commands::JulianDay { date, time } => {
            let instant = Instant::parse(&date, &time)?;
            let jd_ut = julian_day_ut(&instant);
            let delta_t = delta_t_seconds(instant.date().astronomical_year());
            let report = JulianDayReport {
                instant: instant.to_string(),
                jd_ut: jd_ut.value(),
                delta_t_seconds: delta_t,
                jd_tt: jd_ut.to_tt(delta_t).value(),
            };
            if cli.json {
                return print_json(&report);
            }
            println!("JD (UT): {:.9}", report.jd_ut);
            println!("ΔT:      {:.3} s", report.delta_t_seconds);
            println!("JD (TT): {:.9}", report.jd_tt);
        }
        Commands::ProviderWindow { date, time, body } => {
            let body: Body = body.parse()?;
            let window = ProviderWindow::one_minute(&Instant::parse(&date, &time)?)?;
            let params = horizons_query(body, &window, &config.provider_step);
            if cli.json {
                return print_json(&ProviderQueryReport {
                    body,
                    window,
                    params,
                });
            }
            println!("Start: {}", window.start);
            println!("Stop:  {}", window.stop);
            if let Some((start, stop)) = &window.fallback {
                println!("Fallback: {start} .. {stop}");
            }
            for (key, value) in &params {
                println!("  {key}={value}");
            }
        }
        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg)?;
            if cli.json {
                return print_json(&dms);
            }
            let sign = if dms.negative { "-" } else { "" };
            println!(
                "{sign}{} deg {} min {:.2} sec",
                dms.degrees, dms.minutes, dms.seconds
            );
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
