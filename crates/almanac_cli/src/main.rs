use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};

use almanac_rs::{
    AlmanacConfig, ApsisEvent, ApsisPair, Celestial, GeoPosition, InstantFields,
    LunarEclipseDetails, RiseSetResult, RiseSetStatus, SolarEclipseDetails,
};
use almanac_time::{
    centuries_since_j2000, decimal_year, delta_t_seconds, instant_to_jd, jd_to_calendar,
    parse_instant, try_jd_to_instant,
};

#[derive(Parser)]
#[command(name = "almanac", about = "Sun and Moon almanac CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// JSON file with AlmanacConfig overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Location {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// UTC date or datetime (YYYY-MM-DD[Thh:mm[:ss]][Z]); default now
    #[arg(long)]
    date: Option<String>,
    /// Local UTC offset in hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    offset: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset, twilights and the Sun's position
    Sun(Location),
    /// Moonrise, moonset, illumination and the Moon's position
    Moon(Location),
    /// Last and next visible solar and lunar eclipses
    Eclipse(Location),
    /// Lunar perigee and apogee around a date
    Apsides {
        /// UTC date or datetime; default now
        #[arg(long)]
        date: Option<String>,
        /// Local UTC offset in hours
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: f64,
    },
    /// Everything for a position and date
    All(Location),
    /// Julian Date of a UTC instant
    Jd {
        /// UTC date or datetime
        date: String,
    },
    /// Calendar instant of a Julian Date
    Calendar {
        /// Julian Date (UT)
        jd: f64,
    },
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&Path>) -> AlmanacConfig {
    let Some(path) = path else {
        return AlmanacConfig::default();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
    let config: AlmanacConfig = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
    config.validate().unwrap_or_else(|e| fail(e));
    config
}

fn parse_date(date: Option<&str>) -> DateTime<Utc> {
    match date {
        Some(s) => parse_instant(s).unwrap_or_else(|e| fail(e)),
        None => Utc::now(),
    }
}

fn compute_at(loc: &Location, config: &AlmanacConfig) -> Celestial {
    let position = GeoPosition::new(loc.lat, loc.lon);
    let instant = parse_date(loc.date.as_deref());
    almanac_rs::compute_local(&position, &instant, loc.offset, config).unwrap_or_else(|e| fail(e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn fmt_time(t: Option<DateTime<FixedOffset>>) -> String {
    t.map_or_else(|| "--".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S %:z").to_string())
}

fn print_riseset(label: &str, r: &RiseSetResult, rise: &str, set: &str) {
    match r.status {
        RiseSetStatus::UpAllDay => println!("  {label:14} up all day"),
        RiseSetStatus::DownAllDay => println!("  {label:14} down all day"),
        _ => {
            println!("  {label:14} {rise:5} {}", fmt_time(r.rise));
            println!("  {:14} {set:5} {}", "", fmt_time(r.set));
        }
    }
}

fn print_header(c: &Celestial) {
    println!(
        "{} at {:.4}°N, {:.4}°E\n",
        c.instant.format("%Y-%m-%d %H:%M:%S %:z"),
        c.position.latitude_deg,
        c.position.longitude_deg
    );
}

fn print_sun(c: &Celestial) {
    let s = &c.sun;
    println!("Sun");
    print_riseset("rise/set", &s.events.sunrise_sunset, "rise", "set");
    print_riseset("lower limb", &s.events.bottom_of_disc, "end", "start");
    print_riseset("civil", &s.events.civil, "dawn", "dusk");
    print_riseset("nautical", &s.events.nautical, "dawn", "dusk");
    print_riseset("astronomical", &s.events.astronomical, "dawn", "dusk");
    println!("  {:14} {}", "solar noon", fmt_time(s.events.solar_noon));
    println!(
        "  {:14} alt {:.2}° az {:.2}° ({})",
        "position",
        s.horizontal.altitude_deg,
        s.horizontal.azimuth_deg,
        if s.is_up { "up" } else { "down" }
    );
    println!("  {:14} {:.0} km", "distance", s.distance.km());
}

fn print_apsis(label: &str, ev: &ApsisEvent) {
    if ev.is_none() {
        println!("  {label:14} --");
        return;
    }
    println!(
        "  {label:14} {}  {:.0} km  parallax {:.1}\"",
        fmt_time(ev.instant),
        ev.distance.km(),
        ev.horizontal_parallax_arcsec
    );
}

fn print_apsides(perigee: &ApsisPair, apogee: &ApsisPair) {
    print_apsis("last perigee", &perigee.last);
    print_apsis("next perigee", &perigee.next);
    print_apsis("last apogee", &apogee.last);
    print_apsis("next apogee", &apogee.next);
}

fn print_moon(c: &Celestial) {
    let m = &c.moon;
    println!("Moon");
    print_riseset("rise/set", &m.rise_set, "rise", "set");
    println!(
        "  {:14} alt {:.2}° az {:.2}° ({})",
        "position",
        m.horizontal.altitude_deg,
        m.horizontal.azimuth_deg,
        if m.is_up { "up" } else { "down" }
    );
    println!("  {:14} {:.0} km", "distance", m.distance.km());
    let i = &m.illumination;
    let folk = i
        .full_moon_name
        .map(|n| format!(", {n}"))
        .unwrap_or_default();
    println!(
        "  {:14} {:.1}% lit, phase {:.3}, {}{folk}",
        "illumination",
        i.fraction * 100.0,
        i.phase,
        i.phase_name
    );
    print_apsides(&m.perigee, &m.apogee);
}

fn print_solar_eclipse(label: &str, e: Option<&SolarEclipseDetails>) {
    let Some(e) = e else {
        println!("  {label:14} --");
        return;
    };
    println!(
        "  {label:14} {} {:?} (global {:?}), magnitude {:.3}",
        e.date, e.eclipse_type, e.global_type, e.magnitude
    );
    println!("  {:14} begin {}", "", fmt_time(e.partial_begin));
    println!("  {:14} max   {}  sun alt {:.1}°", "", fmt_time(e.maximum), e.sun_altitude_deg);
    println!("  {:14} end   {}", "", fmt_time(e.partial_end));
}

fn print_lunar_eclipse(label: &str, e: Option<&LunarEclipseDetails>) {
    let Some(e) = e else {
        println!("  {label:14} --");
        return;
    };
    println!(
        "  {label:14} {} {:?}, umbral magnitude {:.3}",
        e.date, e.eclipse_type, e.umbral_magnitude
    );
    println!("  {:14} begin {}", "", fmt_time(e.penumbral_begin));
    println!("  {:14} max   {}", "", fmt_time(e.maximum));
    println!("  {:14} end   {}", "", fmt_time(e.penumbral_end));
}

fn print_eclipses(c: &Celestial) {
    println!("Eclipses");
    print_solar_eclipse("last solar", c.eclipses.solar.last.as_ref());
    print_solar_eclipse("next solar", c.eclipses.solar.next.as_ref());
    print_lunar_eclipse("last lunar", c.eclipses.lunar.last.as_ref());
    print_lunar_eclipse("next lunar", c.eclipses.lunar.next.as_ref());
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Sun(loc) => {
            let c = compute_at(&loc, &config);
            if cli.json {
                print_json(&c.sun);
            } else {
                print_header(&c);
                print_sun(&c);
            }
        }

        Commands::Moon(loc) => {
            let c = compute_at(&loc, &config);
            if cli.json {
                print_json(&c.moon);
            } else {
                print_header(&c);
                print_moon(&c);
            }
        }

        Commands::Eclipse(loc) => {
            let c = compute_at(&loc, &config);
            if cli.json {
                print_json(&c.eclipses);
            } else {
                print_header(&c);
                print_eclipses(&c);
            }
        }

        Commands::Apsides { date, offset } => {
            let instant = parse_date(date.as_deref());
            let tz = almanac_rs::utc_offset(offset).unwrap_or_else(|e| fail(e));
            let perigee = almanac_rs::perigee(&instant).at_offset(tz);
            let apogee = almanac_rs::apogee(&instant).at_offset(tz);
            if cli.json {
                print_json(&serde_json::json!({ "perigee": perigee, "apogee": apogee }));
            } else {
                println!("Lunar apsides around {}\n", instant.with_timezone(&tz));
                print_apsides(&perigee, &apogee);
            }
        }

        Commands::All(loc) => {
            let c = compute_at(&loc, &config);
            if cli.json {
                print_json(&c);
            } else {
                print_header(&c);
                print_sun(&c);
                println!();
                print_moon(&c);
                println!();
                print_eclipses(&c);
            }
        }

        Commands::Jd { date } => {
            let instant = parse_instant(&date).unwrap_or_else(|e| fail(e));
            let jd = instant_to_jd(&instant);
            let year = decimal_year(&instant);
            if cli.json {
                print_json(&serde_json::json!({
                    "instant": instant,
                    "jd": jd,
                    "centuries_since_j2000": centuries_since_j2000(jd),
                    "delta_t_seconds": delta_t_seconds(year),
                }));
            } else {
                println!("JD    {jd:.6}");
                println!("T     {:.10}", centuries_since_j2000(jd));
                println!("ΔT    {:.1} s", delta_t_seconds(year));
            }
        }

        Commands::Calendar { jd } => {
            let instant = try_jd_to_instant(jd).unwrap_or_else(|e| fail(e));
            let (year, month, day) = jd_to_calendar(jd);
            if cli.json {
                print_json(&serde_json::json!({
                    "instant": instant,
                    "year": year,
                    "month": month,
                    "day": day,
                }));
            } else {
                println!("{}", instant.to_rfc3339());
                println!("{year}-{month:02}-{day:.6}");
            }
        }
    }
}
