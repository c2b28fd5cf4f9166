use chrono::TimeZone;
use chrono_tz::America::Chicago;
use tracing_subscriber::EnvFilter;

use tidal_astro::{astro, julian_date, NodeFactor, Parameter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 7, 0, 0).unwrap();
    let a = astro(&dt);

    println!("=== Astronomical Arguments ===");
    println!("Date/Time: {}", dt);
    println!("Julian Date: {:.6}", julian_date(&dt));
    println!();
    println!("{:>6}  {:>12}  {:>14}", "key", "value (°)", "speed (°/h)");
    for (parameter, value) in a.iter() {
        let speed = value
            .speed
            .map_or_else(|| "-".to_string(), |s| format!("{:.10}", s));
        println!("{:>6}  {:>12.6}  {:>14}", parameter.name(), value.value, speed);
    }
    println!();
    println!("--- Node Factors ---");
    for (name, factor) in [
        ("M2", NodeFactor::M2),
        ("S2", NodeFactor::Unity),
        ("K1", NodeFactor::K1),
        ("O1", NodeFactor::O1),
        ("K2", NodeFactor::K2),
        ("M4", NodeFactor::Modd(4)),
    ] {
        println!(
            "{:>3}: f = {:.4}, u = {:.3}°",
            name,
            factor.f(&a),
            tidal_astro::normalize_angle(factor.u(&a))
        );
    }
    println!();
    println!(
        "M2 equilibrium argument: {:.3}°",
        tidal_astro::normalize_angle(2.0 * a[Parameter::TPlusHMinusS].value)
    );
}
