use chrono::Utc;
use suncalc::{get_position, get_times, moon_illumination, SunCalc};
use tracing_subscriber::EnvFilter;

fn main() -> suncalc::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (longitude, latitude) = (2.17, 41.39);
    let now = Utc::now();

    let sun = get_position(now, longitude, latitude);
    println!(
        "Sun: azimuth {:.2}°, altitude {:.2}°",
        sun.azimuth_from_north().to_degrees(),
        sun.altitude.to_degrees()
    );

    let times = get_times(now, longitude, latitude, 0.0);
    for (label, instant) in times.iter() {
        match instant.and_then(|t| t.to_utc()) {
            Some(t) => println!("{label:>16}: {}", t.format("%H:%M:%S UTC")),
            None => println!("{label:>16}: not reached"),
        }
    }
    if let Some(daylight) = times.daylight().and_then(|p| p.to_utc()) {
        println!("Daylight: {daylight}");
    }
    if let Some(length) = times.day_length() {
        println!("Day length: {:.2} h", length.value() * 24.0);
    }
    println!("Sun up now: {}", times.is_daylight(now));

    let calc = SunCalc::new().with_phase(-4.0, "blue_hour_start", "blue_hour_end");
    let batch = calc.times_batch(&[now], &[longitude], &[latitude, 78.22], &[0.0])?;
    for (row, lat) in batch.iter().zip([latitude, 78.22]) {
        println!("blue hour at {lat}°: {:?}", row.span("blue_hour_start", "blue_hour_end"));
    }

    let moon = moon_illumination(now);
    println!("Moon: {:.0}% illuminated, phase {:.2}", moon.fraction * 100.0, moon.phase);
    Ok(())
}
