//! daily — walk one teacher through a day of the attendance framework.
//!
//! Registers and logs in against an in-memory service, verifies location
//! from a fixed device position, marks attendance, then prints today's
//! dashboard and timetable.
//!
//! ```text
//! cargo run -p daily -- [config.toml]
//! RUST_LOG=debug cargo run -p daily
//! ```

use anyhow::Result;
use chrono::{Datelike, Local};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ta_core::{AttendanceConfig, ClockTime, GeoCoord, Weekday, minutes_of};
use ta_schedule::{Resolver, TimetableCache, WeekTimetable, load_week_csv, sample_week};
use ta_session::{
    Access, AttendanceWindow, Dashboard, FixedLocation, JsonFileStore, RecordingApi,
    Registration, Route, Session, flow, guard,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const EMAIL:    &str = "asha@example.org";
const PASSWORD: &str = "chalk";

/// ~110 m north of the institute.
const DEVICE_POSITION: GeoCoord = GeoCoord::new(17.436, 78.392648);

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<AttendanceConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(AttendanceConfig::from_file(path)?),
        None => Ok(AttendanceConfig::default()),
    }
}

fn load_week(config: &AttendanceConfig) -> Result<WeekTimetable> {
    let Some(path) = &config.timetable.csv else {
        return Ok(sample_week()?);
    };
    let report = load_week_csv(path)?;
    info!(
        path = %path.display(),
        entries = report.week.entry_count(),
        skipped = report.skipped.len(),
        "loaded timetable"
    );
    Ok(report.week)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    let fence = config.geofence()?;
    let window = AttendanceWindow::from(&config.attendance_window);
    let resolver = Resolver::new(config.timetable.window);
    let mut cache = TimetableCache::new(load_week(&config)?);

    let now = Local::now();
    let today = Weekday::from(now.weekday());
    let now_minutes = minutes_of(now.time());

    println!("=== daily — rust_ta attendance ===");
    println!("Institute: {}  |  Radius: {} m", fence.center, fence.radius_m);
    println!("{}, {}", today, ClockTime::from_naive(now.time()));
    println!();

    // 1. Session.
    let store = JsonFileStore::new(std::env::temp_dir().join("ta-daily-session.json"));
    let mut session = Session::load_from(&store)?;
    let api = RecordingApi::new();

    if session.is_authenticated() {
        info!("restored saved session");
    } else {
        flow::register(&api, &Registration {
            name:           "Asha Rao".into(),
            email:          EMAIL.into(),
            employee_id:    "EMP-204".into(),
            contact_number: "9876543210".into(),
            password:       PASSWORD.into(),
        })?;
        flow::login(&mut session, &store, &api, EMAIL, PASSWORD)?;
    }

    // 2. Location.
    let position = FixedLocation::at(DEVICE_POSITION);
    let check = flow::verify_location(&mut session, &position, &fence)?;
    println!(
        "Location: {:.1} m from institute ({})",
        check.distance_m,
        if check.within_radius { "inside" } else { "outside" }
    );

    // 3. Attendance.
    if guard(Route::Attendance, &session) == Access::Allowed && !session.attendance_marked() {
        if window.contains(now.time()) {
            let typed = now.time().format("%H:%M").to_string();
            flow::submit_attendance(&mut session, &store, &api, &typed)?;
            info!(time = %typed, "attendance submitted");
            println!("Attendance marked at {typed} (window closes in {})", window.countdown(now.time()));
        } else {
            let wait = window.until_next_open(now.time());
            println!(
                "Attendance window closed; opens in {}h {:02}m",
                wait.num_hours(),
                wait.num_minutes() % 60
            );
        }
    }
    println!();

    // 4. Dashboard.
    let day = cache.today(today);
    let dash = Dashboard::build(&session, day, resolver, now_minutes);
    println!("Attendance : {}", dash.attendance.as_str());
    println!("Location   : {}", dash.location.as_str());
    println!("Classes    : {}", dash.classes_label());
    match dash.current {
        Some(e) => println!("Now        : {} {} ({})", e.subject, e.class, e.room),
        None => println!("Now        : {}", dash.idle_message().unwrap_or_default()),
    }
    if let Some(e) = dash.next {
        println!("Next       : {} at {}", e.subject, e.time.start);
    }
    println!();

    // 5. Timetable.
    if day.is_empty() {
        println!("No classes today.");
        return Ok(());
    }
    let statuses = resolver.slot_statuses(day.entries(), now_minutes);
    println!("{:<22} {:<16} {:<18} {:<10}", "Time", "Class", "Subject", "Status");
    println!("{}", "-".repeat(70));
    for (entry, status) in day.entries().iter().zip(&statuses) {
        println!(
            "{:<22} {:<16} {:<18} {:<10}",
            entry.time.to_string(),
            entry.class,
            entry.subject,
            status,
        );
    }
    println!();
    println!("Total classes today: {}  |  {}", day.len(), dash.progress);

    Ok(())
}
