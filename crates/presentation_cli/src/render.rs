//! Report rendering
//!
//! Pure string builders for the current-conditions card and the per-day
//! forecast cards. Printing happens only in main, so everything here is
//! directly testable.

use application::WeatherReport;
use chrono::NaiveDate;
use domain::value_objects::ConditionClass;

const RESET: &str = "\x1b[0m";

/// Render the full report: banner, current conditions, forecast cards
#[must_use]
pub fn render_report(report: &WeatherReport) -> String {
    let mut out = String::new();
    out.push_str(&render_banner(&report.current.location_name, &report.current.condition));
    out.push_str(&render_current(report));
    if !report.daily.is_empty() {
        out.push_str(&render_daily(report));
    }
    out
}

/// Location banner, colored by the broad condition class
fn render_banner(location: &str, condition: &str) -> String {
    let class = ConditionClass::classify(condition);
    format!("{}=== {location} ==={RESET}\n\n", class.ansi_color())
}

/// Current-conditions card
fn render_current(report: &WeatherReport) -> String {
    let current = &report.current;
    format!(
        "Temperature: {}\nWeather:     {}\nHumidity:    {}\nWind Speed:  {:.1} {}\n",
        current.temperature,
        current.description,
        current.humidity,
        current.wind_speed,
        report.units.wind_speed_suffix(),
    )
}

/// Per-day forecast cards
fn render_daily(report: &WeatherReport) -> String {
    let mut out = String::from("\n5-Day Forecast\n");
    for day in &report.daily {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            friendly_date(&day.date),
            day.sample.temperature,
            day.sample.description,
        ));
    }
    out
}

/// Format a "YYYY-MM-DD" date key as "Mon 15 Jan"; fall back to the raw key
/// if the provider ever sends something unexpected
fn friendly_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%a %d %b").to_string())
}
