//! Human-scaled crack time strings.

use crate::brute_force::CrackTime;

/// Displayed for keyspaces too large to represent.
pub const OVERFLOW_DISPLAY: &str = "> 1 M years";

/// How many days make up a displayed "year".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearScale {
    /// 1000 days per year, matching the figures users have already seen.
    #[default]
    Legacy,
    /// 365 days per year.
    Calendar,
}

impl YearScale {
    fn days_per_year(&self) -> f64 {
        match self {
            YearScale::Legacy => 1000.0,
            YearScale::Calendar => 365.0,
        }
    }
}

/// Formatting options for `format_duration_with`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationFormat {
    pub year_scale: YearScale,
}

/// Formats a crack time using the default (`Legacy`) year scale.
pub fn format_duration(time: CrackTime) -> String {
    format_duration_with(time, DurationFormat::default())
}

/// Formats a crack time as `"<value> <unit>"` with one decimal place.
///
/// The value is scaled up the `s -> min -> h -> d -> y` chain until it is
/// smaller than the next unit's divisor.
pub fn format_duration_with(time: CrackTime, format: DurationFormat) -> String {
    let seconds = match time {
        CrackTime::Seconds(s) if s.is_finite() => s,
        _ => return OVERFLOW_DISPLAY.to_string(),
    };

    let units = [
        (60.0, "min"),
        (60.0, "h"),
        (24.0, "d"),
        (format.year_scale.days_per_year(), "y"),
    ];

    let mut value = seconds;
    let mut label = "s";
    for (factor, next_label) in units {
        if value < factor {
            break;
        }
        value /= factor;
        label = next_label;
    }

    format!("{:.1} {}", value, label)
}
