//! ISO 8601 durations (`P1Y2M3DT4H5M6S`) to human-readable text.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

/// Overall shape: `P`, an optional date part, then an optional `T` and time part
static DURATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P([^T]*)(?:T(.*))?$").expect("Invalid duration regex"));

/// One `(number)(unit)` pair inside either part
static COMPONENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)(\w)").expect("Invalid duration component regex"));

/// Which side of the `T` separator a component came from.
/// `M` is months before `T` and minutes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Date,
    Time,
}

/// Convert an ISO 8601 duration into a phrase such as `"1 hour, 30 minutes"`.
///
/// Input that doesn't look like a duration at all is returned unchanged
/// (with a warning) rather than treated as an error.
pub fn humanize(duration: &str) -> String {
    let Some(caps) = DURATION_REGEX.captures(duration) else {
        warn!("Duration in unexpected format: {duration:?}");
        return duration.to_string();
    };

    let date_part = caps.get(1).map_or("", |m| m.as_str());
    let time_part = caps.get(2).map_or("", |m| m.as_str());

    components(date_part, Part::Date)
        .chain(components(time_part, Part::Time))
        .collect::<Vec<_>>()
        .join(", ")
}

fn components(text: &str, part: Part) -> impl Iterator<Item = String> + '_ {
    COMPONENT_REGEX.captures_iter(text).map(move |caps| {
        let number = &caps[1];
        let unit = &caps[2];
        phrase(number, unit, part)
    })
}

fn phrase(number: &str, unit: &str, part: Part) -> String {
    let mut out = format!("{number} {}", unit_name(unit, part));
    // the component regex only admits digits with an optional fraction
    if number.parse::<f64>().is_ok_and(|n| n > 1.0) {
        out.push('s');
    }
    out
}

fn unit_name(unit: &str, part: Part) -> &str {
    match (part, unit) {
        (Part::Date, "Y") => "year",
        (Part::Date, "M") => "month",
        (Part::Date, "W") => "week",
        (Part::Date, "D") => "day",
        (Part::Time, "H") => "hour",
        (Part::Time, "M") => "minute",
        (Part::Time, "S") => "second",
        _ => {
            warn!("Duration unit not recognised: {unit}");
            unit
        }
    }
}
