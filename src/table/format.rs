//! Display text for metric and metadata cells.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::topology::{DataType, Field, FieldValue, MetricFormat};
use crate::util::format_bytes;

const SI_PREFIXES: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedText {
    pub text: String,
    pub title: String,
}

/// Two significant digits with an SI suffix, e.g. `1.2k` or `35M`.
pub fn format_large_value(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    let mut group = (magnitude.log10().floor() / 3.0).floor().max(0.0) as usize;
    group = group.min(SI_PREFIXES.len() - 1);
    let mut scaled = magnitude / 1000f64.powi(group as i32);

    let mut digits = scaled.log10().floor() as i32 + 1;
    let mut rounded = round_significant(scaled, digits);
    if rounded >= 1000.0 && group + 1 < SI_PREFIXES.len() {
        group += 1;
        scaled = rounded / 1000.0;
        digits = scaled.log10().floor() as i32 + 1;
        rounded = round_significant(scaled, digits);
    }

    let decimals = (2 - digits).max(0) as usize;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.decimals$}{}", SI_PREFIXES[group])
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let shift = digits - 2;
    if shift > 0 {
        let divisor = 10f64.powi(shift);
        (value / divisor).round() * divisor
    } else {
        let factor = 10f64.powi(-shift);
        (value * factor).round() / factor
    }
}

pub fn format_metric(value: &FieldValue, format: Option<MetricFormat>) -> String {
    let Some(number) = value.as_number() else {
        return value.to_string();
    };

    match format {
        Some(MetricFormat::Integer) => {
            if (0.0..1100.0).contains(&number) {
                format!("{number:.0}")
            } else {
                format_large_value(number)
            }
        }
        Some(MetricFormat::Number) => format_number(number),
        Some(MetricFormat::Percent) => format!("{}%", format_number(number)),
        Some(MetricFormat::Filesize) => format_bytes(number.max(0.0) as u64),
        None => value.to_string(),
    }
}

fn format_number(number: f64) -> String {
    if (0.0..1100.0).contains(&number) {
        format!("{number:.2}")
    } else {
        format_large_value(number)
    }
}

pub fn format_data_type(field: &Field, reference: Option<DateTime<Utc>>) -> FormattedText {
    let plain = || {
        let text = field.value.to_string();
        FormattedText {
            title: text.clone(),
            text,
        }
    };

    if field.data_type != Some(DataType::Datetime) {
        return plain();
    }

    let FieldValue::Text(raw) = &field.value else {
        return plain();
    };
    let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) else {
        return plain();
    };
    let timestamp = timestamp.with_timezone(&Utc);

    let text = match reference {
        Some(reference) => relative_age(timestamp, reference),
        None => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    FormattedText {
        text,
        title: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

fn relative_age(timestamp: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let seconds = (reference - timestamp).num_seconds();
    let (amount, future) = if seconds < 0 {
        (-seconds, true)
    } else {
        (seconds, false)
    };

    let phrase = match amount {
        0..=44 => "a few seconds".to_owned(),
        45..=89 => "a minute".to_owned(),
        90..=2_699 => format!("{} minutes", (amount + 30) / 60),
        2_700..=5_399 => "an hour".to_owned(),
        5_400..=79_199 => format!("{} hours", (amount + 1_800) / 3_600),
        79_200..=129_599 => "a day".to_owned(),
        _ => format!("{} days", (amount + 43_200) / 86_400),
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}
