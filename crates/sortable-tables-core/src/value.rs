//! Raw cell value parsing for `number` and `date` columns

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Characters removed from numeric cells before parsing
const NUMBER_NOISE: [char; 2] = ['$', ','];

const DATE_TIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
	"%Y/%m/%d %H:%M:%S",
	"%Y/%m/%d %H:%M",
	"%m/%d/%Y %H:%M:%S",
	"%m/%d/%Y %H:%M",
	"%b %d, %Y %H:%M:%S",
	"%B %d, %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
	"%Y-%m-%d",
	"%Y/%m/%d",
	"%m/%d/%Y",
	"%b %d, %Y",
	"%B %d, %Y",
	"%d %b %Y",
	"%d %B %Y",
	"%a %b %d %Y",
];

/// Parses a numeric cell value.
///
/// `$` and `,` are stripped, then the longest leading decimal literal is
/// parsed, so `"$1,200"` is `1200.0` and `"12 kg"` is `12.0`. Returns
/// `None` when no digits lead the value.
pub fn parse_number(raw: &str) -> Option<f64> {
	let cleaned: String = raw.chars().filter(|c| !NUMBER_NOISE.contains(c)).collect();
	parse_float_prefix(&cleaned)
}

fn parse_float_prefix(input: &str) -> Option<f64> {
	let s = input.trim_start();
	let bytes = s.as_bytes();
	let mut pos = 0;

	let negative = match bytes.first() {
		Some(b'-') => {
			pos += 1;
			true
		}
		Some(b'+') => {
			pos += 1;
			false
		}
		_ => false,
	};

	if s[pos..].starts_with("Infinity") {
		return Some(if negative {
			f64::NEG_INFINITY
		} else {
			f64::INFINITY
		});
	}

	let int_start = pos;
	while pos < bytes.len() && bytes[pos].is_ascii_digit() {
		pos += 1;
	}
	let integer = &s[int_start..pos];

	let mut fraction = "";
	if pos < bytes.len() && bytes[pos] == b'.' {
		let frac_start = pos + 1;
		let mut end = frac_start;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if !integer.is_empty() || end > frac_start {
			fraction = &s[frac_start..end];
			pos = end;
		}
	}

	if integer.is_empty() && fraction.is_empty() {
		return None;
	}

	let mut exponent = "";
	if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
		let mut end = pos + 1;
		if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
			end += 1;
		}
		let digits_start = end;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if end > digits_start {
			exponent = &s[pos + 1..end];
		}
	}

	let mut literal = String::with_capacity(integer.len() + fraction.len() + exponent.len() + 4);
	if negative {
		literal.push('-');
	}
	literal.push_str(if integer.is_empty() { "0" } else { integer });
	if !fraction.is_empty() {
		literal.push('.');
		literal.push_str(fraction);
	}
	if !exponent.is_empty() {
		literal.push('e');
		literal.push_str(exponent);
	}

	literal.parse::<f64>().ok()
}

/// Parses a date cell value into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339, RFC 2822 and the common `YYYY-MM-DD`, `MM/DD/YYYY`
/// and `Month DD, YYYY` shapes, with optional time. Values without an
/// offset are read as UTC on native targets and as local time on WASM,
/// where anything chrono rejects is handed to `Date.parse`; that keeps a
/// column mixing both kinds on a single interpretation.
pub fn parse_date(raw: &str) -> Option<i64> {
	let value = raw.trim();
	if value.is_empty() {
		return None;
	}

	parse_date_chrono(value).or_else(|| parse_date_js(value))
}

fn parse_date_chrono(value: &str) -> Option<i64> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
		return Some(dt.timestamp_millis());
	}
	if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
		return Some(dt.timestamp_millis());
	}

	DATE_TIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
		.or_else(|| {
			DATE_FORMATS
				.iter()
				.find_map(|format| NaiveDate::parse_from_str(value, format).ok())
				.and_then(|date| date.and_hms_opt(0, 0, 0))
		})
		.and_then(naive_millis)
}

#[cfg(not(target_arch = "wasm32"))]
fn naive_millis(dt: NaiveDateTime) -> Option<i64> {
	Some(dt.and_utc().timestamp_millis())
}

/// Reads an offset-less value as local time, the way `Date.parse` does
#[cfg(target_arch = "wasm32")]
fn naive_millis(dt: NaiveDateTime) -> Option<i64> {
	use chrono::{Datelike, Timelike};

	let date = js_sys::Date::new_with_year_month_day_hr_min_sec_milli(
		u32::try_from(dt.year()).ok()?,
		dt.month0() as i32,
		dt.day() as i32,
		dt.hour() as i32,
		dt.minute() as i32,
		dt.second() as i32,
		(dt.nanosecond() / 1_000_000) as i32,
	);
	let millis = date.get_time();
	millis.is_finite().then_some(millis as i64)
}

#[cfg(target_arch = "wasm32")]
fn parse_date_js(value: &str) -> Option<i64> {
	let millis = js_sys::Date::parse(value);
	millis.is_finite().then_some(millis as i64)
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_date_js(_value: &str) -> Option<i64> {
	None
}
