use crate::dynamics::state::normalize_heading;

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

const MAX_DECIMALS: usize = 3;

/// Thousands-grouped number: `1234567.5` -> `"1,234,567.5"`.
///
/// At most three decimals, trailing zeros dropped, `-0` printed as `0`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_DECIMALS, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

pub fn format_speed(speed: f64) -> String {
    format!("{} m/s", format_grouped(speed))
}

pub fn format_altitude(altitude: f64) -> String {
    format!("{} m", format_grouped(altitude))
}

/// Whole degrees in `[0, 360)` with a degree sign.
pub fn format_heading(heading: f64) -> String {
    let mut whole = normalize_heading(heading).round() as i64;
    if whole == 360 {
        whole = 0;
    }
    format!("{whole}°")
}

// ---------------------------------------------------------------------------
// Degrees-minutes-seconds
// ---------------------------------------------------------------------------

/// Decimal degrees to `D° MM' SS" H`.
///
/// Seconds are rounded and carried into minutes and degrees, so the
/// output never shows `60`. `H` is `E`/`W` for longitude, `N`/`S` otherwise.
pub fn format_dms(decimal_degrees: f64, is_longitude: bool) -> String {
    let total_seconds = (decimal_degrees.abs() * 3600.0).round() as u64;
    let degrees = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let negative = decimal_degrees < 0.0 && total_seconds > 0;
    let hemisphere = match (is_longitude, negative) {
        (true, true) => 'W',
        (true, false) => 'E',
        (false, true) => 'S',
        (false, false) => 'N',
    };

    format!("{degrees}° {minutes:02}' {seconds:02}\" {hemisphere}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(700.0), "700");
        assert_eq!(format_grouped(3000.0), "3,000");
        assert_eq!(format_grouped(1_234_567.5), "1,234,567.5");
        assert_eq!(format_grouped(-1234.5678), "-1,234.568");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(999.9999), "1,000");
    }

    #[test]
    fn units() {
        assert_eq!(format_speed(700.0), "700 m/s");
        assert_eq!(format_altitude(12_500.0), "12,500 m");
    }

    #[test]
    fn heading_is_whole_and_normalized() {
        assert_eq!(format_heading(180.0), "180°");
        assert_eq!(format_heading(-90.0), "270°");
        assert_eq!(format_heading(359.7), "0°");
        assert_eq!(format_heading(725.2), "5°");
    }

    #[test]
    fn dms_west_longitude() {
        assert_eq!(format_dms(-122.4194, true), "122° 25' 10\" W");
    }

    #[test]
    fn dms_hemispheres() {
        assert_eq!(format_dms(37.7749, false), "37° 46' 30\" N");
        assert_eq!(format_dms(-33.8688, false), "33° 52' 08\" S");
        assert_eq!(format_dms(151.2093, true), "151° 12' 33\" E");
    }

    #[test]
    fn dms_carries_rounded_seconds() {
        // 10.999999° is 10° 59' 59.9964" which rounds up to a whole degree
        assert_eq!(format_dms(10.999_999, false), "11° 00' 00\" N");
    }

    #[test]
    fn dms_zero_is_positive_hemisphere() {
        assert_eq!(format_dms(0.0, true), "0° 00' 00\" E");
        assert_eq!(format_dms(-0.00001, false), "0° 00' 00\" N");
    }
}
