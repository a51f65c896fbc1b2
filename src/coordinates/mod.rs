//! Coordinate parsing for constellation border files
//!
//! Border files store right ascension as sexagesimal `HH MM SS` text and
//! declination as decimal degrees. Both are converted to decimal degrees
//! rounded to 4 places, the precision carried through the whole dataset.

use crate::{Result, SkyatlasError};

/// Round a coordinate to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Parse a sexagesimal right ascension string (`"HH MM SS"`) into degrees.
///
/// The result is `15 * (hours + minutes/60 + seconds/3600)`, rounded to
/// 4 decimal places.
///
/// # Examples
///
/// ```
/// use skyatlas::coordinates::parse_ra;
///
/// assert_eq!(parse_ra("01 00 00.0").unwrap(), 15.0);
/// assert_eq!(parse_ra("00 30 00.0").unwrap(), 7.5);
/// ```
pub fn parse_ra(text: &str) -> Result<f64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(SkyatlasError::CoordinateError(format!(
            "expected three `H M S` tokens in right ascension, got {:?}",
            text
        )));
    }

    let numeric = |token: &str| -> Result<f64> {
        token.parse::<f64>().map_err(|_| {
            SkyatlasError::CoordinateError(format!(
                "non-numeric token {:?} in right ascension {:?}",
                token, text
            ))
        })
    };

    let hours = numeric(tokens[0])?;
    let minutes = numeric(tokens[1])?;
    let seconds = numeric(tokens[2])?;

    Ok(round4(15.0 * (hours + minutes / 60.0 + seconds / 3600.0)))
}

/// Parse a decimal declination string into degrees, rounded to 4 places.
pub fn parse_dec(text: &str) -> Result<f64> {
    let value = text.trim().parse::<f64>().map_err(|_| {
        SkyatlasError::CoordinateError(format!("non-numeric declination {:?}", text))
    })?;
    Ok(round4(value))
}

/// Format right ascension degrees back into the border-file sexagesimal
/// form (`HH MM SS.S`), the inverse of [`parse_ra`] within rounding.
pub fn format_ra(degrees: f64) -> String {
    // Work in tenths of a second so carries propagate cleanly.
    let total_tenths = (degrees / 15.0 * 36_000.0).round() as i64;
    let hours = total_tenths / 36_000;
    let minutes = (total_tenths % 36_000) / 600;
    let tenths = total_tenths % 600;
    format!("{:02} {:02} {:02}.{}", hours, minutes, tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case("00 00 00.0", 0.0)]
    #[case("01 00 00.0", 15.0)]
    #[case("00 30 00.0", 7.5)]
    #[case("12 00 00.0", 180.0)]
    #[case("18 06 36.0", 271.65)]
    #[case("23 59 59.9", 359.9996)]
    fn parses_sexagesimal_ra(#[case] text: &str, #[case] expected: f64) {
        assert_relative_eq!(parse_ra(text).unwrap(), expected);
    }

    #[test]
    fn ra_seconds_round_to_four_places() {
        // 1 second of time is 1/240 degree, which does not terminate.
        assert_relative_eq!(parse_ra("00 00 01.0").unwrap(), 0.0042);
    }

    #[rstest]
    #[case("12 30")]
    #[case("12 30 00 00")]
    #[case("ab cd ef")]
    #[case("12 xx 00.0")]
    #[case("")]
    fn rejects_malformed_ra(#[case] text: &str) {
        assert!(matches!(
            parse_ra(text),
            Err(SkyatlasError::CoordinateError(_))
        ));
    }

    #[rstest]
    #[case("0.00", 0.0)]
    #[case("10.00", 10.0)]
    #[case(" 5.25 ", 5.25)]
    #[case("-33.123456", -33.1235)]
    #[case("88.999949", 88.9999)]
    fn parses_decimal_dec(#[case] text: &str, #[case] expected: f64) {
        assert_relative_eq!(parse_dec(text).unwrap(), expected);
    }

    #[test]
    fn rejects_malformed_dec() {
        assert!(matches!(
            parse_dec("north"),
            Err(SkyatlasError::CoordinateError(_))
        ));
    }

    #[test]
    fn round4_rounds_half_away_from_zero() {
        assert_relative_eq!(round4(0.00005), 0.0001);
        assert_relative_eq!(round4(-0.00005), -0.0001);
        assert_relative_eq!(round4(12.34564), 12.3456);
    }

    #[rstest]
    #[case(0.0, "00 00 00.0")]
    #[case(15.0, "01 00 00.0")]
    #[case(7.5, "00 30 00.0")]
    #[case(271.65, "18 06 36.0")]
    fn formats_ra_degrees(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(format_ra(degrees), expected);
    }

    #[test]
    fn format_then_parse_round_trips() {
        for &degrees in &[0.1234, 42.0, 126.7251, 254.25, 359.9] {
            let parsed = parse_ra(&format_ra(degrees)).unwrap();
            // Tenth-of-a-second formatting limits agreement to ~4e-4 degrees.
            assert_relative_eq!(parsed, degrees, epsilon = 5e-4);
        }
    }
}
