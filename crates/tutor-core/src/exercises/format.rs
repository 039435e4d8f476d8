//! Default stream formatting for doubles
//!
//! Six significant digits, trailing zeros dropped, scientific notation when
//! the decimal exponent is below -4 or at least six (`%g` behaviour).

const PRECISION: usize = 6;

/// Render a double the way an unmanipulated output stream does
pub fn display_double(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision can bump the exponent (999999.7 -> 1e+06),
    // so take the exponent from the rounded scientific form
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(display_double(4.0), "4");
        assert_eq!(display_double(4.5), "4.5");
        assert_eq!(display_double(-0.5), "-0.5");
        assert_eq!(display_double(100.0), "100");
        assert_eq!(display_double(1.0 / 3.0), "0.333333");
        assert_eq!(display_double(2.0 / 3.0), "0.666667");
        assert_eq!(display_double(123456.7), "123457");
        assert_eq!(display_double(0.0001), "0.0001");
        assert_eq!(display_double(95.1), "95.1");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(display_double(1e6), "1e+06");
        assert_eq!(display_double(999999.7), "1e+06");
        assert_eq!(display_double(1234567.0), "1.23457e+06");
        assert_eq!(display_double(0.00001), "1e-05");
        assert_eq!(display_double(-2.5e-7), "-2.5e-07");
        assert_eq!(display_double(1e100), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(display_double(0.0), "0");
        assert_eq!(display_double(-0.0), "-0");
        assert_eq!(display_double(f64::INFINITY), "inf");
        assert_eq!(display_double(f64::NEG_INFINITY), "-inf");
        assert!(display_double(f64::NAN).ends_with("nan"));
    }
}
