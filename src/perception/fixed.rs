//! Fixed-point float rendering shared by every `Display` impl.

use std::fmt;

/// Renders an `f32` with exactly six fractional digits.
///
/// Non-finite values use the C stream spelling: `nan`, `-nan` (sign bit
/// set), `inf`, `-inf`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fixed6(pub f32);

impl fmt::Display for Fixed6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" })
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{:.6}", v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_six_digits() {
        assert_eq!(Fixed6(0.5).to_string(), "0.500000");
        assert_eq!(Fixed6(10.0).to_string(), "10.000000");
        assert_eq!(Fixed6(-3.25).to_string(), "-3.250000");
        assert_eq!(Fixed6(0.1).to_string(), "0.100000");
        assert_eq!(Fixed6(1234567.0).to_string(), "1234567.000000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(Fixed6(f32::NAN.copysign(1.0)).to_string(), "nan");
        assert_eq!(Fixed6(f32::NAN.copysign(-1.0)).to_string(), "-nan");
        assert_eq!(Fixed6(f32::INFINITY).to_string(), "inf");
        assert_eq!(Fixed6(f32::NEG_INFINITY).to_string(), "-inf");
    }
}
