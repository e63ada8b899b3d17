//! Orientation angle to particle colour.
//!
//! An angle is folded into one turn, read as a hue on the colour wheel, and
//! converted from HSB (full saturation and brightness) to an 8-bit RGB triple.
//! The conversion runs in single precision and rounds each channel with
//! `v * 255 + 0.5`, so output matches the usual HSB→RGB tables bit for bit.

use std::f64::consts::TAU;
use std::fmt;

/// 8-bit RGB triple, displayed as `r g b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Colour of the boundary marker particles
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert hue/saturation/brightness (each in `[0, 1]`) to RGB.
    ///
    /// Only the fractional part of `hue` is used, so a hue of exactly 1.0
    /// lands on the same red as 0.0.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        if saturation == 0.0 {
            let v = channel(brightness);
            return Self::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            5 => (brightness, p, q),
            // h rounds up to 6.0 only for hues a hair below an integer
            _ => (0.0, 0.0, 0.0),
        };

        Self::new(channel(r), channel(g), channel(b))
    }

    /// Fully saturated, fully bright colour for an orientation angle in radians
    pub fn from_angle(angle: f64) -> Self {
        Self::from_hsb(calculate_hue(angle), 1.0, 1.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Scale a unit channel to 0..=255 (saturating cast handles NaN as 0)
fn channel(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

/// Largest number of whole turns folded away one turn at a time.
///
/// Past this, subtracting 2π stops changing the value (from about 1e16 up)
/// or takes too many steps to be usable.
pub const MAX_STEPPED_TURNS: f64 = 1e6;

/// Fold an angle in radians into `[0, 2π]`.
///
/// Negative angles are raised by whole turns until non-negative; angles above
/// 2π are lowered until they are at most 2π. Exactly 2π is left as is.
/// Non-finite input maps to 0. Angles more than [`MAX_STEPPED_TURNS`] turns
/// from zero are folded in one step into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle.abs() > MAX_STEPPED_TURNS * TAU {
        let folded = angle.rem_euclid(TAU);
        // rem_euclid can round up to exactly 2π for tiny negative remainders
        return if folded < TAU { folded } else { 0.0 };
    }

    let mut angle = angle;
    if angle < 0.0 {
        while angle < 0.0 {
            angle += TAU;
        }
    } else {
        while angle > TAU {
            angle -= TAU;
        }
    }
    angle
}

/// Hue in `[0, 1]` for an orientation angle in radians
pub fn calculate_hue(angle: f64) -> f32 {
    (normalize_angle(angle) / TAU) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_angle_is_red() {
        assert_eq!(Rgb::from_angle(0.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_eq!(Rgb::from_angle(2.0 * PI / 3.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_angle(PI), Rgb::new(0, 255, 255));
        assert_eq!(Rgb::from_angle(4.0 * PI / 3.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsb(1.0 / 6.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(Rgb::from_hsb(5.0 / 6.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_intermediate_hue_rounding() {
        // h = 0.5 in the red sector: g = 0.5 * 255 + 0.5 = 128
        assert_eq!(Rgb::from_hsb(1.0 / 12.0, 1.0, 1.0), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(Rgb::from_hsb(0.3, 0.0, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::from_hsb(0.7, 0.0, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_full_turn_is_not_reduced() {
        assert_eq!(normalize_angle(TAU), TAU);
        assert_eq!(calculate_hue(TAU), 1.0);
        // ...but still renders as red
        assert_eq!(Rgb::from_angle(TAU), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_normalization_is_noop_within_one_turn() {
        for i in 0..1000 {
            let angle = TAU * i as f64 / 1000.0;
            assert_eq!(normalize_angle(angle), angle);
        }
    }

    #[test]
    fn test_negative_angles_fold_forward() {
        let folded = normalize_angle(-PI / 2.0);
        assert!((folded - 1.5 * PI).abs() < 1e-12);

        let folded = normalize_angle(-5.0 * TAU - 0.25);
        assert!(folded >= 0.0 && folded < TAU);
        assert!((folded - (TAU - 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_hue_is_periodic() {
        for i in 0..200 {
            let angle = 0.01 + (TAU - 0.02) * i as f64 / 200.0;
            let base_hue = calculate_hue(angle);
            let base_rgb = Rgb::from_angle(angle);

            for k in [-7, -3, -1, 1, 2, 5, 11] {
                let shifted = angle + TAU * k as f64;
                assert!(
                    (calculate_hue(shifted) - base_hue).abs() < 1e-5,
                    "hue drifted for angle {} shifted by {} turns",
                    angle,
                    k
                );
                let rgb = Rgb::from_angle(shifted);
                for (a, b) in [(rgb.r, base_rgb.r), (rgb.g, base_rgb.g), (rgb.b, base_rgb.b)] {
                    assert!(a.abs_diff(b) <= 1, "colour drifted for angle {}", angle);
                }
            }
        }
    }

    #[test]
    fn test_non_finite_angles_map_to_red() {
        assert_eq!(normalize_angle(f64::NAN), 0.0);
        assert_eq!(normalize_angle(f64::INFINITY), 0.0);
        assert_eq!(normalize_angle(f64::NEG_INFINITY), 0.0);
        assert_eq!(Rgb::from_angle(f64::NAN), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_huge_angles_fold_in_one_step() {
        for angle in [1e20, -1e20, 1e12, -1e12, f64::MAX, f64::MIN] {
            let folded = normalize_angle(angle);
            assert!(
                (0.0..TAU).contains(&folded),
                "{} folded to {}, outside one turn",
                angle,
                folded
            );
            let hue = calculate_hue(angle);
            assert!((0.0..=1.0).contains(&hue));
        }
    }

    #[test]
    fn test_stepped_fold_limit_keeps_loop_result() {
        // Just inside the limit the turn-by-turn loop still runs
        let angle = MAX_STEPPED_TURNS * TAU - 0.5;
        let folded = normalize_angle(angle);
        assert!(folded > 0.0 && folded <= TAU);
        assert!((folded - (TAU - 0.5)).abs() < 1e-3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::BLUE.to_string(), "0 0 255");
        assert_eq!(Rgb::new(12, 0, 255).to_string(), "12 0 255");
    }
}
