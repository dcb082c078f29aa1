//! Angle normalization and sector lookup
//!
//! The wheel's raw angle accumulates without bound. Everything that needs a
//! position on the circle goes through [`normalize_angle`] first.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Normalize a raw angle in radians into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`, so that
/// case is folded back onto zero.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Start angle of sector `index` on a wheel with `count` sectors.
///
/// Divider lines are drawn at exactly these angles, and [`sector_index`]
/// compares against the same values, so what is drawn and what is resolved
/// always agree.
pub fn sector_boundary(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64
}

/// Angular width of one sector.
pub fn sector_width(count: usize) -> f64 {
    TAU / count as f64
}

/// Map a raw angle onto the sector it points into.
///
/// Sector `i` covers `[boundary(i), boundary(i + 1))`: an angle sitting exactly
/// on a boundary belongs to the sector starting there. The result is always in
/// `[0, count)`. `count` must be non-zero.
pub fn sector_index(angle: f64, count: usize) -> usize {
    debug_assert!(count > 0, "sector_index needs at least one sector");
    let a = normalize_angle(angle);
    let mut index = ((a / sector_width(count)) as usize).min(count - 1);

    // The division can land one ulp on the wrong side of a boundary.
    while index + 1 < count && sector_boundary(index + 1, count) <= a {
        index += 1;
    }
    while index > 0 && sector_boundary(index, count) > a {
        index -= 1;
    }
    index
}

/// Pointer angle in whole-circle degrees as shown in the debug readout.
///
/// Offset by a quarter turn so that 0° points up, then normalized into
/// `[0, 360)`.
pub fn display_degrees(angle: f64) -> f64 {
    let deg = ((angle + FRAC_PI_2).to_degrees()).rem_euclid(360.0);
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_normalize_in_range() {
        for raw in [-100.0, -TAU, -0.1, 0.0, 1.0, TAU, 3.0 * TAU + 0.5, 1e6] {
            let a = normalize_angle(raw);
            assert!((0.0..TAU).contains(&a), "{} normalized to {}", raw, a);
        }
    }

    #[test]
    fn test_normalize_congruent() {
        for raw in [-7.3, -0.1, 0.25, 13.0, 250.75] {
            let a = normalize_angle(raw);
            let turns = (raw - a) / TAU;
            assert!((turns - turns.round()).abs() < 1e-9, "{} -> {}", raw, a);
        }
    }

    #[test]
    fn test_normalize_negative() {
        let a = normalize_angle(-0.1);
        assert!((a - (TAU - 0.1)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_below_tau() {
        let a = normalize_angle(-1e-20);
        assert!(a < TAU);
    }

    #[test]
    fn test_sector_exact_boundary() {
        let angle = TAU * 3.0 / 11.0;
        assert_eq!(sector_index(angle, 11), 3);
    }

    #[test]
    fn test_sector_all_boundaries_belong_to_next_sector() {
        for count in [1, 2, 3, 7, 11, 12, 64] {
            for i in 0..count {
                assert_eq!(sector_index(sector_boundary(i, count), count), i);
            }
        }
    }

    #[test]
    fn test_sector_just_below_boundary() {
        let angle = sector_boundary(4, 11) - 1e-9;
        assert_eq!(sector_index(angle, 11), 3);
    }

    #[test]
    fn test_sector_negative_angle() {
        // -0.1 rad wraps to just under a full turn: last sector
        assert_eq!(sector_index(-0.1, 11), 10);
    }

    #[test]
    fn test_sector_index_in_range() {
        let mut angle = -50.0;
        while angle < 50.0 {
            assert!(sector_index(angle, 11) < 11);
            angle += 0.037;
        }
    }

    #[test]
    fn test_display_degrees_zero_points_up() {
        assert!((display_degrees(-FRAC_PI_2)).abs() < EPSILON);
        assert!((display_degrees(0.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_display_degrees_non_negative() {
        for raw in [-10.0, -FRAC_PI_2 - 0.01, 0.0, 100.0] {
            let deg = display_degrees(raw);
            assert!((0.0..360.0).contains(&deg), "{} -> {}", raw, deg);
        }
    }
}
