use crate::domain::differential::{differential, round1};

#[test]
fn standard_slope_reduces_to_score_minus_rating() {
    assert_eq!(differential(Some(82.0), Some(72.0), Some(113.0)), 10.0);
}

#[test]
fn steep_slope_scales_down() {
    // (95 - 71.3) * 113 / 130 = 20.599... -> 20.6
    assert_eq!(differential(Some(95.0), Some(71.3), Some(130.0)), 20.6);
}

#[test]
fn zero_or_negative_slope_degrades_to_neutral() {
    assert_eq!(differential(Some(82.0), Some(72.0), Some(0.0)), 0.0);
    assert_eq!(differential(Some(82.0), Some(72.0), Some(-5.0)), 0.0);
}

#[test]
fn any_missing_input_degrades_to_neutral() {
    assert_eq!(differential(None, Some(72.0), Some(113.0)), 0.0);
    assert_eq!(differential(Some(82.0), None, Some(113.0)), 0.0);
    assert_eq!(differential(Some(82.0), Some(72.0), None), 0.0);
}

#[test]
fn scores_below_rating_keep_their_sign() {
    assert_eq!(differential(Some(68.0), Some(72.0), Some(113.0)), -4.0);
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round1(3.84), 3.8);
    assert_eq!(round1(3.85), 3.9);
    assert_eq!(round1(-3.85), -3.9);
    assert_eq!(round1(10.0), 10.0);
}
