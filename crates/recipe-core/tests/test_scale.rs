use approx::assert_relative_eq;

use recipe_core::consts::{SCALE_MAX, SCALE_MIN};
use recipe_core::error::RecipeError;
use recipe_core::scale::{ScaleBounds, ScaleControl};

// ---------------------------------------------------------------------------
// Defaults and bounds
// ---------------------------------------------------------------------------

#[test]
fn test_default_scale_is_one() {
    let scale = ScaleControl::default();
    assert_eq!(scale.value(), 1.0);
    assert_eq!(scale.bounds(), ScaleBounds { min: SCALE_MIN, max: SCALE_MAX });
    assert!(!scale.is_emphasized());
}

#[test]
fn test_bounds_validation() {
    assert!(ScaleBounds::new(1.0, 10.0).is_ok());
    assert!(ScaleBounds::new(2.0, 2.0).is_ok());
    assert!(matches!(
        ScaleBounds::new(5.0, 1.0),
        Err(RecipeError::InvalidConfig(_))
    ));
    assert!(ScaleBounds::new(-1.0, 5.0).is_err());
    assert!(ScaleBounds::new(1.0, f64::INFINITY).is_err());
    assert!(ScaleBounds::new(f64::NAN, 5.0).is_err());
}

#[test]
fn test_default_clamped_into_bounds() {
    let scale = ScaleControl::new(ScaleBounds::new(2.0, 4.0).unwrap());
    assert_eq!(scale.value(), 2.0);
}

// ---------------------------------------------------------------------------
// Stepper buttons
// ---------------------------------------------------------------------------

#[test]
fn test_decrement_at_min_is_noop() {
    let mut scale = ScaleControl::default();
    assert!(!scale.can_decrement());
    assert_eq!(scale.decrement(), SCALE_MIN);
    assert_eq!(scale.value(), SCALE_MIN);
}

#[test]
fn test_increment_at_max_is_noop() {
    let mut scale = ScaleControl::default();
    scale.set(SCALE_MAX);
    assert!(!scale.can_increment());
    assert_eq!(scale.increment(), SCALE_MAX);
    assert_eq!(scale.value(), SCALE_MAX);
}

#[test]
fn test_step_through_range() {
    let mut scale = ScaleControl::default();
    let ups: Vec<f64> = (0..6).map(|_| scale.increment()).collect();
    assert_eq!(ups, [2.0, 3.0, 4.0, 5.0, 5.0, 5.0]);
    let downs: Vec<f64> = (0..6).map(|_| scale.decrement()).collect();
    assert_eq!(downs, [4.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_decrement_from_fraction_stops_at_min() {
    let mut scale = ScaleControl::default();
    scale.set(1.5);
    assert_eq!(scale.decrement(), 1.0);
}

#[test]
fn test_wider_bounds() {
    let mut scale = ScaleControl::new(ScaleBounds::new(1.0, 10.0).unwrap());
    scale.set(9.0);
    assert_eq!(scale.increment(), 10.0);
    assert_eq!(scale.increment(), 10.0);
}

// ---------------------------------------------------------------------------
// Direct input
// ---------------------------------------------------------------------------

#[test]
fn test_set_clamps_like_the_buttons() {
    let mut scale = ScaleControl::default();
    assert_eq!(scale.set(12.0), SCALE_MAX);
    assert_eq!(scale.set(0.0), SCALE_MIN);
    assert_eq!(scale.set(-3.0), SCALE_MIN);
    assert_eq!(scale.set(2.5), 2.5);
}

#[test]
fn test_set_from_text_parses_floats() {
    let mut scale = ScaleControl::default();
    assert_relative_eq!(scale.set_from_text("2.5"), 2.5);
    assert_relative_eq!(scale.set_from_text(" 3 "), 3.0);
    assert_relative_eq!(scale.set_from_text("1,5"), 1.5);
    assert_relative_eq!(scale.set_from_text("7/2"), 3.5);
    assert!(scale.is_emphasized());
}

#[test]
fn test_set_from_text_clamps() {
    let mut scale = ScaleControl::default();
    assert_eq!(scale.set_from_text("100"), SCALE_MAX);
    assert_eq!(scale.set_from_text("0"), SCALE_MIN);
}

#[test]
fn test_non_numeric_text_yields_nan() {
    let mut scale = ScaleControl::default();
    assert!(scale.set_from_text("abc").is_nan());
    assert!(scale.is_nan());
    assert_eq!(scale.factor(), None);
    assert!(!scale.is_emphasized());
    assert_eq!(scale.to_string(), "NaN");

    assert!(scale.set_from_text("").is_nan());
}

#[test]
fn test_stepping_from_nan_restarts_at_min() {
    let mut scale = ScaleControl::default();
    scale.set_from_text("oops");
    assert!(scale.can_increment());
    assert_eq!(scale.increment(), SCALE_MIN);

    scale.set_from_text("oops");
    assert!(scale.can_decrement());
    assert_eq!(scale.decrement(), SCALE_MIN);
}

#[test]
fn test_valid_text_recovers_from_nan() {
    let mut scale = ScaleControl::default();
    scale.set_from_text("x");
    assert_eq!(scale.set_from_text("4"), 4.0);
    assert_eq!(scale.factor(), Some(4.0));
}

#[test]
fn test_reset() {
    let mut scale = ScaleControl::default();
    scale.set(4.0);
    scale.reset();
    assert_eq!(scale.value(), 1.0);
}

#[test]
fn test_display_uses_shortest_form() {
    let mut scale = ScaleControl::default();
    scale.set(3.0);
    assert_eq!(scale.to_string(), "3");
    scale.set(2.5);
    assert_eq!(scale.to_string(), "2.5");
}

#[test]
fn test_bounds_contains() {
    let bounds = ScaleBounds::default();
    assert!(bounds.contains(1.0));
    assert!(bounds.contains(5.0));
    assert!(!bounds.contains(5.5));
    assert!(bounds.clamp(f64::NAN).is_nan());
}
