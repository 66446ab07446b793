use super::*;
use proptest::prelude::*;

#[test]
fn thresholds_scale_epsilon() {
    assert_eq!(threshold(0), 0.0);
    assert_eq!(threshold(1), f64::EPSILON);
    assert_eq!(threshold(4), 4.0 * f64::EPSILON);
    assert_eq!(threshold_single(1), f32::EPSILON);
    assert_eq!(threshold_single(3), 3.0 * f32::EPSILON);
    // Single epsilon dwarfs double epsilon.
    assert!(f64::from(threshold_single(1)) > threshold(1_000_000));
}

#[test]
fn trait_constants_match_std() {
    assert_eq!(<f64 as EpsilonEq>::EPSILON, f64::EPSILON);
    assert_eq!(<f32 as EpsilonEq>::EPSILON, f32::EPSILON);
    assert_eq!(<f64 as EpsilonEq>::threshold(2), threshold(2));
    assert_eq!(<f32 as EpsilonEq>::threshold(2), threshold_single(2));
}

#[test]
fn tolerance_default_is_one_epsilon() {
    let tol = Tolerance::default();
    assert_eq!(tol, Tolerance::new(1));
    assert!(tol.eq_f64(0.0, 1e-16));
    assert!(!tol.eq_f64(0.0, 1e-15));
    assert!(tol.eq_f32(0.0, 1e-15));
    assert_eq!(tol.threshold::<f64>(), f64::EPSILON);
    assert_eq!(tol.threshold::<f32>(), f32::EPSILON);
}

#[test]
fn exact_tolerance_rejects_any_difference() {
    let tol = Tolerance::exact();
    assert!(tol.equal(0.5f64, 0.5));
    assert!(!tol.equal(1.0f64, 1.0 + f64::EPSILON));
    assert!(!tol.equal(1.0f32, 1.0 + f32::EPSILON));
}

fn generic_close<T: EpsilonEq>(values: &[(T, T)], n: u32) -> usize {
    values.iter().filter(|(a, b)| a.epsilon_eq(*b, n)).count()
}

#[test]
fn generic_callers_pick_precision_by_type() {
    let doubles = [(0.0f64, 1e-16), (0.0, 1e-15), (1.0, 1.0)];
    let singles = [(0.0f32, 1e-16), (0.0, 1e-15), (1.0, 1.0)];
    assert_eq!(generic_close(&doubles, 1), 2);
    assert_eq!(generic_close(&singles, 1), 3);
}

proptest! {
    #[test]
    fn trait_agrees_with_free_functions(
        n in 0u32..1_000,
        x in -2.0f64..2.0,
        d in -1e-12f64..1e-12,
    ) {
        let y = x + d;
        prop_assert_eq!(x.epsilon_eq(y, n), epsilon_equal(n, x, y));
        prop_assert_eq!(Tolerance::new(n).eq_f64(x, y), epsilon_equal(n, x, y));
        let (xs, ys) = (x as f32, y as f32);
        prop_assert_eq!(xs.epsilon_eq(ys, n), epsilon_equal_single(n, xs, ys));
        prop_assert_eq!(Tolerance::new(n).eq_f32(xs, ys), epsilon_equal_single(n, xs, ys));
    }
}
