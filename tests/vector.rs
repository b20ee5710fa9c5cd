//! Vector integration tests.

#![allow(clippy::float_cmp)]

use deckvec::Vector2D;

#[test]
fn default_is_the_zero_vector() {
    let v = Vector2D::default();
    assert_eq!(v, Vector2D::ZERO);
    assert_eq!(v.x(), 0.0);
    assert_eq!(v.y(), 0.0);
}

#[test]
fn magnitude_and_nonzero() {
    assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2D::new(-3.0, -4.0).magnitude(), 5.0);

    let zero = Vector2D::new(0.0, 0.0);
    assert_eq!(zero.magnitude(), 0.0);
    assert!(!zero.is_nonzero());

    assert!(Vector2D::new(3.0, 4.0).is_nonzero());
    assert!(Vector2D::new(0.0, -1.0).is_nonzero());
    assert!(Vector2D::new(1e-300, 0.0).is_nonzero());
}

#[test]
fn magnitude_does_not_overflow() {
    let v = Vector2D::new(1e200, 1e200);
    let m = v.magnitude();
    assert!(m.is_finite());
    assert!((m / 1e200 - core::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn addition_is_component_wise() {
    let a = Vector2D::new(2.0, 4.0);
    let b = Vector2D::new(2.0, 1.0);
    let sum = a + b;

    assert_eq!(sum, Vector2D::new(4.0, 5.0));
    assert_eq!(a, Vector2D::new(2.0, 4.0));
    assert_eq!(b, Vector2D::new(2.0, 1.0));
    assert_eq!(b + a, sum);
}

#[test]
fn scaling_multiplies_each_coordinate() {
    let v = Vector2D::new(3.0, 4.0);

    assert_eq!(v * 3.0, Vector2D::new(9.0, 12.0));
    assert_eq!(v.scale(3.0), Vector2D::new(9.0, 12.0));
    assert_eq!(v * 0.0, Vector2D::ZERO);
    assert_eq!((v * -1.0).magnitude(), 5.0);
    assert_eq!(v, Vector2D::new(3.0, 4.0));
}

#[test]
fn operations_chain() {
    let v = (Vector2D::new(1.0, 1.0) + Vector2D::new(2.0, 3.0)) * 2.0;
    assert_eq!(v, Vector2D::new(6.0, 8.0));
    assert_eq!(v.magnitude(), 10.0);
}

#[test]
fn display_format() {
    assert_eq!(Vector2D::new(3.0, 4.0).to_string(), "Vector(3, 4)");
    assert_eq!(Vector2D::new(1.5, -2.25).to_string(), "Vector(1.5, -2.25)");
    assert_eq!(Vector2D::default().to_string(), "Vector(0, 0)");
}

#[test]
fn tuple_conversions() {
    let v = Vector2D::from((1.0, 2.0));
    assert_eq!(v, Vector2D::new(1.0, 2.0));

    let (x, y): (f64, f64) = v.into();
    assert_eq!((x, y), (1.0, 2.0));
}
