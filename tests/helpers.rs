use glam::Vec2;
use rogue::helpers::centered_with_size;

#[test]
fn test_centered_with_size_basic() {
    let rect = centered_with_size(Vec2::new(100.0, 100.0), Vec2::new(50.0, 30.0));
    assert_eq!(rect.origin, Vec2::new(75.0, 85.0));
    assert_eq!(rect.size, Vec2::new(50.0, 30.0));
}

#[test]
fn test_centered_with_size_odd_dimensions() {
    let rect = centered_with_size(Vec2::new(50.0, 50.0), Vec2::new(51.0, 31.0));
    assert_eq!(rect.origin, Vec2::new(24.5, 34.5));
    assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
}

#[test]
fn test_centered_with_size_zero_position() {
    let rect = centered_with_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert_eq!(rect.origin, Vec2::new(-50.0, -50.0));
}

#[test]
fn test_centered_with_size_negative_position() {
    let rect = centered_with_size(Vec2::new(-100.0, -50.0), Vec2::new(80.0, 40.0));
    assert_eq!(rect.origin, Vec2::new(-140.0, -70.0));
    assert_eq!(rect.size, Vec2::new(80.0, 40.0));
}
