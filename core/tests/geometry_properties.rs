use path_defence_core::{
    geometry::{path_lengths, velocity_vector, within_circle, within_square},
    Vec2,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vec2> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn total_length_is_sum_of_segment_distances(path in prop::collection::vec(point(), 0..12)) {
        let lengths = path_lengths(&path);
        let expected: f32 = path.windows(2).map(|pair| pair[0].distance(pair[1])).sum();

        prop_assert!((lengths.total() - expected).abs() <= 1e-2 * expected.max(1.0));
        prop_assert_eq!(lengths.segments().len(), path.len());
        if let Some(first) = lengths.segments().first() {
            prop_assert_eq!(*first, 0.0);
        }
        for pair in lengths.segments().windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn velocity_has_requested_magnitude(source in point(), target in point(), speed in 0.0f32..50.0) {
        let velocity = velocity_vector(source, target, speed);
        if source == target {
            prop_assert_eq!(velocity, Vec2::ZERO);
        } else {
            prop_assert!((velocity.length() - speed).abs() <= 1e-3 * speed.max(1.0));
        }
    }

    #[test]
    fn circle_membership_implies_square_membership(
        candidate in point(),
        center in point(),
        radius in 0.0f32..200.0,
    ) {
        if within_circle(candidate, center, radius) {
            prop_assert!(within_square(candidate, center, radius));
        }
    }
}

#[test]
fn coincident_points_never_produce_nan() {
    let point = Vec2::new(12.5, -3.0);
    let velocity = velocity_vector(point, point, 8.0);
    assert!(!velocity.x.is_nan() && !velocity.y.is_nan());
    assert_eq!(velocity, Vec2::ZERO);
}
