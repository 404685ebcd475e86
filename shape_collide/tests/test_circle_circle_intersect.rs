use shape_collide::{
    Circle,
    collide::{CircleCircleIntr::*, circle_intersect_circle},
    core::math::Vector2,
};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (TangentIntersect { point: a1 }, TangentIntersect { point: a2 }) if a1.fuzzy_eq(a2) => {
            }
            (
                TwoIntersects {
                    point1: a1,
                    point2: b1,
                },
                TwoIntersects {
                    point1: a2,
                    point2: b2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            (Identical, Identical) => (),
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

#[test]
fn no_intersect_outside() {
    let a = Circle::new(-1.0, -1.0, 1.0);
    let b = Circle::new(0.0, 5.0, 0.5);
    let result = circle_intersect_circle(a, b);
    assert_case_eq!(result, NoIntersect::<f64>);
    assert_eq!(result.count(), 0);
}

#[test]
fn no_intersect_inside() {
    let a = Circle::new(-1.0, -1.0, 5.0);
    let b = Circle::new(1.0, 1.0, 0.5);
    assert_case_eq!(circle_intersect_circle(a, b), NoIntersect::<f64>);
    assert_case_eq!(circle_intersect_circle(b, a), NoIntersect::<f64>);
}

#[test]
fn tangent_intersect_outside() {
    let a = Circle::new(-1.0, 1.0, 1.0);
    let b = Circle::new(0.5, 1.0, 0.5);
    let result = circle_intersect_circle(a, b);
    assert_case_eq!(
        result,
        TangentIntersect {
            point: Vector2::new(0.0, 1.0)
        }
    );
    let (poc_a, poc_b) = result.points().unwrap();
    assert_eq!(poc_a, poc_b);
}

#[test]
fn tangent_intersect_inside() {
    let a = Circle::new(0.0, 1.0, 3.0);
    let b = Circle::new(0.0, 0.0, 4.0);
    assert_case_eq!(
        circle_intersect_circle(a, b),
        TangentIntersect {
            point: Vector2::new(0.0, 4.0)
        }
    );
    assert_case_eq!(
        circle_intersect_circle(b, a),
        TangentIntersect {
            point: Vector2::new(0.0, 4.0)
        }
    );
}

#[test]
fn tangent_is_exact() {
    let a = Circle::new(0.0, 0.0, 2.0);
    let b = Circle::new(5.0, 0.0, 3.0);
    assert_eq!(circle_intersect_circle(a, b).count(), 1);

    for eps in [1e-3, 1e-6, 1e-9, 1e-12] {
        let farther = Circle::new(5.0 + eps, 0.0, 3.0);
        assert_case_eq!(circle_intersect_circle(a, farther), NoIntersect::<f64>);
    }
}

#[test]
fn two_intersects() {
    let a = Circle::new(0.0, 1.0, 3.0);
    let b = Circle::new(5.0, 5.0, 4.0);
    let result = circle_intersect_circle(a, b);
    let expected_point1 = Vector2::new(2.945782625365772, 1.567771718292785);
    let expected_point2 = Vector2::new(1.2005588380488623, 3.749301452438922);
    assert_case_eq!(
        result,
        TwoIntersects {
            point1: expected_point1,
            point2: expected_point2
        }
    );
    assert_eq!(result.count(), 2);
}

#[test]
fn two_intersects_lie_on_both_circles() {
    let a = Circle::new(0.0, 0.0, 5.0);
    let b = Circle::new(8.0, 0.0, 5.0);
    let (p1, p2) = circle_intersect_circle(a, b).points().unwrap();
    assert!(p1.fuzzy_eq(Vector2::new(4.0, -3.0)));
    assert!(p2.fuzzy_eq(Vector2::new(4.0, 3.0)));
}

#[test]
fn identical() {
    let a = Circle::new(-1.0, 1.0, 1.0);
    let result = circle_intersect_circle(a, a);
    assert_case_eq!(result, Identical::<f64>);
    assert_eq!(result.count(), -1);
    assert!(result.points().is_none());
}

#[test]
fn single_precision() {
    let a = Circle::new(0.0f32, 0.0, 2.0);
    let b = Circle::new(5.0f32, 0.0, 3.0);
    assert_eq!(circle_intersect_circle(a, b).count(), 1);
    assert_eq!(circle_intersect_circle(a, a).count(), -1);
}
