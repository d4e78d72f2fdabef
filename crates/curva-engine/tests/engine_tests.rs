use approx::assert_abs_diff_eq;
use curva_engine::{CurveError, CurveFamily, CurveParams, Engine, EngineError, Point2};

fn pt(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn arch() -> Vec<Point2> {
    vec![pt(0.0, 0.0), pt(50.0, 100.0), pt(100.0, 0.0)]
}

fn zigzag(count: usize) -> Vec<Point2> {
    (0..count)
        .map(|i| pt(i as f64 * 40.0, if i % 2 == 0 { 20.0 } else { 380.0 }))
        .collect()
}

fn input_error(result: Result<Vec<Point2>, EngineError>) -> CurveError {
    match result {
        Err(EngineError::ComputeFailed { source, .. }) => source,
        other => panic!("expected a validation failure, got {:?}", other),
    }
}

#[test]
fn test_introspection_order() {
    let engine = Engine::bspline();
    assert_eq!(
        engine.algorithm_names(),
        vec!["Uniform B-Spline", "Non-Uniform B-Spline", "NURBS"]
    );
    assert_eq!(engine.algorithm_descriptions().len(), 3);
    assert_eq!(engine.family(), CurveFamily::BSpline);

    let engine = Engine::bezier();
    assert_eq!(
        engine.algorithm_names(),
        vec!["De Casteljau", "Bernstein Polynomials", "Linear Interpolation"]
    );
    assert_eq!(engine.limits().max_points, 10);
}

#[test]
fn test_current_description_follows_selection() {
    let mut engine = Engine::bezier();
    let descriptions = engine.algorithm_descriptions();
    for (name, description) in engine.algorithm_names().into_iter().zip(descriptions) {
        assert!(engine.select_algorithm(name));
        assert_eq!(engine.current_algorithm_name(), name);
        assert_eq!(engine.current_algorithm_description(), description);
    }
}

#[test]
fn test_output_cardinality_every_algorithm() {
    for family in CurveFamily::ALL {
        let mut engine = Engine::new(family);
        for name in engine.algorithm_names() {
            assert!(engine.select_algorithm(name));
            for resolution in [10, 99, 1000] {
                let sample = engine.compute_curve(&zigzag(6), 3, resolution).unwrap();
                assert_eq!(sample.len(), resolution + 1, "{} at {}", name, resolution);
            }
        }
    }
}

#[test]
fn test_bezier_endpoint_interpolation() {
    let points = zigzag(9);
    let mut engine = Engine::bezier();
    for name in engine.algorithm_names() {
        engine.select_algorithm(name);
        let sample = engine.compute_curve(&points, 0, 64).unwrap();
        assert!((sample[0] - points[0]).length() < 1e-9, "{} start", name);
        assert!((sample[64] - points[8]).length() < 1e-9, "{} end", name);
    }
}

#[test]
fn test_bezier_cross_algorithm_agreement() {
    let points = zigzag(10);
    let mut engine = Engine::bezier();
    let reference = engine.compute_curve(&points, 0, 500).unwrap();
    for name in ["Bernstein Polynomials", "Linear Interpolation"] {
        assert!(engine.select_algorithm(name));
        let sample = engine.compute_curve(&points, 0, 500).unwrap();
        for (a, b) in reference.iter().zip(&sample) {
            assert!((*a - *b).length() < 1e-3, "{} disagrees: {} vs {}", name, a, b);
        }
    }
}

#[test]
fn test_degenerate_line_is_linear() {
    let points = [pt(0.0, 0.0), pt(100.0, 0.0)];
    for family in CurveFamily::ALL {
        let mut engine = Engine::new(family);
        for name in engine.algorithm_names() {
            engine.select_algorithm(name);
            let sample = engine.compute_curve(&points, 1, 10).unwrap();
            assert_eq!(sample.len(), 11);
            for (i, p) in sample.iter().enumerate() {
                assert_abs_diff_eq!(p.x, 10.0 * i as f64, epsilon = 1e-9);
                assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_nurbs_reduces_to_uniform_bspline() {
    let points = zigzag(8);
    let mut engine = Engine::bspline();
    let bspline = engine.compute_curve(&points, 3, 250).unwrap();
    engine.select_algorithm("NURBS");
    let nurbs = engine.compute_curve(&points, 3, 250).unwrap();
    for (a, b) in bspline.iter().zip(&nurbs) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn test_arch_scenario() {
    let mut engine = Engine::bspline();

    let uniform = engine.compute_curve(&arch(), 2, 20).unwrap();
    assert_eq!(uniform.len(), 21);
    assert_abs_diff_eq!(uniform[0].x, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(uniform[0].y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(uniform[20].x, 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(uniform[20].y, 50.0, epsilon = 1e-9);

    // The clamped centripetal knot vector pins the ends to the control polygon.
    assert!(engine.select_algorithm("Non-Uniform B-Spline"));
    let clamped = engine.compute_curve(&arch(), 2, 20).unwrap();
    assert_eq!(clamped.len(), 21);
    assert!(clamped[0].length() < 1e-9);
    assert!((clamped[20] - pt(100.0, 0.0)).length() < 1e-9);
}

#[test]
fn test_validation_boundaries_bspline() {
    let engine = Engine::bspline();
    let four = zigzag(4);

    assert!(matches!(
        input_error(engine.compute_curve(&four, 0, 50)),
        CurveError::DegreeTooLow { .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&four, 4, 50)),
        CurveError::DegreeNotBelowPointCount { .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&zigzag(12), 6, 50)),
        CurveError::DegreeTooHigh { max: 5, actual: 6 }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&zigzag(1), 1, 50)),
        CurveError::TooFewPoints { .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&zigzag(16), 3, 50)),
        CurveError::TooManyPoints { actual: 16, .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&four, 3, 9)),
        CurveError::ResolutionTooLow { .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&four, 3, 1001)),
        CurveError::ResolutionTooHigh { .. }
    ));

    assert!(engine.compute_curve(&zigzag(15), 5, 1000).is_ok());
}

#[test]
fn test_validation_boundaries_bezier() {
    let engine = Engine::bezier();
    assert!(matches!(
        input_error(engine.compute_curve(&zigzag(11), 0, 50)),
        CurveError::TooManyPoints { max: 10, .. }
    ));
    assert!(matches!(
        input_error(engine.compute_curve(&zigzag(1), 0, 50)),
        CurveError::TooFewPoints { .. }
    ));
    assert!(engine.compute_curve(&zigzag(10), 0, 10).is_ok());
}

#[test]
fn test_non_finite_point_rejected_with_index() {
    let engine = Engine::bezier();
    let mut points = zigzag(5);
    points[2] = pt(f64::NAN, 1.0);
    let err = input_error(engine.compute_curve(&points, 0, 50));
    assert_eq!(err.index(), Some(2));
}

#[test]
fn test_failed_call_leaves_engine_usable() {
    let mut engine = Engine::bspline();
    engine.select_algorithm("Non-Uniform B-Spline");
    assert!(engine.compute_curve(&zigzag(3), 7, 50).is_err());
    assert_eq!(engine.current_algorithm_name(), "Non-Uniform B-Spline");
    assert_eq!(engine.compute_curve(&zigzag(3), 2, 50).unwrap().len(), 51);
}

#[test]
fn test_compute_with_params() {
    let engine = Engine::bspline();
    let params = CurveParams::new(5, 40);
    // Two points: the degree falls back to 1.
    let sample = engine.compute_with(&arch()[..2], &params).unwrap();
    assert_eq!(sample.len(), 41);
}

#[test]
fn test_independent_sessions() {
    let mut first = Engine::bspline();
    let second = Engine::bspline();
    first.select_algorithm("NURBS");
    assert_eq!(second.current_algorithm_name(), "Uniform B-Spline");

    let points = zigzag(7);
    let shared = Engine::bezier();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = &shared;
                let points = &points;
                scope.spawn(move || engine.compute_curve(points, 0, 100 + i).unwrap().len())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), 101 + i);
        }
    });
}

#[test]
fn test_descriptors_serialize_for_ui() {
    let engine = Engine::bezier();
    let json = serde_json::to_value(engine.descriptors().collect::<Vec<_>>()).unwrap();
    assert_eq!(json[0]["name"], "De Casteljau");
    assert_eq!(json[0]["family"], "Bezier");
    assert_eq!(json.as_array().map(Vec::len), Some(3));
}
