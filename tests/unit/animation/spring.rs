use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

const POP: SpringConfig = SpringConfig::new(8.0, 200.0, 0.5);

#[test]
fn progress_is_zero_before_and_at_trigger() {
    for cfg in [
        SpringConfig::default(),
        POP,
        SpringConfig::new(20.0, 100.0, 1.0),
        SpringConfig::new(60.0, 100.0, 1.0),
    ] {
        assert_eq!(spring_progress(-1.0, fps30(), &cfg), 0.0);
        assert_eq!(spring_progress(-300.0, fps30(), &cfg), 0.0);
        assert_eq!(spring_progress(0.0, fps30(), &cfg), 0.0);

        let s = Spring::new(50, cfg);
        assert_eq!(s.sample(49.0, fps30()).unwrap(), 0.0);
    }
}

#[test]
fn underdamped_spring_overshoots_then_settles() {
    assert!(POP.is_underdamped());
    let peak = (0..30)
        .map(|f| spring_progress(f as f64, fps30(), &POP))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.1, "peak {peak}");
    let late = spring_progress(120.0, fps30(), &POP);
    assert!((late - 1.0).abs() < 1e-3, "late {late}");
}

#[test]
fn critically_and_over_damped_springs_never_overshoot() {
    for cfg in [
        SpringConfig::new(20.0, 100.0, 1.0),
        SpringConfig::new(60.0, 100.0, 1.0),
    ] {
        assert!(!cfg.is_underdamped());
        let mut prev = 0.0;
        for f in 0..200 {
            let v = spring_progress(f as f64, fps30(), &cfg);
            assert!(v <= 1.0 + 1e-12, "{cfg:?} frame {f}: {v}");
            assert!(v >= prev - 1e-12);
            prev = v;
        }
    }
}

#[test]
fn sampling_is_deterministic() {
    let s = Spring::new(10, POP);
    for f in [0.0, 10.0, 12.0, 15.5, 40.0] {
        assert_eq!(
            s.sample(f, fps30()).unwrap().to_bits(),
            s.sample(f, fps30()).unwrap().to_bits()
        );
    }
}

#[test]
fn overshoot_clamping_caps_at_target() {
    let s = Spring::new(0, POP.clamped()).range(0.0, 100.0);
    for f in 0..60 {
        assert!(s.sample(f as f64, fps30()).unwrap() <= 100.0);
    }
}

#[test]
fn range_maps_progress() {
    let s = Spring::new(0, SpringConfig::default()).range(20.0, 0.0);
    assert_eq!(s.sample(-5.0, fps30()).unwrap(), 20.0);
    assert!(s.sample(300.0, fps30()).unwrap().abs() < 1e-3);
}

#[test]
fn measure_matches_settling_behaviour() {
    let n = measure_spring(fps30(), &SpringConfig::default(), 0.005).unwrap();
    assert!((20..=60).contains(&n), "settled at {n}");
    for f in n..n + SETTLED_RUN {
        let v = spring_progress(f as f64, fps30(), &SpringConfig::default());
        assert!((v - 1.0).abs() < 0.005);
    }
}

#[test]
fn undamped_spring_never_settles() {
    let cfg = SpringConfig::new(0.0, 100.0, 1.0);
    assert!(measure_spring(fps30(), &cfg, 0.005).is_err());
}

#[test]
fn duration_stretches_settling_time() {
    let s = Spring::new(0, SpringConfig::default()).duration(90);
    let end = s.sample(90.0, fps30()).unwrap();
    assert!((end - 1.0).abs() < 0.01, "end {end}");
    let natural = Spring::new(0, SpringConfig::default());
    assert!(s.sample(10.0, fps30()).unwrap() < natural.sample(10.0, fps30()).unwrap());
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(SpringConfig::new(10.0, 0.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(10.0, 100.0, 0.0).validate().is_err());
    assert!(SpringConfig::new(-1.0, 100.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(f64::NAN, 100.0, 1.0).validate().is_err());
    let s = Spring::new(0, SpringConfig::new(10.0, -5.0, 1.0));
    assert!(matches!(s.sample(3.0, fps30()), Err(ReelError::Animation(_))));
}
