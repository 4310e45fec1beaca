use approx::assert_relative_eq;
use pairviz::{
    apply_overrides,
    curve::linspace,
    io::{
        read_session_toml, write_curve_json, write_potential_png, write_schematic_png,
        write_session_toml,
    },
    potentials::{HardSphere, LennardJones, Mie, SquareWell, Sutherland, Yukawa},
    session::snap_to_detent,
    ModelKind, PairPotential, PotentialModel, Separations, Session,
};
use quickcheck_macros::quickcheck;

const TEST_EPSILON: f64 = 0.000001;

fn lj(epsilon_over_kb: f64, sigma: f64) -> PotentialModel {
    PotentialModel::LennardJones(LennardJones {
        epsilon_over_kb,
        sigma,
    })
}

fn scratch_dir(name: &str) -> String {
    let dir = std::env::temp_dir().join(format!("pairviz-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.to_str().unwrap().to_string()
}

#[test]
fn lennard_jones_crosses_zero_at_sigma() {
    let model = lj(120.0, 3.4);
    assert_eq!(model.evaluate_at(3.4), 0.0);
}

#[test]
fn lennard_jones_minimum_is_minus_epsilon() {
    let model = lj(120.0, 3.4);
    let r_min = model.minimum().unwrap();
    assert_relative_eq!(r_min, 2.0_f64.powf(1.0 / 6.0) * 3.4);
    let v_min = model.evaluate_at(r_min);
    assert_relative_eq!(v_min, -120.0, epsilon = TEST_EPSILON);

    // global minimum over [sigma, inf)
    let rs = linspace(3.4, 34.0, 20_000);
    for v in model.evaluate(&rs) {
        assert!(v >= v_min - TEST_EPSILON);
    }
}

#[test]
fn lennard_jones_is_finite_inside_sigma() {
    let model = lj(120.0, 3.4);
    let v = model.evaluate_at(0.5);
    assert!(v.is_finite());
    assert!(v > 1e6);
}

#[test]
fn square_well_values() {
    let model = PotentialModel::SquareWell(SquareWell {
        epsilon_over_kb: 100.0,
        sigma: 3.4,
        well_width: 1.5,
        well_depth: 1.0,
    });
    assert!(model.evaluate_at(3.39).is_infinite());
    assert_eq!(model.evaluate_at(3.4), -100.0);
    assert_eq!(model.evaluate_at(4.0), -100.0);
    assert_eq!(model.evaluate_at(5.1), 0.0);
    assert_eq!(model.evaluate_at(8.0), 0.0);
}

#[test]
fn square_well_depth_scales_energy() {
    let model = PotentialModel::SquareWell(SquareWell {
        epsilon_over_kb: 100.0,
        sigma: 3.4,
        well_width: 2.0,
        well_depth: 0.5,
    });
    assert_eq!(model.evaluate_at(6.0), -50.0);
    assert_eq!(model.evaluate_at(6.8), 0.0);
}

#[test]
fn hard_sphere_values() {
    let model = PotentialModel::HardSphere(HardSphere {
        epsilon_over_kb: 120.0,
        sigma: 3.4,
    });
    assert!(model.evaluate_at(1.0).is_infinite());
    assert!(model.evaluate_at(3.3999).is_infinite());
    assert_eq!(model.evaluate_at(3.4), 0.0);
    assert_eq!(model.evaluate_at(9.0), 0.0);
}

#[test]
fn sutherland_at_sigma_is_minus_epsilon() {
    let model = PotentialModel::Sutherland(Sutherland {
        epsilon_over_kb: 120.0,
        sigma: 3.4,
        n: 12,
    });
    assert_eq!(model.evaluate_at(3.4), -120.0);
    assert!(model.evaluate_at(3.0).is_infinite());
    assert_relative_eq!(
        model.evaluate_at(6.8),
        -120.0 * 0.5_f64.powi(12),
        epsilon = TEST_EPSILON
    );
}

#[test]
fn morse_vanishes_at_equilibrium_and_tends_to_epsilon() {
    let model = PotentialModel::from_kind(ModelKind::Morse);
    assert_eq!(model.evaluate_at(model.sigma()), 0.0);
    assert_relative_eq!(model.evaluate_at(60.0), 120.0, epsilon = TEST_EPSILON);
    assert!(model.evaluate_at(2.0) > 0.0);
}

#[test]
fn buckingham_values() {
    let model = PotentialModel::from_kind(ModelKind::Buckingham);
    let r: f64 = 4.0;
    let expected = 1000.0 * (-2.0 * r).exp() - 120.0 * (3.4 / r).powi(6);
    assert_relative_eq!(model.evaluate_at(r), expected, epsilon = TEST_EPSILON);
}

#[test]
fn yukawa_values() {
    let model = PotentialModel::Yukawa(Yukawa {
        epsilon_over_kb: 120.0,
        sigma: 3.4,
        kappa: 0.5,
    });
    assert_relative_eq!(
        model.evaluate_at(2.0),
        60.0 * (-1.0_f64).exp(),
        epsilon = TEST_EPSILON
    );
}

#[test]
fn mie_12_6_reproduces_lennard_jones_exactly() {
    let mie = PotentialModel::Mie(Mie {
        epsilon_over_kb: 97.5,
        sigma: 2.9,
        n: 12.0,
        m: 6.0,
    });
    let lj = lj(97.5, 2.9);
    let rs = linspace(0.5, 12.0, 500);
    assert_eq!(mie.evaluate(&rs), lj.evaluate(&rs));
    assert_eq!(mie.minimum(), lj.minimum());
}

#[test]
fn mie_minimum_is_minus_epsilon() {
    let mie = Mie {
        epsilon_over_kb: 80.0,
        sigma: 3.0,
        n: 14.0,
        m: 7.0,
    };
    let r_min = mie.r_min().unwrap();
    assert_relative_eq!(r_min, 3.0 * 2.0_f64.powf(1.0 / 7.0));
    assert_relative_eq!(mie.energy(r_min), -80.0, epsilon = TEST_EPSILON);
}

#[test]
fn mie_without_a_minimum() {
    let mie = Mie {
        n: 6.0,
        m: 6.0,
        ..Mie::default()
    };
    assert_eq!(mie.r_min(), None);
    let model = PotentialModel::Mie(mie);
    assert_eq!(model.minimum(), None);
    assert!(model.check().is_err());
}

#[test]
fn only_lj_and_mie_have_minima() {
    for kind in ModelKind::ALL {
        let model = PotentialModel::from_kind(kind);
        let expected = matches!(kind, ModelKind::LennardJones | ModelKind::Mie);
        assert_eq!(model.minimum().is_some(), expected, "{:?}", kind);
    }
}

#[test]
fn equations_embed_exponents() {
    let sutherland = PotentialModel::Sutherland(Sutherland {
        n: 8,
        ..Sutherland::default()
    });
    assert_eq!(
        sutherland.equation(),
        "V(r) = ∞ for r < σ, -ε(σ/r)⁸ for r ≥ σ"
    );

    let mie = PotentialModel::Mie(Mie {
        n: 14.0,
        m: 7.0,
        ..Mie::default()
    });
    assert_eq!(mie.equation(), "V(r) = Cε[(σ/r)¹⁴ - (σ/r)⁷]");

    let well = PotentialModel::from_kind(ModelKind::SquareWell);
    assert_eq!(
        well.equation(),
        "V(r) = ∞ for r < σ, -ε for σ ≤ r < 1.5σ, 0 for r ≥ 1.5σ"
    );
    let shallow = PotentialModel::SquareWell(SquareWell {
        well_width: 2.0,
        well_depth: 0.5,
        ..SquareWell::default()
    });
    assert_eq!(
        shallow.equation(),
        "V(r) = ∞ for r < σ, -0.5ε for σ ≤ r < 2σ, 0 for r ≥ 2σ"
    );

    let odd = PotentialModel::Mie(Mie {
        n: 12.5,
        ..Mie::default()
    });
    assert!(odd.equation().contains("^12.5"));
}

#[test]
fn every_model_has_metadata() {
    for kind in ModelKind::ALL {
        let model = PotentialModel::from_kind(kind);
        assert_eq!(model.kind(), kind);
        assert!(!model.name().is_empty());
        assert!(!model.description().is_empty());
        assert!(model.equation().starts_with("V(r) = "));
        assert!(model.check().is_ok());
    }
}

#[test]
fn switching_model_keeps_scale() {
    let mut session = Session::new(lj(150.0, 2.5), 4.0);
    session.select_model(ModelKind::SquareWell);
    match &session.model {
        PotentialModel::SquareWell(p) => {
            assert_eq!(p.epsilon_over_kb, 150.0);
            assert_eq!(p.sigma, 2.5);
            assert_eq!(p.well_width, 1.5);
        }
        other => panic!("expected a square well, got {:?}", other),
    }
}

#[test]
fn detents_snap_to_sigma_and_minimum() {
    let model = lj(120.0, 3.4);
    let r_min = model.minimum().unwrap();
    assert_eq!(snap_to_detent(&model, 3.42), 3.4);
    assert_eq!(snap_to_detent(&model, 3.36), 3.4);
    assert_eq!(snap_to_detent(&model, r_min + 0.04), r_min);
    assert_eq!(snap_to_detent(&model, r_min - 0.04), r_min);
    assert_eq!(snap_to_detent(&model, 3.6), 3.6);
    assert_eq!(snap_to_detent(&model, r_min + 0.06), r_min + 0.06);

    let hard = PotentialModel::from_kind(ModelKind::HardSphere);
    assert_eq!(snap_to_detent(&hard, 3.41), 3.4);
    assert_eq!(snap_to_detent(&hard, r_min), r_min);
}

#[test]
fn session_distance_goes_through_detents() {
    let mut session = Session::default();
    session.set_distance(3.81);
    assert_eq!(session.distance, session.model.minimum().unwrap());
    assert_relative_eq!(session.current_energy(), -120.0, epsilon = TEST_EPSILON);
}

#[test]
fn plot_window_limits() {
    let session = Session::default();
    let window = session.plot_window();
    assert_relative_eq!(window.r_lo(), 1.7);
    assert_eq!(window.r_hi(), 10.0);
    assert_eq!(window.v_hi(), 1200.0);
    assert_eq!(window.v_lo(), -240.0);
    assert_eq!(window.clip(f64::INFINITY), 1200.0);

    let sw = Session::new(PotentialModel::from_kind(ModelKind::SquareWell), 4.0);
    assert_eq!(sw.plot_window().v_lo(), -180.0);

    let hs = Session::new(PotentialModel::from_kind(ModelKind::HardSphere), 4.0);
    assert_eq!(hs.plot_window().v_lo(), -60.0);

    let wide = Session::new(lj(120.0, 30.0), 40.0);
    assert_eq!(wide.plot_window().r_hi(), 300.0);
}

#[test]
fn linspace_endpoints() {
    let xs = linspace(1.7, 10.0, 1000);
    assert_eq!(xs.len(), 1000);
    assert_eq!(xs[0], 1.7);
    assert_eq!(xs[999], 10.0);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    assert!(linspace(1.0, 2.0, 0).is_empty());
}

#[test]
fn hard_sphere_curve_splits_at_core() {
    let session = Session::new(PotentialModel::from_kind(ModelKind::HardSphere), 4.0);
    let curve = session.curve();
    assert_eq!(curve.len(), 1000);
    let runs = curve.finite_runs();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].iter().all(|&(r, v)| r >= 3.4 && v == 0.0));
    let core: Vec<f64> = curve.core_points().collect();
    assert!(!core.is_empty());
    assert!(core.iter().all(|&r| r < 3.4));
    assert_eq!(core.len() + runs[0].len(), curve.len());
}

#[test]
fn session_toml_defaults_and_round_trip() {
    let session: Session = toml::from_str(
        "distance = 4.5\n\n[model]\nkind = \"square-well\"\nwell_width = 2.0\n",
    )
    .unwrap();
    assert_eq!(session.distance, 4.5);
    assert_eq!(session.num_points, 1000);
    assert_eq!(
        session.model,
        PotentialModel::SquareWell(SquareWell {
            well_width: 2.0,
            ..SquareWell::default()
        })
    );

    let dir = scratch_dir("toml");
    let path = format!("{dir}/config.toml");
    write_session_toml(&session, &path).unwrap();
    assert_eq!(read_session_toml(&path).unwrap(), session);

    let untagged: Session = toml::from_str("[model]\nsigma = 3.0\n").unwrap();
    assert_eq!(untagged.model, lj(120.0, 3.0));

    assert!(toml::from_str::<Session>("[model]\nkind = \"squre-well\"\n").is_err());

    let empty: Session = toml::from_str("").unwrap();
    assert_eq!(empty, Session::default());
}

#[test]
fn buckingham_toml_uses_capital_names() {
    let session: Session =
        toml::from_str("[model]\nkind = \"buckingham\"\nA = 500.0\nB = 1.5\n").unwrap();
    match session.model {
        PotentialModel::Buckingham(p) => {
            assert_eq!(p.a, 500.0);
            assert_eq!(p.b, 1.5);
        }
        other => panic!("expected Buckingham, got {:?}", other),
    }
}

#[test]
fn overrides_are_validated() {
    let session = apply_overrides(Session::default(), Some(ModelKind::Sutherland), Some(3.43))
        .unwrap();
    assert_eq!(session.model.kind(), ModelKind::Sutherland);
    assert_eq!(session.distance, 3.4);
    assert_eq!(session.current_energy(), -120.0);

    assert!(apply_overrides(Session::default(), None, Some(-1.0)).is_err());
    assert!(apply_overrides(Session::default(), None, Some(0.0)).is_err());

    let mut bad = Session::default();
    bad.model.set_scale(120.0, 0.0);
    assert!(apply_overrides(bad, None, None).is_err());

    let mut few = Session::default();
    few.num_points = 1;
    assert!(few.check().is_err());
}

#[test]
fn curve_json_marks_core_as_null() {
    let session = Session::new(PotentialModel::from_kind(ModelKind::HardSphere), 2.0);
    let dir = scratch_dir("json");
    let path = format!("{dir}/curve.json");
    write_curve_json(&session, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["model"], "Hard Sphere");
    assert!(json["energy"].is_null());
    assert!(json["v"][0].is_null());
    assert_eq!(json["v"][999], 0.0);
    assert_eq!(json["r"].as_array().unwrap().len(), 1000);
}

#[test]
fn schematic_is_written() {
    let dir = scratch_dir("schematic");
    for (idx, distance) in [2.0, 4.0, 6.0, 10.0, 50.0, 1e4, 1e8].iter().enumerate() {
        let session = Session::new(PotentialModel::default(), *distance);
        let path = format!("{dir}/schematic_{idx}.png");
        write_schematic_png(&session, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn schematic_with_wide_particles() {
    let dir = scratch_dir("schematic-wide");
    let path = format!("{dir}/schematic.png");
    let session = Session::new(lj(120.0, 30.0), 33.0);
    write_schematic_png(&session, &path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn potential_plot_for_every_model() {
    let dir = scratch_dir("potential");
    for kind in ModelKind::ALL {
        let session = Session::new(PotentialModel::from_kind(kind), 4.0);
        let path = format!("{dir}/potential_{:?}.png", kind);
        write_potential_png(&session, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0, "{:?}", kind);
    }
}

#[test]
fn potential_plot_with_marker_inside_core() {
    let dir = scratch_dir("potential-core");
    for kind in [ModelKind::HardSphere, ModelKind::SquareWell, ModelKind::Sutherland] {
        let session = Session::new(PotentialModel::from_kind(kind), 2.0);
        assert!(session.current_energy().is_infinite());
        let path = format!("{dir}/potential_{:?}.png", kind);
        write_potential_png(&session, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0, "{:?}", kind);
    }
}

#[test]
fn unplottable_scale_is_rejected() {
    let mut session = Session::default();
    session.model.set_scale(1e308, 3.4);
    assert!(session.model.check().is_ok());
    assert!(!session.plot_window().is_finite());
    assert!(session.check().is_err());

    let mut wide = Session::default();
    wide.model.set_scale(120.0, 1e308);
    assert!(wide.check().is_err());

    assert!(Session::default().plot_window().is_finite());
}

#[quickcheck]
fn sequence_matches_scalar(model: PotentialModel, rs: Separations) -> bool {
    let batch = model.evaluate(&rs.0);
    batch.len() == rs.0.len()
        && rs
            .0
            .iter()
            .zip(batch.iter())
            .all(|(&r, &v)| v.to_bits() == model.evaluate_at(r).to_bits())
}

#[quickcheck]
fn hard_core_is_infinite_below_sigma(model: PotentialModel, rs: Separations) -> bool {
    if !model.has_hard_core() {
        return true;
    }
    let sigma = model.sigma();
    rs.0.iter().all(|&r| {
        let v = model.evaluate_at(r);
        if r < sigma {
            v == f64::INFINITY
        } else {
            v.is_finite()
        }
    })
}

#[quickcheck]
fn hard_core_boundary_is_finite(model: PotentialModel) -> bool {
    !model.has_hard_core() || model.evaluate_at(model.sigma()).is_finite()
}

#[quickcheck]
fn evaluation_is_pure(model: PotentialModel, rs: Separations) -> bool {
    let before = model.clone();
    let first = model.evaluate(&rs.0);
    let second = model.evaluate(&rs.0);
    let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
    first_bits == second_bits && model == before
}

#[quickcheck]
fn generated_sessions_are_valid(session: Session) -> bool {
    session.check().is_ok() && session.curve().len() == session.num_points
}

#[quickcheck]
fn snapping_never_moves_far(model: PotentialModel, rs: Separations) -> bool {
    rs.0
        .iter()
        .all(|&r| (snap_to_detent(&model, r) - r).abs() < 0.05)
}
