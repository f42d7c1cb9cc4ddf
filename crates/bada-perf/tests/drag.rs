mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use bada_core::constants::{GAMMA, G_0, P_0};
use bada_core::units::{deg, ft, kg, kt};
use bada_core::{pressure_ratio, tas2mach};
use bada_perf::{drag_force, CleanDrag, FlightState, PerformanceError, OUT_OF_ENVELOPE_SENTINEL};
use uom::si::force::newton;

use common::model;

const S: f64 = 122.6;

fn cruise_state() -> FlightState {
    FlightState::new(kg(78_000.0), kt(450.0), ft(35_000.0))
}

#[test]
fn lift_coefficient_balances_weight() {
    let state = cruise_state();
    let cl = model().drag().lift_coefficient(&state).unwrap();

    let mach = tas2mach(state.tas, state.altitude);
    let dp = pressure_ratio(state.altitude);
    let expected = 2.0 * 78_000.0 * G_0 / (dp * P_0 * GAMMA * S * mach * mach);
    assert_relative_eq!(cl, expected, max_relative = 1e-12);
    assert_relative_eq!(cl, 0.6134, max_relative = 1e-3);
}

#[test]
fn path_angle_raises_lift_coefficient() {
    let drag = model().drag().clone();
    let level = drag.lift_coefficient(&cruise_state()).unwrap();
    let climbing = drag
        .lift_coefficient(&cruise_state().with_path_angle(deg(3.0)))
        .unwrap();
    assert_relative_eq!(climbing, level / 3.0_f64.to_radians().cos(), max_relative = 1e-12);
}

#[test]
fn clean_drag_matches_polar() {
    let m = model();
    let state = cruise_state();
    let mach = tas2mach(state.tas, state.altitude);
    let dp = pressure_ratio(state.altitude);
    let cl = m.drag().lift_coefficient(&state).unwrap();

    let b = 1.0 - mach * mach;
    let c0 = 0.016 + 0.001 / b.sqrt() - 0.0005 / b + 0.0002 / b.powf(1.5);
    let c2 = 0.04 - 0.002 / b.powf(1.5) + 0.001 / b.powi(3);
    let c6 = 0.001;
    let cd = c0 + c2 * cl.powi(2) + c6 * cl.powi(6);
    assert_relative_eq!(
        m.drag().clean_drag_coefficient(&state).unwrap(),
        cd,
        max_relative = 1e-12
    );

    let force = m.drag().clean_drag(&state).unwrap().get::<newton>();
    let expected = 0.5 * dp * P_0 * GAMMA * S * mach * mach * cd;
    assert_relative_eq!(force, expected, max_relative = 1e-12);
    assert_abs_diff_eq!(force, 44_239.78, epsilon = 0.5);
}

#[test]
fn above_mach_limit_reports_envelope() {
    let m = model();
    let fast = FlightState::new(kg(70_000.0), kt(520.0), ft(35_000.0));

    let legacy = m.drag().clean_drag_or_sentinel(&fast).unwrap();
    assert!(matches!(legacy, CleanDrag::OutOfEnvelope { mach_max, .. } if mach_max == 0.82));
    assert_eq!(legacy.value(), OUT_OF_ENVELOPE_SENTINEL);

    match m.drag().clean_drag(&fast) {
        Err(PerformanceError::DomainViolation { mach, mach_max }) => {
            assert!(mach > mach_max);
            assert_relative_eq!(mach, 0.9021, max_relative = 1e-3);
        }
        other => panic!("expected a domain violation, got {other:?}"),
    }
}

#[test]
fn within_envelope_legacy_value_is_newtons() {
    let m = model();
    let state = cruise_state();
    let legacy = m.drag().clean_drag_or_sentinel(&state).unwrap();
    let force = m.drag().clean_drag(&state).unwrap();
    assert_eq!(legacy, CleanDrag::Force(force));
    assert_eq!(legacy.value(), force.get::<newton>());
}

#[test]
fn nonclean_quadratic_by_gear_state() {
    let m = model();
    let approach = FlightState::new(kg(60_000.0), kt(150.0), ft(2_000.0));
    let cl = m.drag().lift_coefficient(&approach).unwrap();

    let gear_up = m.drag().nonclean_drag(&approach, deg(15.0), false).unwrap();
    let gear_down = m.drag().nonclean_drag(&approach, deg(15.0), true).unwrap();
    assert_relative_eq!(gear_up, 0.03 - 0.01 * cl + 0.05 * cl * cl, max_relative = 1e-12);
    assert_abs_diff_eq!(gear_down - gear_up, 0.02, epsilon = 1e-12);
}

#[test]
fn drag_force_relation() {
    let f = drag_force(0.5, 1.0, 100.0, 0.02);
    assert_relative_eq!(f.get::<newton>(), 35_463.75, max_relative = 1e-12);
}

#[test]
fn standstill_has_no_lift_solution() {
    let m = model();
    let parked = FlightState::new(kg(60_000.0), kt(0.0), ft(35_000.0));
    for err in [
        m.drag().lift_coefficient(&parked).unwrap_err(),
        m.drag().clean_drag(&parked).unwrap_err(),
        m.drag().nonclean_drag(&parked, deg(15.0), true).unwrap_err(),
        m.thrust().cruise(kt(0.0), ft(35_000.0), None).unwrap_err(),
    ] {
        assert!(matches!(err, PerformanceError::DegenerateState { mach, .. } if mach == 0.0));
    }

    let level = FlightState::new(kg(60_000.0), kt(0.0), ft(10_000.0));
    assert!(matches!(
        m.fuel_flow().enroute(&level, None),
        Err(PerformanceError::DegenerateState { .. })
    ));
}

#[test]
fn vertical_path_has_no_lift_solution() {
    let drag = model().drag().clone();
    for angle in [90.0, -90.0, 120.0] {
        let state = cruise_state().with_path_angle(deg(angle));
        assert!(matches!(
            drag.lift_coefficient(&state),
            Err(PerformanceError::DegenerateState { .. })
        ));
    }
    assert!(drag.lift_coefficient(&cruise_state().with_path_angle(deg(-89.0))).is_ok());
}
