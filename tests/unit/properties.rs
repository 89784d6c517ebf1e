//! Property tests for step accounting.

use angle_stepper::{Degrees, MicroDegrees, MotorConfig, StepMode, StepResolution, Steps};
use proptest::prelude::*;

use crate::fakes::stepper;

fn step_mode() -> impl Strategy<Value = StepMode> {
    prop_oneof![
        Just(StepMode::Full),
        Just(StepMode::Half),
        Just(StepMode::Quarter),
        Just(StepMode::Eighth),
    ]
}

proptest! {
    #[test]
    fn resolution_matches_formula(
        mode in step_mode(),
        steps_per_revolution in 1u16..1000,
        gear_ratio in 0.5f32..10.0,
    ) {
        let config = MotorConfig {
            step_mode: mode,
            steps_per_revolution,
            gear_ratio,
            ..MotorConfig::default()
        };
        let res = StepResolution::from_config(&config);

        let microsteps = (steps_per_revolution as u32 * mode.microsteps()) as f32;
        let expected = 360.0 / (microsteps * gear_ratio);
        prop_assert_eq!(res.angle_per_step.0, expected);
        prop_assert_eq!(
            res.micro_angle_per_step.0,
            libm::roundf(expected * 1e6) as i32
        );
    }

    #[test]
    fn move_steps_changes_step_and_angle_by_n(n in -99i32..99) {
        let mut motor = stepper(&MotorConfig::default());
        motor.set_current_angle(Degrees(180.0));
        let per_step = motor.resolution().micro_angle_per_step.0;

        motor.move_steps(n).unwrap();

        prop_assert_eq!(motor.current_step(), Steps(n as i64));
        prop_assert_eq!(
            motor.current_micro_angle(),
            MicroDegrees(180_000_000 + n * per_step)
        );
        prop_assert_eq!(motor.micro_angle_swept(), n.unsigned_abs() as i64 * per_step as i64);
    }

    #[test]
    fn swept_is_sum_of_all_steps(
        mode in step_mode(),
        moves in proptest::collection::vec(-40i32..40, 1..12),
    ) {
        let config = MotorConfig { step_mode: mode, ..MotorConfig::default() };
        let mut motor = stepper(&config);
        let per_step = motor.resolution().micro_angle_per_step.0 as i64;

        let mut expected = 0i64;
        for n in moves {
            let before = motor.micro_angle_swept();
            motor.move_steps(n).unwrap();
            prop_assert!(motor.micro_angle_swept() >= before);
            expected += n.unsigned_abs() as i64 * per_step;
        }

        prop_assert_eq!(motor.micro_angle_swept(), expected);
        let (step, _, delay) = motor.release();
        prop_assert_eq!(delay.dwells_us.len() as i64 * per_step, expected);
        prop_assert_eq!(step.pulses() as i64 * per_step, expected);
    }

    #[test]
    fn angle_stays_below_full_revolution(
        moves in proptest::collection::vec(0i32..500, 1..6),
    ) {
        let mut motor = stepper(&MotorConfig::default());

        for n in moves {
            motor.move_steps(n).unwrap();
            prop_assert!(motor.current_micro_angle() < MicroDegrees::FULL_REVOLUTION);
            prop_assert!(motor.current_micro_angle() >= MicroDegrees(0));
        }
    }

    #[test]
    fn move_by_round_trip_is_bounded(delta in -170.0f32..170.0) {
        let mut motor = stepper(&MotorConfig::default());
        motor.set_current_angle(Degrees(180.0));
        let per_step = motor.resolution().micro_angle_per_step.0;

        motor.move_by(Degrees(delta)).unwrap();
        motor.move_by(Degrees(-delta)).unwrap();

        let error = (motor.current_micro_angle().0 - 180_000_000).abs();
        prop_assert!(error <= 2 * per_step);
    }
}
