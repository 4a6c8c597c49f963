//! # Integration Tests
//!
//! 跨 crate 集成测试。
//!
//! 负责：
//! - 合约冒烟测试
//! - 差速 / 舵轮轨迹的采样与翻转
//! - 从磁盘加载场地配置并应用到轨迹

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
        assert_eq!(contracts::Season::default(), contracts::Season::DEFAULT);
    }
}

#[cfg(test)]
mod sampling_tests {
    use std::f64::consts::PI;

    use trajectory::{
        DifferentialSample, DifferentialTrajectory, EventMarker, FieldFlipper, FieldSymmetry,
        LookupOutcome, Season, SwerveSample, SwerveTrajectory, Symmetry, TrajectorySample,
    };

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    /// Headings are unwrapped, so equal directions may differ by whole turns
    fn assert_same_direction(actual: f64, expected: f64) {
        let d = (actual - expected).rem_euclid(2.0 * PI);
        assert!(
            d.min(2.0 * PI - d) < EPS,
            "expected direction {expected}, got {actual}"
        );
    }

    fn tank_trajectory() -> DifferentialTrajectory {
        let samples = vec![
            DifferentialSample {
                timestamp: 0.0,
                x: 0.0,
                vl: 1.0,
                vr: 2.0,
                omega: 0.5,
                ..Default::default()
            },
            DifferentialSample {
                timestamp: 2.0,
                x: 4.0,
                vl: 1.0,
                vr: 2.0,
                omega: 0.5,
                ..Default::default()
            },
        ];
        DifferentialTrajectory::new("tank", samples, vec![0], Vec::new())
    }

    fn tank_sample(timestamp: f64, x: f64, heading: f64) -> DifferentialSample {
        DifferentialSample {
            timestamp,
            x,
            y: 2.0 - x / 4.0,
            heading,
            vl: 1.0 + x,
            vr: 2.0 - x,
            omega: 0.3 * x,
            al: 0.5,
            ar: -0.5 + x,
            fl: 10.0 * x,
            fr: -4.0,
        }
    }

    /// Turns through π between the second and third samples
    fn turning_tank_trajectory() -> DifferentialTrajectory {
        let samples = vec![
            tank_sample(0.0, 1.0, 2.9),
            tank_sample(1.0, 2.0, 3.0),
            tank_sample(2.0, 3.5, 3.3),
            tank_sample(3.0, 4.0, 3.6),
        ];
        DifferentialTrajectory::new("turning_tank", samples, Vec::new(), Vec::new())
    }

    fn swerve_sample(timestamp: f64, x: f64, heading: f64) -> SwerveSample {
        SwerveSample {
            timestamp,
            x,
            y: 1.0 + x / 2.0,
            heading,
            vx: 2.0,
            vy: -1.0,
            omega: 0.4,
            ax: 0.5,
            ay: 0.25,
            alpha: -0.1,
            fx: [1.0, 2.0, 3.0, 4.0],
            fy: [5.0, 6.0, 7.0, 8.0],
        }
    }

    fn swerve_trajectory() -> SwerveTrajectory {
        let samples = vec![
            swerve_sample(0.0, 1.0, 0.1),
            swerve_sample(1.0, 2.0, 0.2),
            swerve_sample(2.0, 4.0, 0.4),
            swerve_sample(3.0, 5.0, 0.5),
        ];
        let events = vec![
            EventMarker::new(0.5, "intake"),
            EventMarker::new(2.5, "shoot"),
        ];
        SwerveTrajectory::new("two_piece", samples, vec![0, 2], events)
    }

    /// Facing -X, heading crosses π between the first two samples
    fn turning_swerve_trajectory() -> SwerveTrajectory {
        let samples = vec![
            swerve_sample(0.0, 1.0, 3.0),
            swerve_sample(1.0, 2.0, 3.3),
            swerve_sample(2.0, 3.0, 3.6),
            swerve_sample(3.0, 4.0, 3.9),
        ];
        SwerveTrajectory::new("turnaround", samples, Vec::new(), Vec::new())
    }

    fn assert_swerve_close(a: &SwerveSample, b: &SwerveSample) {
        assert_close(a.timestamp, b.timestamp);
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
        assert_close(a.heading, b.heading);
        assert_close(a.vx, b.vx);
        assert_close(a.vy, b.vy);
        assert_close(a.omega, b.omega);
        assert_close(a.ax, b.ax);
        assert_close(a.ay, b.ay);
        assert_close(a.alpha, b.alpha);
        for i in 0..a.fx.len() {
            assert_close(a.fx[i], b.fx[i]);
            assert_close(a.fy[i], b.fy[i]);
        }
    }

    fn assert_tank_close(a: &DifferentialSample, b: &DifferentialSample) {
        assert_close(a.timestamp, b.timestamp);
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
        assert_close(a.heading, b.heading);
        assert_close(a.vl, b.vl);
        assert_close(a.vr, b.vr);
        assert_close(a.omega, b.omega);
        assert_close(a.al, b.al);
        assert_close(a.ar, b.ar);
        assert_close(a.fl, b.fl);
        assert_close(a.fr, b.fr);
    }

    fn all_fields() -> [FieldSymmetry; 4] {
        [
            FieldSymmetry::for_season(Season::Y2022),
            FieldSymmetry::for_season(Season::Y2023),
            FieldSymmetry::for_season(Season::Y2024),
            FieldSymmetry::for_season(Season::Y2025),
        ]
    }

    #[test]
    fn test_tank_midpoint_and_mirror() {
        let trajectory = tank_trajectory();
        let field = FieldSymmetry::new(Symmetry::Mirrored, 16.0, 8.0);

        let blue = trajectory.sample_at(1.0, None).unwrap();
        assert_close(blue.x, 2.0);
        assert_close(blue.vl, 1.0);
        assert_close(blue.vr, 2.0);

        let red = trajectory.sample_at(1.0, Some(&field)).unwrap();
        assert_close(red.x, 14.0);
        assert_close(red.vl, 2.0);
        assert_close(red.vr, 1.0);
        assert_close(red.omega, -0.5);
    }

    #[test]
    fn test_swerve_flip_twice_restores_samples() {
        for trajectory in [swerve_trajectory(), turning_swerve_trajectory()] {
            for field in all_fields() {
                let restored = trajectory.flipped(&field).flipped(&field);
                for (a, b) in trajectory.samples().iter().zip(restored.samples()) {
                    assert_same_direction(b.heading, a.heading);
                    assert_swerve_close(a, &SwerveSample { heading: a.heading, ..*b });
                }
            }
        }
    }

    #[test]
    fn test_tank_flip_twice_restores_samples() {
        let trajectory = turning_tank_trajectory();
        for field in all_fields() {
            let restored = trajectory.flipped(&field).flipped(&field);
            for (a, b) in trajectory.samples().iter().zip(restored.samples()) {
                assert_same_direction(b.heading, a.heading);
                assert_tank_close(a, &DifferentialSample { heading: a.heading, ..*b });
            }
        }
    }

    #[test]
    fn test_swerve_flip_commutes_with_interpolation() {
        for trajectory in [swerve_trajectory(), turning_swerve_trajectory()] {
            for field in all_fields() {
                let red = trajectory.flipped(&field);
                for t in [0.25, 0.5, 1.5, 2.5, 2.75] {
                    let sampled_then_flipped = trajectory.sample_at(t, Some(&field)).unwrap();
                    let flipped_then_sampled = red.sample_at(t, None).unwrap();
                    assert_swerve_close(&sampled_then_flipped, &flipped_then_sampled);
                }
            }
        }
    }

    #[test]
    fn test_tank_flip_commutes_with_interpolation() {
        let trajectory = turning_tank_trajectory();
        for field in all_fields() {
            let red = trajectory.flipped(&field);
            for t in [0.1, 0.5, 1.5, 2.25, 2.9] {
                let sampled_then_flipped = trajectory.sample_at(t, Some(&field)).unwrap();
                let flipped_then_sampled = red.sample_at(t, None).unwrap();
                assert_tank_close(&sampled_then_flipped, &flipped_then_sampled);
            }
        }
    }

    #[test]
    fn test_rotated_flip_keeps_heading_continuous_through_pi() {
        let trajectory = turning_swerve_trajectory();
        let field = FieldSymmetry::new(Symmetry::Rotated, 16.0, 8.0);
        let red = trajectory.flipped(&field);

        // flipped headings step exactly as the originals do
        for (blue, red) in trajectory.samples().windows(2).zip(red.samples().windows(2)) {
            assert_close(red[1].heading - red[0].heading, blue[1].heading - blue[0].heading);
        }

        let mid = red.sample_at(0.5, None).unwrap();
        assert_close(mid.heading, 3.15 + PI);
        assert_same_direction(mid.pose().heading(), 3.15 - PI);
    }

    #[test]
    fn test_clamping_at_both_ends() {
        let trajectory = swerve_trajectory();
        let first = trajectory.samples()[0];
        let last = trajectory.samples()[3];
        assert_eq!(trajectory.sample_at(-1.0, None), Some(first));
        assert_eq!(trajectory.sample_at(3.0, None), Some(last));
        assert_eq!(trajectory.sample_at(100.0, None), Some(last));
    }

    #[test]
    fn test_single_sample_at_any_time() {
        let sample = swerve_sample(0.7, 3.0, 1.0);
        let trajectory = SwerveTrajectory::new("hold", vec![sample], Vec::new(), Vec::new());
        for t in [-5.0, 0.0, 0.7, 42.0] {
            assert_eq!(trajectory.sample_at(t, None), Some(sample));
        }
    }

    #[test]
    fn test_empty_trajectory_has_no_state() {
        let trajectory = SwerveTrajectory::new("empty", Vec::new(), Vec::new(), Vec::new());
        let field = FieldSymmetry::default();
        assert_eq!(trajectory.sample_at(1.0, Some(&field)), None);
        assert!(trajectory.initial_pose(None).is_none());
        assert!(trajectory.final_pose(Some(&field)).is_none());
    }

    #[test]
    fn test_flipped_initial_pose_matches_flipped_trajectory() {
        let trajectory = swerve_trajectory();
        let field = FieldSymmetry::for_season(Season::Y2023);
        let expected = trajectory.flipped(&field).samples()[0].pose();
        let pose = trajectory.initial_pose(Some(&field)).unwrap();
        assert_close(pose.x(), expected.x());
        assert_close(pose.y(), expected.y());
        assert_close(pose.heading(), expected.heading());
    }

    #[test]
    fn test_split_then_flip() {
        let trajectory = swerve_trajectory();
        let field = FieldSymmetry::for_season(Season::Y2024);

        let second = trajectory.split(1).unwrap();
        assert_eq!(second.name(), "two_piece[1]");
        assert_eq!(second.len(), 2);
        assert_close(second.total_time(), 1.0);
        assert_eq!(second.events().len(), 1);
        assert_close(second.events()[0].timestamp, 0.5);
        assert_eq!(second.events_named("shoot").count(), 1);

        let red = second.flipped(&field);
        let sample = red.sample_at(0.0, None).unwrap();
        assert_close(sample.x, field.flip_x(4.0));
        assert_close(sample.timestamp, 0.0);
    }

    #[test]
    fn test_locate_reports_outcomes() {
        let trajectory = swerve_trajectory();
        let outcomes: Vec<LookupOutcome> = [-1.0, 0.5, 1.5, 2.5, 9.0]
            .into_iter()
            .map(|t| trajectory.locate(t).unwrap().outcome())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                LookupOutcome::ClampedStart,
                LookupOutcome::Interpolated,
                LookupOutcome::Interpolated,
                LookupOutcome::Interpolated,
                LookupOutcome::ClampedEnd,
            ]
        );
    }
}

#[cfg(test)]
mod field_config_tests {
    use std::io::Write;

    use field_config::{ConfigFormat, FieldConfigLoader};
    use trajectory::{
        DifferentialSample, DifferentialTrajectory, FieldSymmetry, Season, Symmetry,
    };

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_season_config_drives_flip() {
        let file = write_config(".toml", "[field]\nseason = 2024\n");
        let field = FieldConfigLoader::load_symmetry(file.path()).unwrap();
        assert_eq!(field, FieldSymmetry::for_season(Season::Y2024));

        let trajectory = DifferentialTrajectory::new(
            "side_auto",
            vec![DifferentialSample {
                timestamp: 0.0,
                x: 1.0,
                y: 2.0,
                vl: 0.5,
                vr: 1.5,
                ..Default::default()
            }],
            Vec::new(),
            Vec::new(),
        );
        let red = trajectory.sample_at(0.0, Some(&field)).unwrap();
        assert!((red.x - (16.541 - 1.0)).abs() < 1e-9);
        assert_eq!(red.y, 2.0);
        assert_eq!((red.vl, red.vr), (1.5, 0.5));
    }

    #[test]
    fn test_custom_json_config() {
        let file = write_config(
            ".json",
            r#"{ "field": { "symmetry": "rotated", "length_m": 10.0, "width_m": 5.0 } }"#,
        );
        let field = FieldConfigLoader::load_symmetry(file.path()).unwrap();
        assert_eq!(field, FieldSymmetry::new(Symmetry::Rotated, 10.0, 5.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = FieldConfigLoader::load_from_str(
            "[field]\nsymmetry = \"mirrored\"\nlength_m = 16.0\n",
            ConfigFormat::Toml,
        );
        assert!(result.is_err());
    }
}
