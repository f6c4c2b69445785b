mod tests {
    use embassy_time::Instant;
    use marquee_composer::effect::{
        ARROW_ROTATE_SEQUENCE, Bounce, HeartbeatPhase, MatrixEffectId, MatrixEffects, TextPhase,
    };
    use marquee_composer::matrix::{DeviceColumns, Matrix, MatrixSink, Transform};

    #[derive(Default)]
    struct RecordingSink {
        writes: usize,
        intensity: u8,
    }

    impl MatrixSink for RecordingSink {
        fn write(&mut self, _frame: &[DeviceColumns]) {
            self.writes += 1;
        }

        fn set_intensity(&mut self, intensity: u8) {
            self.intensity = intensity;
        }
    }

    type TestMatrix = Matrix<RecordingSink, 4>;

    /// Steps one effect with a full second between calls, so every delay has
    /// elapsed
    struct Runner {
        effects: MatrixEffects,
        matrix: TestMatrix,
        now: u64,
    }

    impl Runner {
        fn new(seed: u64) -> Self {
            Self {
                effects: MatrixEffects::new(seed),
                matrix: Matrix::new(RecordingSink::default()),
                now: 0,
            }
        }

        fn start(&mut self, id: MatrixEffectId, message: &str) -> bool {
            self.now += 1000;
            self.effects
                .step(id, &mut self.matrix, Instant::from_millis(self.now), message, true)
        }

        fn step(&mut self, id: MatrixEffectId) -> bool {
            self.now += 1000;
            self.effects
                .step(id, &mut self.matrix, Instant::from_millis(self.now), "", false)
        }

        fn lit_columns(&self) -> usize {
            self.matrix.buffer().iter().flatten().filter(|c| **c != 0).count()
        }
    }

    #[test]
    fn test_effect_id_names() {
        assert_eq!(MatrixEffectId::COUNT, 19);
        assert_eq!(MatrixEffectId::from_raw(0), Some(MatrixEffectId::ScrollText));
        assert_eq!(MatrixEffectId::from_raw(18), Some(MatrixEffectId::Sinewave));
        assert_eq!(MatrixEffectId::from_raw(19), None);
        assert_eq!(
            MatrixEffectId::parse_from_str("spectrum_mirrored"),
            Some(MatrixEffectId::SpectrumMirrored)
        );
        assert_eq!(MatrixEffectId::BounceBall.as_str(), "bounce_ball");
        assert_eq!(MatrixEffectId::parse_from_str("matrix"), None);
    }

    #[test]
    fn test_effect_ids_round_trip_by_name() {
        for raw in 0..MatrixEffectId::COUNT {
            let Some(id) = MatrixEffectId::from_raw(raw) else {
                panic!("missing id {raw}");
            };
            assert_eq!(MatrixEffectId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_effect_id_next_wraps() {
        assert_eq!(MatrixEffectId::ScrollText.next(), MatrixEffectId::Midline);
        assert_eq!(MatrixEffectId::Sinewave.next(), MatrixEffectId::ScrollText);
    }

    #[test]
    fn test_bounce_reverses_exactly_at_the_ends() {
        let mut bounce = Bounce::default();
        let positions: Vec<i16> = (0..12).map(|_| bounce.advance(5)).collect();
        assert_eq!(positions, [1, 2, 3, 4, 5, 4, 3, 2, 1, 0, 1, 2]);

        for _ in 0..1000 {
            let position = bounce.advance(5);
            assert!((0..=5).contains(&position));
        }
    }

    #[test]
    fn test_step_waits_for_delay() {
        let mut effects = MatrixEffects::new(1);
        let mut matrix: TestMatrix = Matrix::new(RecordingSink::default());
        let id = MatrixEffectId::Scanner;

        effects.step(id, &mut matrix, Instant::from_millis(0), "", true);
        assert_eq!(matrix.column(0), Some(0xFF));
        assert_eq!(matrix.column(2), Some(0xFF));
        assert_eq!(matrix.column(3), Some(0));

        let writes = matrix.sink().writes;
        effects.step(id, &mut matrix, Instant::from_millis(10), "", false);
        assert_eq!(matrix.sink().writes, writes);
        assert_eq!(matrix.column(0), Some(0xFF));

        effects.step(id, &mut matrix, Instant::from_millis(50), "", false);
        assert_eq!(matrix.column(0), Some(0));
        assert_eq!(matrix.column(3), Some(0xFF));
    }

    #[test]
    fn test_reinit_restarts_from_the_beginning() {
        let mut runner = Runner::new(1);
        runner.start(MatrixEffectId::Scanner, "");
        for _ in 0..5 {
            runner.step(MatrixEffectId::Scanner);
        }
        assert_eq!(runner.matrix.column(0), Some(0));

        runner.start(MatrixEffectId::Scanner, "");
        assert_eq!(runner.matrix.column(0), Some(0xFF));
        assert_eq!(runner.lit_columns(), 3);
    }

    #[test]
    fn test_bounce_ball_round_trip() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::BounceBall;
        runner.start(id, "");
        for _ in 1..30 {
            assert!(!runner.step(id));
        }
        let ball = runner.effects.bounce_ball().ball();
        assert_eq!(ball.position(), 30);
        assert!(!ball.is_forward());

        for _ in 0..30 {
            assert!(!runner.step(id));
        }
        let ball = runner.effects.bounce_ball().ball();
        assert_eq!(ball.position(), 0);
        assert!(ball.is_forward());
    }

    #[test]
    fn test_heartbeat_phases() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Heartbeat;

        let mut phases = Vec::new();
        runner.start(id, "");
        phases.push(runner.effects.heartbeat().phase());
        for _ in 1..34 {
            runner.step(id);
            phases.push(runner.effects.heartbeat().phase());
        }

        let first = |phase| phases.iter().position(|p| *p == phase).map(|i| i + 1);
        assert_eq!(first(HeartbeatPhase::UpStroke), Some(8));
        assert_eq!(first(HeartbeatPhase::DownStroke), Some(13));
        assert_eq!(first(HeartbeatPhase::ReturnStroke), Some(21));
        assert_eq!(first(HeartbeatPhase::LeadOut), Some(25));
        assert!(runner.effects.heartbeat().is_drawing());

        assert!(runner.matrix.point(4, 31));
        assert!(runner.matrix.point(4, 24));
        assert!(runner.matrix.point(0, 19));
        assert!(runner.matrix.point(7, 12));
        assert!(!runner.matrix.point(4, 0));

        runner.step(id);
        assert!(runner.matrix.point(4, 0));
        let heartbeat = runner.effects.heartbeat();
        assert_eq!(heartbeat.phase(), HeartbeatPhase::LeadIn);
        assert_eq!(heartbeat.col(), 31);
        assert!(!heartbeat.is_drawing());
    }

    #[test]
    fn test_heartbeat_second_pass_erases_the_trace() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Heartbeat;
        runner.start(id, "");
        for _ in 1..70 {
            runner.step(id);
        }
        assert_eq!(runner.lit_columns(), 0);
        assert!(runner.effects.heartbeat().is_drawing());
    }

    #[test]
    fn test_arrow_rotate_finishes_after_sequence() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::ArrowRotate;
        assert!(!runner.start(id, ""));
        for _ in 2..ARROW_ROTATE_SEQUENCE.len() {
            assert!(!runner.step(id));
        }
        assert!(runner.step(id));

        let arrow = [0x00, 0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x00];
        let mut expected: TestMatrix = Matrix::new(RecordingSink::default());
        for device in 0..4 {
            expected.set_device_buffer(device, &arrow);
        }
        expected.transform(Transform::RotateClockwise);
        assert_eq!(runner.matrix.buffer(), expected.buffer());
    }

    #[test]
    fn test_scroll_text_loads_and_emits_in_one_step() {
        let mut runner = Runner::new(1);
        assert!(!runner.start(MatrixEffectId::ScrollText, "A"));
        assert_eq!(runner.matrix.column(0), Some(0x7E));
        assert_eq!(runner.effects.scroll_text().phase(), TextPhase::EmitGlyph);
    }

    #[test]
    fn test_scroll_text_scrolls_message_off() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::ScrollText;
        runner.start(id, "I");
        runner.step(id);
        runner.step(id);
        assert_eq!(runner.matrix.column(0), Some(0x41));
        assert_eq!(runner.matrix.column(1), Some(0x7F));
        assert_eq!(runner.matrix.column(2), Some(0x41));

        for _ in 4..34 {
            assert!(!runner.step(id));
        }
        assert!(runner.step(id));
        assert_eq!(runner.matrix.column(31), Some(0x41));
        assert_eq!(runner.lit_columns(), 1);
    }

    #[test]
    fn test_scroll_text_replaces_non_ascii() {
        let mut runner = Runner::new(1);
        runner.start(MatrixEffectId::ScrollText, "é");
        assert_eq!(runner.effects.scroll_text().message(), "?");
    }

    #[test]
    fn test_scroll_text_empty_message_is_done() {
        let mut runner = Runner::new(1);
        assert!(runner.start(MatrixEffectId::ScrollText, ""));
    }

    #[test]
    fn test_midline() {
        let mut runner = Runner::new(1);
        assert!(!runner.start(MatrixEffectId::Midline, ""));
        assert!(runner.matrix.buffer().iter().flatten().all(|c| *c == 0x18));
    }

    #[test]
    fn test_midline_bounce() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::MidlineBounce;
        runner.start(id, "");
        let mut columns = vec![runner.matrix.column(0)];
        for _ in 0..4 {
            runner.step(id);
            columns.push(runner.matrix.column(0));
        }
        assert_eq!(
            columns,
            [Some(0x18), Some(0x24), Some(0x42), Some(0x81), Some(0x42)]
        );
    }

    #[test]
    fn test_wiper_fills_then_clears() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Wiper;
        runner.start(id, "");
        for _ in 1..32 {
            runner.step(id);
        }
        assert_eq!(runner.lit_columns(), 32);

        runner.step(id);
        assert_eq!(runner.matrix.column(31), Some(0));
        assert_eq!(runner.matrix.column(30), Some(0xFF));
    }

    #[test]
    fn test_fade_sweeps_intensity() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Fade;
        runner.start(id, "");
        assert_eq!(runner.lit_columns(), 32);
        assert_eq!(runner.matrix.intensity(), 1);

        for _ in 1..15 {
            runner.step(id);
        }
        assert_eq!(runner.matrix.sink().intensity, 15);
        runner.step(id);
        assert_eq!(runner.matrix.intensity(), 14);
    }

    #[test]
    fn test_hearts_alternate() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Hearts;
        runner.start(id, "");
        assert_eq!(runner.matrix.column(7), Some(0x84));
        assert_eq!(runner.matrix.column(8), Some(0x84));
        assert_eq!(runner.matrix.column(4), Some(0x1C));

        runner.step(id);
        assert_eq!(runner.matrix.column(7), Some(0xFC));
        assert_eq!(runner.matrix.column(11), Some(0x1C));
    }

    #[test]
    fn test_invader_walks_off_screen() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Invader;
        assert!(!runner.start(id, ""));
        let mut steps = 1;
        while !runner.step(id) {
            steps += 1;
            assert!(steps < 100);
        }
        assert_eq!(steps + 1, 43);
        assert_eq!(runner.lit_columns(), 0);
    }

    #[test]
    fn test_pacman_walks_off_screen() {
        let mut runner = Runner::new(1);
        let id = MatrixEffectId::Pacman;
        assert!(!runner.start(id, ""));
        let mut steps = 1;
        while !runner.step(id) {
            steps += 1;
            assert!(steps < 100);
        }
        assert_eq!(steps + 1, 51);
    }

    #[test]
    fn test_feed_effects_shift_in_from_the_right() {
        let mut runner = Runner::new(1);
        runner.start(MatrixEffectId::ArrowScroll, "");
        runner.step(MatrixEffectId::ArrowScroll);
        assert_eq!(runner.matrix.column(0), Some(0x66));
        assert_eq!(runner.matrix.column(1), Some(0x3C));

        runner.start(MatrixEffectId::Sinewave, "");
        assert_eq!(runner.matrix.column(0), Some(0x09));
        assert_eq!(runner.lit_columns(), 1);
    }

    #[test]
    fn test_spectrum_bars_grow_from_the_bottom() {
        let mut runner = Runner::new(3);
        runner.start(MatrixEffectId::Spectrum, "");
        for column in runner.matrix.buffer().iter().flatten() {
            let height = column.count_ones();
            assert_eq!(u32::from(*column), (0xFF00_u32 >> height) & 0xFF);
        }
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = Runner::new(42);
        let mut b = Runner::new(42);
        for id in [MatrixEffectId::Random, MatrixEffectId::Eyes, MatrixEffectId::SpectrumMirrored] {
            a.start(id, "");
            b.start(id, "");
            for _ in 0..5 {
                a.step(id);
                b.step(id);
                assert_eq!(a.matrix.buffer(), b.matrix.buffer());
            }
        }
    }
}
