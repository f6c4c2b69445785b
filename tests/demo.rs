mod tests {
    use embassy_time::Instant;
    use marquee_composer::demo::{DemoConfig, DemoScheduler, MAX_MESSAGES, MessageError};
    use marquee_composer::effect::{MatrixEffectId, MatrixEffects};
    use marquee_composer::matrix::{DeviceColumns, Matrix, MatrixSink};

    struct NullSink;

    impl MatrixSink for NullSink {
        fn write(&mut self, _frame: &[DeviceColumns]) {}
    }

    struct Harness {
        demo: DemoScheduler,
        matrix: Matrix<NullSink, 4>,
        effects: MatrixEffects,
    }

    impl Harness {
        fn new(messages: &[&str]) -> Self {
            let mut demo = DemoScheduler::new(&DemoConfig::default(), Instant::from_millis(0));
            for message in messages {
                assert_eq!(demo.push_message(message), Ok(()));
            }
            Self {
                demo,
                matrix: Matrix::new(NullSink),
                effects: MatrixEffects::new(5),
            }
        }

        fn tick(&mut self, ms: u64) {
            self.demo
                .tick(Instant::from_millis(ms), &mut self.matrix, &mut self.effects);
        }

        /// Tick every 100 ms over `(from, to]`
        fn run(&mut self, from: u64, to: u64) {
            for ms in (from + 100..=to).step_by(100) {
                self.tick(ms);
            }
        }
    }

    #[test]
    fn test_empty_message_list_skips_to_first_effect() {
        let mut h = Harness::new(&[]);
        h.tick(0);
        assert_eq!(h.demo.current(), MatrixEffectId::Midline);
        assert!(!h.demo.in_messages());
    }

    #[test]
    fn test_one_switch_per_period() {
        let mut h = Harness::new(&[]);
        h.tick(0);
        h.run(0, 9_900);
        assert_eq!(h.demo.current(), MatrixEffectId::Midline);
        assert_eq!(h.demo.countdown(), 1);

        h.tick(10_000);
        assert_eq!(h.demo.current(), MatrixEffectId::MidlineBounce);
        assert_eq!(h.demo.countdown(), 10);

        h.run(10_000, 100_000);
        assert_eq!(h.demo.current(), MatrixEffectId::ArrowScroll);
    }

    #[test]
    fn test_messages_rotate_before_first_effect() {
        let mut h = Harness::new(&["ONE", "TWO", "THREE"]);
        h.tick(0);
        assert_eq!(h.demo.current(), MatrixEffectId::ScrollText);
        assert!(h.demo.in_messages());
        assert_eq!(h.demo.message_index(), 0);

        h.run(0, 10_000);
        assert_eq!(h.demo.message_index(), 1);
        assert_eq!(h.effects.scroll_text().message(), "TWO");

        h.run(10_000, 29_900);
        assert_eq!(h.demo.current(), MatrixEffectId::ScrollText);
        assert_eq!(h.demo.message_index(), 2);

        h.tick(30_000);
        assert_eq!(h.demo.current(), MatrixEffectId::Midline);
        assert!(!h.demo.in_messages());
        assert_eq!(h.demo.message_index(), 0);
    }

    #[test]
    fn test_rotation_wraps_back_to_messages() {
        let mut h = Harness::new(&["HELLO"]);
        h.tick(0);
        h.demo.jump_to(MatrixEffectId::Sinewave, Instant::from_millis(0));
        h.tick(0);
        assert_eq!(h.demo.current(), MatrixEffectId::Sinewave);

        h.run(0, 10_000);
        assert_eq!(h.demo.current(), MatrixEffectId::ScrollText);
        assert!(h.demo.in_messages());
        assert_eq!(h.effects.scroll_text().message(), "HELLO");
    }

    #[test]
    fn test_jump_to_restarts_countdown() {
        let mut h = Harness::new(&[]);
        h.tick(0);
        h.run(0, 5_000);
        h.demo.jump_to(MatrixEffectId::Pacman, Instant::from_millis(5_000));
        assert_eq!(h.demo.countdown(), 10);

        h.run(5_000, 14_900);
        assert_eq!(h.demo.current(), MatrixEffectId::Pacman);
        h.tick(15_000);
        assert_eq!(h.demo.current(), MatrixEffectId::ArrowRotate);
    }

    #[test]
    fn test_push_message_limits() {
        let mut demo = DemoScheduler::new(&DemoConfig::default(), Instant::from_millis(0));
        let long = "x".repeat(76);
        assert_eq!(demo.push_message(&long), Err(MessageError::TooLong));

        for _ in 0..MAX_MESSAGES {
            assert_eq!(demo.push_message("hi"), Ok(()));
        }
        assert_eq!(demo.push_message("hi"), Err(MessageError::ListFull));

        demo.clear_messages();
        assert!(demo.messages().is_empty());
    }

    #[test]
    fn test_custom_duration() {
        let config = DemoConfig {
            effect_duration_secs: 2,
        };
        let mut demo = DemoScheduler::new(&config, Instant::from_millis(0));
        let mut matrix: Matrix<NullSink, 4> = Matrix::new(NullSink);
        let mut effects = MatrixEffects::new(5);

        demo.tick(Instant::from_millis(0), &mut matrix, &mut effects);
        demo.tick(Instant::from_millis(1_000), &mut matrix, &mut effects);
        assert_eq!(demo.current(), MatrixEffectId::Midline);
        demo.tick(Instant::from_millis(2_000), &mut matrix, &mut effects);
        assert_eq!(demo.current(), MatrixEffectId::MidlineBounce);
    }
}
