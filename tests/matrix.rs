mod tests {
    use marquee_composer::matrix::font::glyph;
    use marquee_composer::matrix::{DeviceColumns, Matrix, MatrixSink, Transform};

    #[derive(Default)]
    struct RecordingSink {
        writes: usize,
        last: Vec<DeviceColumns>,
        intensity: u8,
    }

    impl MatrixSink for RecordingSink {
        fn write(&mut self, frame: &[DeviceColumns]) {
            self.writes += 1;
            self.last = frame.to_vec();
        }

        fn set_intensity(&mut self, intensity: u8) {
            self.intensity = intensity;
        }
    }

    fn matrix() -> Matrix<RecordingSink, 4> {
        Matrix::new(RecordingSink::default())
    }

    #[test]
    fn test_points_and_columns() {
        let mut m = matrix();
        assert_eq!(m.columns(), 32);

        assert!(m.set_point(3, 10, true));
        assert!(m.point(3, 10));
        assert_eq!(m.column(10), Some(0x08));

        assert!(m.set_point(3, 10, false));
        assert_eq!(m.column(10), Some(0));
    }

    #[test]
    fn test_off_screen_is_ignored() {
        let mut m = matrix();
        assert!(!m.set_column(-1, 0xFF));
        assert!(!m.set_column(32, 0xFF));
        assert!(!m.set_point(8, 0, true));
        assert_eq!(m.column(-1), None);
        assert_eq!(m.column(32), None);
        assert!(!m.point(0, 40));
        assert_eq!(m.sink().writes, 0);
    }

    #[test]
    fn test_set_row_repeats_on_every_device() {
        let mut m = matrix();
        m.set_row(0, 0x01);
        for device in 0..4 {
            assert_eq!(m.column(device * 8), Some(0x01));
            assert_eq!(m.column(device * 8 + 1), Some(0x00));
        }
    }

    #[test]
    fn test_set_device_buffer_order() {
        let mut m = matrix();
        m.set_device_buffer(1, &[0x11, 0, 0, 0, 0, 0, 0, 0x22]);
        assert_eq!(m.column(15), Some(0x11));
        assert_eq!(m.column(8), Some(0x22));
        assert!(!m.set_device_buffer(4, &[0; 8]));
    }

    #[test]
    fn test_shift_left() {
        let mut m = matrix();
        m.set_column(0, 0xAA);
        m.set_column(31, 0x01);
        m.transform(Transform::ShiftLeft);
        assert_eq!(m.column(0), Some(0));
        assert_eq!(m.column(1), Some(0xAA));
        assert_eq!(m.buffer().iter().flatten().filter(|c| **c != 0).count(), 1);
    }

    #[test]
    fn test_shift_wrapping() {
        let mut m = matrix();
        m.set_column(31, 0x01);
        m.transform_wrapping(Transform::ShiftLeft);
        assert_eq!(m.column(0), Some(0x01));

        m.transform_wrapping(Transform::ShiftRight);
        assert_eq!(m.column(31), Some(0x01));
        assert_eq!(m.column(0), Some(0));

        m.set_column(5, 0x81);
        m.transform_wrapping(Transform::ShiftDown);
        assert_eq!(m.column(5), Some(0x03));
        m.transform(Transform::ShiftUp);
        assert_eq!(m.column(5), Some(0x01));
    }

    #[test]
    fn test_rotate_clockwise() {
        let mut m = matrix();
        m.set_point(0, 0, true);
        m.transform(Transform::RotateClockwise);
        assert!(m.point(7, 0));
        assert!(!m.point(0, 0));
    }

    #[test]
    fn test_involutions() {
        let mut m = matrix();
        m.set_device_buffer(0, &[0x00, 0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x00]);
        m.set_column(20, 0x35);
        let original = *m.buffer();

        for _ in 0..4 {
            m.transform(Transform::RotateClockwise);
        }
        assert_eq!(*m.buffer(), original);

        m.transform(Transform::Invert);
        assert_ne!(*m.buffer(), original);
        m.transform(Transform::Invert);
        assert_eq!(*m.buffer(), original);

        m.transform(Transform::FlipUpDown);
        m.transform(Transform::FlipUpDown);
        m.transform(Transform::FlipLeftRight);
        m.transform(Transform::FlipLeftRight);
        assert_eq!(*m.buffer(), original);
    }

    #[test]
    fn test_auto_update_transmits_every_change() {
        let mut m = matrix();
        m.set_column(0, 1);
        m.set_column(1, 2);
        assert_eq!(m.sink().writes, 2);
    }

    #[test]
    fn test_guard_transmits_once() {
        let mut m = matrix();
        {
            let mut guard = m.suspend();
            guard.set_column(0, 1);
            guard.set_column(1, 2);
            guard.transform(Transform::ShiftLeft);
            assert!(!guard.is_auto_update());
        }
        assert!(m.is_auto_update());
        assert_eq!(m.sink().writes, 1);
        assert_eq!(m.sink().last[0][1], 1);
        assert_eq!(m.sink().last[0][2], 2);
    }

    #[test]
    fn test_guard_without_changes_stays_quiet() {
        let mut m = matrix();
        drop(m.suspend());
        assert_eq!(m.sink().writes, 0);
    }

    #[test]
    fn test_reset() {
        let mut m = matrix();
        m.set_intensity(40);
        assert_eq!(m.intensity(), 15);
        m.set_column(3, 0xFF);

        m.reset();
        assert_eq!(m.intensity(), 7);
        assert_eq!(m.sink().intensity, 7);
        assert!(m.buffer().iter().flatten().all(|c| *c == 0));
    }

    #[test]
    fn test_font_trims_glyphs() {
        assert_eq!(glyph(b'I').columns(), &[0x41, 0x7F, 0x41]);
        assert_eq!(glyph(b'A').width(), 5);
        assert_eq!(glyph(b' ').width(), 2);
        assert_eq!(glyph(0x80), glyph(b'?'));
    }
}
