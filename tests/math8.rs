mod tests {
    use embassy_time::Instant;
    use marquee_composer::math8::{beatsin8, beatsin16, blend8, qadd8, scale8, sin8, sin16};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(1, 2), 3);
        assert_eq!(qadd8(200, 100), 255);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sines() {
        assert_eq!(sin16(0), 0);
        assert!(sin16(16384) >= 32766);
        assert!(sin16(49152) <= -32766);
        assert_eq!(sin8(0), 127);
        assert!(sin8(64) >= 254);
    }

    #[test]
    fn test_beatsin16_stays_in_range() {
        for ms in (0..20_000).step_by(7) {
            let value = beatsin16(13, 0, 59, Instant::from_millis(ms));
            assert!(value <= 59, "{value} out of range at {ms} ms");
        }
    }

    #[test]
    fn test_beatsin16_covers_range() {
        let values: Vec<u16> = (0..10_000)
            .map(|ms| beatsin16(13, 10, 20, Instant::from_millis(ms)))
            .collect();
        assert_eq!(values.iter().min(), Some(&10));
        assert_eq!(values.iter().max(), Some(&20));
    }

    #[test]
    fn test_beatsin8_stays_in_range() {
        for ms in (0..20_000).step_by(3) {
            let value = beatsin8(62, 64, 255, Instant::from_millis(ms));
            assert!(value >= 64);
        }
    }
}
