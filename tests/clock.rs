mod tests {
    use embassy_time::{Duration, Instant};
    use marquee_composer::clock::{IntervalTimer, elapsed, elapsed_ms, ticks_until, wrapping_add};

    fn ms_ticks(ms: u64) -> u64 {
        Duration::from_millis(ms).as_ticks()
    }

    /// An instant `ms` milliseconds before the tick counter wraps to zero
    fn before_wrap(ms: u64) -> Instant {
        Instant::from_ticks(u64::MAX - ms_ticks(ms) + 1)
    }

    #[test]
    fn test_elapsed_ms_plain() {
        let since = Instant::from_millis(1_000);
        assert_eq!(elapsed_ms(Instant::from_millis(1_250), since), 250);
        assert_eq!(elapsed(since, since), Duration::from_millis(0));
    }

    #[test]
    fn test_elapsed_ms_across_counter_wrap() {
        let since = before_wrap(1);
        let now = Instant::from_ticks(ms_ticks(1));
        assert_eq!(elapsed_ms(now, since), 2);
    }

    #[test]
    fn test_wrapping_add_crosses_zero() {
        let later = wrapping_add(before_wrap(5), Duration::from_millis(8));
        assert_eq!(later, Instant::from_ticks(ms_ticks(3)));
        assert_eq!(elapsed_ms(later, before_wrap(5)), 8);
    }

    #[test]
    fn test_ticks_until_sign() {
        let deadline = Instant::from_ticks(ms_ticks(3));
        let now = before_wrap(2);
        assert_eq!(ticks_until(deadline, now), i64::try_from(ms_ticks(5)).unwrap());
        assert_eq!(ticks_until(now, deadline), -i64::try_from(ms_ticks(5)).unwrap());
    }

    #[test]
    fn test_interval_timer_waits_a_full_period_across_wrap() {
        let start = before_wrap(1);
        let mut timer = IntervalTimer::new(Duration::from_secs(10), start);

        assert!(!timer.ready(wrapping_add(start, Duration::from_millis(2))));
        assert!(!timer.ready(wrapping_add(start, Duration::from_millis(9_999))));
        assert!(timer.ready(wrapping_add(start, Duration::from_secs(10))));
        assert!(!timer.ready(wrapping_add(start, Duration::from_millis(10_001))));
    }
}
