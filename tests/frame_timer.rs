mod tests {
    use led_snake_engine::{Duration, FrameTimer, Instant, speed_to_interval};

    #[test]
    fn test_speed_to_interval() {
        assert_eq!(speed_to_interval(1.0), Duration::from_millis(1000));
        assert_eq!(speed_to_interval(2.0), Duration::from_millis(500));
        assert_eq!(speed_to_interval(0.5), Duration::from_millis(2000));
        // Rounded, not truncated
        assert_eq!(speed_to_interval(3.0), Duration::from_millis(333));
        assert_eq!(speed_to_interval(0.3), Duration::from_millis(3333));
    }

    #[test]
    fn test_timer_becomes_due_after_interval() {
        let timer = FrameTimer::new(Duration::from_millis(1000));
        assert!(!timer.is_due(Instant::from_millis(0)));
        assert!(!timer.is_due(Instant::from_millis(999)));
        assert!(timer.is_due(Instant::from_millis(1000)));
        assert!(timer.is_due(Instant::from_millis(5000)));
    }

    #[test]
    fn test_reset_starts_a_new_interval() {
        let mut timer = FrameTimer::new(Duration::from_millis(1000));
        timer.reset(Instant::from_millis(1000));
        assert!(!timer.is_due(Instant::from_millis(1500)));
        assert!(timer.is_due(Instant::from_millis(2000)));
    }

    #[test]
    fn test_interval_change_applies_to_next_check() {
        let mut timer = FrameTimer::new(Duration::from_millis(1000));
        timer.reset(Instant::from_millis(1000));
        timer.set_interval(Duration::from_millis(200));
        assert_eq!(timer.interval(), Duration::from_millis(200));
        // The in-flight interval is not waited out
        assert!(timer.is_due(Instant::from_millis(1200)));
        assert!(!timer.is_due(Instant::from_millis(1199)));
    }

    #[test]
    fn test_zero_interval_is_always_due() {
        let mut timer = FrameTimer::new(Duration::from_millis(0));
        assert!(timer.is_due(Instant::from_millis(0)));
        timer.reset(Instant::from_millis(42));
        assert!(timer.is_due(Instant::from_millis(42)));
    }

    #[test]
    fn test_clock_before_reset_is_not_due() {
        let mut timer = FrameTimer::new(Duration::from_millis(100));
        timer.reset(Instant::from_millis(1000));
        assert!(!timer.is_due(Instant::from_millis(500)));
    }
}
