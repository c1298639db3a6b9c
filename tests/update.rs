mod tests {
    use led_snake_engine::{
        AnimationConfig, AnimationEngine, AnimationMode, ConfigUpdate, Duration, Rgb,
        StripSink, UpdateProcessor, UpdateQueue,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    struct RecordingSink {
        pixels: Vec<Rgb>,
        brightness: u8,
        flushes: usize,
    }

    impl RecordingSink {
        fn new(count: usize) -> Self {
            Self {
                pixels: vec![BLACK; count],
                brightness: 0,
                flushes: 0,
            }
        }
    }

    impl StripSink for RecordingSink {
        fn initialize(&mut self) {}

        fn set_pixel(&mut self, index: u16, color: Rgb) {
            self.pixels[usize::from(index)] = color;
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }

        fn set_global_brightness(&mut self, brightness: u8) {
            self.brightness = brightness;
        }

        fn pixel_count(&self) -> u16 {
            u16::try_from(self.pixels.len()).unwrap()
        }
    }

    fn engine() -> AnimationEngine<RecordingSink> {
        AnimationEngine::new(RecordingSink::new(10), AnimationConfig::default())
    }

    #[test]
    fn test_updates_route_to_every_field() {
        let queue: UpdateQueue<16> = UpdateQueue::new();
        let mut processor = UpdateProcessor::new(&queue);
        let mut engine = engine();

        queue.push(ConfigUpdate::Mode(1)).unwrap();
        queue.push(ConfigUpdate::WindowSize(7)).unwrap();
        queue.push(ConfigUpdate::Looped(false)).unwrap();
        queue.push(ConfigUpdate::Color(0x0000_FF00)).unwrap();
        queue.push(ConfigUpdate::Rainbow(true)).unwrap();
        queue.push(ConfigUpdate::Speed(2.0)).unwrap();
        queue.push(ConfigUpdate::Luminosity(75)).unwrap();
        queue.push(ConfigUpdate::Direction(-1)).unwrap();
        queue.push(ConfigUpdate::Position(4)).unwrap();
        processor.process_pending(&mut engine);

        assert_eq!(engine.mode(), AnimationMode::Fir);
        assert_eq!(engine.window_size(), 7);
        assert!(!engine.is_looped());
        assert_eq!(engine.base_color(), Rgb { r: 0, g: 255, b: 0 });
        assert!(engine.is_rainbow());
        assert_eq!(engine.speed(), 2.0);
        assert_eq!(engine.frame_interval(), Duration::from_millis(500));
        assert_eq!(engine.luminosity(), 75);
        assert_eq!(engine.direction(), -1);
        assert_eq!(engine.position(), 4);
    }

    #[test]
    fn test_unknown_mode_keeps_previous_mode() {
        let queue: UpdateQueue<4> = UpdateQueue::new();
        let mut processor = UpdateProcessor::new(&queue);
        let mut engine = engine();

        queue.push(ConfigUpdate::Mode(9)).unwrap();
        processor.process_pending(&mut engine);
        assert_eq!(engine.mode(), AnimationMode::Snake);
    }

    #[test]
    fn test_rejected_values_leave_state_readable_via_getters() {
        let queue: UpdateQueue<4> = UpdateQueue::new();
        let mut processor = UpdateProcessor::new(&queue);
        let mut engine = engine();

        queue.push(ConfigUpdate::Speed(0.0)).unwrap();
        queue.push(ConfigUpdate::Luminosity(150)).unwrap();
        queue.push(ConfigUpdate::Direction(3)).unwrap();
        processor.process_pending(&mut engine);

        // Rejection is silent: the getters are the only signal
        assert_eq!(engine.speed(), 1.0);
        assert_eq!(engine.luminosity(), 100);
        assert_eq!(engine.direction(), 1);
    }

    #[test]
    fn test_disable_update_blanks_the_strip() {
        let queue: UpdateQueue<4> = UpdateQueue::new();
        let mut processor = UpdateProcessor::new(&queue);
        let mut engine = engine();

        queue.push(ConfigUpdate::Enable(false)).unwrap();
        processor.process_pending(&mut engine);

        assert!(!engine.is_enabled());
        assert_eq!(engine.sink().flushes, 1);
        assert!(engine.sink().pixels.iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_position_update_wraps_like_local_writes() {
        let queue: UpdateQueue<4> = UpdateQueue::new();
        let mut processor = UpdateProcessor::new(&queue);
        let mut engine = engine();

        queue.push(ConfigUpdate::Position(-2)).unwrap();
        processor.process_pending(&mut engine);
        assert_eq!(engine.position(), 8);
    }

    #[test]
    fn test_full_queue_hands_the_update_back() {
        let queue: UpdateQueue<2> = UpdateQueue::new();

        queue.push(ConfigUpdate::Enable(true)).unwrap();
        queue.push(ConfigUpdate::Enable(false)).unwrap();
        // Older updates are never overwritten; the caller gets the
        // rejected value back
        assert_eq!(
            queue.push(ConfigUpdate::WindowSize(3)),
            Err(ConfigUpdate::WindowSize(3))
        );

        // The queued updates are still delivered in order
        assert_eq!(queue.pop(), Some(ConfigUpdate::Enable(true)));
        assert_eq!(queue.pop(), Some(ConfigUpdate::Enable(false)));
        assert_eq!(queue.pop(), None);
    }
}
