mod tests {
    use core::cell::Cell;

    use embassy_time::{Duration, Instant};
    use ws281x_bitbang::latch::{LATCH_DURATION, LatchGate};
    use ws281x_bitbang::platform::HostClock;

    /// Manual clock that advances one microsecond per read.
    struct FakeClock<'a> {
        micros: &'a Cell<u64>,
    }

    impl HostClock for FakeClock<'_> {
        fn now(&self) -> Instant {
            let next = self.micros.get() + 1;
            self.micros.set(next);
            Instant::from_micros(next)
        }

        fn credit(&mut self, _elapsed: Duration) {}
    }

    #[test]
    fn test_fresh_gate_never_blocks() {
        let micros = Cell::new(0);
        let clock = FakeClock { micros: &micros };
        let gate = LatchGate::new();
        gate.wait(&clock);
        // A single poll releases the wait.
        assert_eq!(micros.get(), 1);
    }

    #[test]
    fn test_armed_gate_blocks_for_full_gap() {
        let micros = Cell::new(1_000);
        let clock = FakeClock { micros: &micros };
        let mut gate = LatchGate::new();
        gate.arm(Instant::from_micros(1_000));

        gate.wait(&clock);
        assert!(Instant::from_micros(micros.get()) >= gate.deadline());
        assert!(micros.get() >= 1_050);
    }

    #[test]
    fn test_elapsed_gap_is_free() {
        let micros = Cell::new(10_000);
        let clock = FakeClock { micros: &micros };
        let mut gate = LatchGate::new();
        gate.arm(Instant::from_micros(1_000));

        gate.wait(&clock);
        // Gap long since elapsed; one poll and out.
        assert_eq!(micros.get(), 10_001);
    }

    #[test]
    fn test_deadline_is_frame_end_plus_gap() {
        let mut gate = LatchGate::new();
        gate.arm(Instant::from_micros(7_500));
        assert_eq!(gate.deadline(), Instant::from_micros(7_500) + LATCH_DURATION);
        assert_eq!(LATCH_DURATION, Duration::from_micros(50));
    }
}
