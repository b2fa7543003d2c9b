/// Frame counter driving the busy spinner.
pub struct AnimationClock {
    /// Advances each tick (~100ms)
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Current spinner character for loading animations
    pub fn spinner_char(&self) -> char {
        const SPINNERS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        // Every 2 frames = ~200ms
        SPINNERS[(self.frame_counter / 2) as usize % SPINNERS.len()]
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
