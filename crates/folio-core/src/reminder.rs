use instant::{Duration, Instant};

/// "Click the button to enter" nudge shown after a stretch of inactivity on
/// the entry screen.
#[derive(Clone, Debug)]
pub struct IdleReminder {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleReminder {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Pointer, key or touch activity; only restarts an armed countdown.
    pub fn activity(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.arm(now);
        }
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

impl Default for IdleReminder {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::constants::IDLE_REMINDER_SECS))
    }
}
