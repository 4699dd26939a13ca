use std::time::Instant;
use crate::constants::BANNER_DURATION_MS;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BannerStatus {
    Neutral,
    Sent,
    Failed,
}

impl BannerStatus {
    pub fn message(&self) -> &'static str {
        match self {
            BannerStatus::Neutral => "",
            BannerStatus::Sent => "Message sent. We'll be in touch.",
            BannerStatus::Failed => "Failed to send message. Please try again.",
        }
    }
}

/// Millisecond clock the banner measures its lifetime against.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Transient outcome message that returns to neutral on its own.
#[derive(Debug)]
pub struct Banner {
    status: BannerStatus,
    shown_at_ms: u64,
}

impl Default for Banner {
    fn default() -> Self {
        Self { status: BannerStatus::Neutral, shown_at_ms: 0 }
    }
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, status: BannerStatus, now_ms: u64) {
        self.status = status;
        self.shown_at_ms = now_ms;
    }

    pub fn tick(&mut self, now_ms: u64) {
        if self.status != BannerStatus::Neutral
            && now_ms.saturating_sub(self.shown_at_ms) >= BANNER_DURATION_MS
        {
            self.status = BannerStatus::Neutral;
        }
    }

    pub fn status(&self) -> BannerStatus {
        self.status
    }

    /// Clock time at which the banner clears, if one is showing.
    pub fn expires_at_ms(&self) -> Option<u64> {
        match self.status {
            BannerStatus::Neutral => None,
            _ => Some(self.shown_at_ms + BANNER_DURATION_MS),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    #[test]
    fn clears_after_three_seconds() {
        let clock = ManualClock::default();
        clock.advance(500);
        let mut banner = Banner::new();
        banner.show(BannerStatus::Failed, clock.now_ms());
        assert_eq!(banner.expires_at_ms(), Some(3500));

        clock.advance(2999);
        banner.tick(clock.now_ms());
        assert_eq!(banner.status(), BannerStatus::Failed);

        clock.advance(1);
        banner.tick(clock.now_ms());
        assert_eq!(banner.status(), BannerStatus::Neutral);
        assert_eq!(banner.expires_at_ms(), None);
    }

    #[test]
    fn showing_again_restarts_the_timer() {
        let mut banner = Banner::new();
        banner.show(BannerStatus::Sent, 0);
        banner.show(BannerStatus::Failed, 2000);

        banner.tick(3000);
        assert_eq!(banner.status(), BannerStatus::Failed);
        banner.tick(5000);
        assert_eq!(banner.status(), BannerStatus::Neutral);
    }

    #[test]
    fn neutral_has_no_message() {
        assert!(BannerStatus::Neutral.message().is_empty());
        assert!(!BannerStatus::Failed.message().is_empty());
    }
}
