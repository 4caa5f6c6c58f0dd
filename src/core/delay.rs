/// Artificial "thinking" pause before a reply is shown
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub trait ThinkingDelay: Send {
    fn next_delay(&mut self) -> Duration;
}

/// Uniform delay in `[min, max]`
pub struct RandomDelay {
    min_ms: u64,
    max_ms: u64,
    rng: StdRng,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    pub fn with_rng(min: Duration, max: Duration, rng: StdRng) -> Self {
        let (a, b) = (min.as_millis() as u64, max.as_millis() as u64);
        Self {
            min_ms: a.min(b),
            max_ms: a.max(b),
            rng,
        }
    }
}

impl ThinkingDelay for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_ms..=self.max_ms))
    }
}

/// Replies immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl ThinkingDelay for NoDelay {
    fn next_delay(&mut self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_delay_stays_in_range() {
        let mut delay = RandomDelay::with_rng(
            Duration::from_millis(1500),
            Duration::from_millis(3500),
            StdRng::seed_from_u64(1),
        );
        for _ in 0..200 {
            let d = delay.next_delay();
            assert!(d >= Duration::from_millis(1500) && d <= Duration::from_millis(3500));
        }
    }

    #[test]
    fn test_reversed_bounds_are_ordered() {
        let mut delay = RandomDelay::with_rng(
            Duration::from_millis(900),
            Duration::from_millis(100),
            StdRng::seed_from_u64(2),
        );
        let d = delay.next_delay();
        assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(900));
    }

    #[test]
    fn test_no_delay_is_zero() {
        assert_eq!(NoDelay.next_delay(), Duration::ZERO);
    }
}
