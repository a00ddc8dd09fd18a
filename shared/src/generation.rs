/// Tag attached to an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Monotonic counter for one kind of request.
///
/// Only the most recently issued generation may apply its response; anything
/// older that resolves later is stale.
#[derive(Debug, Default, Clone)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut counter = GenerationCounter::default();
        let first = counter.issue();
        assert!(counter.is_current(first));

        let second = counter.issue();
        assert!(second > first);
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
