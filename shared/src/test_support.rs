use std::collections::VecDeque;

use crate::color::ChannelSource;

/// Replays a fixed channel sequence; panics when exhausted
pub(crate) struct ScriptedChannels(VecDeque<u8>);

impl ScriptedChannels {
    pub(crate) fn new(values: &[u8]) -> Self {
        Self(values.iter().copied().collect())
    }

    pub(crate) fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl ChannelSource for ScriptedChannels {
    fn next_channel(&mut self) -> u8 {
        self.0.pop_front().expect("scripted channel sequence exhausted")
    }
}

/// Deterministic pseudo-random channels for bulk tests
pub(crate) struct LcgChannels(u64);

impl LcgChannels {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }
}

impl ChannelSource for LcgChannels {
    fn next_channel(&mut self) -> u8 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 56) as u8
    }
}
