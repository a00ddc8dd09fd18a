use shared::ChannelSource;

/// Color channels drawn from `Math.random`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRandom;

impl ChannelSource for BrowserRandom {
    fn next_channel(&mut self) -> u8 {
        (js_sys::Math::random() * 256.0).floor() as u8
    }
}
