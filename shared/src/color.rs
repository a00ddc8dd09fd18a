use std::collections::HashMap;
use std::fmt;

/// Source of random color channels
pub trait ChannelSource {
    /// Next channel value, uniformly distributed over `0..=255`
    fn next_channel(&mut self) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels above 200
    pub fn is_too_light(&self) -> bool {
        self.r > 200 && self.g > 200 && self.b > 200
    }

    /// All three channels below 50
    pub fn is_too_dark(&self) -> bool {
        self.r < 50 && self.g < 50 && self.b < 50
    }

    pub fn is_displayable(&self) -> bool {
        !self.is_too_light() && !self.is_too_dark()
    }

    /// Draw colors until one is neither too light nor too dark.
    ///
    /// Roughly 7% of the cube is rejected, so this terminates after a couple of
    /// draws in practice.
    pub fn random<S: ChannelSource + ?Sized>(source: &mut S) -> Self {
        loop {
            let color = Self {
                r: source.next_channel(),
                g: source.next_channel(),
                b: source.next_channel(),
            };
            if color.is_displayable() {
                return color;
            }
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Owner -> CSS color table for one page session.
///
/// Colors are assigned on first sight and never change afterwards. Two owners may
/// end up with the same color.
pub struct ColorAssigner<S> {
    source: S,
    colors: HashMap<String, String>,
}

impl<S: ChannelSource> ColorAssigner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            colors: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, owner: &str) -> String {
        if let Some(color) = self.colors.get(owner) {
            return color.clone();
        }

        let color = Rgb::random(&mut self.source).to_string();
        self.colors.insert(owner.to_string(), color.clone());
        color
    }

    /// Previously assigned color, without generating one
    pub fn get(&self, owner: &str) -> Option<&str> {
        self.colors.get(owner).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
