//! Classifier configuration types

use image::Rgba;

/// Checkerboard and white tones left behind by image editors, in match order.
pub const DEFAULT_BACKGROUND_COLORS: [[u8; 3]; 8] = [
    [204, 204, 204], // light gray checkerboard
    [192, 192, 192], // silver
    [238, 238, 238], // very light gray
    [221, 221, 221], // light gray, second checkerboard tone
    [255, 255, 255], // pure white
    [250, 250, 250], // near white
    [245, 245, 245], // near white, slightly darker
    [240, 240, 240], // light gray, export fringe
];

/// Value written in place of every pixel classified as background.
pub const TRANSPARENT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Verdict for a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Alpha below the cutoff, passed through untouched
    AlreadyTransparent,
    /// Matches an entry of the background color set
    KnownBackground,
    /// Bright, nearly neutral pixel caught by the threshold heuristic
    LightNeutral,
    /// Everything else, kept as is
    Foreground,
}

impl PixelClass {
    pub fn is_background(self) -> bool {
        matches!(self, PixelClass::KnownBackground | PixelClass::LightNeutral)
    }
}

/// Configuration for background stripping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    /// Reference RGB tones treated as background
    pub background_colors: Vec<[u8; 3]>,
    /// Per-channel distance to a reference tone must stay strictly below this
    pub color_tolerance: u8,
    /// Every channel must exceed this for the light heuristic to apply
    pub light_threshold: u8,
    /// |r-g| and |g-b| must stay strictly below this for the light heuristic
    pub max_channel_spread: u8,
    /// Pixels with alpha below this are left alone
    pub transparent_cutoff: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            background_colors: DEFAULT_BACKGROUND_COLORS.to_vec(),
            color_tolerance: 10,
            light_threshold: 180,
            max_channel_spread: 20,
            transparent_cutoff: 10,
        }
    }
}

impl StripConfig {
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder::default()
    }
}

/// Builder for StripConfig
#[derive(Default)]
pub struct StripConfigBuilder {
    background_colors: Option<Vec<[u8; 3]>>,
    color_tolerance: Option<u8>,
    light_threshold: Option<u8>,
    max_channel_spread: Option<u8>,
    transparent_cutoff: Option<u8>,
}

impl StripConfigBuilder {
    pub fn background_colors(mut self, colors: Vec<[u8; 3]>) -> Self {
        self.background_colors = Some(colors);
        self
    }

    pub fn color_tolerance(mut self, tolerance: u8) -> Self {
        self.color_tolerance = Some(tolerance);
        self
    }

    pub fn light_threshold(mut self, threshold: u8) -> Self {
        self.light_threshold = Some(threshold);
        self
    }

    pub fn max_channel_spread(mut self, spread: u8) -> Self {
        self.max_channel_spread = Some(spread);
        self
    }

    pub fn transparent_cutoff(mut self, cutoff: u8) -> Self {
        self.transparent_cutoff = Some(cutoff);
        self
    }

    pub fn build(self) -> StripConfig {
        let default = StripConfig::default();
        StripConfig {
            background_colors: self.background_colors.unwrap_or(default.background_colors),
            color_tolerance: self.color_tolerance.unwrap_or(default.color_tolerance),
            light_threshold: self.light_threshold.unwrap_or(default.light_threshold),
            max_channel_spread: self.max_channel_spread.unwrap_or(default.max_channel_spread),
            transparent_cutoff: self.transparent_cutoff.unwrap_or(default.transparent_cutoff),
        }
    }
}

/// Summary of one stripped image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripStats {
    pub width: u32,
    pub height: u32,
    /// Pixels rewritten to the transparent background value
    pub cleared_pixels: u64,
}

impl StripStats {
    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
