//! Per-pixel background classifier.
//!
//! Every decision looks at one pixel only. There is no region or neighbour
//! logic, so light pixels inside a sprite (highlights, white outlines) are
//! cleared along with the real background.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::image_pipeline::classify::types::{
    PixelClass, StripConfig, StripStats, TRANSPARENT_BACKGROUND,
};

impl StripConfig {
    /// Classifies a pixel. Checks run in a fixed order and the first match wins.
    pub fn classify(&self, pixel: Rgba<u8>) -> PixelClass {
        let [r, g, b, a] = pixel.0;

        if a < self.transparent_cutoff {
            return PixelClass::AlreadyTransparent;
        }

        if self.matches_background_color(r, g, b) {
            return PixelClass::KnownBackground;
        }

        if self.is_light_neutral(r, g, b) {
            return PixelClass::LightNeutral;
        }

        PixelClass::Foreground
    }

    /// Returns the pixel to write back: the transparent background value for
    /// background pixels, the input otherwise.
    pub fn strip_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        if self.classify(pixel).is_background() {
            TRANSPARENT_BACKGROUND
        } else {
            pixel
        }
    }

    /// Strips an image in place, in raster order.
    pub fn strip_image(&self, image: &mut RgbaImage) -> StripStats {
        let mut cleared_pixels = 0u64;

        for pixel in image.pixels_mut() {
            if self.classify(*pixel).is_background() {
                *pixel = TRANSPARENT_BACKGROUND;
                cleared_pixels += 1;
            }
        }

        let stats = StripStats {
            width: image.width(),
            height: image.height(),
            cleared_pixels,
        };
        debug!(
            "Cleared {} of {} pixels",
            stats.cleared_pixels,
            stats.total_pixels()
        );
        stats
    }

    fn matches_background_color(&self, r: u8, g: u8, b: u8) -> bool {
        let tolerance = self.color_tolerance;
        self.background_colors.iter().any(|&[br, bg, bb]| {
            r.abs_diff(br) < tolerance && g.abs_diff(bg) < tolerance && b.abs_diff(bb) < tolerance
        })
    }

    fn is_light_neutral(&self, r: u8, g: u8, b: u8) -> bool {
        let threshold = self.light_threshold;
        let spread = self.max_channel_spread;
        r > threshold
            && g > threshold
            && b > threshold
            && r.abs_diff(g) < spread
            && g.abs_diff(b) < spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
        Rgba([r, g, b, a])
    }

    #[test]
    fn test_pure_white_is_cleared() {
        let config = StripConfig::default();
        assert_eq!(config.classify(px(255, 255, 255, 255)), PixelClass::KnownBackground);
        assert_eq!(config.strip_pixel(px(255, 255, 255, 255)), TRANSPARENT_BACKGROUND);
    }

    #[test]
    fn test_checkerboard_gray_is_cleared() {
        let config = StripConfig::default();
        assert_eq!(config.classify(px(204, 204, 204, 255)), PixelClass::KnownBackground);
        assert_eq!(config.strip_pixel(px(204, 204, 204, 255)), px(255, 255, 255, 0));
    }

    #[test]
    fn test_saturated_green_is_kept() {
        let config = StripConfig::default();
        let green = px(10, 200, 10, 255);
        assert_eq!(config.classify(green), PixelClass::Foreground);
        assert_eq!(config.strip_pixel(green), green);
    }

    #[test]
    fn test_transparent_pixels_pass_through() {
        let config = StripConfig::default();
        assert_eq!(config.strip_pixel(px(0, 0, 0, 0)), px(0, 0, 0, 0));

        // Would be background if it were opaque
        let faint_white = px(255, 255, 255, 9);
        assert_eq!(config.classify(faint_white), PixelClass::AlreadyTransparent);
        assert_eq!(config.strip_pixel(faint_white), faint_white);
    }

    #[test]
    fn test_alpha_at_cutoff_is_classified() {
        let config = StripConfig::default();
        assert_eq!(config.classify(px(255, 255, 255, 10)), PixelClass::KnownBackground);
    }

    #[test]
    fn test_color_tolerance_is_strict() {
        let config = StripConfig::default();
        assert_eq!(config.classify(px(201, 183, 192, 255)), PixelClass::KnownBackground);
        // Off silver by exactly the tolerance, picked up by the light heuristic instead
        assert_eq!(config.classify(px(182, 192, 192, 255)), PixelClass::LightNeutral);
        assert_eq!(config.classify(px(172, 192, 192, 255)), PixelClass::Foreground);
    }

    #[test]
    fn test_light_neutral_heuristic() {
        let config = StripConfig::default();
        // Far from every reference tone but bright and nearly gray
        assert_eq!(config.classify(px(185, 200, 215, 255)), PixelClass::LightNeutral);
        assert_eq!(config.strip_pixel(px(185, 200, 215, 255)), TRANSPARENT_BACKGROUND);
    }

    #[test]
    fn test_light_neutral_bounds() {
        let config = StripConfig::default();
        // Channel equal to the threshold does not count as above it
        assert_eq!(config.classify(px(180, 185, 185, 255)), PixelClass::Foreground);
        // Spread of exactly 20 is too much
        assert_eq!(config.classify(px(185, 205, 205, 255)), PixelClass::Foreground);
        assert_eq!(config.classify(px(205, 205, 185, 255)), PixelClass::Foreground);
        // |r-b| is not checked
        assert_eq!(config.classify(px(185, 204, 223, 255)), PixelClass::LightNeutral);
    }

    #[test]
    fn test_light_foreground_is_stripped_too() {
        let config = StripConfig::default();
        let highlight = px(230, 235, 228, 255);
        assert!(config.classify(highlight).is_background());
    }

    #[test]
    fn test_custom_threshold() {
        let config = StripConfig::builder().light_threshold(240).build();
        assert_eq!(config.classify(px(185, 200, 215, 255)), PixelClass::Foreground);
        assert_eq!(config.classify(px(204, 204, 204, 255)), PixelClass::KnownBackground);
    }

    #[test]
    fn test_empty_background_set_uses_heuristic_only() {
        let config = StripConfig::builder().background_colors(Vec::new()).build();
        assert_eq!(config.classify(px(255, 255, 255, 255)), PixelClass::LightNeutral);
        assert_eq!(config.classify(px(150, 150, 150, 255)), PixelClass::Foreground);
    }

    #[test]
    fn test_config_builder() {
        let config = StripConfig::builder()
            .color_tolerance(4)
            .light_threshold(200)
            .max_channel_spread(8)
            .transparent_cutoff(1)
            .build();

        assert_eq!(config.background_colors.len(), 8);
        assert_eq!(config.color_tolerance, 4);
        assert_eq!(config.light_threshold, 200);
        assert_eq!(config.max_channel_spread, 8);
        assert_eq!(config.transparent_cutoff, 1);
    }

    #[test]
    fn test_classifier_is_position_independent() {
        let config = StripConfig::default();
        let mut image = RgbaImage::from_pixel(3, 2, px(204, 204, 204, 255));
        image.put_pixel(1, 1, px(10, 200, 10, 255));
        image.put_pixel(2, 0, px(10, 200, 10, 255));

        config.strip_image(&mut image);

        for (x, y, pixel) in image.enumerate_pixels() {
            if (x, y) == (1, 1) || (x, y) == (2, 0) {
                assert_eq!(*pixel, px(10, 200, 10, 255));
            } else {
                assert_eq!(*pixel, TRANSPARENT_BACKGROUND);
            }
        }
    }

    #[test]
    fn test_strip_image_stats() {
        let config = StripConfig::default();
        let mut image = RgbaImage::from_pixel(4, 4, px(255, 255, 255, 255));
        image.put_pixel(0, 0, px(0, 0, 0, 0));
        image.put_pixel(3, 3, px(120, 40, 40, 255));

        let stats = config.strip_image(&mut image);

        assert_eq!(stats.width, 4);
        assert_eq!(stats.height, 4);
        assert_eq!(stats.total_pixels(), 16);
        assert_eq!(stats.cleared_pixels, 14);
    }

    #[test]
    fn test_strip_image_is_idempotent() {
        let config = StripConfig::default();
        let mut image = RgbaImage::from_fn(16, 16, |x, y| {
            let v = ((x * 16 + y) % 256) as u8;
            px(v, v.wrapping_mul(3), 255 - v, (x * 17) as u8)
        });

        config.strip_image(&mut image);
        let once = image.clone();
        let stats = config.strip_image(&mut image);

        assert_eq!(image, once);
        assert_eq!(stats.cleared_pixels, 0);
    }
}
