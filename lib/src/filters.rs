use rayon::prelude::*;

/// Perceptual luminance of an 8-bit RGB sample
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R BT.601).
/// The weights are fixed; the result stays in [0.0, 255.0] for any
/// 8-bit input.
///
/// # Arguments
/// * `r`, `g`, `b` - Channel values [0, 255]
///
/// # Returns
/// Luminance in [0.0, 255.0]
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Clamp a float sample into the 8-bit range and truncate
#[inline]
fn clamp_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Apply brightness and contrast to a buffer of RGBA samples, in place
///
/// Order is fixed: brightness offset first, then contrast scaling.
/// The two are not independently reorderable - swapping them changes
/// the output. Alpha is left untouched.
///
/// Per channel:
/// 1. `v1 = clamp(v + brightness)`
/// 2. `factor = 259 * (contrast + 255) / (255 * (259 - contrast))`
/// 3. `v2 = clamp(factor * (v1 - 128) + 128)`
///
/// Both parameters are clamped to [-50, 50] before use. Validated
/// options never trip this, but a raw call that skipped validation
/// stays in range and the degenerate contrast-factor denominator at
/// contrast = -255 is unreachable.
///
/// # Arguments
/// * `samples` - RGBA buffer, 4 samples per pixel, row-major
/// * `brightness` - Offset in [-50, 50]
/// * `contrast` - Scale control in [-50, 50]
pub fn adjust(samples: &mut [u8], brightness: i32, contrast: i32) {
    if brightness == 0 && contrast == 0 {
        return;
    }

    let brightness = brightness.clamp(-50, 50);
    let contrast = contrast.clamp(-50, 50) as f32;
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));

    samples.par_chunks_mut(4).for_each(|pixel| {
        for channel in pixel.iter_mut().take(3) {
            let offset = (*channel as i32 + brightness).clamp(0, 255) as f32;
            *channel = clamp_u8(factor * (offset - 128.0) + 128.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_black() {
        assert_eq!(luminance(0, 0, 0), 0.0);
    }

    #[test]
    fn test_luminance_white() {
        let lum = luminance(255, 255, 255);
        assert!((lum - 255.0).abs() < 0.001);
    }

    #[test]
    fn test_luminance_in_range_for_primaries() {
        for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255), (128, 64, 200)] {
            let lum = luminance(r, g, b);
            assert!((0.0..=255.0).contains(&lum), "luminance {lum} out of range");
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for v in [-1000.0, -0.5, 0.0, 127.9, 255.0, 300.0] {
            let once = clamp_u8(v);
            let twice = clamp_u8(once as f32);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_adjust_noop_when_neutral() {
        let mut samples = vec![10, 20, 30, 255, 200, 100, 50, 128];
        let original = samples.clone();
        adjust(&mut samples, 0, 0);
        assert_eq!(samples, original);
    }

    #[test]
    fn test_adjust_brightness_offsets_rgb() {
        let mut samples = vec![100, 100, 100, 255];
        adjust(&mut samples, 50, 0);
        assert_eq!(&samples[..3], &[150, 150, 150]);
        assert_eq!(samples[3], 255); // alpha untouched
    }

    #[test]
    fn test_adjust_brightness_clamps() {
        let mut samples = vec![240, 5, 128, 255];
        adjust(&mut samples, 50, 0);
        assert_eq!(samples[0], 255);
        assert_eq!(samples[1], 55);
    }

    #[test]
    fn test_adjust_contrast_worked_example() {
        // contrast=+25 on value 50: factor ~1.216, result ~33
        let mut samples = vec![50, 50, 50, 255];
        adjust(&mut samples, 0, 25);
        for &v in &samples[..3] {
            assert!((32..=34).contains(&v), "expected ~33, got {v}");
        }
    }

    #[test]
    fn test_adjust_contrast_pivots_at_midpoint() {
        // 128 is the contrast pivot: scaling leaves it in place
        let mut samples = vec![128, 128, 128, 255];
        adjust(&mut samples, 0, 40);
        assert_eq!(&samples[..3], &[128, 128, 128]);
    }

    #[test]
    fn test_adjust_order_is_brightness_then_contrast() {
        // brightness then contrast: (100-40)=60, then spread from 128 -> ~27
        let mut samples = vec![100, 100, 100, 255];
        adjust(&mut samples, -40, 50);
        let combined = samples[0];
        assert!((26..=28).contains(&combined), "expected ~27, got {combined}");

        // contrast alone on 100 (~86), then brightness (~46) - different result
        let mut contrast_first = vec![100, 100, 100, 255];
        adjust(&mut contrast_first, 0, 50);
        adjust(&mut contrast_first, -40, 0);
        assert_ne!(combined, contrast_first[0]);
    }

    #[test]
    fn test_adjust_extreme_brightness_input_is_clamped() {
        // Raw call with out-of-range brightness behaves as +50
        let mut raw = vec![100, 100, 100, 255];
        adjust(&mut raw, 300, 0);

        let mut bounded = vec![100, 100, 100, 255];
        adjust(&mut bounded, 50, 0);
        assert_eq!(raw, bounded);
    }

    #[test]
    fn test_adjust_extreme_contrast_input_is_clamped() {
        // Raw call with out-of-range contrast must not divide by zero
        let mut samples = vec![10, 200, 90, 255];
        adjust(&mut samples, 0, -255);
        for &v in &samples[..3] {
            assert!(v <= 255);
        }
    }
}
