/// sRGB-encoded channel in `[0, 1]` to linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn srgb8_to_linear(c: u8) -> f32 {
    srgb_to_linear(c as f32 / 255.0)
}

/// Linearize the RGB channels of an sRGB colour; alpha is already linear.
pub fn linearize([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mid_grey() {
        assert!((srgb8_to_linear(128) - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn test_alpha_untouched() {
        let c = linearize([0.5, 0.5, 0.5, 0.5]);
        assert_eq!(c[3], 0.5);
        assert!(c[0] < 0.25);
    }
}
