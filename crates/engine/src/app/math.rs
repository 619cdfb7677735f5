#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Unit-length copy, or zero when the vector is too short to normalize.
    pub fn normalized_or_zero(self) -> Self {
        let len_sq = self.x * self.x + self.y * self.y;
        if len_sq <= f32::EPSILON {
            return Self::zero();
        }
        let inv_len = len_sq.sqrt().recip();
        Self {
            x: self.x * inv_len,
            y: self.y * inv_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_axis_vectors() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::zero().length(), 0.0);
    }

    #[test]
    fn normalized_or_zero_handles_degenerate_input() {
        let unit = Vec2::new(0.0, -2.0).normalized_or_zero();
        assert!((unit.length() - 1.0).abs() <= 1e-6);
        assert_eq!(Vec2::zero().normalized_or_zero(), Vec2::zero());
    }
}
