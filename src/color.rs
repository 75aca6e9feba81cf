use serde::{Deserialize, Serialize};

use crate::types::Float;

const OBSTACLE_THRESHOLD: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Dark pixels block light.
    pub fn is_obstacle(self) -> bool {
        let sum = self.red as u16 + self.green as u16 + self.blue as u16;
        sum < OBSTACLE_THRESHOLD
    }

    /// Channel-wise `min(a + b, 255)`.
    pub fn add(self, other: Color) -> Color {
        Color::new(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }

    /// Channel-wise `min(c * scale, 255)`, truncated.
    pub fn scale(self, scale: Float) -> Color {
        Color::new(
            scale_channel(self.red, scale),
            scale_channel(self.green, scale),
            scale_channel(self.blue, scale),
        )
    }

    /// Channel-wise product of the normalized values, rounded back to 0..=255.
    pub fn mul(self, other: Color) -> Color {
        Color::new(
            mul_channel(self.red, other.red),
            mul_channel(self.green, other.green),
            mul_channel(self.blue, other.blue),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}

fn scale_channel(c: u8, scale: Float) -> u8 {
    // `as` saturates at both ends and drops the fraction
    (c as Float * scale).min(255.0) as u8
}

fn normalized(c: u8) -> Float {
    c as Float / 255.0
}

fn float_to_byte(v: Float) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn mul_channel(a: u8, b: u8) -> u8 {
    float_to_byte(normalized(a) * normalized(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacle_threshold() {
        assert!(Color::new(0, 0, 0).is_obstacle());
        assert!(Color::new(3, 2, 1).is_obstacle());
        assert!(Color::new(0, 0, 9).is_obstacle());
        assert!(Color::new(4, 4, 1).is_obstacle());
        assert!(!Color::new(3, 4, 3).is_obstacle());
        assert!(!Color::new(0, 10, 0).is_obstacle());
        assert!(!Color::new(255, 0, 0).is_obstacle());
        assert!(!WHITE.is_obstacle());
    }

    #[test]
    fn obstacle_sum_does_not_wrap() {
        assert!(!Color::new(255, 255, 255).is_obstacle());
        assert!(!Color::new(250, 3, 3).is_obstacle());
        assert!(Color::new(9, 0, 0).is_obstacle());
        assert!(!Color::new(10, 0, 0).is_obstacle());
    }

    #[test]
    fn add_saturates() {
        assert_eq!(Color::new(10, 20, 30).add(Color::new(1, 2, 3)), Color::new(11, 22, 33));
        assert_eq!(Color::new(200, 255, 0).add(Color::new(100, 1, 0)), Color::new(255, 255, 0));
    }

    #[test]
    fn scale_truncates_and_saturates() {
        assert_eq!(Color::new(200, 100, 0).scale(0.951229), Color::new(190, 95, 0));
        assert_eq!(Color::new(100, 100, 255).scale(0.71177), Color::new(71, 71, 181));
        assert_eq!(Color::new(200, 100, 10).scale(2.0), Color::new(255, 200, 20));
        assert_eq!(WHITE.scale(1.0), WHITE);
        assert_eq!(WHITE.scale(0.0), BLACK);
    }

    #[test]
    fn mul_normalized() {
        assert_eq!(WHITE.mul(WHITE), WHITE);
        assert_eq!(WHITE.mul(Color::new(12, 130, 245)), Color::new(12, 130, 245));
        assert_eq!(BLACK.mul(WHITE), BLACK);
        // 128/255 * 128/255 * 255 = 64.25
        assert_eq!(Color::new(128, 128, 128).mul(Color::new(128, 128, 128)), Color::new(64, 64, 64));
    }

    #[test]
    fn serde_as_array() {
        let color: Color = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(color, Color::new(1, 2, 3));
        assert_eq!(serde_json::to_string(&color).unwrap(), "[1,2,3]");
    }
}
