#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Unpacks a 24-bit `0xRRGGBB` scalar. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_lives_in_the_high_byte() {
        let colour = Colour::from_packed(0x12_34_56);

        assert_eq!(colour, Colour { r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(colour.packed(), 0x12_34_56);
    }

    #[test]
    fn white_and_black_extremes() {
        assert_eq!(Colour::from_packed(0xFF_FF_FF), Colour { r: 255, g: 255, b: 255 });
        assert_eq!(Colour::from_packed(0), Colour::BLACK);
    }

    #[test]
    fn bits_above_24_are_dropped() {
        assert_eq!(Colour::from_packed(0xAB_00_00_01).packed(), 0x00_00_01);
    }
}
