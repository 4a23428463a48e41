pub const MIN_HEIGHT_LEVEL: u32 = 1;
pub const MAX_HEIGHT_LEVEL: u32 = 5;

/// Face colors of a cube: lit top, shaded left, darkest right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTier {
    pub top: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl ColorTier {
    pub const GRAY: ColorTier = ColorTier {
        top: "#ebedf0",
        left: "#d1d3d6",
        right: "#b8bac0",
    };
    pub const LIGHT_GREEN: ColorTier = ColorTier {
        top: "#9be9a8",
        left: "#7bc96f",
        right: "#5aa84e",
    };
    pub const MEDIUM_GREEN: ColorTier = ColorTier {
        top: "#40c463",
        left: "#30a14e",
        right: "#216e39",
    };
    pub const DARK_GREEN: ColorTier = ColorTier {
        top: "#30a14e",
        left: "#216e39",
        right: "#144620",
    };
    pub const DARKEST_GREEN: ColorTier = ColorTier {
        top: "#216e39",
        left: "#144620",
        right: "#0d3015",
    };

    pub fn for_count(count: u32) -> ColorTier {
        match count {
            0 => Self::GRAY,
            1..=3 => Self::LIGHT_GREEN,
            4..=6 => Self::MEDIUM_GREEN,
            7..=9 => Self::DARK_GREEN,
            _ => Self::DARKEST_GREEN,
        }
    }
}

/// Number of stacked cubes for a day. Callers filter out zero counts first.
pub fn height_level(count: u32) -> u32 {
    (count / 3 + 1).clamp(MIN_HEIGHT_LEVEL, MAX_HEIGHT_LEVEL)
}
