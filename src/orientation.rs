//! Viewport orientation and simulated device rotation.

/// Orientation of a viewport, derived from its dimensions.
///
/// There is no stored orientation flag anywhere in the crate: a viewport at
/// least as wide as it is tall is [`Landscape`](Self::Landscape), anything
/// else is [`Portrait`](Self::Portrait). A square viewport is landscape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// `width >= height`.
    Landscape,
    /// `width < height`.
    Portrait,
}

impl Orientation {
    /// Classify a viewport.
    pub fn of(width: u32, height: u32) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Lowercase name, as used in generated file names and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl core::fmt::Display for Orientation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A viewport being tested: one orientation of one device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// CSS pixel width.
    pub width: u32,
    /// CSS pixel height.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Swap width and height, as a 90° device rotation would.
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Orientation implied by the dimensions.
    pub fn orientation(self) -> Orientation {
        Orientation::of(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_is_landscape() {
        assert_eq!(Orientation::of(800, 700), Orientation::Landscape);
        assert_eq!(Orientation::of(375, 812), Orientation::Portrait);
    }

    #[test]
    fn square_is_landscape() {
        assert_eq!(Orientation::of(600, 600), Orientation::Landscape);
    }

    #[test]
    fn rotation_swaps_axes_and_label() {
        let v = Viewport::new(375, 812);
        let r = v.rotated();
        assert_eq!(r, Viewport::new(812, 375));
        assert_eq!(v.orientation(), Orientation::Portrait);
        assert_eq!(r.orientation(), Orientation::Landscape);
        assert_eq!(r.rotated(), v);
    }

    #[test]
    fn rotating_square_keeps_label() {
        let v = Viewport::new(500, 500);
        assert_eq!(v.rotated().orientation(), Orientation::Landscape);
    }

    #[test]
    fn display_names() {
        assert_eq!(alloc::format!("{}", Orientation::Portrait), "portrait");
        assert_eq!(Orientation::Landscape.as_str(), "landscape");
    }
}
