//! Orientation-driven layout selection.

/// Physical orientation reported by the display surface.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl Orientation {
    /// Terminal cells are roughly twice as tall as they are wide.
    const CELL_ASPECT: u32 = 2;

    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait | Self::PortraitUpsideDown)
    }

    /// Derives an orientation from a viewport measured in terminal cells.
    ///
    /// An empty viewport reports `Unknown`. A square viewport counts as
    /// landscape.
    pub fn from_viewport(width: u16, height: u16) -> Self {
        if width == 0 || height == 0 {
            return Self::Unknown;
        }

        if u32::from(height) * Self::CELL_ASPECT > u32::from(width) {
            Self::Portrait
        } else {
            Self::LandscapeLeft
        }
    }
}

/// Arrangement of the two player panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum LayoutKind {
    /// Panels stacked vertically.
    Portrait,
    /// Panels side by side.
    Landscape,
}

/// Portrait layout for portrait orientations; landscape for everything else,
/// including flat and unknown.
pub const fn select_layout(orientation: Orientation) -> LayoutKind {
    if orientation.is_portrait() {
        LayoutKind::Portrait
    } else {
        LayoutKind::Landscape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_table() {
        let cases = [
            (Orientation::Unknown, LayoutKind::Landscape),
            (Orientation::Portrait, LayoutKind::Portrait),
            (Orientation::PortraitUpsideDown, LayoutKind::Portrait),
            (Orientation::LandscapeLeft, LayoutKind::Landscape),
            (Orientation::LandscapeRight, LayoutKind::Landscape),
            (Orientation::FaceUp, LayoutKind::Landscape),
            (Orientation::FaceDown, LayoutKind::Landscape),
        ];

        for (orientation, expected) in cases {
            assert_eq!(select_layout(orientation), expected, "{orientation}");
        }
    }

    #[test]
    fn viewport_orientation_accounts_for_cell_aspect() {
        assert_eq!(
            Orientation::from_viewport(80, 24),
            Orientation::LandscapeLeft
        );
        assert_eq!(Orientation::from_viewport(40, 40), Orientation::Portrait);
        assert_eq!(
            Orientation::from_viewport(80, 40),
            Orientation::LandscapeLeft
        );
        assert_eq!(Orientation::from_viewport(0, 40), Orientation::Unknown);
    }

    #[test]
    fn orientation_names_parse() {
        assert_eq!(
            "portrait_upside_down".parse::<Orientation>(),
            Ok(Orientation::PortraitUpsideDown)
        );
        assert_eq!("FACE_UP".parse::<Orientation>(), Ok(Orientation::FaceUp));
        assert!("sideways".parse::<Orientation>().is_err());
        assert_eq!(Orientation::LandscapeRight.as_ref(), "landscape_right");
    }
}
