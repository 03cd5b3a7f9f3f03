//! Output-size presets for the snapshot composition.

/// A named output-size constraint.
///
/// Exactly one preset is selected at a time. Selecting a preset only
/// affects the sizing of the export composition, never the captured text,
/// and re-selecting the current preset is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotPreset {
    /// No explicit size; the composition takes its natural size from the
    /// captured content.
    #[default]
    Default,
    /// Fixed 1200x627, the LinkedIn link-preview size.
    LinkedIn,
}

impl SnapshotPreset {
    /// Every preset, in selector order.
    pub const ALL: [Self; 2] = [Self::Default, Self::LinkedIn];

    /// Human-readable name for the preset selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::LinkedIn => "LinkedIn",
        }
    }

    /// Fixed pixel dimensions, or `None` for natural sizing.
    pub const fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            Self::Default => None,
            Self::LinkedIn => Some((1200, 627)),
        }
    }

    /// The next preset in selector order, wrapping at the end.
    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for SnapshotPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkedin_dimensions_are_exact() {
        assert_eq!(SnapshotPreset::LinkedIn.dimensions(), Some((1200, 627)));
    }

    #[test]
    fn test_default_has_no_fixed_size() {
        assert_eq!(SnapshotPreset::Default.dimensions(), None);
    }

    #[test]
    fn test_cycle_covers_all_presets() {
        let mut preset = SnapshotPreset::default();
        let mut seen = vec![preset];
        for _ in 1..SnapshotPreset::ALL.len() {
            preset = preset.cycle_next();
            seen.push(preset);
        }
        assert_eq!(seen, SnapshotPreset::ALL);
        assert_eq!(preset.cycle_next(), SnapshotPreset::Default);
    }
}
