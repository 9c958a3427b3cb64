//! Merge engine configuration
//!
//! Positioning and coloring constants are injected configuration rather than
//! globals, so tests can pin deterministic values.

use crate::types::{NodeStyle, Position};
use serde::{Deserialize, Serialize};

/// Background palette applied by default, cycled by batch ordinal.
const DEFAULT_PALETTE: [&str; 6] = [
    "#A3D5FF", "#FFD5A3", "#D5FFA3", "#FFA3D5", "#A3FFD5", "#D5A3FF",
];

/// Vertical stacking constants for newly created nodes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed horizontal offset for every created node
    pub origin_x: f64,
    /// Vertical coordinate of a batch's first node
    pub base_y: f64,
    /// Vertical distance between consecutive nodes of one batch
    pub row_spacing: f64,
}

impl LayoutConfig {
    /// Creation-time position for the fragment at `ordinal` within its batch
    #[inline]
    #[must_use]
    pub fn position_for(&self, ordinal: usize) -> Position {
        Position::new(self.origin_x, self.base_y + ordinal as f64 * self.row_spacing)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 200.0,
            base_y: 200.0,
            row_spacing: 100.0,
        }
    }
}

/// Configuration for the merge engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Vertical stacking layout
    pub layout: LayoutConfig,
    /// Cyclically-indexed background palette; must be non-empty
    pub palette: Vec<String>,
    /// Label text color applied uniformly
    pub text_color: String,
    /// Border shorthand applied uniformly
    pub border: String,
    /// Corner rounding applied uniformly
    pub border_radius: String,
    /// Inner padding applied uniformly
    pub padding: String,
}

impl MergeConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom layout
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// With a custom palette; an empty palette is ignored
    #[inline]
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Deterministic style for the fragment at `ordinal` within its batch.
    ///
    /// Same ordinal mod palette length always yields the same background,
    /// independent of how many nodes exist from prior batches.
    #[must_use]
    pub fn style_for(&self, ordinal: usize) -> NodeStyle {
        let background = self.palette[ordinal % self.palette.len()].clone();
        NodeStyle {
            background,
            color: self.text_color.clone(),
            border: self.border.clone(),
            border_radius: self.border_radius.clone(),
            padding: self.padding.clone(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            text_color: "#000".to_string(),
            border: "1px solid #007BFF".to_string(),
            border_radius: "8px".to_string(),
            padding: "10px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stack_vertically() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.position_for(0), Position::new(200.0, 200.0));
        assert_eq!(layout.position_for(1), Position::new(200.0, 300.0));
        assert_eq!(layout.position_for(4), Position::new(200.0, 600.0));
    }

    #[test]
    fn palette_cycles_by_ordinal() {
        let config = MergeConfig::default();
        let len = config.palette.len();

        assert_eq!(config.style_for(0).background, config.palette[0]);
        assert_eq!(config.style_for(len).background, config.palette[0]);
        assert_eq!(config.style_for(len + 2).background, config.palette[2]);
    }

    #[test]
    fn fixed_styling_is_uniform() {
        let config = MergeConfig::default();
        let a = config.style_for(0);
        let b = config.style_for(3);

        assert_eq!(a.color, b.color);
        assert_eq!(a.border, b.border);
        assert_eq!(a.border_radius, b.border_radius);
        assert_eq!(a.padding, b.padding);
    }

    #[test]
    fn empty_palette_is_ignored() {
        let config = MergeConfig::new().with_palette(Vec::new());
        assert!(!config.palette.is_empty());
    }

    #[test]
    fn builder_overrides() {
        let config = MergeConfig::new()
            .with_layout(LayoutConfig {
                origin_x: 0.0,
                base_y: 0.0,
                row_spacing: 10.0,
            })
            .with_palette(vec!["#111111".to_string()]);

        assert_eq!(config.layout.position_for(3), Position::new(0.0, 30.0));
        assert_eq!(config.style_for(7).background, "#111111");
    }
}
