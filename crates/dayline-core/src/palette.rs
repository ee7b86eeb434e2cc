// File: crates/dayline-core/src/palette.rs
// Summary: Categorical series palette with a stable category-to-color mapping.

use skia_safe as skia;

/// The classic ten-color categorical ramp.
const CATEGORY10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Discrete colors for distinct categories; colors repeat after exhausting
/// the list. The mapping is positional over the configured category list, so
/// a series keeps its color even when sibling series are filtered out.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<skia::Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CATEGORY10
                .iter()
                .map(|&(r, g, b)| skia::Color::from_argb(255, r, g, b))
                .collect(),
        }
    }
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color by index, wrapping modulo the palette length.
    pub fn color_at(&self, index: usize) -> skia::Color {
        if self.colors.is_empty() {
            // Gray fallback
            return skia::Color::from_argb(255, 128, 128, 128);
        }
        self.colors[index % self.colors.len()]
    }

    /// Color for a named category, keyed by its position in `categories`.
    /// Unknown names map to the first color.
    pub fn color_for(&self, categories: &[String], name: &str) -> skia::Color {
        let index = categories.iter().position(|c| c == name).unwrap_or(0);
        self.color_at(index)
    }
}
