// File: crates/dayline-core/src/options.rs
// Summary: Chart options with defaults and a patch type for caller overrides.

use crate::scale::ScaleKind;
use crate::types::Margin;

/// Fully resolved chart configuration.
///
/// `base_url`, `prefix`, and `categories` have no meaningful defaults; left
/// empty they surface at load time as an error or an empty series set. No
/// validation happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub scale: ScaleKind,
    pub margin: Margin,
    pub base_url: String,
    pub prefix: String,
    pub categories: Vec<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            scale: ScaleKind::Linear,
            margin: Margin::default(),
            base_url: String::new(),
            prefix: String::new(),
            categories: Vec::new(),
        }
    }
}

/// Caller-supplied overrides, merged shallowly over [`ChartOptions::default`].
///
/// Every unset field keeps its default; every set field wins.
#[derive(Clone, Debug, Default)]
pub struct OptionsPatch {
    pub title: Option<String>,
    pub scale: Option<ScaleKind>,
    pub margin: Option<Margin>,
    pub base_url: Option<String>,
    pub prefix: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl OptionsPatch {
    /// Resolve the patch against the defaults.
    pub fn resolve(self) -> ChartOptions {
        let d = ChartOptions::default();
        ChartOptions {
            title: self.title.unwrap_or(d.title),
            scale: self.scale.unwrap_or(d.scale),
            margin: self.margin.unwrap_or(d.margin),
            base_url: self.base_url.unwrap_or(d.base_url),
            prefix: self.prefix.unwrap_or(d.prefix),
            categories: self.categories.unwrap_or(d.categories),
        }
    }
}
