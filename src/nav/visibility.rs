use serde::Deserialize;

/// Tuning for the visibility observer behind scroll-spy.
///
/// A section counts as visible once it is intersecting the inset
/// viewport and at least `threshold` of its height is inside it. The
/// boundary is inclusive: a ratio exactly equal to the threshold counts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub threshold: f64,
    /// Height of the fixed header; content under it is not "in view".
    pub inset_top_px: u32,
    /// Bottom share of the viewport ignored, so a section peeking in
    /// at the bottom edge does not take the highlight.
    pub inset_bottom_percent: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            inset_top_px: 80,
            inset_bottom_percent: 40,
        }
    }
}

impl VisibilityConfig {
    /// Used by reveal-on-scroll: any sliver inside the lower-trimmed viewport.
    pub fn reveal() -> Self {
        Self {
            threshold: 0.0,
            inset_top_px: 0,
            inset_bottom_percent: 10,
        }
    }

    /// CSS margin for the observer root, shrinking the viewport by the insets.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.inset_top_px, self.inset_bottom_percent
        )
    }

    pub fn counts_as_visible(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.threshold) && self.inset_bottom_percent < 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margin_excludes_header_and_bottom() {
        assert_eq!(VisibilityConfig::default().root_margin(), "-80px 0px -40% 0px");
        assert_eq!(VisibilityConfig::reveal().root_margin(), "-0px 0px -10% 0px");
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let config = VisibilityConfig::default();
        assert!(config.counts_as_visible(true, 0.25));
        assert!(config.counts_as_visible(true, 0.9));
        assert!(!config.counts_as_visible(true, 0.249_999));
        assert!(!config.counts_as_visible(false, 0.25));
    }

    #[test]
    fn rejects_out_of_range_settings() {
        let mut config = VisibilityConfig::default();
        assert!(config.is_valid());
        config.threshold = 1.5;
        assert!(!config.is_valid());
        config.threshold = 0.5;
        config.inset_bottom_percent = 100;
        assert!(!config.is_valid());
    }
}
