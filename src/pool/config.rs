//! EffectConfig - construction-time props of a circle pool

use super::mark::MarkVariant;

/// Candidate radii and colors for a pool.
///
/// Radii are fractions in (0, 1] of the pool's smaller dimension. Colors are
/// any CSS color string. Repeating an entry makes it proportionally more
/// likely to be picked. Nothing is validated here; an empty list surfaces
/// as an error on the first click.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectConfig {
    pub variant: MarkVariant,
    pub radii: Vec<f64>,
    pub colors: Vec<String>,
}

impl EffectConfig {
    pub fn new<C: Into<String>>(
        variant: MarkVariant,
        radii: impl IntoIterator<Item = f64>,
        colors: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            variant,
            radii: radii.into_iter().collect(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_variant(mut self, variant: MarkVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_order_and_duplicates() {
        let cfg = EffectConfig::new(MarkVariant::Plain, [0.2, 0.2, 0.8], ["blue", "red", "blue"]);
        assert_eq!(cfg.radii, vec![0.2, 0.2, 0.8]);
        assert_eq!(cfg.colors, vec!["blue", "red", "blue"]);
    }

    #[test]
    fn default_is_plain_and_empty() {
        let cfg = EffectConfig::default();
        assert_eq!(cfg.variant, MarkVariant::Plain);
        assert!(cfg.radii.is_empty());
        assert!(cfg.colors.is_empty());
    }

    #[test]
    fn with_variant_overrides() {
        let cfg = EffectConfig::default().with_variant(MarkVariant::Textured);
        assert_eq!(cfg.variant, MarkVariant::Textured);
    }
}
