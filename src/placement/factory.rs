//! MarkFactory - turns a click placement into a PlacedMark

use rand::Rng;

use super::mapper::Placement;
use super::sampler::Selector;
use crate::error::FxError;
use crate::pool::{EffectConfig, PlacedMark};

pub struct MarkFactory;

impl MarkFactory {
    /// Radius is picked before color; an empty radii list fails first.
    pub fn create_mark<R: Rng>(
        rng: &mut R,
        config: &EffectConfig,
        placement: Placement,
        sequence_index: usize,
    ) -> Result<PlacedMark, FxError> {
        let fraction = *Selector::choose(rng, &config.radii, "radii")?;
        let color = Selector::choose(rng, &config.colors, "colors")?.clone();

        Ok(PlacedMark {
            sequence_index,
            center: placement.local,
            radius_px: fraction * placement.scale_dimension,
            color,
            variant: config.variant,
        })
    }
}
