//! Mark Pool - the append-only collection of marks placed by clicks
//!
//! Insertion order is z-order is render order. Every append hands back a
//! fresh snapshot; snapshots taken earlier are never touched, so the
//! renderer can detect changes by pointer comparison.

pub mod config;
pub mod mark;

pub use config::EffectConfig;
pub use mark::{MarkVariant, PlacedMark};

use std::rc::Rc;

use rand::Rng;

use crate::error::FxError;
use crate::placement::{MarkFactory, Placement};

/// Ordered snapshot of a pool
pub type Snapshot = Rc<Vec<PlacedMark>>;

#[derive(Debug, Clone, Default)]
pub struct MarkPool {
    marks: Snapshot,
}

impl MarkPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next appended mark must carry
    pub fn next_index(&self) -> usize {
        self.marks.len()
    }

    /// Append a mark and return the updated snapshot.
    ///
    /// Copy-on-write: if a previous snapshot is still held somewhere the
    /// backing vector is cloned first.
    pub fn append(&mut self, mark: PlacedMark) -> Snapshot {
        debug_assert_eq!(mark.sequence_index, self.next_index());
        Rc::make_mut(&mut self.marks).push(mark);
        Rc::clone(&self.marks)
    }

    pub fn snapshot(&self) -> Snapshot {
        Rc::clone(&self.marks)
    }

    /// Build a mark for `placement` with the next index and append it
    pub fn place<R: Rng>(
        &mut self,
        rng: &mut R,
        config: &EffectConfig,
        placement: Placement,
    ) -> Result<Snapshot, FxError> {
        let mark = MarkFactory::create_mark(rng, config, placement, self.next_index())?;
        log::debug!("placed {}", mark.describe());
        Ok(self.append(mark))
    }
}
