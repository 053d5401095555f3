//! Registry of independent timelines

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::params::SectionDescriptor;
use crate::world::TimelineWorld;

new_key_type! {
    /// Unique identifier for a timeline in a [`TimelineRuntime`]
    pub struct TimelineId;
}

/// Runtime that owns any number of independent timelines.
///
/// Timelines share nothing; each is advanced in turn.
pub struct TimelineRuntime {
    timelines: SlotMap<TimelineId, TimelineWorld>,
}

impl TimelineRuntime {
    pub fn new() -> Self {
        Self {
            timelines: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, world: TimelineWorld) -> TimelineId {
        self.timelines.insert(world)
    }

    /// Validate descriptors and register a new timeline for them
    pub fn create(&mut self, descriptors: &[SectionDescriptor]) -> Result<TimelineId> {
        let world = TimelineWorld::create(descriptors)?;
        let id = self.timelines.insert(world);
        debug!(?id, sections = descriptors.len(), "timeline registered");
        Ok(id)
    }

    pub fn get(&self, id: TimelineId) -> Option<&TimelineWorld> {
        self.timelines.get(id)
    }

    pub fn get_mut(&mut self, id: TimelineId) -> Option<&mut TimelineWorld> {
        self.timelines.get_mut(id)
    }

    pub fn remove(&mut self, id: TimelineId) -> Option<TimelineWorld> {
        self.timelines.remove(id)
    }

    /// Advance one timeline, returning whether its state changed
    pub fn advance(&mut self, id: TimelineId, delta_time: f64) -> Result<bool> {
        self.timelines
            .get_mut(id)
            .ok_or(TimelineError::UnknownTimeline(id))?
            .advance(delta_time)
    }

    /// Advance every timeline by the same delta.
    ///
    /// Returns how many timelines changed. Stops at the first failure;
    /// timelines visited before it keep their new state.
    pub fn advance_all(&mut self, delta_time: f64) -> Result<usize> {
        let mut changed = 0;
        for (_, world) in self.timelines.iter_mut() {
            if world.advance(delta_time)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Whether every registered timeline has completed
    pub fn all_completed(&self) -> bool {
        self.timelines.values().all(TimelineWorld::is_completed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimelineId, &TimelineWorld)> {
        self.timelines.iter()
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}

impl Default for TimelineRuntime {
    fn default() -> Self {
        Self::new()
    }
}
