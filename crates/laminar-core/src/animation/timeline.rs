//! Flattened animation plans.

use crate::animation::Effect;

/// A clip placed at absolute start and end times, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledClip {
    start: f32,
    end: f32,
    subject: String,
    effect: Effect,
}

impl ScheduledClip {
    pub(crate) fn new(start: f32, end: f32, subject: String, effect: Effect) -> Self {
        Self {
            start,
            end,
            subject,
            effect,
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Full subject path, group labels first (e.g. `layer[1]/node[0]`)
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Returns `true` if the clip is running at time `t`.
    pub fn is_active_at(&self, t: f32) -> bool {
        self.start <= t && t < self.end
    }
}

/// Every clip of a plan ordered by start time.
///
/// Clips starting at the same time keep the order in which the plan lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    clips: Vec<ScheduledClip>,
    duration: f32,
}

impl Timeline {
    pub(crate) fn new(mut clips: Vec<ScheduledClip>, duration: f32) -> Self {
        clips.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { clips, duration }
    }

    pub fn clips(&self) -> &[ScheduledClip] {
        &self.clips
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledClip> {
        self.clips.iter()
    }

    /// Wall-clock duration of the plan this timeline was built from.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clips running at time `t`.
    pub fn active_at(&self, t: f32) -> impl Iterator<Item = &ScheduledClip> {
        self.clips.iter().filter(move |clip| clip.is_active_at(t))
    }

    /// Clips whose subject path starts with `prefix`.
    pub fn for_subject<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ScheduledClip> {
        self.clips
            .iter()
            .filter(move |clip| clip.subject.starts_with(prefix))
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ScheduledClip;
    type IntoIter = std::slice::Iter<'a, ScheduledClip>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.iter()
    }
}
