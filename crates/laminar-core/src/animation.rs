//! Animation plans.
//!
//! An [`Animation`] is a static, ahead-of-time description of what should happen
//! on screen and when. Nothing here plays anything back: a rendering environment
//! takes the plan (usually flattened with [`Animation::schedule`]) and drives
//! its own frame loop.
//!
//! # Composition
//!
//! Plans are trees. Leaves are [`Clip`]s: one [`Effect`] applied to one subject
//! for a run time. Inner nodes are [`AnimationGroup`]s, which place their
//! children on a shared clock using a *lag ratio*:
//!
//! - child `k` starts at `start(k - 1) + lag_ratio * run_time(k - 1)`
//! - the group's natural run time is the latest end of any child
//! - a run-time override scales every child offset and duration uniformly
//!
//! A lag ratio of `0.0` plays all children together; `1.0` plays them back to
//! back.
//!
//! ```
//! # use laminar_core::animation::{Animation, Effect};
//! let plan = Animation::sequence(vec![
//!     Animation::clip(Effect::Create, "input"),
//!     Animation::clip(Effect::Create, "output"),
//! ]);
//! assert_eq!(plan.run_time(), 2.0);
//!
//! let timeline = plan.schedule();
//! assert_eq!(timeline.clips()[1].start(), 1.0);
//! ```

mod timeline;

pub use timeline::{ScheduledClip, Timeline};

use crate::{color::Color, geometry::Point};

/// Run time of a clip that was not given one explicitly, in seconds.
pub const DEFAULT_RUN_TIME: f32 = 1.0;

/// Separator between group labels and clip subjects in scheduled subjects.
pub const SUBJECT_SEPARATOR: char = '/';

/// What a clip does to its subject.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Draws the subject onto the canvas
    Create,
    /// Briefly scales the subject up and tints it
    Indicate { color: Color },
    /// Tints the subject, then restores its own color
    Highlight { color: Color },
    /// A short stroke segment sweeps along a path and fades out behind itself
    PassingFlash { from: Point, to: Point, color: Color },
    /// A dot moves along a path and stays visible until the clip ends
    TravelingDot {
        from: Point,
        to: Point,
        color: Color,
        radius: f32,
    },
}

impl Effect {
    /// Short name of the effect, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Indicate { .. } => "indicate",
            Self::Highlight { .. } => "highlight",
            Self::PassingFlash { .. } => "passing_flash",
            Self::TravelingDot { .. } => "traveling_dot",
        }
    }
}

/// A single effect applied to a single subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    effect: Effect,
    subject: String,
    run_time: f32,
}

impl Clip {
    /// Creates a clip with the default run time.
    pub fn new(effect: Effect, subject: impl Into<String>) -> Self {
        Self {
            effect,
            subject: subject.into(),
            run_time: DEFAULT_RUN_TIME,
        }
    }

    /// Sets the run time in seconds. Negative values are treated as zero.
    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = run_time.max(0.0);
        self
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn run_time(&self) -> f32 {
        self.run_time
    }
}

/// Children placed on a shared clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationGroup {
    children: Vec<Animation>,
    lag_ratio: f32,
    run_time: Option<f32>,
    label: Option<String>,
}

impl AnimationGroup {
    /// Creates a group whose children all start together.
    pub fn new(children: Vec<Animation>) -> Self {
        Self {
            children,
            lag_ratio: 0.0,
            run_time: None,
            label: None,
        }
    }

    /// Sets the lag ratio. Negative values are treated as zero.
    pub fn with_lag_ratio(mut self, lag_ratio: f32) -> Self {
        self.lag_ratio = lag_ratio.max(0.0);
        self
    }

    /// Overrides the group's run time; children are scaled to fit.
    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = Some(run_time.max(0.0));
        self
    }

    /// Names the group. Labels prefix the subjects of every clip below it.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn children(&self) -> &[Animation] {
        &self.children
    }

    pub fn lag_ratio(&self) -> f32 {
        self.lag_ratio
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Run time before any override: the latest end of any child.
    pub fn natural_run_time(&self) -> f32 {
        self.child_offsets().1
    }

    /// Wall-clock run time: the override if set, the natural run time otherwise.
    pub fn run_time(&self) -> f32 {
        self.run_time.unwrap_or_else(|| self.natural_run_time())
    }

    /// Unscaled start offset of every child, and the natural run time.
    fn child_offsets(&self) -> (Vec<f32>, f32) {
        let mut offsets = Vec::with_capacity(self.children.len());
        let mut cursor = 0.0_f32;
        let mut latest_end = 0.0_f32;

        for child in &self.children {
            let run_time = child.run_time();
            offsets.push(cursor);
            latest_end = latest_end.max(cursor + run_time);
            cursor += self.lag_ratio * run_time;
        }

        (offsets, latest_end)
    }
}

/// A composable animation plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    Clip(Clip),
    Group(AnimationGroup),
}

impl Animation {
    /// A clip with the default run time.
    pub fn clip(effect: Effect, subject: impl Into<String>) -> Self {
        Self::Clip(Clip::new(effect, subject))
    }

    /// Children played back to back (lag ratio 1.0).
    pub fn sequence(children: Vec<Animation>) -> Self {
        Self::Group(AnimationGroup::new(children).with_lag_ratio(1.0))
    }

    /// Children played together (lag ratio 0.0).
    pub fn parallel(children: Vec<Animation>) -> Self {
        Self::Group(AnimationGroup::new(children))
    }

    /// Wall-clock run time in seconds.
    pub fn run_time(&self) -> f32 {
        match self {
            Self::Clip(clip) => clip.run_time(),
            Self::Group(group) => group.run_time(),
        }
    }

    /// Attaches a label to this plan.
    ///
    /// An unlabeled group takes the label directly; anything else is wrapped
    /// in a single-child group carrying it, which leaves timing unchanged.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        match self {
            Self::Group(group) if group.label.is_none() => Self::Group(group.with_label(label)),
            other => Self::Group(AnimationGroup::new(vec![other]).with_label(label)),
        }
    }

    /// Flattens the plan into absolute start and end times.
    pub fn schedule(&self) -> Timeline {
        let mut clips = Vec::new();
        self.schedule_into(0.0, 1.0, "", &mut clips);
        Timeline::new(clips, self.run_time())
    }

    fn schedule_into(&self, offset: f32, scale: f32, prefix: &str, out: &mut Vec<ScheduledClip>) {
        match self {
            Self::Clip(clip) => {
                let start = offset;
                let end = offset + clip.run_time() * scale;
                let subject = join_subject(prefix, clip.subject());
                out.push(ScheduledClip::new(start, end, subject, clip.effect().clone()));
            }
            Self::Group(group) => {
                let (offsets, natural) = group.child_offsets();
                let inner_scale = if natural > 0.0 {
                    scale * group.run_time() / natural
                } else {
                    0.0
                };
                let prefix = match group.label() {
                    Some(label) => join_subject(prefix, label),
                    None => prefix.to_string(),
                };

                for (child, child_offset) in group.children().iter().zip(offsets) {
                    child.schedule_into(
                        offset + child_offset * inner_scale,
                        inner_scale,
                        &prefix,
                        out,
                    );
                }
            }
        }
    }
}

impl From<Clip> for Animation {
    fn from(clip: Clip) -> Self {
        Self::Clip(clip)
    }
}

impl From<AnimationGroup> for Animation {
    fn from(group: AnimationGroup) -> Self {
        Self::Group(group)
    }
}

fn join_subject(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{SUBJECT_SEPARATOR}{name}"),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn create(subject: &str) -> Animation {
        Animation::clip(Effect::Create, subject)
    }

    #[test]
    fn test_sequence_runs_back_to_back() {
        let plan = Animation::sequence(vec![create("a"), create("b"), create("c")]);
        assert_approx_eq!(f32, plan.run_time(), 3.0);

        let timeline = plan.schedule();
        let starts: Vec<f32> = timeline.iter().map(|c| c.start()).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_parallel_runs_together() {
        let plan = Animation::parallel(vec![
            create("a"),
            Clip::new(Effect::Create, "b").with_run_time(2.5).into(),
        ]);
        assert_approx_eq!(f32, plan.run_time(), 2.5);

        let timeline = plan.schedule();
        assert!(timeline.iter().all(|c| c.start() == 0.0));
    }

    #[test]
    fn test_partial_lag_ratio_overlaps() {
        let plan: Animation = AnimationGroup::new(vec![create("a"), create("b")])
            .with_lag_ratio(0.5)
            .into();

        assert_approx_eq!(f32, plan.run_time(), 1.5);
        let timeline = plan.schedule();
        assert_approx_eq!(f32, timeline.clips()[1].start(), 0.5);
        assert_approx_eq!(f32, timeline.clips()[1].end(), 1.5);
    }

    #[test]
    fn test_run_time_override_scales_children() {
        let plan: Animation = AnimationGroup::new(vec![create("a"), create("b")])
            .with_lag_ratio(1.0)
            .with_run_time(10.0)
            .into();

        assert_approx_eq!(f32, plan.run_time(), 10.0);
        let timeline = plan.schedule();
        assert_approx_eq!(f32, timeline.clips()[0].end(), 5.0);
        assert_approx_eq!(f32, timeline.clips()[1].start(), 5.0);
        assert_approx_eq!(f32, timeline.duration(), 10.0);
    }

    #[test]
    fn test_nested_override_propagates() {
        let inner = Animation::parallel(vec![create("x"), create("y")]);
        let plan: Animation = AnimationGroup::new(vec![create("a"), inner])
            .with_lag_ratio(1.0)
            .with_run_time(4.0)
            .into();

        let timeline = plan.schedule();
        assert_eq!(timeline.len(), 3);
        let last = &timeline.clips()[2];
        assert_approx_eq!(f32, last.start(), 2.0);
        assert_approx_eq!(f32, last.end(), 4.0);
    }

    #[test]
    fn test_labels_prefix_subjects() {
        let plan = Animation::sequence(vec![
            Animation::parallel(vec![create("node[0]"), create("node[1]")]).labeled("layer[0]"),
            create("edge").labeled("connector[0]"),
        ]);

        let schedule = plan.schedule();
        let subjects: Vec<&str> = schedule.iter().map(|c| c.subject()).collect();
        assert_eq!(
            subjects,
            vec!["layer[0]/node[0]", "layer[0]/node[1]", "connector[0]/edge"]
        );
    }

    #[test]
    fn test_labeled_keeps_timing() {
        let clip = Clip::new(Effect::Create, "a").with_run_time(2.0);
        let labeled = Animation::from(clip).labeled("outer").labeled("outermost");

        assert_approx_eq!(f32, labeled.run_time(), 2.0);
        assert_eq!(labeled.schedule().clips()[0].subject(), "outermost/outer/a");
    }

    #[test]
    fn test_empty_group() {
        let plan = Animation::sequence(Vec::new());
        assert_eq!(plan.run_time(), 0.0);
        assert!(plan.schedule().is_empty());

        let stretched: Animation = AnimationGroup::new(Vec::new()).with_run_time(3.0).into();
        assert_eq!(stretched.run_time(), 3.0);
        assert!(stretched.schedule().is_empty());
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let clip = Clip::new(Effect::Create, "a").with_run_time(-1.0);
        assert_eq!(clip.run_time(), 0.0);

        let group = AnimationGroup::new(Vec::new()).with_lag_ratio(-0.5);
        assert_eq!(group.lag_ratio(), 0.0);
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;

        fn clips(run_times: &[f32]) -> Vec<Animation> {
            run_times
                .iter()
                .enumerate()
                .map(|(i, &t)| Clip::new(Effect::Create, format!("clip[{i}]")).with_run_time(t).into())
                .collect()
        }

        proptest! {
            #[test]
            fn sequence_run_time_is_sum_of_children(
                run_times in prop::collection::vec(0.1f32..5.0, 1..16)
            ) {
                let plan = Animation::sequence(clips(&run_times));
                let expected: f32 = run_times.iter().sum();
                prop_assert!((plan.run_time() - expected).abs() < 1e-3);
            }

            #[test]
            fn run_time_override_bounds_every_clip(
                run_times in prop::collection::vec(0.1f32..5.0, 1..16),
                lag_ratio in 0.0f32..1.0,
                total in 0.5f32..30.0,
            ) {
                let plan: Animation = AnimationGroup::new(clips(&run_times))
                    .with_lag_ratio(lag_ratio)
                    .with_run_time(total)
                    .into();
                let timeline = plan.schedule();

                prop_assert_eq!(timeline.len(), run_times.len());
                prop_assert!((timeline.duration() - total).abs() < 1e-4);
                let latest_end = timeline.iter().map(|c| c.end()).fold(0.0f32, f32::max);
                prop_assert!((latest_end - total).abs() < 1e-2);
            }
        }
    }
}
