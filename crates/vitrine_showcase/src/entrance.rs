//! Scroll-triggered section entrances
//!
//! Two shapes cover every section of the page:
//!
//! - **Group entrance**: one trigger on the section container, children
//!   sliding in with a stagger (about blurb, skill rows)
//! - **List entrance**: each item carries its own trigger and an
//!   index-scaled delay (project rows, resume cards)
//!
//! Both play when the section's top crosses the configured fraction of
//! the viewport height and reverse when it crosses back upward.

use std::sync::Arc;

use vitrine_animation::{
    Easing, ScenePlayer, SchedulerHandle, StaggerConfig, Step, StepPosition, Timeline,
};
use vitrine_core::StyleProperty;
use vitrine_stage::{
    BindingId, ElementId, ReplayPolicy, SceneScope, StageHandle, TriggerBinding, TriggerCondition,
    Triggers,
};

/// Shape of an entrance: where content starts and how it arrives
#[derive(Clone, Copy, Debug)]
pub struct EntranceSpec {
    /// Horizontal offset content slides in from
    pub from_x: f32,
    /// Vertical offset content rises from
    pub from_y: f32,
    pub duration_ms: f32,
    pub easing: Easing,
    /// Viewport fraction whose crossing triggers the entrance
    pub enter_ratio: f32,
}

impl EntranceSpec {
    /// Slide in from the right: about blurb, skill rows
    pub fn slide_in() -> Self {
        Self {
            from_x: 100.0,
            from_y: 0.0,
            duration_ms: 600.0,
            easing: Easing::CubicOut,
            enter_ratio: 0.8,
        }
    }

    /// Rise from below: project rows
    pub fn rise() -> Self {
        Self {
            from_x: 0.0,
            from_y: 50.0,
            duration_ms: 800.0,
            easing: Easing::QuintOut,
            enter_ratio: 0.9,
        }
    }

    /// Rise from below, slower: resume cards and section titles
    pub fn rise_slow() -> Self {
        Self {
            from_x: 0.0,
            from_y: 50.0,
            duration_ms: 1000.0,
            easing: Easing::QuintOut,
            enter_ratio: 0.8,
        }
    }

    fn step(&self, delay_ms: f32) -> Step {
        let mut step = Step::new(self.duration_ms)
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
            .easing(self.easing)
            .position(StepPosition::At(delay_ms))
            .immediate_render();
        if self.from_x != 0.0 {
            step = step.track(StyleProperty::TranslateX, self.from_x.into(), 0.0.into());
        }
        if self.from_y != 0.0 {
            step = step.track(StyleProperty::TranslateY, self.from_y.into(), 0.0.into());
        }
        step
    }
}

/// A bound entrance: the player plus its trigger binding
pub struct SectionEntrance {
    pub player: Arc<ScenePlayer>,
    pub binding: BindingId,
}

/// Bind a staggered entrance for a section's children
///
/// One intersection trigger on `section`; `children` slide in at
/// `stagger_ms` intervals and reverse together when the section scrolls
/// back out.
pub fn bind_group_entrance(
    scheduler: SchedulerHandle,
    stage: &StageHandle,
    triggers: &mut Triggers,
    scope: &SceneScope,
    section: ElementId,
    children: &[ElementId],
    spec: EntranceSpec,
    stagger_ms: f32,
) -> SectionEntrance {
    let mut tl = Timeline::with_sink(stage.as_sink());
    tl.push_staggered(
        spec.step(0.0),
        children.iter().map(|c| c.to_raw()),
        StaggerConfig::new(stagger_ms),
    );

    let player = Arc::new(ScenePlayer::new(scheduler, tl));
    let binding = triggers.bind(
        TriggerBinding::new(
            section,
            TriggerCondition::ScrollIntersect {
                enter_ratio: spec.enter_ratio,
            },
            ReplayPolicy::PlayReverseOnLeave,
            Arc::clone(&player),
        ),
        scope,
    );

    SectionEntrance { player, binding }
}

/// Bind per-item entrances with index-scaled delays
///
/// Every item is its own trigger, so rows reveal as each scrolls into
/// view; the delay ramp keeps adjacent rows from arriving at once.
pub fn bind_list_entrance(
    scheduler: SchedulerHandle,
    stage: &StageHandle,
    triggers: &mut Triggers,
    scope: &SceneScope,
    items: &[ElementId],
    spec: EntranceSpec,
    delay_step_ms: f32,
) -> Vec<SectionEntrance> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut tl = Timeline::with_sink(stage.as_sink());
            tl.push(spec.step(delay_step_ms * index as f32).target(item.to_raw()));

            let player = Arc::new(ScenePlayer::new(scheduler.clone(), tl));
            let binding = triggers.bind(
                TriggerBinding::new(
                    *item,
                    TriggerCondition::ScrollIntersect {
                        enter_ratio: spec.enter_ratio,
                    },
                    ReplayPolicy::PlayReverseOnLeave,
                    Arc::clone(&player),
                ),
                scope,
            );

            SectionEntrance { player, binding }
        })
        .collect()
}
