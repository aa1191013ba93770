//! Section navigation
//!
//! The menu slides its items in on mount and hands section selection off
//! to the external smooth-scroll provider; the animator itself never
//! scrolls.

use std::sync::Arc;

use vitrine_animation::{
    Easing, ScenePlayer, SchedulerHandle, StaggerConfig, Step, StepPosition, Timeline,
};
use vitrine_core::StyleProperty;
use vitrine_stage::{
    ElementId, ReplayPolicy, SceneScope, ScrollIntoView, StageHandle, TriggerBinding,
    TriggerCondition, Triggers,
};

/// One menu entry: a label and the section it navigates to
#[derive(Clone, Debug)]
pub struct NavItem {
    pub label: String,
    /// Element rendered for the menu row
    pub row: ElementId,
    /// Section element the row navigates to
    pub section: ElementId,
}

/// The mounted navigation menu
pub struct SectionNav {
    items: Vec<NavItem>,
    scroller: Arc<dyn ScrollIntoView>,
    entrance: Arc<ScenePlayer>,
}

impl SectionNav {
    /// Bind the menu entrance and keep the scroll collaborator
    ///
    /// Menu rows slide in from the right with a stagger, once, when the
    /// menu mounts.
    pub fn mount(
        scheduler: SchedulerHandle,
        stage: &StageHandle,
        triggers: &mut Triggers,
        scope: &SceneScope,
        items: Vec<NavItem>,
        scroller: Arc<dyn ScrollIntoView>,
    ) -> Self {
        let mut tl = Timeline::with_sink(stage.as_sink());
        tl.push_staggered(
            Step::new(600.0)
                .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
                .track(StyleProperty::TranslateX, 50.0.into(), 0.0.into())
                .easing(Easing::QuartOut)
                .position(StepPosition::At(0.0))
                .immediate_render(),
            items.iter().map(|item| item.row.to_raw()),
            StaggerConfig::new(100.0),
        );

        let entrance = Arc::new(ScenePlayer::new(scheduler, tl));
        let anchor = items.first().map(|item| item.row);
        if let Some(anchor) = anchor {
            triggers.bind(
                TriggerBinding::new(
                    anchor,
                    TriggerCondition::Mount,
                    ReplayPolicy::PlayOnce,
                    Arc::clone(&entrance),
                ),
                scope,
            );
        }

        Self {
            items,
            scroller,
            entrance,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn entrance(&self) -> &ScenePlayer {
        &self.entrance
    }

    /// Navigate to the section behind the menu row at `index`
    ///
    /// Hands the target to the smooth-scroll provider with the animate
    /// flag set; out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            tracing::debug!(index, "nav select out of range");
            return;
        };
        self.scroller.scroll_to(item.section, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_animation::AnimationScheduler;
    use vitrine_core::{PointerCapability, VisualStyle};
    use vitrine_stage::{RecordingScroller, Stage};

    fn nav_fixture() -> (Stage, AnimationScheduler, SceneScope, Arc<RecordingScroller>, SectionNav)
    {
        let stage = Stage::new();
        let scheduler = AnimationScheduler::new();
        let scope = SceneScope::new();
        let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
        let scroller = Arc::new(RecordingScroller::new());

        let items: Vec<NavItem> = ["About Me", "Skills", "Projects"]
            .iter()
            .map(|label| NavItem {
                label: label.to_string(),
                row: stage.insert(VisualStyle::default()),
                section: stage.insert_with_id(label.to_lowercase(), VisualStyle::default()),
            })
            .collect();

        let nav = SectionNav::mount(
            scheduler.handle(),
            &stage.handle(),
            &mut triggers,
            &scope,
            items,
            scroller.clone(),
        );
        (stage, scheduler, scope, scroller, nav)
    }

    #[test]
    fn test_menu_slides_in_on_mount() {
        let (stage, scheduler, _scope, _scroller, nav) = nav_fixture();

        // Mount-bound entrance is already playing, rows primed hidden
        assert!(nav.entrance().is_playing());
        assert_eq!(stage.style(nav.items()[2].row).unwrap().opacity, 0.0);

        scheduler.tick(2000.0);
        for item in nav.items() {
            assert_eq!(stage.style(item.row).unwrap().opacity, 1.0);
            assert_eq!(stage.style(item.row).unwrap().translate_x, 0.0);
        }
    }

    #[test]
    fn test_select_hands_off_to_scroller() {
        let (_stage, _scheduler, _scope, scroller, nav) = nav_fixture();

        nav.select(1);
        let requests = scroller.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].target, nav.items()[1].section);
        assert!(requests[0].animate);

        // Out of range is ignored
        nav.select(99);
        assert!(scroller.take_requests().is_empty());
    }
}
