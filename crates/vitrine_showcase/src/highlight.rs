//! Card highlight wiring
//!
//! Builds the highlight timeline every project row and resume card share
//! (fill line sweep, title color shift, glow fade, each overlapping the
//! last), registers the cards with an exclusivity group, and binds the
//! activation gesture: hover where hover exists, tap where it doesn't.
//! The active card decides which preview panel is visible; exactly one or
//! zero previews at any time.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_animation::{Easing, SchedulerHandle, Step, StepPosition, Timeline};
use vitrine_core::{page_chrome, StyleProperty};
use vitrine_stage::{
    CardHandles, EventHandlers, ExclusiveGroup, SceneScope, StageHandle, Triggers,
};

use crate::content::ProjectInfo;

/// Build the shared highlight timeline for one card
///
/// Fill line sweeps to full width, the title shifts to the accent color
/// overlapping the sweep, and the glow fades in behind it.
pub fn highlight_timeline(stage: &StageHandle, handles: &CardHandles) -> Timeline {
    let chrome = page_chrome();
    let mut tl = Timeline::with_sink(stage.as_sink());

    tl.push(
        Step::new(600.0)
            .target(handles.fill_line.to_raw())
            .track(StyleProperty::FillWidth, 0.0.into(), 1.0.into())
            .easing(Easing::QuartOut)
            .position(StepPosition::At(0.0)),
    );
    tl.push(
        Step::new(400.0)
            .target(handles.title.to_raw())
            .track(
                StyleProperty::TextColor,
                chrome.resting.into(),
                chrome.accent.into(),
            )
            .easing(Easing::QuadOut)
            .position(StepPosition::AfterPrevious(-300.0)),
    );
    tl.push(
        Step::new(400.0)
            .target(handles.glow.to_raw())
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
            .easing(Easing::QuadOut)
            .position(StepPosition::AfterPrevious(-300.0)),
    );

    tl
}

/// Register a keyed card list as an exclusivity group
pub fn build_card_group(
    scheduler: SchedulerHandle,
    stage: &StageHandle,
    cards: impl IntoIterator<Item = (String, CardHandles)>,
) -> ExclusiveGroup {
    let mut group = ExclusiveGroup::new(scheduler, stage.clone());
    for (key, handles) in cards {
        let highlight = highlight_timeline(stage, &handles);
        group.insert(key, handles, highlight);
    }
    group
}

/// Bind the activation gesture for every card in the group
///
/// Hover-capable devices activate on pointer enter; touch-only devices on
/// tap. The group is also released with the scope, so no highlight or dim
/// tween outlives the view.
pub fn bind_card_interaction(
    group: &Rc<RefCell<ExclusiveGroup>>,
    triggers: &mut Triggers,
    scope: &SceneScope,
) {
    let capability = triggers.capability();
    let token = scope.token();

    let cards: Vec<(String, CardHandles)> = {
        let group = group.borrow();
        group
            .keys()
            .map(|key| (key.to_string(), group.handles(key).unwrap()))
            .collect()
    };

    for (key, handles) in cards {
        let mut handlers = EventHandlers::new();
        let group_ref = Rc::downgrade(group);
        let guard = token.clone();
        let activate = move |_ctx: &vitrine_stage::EventContext| {
            if guard.is_revoked() {
                return;
            }
            if let Some(group) = group_ref.upgrade() {
                group.borrow_mut().activate(Some(&key));
            }
        };

        if capability.supports_hover() {
            handlers.on_hover_enter(activate);
        } else {
            handlers.on_click(activate);
        }
        triggers.handlers_mut().register(handles.root, handlers);
    }

    let group_release = Rc::downgrade(group);
    scope.add_release(move || {
        if let Some(group) = group_release.upgrade() {
            group.borrow_mut().release();
        }
    });
}

/// The project whose preview panel should currently be rendered
///
/// Returns at most one project: the active card's, or none.
pub fn visible_preview<'a>(
    group: &ExclusiveGroup,
    projects: &'a [ProjectInfo],
) -> Option<&'a ProjectInfo> {
    let active = group.active()?;
    projects.iter().find(|p| p.id == active)
}
