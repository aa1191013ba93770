//! Intro splash scene
//!
//! Plays exactly once on mount: the container snaps in with an elastic
//! settle while the title reveals letter by letter with a bounce, the
//! subtitle rises, everything holds, then the letters scatter apart and
//! the container dissolves. Completion signals "intro complete", after
//! which the owning view unmounts the splash entirely.

use std::sync::Arc;

use vitrine_animation::{
    Easing, ScenePlayer, SchedulerHandle, StaggerConfig, Step, StepPosition, Timeline,
};
use vitrine_core::{page_chrome, Color, StyleProperty};
use vitrine_stage::{
    ElementId, ReplayPolicy, SceneScope, StageHandle, TriggerBinding, TriggerCondition, Triggers,
};

/// Typed references to the splash's animatable elements
#[derive(Clone, Debug)]
pub struct SplashHandles {
    pub container: ElementId,
    /// One element per title letter, in reading order
    pub letters: Vec<ElementId>,
    pub subtitle: ElementId,
}

/// The mounted splash scene
pub struct SplashScene {
    player: Arc<ScenePlayer>,
}

impl SplashScene {
    /// Build the intro timeline and bind it to mount
    ///
    /// `on_intro_complete` fires once when the full sequence has played
    /// out; it is guarded by the scope, so a torn-down view never hears
    /// it.
    pub fn mount(
        scheduler: SchedulerHandle,
        stage: &StageHandle,
        triggers: &mut Triggers,
        scope: &SceneScope,
        handles: &SplashHandles,
        on_intro_complete: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let timeline = build_intro_timeline(stage, handles);
        let player = Arc::new(ScenePlayer::new(scheduler, timeline));
        player.set_on_complete(scope.guard(on_intro_complete));

        triggers.bind(
            TriggerBinding::new(
                handles.container,
                TriggerCondition::Mount,
                ReplayPolicy::PlayOnce,
                Arc::clone(&player),
            ),
            scope,
        );

        Self { player }
    }

    pub fn player(&self) -> &ScenePlayer {
        &self.player
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }
}

fn build_intro_timeline(stage: &StageHandle, handles: &SplashHandles) -> Timeline {
    let chrome = page_chrome();
    let mut tl = Timeline::with_sink(stage.as_sink());

    // Container entrance: fade, scale, and backdrop shift with an elastic
    // settle
    tl.push(
        Step::new(1000.0)
            .target(handles.container.to_raw())
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
            .track(StyleProperty::Scale, 0.7.into(), 1.0.into())
            .track(
                StyleProperty::Backdrop,
                chrome.splash_tint.into(),
                Color::BLACK.into(),
            )
            .easing(Easing::elastic_out(1.0, 0.5))
            .position(StepPosition::At(0.0))
            .immediate_render(),
    );

    // Letter-by-letter reveal with rotation and bounce, overlapping the
    // container settle
    tl.push_staggered(
        Step::new(800.0)
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
            .track(StyleProperty::TranslateY, 50.0.into(), 0.0.into())
            .track(StyleProperty::RotationX, 90.0.into(), 0.0.into())
            .easing(Easing::BounceOut)
            .position(StepPosition::AfterPrevious(-700.0))
            .immediate_render(),
        handles.letters.iter().map(|l| l.to_raw()),
        StaggerConfig::new(100.0),
    );

    // Subtitle rise
    tl.push(
        Step::new(1000.0)
            .target(handles.subtitle.to_raw())
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
            .track(StyleProperty::TranslateY, 30.0.into(), 0.0.into())
            .easing(Easing::BounceOut)
            .position(StepPosition::AfterPrevious(-500.0))
            .immediate_render(),
    );

    // Hold, then scatter the letters apart; each letter drifts to its own
    // offset, so these are individual steps chained at a 50ms stagger
    for (index, letter) in handles.letters.iter().enumerate() {
        let (dx, dy) = scatter_offset(index);
        let position = if index == 0 {
            StepPosition::AfterPrevious(1500.0)
        } else {
            StepPosition::WithPrevious(50.0)
        };
        tl.push(
            Step::new(1000.0)
                .target(letter.to_raw())
                .track(StyleProperty::Opacity, 1.0.into(), 0.0.into())
                .track(StyleProperty::TranslateX, 0.0.into(), dx.into())
                .track(StyleProperty::TranslateY, 0.0.into(), dy.into())
                .track(StyleProperty::Scale, 1.0.into(), 0.5.into())
                .easing(Easing::QuartOut)
                .position(position),
        );
    }

    // Subtitle exit: fade and slide up
    tl.push(
        Step::new(800.0)
            .target(handles.subtitle.to_raw())
            .track(StyleProperty::Opacity, 1.0.into(), 0.0.into())
            .track(StyleProperty::TranslateY, 0.0.into(), (-50.0).into())
            .easing(Easing::QuartOut)
            .position(StepPosition::AfterPrevious(-800.0)),
    );

    // Container exit: fade out
    tl.push(
        Step::new(500.0)
            .target(handles.container.to_raw())
            .track(StyleProperty::Opacity, 1.0.into(), 0.0.into())
            .easing(Easing::CubicIn)
            .position(StepPosition::AfterPrevious(-500.0)),
    );

    tl
}

/// Deterministic per-letter drift for the scatter exit
///
/// x lands in [-200, 200], y in [-100, 100]. Hash-based so the exit is
/// reproducible across runs.
fn scatter_offset(index: usize) -> (f32, f32) {
    let mut h = (index as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;

    let dx = ((h & 0xFFFF) as f32 / 65535.0) * 400.0 - 200.0;
    let dy = (((h >> 16) & 0xFFFF) as f32 / 65535.0) * 200.0 - 100.0;
    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use vitrine_animation::AnimationScheduler;
    use vitrine_core::{PointerCapability, VisualStyle};
    use vitrine_stage::Stage;

    fn splash_handles(stage: &Stage, letters: usize) -> SplashHandles {
        SplashHandles {
            container: stage.insert(VisualStyle::default()),
            letters: (0..letters)
                .map(|_| stage.insert(VisualStyle::default()))
                .collect(),
            subtitle: stage.insert(VisualStyle::default()),
        }
    }

    #[test]
    fn test_intro_plays_once_and_signals_completion() {
        let stage = Stage::new();
        let scheduler = AnimationScheduler::new();
        let scope = SceneScope::new();
        let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
        let handles = splash_handles(&stage, 5);

        let completed = Arc::new(AtomicBool::new(false));
        let inner = Arc::clone(&completed);
        let splash = SplashScene::mount(
            scheduler.handle(),
            &stage.handle(),
            &mut triggers,
            &scope,
            &handles,
            move || inner.store(true, Ordering::SeqCst),
        );

        // Mount-bound: playing immediately, letters primed hidden
        assert!(splash.is_playing());
        assert_eq!(stage.style(handles.letters[0]).unwrap().opacity, 0.0);

        // Mid-reveal the container has faded in
        scheduler.tick(1000.0);
        assert!(stage.style(handles.container).unwrap().opacity > 0.5);
        assert!(!completed.load(Ordering::SeqCst));

        // Run the whole sequence out
        for _ in 0..10 {
            scheduler.tick(1000.0);
        }
        assert!(!splash.is_playing());
        assert!(completed.load(Ordering::SeqCst));

        // Dissolved: container and letters faded back out
        assert_eq!(stage.style(handles.container).unwrap().opacity, 0.0);
        assert_eq!(stage.style(handles.letters[2]).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_torn_down_splash_never_signals() {
        let stage = Stage::new();
        let scheduler = AnimationScheduler::new();
        let scope = SceneScope::new();
        let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
        let handles = splash_handles(&stage, 5);

        let completed = Arc::new(AtomicBool::new(false));
        let inner = Arc::clone(&completed);
        let _splash = SplashScene::mount(
            scheduler.handle(),
            &stage.handle(),
            &mut triggers,
            &scope,
            &handles,
            move || inner.store(true, Ordering::SeqCst),
        );

        scheduler.tick(500.0);
        let mid = stage.style(handles.container).unwrap();

        // Fast navigation mid-intro
        scope.dispose();
        scheduler.tick(10_000.0);

        // No completion, no further style writes
        assert!(!completed.load(Ordering::SeqCst));
        assert_eq!(stage.style(handles.container).unwrap(), mid);
    }

    #[test]
    fn test_scatter_offsets_in_range_and_stable() {
        for index in 0..32 {
            let (dx, dy) = scatter_offset(index);
            assert!((-200.0..=200.0).contains(&dx));
            assert!((-100.0..=100.0).contains(&dy));
            assert_eq!((dx, dy), scatter_offset(index));
        }
        // Different letters drift differently
        assert_ne!(scatter_offset(0), scatter_offset(1));
    }
}
