//! Interaction exclusivity
//!
//! For list-like UIs (project rows, resume cards) at most one item may be
//! in the active/expanded visual state at a time. Activating an item
//! reverses the previously active item's highlight timeline, plays the new
//! item's highlight, and dims every non-active sibling. Activation is
//! idempotent and most-recent-wins: a new request fully supersedes the one
//! before it, with no queueing.
//!
//! Cards are keyed by stable string identifiers and expose their
//! animatable sub-elements as a typed bundle at registration time; the
//! controller never looks elements up by shape at animation time.

use indexmap::IndexMap;
use vitrine_animation::{Easing, ScenePlayer, SchedulerHandle, Step, StepPosition, Timeline};
use vitrine_core::{page_chrome, Color, StyleProperty};

use crate::stage::{ElementId, StageHandle};

/// Typed references to a card's animatable sub-elements
///
/// Captured once when the card is registered.
#[derive(Clone, Copy, Debug)]
pub struct CardHandles {
    /// The card container (dimmed as a whole)
    pub root: ElementId,
    /// The card title (color shifts between rest, accent, and dim)
    pub title: ElementId,
    /// The underline fill indicator (width sweeps 0 to 1)
    pub fill_line: ElementId,
    /// The glow backdrop (opacity fades in behind the title)
    pub glow: ElementId,
}

/// How non-active siblings are de-emphasized
#[derive(Clone, Copy, Debug)]
pub struct DimStyle {
    /// Duration of the dim/restore transitions (ms)
    pub duration_ms: f32,
    /// Opacity of a dimmed card root
    pub dimmed_opacity: f32,
    /// Title color of a dimmed card
    pub dim_color: Color,
    /// Title color at rest
    pub rest_color: Color,
}

impl Default for DimStyle {
    fn default() -> Self {
        let chrome = page_chrome();
        Self {
            duration_ms: 400.0,
            dimmed_opacity: 0.5,
            dim_color: chrome.dim,
            rest_color: chrome.resting,
        }
    }
}

struct CardEntry {
    handles: CardHandles,
    highlight: ScenePlayer,
    /// The in-flight dim/restore tween; replacing it drops the previous
    /// one from the scheduler, so the most recent request fully wins
    transition: Option<ScenePlayer>,
}

/// One-active-item controller over a keyed list of cards
pub struct ExclusiveGroup {
    scheduler: SchedulerHandle,
    stage: StageHandle,
    dim: DimStyle,
    cards: IndexMap<String, CardEntry>,
    active: Option<String>,
}

impl ExclusiveGroup {
    pub fn new(scheduler: SchedulerHandle, stage: StageHandle) -> Self {
        Self {
            scheduler,
            stage,
            dim: DimStyle::default(),
            cards: IndexMap::new(),
            active: None,
        }
    }

    pub fn with_dim_style(mut self, dim: DimStyle) -> Self {
        self.dim = dim;
        self
    }

    /// Register a card with its handle bundle and highlight timeline
    ///
    /// The highlight timeline is registered paused; `activate` plays and
    /// reverses it.
    pub fn insert(&mut self, key: impl Into<String>, handles: CardHandles, highlight: Timeline) {
        let key = key.into();
        let highlight = ScenePlayer::new(self.scheduler.clone(), highlight);
        self.cards.insert(
            key,
            CardEntry {
                handles,
                highlight,
                transition: None,
            },
        );
    }

    /// The currently active key, if any
    ///
    /// Exactly this card's preview should be visible; `None` means no
    /// preview at all.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn handles(&self, key: &str) -> Option<CardHandles> {
        self.cards.get(key).map(|c| c.handles)
    }

    /// Progress of a card's highlight timeline (for tests and debugging)
    pub fn highlight_progress(&self, key: &str) -> Option<f32> {
        self.cards.get(key).map(|c| c.highlight.progress())
    }

    /// Make `key` the sole active card, or clear with `None`
    ///
    /// Re-activating the current key is a no-op. The previously active
    /// card's highlight reverses to rest; its dim transition leaves the
    /// highlight properties to that reversal so the two never race.
    pub fn activate(&mut self, key: Option<&str>) {
        if self.active.as_deref() == key {
            return;
        }
        if let Some(k) = key {
            if !self.cards.contains_key(k) {
                tracing::warn!(key = k, "activate() on unknown card key; ignoring");
                return;
            }
        }

        let previous = self.active.take();
        if let Some(prev_key) = previous.as_deref() {
            if let Some(prev) = self.cards.get(prev_key) {
                prev.highlight.reverse();
            }
        }

        let all_keys: Vec<String> = self.cards.keys().cloned().collect();
        match key {
            Some(new_key) => {
                for k in all_keys {
                    let is_new = k == new_key;
                    let is_prev = previous.as_deref() == Some(k.as_str());
                    let entry = self.cards.get(&k).unwrap();
                    let handles = entry.handles;

                    let transition = if is_new {
                        self.transition_player(&handles, 1.0, None, false)
                    } else {
                        self.transition_player(
                            &handles,
                            self.dim.dimmed_opacity,
                            if is_prev { None } else { Some(self.dim.dim_color) },
                            !is_prev,
                        )
                    };

                    let entry = self.cards.get_mut(&k).unwrap();
                    entry.transition = Some(transition);
                    if is_new {
                        entry.highlight.play();
                    }
                }
                self.active = Some(new_key.to_string());
            }
            None => {
                for k in all_keys {
                    let is_prev = previous.as_deref() == Some(k.as_str());
                    let entry = self.cards.get(&k).unwrap();
                    let handles = entry.handles;

                    let transition = self.transition_player(
                        &handles,
                        1.0,
                        if is_prev { None } else { Some(self.dim.rest_color) },
                        !is_prev,
                    );

                    let entry = self.cards.get_mut(&k).unwrap();
                    entry.transition = Some(transition);
                }
            }
        }
    }

    /// Stop every highlight and transition so no later frame writes
    ///
    /// Called from the owning scope's teardown.
    pub fn release(&mut self) {
        for entry in self.cards.values_mut() {
            entry.highlight.stop();
            if let Some(transition) = entry.transition.take() {
                transition.stop();
            }
        }
        self.active = None;
    }

    /// Build and start a dim/restore tween from the card's current values
    fn transition_player(
        &self,
        handles: &CardHandles,
        root_opacity: f32,
        title_to: Option<Color>,
        reset_highlight: bool,
    ) -> ScenePlayer {
        let mut tl = Timeline::with_sink(self.stage.as_sink());
        let current = |element: ElementId| self.stage.style(element).unwrap_or_default();

        tl.push(
            Step::new(self.dim.duration_ms)
                .target(handles.root.to_raw())
                .track(
                    StyleProperty::Opacity,
                    current(handles.root).opacity.into(),
                    root_opacity.into(),
                )
                .easing(Easing::QuadOut)
                .position(StepPosition::At(0.0)),
        );

        if let Some(color) = title_to {
            tl.push(
                Step::new(self.dim.duration_ms)
                    .target(handles.title.to_raw())
                    .track(
                        StyleProperty::TextColor,
                        current(handles.title).text_color.into(),
                        color.into(),
                    )
                    .easing(Easing::QuadOut)
                    .position(StepPosition::At(0.0)),
            );
        }

        if reset_highlight {
            tl.push(
                Step::new(self.dim.duration_ms)
                    .target(handles.fill_line.to_raw())
                    .track(
                        StyleProperty::FillWidth,
                        current(handles.fill_line).fill_width.into(),
                        0.0.into(),
                    )
                    .easing(Easing::QuadOut)
                    .position(StepPosition::At(0.0)),
            );
            tl.push(
                Step::new(self.dim.duration_ms)
                    .target(handles.glow.to_raw())
                    .track(
                        StyleProperty::Opacity,
                        current(handles.glow).opacity.into(),
                        0.0.into(),
                    )
                    .easing(Easing::QuadOut)
                    .position(StepPosition::At(0.0)),
            );
        }

        let player = ScenePlayer::new(self.scheduler.clone(), tl);
        player.start();
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use vitrine_animation::AnimationScheduler;
    use vitrine_core::VisualStyle;

    struct Fixture {
        stage: Stage,
        scheduler: AnimationScheduler,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                stage: Stage::new(),
                scheduler: AnimationScheduler::new(),
            }
        }

        fn card(&self) -> CardHandles {
            let chrome = page_chrome();
            let mut title_style = VisualStyle::default();
            title_style.text_color = chrome.resting;
            let mut glow_style = VisualStyle::default();
            glow_style.opacity = 0.0;

            CardHandles {
                root: self.stage.insert(VisualStyle::default()),
                title: self.stage.insert(title_style),
                fill_line: self.stage.insert(VisualStyle::default()),
                glow: self.stage.insert(glow_style),
            }
        }

        fn highlight(&self, handles: &CardHandles) -> Timeline {
            let chrome = page_chrome();
            let mut tl = Timeline::with_sink(self.stage.sink());
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
                    .position(StepPosition::AfterPrevious(-300.0)),
            );
            tl.push(
                Step::new(400.0)
                    .target(handles.glow.to_raw())
                    .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
                    .position(StepPosition::AfterPrevious(-300.0)),
            );
            tl
        }

        fn group(&self, count: usize) -> (ExclusiveGroup, Vec<CardHandles>) {
            let mut group = ExclusiveGroup::new(self.scheduler.handle(), self.stage.handle());
            let mut cards = Vec::new();
            for i in 0..count {
                let handles = self.card();
                let highlight = self.highlight(&handles);
                group.insert(format!("card-{i}"), handles, highlight);
                cards.push(handles);
            }
            (group, cards)
        }

        fn settle(&self) {
            // Longest transition is the 700ms highlight reversal
            self.scheduler.tick(400.0);
            self.scheduler.tick(400.0);
            self.scheduler.tick(400.0);
        }
    }

    #[test]
    fn test_at_most_one_active() {
        let fx = Fixture::new();
        let (mut group, _) = fx.group(4);

        assert_eq!(group.active(), None);
        group.activate(Some("card-1"));
        assert_eq!(group.active(), Some("card-1"));

        group.activate(Some("card-3"));
        assert_eq!(group.active(), Some("card-3"));

        group.activate(None);
        assert_eq!(group.active(), None);
    }

    #[test]
    fn test_switch_resets_previous_and_highlights_new() {
        let fx = Fixture::new();
        let (mut group, cards) = fx.group(3);
        let chrome = page_chrome();

        group.activate(Some("card-0"));
        fx.settle();

        // Active card fully highlighted
        assert_eq!(fx.stage.style(cards[0].fill_line).unwrap().fill_width, 1.0);
        assert_eq!(fx.stage.style(cards[0].glow).unwrap().opacity, 1.0);
        assert_eq!(fx.stage.style(cards[0].root).unwrap().opacity, 1.0);

        group.activate(Some("card-2"));
        fx.settle();

        // Previous card fully reset: highlight and fill back at rest
        assert_eq!(fx.stage.style(cards[0].fill_line).unwrap().fill_width, 0.0);
        assert_eq!(fx.stage.style(cards[0].glow).unwrap().opacity, 0.0);
        assert_eq!(
            fx.stage.style(cards[0].title).unwrap().text_color,
            chrome.resting
        );
        // And dimmed like every other non-active sibling
        assert_eq!(fx.stage.style(cards[0].root).unwrap().opacity, 0.5);
        assert_eq!(fx.stage.style(cards[1].root).unwrap().opacity, 0.5);
        assert_eq!(
            fx.stage.style(cards[1].title).unwrap().text_color,
            chrome.dim
        );

        // New card carries the highlight
        assert_eq!(fx.stage.style(cards[2].fill_line).unwrap().fill_width, 1.0);
        assert_eq!(
            fx.stage.style(cards[2].title).unwrap().text_color,
            chrome.accent
        );
        assert_eq!(group.active(), Some("card-2"));
    }

    #[test]
    fn test_reactivation_is_idempotent() {
        let fx = Fixture::new();
        let (mut group, _) = fx.group(2);

        group.activate(Some("card-0"));
        fx.scheduler.tick(200.0);
        let progress = group.highlight_progress("card-0").unwrap();
        assert!(progress > 0.0);

        // Same key again: no restart, no duplicate playback
        group.activate(Some("card-0"));
        assert_eq!(group.highlight_progress("card-0").unwrap(), progress);
        assert_eq!(group.active(), Some("card-0"));
    }

    #[test]
    fn test_rapid_switch_most_recent_wins() {
        let fx = Fixture::new();
        let (mut group, cards) = fx.group(3);

        // Two activations within one frame: the second fully supersedes
        group.activate(Some("card-0"));
        group.activate(Some("card-1"));
        fx.settle();

        assert_eq!(group.active(), Some("card-1"));
        assert_eq!(fx.stage.style(cards[1].fill_line).unwrap().fill_width, 1.0);
        assert_eq!(fx.stage.style(cards[0].fill_line).unwrap().fill_width, 0.0);
        assert_eq!(fx.stage.style(cards[0].root).unwrap().opacity, 0.5);
    }

    #[test]
    fn test_clear_restores_everything() {
        let fx = Fixture::new();
        let (mut group, cards) = fx.group(3);
        let chrome = page_chrome();

        group.activate(Some("card-1"));
        fx.settle();
        group.activate(None);
        fx.settle();

        for handles in &cards {
            assert_eq!(fx.stage.style(handles.root).unwrap().opacity, 1.0);
            assert_eq!(fx.stage.style(handles.fill_line).unwrap().fill_width, 0.0);
            assert_eq!(fx.stage.style(handles.glow).unwrap().opacity, 0.0);
            assert_eq!(
                fx.stage.style(handles.title).unwrap().text_color,
                chrome.resting
            );
        }
        assert_eq!(group.active(), None);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let fx = Fixture::new();
        let (mut group, _) = fx.group(2);

        group.activate(Some("card-0"));
        group.activate(Some("no-such-card"));
        assert_eq!(group.active(), Some("card-0"));
    }
}
