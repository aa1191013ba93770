//! Headless walkthrough of the full showcase page
//!
//! Builds the splash, sections, cards, and navigation against an
//! in-memory stage, then simulates a visit: intro plays out, the page
//! scrolls down, the pointer sweeps across the project rows, and a menu
//! selection hands off to the smooth-scroll provider.
//!
//! Run with: `cargo run -p vitrine_showcase --example portfolio`

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vitrine_animation::AnimationScheduler;
use vitrine_core::{
    event_types, install_page_chrome, page_chrome, Event, PageChrome, PointerCapability, Rect,
    VisualStyle,
};
use vitrine_showcase::{
    bind_card_interaction, bind_group_entrance, bind_list_entrance, build_card_group,
    sample_projects, sample_resume, sample_skills, visible_preview, EntranceSpec, NavItem,
    SectionNav, SplashHandles, SplashScene,
};
use vitrine_stage::{CardHandles, RecordingScroller, SceneScope, Stage, Triggers, Viewport};

const FRAME_MS: f32 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Page chrome is installed once, before any scene reads it
    install_page_chrome(PageChrome::default());
    let chrome = page_chrome();

    let stage = Stage::new();
    let scheduler = AnimationScheduler::new();
    let scope = SceneScope::new();
    let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
    triggers.set_viewport(Viewport::new(1000.0, 0.0));

    // ------------------------------------------------------------------
    // Splash intro
    // ------------------------------------------------------------------
    let splash_scope = SceneScope::new();
    let splash_handles = SplashHandles {
        container: stage.insert_with_id("splash", VisualStyle::default()),
        letters: (0..5)
            .map(|i| stage.insert_with_id(format!("splash-letter-{i}"), VisualStyle::default()))
            .collect(),
        subtitle: stage.insert(VisualStyle::default()),
    };
    let intro_done = Arc::new(AtomicBool::new(false));
    let done = Arc::clone(&intro_done);
    let splash = SplashScene::mount(
        scheduler.handle(),
        &stage.handle(),
        &mut triggers,
        &splash_scope,
        &splash_handles,
        move || done.store(true, Ordering::SeqCst),
    );

    tracing::info!("splash mounted, playing intro");
    while splash.is_playing() {
        scheduler.tick(FRAME_MS);
    }
    assert!(intro_done.load(Ordering::SeqCst));
    splash_scope.dispose();
    stage.remove(splash_handles.container);
    tracing::info!("intro complete, splash unmounted");

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------
    let about = stage.insert_with_id("about", VisualStyle::default());
    stage.set_bounds(about, Rect::new(0.0, 1200.0, 800.0, 500.0));
    let about_children = vec![
        stage.insert(VisualStyle::default()),
        stage.insert(VisualStyle::default()),
    ];
    bind_group_entrance(
        scheduler.handle(),
        &stage.handle(),
        &mut triggers,
        &scope,
        about,
        &about_children,
        EntranceSpec::slide_in(),
        100.0,
    );

    // Skill rows slide in per category, each category its own trigger
    for (index, category) in sample_skills().iter().enumerate() {
        let section = stage.insert_with_id(
            format!("skills-{}", category.title.to_lowercase()),
            VisualStyle::default(),
        );
        stage.set_bounds(section, Rect::new(0.0, 1800.0 + 200.0 * index as f32, 800.0, 180.0));
        let rows: Vec<_> = category
            .skills
            .iter()
            .map(|_| stage.insert(VisualStyle::default()))
            .collect();
        bind_group_entrance(
            scheduler.handle(),
            &stage.handle(),
            &mut triggers,
            &scope,
            section,
            &rows,
            EntranceSpec::slide_in(),
            100.0,
        );
    }

    let projects = sample_projects();
    let cards: Vec<CardHandles> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let mut title_style = VisualStyle::default();
            title_style.text_color = chrome.resting;
            let mut glow_style = VisualStyle::default();
            glow_style.opacity = 0.0;

            let handles = CardHandles {
                root: stage.insert_with_id(format!("project-{}", project.id), VisualStyle::default()),
                title: stage.insert(title_style),
                fill_line: stage.insert(VisualStyle::default()),
                glow: stage.insert(glow_style),
            };
            stage.set_bounds(
                handles.root,
                Rect::new(0.0, 2400.0 + 220.0 * i as f32, 800.0, 160.0),
            );
            handles
        })
        .collect();
    let rows: Vec<_> = cards.iter().map(|c| c.root).collect();
    bind_list_entrance(
        scheduler.handle(),
        &stage.handle(),
        &mut triggers,
        &scope,
        &rows,
        EntranceSpec::rise(),
        200.0,
    );
    let group = Rc::new(RefCell::new(build_card_group(
        scheduler.handle(),
        &stage.handle(),
        projects
            .iter()
            .zip(&cards)
            .map(|(p, h)| (p.id.clone(), *h)),
    )));
    bind_card_interaction(&group, &mut triggers, &scope);

    // Resume cards rise in slower, with a wider delay ramp, and share the
    // same highlight/dim behavior as the project rows
    let resume = sample_resume();
    let resume_cards: Vec<CardHandles> = resume
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let mut title_style = VisualStyle::default();
            title_style.text_color = chrome.resting;
            let mut glow_style = VisualStyle::default();
            glow_style.opacity = 0.0;

            let handles = CardHandles {
                root: stage.insert_with_id(format!("resume-{}", card.id), VisualStyle::default()),
                title: stage.insert(title_style),
                fill_line: stage.insert(VisualStyle::default()),
                glow: stage.insert(glow_style),
            };
            stage.set_bounds(
                handles.root,
                Rect::new(0.0, 3600.0 + 240.0 * i as f32, 800.0, 200.0),
            );
            handles
        })
        .collect();
    let resume_rows: Vec<_> = resume_cards.iter().map(|c| c.root).collect();
    bind_list_entrance(
        scheduler.handle(),
        &stage.handle(),
        &mut triggers,
        &scope,
        &resume_rows,
        EntranceSpec::rise_slow(),
        300.0,
    );
    let resume_group = Rc::new(RefCell::new(build_card_group(
        scheduler.handle(),
        &stage.handle(),
        resume
            .iter()
            .zip(&resume_cards)
            .map(|(c, h)| (c.id.clone(), *h)),
    )));
    bind_card_interaction(&resume_group, &mut triggers, &scope);

    // Navigation hands off to an external smooth scroller
    let scroller = Arc::new(RecordingScroller::new());
    let nav_rows: Vec<NavItem> = [("About Me", about), ("Projects", rows[0])]
        .into_iter()
        .map(|(label, section)| NavItem {
            label: label.to_string(),
            row: stage.insert(VisualStyle::default()),
            section,
        })
        .collect();
    let nav = SectionNav::mount(
        scheduler.handle(),
        &stage.handle(),
        &mut triggers,
        &scope,
        nav_rows,
        scroller.clone(),
    );

    // ------------------------------------------------------------------
    // Simulated visit
    // ------------------------------------------------------------------
    for scroll_y in [400.0, 800.0, 1600.0, 2300.0, 3300.0] {
        triggers.update_scroll(Viewport::new(1000.0, scroll_y));
        for _ in 0..60 {
            scheduler.tick(FRAME_MS);
        }
        tracing::info!(
            scroll_y,
            about_opacity = stage.style(about_children[0]).unwrap().opacity,
            first_row_opacity = stage.style(rows[0]).unwrap().opacity,
            "scrolled"
        );
    }

    for handles in cards.iter().take(3) {
        triggers.dispatch(&Event::new(
            event_types::POINTER_ENTER,
            handles.root.to_raw(),
        ));
        for _ in 0..50 {
            scheduler.tick(FRAME_MS);
        }
        let active = visible_preview(&group.borrow(), &projects).expect("one active preview");
        tracing::info!(
            active = %active.title,
            preview = %active.preview,
            fill = stage.style(handles.fill_line).unwrap().fill_width,
            "hovered project row"
        );
    }

    triggers.dispatch(&Event::new(
        event_types::POINTER_ENTER,
        resume_cards[1].root.to_raw(),
    ));
    for _ in 0..50 {
        scheduler.tick(FRAME_MS);
    }
    tracing::info!(
        active = ?resume_group.borrow().active(),
        fill = stage.style(resume_cards[1].fill_line).unwrap().fill_width,
        "hovered resume card"
    );

    nav.select(0);
    let requests = scroller.take_requests();
    tracing::info!(?requests, "menu selection handed off to smooth scroller");

    // Teardown: everything releases, pending frames become no-ops
    scope.dispose();
    scheduler.tick(1000.0);
    tracing::info!("page torn down cleanly");
}
