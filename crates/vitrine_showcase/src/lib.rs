//! Vitrine Showcase
//!
//! The concrete scenes of a single-page showcase site, expressed entirely
//! through `vitrine_animation` and `vitrine_stage`:
//!
//! - **Splash**: one-time intro with elastic container entrance,
//!   letter-by-letter bounce reveal, hold, and scatter dissolve
//! - **Entrances**: scroll-triggered section and list reveals with
//!   stagger and reverse-on-exit
//! - **Highlight**: project/resume card highlight with fill sweep, accent
//!   title, glow, sibling dimming, and exclusive preview selection
//! - **Nav**: menu entrance and smooth-scroll hand-off
//! - **Content**: the opaque titles, links, and preview URLs the scenes
//!   pass through
//!
//! Every scene records its observers, listeners, and timelines with the
//! owning `SceneScope`, so tearing the view down mid-animation is safe.

pub mod content;
pub mod entrance;
pub mod highlight;
pub mod nav;
pub mod splash;

pub use content::{
    sample_projects, sample_resume, sample_skills, ProjectInfo, ResumeCard, Skill, SkillCategory,
};
pub use entrance::{
    bind_group_entrance, bind_list_entrance, EntranceSpec, SectionEntrance,
};
pub use highlight::{
    bind_card_interaction, build_card_group, highlight_timeline, visible_preview,
};
pub use nav::{NavItem, SectionNav};
pub use splash::{SplashHandles, SplashScene};
