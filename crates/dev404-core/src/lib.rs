//! # dev404-core
//!
//! **DEV 404 in your terminal.**
//!
//! `dev404-core` is the state-machine library behind the DEV 404 promotional
//! terminal experience: the scripted boot sequence, the fake-reactive audio
//! visualizer, the music video catalog, and the fanbase signup flow backed by
//! a small counting REST API.
//!
//! ## Quick Start
//!
//! ```
//! use dev404_core::{BootSequence, BootStep};
//!
//! let mut boot = BootSequence::new();
//! while let Some(step) = boot.tick() {
//!     if let BootStep::Line(line) = step {
//!         println!("dev404@sonic-architect:~$ {line}");
//!     }
//! }
//! assert!(boot.is_complete());
//! ```
//!
//! ## Architecture
//!
//! Boot gate → Shell (tabs, counter, playback flag) → per-tab components
//!
//! Everything here is a tick-driven state machine: components expose their
//! delay policy as plain [`std::time::Duration`] values and mutate only when
//! the caller ticks them, so the event loop owns every clock and tests never
//! sleep. Randomized behavior (boot jitter, visualizer magnitudes, the
//! simulated playback toggle) takes `&mut impl Rng`, so a seeded generator
//! makes every sequence reproducible.
//!
//! The signup/count backend is an external collaborator reached through the
//! [`SignupApi`] trait; [`HttpSignupApi`] is the blocking REST binding. The
//! browser's session storage becomes a [`SessionStore`] so the one-time boot
//! gate stays injectable.

pub mod boot;
pub mod catalog;
pub mod content;
pub mod session;
pub mod shell;
pub mod signup;
pub mod visualizer;

pub use boot::{BOOT_SCRIPT, BootPhase, BootSequence, BootStep};
pub use catalog::{CatalogBrowser, CatalogMode, VIDEO_LIBRARY, VideoEntry};
pub use content::{ALBUMS, Album, SOCIAL_LINKS, SocialLink};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use shell::{Shell, SignupCounter, SignupForm, View};
pub use signup::{
    DEFAULT_BACKEND_URL, HttpSignupApi, SignupApi, SignupError, SignupRequest,
};
pub use visualizer::{BAR_COUNT, VisualizerFrame};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
