//! Application shell: boot gating, signup counter, form lifecycle, and the
//! simulated playback flag.
//!
//! The shell decides boot-vs-main from a one-time session flag, owns the only
//! shared mutable value in the app (the fanbase counter), and carries the
//! signup form through its submit round-trip. All mutation happens on the
//! event-loop thread; network results arrive as plain values and are applied
//! here, so no locking is involved anywhere.

use std::time::Duration;

use rand::Rng;

use crate::session::SessionStore;
use crate::signup::{SignupError, SignupRequest};

/// Session key gating the boot sequence. Present → skip boot.
pub const BOOT_SEEN_KEY: &str = "dev404-boot-seen";

/// How often the simulated playback flag is redrawn.
pub const PLAYBACK_TOGGLE_INTERVAL: Duration = Duration::from_millis(2000);

/// A redraw turns playback on when `random::<f64>()` exceeds this.
pub const PLAYBACK_ON_THRESHOLD: f64 = 0.7;

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Boot,
    Main,
}

/// Displayed fanbase count with stale-fetch protection.
///
/// Two producers write this value: the one-shot backend fetch and the
/// optimistic post-signup increment. The counter remembers how many signups
/// landed since the fetch was issued and re-applies them on top of the
/// fetched value, so a slow response can never erase a signup.
#[derive(Debug, Default)]
pub struct SignupCounter {
    value: u64,
    since_fetch: u64,
}

impl SignupCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Mark the moment the fetch request goes out.
    pub fn begin_fetch(&mut self) {
        self.since_fetch = 0;
    }

    /// One successful signup: the display bumps by exactly one, whatever the
    /// in-flight fetch later says.
    pub fn record_signup(&mut self) {
        self.value += 1;
        self.since_fetch += 1;
    }

    /// Apply the fetched backend count, preserving signups that landed while
    /// the request was in flight.
    pub fn apply_fetched(&mut self, fetched: u64) {
        self.value = fetched + self.since_fetch;
    }
}

/// The contact-tab signup form.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub email: String,
    pub name: String,
    submitting: bool,
    message: Option<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Start a submit. An empty email short-circuits to `None` — no request
    /// is made — as does a submit while one is already in flight. Otherwise
    /// the previous status message clears and the wire request comes back
    /// (empty name already defaulted).
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.submitting || self.email.is_empty() {
            return None;
        }
        self.submitting = true;
        self.message = None;
        Some(SignupRequest::new(&self.email, &self.name))
    }

    /// Land the submit result. Success clears both inputs, shows the server
    /// message, and bumps the counter; failure maps to its user-visible text
    /// and leaves the inputs untouched for a retry.
    pub fn finish_submit(
        &mut self,
        outcome: Result<String, SignupError>,
        counter: &mut SignupCounter,
    ) {
        self.submitting = false;
        match outcome {
            Ok(message) => {
                self.message = Some(message);
                self.email.clear();
                self.name.clear();
                counter.record_signup();
            }
            Err(e) => {
                self.message = Some(e.user_message());
            }
        }
    }
}

/// Top-level application state.
pub struct Shell {
    store: Box<dyn SessionStore>,
    view: View,
    playing: bool,
    pub counter: SignupCounter,
    pub form: SignupForm,
}

impl Shell {
    /// Start in main view when the session flag is already set, boot otherwise.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let view = if store.get(BOOT_SEEN_KEY).is_some() {
            View::Main
        } else {
            View::Boot
        };
        Self {
            store,
            view,
            playing: false,
            counter: SignupCounter::new(),
            form: SignupForm::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Boot finished: set the session flag and switch to main. The boot
    /// state machine reports completion exactly once, but calling this twice
    /// is harmless anyway.
    pub fn boot_complete(&mut self) {
        self.store.set(BOOT_SEEN_KEY, "true");
        self.view = View::Main;
    }

    /// Whether the visualizer should render as "playing". This flag is
    /// simulated — nothing in the app inspects real audio.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Periodic cosmetic redraw of the playback flag.
    pub fn toggle_playback(&mut self, rng: &mut impl Rng) {
        self.playing = rng.random::<f64>() > PLAYBACK_ON_THRESHOLD;
    }

    /// Opening an album's media pane flips the flag on. Merely loading the
    /// embed counts as "playing" — a non-authoritative signal; the periodic
    /// toggle remains in charge.
    pub fn media_pane_loaded(&mut self) {
        self.playing = true;
    }
}
