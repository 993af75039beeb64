//! TUI application state and event loop.
//!
//! Design: one thread owns everything. The loop draws, polls keys for 50ms,
//! drains backend results, then advances deadline-based timers (boot reveal,
//! playback toggle). The two REST calls run on short-lived background threads
//! so the UI never blocks; results come home over an mpsc channel and a
//! response that arrives after quit dies with the channel.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use dev404_core::content::ALBUMS;
use dev404_core::shell::PLAYBACK_TOGGLE_INTERVAL;
use dev404_core::{
    BootSequence, BootStep, CatalogBrowser, CatalogMode, SessionStore, Shell, SignupApi,
    SignupError, View, VisualizerFrame,
};

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// The four sections of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Music,
    Videos,
    Bio,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Music, Tab::Videos, Tab::Bio, Tab::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Videos => "Videos",
            Self::Bio => "Bio",
            Self::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Music => 0,
            Self::Videos => 1,
            Self::Bio => 2,
            Self::Contact => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Music => Self::Videos,
            Self::Videos => Self::Bio,
            Self::Bio => Self::Contact,
            Self::Contact => Self::Music,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Music => Self::Contact,
            Self::Videos => Self::Music,
            Self::Bio => Self::Videos,
            Self::Contact => Self::Bio,
        }
    }
}

/// Jump-to-tab digit keys, usable everywhere except the contact form (where
/// digits belong to the inputs).
fn tab_for_digit(c: char) -> Option<Tab> {
    match c {
        '1' => Some(Tab::Music),
        '2' => Some(Tab::Videos),
        '3' => Some(Tab::Bio),
        '4' => Some(Tab::Contact),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Contact form focus
// ---------------------------------------------------------------------------

/// Which signup input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
}

impl FormField {
    pub fn other(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }
}

// ---------------------------------------------------------------------------
// Backend results
// ---------------------------------------------------------------------------

/// What a backend thread reports back to the loop.
enum NetEvent {
    CountFetched(Result<u64, SignupError>),
    SubmitFinished(Result<String, SignupError>),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    shell: Shell,
    boot: BootSequence,
    catalog: CatalogBrowser,
    tab: Tab,
    album_cursor: usize,
    video_cursor: usize,
    focus: FormField,
    frame: VisualizerFrame,
    running: bool,
    count_fetch_started: bool,
    api: Arc<dyn SignupApi>,
    net_tx: Sender<NetEvent>,
    net_rx: Receiver<NetEvent>,
    /// When to reveal the next boot line (or fire completion). `None` once
    /// the boot view is gone — clearing it twice is naturally a no-op.
    next_boot_tick: Option<Instant>,
    next_playback_toggle: Instant,
    rng: rand::rngs::ThreadRng,
}

impl App {
    pub fn new(store: Box<dyn SessionStore>, api: Arc<dyn SignupApi>) -> Self {
        let (net_tx, net_rx) = mpsc::channel();
        let shell = Shell::new(store);
        let boot = BootSequence::new();
        let mut rng = rand::rng();

        let next_boot_tick = match shell.view() {
            View::Boot => boot.next_delay(&mut rng).map(|d| Instant::now() + d),
            View::Main => None,
        };

        Self {
            shell,
            boot,
            catalog: CatalogBrowser::new(),
            tab: Tab::default(),
            album_cursor: 0,
            video_cursor: 0,
            focus: FormField::default(),
            frame: VisualizerFrame::silent(),
            running: true,
            count_fetch_started: false,
            api,
            net_tx,
            net_rx,
            next_boot_tick,
            next_playback_toggle: Instant::now() + PLAYBACK_TOGGLE_INTERVAL,
            rng,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        // Reload within the session: the boot gate already passed, fetch now.
        if self.shell.view() == View::Main {
            self.kick_count_fetch();
        }

        while self.running {
            // One fresh frame per draw pass — the fake spectrum never sits still.
            self.frame = VisualizerFrame::synthesize(&mut self.rng, self.shell.is_playing());
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code, key.modifiers);
            }

            self.drain_net_events();
            self.advance_timers();
        }

        Ok(())
    }

    // --- Timers ---

    fn advance_timers(&mut self) {
        let now = Instant::now();

        if let Some(deadline) = self.next_boot_tick
            && now >= deadline
        {
            let step = self.boot.tick();
            self.next_boot_tick = self.boot.next_delay(&mut self.rng).map(|d| now + d);
            if step == Some(BootStep::Completed) {
                self.shell.boot_complete();
                self.kick_count_fetch();
            }
        }

        if now >= self.next_playback_toggle {
            self.shell.toggle_playback(&mut self.rng);
            self.next_playback_toggle = now + PLAYBACK_TOGGLE_INTERVAL;
        }
    }

    // --- Backend threads ---

    fn kick_count_fetch(&mut self) {
        // One-shot: issued exactly once per run.
        if self.count_fetch_started {
            return;
        }
        self.count_fetch_started = true;
        self.shell.counter.begin_fetch();

        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        thread::spawn(move || {
            // If the UI quit in the meantime the send fails and the result
            // is dropped — never applied to discarded state.
            let _ = tx.send(NetEvent::CountFetched(api.fetch_count()));
        });
    }

    fn kick_submit(&mut self) {
        let Some(request) = self.shell.form.begin_submit() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(NetEvent::SubmitFinished(api.submit(&request)));
        });
    }

    fn drain_net_events(&mut self) {
        while let Ok(net) = self.net_rx.try_recv() {
            match net {
                NetEvent::CountFetched(Ok(count)) => self.shell.counter.apply_fetched(count),
                NetEvent::CountFetched(Err(e)) => {
                    // Non-fatal: keep showing the last-known count.
                    log::warn!("failed to fetch signup count: {e}");
                }
                NetEvent::SubmitFinished(outcome) => {
                    self.shell.form.finish_submit(outcome, &mut self.shell.counter);
                }
            }
        }
    }

    // --- Keys ---

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.shell.view() {
            View::Boot => self.handle_boot_key(code),
            View::Main => self.handle_main_key(code),
        }
    }

    fn handle_boot_key(&mut self, code: KeyCode) {
        // The boot sequence cannot be skipped, only abandoned.
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            self.running = false;
        }
    }

    fn handle_main_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.tab = self.tab.prev(),
            KeyCode::Right => self.tab = self.tab.next(),
            _ => match self.tab {
                Tab::Music => self.handle_music_key(code),
                Tab::Videos => self.handle_videos_key(code),
                Tab::Bio => self.handle_bio_key(code),
                Tab::Contact => self.handle_contact_key(code),
            },
        }
    }

    fn handle_music_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.album_cursor = self.album_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.album_cursor = (self.album_cursor + 1).min(ALBUMS.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Opening the embed pane counts as "playing" — a simulated
                // signal, not audio detection.
                self.shell.media_pane_loaded();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(c) => {
                if let Some(tab) = tab_for_digit(c) {
                    self.tab = tab;
                }
            }
            _ => {}
        }
    }

    fn handle_videos_key(&mut self, code: KeyCode) {
        match self.catalog.mode() {
            CatalogMode::Grid => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.video_cursor = self.video_cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let last = self.catalog.entries().len() - 1;
                    self.video_cursor = (self.video_cursor + 1).min(last);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.catalog.select_at(self.video_cursor);
                    self.video_cursor = 0;
                }
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char(c) => {
                    if let Some(tab) = tab_for_digit(c) {
                        self.tab = tab;
                    }
                }
                _ => {}
            },
            CatalogMode::SinglePlayer => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.video_cursor = self.video_cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let last = self.catalog.others().len().saturating_sub(1);
                    self.video_cursor = (self.video_cursor + 1).min(last);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    // Direct switch: re-point the selection without going
                    // back through the grid.
                    if let Some(entry) = self.catalog.others().get(self.video_cursor).copied() {
                        self.catalog.select(entry.id);
                        self.video_cursor = 0;
                    }
                }
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                    self.catalog.back();
                    self.video_cursor = 0;
                }
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char(c) => {
                    if let Some(tab) = tab_for_digit(c) {
                        self.tab = tab;
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_bio_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(c) => {
                if let Some(tab) = tab_for_digit(c) {
                    self.tab = tab;
                }
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.focus = self.focus.other(),
            KeyCode::Enter => self.kick_submit(),
            KeyCode::Backspace => {
                self.focused_field().pop();
            }
            KeyCode::Esc => self.running = false,
            // Letters and digits all type here — tab switching stays on the
            // arrow keys while the form has focus.
            KeyCode::Char(c) => self.focused_field().push(c),
            _ => {}
        }
    }

    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.shell.form.name,
            FormField::Email => &mut self.shell.form.email,
        }
    }

    // --- Accessors for rendering ---

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn boot(&self) -> &BootSequence {
        &self.boot
    }

    pub fn catalog(&self) -> &CatalogBrowser {
        &self.catalog
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn album_cursor(&self) -> usize {
        self.album_cursor
    }

    pub fn video_cursor(&self) -> usize {
        self.video_cursor
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn frame(&self) -> &VisualizerFrame {
        &self.frame
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use dev404_core::{MemorySessionStore, SignupRequest};

    /// Backend stub that always succeeds with a fixed count.
    struct StubApi;

    impl SignupApi for StubApi {
        fn fetch_count(&self) -> Result<u64, SignupError> {
            Ok(0)
        }
        fn submit(&self, _request: &SignupRequest) -> Result<String, SignupError> {
            Ok("ok".to_string())
        }
    }

    fn fresh_app() -> App {
        App::new(Box::new(MemorySessionStore::new()), Arc::new(StubApi))
    }

    fn app_past_boot() -> App {
        let mut store = MemorySessionStore::new();
        store.set(dev404_core::shell::BOOT_SEEN_KEY, "true");
        App::new(Box::new(store), Arc::new(StubApi))
    }

    #[test]
    fn tab_cycle_is_closed() {
        let mut tab = Tab::Music;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Music);
        for _ in 0..Tab::ALL.len() {
            tab = tab.prev();
        }
        assert_eq!(tab, Tab::Music);
    }

    #[test]
    fn tab_prev_inverts_next() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn tab_digits_map_in_order() {
        assert_eq!(tab_for_digit('1'), Some(Tab::Music));
        assert_eq!(tab_for_digit('2'), Some(Tab::Videos));
        assert_eq!(tab_for_digit('3'), Some(Tab::Bio));
        assert_eq!(tab_for_digit('4'), Some(Tab::Contact));
        assert_eq!(tab_for_digit('5'), None);
        assert_eq!(tab_for_digit('x'), None);
    }

    #[test]
    fn form_field_toggles() {
        assert_eq!(FormField::Name.other(), FormField::Email);
        assert_eq!(FormField::Email.other(), FormField::Name);
    }

    #[test]
    fn fresh_app_starts_in_boot_with_a_scheduled_tick() {
        let app = fresh_app();
        assert_eq!(app.shell().view(), View::Boot);
        assert!(app.next_boot_tick.is_some());
    }

    #[test]
    fn seen_session_starts_in_main_with_no_boot_tick() {
        let app = app_past_boot();
        assert_eq!(app.shell().view(), View::Main);
        assert!(app.next_boot_tick.is_none());
    }

    #[test]
    fn boot_ticks_reveal_and_complete() {
        let mut app = fresh_app();
        let script_len = app.boot.script_len();

        // Force every deadline due and tick through the whole sequence.
        for _ in 0..script_len + 1 {
            app.next_boot_tick = Some(Instant::now());
            app.advance_timers();
        }

        assert_eq!(app.boot.revealed().len(), script_len);
        assert!(app.boot.is_complete());
        assert_eq!(app.shell().view(), View::Main);
        assert!(app.count_fetch_started);
        assert!(app.next_boot_tick.is_none());
    }

    #[test]
    fn count_fetch_is_one_shot() {
        let mut app = app_past_boot();
        app.kick_count_fetch();
        app.kick_count_fetch();
        // Only the first call arms a request; the counter sees one result.
        let first = app.net_rx.recv_timeout(Duration::from_secs(2));
        assert!(first.is_ok());
        let second = app.net_rx.recv_timeout(Duration::from_millis(100));
        assert!(second.is_err(), "second kick must not issue a request");
    }

    #[test]
    fn arrows_switch_tabs() {
        let mut app = app_past_boot();
        app.handle_main_key(KeyCode::Right);
        assert_eq!(app.tab(), Tab::Videos);
        app.handle_main_key(KeyCode::Left);
        assert_eq!(app.tab(), Tab::Music);
        app.handle_main_key(KeyCode::Left);
        assert_eq!(app.tab(), Tab::Contact);
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut app = app_past_boot();
        app.tab = Tab::Contact;

        for c in "Ada".chars() {
            app.handle_main_key(KeyCode::Char(c));
        }
        app.handle_main_key(KeyCode::Tab);
        for c in "a@b.com".chars() {
            app.handle_main_key(KeyCode::Char(c));
        }

        assert_eq!(app.shell().form.name, "Ada");
        assert_eq!(app.shell().form.email, "a@b.com");

        app.handle_main_key(KeyCode::Backspace);
        assert_eq!(app.shell().form.email, "a@b.co");
    }

    #[test]
    fn empty_email_submit_is_a_no_op() {
        let mut app = app_past_boot();
        app.tab = Tab::Contact;
        app.handle_main_key(KeyCode::Enter);
        assert!(!app.shell().form.is_submitting());
    }

    #[test]
    fn submit_with_email_goes_in_flight() {
        let mut app = app_past_boot();
        app.tab = Tab::Contact;
        app.shell.form.email = "a@b.com".to_string();
        app.handle_main_key(KeyCode::Enter);
        assert!(app.shell().form.is_submitting());

        // The stubbed backend answers; draining lands the success.
        let deadline = Instant::now() + Duration::from_secs(2);
        while app.shell().form.is_submitting() && Instant::now() < deadline {
            app.drain_net_events();
        }
        assert!(!app.shell().form.is_submitting());
        assert_eq!(app.shell().form.message(), Some("ok"));
        assert_eq!(app.shell().counter.get(), 1);
    }

    #[test]
    fn video_selection_flow_via_keys() {
        let mut app = app_past_boot();
        app.tab = Tab::Videos;

        app.handle_main_key(KeyCode::Down);
        app.handle_main_key(KeyCode::Enter);
        let selected = app.catalog().selected().expect("entered single player");
        assert_eq!(selected.id, app.catalog().entries()[1].id);

        // Direct switch inside the player.
        app.handle_main_key(KeyCode::Enter);
        let switched = app.catalog().selected().unwrap();
        assert_ne!(switched.id, selected.id);

        app.handle_main_key(KeyCode::Esc);
        assert!(app.catalog().selected().is_none());
        // Esc from the grid quits instead of popping a view.
        app.handle_main_key(KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn opening_an_album_marks_playback() {
        let mut app = app_past_boot();
        app.tab = Tab::Music;
        assert!(!app.shell().is_playing());
        app.handle_main_key(KeyCode::Enter);
        assert!(app.shell().is_playing());
    }

    #[test]
    fn playback_toggle_timer_rearms() {
        let mut app = app_past_boot();
        let before = app.next_playback_toggle;
        app.next_playback_toggle = Instant::now();
        app.advance_timers();
        assert!(app.next_playback_toggle > before);
    }
}
