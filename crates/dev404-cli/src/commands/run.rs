use std::path::PathBuf;
use std::sync::Arc;

use dev404_core::{FileSessionStore, MemorySessionStore, SessionStore, SignupApi};

pub fn run(backend: Option<&str>, state_file: Option<&str>, fresh: bool) {
    // --fresh uses a throwaway store so the boot flag is never found and
    // never persisted.
    let store: Box<dyn SessionStore> = if fresh {
        Box::new(MemorySessionStore::new())
    } else {
        let path = state_file
            .map(PathBuf::from)
            .unwrap_or_else(FileSessionStore::default_path);
        Box::new(FileSessionStore::open(path))
    };

    let api: Arc<dyn SignupApi> = Arc::new(super::make_api(backend));

    let mut app = crate::tui::app::App::new(store, api);
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
