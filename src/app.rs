use crate::config::Config;
use crate::dispatch::{Dispatcher, KeyMap, NavAction};
use crate::event::{Event, EventHandler};
use crate::focus::FocusGrid;
use crate::keys::{self, RemoteKeyEvent};
use crate::ui;
use chrono::{DateTime, Local};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
  disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::collections::VecDeque;
use std::io::stdout;
use std::time::Duration;
use tracing::info;

/// One line in the dispatch log panel
pub struct DispatchRecord {
  pub at: DateTime<Local>,
  pub code: u32,
  pub key: Option<&'static str>,
  /// None means the code fell through unmapped
  pub action: Option<NavAction>,
}

/// Oldest records are dropped past this point
const DISPATCH_LOG_CAP: usize = 64;

/// Main application state
pub struct App {
  /// Application configuration
  config: Config,

  /// Remote input layer driving the focus grid
  dispatcher: Dispatcher<FocusGrid>,

  /// Recent dispatches, oldest first
  log: VecDeque<DispatchRecord>,

  /// Whether to quit
  should_quit: bool,
}

impl App {
  pub fn new(config: Config) -> Result<Self> {
    let mut keymap = KeyMap::default();
    for (code, action) in config.keymap_overrides()? {
      keymap.insert(code, action);
    }

    let grid = FocusGrid::new(config.grid.rows, config.grid.cols, config.grid.labels.clone());

    Ok(Self {
      config,
      dispatcher: Dispatcher::new(grid, keymap),
      log: VecDeque::new(),
      should_quit: false,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Create event handler
    let mut events = EventHandler::new(Duration::from_millis(250));

    info!(
      rows = self.grid().rows(),
      cols = self.grid().cols(),
      "simulator started"
    );

    // Main loop
    while !self.should_quit {
      // Draw UI
      terminal.draw(|frame| ui::draw(frame, self))?;

      // Handle events
      if let Some(event) = events.next().await {
        self.handle_event(event);
      }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
  }

  fn handle_event(&mut self, event: Event) {
    match event {
      Event::Key(key) => self.handle_key(key),
      Event::Tick => {} // UI refresh happens automatically
    }
  }

  fn handle_key(&mut self, key: KeyEvent) {
    // Simulator chrome: quitting belongs to the terminal, not the remote
    match key.code {
      KeyCode::Char('q') => {
        self.should_quit = true;
        return;
      }
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.should_quit = true;
        return;
      }
      _ => {}
    }

    if let Some(remote) = keys::from_terminal(key) {
      self.dispatch(remote);
    }
  }

  fn dispatch(&mut self, event: RemoteKeyEvent) {
    let action = self.dispatcher.keymap().lookup(event.code);
    self.dispatcher.handle(event);
    self.push_record(event, action);
  }

  fn push_record(&mut self, event: RemoteKeyEvent, action: Option<NavAction>) {
    self.log.push_back(DispatchRecord {
      at: Local::now(),
      code: event.code,
      key: keys::key_name(event.code),
      action,
    });
    while self.log.len() > DISPATCH_LOG_CAP {
      self.log.pop_front();
    }
  }

  // Accessors for UI rendering
  pub fn title(&self) -> &str {
    self.config.title.as_deref().unwrap_or("tvnav")
  }

  pub fn grid(&self) -> &FocusGrid {
    self.dispatcher.navigation()
  }

  pub fn dispatch_log(&self) -> impl DoubleEndedIterator<Item = &DispatchRecord> {
    self.log.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::keys::tv_key::*;

  fn app() -> App {
    App::new(Config::default()).unwrap()
  }

  #[test]
  fn test_remote_keys_move_focus() {
    let mut app = app();
    app.dispatch(RemoteKeyEvent::new(KEY_RIGHT));
    app.dispatch(RemoteKeyEvent::new(KEY_DOWN));
    assert_eq!(app.grid().focused(), (1, 1));
  }

  #[test]
  fn test_unmapped_key_is_logged_but_not_dispatched() {
    let mut app = app();
    app.dispatch(RemoteKeyEvent::new(9999));
    assert_eq!(app.grid().focused(), (0, 0));

    let record = app.dispatch_log().next_back().unwrap();
    assert_eq!(record.code, 9999);
    assert!(record.action.is_none());
    assert!(record.key.is_none());
  }

  #[test]
  fn test_dispatch_log_is_bounded() {
    let mut app = app();
    for _ in 0..(DISPATCH_LOG_CAP + 10) {
      app.dispatch(RemoteKeyEvent::new(KEY_UP));
    }
    assert_eq!(app.dispatch_log().count(), DISPATCH_LOG_CAP);
  }

  #[test]
  fn test_config_override_reaches_dispatcher() {
    let yaml = "keymap:\n  10182: back\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let mut app = App::new(config).unwrap();

    app.dispatch(RemoteKeyEvent::new(KEY_ENTER));
    assert_eq!(app.grid().breadcrumb().len(), 1);

    // KEY_EXIT remapped to back pops the activation
    app.dispatch(RemoteKeyEvent::new(KEY_EXIT));
    assert!(app.grid().breadcrumb().is_empty());
  }

  #[test]
  fn test_quit_keys_do_not_reach_the_remote() {
    let mut app = app();
    app.handle_key(KeyEvent::from(KeyCode::Char('q')));
    assert!(app.should_quit);
    assert_eq!(app.dispatch_log().count(), 0);
  }
}
