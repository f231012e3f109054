//! Remote key dispatch: translates one key event into at most one call on
//! the navigation layer.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::keys::{self, tv_key, RemoteKeyEvent};

/// Logical navigation action triggered by a remote key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
  Up,
  Down,
  Left,
  Right,
  Accept,
  Back,
}

impl NavAction {
  /// Parse an action from its config-file name
  pub fn parse(name: &str) -> Option<Self> {
    match name.to_lowercase().as_str() {
      "up" => Some(NavAction::Up),
      "down" => Some(NavAction::Down),
      "left" => Some(NavAction::Left),
      "right" => Some(NavAction::Right),
      "accept" => Some(NavAction::Accept),
      "back" => Some(NavAction::Back),
      _ => None,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      NavAction::Up => "up",
      NavAction::Down => "down",
      NavAction::Left => "left",
      NavAction::Right => "right",
      NavAction::Accept => "accept",
      NavAction::Back => "back",
    }
  }
}

/// Focus-based UI navigation, as seen from the input layer.
///
/// Injected into [`Dispatcher`] at construction so the simulator can plug
/// in the focus grid and tests can substitute a recording double.
pub trait Navigation {
  fn up(&mut self);
  fn down(&mut self);
  fn left(&mut self);
  fn right(&mut self);
  fn accept(&mut self);
  fn back(&mut self);
}

/// Key-code to action table, built once and consulted per event
#[derive(Debug, Clone)]
pub struct KeyMap {
  entries: HashMap<u32, NavAction>,
}

impl Default for KeyMap {
  /// The standard remote mapping: the directional pad moves focus, both
  /// enter variants accept, RETURN goes back.
  fn default() -> Self {
    let mut map = Self {
      entries: HashMap::new(),
    };
    map.insert(tv_key::KEY_UP, NavAction::Up);
    map.insert(tv_key::KEY_DOWN, NavAction::Down);
    map.insert(tv_key::KEY_LEFT, NavAction::Left);
    map.insert(tv_key::KEY_RIGHT, NavAction::Right);
    map.insert(tv_key::KEY_ENTER, NavAction::Accept);
    map.insert(tv_key::KEY_REMOTE_ENTER, NavAction::Accept);
    map.insert(tv_key::KEY_RETURN, NavAction::Back);
    map
  }
}

impl KeyMap {
  /// Add or replace the action for a key code
  pub fn insert(&mut self, code: u32, action: NavAction) {
    self.entries.insert(code, action);
  }

  /// The action mapped to a code, if any
  pub fn lookup(&self, code: u32) -> Option<NavAction> {
    self.entries.get(&code).copied()
  }
}

/// Translates remote key events into navigation calls.
///
/// Stateless beyond the keymap: each event is handled on its own, and an
/// unmapped code is silently ignored rather than treated as an error.
pub struct Dispatcher<N: Navigation> {
  nav: N,
  keymap: KeyMap,
}

impl<N: Navigation> Dispatcher<N> {
  pub fn new(nav: N, keymap: KeyMap) -> Self {
    Self { nav, keymap }
  }

  /// Dispatch a single key event, invoking at most one navigation method.
  pub fn handle(&mut self, event: RemoteKeyEvent) {
    match self.keymap.lookup(event.code) {
      Some(action) => {
        debug!(
          code = event.code,
          key = keys::key_name(event.code).unwrap_or("?"),
          action = action.label(),
          "dispatching remote key"
        );
        self.invoke(action);
      }
      None => trace!(code = event.code, "ignoring unmapped key"),
    }
  }

  fn invoke(&mut self, action: NavAction) {
    match action {
      NavAction::Up => self.nav.up(),
      NavAction::Down => self.nav.down(),
      NavAction::Left => self.nav.left(),
      NavAction::Right => self.nav.right(),
      NavAction::Accept => self.nav.accept(),
      NavAction::Back => self.nav.back(),
    }
  }

  pub fn keymap(&self) -> &KeyMap {
    &self.keymap
  }

  pub fn navigation(&self) -> &N {
    &self.nav
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::keys::tv_key::*;

  /// Records every navigation call in order
  #[derive(Default)]
  struct RecordingNav {
    calls: Vec<NavAction>,
  }

  impl Navigation for RecordingNav {
    fn up(&mut self) {
      self.calls.push(NavAction::Up);
    }
    fn down(&mut self) {
      self.calls.push(NavAction::Down);
    }
    fn left(&mut self) {
      self.calls.push(NavAction::Left);
    }
    fn right(&mut self) {
      self.calls.push(NavAction::Right);
    }
    fn accept(&mut self) {
      self.calls.push(NavAction::Accept);
    }
    fn back(&mut self) {
      self.calls.push(NavAction::Back);
    }
  }

  fn dispatcher() -> Dispatcher<RecordingNav> {
    Dispatcher::new(RecordingNav::default(), KeyMap::default())
  }

  #[test]
  fn test_directional_keys_map_to_directions() {
    let cases = [
      (KEY_UP, NavAction::Up),
      (KEY_DOWN, NavAction::Down),
      (KEY_LEFT, NavAction::Left),
      (KEY_RIGHT, NavAction::Right),
    ];
    for (code, expected) in cases {
      let mut d = dispatcher();
      d.handle(RemoteKeyEvent::new(code));
      assert_eq!(d.navigation().calls, vec![expected]);
    }
  }

  #[test]
  fn test_both_enter_codes_accept() {
    let mut d = dispatcher();
    d.handle(RemoteKeyEvent::new(KEY_ENTER));
    d.handle(RemoteKeyEvent::new(KEY_REMOTE_ENTER));
    assert_eq!(d.navigation().calls, vec![NavAction::Accept, NavAction::Accept]);
  }

  #[test]
  fn test_return_goes_back() {
    let mut d = dispatcher();
    d.handle(RemoteKeyEvent::new(KEY_RETURN));
    assert_eq!(d.navigation().calls, vec![NavAction::Back]);
  }

  #[test]
  fn test_unmapped_codes_are_ignored() {
    let mut d = dispatcher();
    d.handle(RemoteKeyEvent::new(9999));
    d.handle(RemoteKeyEvent::new(KEY_EXIT));
    d.handle(RemoteKeyEvent::new(KEY_VOLUME_UP));
    assert!(d.navigation().calls.is_empty());
  }

  #[test]
  fn test_at_most_one_call_per_event() {
    let mut d = dispatcher();
    d.handle(RemoteKeyEvent::new(KEY_ENTER));
    assert_eq!(d.navigation().calls.len(), 1);
  }

  #[test]
  fn test_repeat_dispatch_carries_no_state() {
    let mut d = dispatcher();
    let event = RemoteKeyEvent::new(KEY_DOWN);
    d.handle(event);
    d.handle(event);
    assert_eq!(d.navigation().calls, vec![NavAction::Down, NavAction::Down]);
  }

  #[test]
  fn test_keymap_override_replaces_default() {
    let mut keymap = KeyMap::default();
    keymap.insert(KEY_RETURN, NavAction::Accept);
    let mut d = Dispatcher::new(RecordingNav::default(), keymap);
    d.handle(RemoteKeyEvent::new(KEY_RETURN));
    assert_eq!(d.navigation().calls, vec![NavAction::Accept]);
  }

  #[test]
  fn test_keymap_override_extends_default() {
    let mut keymap = KeyMap::default();
    keymap.insert(KEY_RED, NavAction::Back);
    let mut d = Dispatcher::new(RecordingNav::default(), keymap);
    d.handle(RemoteKeyEvent::new(KEY_RED));
    d.handle(RemoteKeyEvent::new(KEY_UP));
    assert_eq!(d.navigation().calls, vec![NavAction::Back, NavAction::Up]);
  }

  #[test]
  fn test_action_names_parse() {
    assert_eq!(NavAction::parse("accept"), Some(NavAction::Accept));
    assert_eq!(NavAction::parse("Back"), Some(NavAction::Back));
    assert_eq!(NavAction::parse("select"), None);
  }
}
