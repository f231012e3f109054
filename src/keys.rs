//! Remote key codes and the platform key-event type.
//!
//! The code values follow the key tables TV browsers expose to
//! applications: the directional and enter keys use the regular DOM
//! codes, everything remote-specific sits in the vendor ranges.

/// Named remote key codes.
///
/// Only a subset participates in the default navigation keymap; the rest
/// exist so unmapped remote keys still show up by name in the dispatch
/// log instead of as bare numbers.
pub mod tv_key {
  pub const KEY_ENTER: u32 = 13;
  pub const KEY_LEFT: u32 = 37;
  pub const KEY_UP: u32 = 38;
  pub const KEY_RIGHT: u32 = 39;
  pub const KEY_DOWN: u32 = 40;

  // Color keys
  pub const KEY_RED: u32 = 403;
  pub const KEY_GREEN: u32 = 404;
  pub const KEY_YELLOW: u32 = 405;
  pub const KEY_BLUE: u32 = 406;

  // Media transport
  pub const KEY_REWIND: u32 = 412;
  pub const KEY_STOP: u32 = 413;
  pub const KEY_PLAY: u32 = 415;
  pub const KEY_FAST_FORWARD: u32 = 417;
  pub const KEY_PAUSE: u32 = 19;

  // Channel / volume rockers
  pub const KEY_CHANNEL_UP: u32 = 427;
  pub const KEY_CHANNEL_DOWN: u32 = 428;
  pub const KEY_VOLUME_UP: u32 = 447;
  pub const KEY_VOLUME_DOWN: u32 = 448;
  pub const KEY_MUTE: u32 = 449;

  // Remote-specific keys
  pub const KEY_REMOTE_ENTER: u32 = 29443;
  pub const KEY_RETURN: u32 = 10009;
  pub const KEY_EXIT: u32 = 10182;
}

/// A key event as delivered by the TV platform.
///
/// Opaque beyond its raw code: any integer is accepted, whether or not a
/// named key or a mapping exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteKeyEvent {
  pub code: u32,
}

impl RemoteKeyEvent {
  pub fn new(code: u32) -> Self {
    Self { code }
  }
}

/// Look up the canonical name of a key code, if it is a known key.
pub fn key_name(code: u32) -> Option<&'static str> {
  use tv_key::*;

  let name = match code {
    KEY_ENTER => "KEY_ENTER",
    KEY_LEFT => "KEY_LEFT",
    KEY_UP => "KEY_UP",
    KEY_RIGHT => "KEY_RIGHT",
    KEY_DOWN => "KEY_DOWN",
    KEY_RED => "KEY_RED",
    KEY_GREEN => "KEY_GREEN",
    KEY_YELLOW => "KEY_YELLOW",
    KEY_BLUE => "KEY_BLUE",
    KEY_REWIND => "KEY_REWIND",
    KEY_STOP => "KEY_STOP",
    KEY_PLAY => "KEY_PLAY",
    KEY_FAST_FORWARD => "KEY_FAST_FORWARD",
    KEY_PAUSE => "KEY_PAUSE",
    KEY_CHANNEL_UP => "KEY_CHANNEL_UP",
    KEY_CHANNEL_DOWN => "KEY_CHANNEL_DOWN",
    KEY_VOLUME_UP => "KEY_VOLUME_UP",
    KEY_VOLUME_DOWN => "KEY_VOLUME_DOWN",
    KEY_MUTE => "KEY_MUTE",
    KEY_REMOTE_ENTER => "KEY_REMOTE_ENTER",
    KEY_RETURN => "KEY_RETURN",
    KEY_EXIT => "KEY_EXIT",
    _ => return None,
  };
  Some(name)
}

/// Translate a terminal key press into the remote key it stands in for.
///
/// The keyboard is the simulator's remote control: arrows are the
/// directional pad, Enter is the enter key, Backspace is RETURN, F1-F4
/// are the color keys, PgUp/PgDn the channel rocker. Keys with no remote
/// counterpart translate to `None` and are never dispatched.
pub fn from_terminal(key: crossterm::event::KeyEvent) -> Option<RemoteKeyEvent> {
  use crossterm::event::KeyCode;
  use tv_key::*;

  let code = match key.code {
    KeyCode::Up => KEY_UP,
    KeyCode::Down => KEY_DOWN,
    KeyCode::Left => KEY_LEFT,
    KeyCode::Right => KEY_RIGHT,
    KeyCode::Enter => KEY_ENTER,
    KeyCode::Backspace => KEY_RETURN,
    KeyCode::Esc => KEY_EXIT,
    KeyCode::F(1) => KEY_RED,
    KeyCode::F(2) => KEY_GREEN,
    KeyCode::F(3) => KEY_YELLOW,
    KeyCode::F(4) => KEY_BLUE,
    KeyCode::PageUp => KEY_CHANNEL_UP,
    KeyCode::PageDown => KEY_CHANNEL_DOWN,
    _ => return None,
  };
  Some(RemoteKeyEvent::new(code))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::{KeyCode, KeyEvent};

  #[test]
  fn test_named_keys_have_names() {
    assert_eq!(key_name(tv_key::KEY_UP), Some("KEY_UP"));
    assert_eq!(key_name(tv_key::KEY_REMOTE_ENTER), Some("KEY_REMOTE_ENTER"));
    assert_eq!(key_name(tv_key::KEY_RETURN), Some("KEY_RETURN"));
  }

  #[test]
  fn test_unknown_code_has_no_name() {
    assert_eq!(key_name(9999), None);
  }

  #[test]
  fn test_arrows_translate_to_directional_pad() {
    let up = from_terminal(KeyEvent::from(KeyCode::Up));
    assert_eq!(up, Some(RemoteKeyEvent::new(tv_key::KEY_UP)));
    let left = from_terminal(KeyEvent::from(KeyCode::Left));
    assert_eq!(left, Some(RemoteKeyEvent::new(tv_key::KEY_LEFT)));
  }

  #[test]
  fn test_enter_and_backspace_translate() {
    let enter = from_terminal(KeyEvent::from(KeyCode::Enter));
    assert_eq!(enter, Some(RemoteKeyEvent::new(tv_key::KEY_ENTER)));
    let back = from_terminal(KeyEvent::from(KeyCode::Backspace));
    assert_eq!(back, Some(RemoteKeyEvent::new(tv_key::KEY_RETURN)));
  }

  #[test]
  fn test_unrelated_terminal_keys_translate_to_none() {
    assert_eq!(from_terminal(KeyEvent::from(KeyCode::Char('x'))), None);
    assert_eq!(from_terminal(KeyEvent::from(KeyCode::Tab)), None);
  }
}
