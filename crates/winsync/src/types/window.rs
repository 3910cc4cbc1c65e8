/*! Window types: the server's view (`WindowData`) and the client's (`Window`). */

use super::{Bounds, ImageId, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kind of server-side window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum WindowType {
  /// Top-level IDE frame. Only these take part in single-window pinning.
  IdeaWindow,
  Window,
  Popup,
}

/// Mouse cursor shape requested by the server for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CursorType {
  Default,
  Crosshair,
  Text,
  Wait,
  SwResize,
  SeResize,
  NwResize,
  NeResize,
  NResize,
  SResize,
  WResize,
  EResize,
  Hand,
  Move,
  Custom,
}

/// One window entry of a window-set snapshot, as sent by the server.
///
/// Never mutated after receipt. Equality is structural over every field,
/// which is what exclusion by value relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowData {
  pub id: WindowId,
  pub window_type: WindowType,
  pub title: Option<String>,
  pub icons: Option<Vec<ImageId>>,
  pub is_showing: bool,
  pub bounds: Bounds,
  /// Server stacking priority: higher = closer to the viewer.
  pub z_order: i32,
  /// `None` leaves the cursor the window already had.
  pub cursor_type: Option<CursorType>,
}

/// A reconciled client-side window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Window {
  pub id: WindowId,
  pub title: Option<String>,
  pub is_showing: bool,
  pub bounds: Bounds,
  /// Presentation layer derived from `z_order` and the presented-set size.
  pub z_index: i32,
  pub cursor_type: Option<CursorType>,
}

/// What a renderer needs to position a window surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
  pub bounds: Bounds,
  pub z_index: i32,
  pub is_showing: bool,
}
