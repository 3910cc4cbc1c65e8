/*! Events emitted when reconciled state changes. */

use super::{Window, WindowId};
use serde::Serialize;
use ts_rs::TS;

/// Events emitted when state changes.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  // Window lifecycle (from snapshots)
  #[serde(rename = "window:added")]
  WindowAdded { window: Window },
  #[serde(rename = "window:changed")]
  WindowChanged { window: Window },
  #[serde(rename = "window:removed")]
  WindowRemoved { window_id: WindowId },

  /// Windows hidden by single-window pinning, sorted by id.
  #[serde(rename = "exclusion:changed")]
  ExclusionChanged { excluded: Vec<WindowId> },

  /// Title or icon selected for the presentation surface changed.
  #[serde(rename = "presentation:changed")]
  PresentationChanged { title: String, icon_url: String },
}
