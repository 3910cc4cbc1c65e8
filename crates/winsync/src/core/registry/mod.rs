/*!
Registry - the single owner of client-side window state.

The registry itself holds no lock. Every access goes through the guard in
[`WindowSync`](crate::WindowSync), which also owns the reconciler state.

## Module Structure

- `mod.rs` - `CachedWindow` (per-window state + renderer) and `Registry`
- `windows.rs` - get-or-create, lookup, iteration, cleanup
*/

mod windows;

use std::collections::BTreeMap;

use crate::backend::WindowRenderer;
use crate::buffer::DrawBuffer;
use crate::types::{Bounds, CursorType, Layout, Window, WindowData, WindowId};

/// Per-window state.
pub(crate) struct CachedWindow {
  pub(crate) id: WindowId,
  pub(crate) title: Option<String>,
  pub(crate) is_showing: bool,
  pub(crate) bounds: Bounds,
  pub(crate) z_index: i32,
  pub(crate) cursor_type: Option<CursorType>,
  /// Commands not yet consumed by the renderer.
  pub(crate) draw_events: DrawBuffer,
  renderer: Box<dyn WindowRenderer>,
  /// Layout last pushed to the renderer. None until the first push.
  applied_layout: Option<Layout>,
}

impl CachedWindow {
  pub(crate) fn new(id: WindowId, renderer: Box<dyn WindowRenderer>) -> Self {
    Self {
      id,
      title: None,
      is_showing: false,
      bounds: Bounds::default(),
      z_index: 0,
      cursor_type: None,
      draw_events: DrawBuffer::new(),
      renderer,
      applied_layout: None,
    }
  }

  pub(crate) const fn layout(&self) -> Layout {
    Layout {
      bounds: self.bounds,
      z_index: self.z_index,
      is_showing: self.is_showing,
    }
  }

  /// Public view of this window.
  pub(crate) fn info(&self) -> Window {
    Window {
      id: self.id,
      title: self.title.clone(),
      is_showing: self.is_showing,
      bounds: self.bounds,
      z_index: self.z_index,
      cursor_type: self.cursor_type,
    }
  }

  /// Apply one snapshot entry. Cursor type is only replaced when provided.
  ///
  /// Pushes layout and cursor to the renderer when they changed.
  pub(crate) fn update(&mut self, data: &WindowData, z_index: i32) {
    if let Some(cursor) = data.cursor_type {
      if self.cursor_type != Some(cursor) {
        self.renderer.set_cursor(cursor);
      }
      self.cursor_type = Some(cursor);
    }
    self.title.clone_from(&data.title);
    self.is_showing = data.is_showing;
    self.bounds = data.bounds;
    self.z_index = z_index;

    if self.applied_layout != Some(self.layout()) {
      self.apply_bounds();
    }
  }

  /// Recompute presentation bounds from the stored logical bounds.
  pub(crate) fn apply_bounds(&mut self) {
    let layout = self.layout();
    self.renderer.apply_bounds(&layout);
    self.applied_layout = Some(layout);
  }

  /// Offer every pending command to the renderer. Returns how many it consumed.
  pub(crate) fn draw_buffered_events(&mut self) -> usize {
    if self.draw_events.is_empty() {
      return 0;
    }
    let consumed = self
      .renderer
      .draw(self.draw_events.as_slice())
      .min(self.draw_events.len());
    self.draw_events.consume(consumed);
    consumed
  }
}

/// Window store keyed by id. Iteration order is ascending id.
pub(crate) struct Registry {
  pub(super) windows: BTreeMap<WindowId, CachedWindow>,
}

impl Registry {
  pub(crate) const fn new() -> Self {
    Self {
      windows: BTreeMap::new(),
    }
  }
}
