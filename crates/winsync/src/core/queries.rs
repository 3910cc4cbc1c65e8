/*! Read-only views of reconciled state. All of them take the guard briefly. */

use super::registry::CachedWindow;
use super::WindowSync;
use crate::types::{Window, WindowId, WinsyncError, WinsyncResult};

impl WindowSync {
  /// Get a window by ID.
  pub fn window(&self, id: WindowId) -> WinsyncResult<Window> {
    self.write(|s| {
      s.registry
        .get(id)
        .map(CachedWindow::info)
        .ok_or(WinsyncError::WindowNotFound(id))
    })
  }

  /// All windows in ascending id order.
  pub fn windows(&self) -> Vec<Window> {
    self.write(|s| s.registry.windows().map(CachedWindow::info).collect())
  }

  /// Ids hidden by pinning in the last snapshot, ascending.
  pub fn excluded_ids(&self) -> Vec<WindowId> {
    self.write(|s| s.reconciler.excluded_ids())
  }

  /// Whether `id` is hidden by pinning.
  pub fn is_excluded(&self, id: WindowId) -> bool {
    self.write(|s| s.reconciler.is_excluded(id))
  }

  /// Draw commands waiting for the renderer of `id`.
  pub fn pending_commands(&self, id: WindowId) -> WinsyncResult<usize> {
    self.write(|s| {
      s.registry
        .get(id)
        .map(|w| w.draw_events.len())
        .ok_or(WinsyncError::WindowNotFound(id))
    })
  }

  /// Whether `id` is in the registry.
  pub fn contains(&self, id: WindowId) -> bool {
    self.write(|s| s.registry.contains(id))
  }

  /// Number of reconciled windows.
  pub fn len(&self) -> usize {
    self.write(|s| s.registry.len())
  }

  /// Whether no window is reconciled.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
