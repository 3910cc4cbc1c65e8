/*!
Window operations for the Registry.

CRUD: `get_or_create`, `cleanup`
Query: `get`, `get_mut`, `windows`, `window_ids`, `len`
Bulk: `for_each`
*/

use std::collections::HashSet;

use super::{CachedWindow, Registry};
use crate::backend::RendererFactory;
use crate::types::{WindowData, WindowId};

impl Registry {
  /// Get the window for `data.id`, creating it with an empty buffer if absent.
  ///
  /// Fields are left for the caller to update.
  pub(crate) fn get_or_create(
    &mut self,
    data: &WindowData,
    renderers: &dyn RendererFactory,
  ) -> &mut CachedWindow {
    self.windows.entry(data.id).or_insert_with(|| {
      log::debug!("Creating window {}", data.id);
      CachedWindow::new(data.id, renderers.create(data.id))
    })
  }

  /// Get window entry by ID.
  pub(crate) fn get(&self, id: WindowId) -> Option<&CachedWindow> {
    self.windows.get(&id)
  }

  pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut CachedWindow> {
    self.windows.get_mut(&id)
  }

  pub(crate) fn contains(&self, id: WindowId) -> bool {
    self.windows.contains_key(&id)
  }

  /// Iterate over all window entries.
  pub(crate) fn windows(&self) -> impl Iterator<Item = &CachedWindow> {
    self.windows.values()
  }

  /// Iterate over all window IDs.
  pub(crate) fn window_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
    self.windows.keys().copied()
  }

  pub(crate) fn len(&self) -> usize {
    self.windows.len()
  }

  /// Run `f` on every window.
  pub(crate) fn for_each(&mut self, f: impl FnMut(&mut CachedWindow)) {
    self.windows.values_mut().for_each(f);
  }

  /// Remove every window whose id is not in `keep`. Returns the removed ids.
  ///
  /// Pending draw commands of removed windows are discarded, not flushed.
  pub(crate) fn cleanup(&mut self, keep: &HashSet<WindowId>) -> Vec<WindowId> {
    let removed: Vec<WindowId> = self.window_ids().filter(|id| !keep.contains(id)).collect();
    for id in &removed {
      if let Some(window) = self.windows.remove(id) {
        log::debug!(
          "Removing window {id} ({} pending commands dropped)",
          window.draw_events.len()
        );
      }
    }
    removed
  }
}
