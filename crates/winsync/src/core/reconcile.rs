/*!
Snapshot reconciliation.

A snapshot is the server's full window list. Reconciling one:

1. picks the excluded windows (single-window pinning, pure)
2. subtracts them to get the presented windows (pure)
3. under the guard: records the exclusion set, removes windows absent from
   the presented set, creates/updates the rest with their derived z-index
4. after the guard: emits lifecycle events and updates the presentation surface
*/

use std::collections::HashSet;

use super::registry::CachedWindow;
use super::WindowSync;
use crate::config::ExclusionMode;
use crate::types::{Event, WindowData, WindowId, WindowType};

/// Reconciler state consulted by `draw()`. Lives behind the same guard as the registry.
#[derive(Debug, Default)]
pub(crate) struct ReconcilerState {
  excluded: HashSet<WindowId>,
}

impl ReconcilerState {
  pub(crate) fn is_excluded(&self, id: WindowId) -> bool {
    self.excluded.contains(&id)
  }

  /// Excluded ids in ascending order.
  pub(crate) fn excluded_ids(&self) -> Vec<WindowId> {
    let mut ids: Vec<WindowId> = self.excluded.iter().copied().collect();
    ids.sort_unstable();
    ids
  }

  /// Replace the exclusion set. Returns whether it changed.
  fn set_excluded(&mut self, excluded: HashSet<WindowId>) -> bool {
    if self.excluded == excluded {
      return false;
    }
    self.excluded = excluded;
    true
  }
}

/// Windows hidden by pinning: every `IDEA_WINDOW` except the `selected`-th by ascending id.
///
/// Nothing is excluded without a selection. A selection past the end excludes
/// every IDE frame.
pub(crate) fn excluded_windows(snapshot: &[WindowData], selected: Option<usize>) -> Vec<&WindowData> {
  let Some(selected) = selected else {
    return Vec::new();
  };

  let mut ide_windows: Vec<&WindowData> = snapshot
    .iter()
    .filter(|w| w.window_type == WindowType::IdeaWindow)
    .collect();
  ide_windows.sort_by_key(|w| w.id);

  ide_windows
    .into_iter()
    .enumerate()
    .filter(|(index, _)| *index != selected)
    .map(|(_, w)| w)
    .collect()
}

/// `snapshot - excluded` with set semantics: first occurrence order, no value duplicates.
///
/// `ByValue` keeps a window whose id is excluded if any field differs from the
/// excluded entry.
pub(crate) fn presented_windows<'a>(
  snapshot: &'a [WindowData],
  excluded: &[&WindowData],
  mode: ExclusionMode,
) -> Vec<&'a WindowData> {
  let excluded_ids: HashSet<WindowId> = excluded.iter().map(|w| w.id).collect();
  let mut presented: Vec<&WindowData> = Vec::with_capacity(snapshot.len());

  for window in snapshot {
    let is_excluded = match mode {
      ExclusionMode::ByValue => excluded.iter().any(|e| *e == window),
      ExclusionMode::ById => excluded_ids.contains(&window.id),
    };
    if is_excluded || presented.iter().any(|p| *p == window) {
      continue;
    }
    presented.push(window);
  }
  presented
}

/// `(z_order - presented_count) * stride`, saturating.
///
/// Presented windows land on negative layers so fixed chrome above zero never collides.
pub(crate) fn z_index_for(z_order: i32, presented_count: usize, stride: i32) -> i32 {
  let count = i32::try_from(presented_count).unwrap_or(i32::MAX);
  z_order.saturating_sub(count).saturating_mul(stride)
}

impl WindowSync {
  /// Reconcile a full window-set snapshot.
  ///
  /// Snapshots must be applied in arrival order; each one replaces the
  /// previous window membership entirely.
  pub fn process(&self, snapshot: &[WindowData]) {
    let excluded = excluded_windows(snapshot, self.config.selected_window_index);
    let presented = presented_windows(snapshot, &excluded, self.config.exclusion_mode);

    let excluded_ids: HashSet<WindowId> = excluded.iter().map(|w| w.id).collect();
    let presented_ids: HashSet<WindowId> = presented.iter().map(|w| w.id).collect();
    let stride = self.config.z_index_stride;
    let renderers = self.collaborators.renderers.as_ref();

    let events = self.write(|s| {
      let mut events = Vec::new();

      if s.reconciler.set_excluded(excluded_ids) {
        let excluded = s.reconciler.excluded_ids();
        log::debug!("Excluded windows changed: {excluded:?}");
        events.push(Event::ExclusionChanged { excluded });
      }

      for window_id in s.registry.cleanup(&presented_ids) {
        events.push(Event::WindowRemoved { window_id });
      }

      for data in &presented {
        let before = s.registry.get(data.id).map(CachedWindow::info);
        let window = s.registry.get_or_create(data, renderers);
        window.update(data, z_index_for(data.z_order, presented.len(), stride));
        let after = window.info();

        match before {
          None => events.push(Event::WindowAdded { window: after }),
          Some(before) if before != after => events.push(Event::WindowChanged { window: after }),
          Some(_) => {}
        }
      }

      events
    });

    self.emit_all(events);
    self.present(&presented);
  }

  /// Tear down every window, e.g. when the connection closes.
  pub fn on_close(&self) {
    self.process(&[]);
  }
}
