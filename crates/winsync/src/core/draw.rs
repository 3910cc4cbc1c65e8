/*!
Draw routing and redraw.

`draw()` appends a batch to a window's pending buffer (compacting as it goes)
and immediately offers the whole buffer to the renderer. Whatever the
renderer does not consume stays pending until the next `draw()` or
`redraw_windows()`.
*/

use super::registry::CachedWindow;
use super::WindowSync;
use crate::types::{DrawCommand, WindowId, WinsyncError};

/// What happened to a `draw()` batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
  /// Target window is hidden by pinning. Nothing was buffered.
  Excluded,
  /// Target window is not in the registry. Nothing was buffered.
  UnknownWindow,
  /// Batch was empty. Nothing was buffered and the renderer was not called.
  Empty,
  /// Renderer was offered the buffer.
  Drawn {
    /// Commands the renderer consumed.
    consumed: usize,
    /// Commands still pending for this window.
    pending: usize,
  },
}

impl WindowSync {
  /// Route a batch of draw commands to one window.
  ///
  /// Excluded targets are dropped silently. Unknown targets are logged and dropped.
  pub fn draw(
    &self,
    window_id: WindowId,
    commands: impl IntoIterator<Item = DrawCommand>,
  ) -> DrawOutcome {
    self.write(|s| {
      if s.reconciler.is_excluded(window_id) {
        return DrawOutcome::Excluded;
      }

      let Some(window) = s.registry.get_mut(window_id) else {
        log::error!(
          "Skipping nonexistent window: {}",
          WinsyncError::WindowNotFound(window_id)
        );
        return DrawOutcome::UnknownWindow;
      };

      let mut commands = commands.into_iter().peekable();
      if commands.peek().is_none() {
        return DrawOutcome::Empty;
      }
      window.draw_events.extend(commands);

      let consumed = window.draw_buffered_events();
      let pending = window.draw_events.len();
      if pending > 0 {
        log::trace!("Window {window_id}: {pending} commands left pending");
      }
      DrawOutcome::Drawn { consumed, pending }
    })
  }

  /// Offer every window's pending buffer to its renderer, in ascending id order.
  ///
  /// Returns the total number of commands consumed.
  pub fn redraw_windows(&self) -> usize {
    self.write(|s| {
      let mut consumed = 0;
      s.registry.for_each(|window| {
        consumed += window.draw_buffered_events();
      });
      consumed
    })
  }

  /// The viewport changed: re-derive every window's presentation bounds.
  ///
  /// Pending commands stay pending until the next `draw()` or `redraw_windows()`.
  pub fn on_resized(&self) {
    self.write(|s| s.registry.for_each(CachedWindow::apply_bounds));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{harness, ide_window, repaint, window_data};
  use crate::types::{Bounds, PaintOp};

  fn fill(x: f64) -> DrawCommand {
    DrawCommand::Paint {
      region: Bounds::new(x, 0.0, 10.0, 10.0),
      op: PaintOp::FillRect { argb: 0xFF00_00FF },
    }
  }

  mod draw {
    use super::*;

    #[test]
    fn delivers_to_known_window() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      let outcome = h.sync.draw(WindowId(1), vec![fill(0.0), fill(20.0)]);
      assert_eq!(
        outcome,
        DrawOutcome::Drawn {
          consumed: 2,
          pending: 0
        }
      );
      assert_eq!(h.renderers.drawn(WindowId(1)), vec![fill(0.0), fill(20.0)]);
    }

    #[test]
    fn unknown_window_is_dropped() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      assert_eq!(
        h.sync.draw(WindowId(42), vec![repaint()]),
        DrawOutcome::UnknownWindow
      );
      assert_eq!(h.sync.pending_commands(WindowId(1)).ok(), Some(0));
    }

    #[test]
    fn excluded_window_leaves_buffers_untouched() {
      let h = harness(WindowSync::builder().selected_window_index(Some(1)));
      h.sync.process(&[ide_window(5, 0), ide_window(9, 1)]);
      h.renderers.set_draw_limit(Some(0));
      h.sync.draw(WindowId(9), vec![fill(0.0)]);

      assert_eq!(h.sync.draw(WindowId(5), vec![repaint()]), DrawOutcome::Excluded);
      assert_eq!(h.sync.pending_commands(WindowId(9)).ok(), Some(1));
      assert!(h.renderers.drawn(WindowId(5)).is_empty());
    }

    #[test]
    fn empty_batch_on_empty_buffer_skips_renderer() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      assert_eq!(h.sync.draw(WindowId(1), Vec::new()), DrawOutcome::Empty);
    }

    #[test]
    fn empty_batch_does_not_flush_pending_commands() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      h.renderers.set_draw_limit(Some(0));
      h.sync.draw(WindowId(1), vec![repaint()]);
      h.renderers.set_draw_limit(None);

      assert_eq!(h.sync.draw(WindowId(1), Vec::new()), DrawOutcome::Empty);
      assert!(h.renderers.drawn(WindowId(1)).is_empty());
      assert_eq!(h.sync.pending_commands(WindowId(1)).ok(), Some(1));
    }

    #[test]
    fn repaint_compacts_pending_paints() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      h.renderers.set_draw_limit(Some(0));
      h.sync.draw(WindowId(1), vec![fill(0.0), fill(20.0)]);
      assert_eq!(h.sync.pending_commands(WindowId(1)).ok(), Some(2));

      let outcome = h.sync.draw(WindowId(1), vec![repaint()]);
      assert_eq!(
        outcome,
        DrawOutcome::Drawn {
          consumed: 0,
          pending: 1
        }
      );
    }

    #[test]
    fn partial_consumption_keeps_remainder_in_order() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      h.renderers.set_draw_limit(Some(1));

      let outcome = h.sync.draw(WindowId(1), vec![fill(0.0), fill(20.0), fill(40.0)]);
      assert_eq!(
        outcome,
        DrawOutcome::Drawn {
          consumed: 1,
          pending: 2
        }
      );
      assert_eq!(h.renderers.drawn(WindowId(1)), vec![fill(0.0)]);

      h.renderers.set_draw_limit(None);
      assert_eq!(h.sync.redraw_windows(), 2);
      assert_eq!(
        h.renderers.drawn(WindowId(1)),
        vec![fill(0.0), fill(20.0), fill(40.0)]
      );
    }
  }

  mod redraw_windows {
    use super::*;

    #[test]
    fn nothing_pending_draws_nothing() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0), window_data(2, 1)]);
      assert_eq!(h.sync.redraw_windows(), 0);
      assert!(h.renderers.drawn(WindowId(1)).is_empty());
    }

    #[test]
    fn flushes_every_window() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0), window_data(2, 1)]);
      h.renderers.set_draw_limit(Some(0));
      h.sync.draw(WindowId(1), vec![fill(0.0)]);
      h.sync.draw(WindowId(2), vec![fill(0.0), fill(20.0)]);

      h.renderers.set_draw_limit(None);
      assert_eq!(h.sync.redraw_windows(), 3);
      assert_eq!(h.sync.pending_commands(WindowId(2)).ok(), Some(0));
    }
  }

  mod on_resized {
    use super::*;

    #[test]
    fn reapplies_bounds_without_flushing() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0)]);
      h.renderers.set_draw_limit(Some(0));
      h.sync.draw(WindowId(1), vec![fill(0.0)]);
      h.renderers.set_draw_limit(None);

      h.sync.on_resized();
      assert_eq!(h.renderers.layouts(WindowId(1)).len(), 2);
      assert!(h.renderers.drawn(WindowId(1)).is_empty());
      assert_eq!(h.sync.pending_commands(WindowId(1)).ok(), Some(1));

      h.sync.redraw_windows();
      assert_eq!(h.renderers.drawn(WindowId(1)), vec![fill(0.0)]);
    }

    #[test]
    fn empty_registry_is_a_no_op() {
      let h = harness(WindowSync::builder());
      h.sync.on_resized();
      assert!(h.renderers.created().is_empty());
    }
  }

  mod concurrency {
    use super::*;
    use std::thread;

    #[test]
    fn draw_and_process_from_different_threads() {
      let h = harness(WindowSync::builder());
      h.sync.process(&[window_data(1, 0), window_data(2, 1)]);

      let drawer = h.sync.clone();
      let handle = thread::spawn(move || {
        for i in 0..200 {
          drawer.draw(WindowId(1 + i % 2), vec![fill(f64::from(i))]);
          drawer.redraw_windows();
        }
      });
      for i in 0..200 {
        h.sync.process(&[window_data(1, i % 3), window_data(2, 1)]);
      }
      handle.join().unwrap();

      assert_eq!(h.sync.len(), 2);
      assert_eq!(h.renderers.drawn(WindowId(1)).len(), 100);
      assert_eq!(h.renderers.drawn(WindowId(2)).len(), 100);
    }
  }
}
