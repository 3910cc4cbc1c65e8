/*!
Core winsync instance - owns window state, the guard, and event broadcasting.

# Module Structure

- `mod.rs` - `WindowSync` struct, construction, guard, events
- `registry/` - `Registry` (window store) and `CachedWindow`
- `reconcile.rs` - `process()` / `on_close()`: snapshot reconciliation and exclusion
- `draw.rs` - `draw()`, `redraw_windows()`, `on_resized()`
- `presentation.rs` - title and icon selection
- `queries.rs` - read-only views of reconciled state

# Locking

One mutex guards the registry and the reconciler state together, so a full
reconciliation pass and a full redraw pass never interleave. The guard is
only held for in-memory work plus renderer calls; image resolution,
presentation and event emission always happen after it is released.

# Example

```
use std::sync::Arc;
use winsync::{
  Collaborators, DrawCommand, IconSource, ImageCache, ImageId, Layout, PresentationSurface,
  RendererFactory, WindowRenderer, WindowSync, CursorType, WindowId,
};

struct Canvas;
impl WindowRenderer for Canvas {
  fn apply_bounds(&mut self, _layout: &Layout) {}
  fn set_cursor(&mut self, _cursor: CursorType) {}
  fn draw(&mut self, commands: &[DrawCommand]) -> usize { commands.len() }
}

struct Canvases;
impl RendererFactory for Canvases {
  fn create(&self, _id: WindowId) -> Box<dyn WindowRenderer> { Box::new(Canvas) }
}

struct NoImages;
impl ImageCache for NoImages {
  fn resolve(&self, _image: &ImageId) -> IconSource { IconSource::None }
}

struct Page;
impl PresentationSurface for Page {
  fn set_document_title(&self, _title: &str) {}
  fn set_favicon(&self, _url: &str) {}
}

let sync = WindowSync::builder()
  .selected_window_index(Some(0))
  .build(Collaborators::new(Arc::new(Canvases), Arc::new(NoImages), Arc::new(Page)));

sync.process(&[]);
assert!(sync.is_empty());
```
*/

mod draw;
mod presentation;
mod queries;
mod reconcile;
mod registry;

pub use draw::DrawOutcome;

pub(crate) use reconcile::ReconcilerState;
pub(crate) use registry::Registry;

use async_broadcast::{InactiveReceiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::backend::{ImageCache, PresentationSurface, RendererFactory};
use crate::config::{Config, ExclusionMode};
use crate::types::Event;

/// External collaborators a `WindowSync` drives.
#[derive(Clone)]
pub struct Collaborators {
  pub(crate) renderers: Arc<dyn RendererFactory>,
  pub(crate) images: Arc<dyn ImageCache>,
  pub(crate) surface: Arc<dyn PresentationSurface>,
}

impl Collaborators {
  /// Bundle the renderer factory, image cache and presentation surface.
  pub fn new(
    renderers: Arc<dyn RendererFactory>,
    images: Arc<dyn ImageCache>,
    surface: Arc<dyn PresentationSurface>,
  ) -> Self {
    Self {
      renderers,
      images,
      surface,
    }
  }
}

impl std::fmt::Debug for Collaborators {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Collaborators").finish_non_exhaustive()
  }
}

/// Everything behind the guard.
pub(crate) struct State {
  pub(crate) registry: Registry,
  pub(crate) reconciler: ReconcilerState,
}

/// Window synchronization core.
///
/// Clone is cheap (Arc bumps) - share one instance between the ingest
/// path and the redraw path.
pub struct WindowSync {
  state: Arc<Mutex<State>>,
  config: Arc<Config>,
  collaborators: Collaborators,
  /// Last title/icon pair sent as `PresentationChanged`.
  presented: Arc<Mutex<Option<(String, String)>>>,
  events_tx: Sender<Event>,
  events_keepalive: InactiveReceiver<Event>,
}

impl Clone for WindowSync {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      config: Arc::clone(&self.config),
      collaborators: self.collaborators.clone(),
      presented: Arc::clone(&self.presented),
      events_tx: self.events_tx.clone(),
      events_keepalive: self.events_keepalive.clone(),
    }
  }
}

impl std::fmt::Debug for WindowSync {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowSync")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

/// Builder for configuring a `WindowSync` instance.
///
/// # Example
///
/// ```ignore
/// let sync = WindowSync::builder()
///     .selected_window_index(Some(1))
///     .z_index_stride(10)
///     .build(collaborators);
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct WindowSyncBuilder {
  config: Config,
}

impl WindowSyncBuilder {
  /// Replace the whole configuration, e.g. one parsed by [`Config::from_params`].
  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Pin the client to the `index`-th IDE frame (by ascending id). Default: None.
  pub const fn selected_window_index(mut self, index: Option<usize>) -> Self {
    self.config.selected_window_index = index;
    self
  }

  /// Set the gap between adjacent z-indices. Default: 1000.
  pub const fn z_index_stride(mut self, stride: i32) -> Self {
    self.config.z_index_stride = stride;
    self
  }

  /// Choose how excluded windows are subtracted. Default: by value.
  pub const fn exclusion_mode(mut self, mode: ExclusionMode) -> Self {
    self.config.exclusion_mode = mode;
    self
  }

  /// Title used when no showing window has one. Default: "Projector".
  pub fn default_title(mut self, title: impl Into<String>) -> Self {
    self.config.default_title = title.into();
    self
  }

  /// Icon URL used when no icon resolves. Default: "pj.png".
  pub fn default_icon(mut self, url: impl Into<String>) -> Self {
    self.config.default_icon = url.into();
    self
  }

  /// Build the instance around its collaborators.
  #[must_use = "WindowSync instance must be stored to receive updates"]
  pub fn build(self, collaborators: Collaborators) -> WindowSync {
    WindowSync::create_with_config(self.config, collaborators)
  }
}

impl WindowSync {
  /// Create a builder for configuring a new instance.
  pub fn builder() -> WindowSyncBuilder {
    WindowSyncBuilder::default()
  }

  fn create_with_config(config: Config, collaborators: Collaborators) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(config.event_channel_capacity.max(1));
    tx.set_overflow(true); // Drop oldest messages when full

    Self {
      state: Arc::new(Mutex::new(State {
        registry: Registry::new(),
        reconciler: ReconcilerState::default(),
      })),
      config: Arc::new(config),
      collaborators,
      presented: Arc::new(Mutex::new(None)),
      events_tx: tx,
      events_keepalive: rx.deactivate(),
    }
  }

  /// Configuration this instance was built with.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Subscribe to events from this instance.
  pub fn subscribe(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Run `f` under the guard. Never call image cache or presentation
  /// functions inside the closure.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
    f(&mut self.state.lock())
  }

  /// Emit events collected under the guard. Call after releasing it.
  pub(crate) fn emit_all(&self, events: impl IntoIterator<Item = Event>) {
    for event in events {
      if let Err(e) = self.events_tx.try_broadcast(event) {
        if e.is_full() {
          log::warn!(
            "Event channel overflow - events are being dropped. \
             Consider increasing event_channel_capacity or processing events faster."
          );
        }
      }
    }
  }
}
