/*! Recording fakes for the collaborator traits, shared by unit tests. */

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::{ImageCache, PresentationSurface, RendererFactory, WindowRenderer};
use crate::core::{Collaborators, WindowSync, WindowSyncBuilder};
use crate::types::{
  Bounds, CursorType, DrawCommand, IconSource, ImageId, Layout, WindowData, WindowId, WindowType,
};

/// A showing `WINDOW` with no title, icons or cursor.
pub(crate) fn window_data(id: i32, z_order: i32) -> WindowData {
  WindowData {
    id: WindowId(id),
    window_type: WindowType::Window,
    title: None,
    icons: None,
    is_showing: true,
    bounds: Bounds::new(0.0, 0.0, 640.0, 480.0),
    z_order,
    cursor_type: None,
  }
}

pub(crate) fn ide_window(id: i32, z_order: i32) -> WindowData {
  WindowData {
    window_type: WindowType::IdeaWindow,
    ..window_data(id, z_order)
  }
}

pub(crate) fn repaint() -> DrawCommand {
  DrawCommand::Repaint {
    region: Bounds::new(0.0, 0.0, 640.0, 480.0),
  }
}

#[derive(Default)]
struct RenderLog {
  created: Vec<WindowId>,
  layouts: HashMap<WindowId, Vec<Layout>>,
  cursors: HashMap<WindowId, Vec<CursorType>>,
  drawn: HashMap<WindowId, Vec<DrawCommand>>,
  /// Max commands each `draw` call consumes. None = all.
  draw_limit: Option<usize>,
}

/// Renderer factory whose renderers record every call into one shared log.
#[derive(Clone, Default)]
pub(crate) struct RecordingRenderers {
  log: Arc<Mutex<RenderLog>>,
}

impl RecordingRenderers {
  pub(crate) fn created(&self) -> Vec<WindowId> {
    self.log.lock().created.clone()
  }

  pub(crate) fn layouts(&self, id: WindowId) -> Vec<Layout> {
    self.log.lock().layouts.get(&id).cloned().unwrap_or_default()
  }

  pub(crate) fn cursors(&self, id: WindowId) -> Vec<CursorType> {
    self.log.lock().cursors.get(&id).cloned().unwrap_or_default()
  }

  pub(crate) fn drawn(&self, id: WindowId) -> Vec<DrawCommand> {
    self.log.lock().drawn.get(&id).cloned().unwrap_or_default()
  }

  /// Make every renderer stall after `limit` commands per draw call.
  pub(crate) fn set_draw_limit(&self, limit: Option<usize>) {
    self.log.lock().draw_limit = limit;
  }
}

impl RendererFactory for RecordingRenderers {
  fn create(&self, window_id: WindowId) -> Box<dyn WindowRenderer> {
    self.log.lock().created.push(window_id);
    Box::new(RecordingRenderer {
      id: window_id,
      log: Arc::clone(&self.log),
    })
  }
}

struct RecordingRenderer {
  id: WindowId,
  log: Arc<Mutex<RenderLog>>,
}

impl WindowRenderer for RecordingRenderer {
  fn apply_bounds(&mut self, layout: &Layout) {
    self.log.lock().layouts.entry(self.id).or_default().push(*layout);
  }

  fn set_cursor(&mut self, cursor: CursorType) {
    self.log.lock().cursors.entry(self.id).or_default().push(cursor);
  }

  fn draw(&mut self, commands: &[DrawCommand]) -> usize {
    let mut log = self.log.lock();
    let count = log.draw_limit.map_or(commands.len(), |limit| limit.min(commands.len()));
    let consumed = commands.iter().take(count).cloned();
    log.drawn.entry(self.id).or_default().extend(consumed);
    count
  }
}

/// Image cache backed by a fixed map. Unknown images resolve to `None`.
#[derive(Default)]
pub(crate) struct MapImageCache {
  images: HashMap<ImageId, IconSource>,
}

impl MapImageCache {
  pub(crate) fn with(mut self, image: ImageId, source: IconSource) -> Self {
    self.images.insert(image, source);
    self
  }
}

impl ImageCache for MapImageCache {
  fn resolve(&self, image: &ImageId) -> IconSource {
    self.images.get(image).cloned().unwrap_or(IconSource::None)
  }
}

/// Presentation surface that records titles and favicons in call order.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
  titles: Arc<Mutex<Vec<String>>>,
  favicons: Arc<Mutex<Vec<String>>>,
}

impl RecordingSurface {
  pub(crate) fn titles(&self) -> Vec<String> {
    self.titles.lock().clone()
  }

  pub(crate) fn favicons(&self) -> Vec<String> {
    self.favicons.lock().clone()
  }

  pub(crate) fn last_title(&self) -> Option<String> {
    self.titles.lock().last().cloned()
  }

  pub(crate) fn last_favicon(&self) -> Option<String> {
    self.favicons.lock().last().cloned()
  }
}

impl PresentationSurface for RecordingSurface {
  fn set_document_title(&self, title: &str) {
    self.titles.lock().push(title.to_string());
  }

  fn set_favicon(&self, url: &str) {
    self.favicons.lock().push(url.to_string());
  }
}

/// A `WindowSync` wired to recording fakes.
pub(crate) struct Harness {
  pub(crate) sync: WindowSync,
  pub(crate) renderers: RecordingRenderers,
  pub(crate) surface: RecordingSurface,
}

pub(crate) fn harness(builder: WindowSyncBuilder) -> Harness {
  harness_with_images(builder, MapImageCache::default())
}

pub(crate) fn harness_with_images(builder: WindowSyncBuilder, images: MapImageCache) -> Harness {
  let renderers = RecordingRenderers::default();
  let surface = RecordingSurface::default();
  let sync = builder.build(Collaborators::new(
    Arc::new(renderers.clone()),
    Arc::new(images),
    Arc::new(surface.clone()),
  ));
  Harness {
    sync,
    renderers,
    surface,
  }
}
