/*!
Collaborator traits.

These traits define the contract between the synchronization core and the
environment that actually renders and presents windows. The core never
touches canvases, images or documents directly; it only calls these.

All collaborators are injected through [`WindowSyncBuilder`](crate::WindowSyncBuilder)
so the core can be driven without a real rendering environment.
*/

use crate::types::{CursorType, DrawCommand, IconSource, ImageId, Layout, WindowId};

/// Looks up decoded images by reference.
pub trait ImageCache: Send + Sync {
  /// Resolve an image into something presentable.
  ///
  /// Returns [`IconSource::None`] when the image is unknown, still loading,
  /// or failed to decode.
  fn resolve(&self, image: &ImageId) -> IconSource;
}

/// Renders one window surface. Owned by the registry entry for that window.
///
/// Called with the registry guard held, so implementations must not call
/// back into [`WindowSync`](crate::WindowSync).
pub trait WindowRenderer: Send {
  /// Recompute the surface's on-screen placement from logical bounds.
  fn apply_bounds(&mut self, layout: &Layout);

  /// Change the cursor shown over the surface.
  fn set_cursor(&mut self, cursor: CursorType);

  /// Draw buffered commands in order.
  ///
  /// Returns how many leading commands were consumed. Anything after that
  /// stays buffered and is offered again on the next redraw, e.g. when an
  /// image the next command needs has not loaded yet.
  fn draw(&mut self, commands: &[DrawCommand]) -> usize;
}

/// Creates a renderer for each newly reconciled window.
pub trait RendererFactory: Send + Sync {
  /// Create the renderer for a window seen for the first time.
  fn create(&self, window_id: WindowId) -> Box<dyn WindowRenderer>;
}

/// The page (or host window) that shows the selected title and icon.
pub trait PresentationSurface: Send + Sync {
  /// Show `title` as the page title.
  fn set_document_title(&self, title: &str);

  /// Point the page icon at `url`.
  fn set_favicon(&self, url: &str);
}
