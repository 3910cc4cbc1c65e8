/*!
winsync - client-side window reconciliation for remote window projection

A server streams full window-list snapshots and per-window draw command
batches. winsync keeps one client-side window per presented server window,
buffers (and compacts) draw commands until each window's renderer consumes
them, and keeps the document title and favicon in step with the topmost window.

```ignore
use winsync::{Collaborators, Config, WindowSync};

// Pin to the IDE frame named by the page's `ideWindow` parameter
let config = Config::from_params(query_params)?;
let sync = WindowSync::builder()
    .config(config)
    .build(Collaborators::new(renderers, images, surface));

// Ingest path
sync.process(&snapshot);
sync.draw(window_id, commands);

// Presentation path
sync.on_resized();
sync.redraw_windows();

// Lifecycle events
let mut events = sync.subscribe();
while let Ok(event) = events.recv().await {
    // handle event
}

// Connection closed
sync.on_close();
```
*/

mod backend;
mod buffer;
mod config;
mod core;
#[cfg(test)]
mod testing;

mod types;
pub use types::*;

pub use crate::backend::{ImageCache, PresentationSurface, RendererFactory, WindowRenderer};
pub use crate::buffer::{shrink_by_paint_events, DrawBuffer};
pub use crate::config::{
  Config, ExclusionMode, DEFAULT_ICON, DEFAULT_TITLE, DEFAULT_Z_INDEX_STRIDE, IDE_WINDOW_PARAM,
};
pub use crate::core::{Collaborators, DrawOutcome, WindowSync, WindowSyncBuilder};
