/*! Core types for winsync.

Regenerate TypeScript types: `cargo test -p winsync export_bindings`
*/

#![allow(missing_docs)]

mod command;
mod error;
mod event;
mod geometry;
mod ids;
mod image;
mod window;

pub use command::{CommandClass, DrawCommand, PaintOp};
pub use error::{WinsyncError, WinsyncResult};
pub use event::Event;
pub use geometry::Bounds;
pub use ids::{ImageId, WindowId};
pub use image::IconSource;
pub use window::{CursorType, Layout, Window, WindowData, WindowType};
