/*!
Drawing commands addressed to a single window surface.

Every command belongs to one [`CommandClass`], which decides how it behaves
under compaction (see [`DrawBuffer`](crate::DrawBuffer)):

- paint commands produce pixels and may be dropped once a later repaint covers them
- state commands (origin moves) are kept but transparent to compaction
- barrier commands change what a later repaint covers (clip, alpha) or have
  effects beyond pixels; kept, and nothing is compacted across them
*/

use super::{Bounds, CursorType, ImageId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pixel-producing operation of a [`DrawCommand::Paint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum PaintOp {
  /// Fill the region with a packed ARGB color.
  FillRect { argb: u32 },
  /// Draw a cached image scaled into the region.
  DrawImage { image: ImageId },
  /// Draw a run of text with its top-left corner at the region origin.
  DrawText { text: String },
}

/// A single buffered drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum DrawCommand {
  /// Repaint the whole of `region` from scratch.
  Repaint { region: Bounds },
  /// Partial paint inside `region`.
  Paint { region: Bounds, op: PaintOp },
  /// Move the drawing origin.
  Translate { dx: f64, dy: f64 },
  /// Restrict later paints to `clip`, or lift the restriction.
  SetClip { clip: Option<Bounds> },
  /// Set the opacity used by later paints.
  SetAlpha { alpha: f64 },
  /// Resize the backing surface.
  Resize { width: f64, height: f64 },
  /// Change the cursor shown over the surface.
  SetCursor { cursor: CursorType },
  /// Copy already-drawn pixels from `source` by `(dx, dy)`.
  CopyArea { source: Bounds, dx: f64, dy: f64 },
}

/// Compaction class of a [`DrawCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
  Paint,
  State,
  Barrier,
}

impl DrawCommand {
  pub const fn class(&self) -> CommandClass {
    match self {
      Self::Repaint { .. } | Self::Paint { .. } => CommandClass::Paint,
      Self::Translate { .. } => CommandClass::State,
      // A clipped or translucent repaint does not cover what lies under it.
      // CopyArea reads pixels earlier paints produced, so it pins them.
      Self::SetClip { .. }
      | Self::SetAlpha { .. }
      | Self::Resize { .. }
      | Self::SetCursor { .. }
      | Self::CopyArea { .. } => CommandClass::Barrier,
    }
  }

  /// Region a paint command draws into. `None` for non-paint commands.
  pub const fn paint_region(&self) -> Option<&Bounds> {
    match self {
      Self::Repaint { region } | Self::Paint { region, .. } => Some(region),
      Self::Translate { .. }
      | Self::SetClip { .. }
      | Self::SetAlpha { .. }
      | Self::Resize { .. }
      | Self::SetCursor { .. }
      | Self::CopyArea { .. } => None,
    }
  }

  /// Check if this command makes `earlier` redundant.
  ///
  /// Only a repaint supersedes, and only paints whose region it fully covers.
  pub fn supersedes(&self, earlier: &DrawCommand) -> bool {
    let Self::Repaint { region } = self else {
      return false;
    };
    earlier
      .paint_region()
      .is_some_and(|covered| region.contains(covered))
  }
}
