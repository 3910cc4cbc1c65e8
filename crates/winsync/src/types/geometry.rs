/*! Geometry types in window-local logical coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rectangle bounds in logical (unscaled) coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Bounds {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Bounds {
  pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }

  pub fn right(&self) -> f64 {
    self.x + self.w
  }

  pub fn bottom(&self) -> f64 {
    self.y + self.h
  }

  /// Check if `other` lies entirely within these bounds (edges inclusive).
  pub fn contains(&self, other: &Bounds) -> bool {
    other.x >= self.x
      && other.y >= self.y
      && other.right() <= self.right()
      && other.bottom() <= self.bottom()
  }
}
