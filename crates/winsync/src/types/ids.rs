/*! Branded ID types for type-safe window and image references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Server-assigned window identifier.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  TS,
  Display,
  From,
  Into,
)]
#[ts(export)]
pub struct WindowId(pub i32);

/// Reference to an image held by the image cache.
///
/// Icons arrive as references only; the pixels are fetched and decoded
/// elsewhere and looked up through [`ImageCache`](crate::ImageCache).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ImageId {
  /// Immutable image identified by its id and content hash.
  Buffered { id: i32, range_hash: i32 },
  /// Offscreen surface that the server may keep drawing into.
  Volatile { id: i64 },
  /// Image of a kind the server could not classify.
  Unknown { class_name: String },
}
