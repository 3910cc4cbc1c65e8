/*!
Configuration for winsync.

All values have sensible defaults. Create a custom config to override:

```
use winsync::Config;

let config = Config {
    selected_window_index: Some(1),
    ..Default::default()
};
assert_eq!(config.z_index_stride, 1000);
```

Or parse it from the page's query parameters:

```
use winsync::Config;

let config = Config::from_params([("ideWindow", "0")])?;
assert_eq!(config.selected_window_index, Some(0));
# Ok::<(), winsync::WinsyncError>(())
```
*/

use crate::types::{WinsyncError, WinsyncResult};

/// Query parameter that pins the client to one IDE frame.
pub const IDE_WINDOW_PARAM: &str = "ideWindow";

/// Title shown when no showing window has one.
pub const DEFAULT_TITLE: &str = "Projector";

/// Icon shown when no showing window has a resolvable one.
pub const DEFAULT_ICON: &str = "pj.png";

/// Gap between the z-indices of adjacent presented windows.
pub const DEFAULT_Z_INDEX_STRIDE: i32 = 1000;

const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1000;

/// How excluded windows are subtracted from a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExclusionMode {
  /// Drop snapshot entries structurally equal to an excluded entry.
  #[default]
  ByValue,
  /// Drop snapshot entries whose id is excluded.
  ById,
}

/// winsync configuration. Fixed for the lifetime of a `WindowSync`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Position, among `IDEA_WINDOW`s sorted by id, of the only one to present.
  /// Default: None (present every window).
  pub selected_window_index: Option<usize>,

  /// Multiplier applied to `z_order - presented_count`.
  /// Default: 1000.
  pub z_index_stride: i32,

  /// Default: "Projector".
  pub default_title: String,

  /// Default: "pj.png".
  pub default_icon: String,

  /// Default: by value.
  pub exclusion_mode: ExclusionMode,

  /// Capacity of the event broadcast channel.
  /// Default: 1000 events.
  pub event_channel_capacity: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      selected_window_index: None,
      z_index_stride: DEFAULT_Z_INDEX_STRIDE,
      default_title: DEFAULT_TITLE.to_string(),
      default_icon: DEFAULT_ICON.to_string(),
      exclusion_mode: ExclusionMode::default(),
      event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
    }
  }
}

impl Config {
  /// Create a new config with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a config from `key=value` parameters, e.g. a page's query string.
  ///
  /// Unknown keys are ignored. A present but malformed `ideWindow` is an error
  /// rather than silently presenting every window.
  pub fn from_params<I, K, V>(params: I) -> WinsyncResult<Self>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut config = Self::default();
    for (key, value) in params {
      if key.as_ref() == IDE_WINDOW_PARAM {
        let index = value
          .as_ref()
          .trim()
          .parse::<usize>()
          .map_err(|e| WinsyncError::InvalidConfig {
            key: IDE_WINDOW_PARAM.to_string(),
            reason: e.to_string(),
          })?;
        config.selected_window_index = Some(index);
      }
    }
    Ok(config)
  }
}
