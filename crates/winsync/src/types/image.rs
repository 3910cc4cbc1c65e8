/*! Presentable image sources resolved by the image cache. */

/// Image resolved from the cache, tagged by how it can be presented.
///
/// The cache decides the variant once; callers only ask for a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
  /// Pixels rendered into an offscreen canvas, exported as a `data:` URL.
  Canvas { data_url: String },
  /// Decoded image element, presented by its source URL.
  Image { src: String },
  /// Not cached, still loading, or failed to decode.
  None,
}

impl IconSource {
  /// URL that a presentation surface can load, if there is one.
  pub fn to_presentable_url(&self) -> Option<&str> {
    match self {
      Self::Canvas { data_url } => Some(data_url),
      Self::Image { src } => Some(src),
      Self::None => None,
    }
  }
}
