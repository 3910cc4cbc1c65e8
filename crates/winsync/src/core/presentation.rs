/*!
Document title and favicon.

Both come from the topmost showing window (highest `z_order`, first in
snapshot order on ties) that has one, falling back to the configured defaults.
*/

use std::cmp::Reverse;

use super::WindowSync;
use crate::types::{Event, ImageId, WindowData};

/// Showing windows, highest `z_order` first. Stable for equal `z_order`.
fn showing_top_down<'a>(presented: &[&'a WindowData]) -> Vec<&'a WindowData> {
  let mut showing: Vec<&WindowData> = presented.iter().copied().filter(|w| w.is_showing).collect();
  showing.sort_by_key(|w| Reverse(w.z_order));
  showing
}

pub(crate) fn select_title<'a>(presented: &[&'a WindowData]) -> Option<&'a str> {
  showing_top_down(presented)
    .into_iter()
    .find_map(|w| w.title.as_deref())
}

/// First icon of the topmost showing window with a non-empty icon list.
pub(crate) fn select_icon<'a>(presented: &[&'a WindowData]) -> Option<&'a ImageId> {
  showing_top_down(presented)
    .into_iter()
    .find_map(|w| w.icons.as_deref().and_then(<[ImageId]>::first))
}

impl WindowSync {
  /// Push title and favicon to the surface. Emits `PresentationChanged` only when either changed.
  ///
  /// Must be called outside the guard.
  pub(crate) fn present(&self, presented: &[&WindowData]) {
    let title = select_title(presented)
      .unwrap_or(self.config.default_title.as_str())
      .to_string();

    let icon_url = select_icon(presented)
      .and_then(|image| {
        self
          .collaborators
          .images
          .resolve(image)
          .to_presentable_url()
          .map(str::to_string)
      })
      .unwrap_or_else(|| self.config.default_icon.clone());

    let surface = &self.collaborators.surface;
    surface.set_document_title(&title);
    surface.set_favicon(&icon_url);

    let current = (title, icon_url);
    let changed = {
      let mut last = self.presented.lock();
      if last.as_ref() == Some(&current) {
        false
      } else {
        *last = Some(current.clone());
        true
      }
    };

    if changed {
      let (title, icon_url) = current;
      log::debug!("Presentation changed: title={title:?} icon={icon_url:?}");
      self.emit_all([Event::PresentationChanged { title, icon_url }]);
    }
  }
}
