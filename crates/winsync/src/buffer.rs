/*!
Per-window pending draw buffer with paint-event compaction.

Commands are appended in arrival order and drained from the front as a
renderer consumes them. On every append of a repaint, earlier pending paints
it fully covers are dropped, as long as no barrier command sits between them.

## Invariants

1. Non-paint commands are never dropped and never reordered.
2. Nothing is compacted across a barrier: `segment_start` marks the first
   command after the most recent pending barrier.
3. No pending paint is covered by a later repaint in the same segment.
*/

use crate::types::{CommandClass, DrawCommand};

/// Pending draw commands for one window.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawBuffer {
  commands: Vec<DrawCommand>,
  /// Index of the first command of the open (trailing) compaction segment.
  segment_start: usize,
}

impl DrawBuffer {
  /// Create an empty buffer.
  pub const fn new() -> Self {
    Self {
      commands: Vec::new(),
      segment_start: 0,
    }
  }

  /// Append one command, dropping pending paints it supersedes.
  pub fn push(&mut self, command: DrawCommand) {
    match command.class() {
      CommandClass::Barrier => {
        self.commands.push(command);
        self.segment_start = self.commands.len();
      }
      CommandClass::State => self.commands.push(command),
      CommandClass::Paint => {
        if matches!(command, DrawCommand::Repaint { .. }) {
          let open = self.commands.split_off(self.segment_start);
          self
            .commands
            .extend(open.into_iter().filter(|earlier| !command.supersedes(earlier)));
        }
        self.commands.push(command);
      }
    }
  }

  /// Number of pending commands.
  pub fn len(&self) -> usize {
    self.commands.len()
  }

  /// Whether nothing is pending.
  pub fn is_empty(&self) -> bool {
    self.commands.is_empty()
  }

  /// Pending commands, oldest first.
  pub fn as_slice(&self) -> &[DrawCommand] {
    &self.commands
  }

  /// Remove the first `count` commands after a renderer consumed them.
  pub fn consume(&mut self, count: usize) {
    let count = count.min(self.commands.len());
    self.commands.drain(..count);
    self.segment_start = self.segment_start.saturating_sub(count);
  }

  /// Drop everything without drawing it.
  pub fn clear(&mut self) {
    self.commands.clear();
    self.segment_start = 0;
  }

  /// Take the pending commands out of the buffer.
  pub fn into_vec(self) -> Vec<DrawCommand> {
    self.commands
  }
}

impl Extend<DrawCommand> for DrawBuffer {
  fn extend<I: IntoIterator<Item = DrawCommand>>(&mut self, iter: I) {
    for command in iter {
      self.push(command);
    }
  }
}

impl FromIterator<DrawCommand> for DrawBuffer {
  fn from_iter<I: IntoIterator<Item = DrawCommand>>(iter: I) -> Self {
    let mut buffer = Self::new();
    buffer.extend(iter);
    buffer
  }
}

/// Compact a freshly received command sequence.
///
/// Keeps every non-paint command and the last repaint of each covered region;
/// drops paints a later repaint in the same barrier-free run makes invisible.
pub fn shrink_by_paint_events<I>(commands: I) -> Vec<DrawCommand>
where
  I: IntoIterator<Item = DrawCommand>,
{
  commands.into_iter().collect::<DrawBuffer>().into_vec()
}
