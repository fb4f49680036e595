//! Label feedback for copy-code buttons.
//!
//! A button shows its idle label, switches to a success or failure label when
//! a copy settles, and reverts after a delay. Each settle hands out a
//! [`RevertToken`]; only the token from the latest settle can revert, so an
//! older timer firing late never cuts a newer label short.

use crate::config::CopyLabels;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyLabel {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyLabel {
    pub fn text(self, labels: &CopyLabels) -> &str {
        match self {
            CopyLabel::Idle => &labels.idle,
            CopyLabel::Copied => &labels.success,
            CopyLabel::Failed => &labels.failure,
        }
    }
}

/// Ticket for one scheduled revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertToken(u64);

#[derive(Debug, Default)]
pub struct CopyFeedback {
    label: CopyLabel,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> CopyLabel {
        self.label
    }

    /// The clipboard accepted the text.
    pub fn succeed(&mut self) -> RevertToken {
        self.settle(CopyLabel::Copied)
    }

    /// The clipboard rejected the write.
    pub fn fail(&mut self) -> RevertToken {
        self.settle(CopyLabel::Failed)
    }

    fn settle(&mut self, label: CopyLabel) -> RevertToken {
        self.generation = self.generation.wrapping_add(1);
        self.label = label;
        RevertToken(self.generation)
    }

    /// Returns to the idle label if `token` is still the latest one.
    ///
    /// Returns `true` when the label changed.
    pub fn revert(&mut self, token: RevertToken) -> bool {
        if token.0 != self.generation || self.label == CopyLabel::Idle {
            return false;
        }
        self.label = CopyLabel::Idle;
        true
    }

    pub fn is_pending_revert(&self) -> bool {
        self.label != CopyLabel::Idle
    }
}
