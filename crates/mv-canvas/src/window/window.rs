//! A single placed embed window

use mv_embed::EmbedDescriptor;
use serde::{Deserialize, Serialize};

use crate::math::Rect;

/// Window identifier, stable for the window's lifetime
pub type WindowId = u64;

/// One placed embed window
///
/// Geometry is the only field mutated after creation, and only by the
/// gesture engine or the container-resize reconciliation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Window ID
    pub id: WindowId,
    /// The resolved embed this window renders
    pub descriptor: EmbedDescriptor,
    /// Workspace-relative geometry in device-independent pixels
    pub rect: Rect,
    /// Z-order value (higher renders on top)
    pub z_order: u32,
    /// A delete was requested and awaits confirmation
    pub confirm_pending: bool,
}

impl Window {
    /// Whether this window must reissue its source after a resize settles
    #[inline]
    pub fn needs_relayout(&self) -> bool {
        self.descriptor.relayout.is_active()
    }
}
