use crate::entities::surface::Raster;

use async_trait::async_trait;
use std::sync::Arc;

pub type Encoder = Arc<dyn PngEncoder>;

/// Turns painted pixels into PNG bytes.
#[async_trait]
pub trait PngEncoder: Send + Sync {
    /// Resolves to `None` when no image could be produced.
    ///
    /// The caller may stop waiting at any point; implementations must not rely on the returned
    /// future being polled to completion.
    async fn encode(&self, raster: Raster) -> Option<Vec<u8>>;
}
