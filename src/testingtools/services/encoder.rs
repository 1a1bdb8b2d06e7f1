use crate::entities::surface::Raster;
use crate::use_cases::encoder::{Encoder, PngEncoder};

use async_trait::async_trait;
use futures::future;
use std::sync::Arc;

/// Encoder which never signals completion.
pub fn pending() -> Encoder {
    Arc::new(PendingEncoder)
}

struct PendingEncoder;

#[async_trait]
impl PngEncoder for PendingEncoder {
    async fn encode(&self, _raster: Raster) -> Option<Vec<u8>> {
        future::pending().await
    }
}

/// Encoder which completes without producing an image.
pub fn empty() -> Encoder {
    Arc::new(EmptyEncoder)
}

struct EmptyEncoder;

#[async_trait]
impl PngEncoder for EmptyEncoder {
    async fn encode(&self, _raster: Raster) -> Option<Vec<u8>> {
        None
    }
}
