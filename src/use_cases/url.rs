use crate::entities::file::BinaryFile;
use crate::result::PackagingErr;

use std::sync::Arc;

pub type Urls = Arc<dyn UrlMinter>;

/// Mints a displayable URL for a file held in memory.
pub trait UrlMinter: Send + Sync {
    fn mint(&self, file: &BinaryFile) -> Result<String, PackagingErr>;
}
