use crate::entities::file::BinaryFile;
use crate::result::PackagingErr;
use crate::use_cases::url::{UrlMinter, Urls};

use anyhow::anyhow;
use std::sync::Arc;

pub fn failing() -> Urls {
    Arc::new(FailingMinter)
}

struct FailingMinter;

impl UrlMinter for FailingMinter {
    fn mint(&self, _file: &BinaryFile) -> Result<String, PackagingErr> {
        Err(PackagingErr::Generic(anyhow!("url registry unavailable")))
    }
}
