use crate::entities::file::BinaryFile;
use crate::result::PackagingErr;
use crate::use_cases::url::UrlMinter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Mints self-contained `data:` URLs, so the image can be displayed without any server.
#[derive(Debug)]
pub struct DataUrlMinter;

impl UrlMinter for DataUrlMinter {
    fn mint(&self, file: &BinaryFile) -> Result<String, PackagingErr> {
        let bytes = file
            .memory()
            .ok_or_else(|| PackagingErr::NotInMemory(file.name().to_string()))?;
        Ok(format!(
            "data:{};base64,{}",
            file.content_type(),
            STANDARD.encode(bytes)
        ))
    }
}
