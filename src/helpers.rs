use std::path::Path;

pub trait PathRefExt {
    fn str(&self) -> String;
    fn filename(&self) -> String;
}

impl<T: AsRef<Path>> PathRefExt for T {
    fn str(&self) -> String {
        self.as_ref().display().to_string()
    }

    fn filename(&self) -> String {
        self.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
