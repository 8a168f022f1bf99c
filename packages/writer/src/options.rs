use std::path::PathBuf;

pub const DEFAULT_HEADER: &str = "Auto-generated by synctypes. Do not edit manually.";

/// Configuration for [`crate::TypeScriptWriter`]
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Directory the generated files are written to
    /// Created, with any missing parents, on the first write
    pub root: PathBuf,

    /// Report intended changes without touching the filesystem
    pub dry_run: bool,

    /// Banner placed in a comment at the top of every generated file
    pub header: String,
}

impl WriterOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}
