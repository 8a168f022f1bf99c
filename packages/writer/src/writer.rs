use crate::error::{WriterError, WriterResult};
use crate::options::WriterOptions;
use crate::render::{TypeScriptRenderer, CONSTANTS_MODULE, ENUMS_MODULE, INDEX_MODULE};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use synctypes_model::ModelTypes;

/// Persists rendered TypeScript under a root directory, touching only files
/// whose content differs from what is already on disk
///
/// Every path written (or, in dry-run mode, every path that would have been
/// written) is appended to [`TypeScriptWriter::changed`]. The list is never
/// cleared; build a new writer to start over.
pub struct TypeScriptWriter {
    options: WriterOptions,
    renderer: TypeScriptRenderer,
    changed: Vec<PathBuf>,
}

impl TypeScriptWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(WriterOptions::new(root))
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            renderer: TypeScriptRenderer::new(options.header.clone()),
            options,
            changed: vec![],
        }
    }

    pub fn root(&self) -> &Path {
        &self.options.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run
    }

    /// Absolute paths changed (or that would change) so far, in write order
    pub fn changed(&self) -> &[PathBuf] {
        &self.changed
    }

    /// Write the constants, enums and index files, in that order
    ///
    /// Returns the accumulated changed paths. Stops at the first I/O failure.
    pub fn write_all(&mut self, models: &[ModelTypes]) -> WriterResult<Vec<PathBuf>> {
        self.write_constants(models)?;
        self.write_enums(models)?;
        self.write_index()?;
        Ok(self.changed.clone())
    }

    pub fn write_constants(&mut self, models: &[ModelTypes]) -> WriterResult<()> {
        let content = self.renderer.render_constants(models);
        self.write_file(module_file(CONSTANTS_MODULE), &content)
    }

    pub fn write_enums(&mut self, models: &[ModelTypes]) -> WriterResult<()> {
        let content = self.renderer.render_enums(models);
        self.write_file(module_file(ENUMS_MODULE), &content)
    }

    pub fn write_index(&mut self) -> WriterResult<()> {
        let content = self.renderer.render_index();
        self.write_file(module_file(INDEX_MODULE), &content)
    }

    /// Write `content` to `relative_path` under the root unless it is already
    /// there byte-for-byte
    ///
    /// Missing parent directories are created. In dry-run mode nothing is
    /// created or written, but a differing path is still recorded.
    pub fn write_file(&mut self, relative_path: impl AsRef<Path>, content: &str) -> WriterResult<()> {
        let joined = self.options.root.join(relative_path);
        let path = std::path::absolute(&joined).map_err(|source| WriterError::Resolve {
            path: joined.clone(),
            source,
        })?;

        if read_existing(&path)?.as_deref() == Some(content.as_bytes()) {
            tracing::debug!("Unchanged: {}", path.display());
            return Ok(());
        }

        if self.options.dry_run {
            tracing::info!("Would write: {}", path.display());
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| WriterError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            fs::write(&path, content).map_err(|source| WriterError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!("Wrote: {}", path.display());
        }

        self.changed.push(path);
        Ok(())
    }
}

fn module_file(module: &str) -> String {
    format!("{}.ts", module)
}

/// Current content of `path`, or `None` when the file does not exist yet
fn read_existing(path: &Path) -> WriterResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(WriterError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
