//! # Synctypes Writer
//!
//! Renders extracted [`ModelTypes`](synctypes_model::ModelTypes) as TypeScript
//! and persists them idempotently:
//!
//! - `constants.ts`: one frozen object per model with constants
//! - `enums.ts`: one enum per model choices attribute
//! - `index.ts`: re-exports both
//!
//! Files whose rendered content already matches the disk are left alone, so an
//! empty changed list means the output tree is up to date.

mod context;
pub mod error;
pub mod options;
pub mod render;
mod writer;

pub use error::{WriterError, WriterResult};
pub use options::{WriterOptions, DEFAULT_HEADER};
pub use render::TypeScriptRenderer;
pub use writer::TypeScriptWriter;
