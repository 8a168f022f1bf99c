//! # Synctypes Model
//!
//! Plain data records shared by the extractor and the TypeScript writer.
//!
//! - [`AttrValue`]: the dynamically shaped value of one model attribute
//! - [`Scalar`]: a primitive value that can be written directly as a literal
//! - [`EnumMember`] / [`ModelTypes`]: the extracted constants and enums of one model
//! - [`HasNamedFields`]: the capability a model must expose to be scanned
//!
//! ## Example
//!
//! ```rust
//! use synctypes_model::{AttrValue, HasNamedFields, ModelDefinition};
//!
//! let model = ModelDefinition::new("Ticket")
//!     .with_attr("STATUS_OPEN", AttrValue::from("open"))
//!     .with_attr("PRIORITY_HIGH", AttrValue::Int(1));
//!
//! assert_eq!(model.object_name(), "Ticket");
//! assert_eq!(model.named_fields().len(), 2);
//! ```

pub mod error;
pub mod scalar;
pub mod source;
pub mod types;

pub use error::{ManifestError, ManifestResult};
pub use scalar::{AttrValue, Scalar};
pub use source::{load_manifest, parse_manifest, HasNamedFields, ModelDefinition};
pub use types::{EnumMember, ModelTypes};
