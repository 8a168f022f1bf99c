//! # Synctypes Extractor
//!
//! Decides which attributes of a backend model are constants, which are
//! choices tuples, and which are ordinary data, and derives canonical names
//! for the generated TypeScript declarations.
//!
//! ## Example
//!
//! ```rust
//! use synctypes_extractor::ModelExtractor;
//! use synctypes_model::{AttrValue, ModelDefinition, Scalar};
//!
//! let model = ModelDefinition::new("Ticket")
//!     .with_attr("STATUS_OPEN", "open")
//!     .with_attr("STATUS_CHOICES", AttrValue::choices([("open", "Open"), ("closed", "Closed")]));
//!
//! let types = ModelExtractor::new().extract(&model);
//! assert_eq!(types.constant("STATUS_OPEN"), Some(&Scalar::from("open")));
//!
//! let members = types.enum_members("StatusEnum").unwrap();
//! assert_eq!(members[0].name, "STATUS_OPEN");
//! assert_eq!(members[1].name, "CLOSED");
//! ```

pub mod extractor;
pub mod naming;

pub use extractor::ModelExtractor;

/// Extract every model in order
pub fn extract_all<'a, M, I>(models: I) -> Vec<synctypes_model::ModelTypes>
where
    M: synctypes_model::HasNamedFields + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let extractor = ModelExtractor::new();
    models.into_iter().map(|model| extractor.extract(model)).collect()
}
