//! Conversions between the naming conventions of backend models and generated
//! TypeScript declarations.

use synctypes_model::Scalar;

/// Attribute suffixes that mark a choices attribute
pub const CHOICES_SUFFIXES: [&str; 2] = ["_CHOICES", "_TYPES"];

/// Suffix appended to every derived enum name
pub const ENUM_SUFFIX: &str = "Enum";

/// Prefix of member names synthesized from numeric values
pub const NUMERIC_MEMBER_PREFIX: &str = "VALUE_";

/// Whether `name` follows the constant convention: `[A-Z0-9_]` only, with at
/// least one underscore. A bare `STATUS` does not qualify.
pub fn is_constant_name(name: &str) -> bool {
    !name.is_empty()
        && name.contains('_')
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Whether `name` carries one of the choices suffixes (case-sensitive)
pub fn is_choices_attr(name: &str) -> bool {
    CHOICES_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// `USER_TYPE_CHOICES` -> `UserTypeEnum`
pub fn to_enum_name(attr_name: &str) -> String {
    let upper = attr_name.to_ascii_uppercase();
    let stem = CHOICES_SUFFIXES
        .iter()
        .find(|suffix| upper.ends_with(*suffix))
        .map(|suffix| &attr_name[..attr_name.len() - suffix.len()])
        .unwrap_or(attr_name);

    let mut name: String = stem.split('_').map(capitalize).collect();
    name.push_str(ENUM_SUFFIX);
    name
}

/// Member name for a choice value that has no matching sibling constant
///
/// Strings are uppercased with every run of whitespace or hyphens collapsed to
/// one underscore. Numbers become `VALUE_<n>`; negative numbers use `NEG_` in
/// place of the sign and fractional digits are joined with `_`.
pub fn value_to_name(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => {
            let mut name = String::with_capacity(s.len());
            let mut in_separator = false;

            for c in s.chars() {
                if c.is_whitespace() || c == '-' {
                    if !in_separator {
                        name.push('_');
                        in_separator = true;
                    }
                } else {
                    name.extend(c.to_uppercase());
                    in_separator = false;
                }
            }

            name
        }
        Scalar::Int(_) | Scalar::Float(_) => {
            let text = value.to_string();
            let digits = match text.strip_prefix('-') {
                Some(abs) => format!("NEG_{}", abs),
                None => text,
            };
            format!("{}{}", NUMERIC_MEMBER_PREFIX, digits.replace('.', "_"))
        }
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
