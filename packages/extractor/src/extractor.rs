use crate::naming;
use synctypes_model::{AttrValue, EnumMember, HasNamedFields, ModelTypes, Scalar};

/// Classifies model attributes into constants and choices-derived enums
///
/// Extraction is total: attributes that match neither shape are skipped, never
/// reported as errors, so a batch over many unvetted models cannot abort.
#[derive(Debug, Clone, Default)]
pub struct ModelExtractor;

impl ModelExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the constants and enums declared on `model`
    pub fn extract<M: HasNamedFields + ?Sized>(&self, model: &M) -> ModelTypes {
        let fields: Vec<(&str, &AttrValue)> = model
            .named_fields()
            .into_iter()
            .filter(|(name, value)| !name.starts_with('_') && !value.is_class())
            .collect();

        // Member names are borrowed from constants declared anywhere on the model
        let siblings: Vec<(&str, Scalar)> = fields
            .iter()
            .filter(|(name, value)| self.is_constant(name, value))
            .filter_map(|(name, value)| value.as_scalar().map(|scalar| (*name, scalar)))
            .collect();

        let mut types = ModelTypes::new(model.object_name());

        for (name, value) in fields {
            if naming::is_choices_attr(name) && self.is_choices_tuple(value) {
                let enum_name = self.to_enum_name(name);
                let members = self.enum_members(value, &siblings);
                tracing::debug!(
                    "[{}] {} -> {} ({} members)",
                    types.model_name,
                    name,
                    enum_name,
                    members.len()
                );
                types.insert_enum(enum_name, members);
            } else if self.is_constant(name, value) {
                if let Some(scalar) = value.as_scalar() {
                    types.insert_constant(name.to_string(), scalar);
                }
            } else {
                tracing::trace!("[{}] skipping attribute {}", types.model_name, name);
            }
        }

        types
    }

    /// Upper-snake name with an underscore, holding a string, integer or float
    pub fn is_constant(&self, name: &str, value: &AttrValue) -> bool {
        naming::is_constant_name(name)
            && matches!(
                value,
                AttrValue::Str(_) | AttrValue::Int(_) | AttrValue::Float(_)
            )
    }

    /// Non-empty tuple or list of `(string | integer, string)` pairs
    ///
    /// The check is structural: tuples and lists are accepted interchangeably
    /// at both levels.
    pub fn is_choices_tuple(&self, value: &AttrValue) -> bool {
        match value.as_sequence() {
            Some(items) if !items.is_empty() => items.iter().all(|item| choice_pair(item).is_some()),
            _ => false,
        }
    }

    pub fn to_enum_name(&self, attr_name: &str) -> String {
        naming::to_enum_name(attr_name)
    }

    pub fn value_to_name(&self, value: &Scalar) -> String {
        naming::value_to_name(value)
    }

    fn enum_members(&self, choices: &AttrValue, siblings: &[(&str, Scalar)]) -> Vec<EnumMember> {
        let mut members: Vec<EnumMember> = Vec::new();

        for (value, label) in choices
            .as_sequence()
            .unwrap_or_default()
            .iter()
            .filter_map(choice_pair)
        {
            // First declared constant wins when several share the value
            let base = siblings
                .iter()
                .find(|(_, constant)| *constant == value)
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| self.value_to_name(&value));

            let name = unique_name(base, &members);
            members.push(EnumMember {
                name,
                value,
                label: label.to_string(),
            });
        }

        members
    }
}

/// `base`, or `base_2`, `base_3`, ... when earlier members already use it
fn unique_name(base: String, members: &[EnumMember]) -> String {
    let taken = |candidate: &str| members.iter().any(|m| m.name == candidate);
    if !taken(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Split one choices entry into its value and label
fn choice_pair(item: &AttrValue) -> Option<(Scalar, &str)> {
    match item.as_sequence()? {
        [value, AttrValue::Str(label)] => match value {
            AttrValue::Str(s) => Some((Scalar::String(s.clone()), label.as_str())),
            AttrValue::Int(n) => Some((Scalar::Int(*n), label.as_str())),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synctypes_model::ModelDefinition;

    fn mock_model() -> ModelDefinition {
        ModelDefinition::new("MockModel")
            .with_attr("STATUS_ACTIVE", "active")
            .with_attr("STATUS_INACTIVE", "inactive")
            .with_attr("STATUS_PENDING", "pending")
            .with_attr("PRIORITY_HIGH", 1)
            .with_attr("PRIORITY_LOW", 2)
            .with_attr(
                "STATUS_CHOICES",
                AttrValue::choices([
                    ("active", "Active"),
                    ("inactive", "Inactive"),
                    ("pending", "Pending"),
                ]),
            )
            .with_attr(
                "PRIORITY_CHOICES",
                AttrValue::choices([(1, "High Priority"), (2, "Low Priority")]),
            )
            .with_attr("_meta", AttrValue::Class("_meta".to_string()))
    }

    fn pair(value: impl Into<AttrValue>, label: impl Into<AttrValue>) -> AttrValue {
        AttrValue::Tuple(vec![value.into(), label.into()])
    }

    #[test]
    fn test_is_constant_valid() {
        let extractor = ModelExtractor::new();
        assert!(extractor.is_constant("STATUS_ACTIVE", &AttrValue::from("active")));
        assert!(extractor.is_constant("PRIORITY_HIGH", &AttrValue::Int(1)));
        assert!(extractor.is_constant("RATE_LIMIT", &AttrValue::Float(1.5)));
    }

    #[test]
    fn test_is_constant_lowercase_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_constant("status_active", &AttrValue::from("active")));
    }

    #[test]
    fn test_is_constant_no_underscore_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_constant("STATUS", &AttrValue::from("active")));
        assert!(!extractor.is_constant("STATUS", &AttrValue::Int(1)));
        assert!(!extractor.is_constant("STATUS", &AttrValue::Float(1.0)));
    }

    #[test]
    fn test_is_constant_non_primitive_rejected() {
        let extractor = ModelExtractor::new();
        let list = AttrValue::List(vec![AttrValue::from("a"), AttrValue::from("b")]);
        let tuple = AttrValue::Tuple(vec![AttrValue::from("a")]);
        let map = AttrValue::Map(vec![(AttrValue::from("a"), AttrValue::Int(1))]);

        assert!(!extractor.is_constant("STATUS_LIST", &list));
        assert!(!extractor.is_constant("STATUS_TUPLE", &tuple));
        assert!(!extractor.is_constant("STATUS_MAP", &map));
        assert!(!extractor.is_constant("STATUS_FLAG", &AttrValue::Bool(true)));
        assert!(!extractor.is_constant("STATUS_NONE", &AttrValue::None));
    }

    #[test]
    fn test_is_choices_tuple_valid_strings() {
        let extractor = ModelExtractor::new();
        let choices = AttrValue::choices([("active", "Active"), ("inactive", "Inactive")]);
        assert!(extractor.is_choices_tuple(&choices));
    }

    #[test]
    fn test_is_choices_tuple_valid_ints() {
        let extractor = ModelExtractor::new();
        let choices = AttrValue::choices([(1, "High"), (2, "Low")]);
        assert!(extractor.is_choices_tuple(&choices));
    }

    #[test]
    fn test_is_choices_tuple_list_format() {
        let extractor = ModelExtractor::new();
        let choices = AttrValue::List(vec![
            AttrValue::List(vec!["active".into(), "Active".into()]),
            AttrValue::List(vec!["inactive".into(), "Inactive".into()]),
        ]);
        assert!(extractor.is_choices_tuple(&choices));
    }

    #[test]
    fn test_is_choices_tuple_mixed_shapes() {
        let extractor = ModelExtractor::new();
        let choices = AttrValue::Tuple(vec![
            AttrValue::List(vec!["a".into(), "A".into()]),
            pair("b", "B"),
        ]);
        assert!(extractor.is_choices_tuple(&choices));
    }

    #[test]
    fn test_is_choices_tuple_empty_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_choices_tuple(&AttrValue::Tuple(vec![])));
        assert!(!extractor.is_choices_tuple(&AttrValue::List(vec![])));
    }

    #[test]
    fn test_is_choices_tuple_non_sequence_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_choices_tuple(&AttrValue::from("string")));
        assert!(!extractor.is_choices_tuple(&AttrValue::Int(123)));
        assert!(!extractor.is_choices_tuple(&AttrValue::None));
        assert!(!extractor.is_choices_tuple(&AttrValue::Map(vec![(
            AttrValue::from("a"),
            AttrValue::from("A")
        )])));
    }

    #[test]
    fn test_is_choices_tuple_wrong_inner_length_rejected() {
        let extractor = ModelExtractor::new();
        let triple = AttrValue::Tuple(vec![AttrValue::Tuple(vec![
            "a".into(),
            "b".into(),
            "c".into(),
        ])]);
        let single = AttrValue::Tuple(vec![AttrValue::Tuple(vec!["a".into()])]);

        assert!(!extractor.is_choices_tuple(&triple));
        assert!(!extractor.is_choices_tuple(&single));
    }

    #[test]
    fn test_is_choices_tuple_non_string_label_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_choices_tuple(&AttrValue::Tuple(vec![pair(1, 2)])));
    }

    #[test]
    fn test_is_choices_tuple_invalid_value_rejected() {
        let extractor = ModelExtractor::new();
        assert!(!extractor.is_choices_tuple(&AttrValue::Tuple(vec![pair(1.5, "Half")])));
        assert!(!extractor.is_choices_tuple(&AttrValue::Tuple(vec![pair(true, "Yes")])));
        assert!(!extractor.is_choices_tuple(&AttrValue::Tuple(vec![pair(AttrValue::None, "None")])));
    }

    #[test]
    fn test_is_choices_tuple_one_bad_element_rejects_all() {
        let extractor = ModelExtractor::new();
        let choices = AttrValue::Tuple(vec![pair("a", "A"), AttrValue::from("b")]);
        assert!(!extractor.is_choices_tuple(&choices));
    }

    #[test]
    fn test_extract_string_constants() {
        let result = ModelExtractor::new().extract(&mock_model());
        assert_eq!(result.model_name, "MockModel");
        assert_eq!(result.constant("STATUS_ACTIVE"), Some(&Scalar::from("active")));
        assert_eq!(result.constant("STATUS_INACTIVE"), Some(&Scalar::from("inactive")));
    }

    #[test]
    fn test_extract_int_constants() {
        let result = ModelExtractor::new().extract(&mock_model());
        assert_eq!(result.constant("PRIORITY_HIGH"), Some(&Scalar::Int(1)));
        assert_eq!(result.constant("PRIORITY_LOW"), Some(&Scalar::Int(2)));
    }

    #[test]
    fn test_extract_preserves_declaration_order() {
        let result = ModelExtractor::new().extract(&mock_model());
        let names: Vec<&str> = result.constants.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "STATUS_ACTIVE",
                "STATUS_INACTIVE",
                "STATUS_PENDING",
                "PRIORITY_HIGH",
                "PRIORITY_LOW"
            ]
        );

        let enums: Vec<&str> = result.enums.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(enums, vec!["StatusEnum", "PriorityEnum"]);
    }

    #[test]
    fn test_extract_enums() {
        let result = ModelExtractor::new().extract(&mock_model());
        assert!(result.enum_members("StatusEnum").is_some());
        assert!(result.enum_members("PriorityEnum").is_some());
        assert!(result.constant("STATUS_CHOICES").is_none());
    }

    #[test]
    fn test_extract_enum_members_use_constant_names() {
        let result = ModelExtractor::new().extract(&mock_model());
        let members = result.enum_members("StatusEnum").unwrap();

        assert_eq!(
            members[0],
            EnumMember::new("STATUS_ACTIVE", "active", "Active")
        );
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["STATUS_ACTIVE", "STATUS_INACTIVE", "STATUS_PENDING"]);

        let priority = result.enum_members("PriorityEnum").unwrap();
        assert_eq!(priority[0], EnumMember::new("PRIORITY_HIGH", 1, "High Priority"));
        assert_eq!(priority[1], EnumMember::new("PRIORITY_LOW", 2, "Low Priority"));
    }

    #[test]
    fn test_extract_synthesizes_missing_member_names() {
        let model = ModelDefinition::new("Task")
            .with_attr("STATE_OPEN", "open")
            .with_attr(
                "STATE_CHOICES",
                AttrValue::choices([("open", "Open"), ("in-progress", "In progress")]),
            )
            .with_attr("LEVEL_TYPES", AttrValue::choices([(3, "Three")]));

        let result = ModelExtractor::new().extract(&model);
        let names: Vec<&str> = result
            .enum_members("StateEnum")
            .unwrap()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["STATE_OPEN", "IN_PROGRESS"]);
        assert_eq!(result.enum_members("LevelEnum").unwrap()[0].name, "VALUE_3");
    }

    #[test]
    fn test_extract_colliding_member_names_get_suffixes() {
        let model = ModelDefinition::new("Task")
            .with_attr("STATE_OPEN", "open")
            .with_attr(
                "STATE_CHOICES",
                AttrValue::choices([
                    ("in progress", "A"),
                    ("in-progress", "B"),
                    ("in_progress_2", "C"),
                    ("open", "Open"),
                    ("open", "Open again"),
                ]),
            );

        let result = ModelExtractor::new().extract(&model);
        let names: Vec<&str> = result
            .enum_members("StateEnum")
            .unwrap()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "IN_PROGRESS",
                "IN_PROGRESS_2",
                "IN_PROGRESS_2_2",
                "STATE_OPEN",
                "STATE_OPEN_2"
            ]
        );
    }

    #[test]
    fn test_extract_sibling_declared_after_choices() {
        let model = ModelDefinition::new("Task")
            .with_attr("KIND_CHOICES", AttrValue::choices([("bug", "Bug")]))
            .with_attr("KIND_BUG", "bug");

        let result = ModelExtractor::new().extract(&model);
        assert_eq!(result.enum_members("KindEnum").unwrap()[0].name, "KIND_BUG");
    }

    #[test]
    fn test_extract_duplicate_values_first_declared_wins() {
        let model = ModelDefinition::new("Task")
            .with_attr("STATE_DONE", "done")
            .with_attr("LEGACY_DONE", "done")
            .with_attr("STATE_CHOICES", AttrValue::choices([("done", "Done")]));

        let result = ModelExtractor::new().extract(&model);
        assert_eq!(result.enum_members("StateEnum").unwrap()[0].name, "STATE_DONE");
    }

    #[test]
    fn test_extract_string_and_int_values_do_not_match() {
        let model = ModelDefinition::new("Task")
            .with_attr("LEVEL_ONE", "1")
            .with_attr("LEVEL_CHOICES", AttrValue::choices([(1, "One")]));

        let result = ModelExtractor::new().extract(&model);
        assert_eq!(result.enum_members("LevelEnum").unwrap()[0].name, "VALUE_1");
    }

    #[test]
    fn test_extract_invalid_choices_fall_through() {
        let model = ModelDefinition::new("Task")
            .with_attr("EMPTY_CHOICES", AttrValue::Tuple(vec![]))
            .with_attr("NAME_CHOICES", "not a tuple")
            .with_attr("LIST_TYPES", AttrValue::List(vec![AttrValue::Int(1)]));

        let result = ModelExtractor::new().extract(&model);
        assert!(result.enums.is_empty());
        // A scalar with a choices suffix still satisfies the constant rule
        assert_eq!(result.constant("NAME_CHOICES"), Some(&Scalar::from("not a tuple")));
        assert!(result.constant("EMPTY_CHOICES").is_none());
        assert!(result.constant("LIST_TYPES").is_none());
    }

    #[test]
    fn test_extract_skips_private_and_nested_classes() {
        let model = ModelDefinition::new("Task")
            .with_attr("_STATUS_HIDDEN", "hidden")
            .with_attr("_STATUS_CHOICES", AttrValue::choices([("a", "A")]))
            .with_attr("META_CLASS", AttrValue::Class("Meta".to_string()));

        let result = ModelExtractor::new().extract(&model);
        assert!(!result.has_content());
    }

    #[test]
    fn test_extract_later_choices_replace_same_enum() {
        let model = ModelDefinition::new("Task")
            .with_attr("STATUS_CHOICES", AttrValue::choices([("a", "A")]))
            .with_attr("SIZE_CHOICES", AttrValue::choices([("s", "Small")]))
            .with_attr("STATUS_TYPES", AttrValue::choices([("b", "B")]));

        let result = ModelExtractor::new().extract(&model);
        assert_eq!(result.enums.len(), 2);
        assert_eq!(result.enums[0].0, "StatusEnum");
        assert_eq!(result.enums[0].1[0].value, Scalar::from("b"));
    }

    #[test]
    fn test_extract_empty_model() {
        let model = ModelDefinition::new("EmptyModel")
            .with_attr("regular_attribute", "not a constant")
            .with_attr("_meta", AttrValue::Class("_meta".to_string()));

        let result = ModelExtractor::new().extract(&model);
        assert_eq!(result.model_name, "EmptyModel");
        assert!(result.constants.is_empty());
        assert!(result.enums.is_empty());
        assert!(!result.has_content());
    }

    #[test]
    fn test_to_enum_name_and_value_to_name() {
        let extractor = ModelExtractor::new();
        assert_eq!(extractor.to_enum_name("USER_TYPE_CHOICES"), "UserTypeEnum");
        assert_eq!(extractor.value_to_name(&Scalar::from("some value")), "SOME_VALUE");
        assert_eq!(extractor.value_to_name(&Scalar::Int(1)), "VALUE_1");
    }
}
