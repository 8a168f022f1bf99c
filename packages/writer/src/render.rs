use crate::context::RenderContext;
use synctypes_model::{ModelTypes, Scalar};

pub const CONSTANTS_MODULE: &str = "constants";
pub const ENUMS_MODULE: &str = "enums";
pub const INDEX_MODULE: &str = "index";

/// Renders extracted model types as TypeScript source
///
/// Output is a pure function of the input: no timestamps or environment
/// details, so unchanged models always produce byte-identical files.
pub struct TypeScriptRenderer {
    header: String,
}

impl TypeScriptRenderer {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// One frozen object literal per model that declares constants
    pub fn render_constants(&self, models: &[ModelTypes]) -> String {
        let mut ctx = self.start_file();

        for model in models.iter().filter(|m| !m.constants.is_empty()) {
            ctx.add("\n");
            ctx.add_line(&format!("export const {} = {{", model.model_name));
            ctx.indent();
            for (name, value) in &model.constants {
                ctx.add_line(&format!("{}: {},", render_member_name(name), render_literal(value)));
            }
            ctx.dedent();
            ctx.add_line("} as const;");
        }

        ctx.into_output()
    }

    /// One enum per (model, choices attribute), named `<Model><EnumName>`
    pub fn render_enums(&self, models: &[ModelTypes]) -> String {
        let mut ctx = self.start_file();

        for model in models {
            for (enum_name, members) in &model.enums {
                ctx.add("\n");
                ctx.add_line(&format!("export enum {}{} {{", model.model_name, enum_name));
                ctx.indent();
                for member in members {
                    ctx.add_line(&format!(
                        "{} = {},  // {}",
                        render_member_name(&member.name),
                        render_literal(&member.value),
                        render_comment_text(&member.label)
                    ));
                }
                ctx.dedent();
                ctx.add_line("}");
            }
        }

        ctx.into_output()
    }

    /// Re-exports of the constants and enums modules
    pub fn render_index(&self) -> String {
        let mut ctx = self.start_file();
        ctx.add("\n");
        ctx.add_line(&format!("export * from \"./{}\";", CONSTANTS_MODULE));
        ctx.add_line(&format!("export * from \"./{}\";", ENUMS_MODULE));
        ctx.into_output()
    }

    fn start_file(&self) -> RenderContext {
        let mut ctx = RenderContext::new();
        ctx.add_comment(&self.header);
        ctx
    }
}

/// TypeScript literal for a scalar: strings double-quoted, numbers raw
pub fn render_literal(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => quote_string(s),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => {
            let n = n.into_inner();
            if n.is_nan() {
                "NaN".to_string()
            } else if n == f64::INFINITY {
                "Infinity".to_string()
            } else if n == f64::NEG_INFINITY {
                "-Infinity".to_string()
            } else {
                n.to_string()
            }
        }
    }
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Object keys and enum member names that are not plain identifiers are
/// emitted quoted
pub fn render_member_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Labels end up in a line comment, so line breaks are flattened
fn render_comment_text(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}
