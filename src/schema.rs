//! Static per-field metadata consulted when projecting a model into a
//! commented document.
//!
//! Rust has no runtime field reflection, so each model carries an explicit
//! field table built with the const builders below. Tables live in
//! declaration order; comments attach to document entries by field name.

/// Metadata for one declared field of a model.
///
/// `nested` points at a sub-model's own field table and applies through one
/// level of `Option` or `Vec` wrapping, so a list of sub-models gets each
/// element's fields commented.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub choices: &'static [&'static str],
    pub nested: Option<fn() -> &'static [FieldMeta]>,
}

impl FieldMeta {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: None,
            choices: &[],
            nested: None,
        }
    }

    pub const fn description(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    /// The closed set of allowed values, in declared order.
    pub const fn choices(mut self, values: &'static [&'static str]) -> Self {
        self.choices = values;
        self
    }

    pub const fn nested(mut self, fields: fn() -> &'static [FieldMeta]) -> Self {
        self.nested = Some(fields);
        self
    }

    /// End-of-line comment for this field: the sanitized description, the
    /// choices list, both joined with " | ", or nothing at all. Depends only
    /// on metadata, never on the field's current value.
    pub fn comment(&self) -> Option<String> {
        let choices = if self.choices.is_empty() {
            None
        } else {
            Some(format!("choices: {}", self.choices.join(", ")))
        };
        match (self.description, choices) {
            (Some(desc), Some(choices)) => Some(format!("{} | {}", sanitize_comment(desc), choices)),
            (Some(desc), None) => Some(sanitize_comment(desc)),
            (None, choices) => choices,
        }
    }
}

/// Comment syntax cannot span lines; fold every newline and carriage return
/// into a single space.
pub fn sanitize_comment(comment: &str) -> String {
    comment.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_only() {
        let field = FieldMeta::new("host").description("Bind address");
        assert_eq!(field.comment().as_deref(), Some("Bind address"));
    }

    #[test]
    fn test_choices_only() {
        let field = FieldMeta::new("level").choices(&["debug", "info", "warn"]);
        assert_eq!(field.comment().as_deref(), Some("choices: debug, info, warn"));
    }

    #[test]
    fn test_description_and_choices() {
        let field = FieldMeta::new("level")
            .description("Log verbosity")
            .choices(&["debug", "info"]);
        assert_eq!(
            field.comment().as_deref(),
            Some("Log verbosity | choices: debug, info")
        );
    }

    #[test]
    fn test_no_metadata_no_comment() {
        assert_eq!(FieldMeta::new("port").comment(), None);
    }

    #[test]
    fn test_multiline_description_is_one_line() {
        let field = FieldMeta::new("notes").description("line one\nline two\r\nline three");
        assert_eq!(
            field.comment().as_deref(),
            Some("line one line two  line three")
        );
    }

    #[test]
    fn test_sanitize_comment() {
        assert_eq!(sanitize_comment("a\nb\rc"), "a b c");
    }
}
