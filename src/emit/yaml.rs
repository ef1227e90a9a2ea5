//! Block-style YAML emitter for commented documents.
//!
//! Layout follows the usual hand-edited config shape: 2-space mapping
//! indent, sequence dashes offset 2 columns from the parent key. Scalars
//! render through serde_yaml so quoting matches what the loader expects
//! ("yes", "123" and the empty string stay strings on reload).

use serde_json::Value;

use crate::document::{Entry, Node};
use crate::error::Result;

const INDENT: usize = 2;

/// Render a projected document as YAML with end-of-line comments.
pub fn to_string(root: &Node) -> Result<String> {
    let mut out = String::new();
    match root {
        Node::Mapping(entries) => emit_mapping(&mut out, entries, 0)?,
        Node::Sequence(items) => emit_sequence(&mut out, items, 0)?,
        Node::Scalar(value) => {
            out.push_str(&scalar(value)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn emit_mapping(out: &mut String, entries: &[Entry], indent: usize) -> Result<()> {
    let pad = " ".repeat(indent);
    for entry in entries {
        out.push_str(&pad);
        out.push_str(&key(&entry.key)?);
        out.push(':');
        match &entry.node {
            Node::Scalar(value) => {
                out.push(' ');
                out.push_str(&scalar(value)?);
                push_comment(out, entry.comment.as_deref());
                out.push('\n');
            }
            Node::Mapping(children) if children.is_empty() => {
                out.push_str(" {}");
                push_comment(out, entry.comment.as_deref());
                out.push('\n');
            }
            Node::Sequence(items) if items.is_empty() => {
                out.push_str(" []");
                push_comment(out, entry.comment.as_deref());
                out.push('\n');
            }
            // Block children go on the following lines; the comment stays
            // on the key line.
            Node::Mapping(children) => {
                push_comment(out, entry.comment.as_deref());
                out.push('\n');
                emit_mapping(out, children, indent + INDENT)?;
            }
            Node::Sequence(items) => {
                push_comment(out, entry.comment.as_deref());
                out.push('\n');
                emit_sequence(out, items, indent + INDENT)?;
            }
        }
    }
    Ok(())
}

fn emit_sequence(out: &mut String, items: &[Node], indent: usize) -> Result<()> {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            Node::Scalar(value) => {
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&scalar(value)?);
                out.push('\n');
            }
            Node::Mapping(entries) if entries.is_empty() => {
                out.push_str(&pad);
                out.push_str("- {}\n");
            }
            Node::Mapping(entries) => {
                // First entry shares the dash line, the rest align under it.
                let mut block = String::new();
                emit_mapping(&mut block, entries, indent + INDENT)?;
                block.replace_range(indent..indent + INDENT, "- ");
                out.push_str(&block);
            }
            Node::Sequence(inner) if inner.is_empty() => {
                out.push_str(&pad);
                out.push_str("- []\n");
            }
            Node::Sequence(inner) => {
                out.push_str(&pad);
                out.push_str("-\n");
                emit_sequence(out, inner, indent + INDENT)?;
            }
        }
    }
    Ok(())
}

fn push_comment(out: &mut String, comment: Option<&str>) {
    if let Some(comment) = comment {
        out.push_str(" # ");
        out.push_str(comment);
    }
}

fn key(key: &str) -> Result<String> {
    scalar(&Value::String(key.to_string()))
}

fn scalar(value: &Value) -> Result<String> {
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') {
        // A multi-line rendering (block scalar) would break the layout.
        // JSON escapes are valid YAML flow scalars.
        return Ok(serde_json::to_string(value)?);
    }
    Ok(rendered.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, node: Node, comment: Option<&str>) -> Entry {
        Entry {
            key: key.to_string(),
            node,
            comment: comment.map(str::to_string),
        }
    }

    fn scalar_node(value: impl Into<Value>) -> Node {
        Node::Scalar(value.into())
    }

    #[test]
    fn test_scalar_entry_with_comment() {
        let doc = Node::Mapping(vec![
            entry("host", scalar_node("0.0.0.0"), Some("Bind address")),
            entry("port", scalar_node(8080), None),
        ]);
        assert_eq!(
            to_string(&doc).unwrap(),
            "host: 0.0.0.0 # Bind address\nport: 8080\n"
        );
    }

    #[test]
    fn test_nested_mapping_comment_on_key_line() {
        let doc = Node::Mapping(vec![entry(
            "server",
            Node::Mapping(vec![entry("port", scalar_node(80), None)]),
            Some("Listener settings"),
        )]);
        assert_eq!(
            to_string(&doc).unwrap(),
            "server: # Listener settings\n  port: 80\n"
        );
    }

    #[test]
    fn test_sequence_layout() {
        let doc = Node::Mapping(vec![entry(
            "hobbies",
            Node::Sequence(vec![scalar_node("reading"), scalar_node("cycling")]),
            None,
        )]);
        assert_eq!(
            to_string(&doc).unwrap(),
            "hobbies:\n  - reading\n  - cycling\n"
        );
    }

    #[test]
    fn test_sequence_of_mappings() {
        let doc = Node::Mapping(vec![entry(
            "users",
            Node::Sequence(vec![Node::Mapping(vec![
                entry("name", scalar_node("jane"), None),
                entry("admin", scalar_node(true), None),
            ])]),
            None,
        )]);
        assert_eq!(
            to_string(&doc).unwrap(),
            "users:\n  - name: jane\n    admin: true\n"
        );
    }

    #[test]
    fn test_empty_containers_inline() {
        let doc = Node::Mapping(vec![
            entry("tags", Node::Sequence(vec![]), Some("Free-form tags")),
            entry("extra", Node::Mapping(vec![]), None),
        ]);
        assert_eq!(
            to_string(&doc).unwrap(),
            "tags: [] # Free-form tags\nextra: {}\n"
        );
    }

    #[test]
    fn test_ambiguous_scalars_stay_quoted() {
        let doc = Node::Mapping(vec![
            entry("answer", scalar_node("yes"), None),
            entry("version", scalar_node("1.0"), None),
        ]);
        let text = to_string(&doc).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed["answer"], serde_yaml::Value::String("yes".into()));
        assert_eq!(parsed["version"], serde_yaml::Value::String("1.0".into()));
    }

    #[test]
    fn test_null_scalar() {
        let doc = Node::Mapping(vec![entry("address", scalar_node(Value::Null), None)]);
        assert_eq!(to_string(&doc).unwrap(), "address: null\n");
    }

    #[test]
    fn test_multiline_string_falls_back_to_flow() {
        let doc = Node::Mapping(vec![entry("motd", scalar_node("line1\nline2"), None)]);
        let text = to_string(&doc).unwrap();
        assert_eq!(text.lines().count(), 1);
        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed["motd"], serde_yaml::Value::String("line1\nline2".into()));
    }
}
