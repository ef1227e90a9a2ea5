//! TOML emitter for commented documents.
//!
//! Commented and plain output share this one emitter (comment attachment is
//! just toggled off), so both lay tables out identically: inline values
//! first, then `[table]` sections depth-first, `[[table]]` for sequences of
//! mappings. TOML has no null, so null entries are omitted; an `Option`
//! field saved as `None` simply reloads as `None`.

use serde_json::Value;

use crate::document::{Entry, Node};
use crate::error::{Error, Result};

/// Render a projected document (the root mapping's entries) as TOML.
pub fn to_string(entries: &[Entry], comments: bool) -> Result<String> {
    let mut out = String::new();
    emit_table(&mut out, entries, &[], comments)?;
    Ok(out)
}

fn emit_table(out: &mut String, entries: &[Entry], path: &[String], comments: bool) -> Result<()> {
    // Inline values must precede sub-tables within a table.
    for entry in entries {
        match &entry.node {
            Node::Scalar(Value::Null) => {}
            Node::Scalar(value) => {
                out.push_str(&format!("{} = {}", key(&entry.key), scalar(value)));
                push_comment(out, comments, entry.comment.as_deref());
                out.push('\n');
            }
            Node::Sequence(items) if !is_array_of_tables(items) => {
                out.push_str(&format!("{} = {}", key(&entry.key), inline_sequence(items)?));
                push_comment(out, comments, entry.comment.as_deref());
                out.push('\n');
            }
            _ => {}
        }
    }
    for entry in entries {
        match &entry.node {
            Node::Mapping(children) => {
                let mut sub_path = path.to_vec();
                sub_path.push(entry.key.clone());
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("[{}]", table_path(&sub_path)));
                push_comment(out, comments, entry.comment.as_deref());
                out.push('\n');
                emit_table(out, children, &sub_path, comments)?;
            }
            Node::Sequence(items) if is_array_of_tables(items) => {
                let mut sub_path = path.to_vec();
                sub_path.push(entry.key.clone());
                for item in items {
                    let Node::Mapping(children) = item else {
                        return Err(Error::NotAMapping);
                    };
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&format!("[[{}]]", table_path(&sub_path)));
                    push_comment(out, comments, entry.comment.as_deref());
                    out.push('\n');
                    emit_table(out, children, &sub_path, comments)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn is_array_of_tables(items: &[Node]) -> bool {
    !items.is_empty() && items.iter().all(|item| matches!(item, Node::Mapping(_)))
}

fn inline_sequence(items: &[Node]) -> Result<String> {
    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        if let Some(text) = inline_value(item)? {
            rendered.push(text);
        }
    }
    Ok(format!("[{}]", rendered.join(", ")))
}

/// Flow rendering for values inside inline arrays. Nulls are dropped.
fn inline_value(node: &Node) -> Result<Option<String>> {
    Ok(match node {
        Node::Scalar(Value::Null) => None,
        Node::Scalar(value) => Some(scalar(value)),
        Node::Sequence(items) => Some(inline_sequence(items)?),
        Node::Mapping(entries) => {
            let mut rendered = Vec::with_capacity(entries.len());
            for entry in entries {
                if let Some(text) = inline_value(&entry.node)? {
                    rendered.push(format!("{} = {}", key(&entry.key), text));
                }
            }
            Some(format!("{{ {} }}", rendered.join(", ")))
        }
    })
}

fn push_comment(out: &mut String, comments: bool, comment: Option<&str>) {
    if !comments {
        return;
    }
    if let Some(comment) = comment {
        out.push_str(" # ");
        out.push_str(comment);
    }
}

fn table_path(path: &[String]) -> String {
    path.iter()
        .map(|part| key(part))
        .collect::<Vec<_>>()
        .join(".")
}

fn key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        toml::Value::String(key.to_string()).to_string()
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        // serde_json keeps the decimal point on round floats, which TOML needs
        Value::Number(n) => n.to_string(),
        Value::String(s) => toml::Value::String(s.clone()).to_string(),
        // Null and containers are handled by the callers.
        other => toml::Value::String(other.to_string()).to_string(),
    }
}
