//! The commented document: an ordered tree mirroring a model's serialized
//! data, with an optional end-of-line comment on each mapping entry.
//!
//! A document is built fresh for every save, handed to a format emitter,
//! and discarded. It is never persisted or reused.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::schema::FieldMeta;

/// One node of a projected document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf value, copied verbatim from the model's serialized form.
    Scalar(Value),
    Sequence(Vec<Node>),
    Mapping(Vec<Entry>),
}

/// A mapping entry, optionally carrying an end-of-line comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub node: Node,
    pub comment: Option<String>,
}

/// Serialize a model and mirror it into a comment-carrying document tree.
///
/// The walk is depth-first. Mapping values with a field table get their
/// fields in declaration order, each with its computed comment; sequences
/// inherit the table so lists of sub-models comment every element; plain
/// mappings and scalars pass through untouched.
pub fn project<M: Serialize>(model: &M, fields: &'static [FieldMeta]) -> Result<Node> {
    let value = serde_json::to_value(model)?;
    Ok(project_value(&value, Some(fields)))
}

fn project_value(value: &Value, fields: Option<&'static [FieldMeta]>) -> Node {
    match value {
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            match fields {
                Some(fields) if !fields.is_empty() => {
                    for field in fields {
                        let Some(child) = map.get(field.name) else {
                            continue;
                        };
                        entries.push(Entry {
                            key: field.name.to_string(),
                            node: project_value(child, field.nested.map(|nested| nested())),
                            comment: field.comment(),
                        });
                    }
                    // Keys the field table does not know about (e.g. from
                    // serde(flatten)) keep their place, uncommented.
                    for (key, child) in map {
                        if fields.iter().any(|f| f.name == key.as_str()) {
                            continue;
                        }
                        entries.push(Entry {
                            key: key.clone(),
                            node: project_value(child, None),
                            comment: None,
                        });
                    }
                }
                _ => {
                    for (key, child) in map {
                        entries.push(Entry {
                            key: key.clone(),
                            node: project_value(child, None),
                            comment: None,
                        });
                    }
                }
            }
            Node::Mapping(entries)
        }
        Value::Array(items) => Node::Sequence(
            items
                .iter()
                .map(|item| project_value(item, fields))
                .collect(),
        ),
        leaf => Node::Scalar(leaf.clone()),
    }
}
