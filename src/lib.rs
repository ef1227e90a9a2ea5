//! File-based load/save for typed configuration models.
//!
//! Any serde model becomes file-backed by implementing [`ConfigModel`]:
//! `load` and `save` pick JSON, YAML or TOML from the file extension, and
//! YAML/TOML output can carry an end-of-line comment per field, drawn from
//! the model's static field metadata (description and allowed values).
//!
//! # Structure
//!
//! - `format.rs` - extension-to-format dispatch
//! - `schema.rs` - per-field metadata and comment computation
//! - `document.rs` - projection of a model into a commented document tree
//! - `emit/` - comment-aware YAML and TOML emitters
//! - `model.rs` - the [`ConfigModel`] load/save surface
//!
//! # Example
//!
//! ```no_run
//! use confer::{ConfigModel, FieldMeta};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl ConfigModel for Server {
//!     fn fields() -> &'static [FieldMeta] {
//!         const FIELDS: &[FieldMeta] = &[
//!             FieldMeta::new("host").description("Bind address"),
//!             FieldMeta::new("port").description("TCP port"),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! # fn main() -> confer::Result<()> {
//! let server = Server { host: "0.0.0.0".into(), port: 8080 };
//! server.save("server.yaml")?;
//! let restored = Server::load("server.yaml")?;
//! assert_eq!(restored.port, 8080);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod emit;
pub mod error;
pub mod format;
pub mod model;
pub mod schema;

// Re-exports for convenient external access
pub use error::{Error, Result};
pub use format::Format;
pub use model::{ConfigModel, SaveOptions};
pub use schema::{FieldMeta, sanitize_comment};
