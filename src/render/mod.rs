//! Rendering of the requirements model to JSON and human-readable text.
//!
//! Rendering never looks at `evidence` to decide values; evidence is only
//! printed when explicitly requested.

mod json;
mod options;
mod text;

pub use json::{model_from_json, to_json, JsonFormat};
pub use options::TextOptions;
pub use text::{to_text, to_text_with_options};
