//! Data model for extracted formatting requirements.
//!
//! This module defines the typed output of an extraction pass together
//! with the fragments it is derived from. The model is renderer-agnostic:
//! a template generator consumes the `document`, `margins` and
//! `page_numbering` sections and ignores `evidence`.

mod attribute;
mod fragment;
mod requirements;

pub use attribute::Attribute;
pub use fragment::Fragment;
pub use requirements::{
    DocumentFormatting, FontFamily, PageMargins, PageNumberPosition, PageNumbering,
    RequirementsModel,
};
