//! Cross-generator sequence properties.

mod sequences;
