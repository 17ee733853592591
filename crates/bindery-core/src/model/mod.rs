//! Runtime entity metadata.
//!
//! Types in `model` are the *runtime representations* of what the derive
//! macro knows at compile time: for each entity, a static description of
//! its path, name, primary key, and bindable fields. The binder and the
//! registry dispatch on these models instead of on language reflection.

pub mod entity;
pub mod field;
