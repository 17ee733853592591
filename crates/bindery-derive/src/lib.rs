//! Derive macros for bindery entities.

use proc_macro::TokenStream;

mod entity;
mod util;

#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}
