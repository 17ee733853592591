use crate::util::to_snake_case;
use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields};

///
/// EntityArgs
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity))]
struct EntityArgs {
    /// Stable external name; defaults to the snake_case type name.
    #[darling(default)]
    name: Option<String>,
    /// Primary-key field name; defaults to `id`.
    #[darling(default)]
    pk: Option<String>,
}

///
/// FieldArgs
///

#[derive(Debug, FromField)]
#[darling(attributes(entity))]
struct FieldArgs {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    /// Exclude the field from the model and the accessors.
    #[darling(default)]
    skip: bool,
}

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let args = match EntityArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors(),
    };

    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Error::new_spanned(&input.generics, "Entity cannot be derived for generic types")
            .to_compile_error();
    }

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            return Error::new_spanned(
                &data.fields,
                "Entity can only be derived for structs with named fields",
            )
            .to_compile_error();
        }
    } else {
        return Error::new_spanned(
            &input.ident,
            "Entity can only be derived for structs with named fields",
        )
        .to_compile_error();
    };

    let mut bound = Vec::new();
    for field in fields {
        let field = match FieldArgs::from_field(field) {
            Ok(field) => field,
            Err(err) => return err.write_errors(),
        };

        if !field.skip {
            bound.push(field);
        }
    }

    let entity_name = args
        .name
        .unwrap_or_else(|| to_snake_case(&ident.to_string()));
    let pk = args.pk.unwrap_or_else(|| "id".to_string());

    let Some(pk_index) = bound
        .iter()
        .position(|field| field.ident.as_ref().is_some_and(|i| i == pk.as_str()))
    else {
        return Error::new_spanned(ident, format!("primary-key field `{pk}` not found"))
            .to_compile_error();
    };
    let pk_ident = bound[pk_index].ident.clone().expect("named field");
    let pk_ty = bound[pk_index].ty.clone();

    // Static model field descriptors, one const per bound field.
    let model_field_idents: Vec<_> = bound
        .iter()
        .map(|field| {
            let constant = field
                .ident
                .as_ref()
                .expect("named field")
                .to_string()
                .to_uppercase();
            format_ident!("__MODEL_FIELD_{constant}")
        })
        .collect();

    let model_field_consts = bound.iter().zip(&model_field_idents).map(|(field, fi)| {
        let name = field.ident.as_ref().expect("named field").to_string();
        let ty = &field.ty;

        quote! {
            const #fi: ::bindery::model::field::FieldModel =
                ::bindery::model::field::FieldModel {
                    name: #name,
                    kind: <#ty as ::bindery::traits::BindValue>::KIND,
                };
        }
    });

    let fields_len = bound.len();

    let get_arms = bound.iter().map(|field| {
        let fid = field.ident.as_ref().expect("named field");
        let name = fid.to_string();

        quote! {
            #name => ::std::option::Option::Some(
                ::bindery::traits::BindValue::to_value(&self.#fid),
            ),
        }
    });

    let set_arms = bound.iter().map(|field| {
        let fid = field.ident.as_ref().expect("named field");
        let name = fid.to_string();
        let ty = &field.ty;

        quote! {
            #name => match <#ty as ::bindery::traits::BindValue>::from_value(&value) {
                ::std::option::Option::Some(converted) => {
                    self.#fid = converted;
                    ::std::result::Result::Ok(())
                }
                ::std::option::Option::None => ::std::result::Result::Err(
                    ::bindery::error::BindError::field_access(
                        <Self as ::bindery::traits::Path>::PATH,
                        field,
                        "value does not match the declared field type",
                    ),
                ),
            },
        }
    });

    let entry_ident = format_ident!("__BINDERY_ENTRY_{}", ident.to_string().to_uppercase());
    let register_ident = format_ident!("__bindery_register_{}", to_snake_case(&ident.to_string()));

    quote! {
        impl #ident {
            #(#model_field_consts)*

            const __MODEL_FIELDS: [::bindery::model::field::FieldModel; #fields_len] = [
                #( Self::#model_field_idents ),*
            ];

            const __ENTITY_MODEL: ::bindery::model::entity::EntityModel =
                ::bindery::model::entity::EntityModel {
                    path: <Self as ::bindery::traits::Path>::PATH,
                    entity_name: #entity_name,
                    primary_key: &Self::__MODEL_FIELDS[#pk_index],
                    fields: &Self::__MODEL_FIELDS,
                };
        }

        impl ::bindery::traits::Path for #ident {
            const PATH: &'static str =
                ::std::concat!(::std::module_path!(), "::", ::std::stringify!(#ident));
        }

        impl ::bindery::traits::EntityIdentity for #ident {
            const ENTITY_NAME: &'static str = #entity_name;
            const PRIMARY_KEY: &'static str = #pk;
        }

        impl ::bindery::traits::EntitySchema for #ident {
            const MODEL: &'static ::bindery::model::entity::EntityModel = &Self::__ENTITY_MODEL;
        }

        impl ::bindery::traits::FieldAccess for #ident {
            fn model(&self) -> &'static ::bindery::model::entity::EntityModel {
                <Self as ::bindery::traits::EntitySchema>::MODEL
            }

            fn get_value(&self, field: &str) -> ::std::option::Option<::bindery::value::Value> {
                match field {
                    #(#get_arms)*
                    _ => ::std::option::Option::None,
                }
            }

            fn set_value(
                &mut self,
                field: &str,
                value: ::bindery::value::Value,
            ) -> ::std::result::Result<(), ::bindery::error::BindError> {
                match field {
                    #(#set_arms)*
                    _ => ::std::result::Result::Err(
                        ::bindery::error::BindError::field_not_found(
                            <Self as ::bindery::traits::Path>::PATH,
                            field,
                        ),
                    ),
                }
            }
        }

        impl ::bindery::traits::Entity for #ident {
            fn id_value(&self) -> ::bindery::value::Value {
                ::bindery::traits::BindValue::to_value(&self.#pk_ident)
            }

            fn set_id_value(
                &mut self,
                id: ::bindery::value::Value,
            ) -> ::std::result::Result<(), ::bindery::error::BindError> {
                match <#pk_ty as ::bindery::traits::BindValue>::from_value(&id) {
                    ::std::option::Option::Some(converted) => {
                        self.#pk_ident = converted;
                        ::std::result::Result::Ok(())
                    }
                    ::std::option::Option::None => ::std::result::Result::Err(
                        ::bindery::error::BindError::field_access(
                            <Self as ::bindery::traits::Path>::PATH,
                            <Self as ::bindery::traits::EntityIdentity>::PRIMARY_KEY,
                            "identifier does not match the declared key type",
                        ),
                    ),
                }
            }
        }

        #[doc(hidden)]
        static #entry_ident: ::bindery::registry::EntityEntry =
            ::bindery::registry::EntityEntry {
                model: <#ident as ::bindery::traits::EntitySchema>::MODEL,
                ctor: ::std::option::Option::Some(
                    || ::std::boxed::Box::new(<#ident as ::std::default::Default>::default()),
                ),
            };

        #[doc(hidden)]
        #[::bindery::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ::bindery::__reexports::ctor)]
        fn #register_ident() {
            ::bindery::registry::register(&#entry_ident);
        }
    }
}
