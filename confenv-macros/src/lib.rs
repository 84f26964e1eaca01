//! Procedural macros for confenv
//!
//! This crate provides the `#[derive(EnvOverlay)]` macro, which builds the
//! static field table used to override configuration fields from environment
//! variables.

use darling::{FromDeriveInput, FromField, util::Flag};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{DeriveInput, Ident, Type, parse_macro_input};

/// Container input for `#[derive(EnvOverlay)]`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(env), supports(struct_named))]
struct EnvOverlayInput {
    ident: Ident,
    generics: syn::Generics,
    data: darling::ast::Data<(), EnvFieldArgs>,
}

/// Per-field `#[env(...)]` arguments
#[derive(Debug, FromField)]
#[darling(attributes(env))]
struct EnvFieldArgs {
    ident: Option<Ident>,
    ty: Type,
    /// Explicit environment variable name, replacing the derived one
    #[darling(default)]
    key: Option<String>,
    /// Leave this field out of the overlay
    skip: Flag,
}

/// Derive macro for environment overlays.
///
/// This macro generates an `EnvOverlay` implementation whose field table holds
/// one entry per `String` field. Each entry carries the field name, the
/// environment variable name derived from it, and a getter/setter pair.
/// Fields of any other type are left out.
///
/// # Example
///
/// ```ignore
/// #[derive(EnvOverlay)]
/// pub struct ServiceConfig {
///     pub name: String,            // NAME
///     pub base_url: String,        // BASE_URL
///     #[env(key = "DB_DRIVER")]
///     pub driver: String,          // DB_DRIVER
///     #[env(skip)]
///     pub comment: String,         // not overridden
///     pub port: u16,               // not a string, not overridden
/// }
/// ```
#[proc_macro_derive(EnvOverlay, attributes(env))]
pub fn derive_env_overlay(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let args = match EnvOverlayInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    TokenStream::from(impl_env_overlay(&args))
}

fn impl_env_overlay(args: &EnvOverlayInput) -> TokenStream2 {
    let struct_name = &args.ident;

    if !args.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &args.generics,
            "EnvOverlay does not support generic structs",
        )
        .to_compile_error();
    }

    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        darling::ast::Data::Enum(_) => {
            return syn::Error::new_spanned(struct_name, "EnvOverlay only supports structs")
                .to_compile_error();
        }
    };

    let mut accessors = Vec::new();
    let mut entries = Vec::new();
    let mut seen_keys: HashMap<String, String> = HashMap::new();

    for field in fields {
        if field.skip.is_present() || !is_string(&field.ty) {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        let key = field
            .key
            .clone()
            .unwrap_or_else(|| env_key(&field_name));

        if let Some(previous) = seen_keys.insert(key.clone(), field_name.clone()) {
            return syn::Error::new_spanned(
                ident,
                format!(
                    "fields `{}` and `{}` both read environment variable `{}`",
                    previous, field_name, key
                ),
            )
            .to_compile_error();
        }
        let getter = format_ident!("get_{}", field_name);
        let setter = format_ident!("set_{}", field_name);

        accessors.push(quote! {
            #[allow(non_snake_case)]
            fn #getter(record: &#struct_name) -> &str {
                &record.#ident
            }

            #[allow(non_snake_case)]
            fn #setter(record: &mut #struct_name, value: String) {
                record.#ident = value;
            }
        });

        entries.push(quote! {
            ::confenv::overlay::EnvField {
                field: #field_name,
                key: #key,
                get: #getter,
                set: #setter,
            }
        });
    }

    quote! {
        const _: () = {
            #(#accessors)*

            impl ::confenv::overlay::EnvOverlay for #struct_name {
                fn env_fields() -> &'static [::confenv::overlay::EnvField<Self>] {
                    const FIELDS: &[::confenv::overlay::EnvField<#struct_name>] = &[
                        #(#entries),*
                    ];
                    FIELDS
                }
            }
        };
    }
}

/// Whether a field type is a plain `String` (or `std::string::String`)
fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "String" && seg.arguments.is_empty()),
        _ => false,
    }
}

/// Derive the environment variable name for a field identifier.
///
/// Words are joined with `_` and upper-cased: `base_url`, `BaseURL` and
/// `baseUrl` all map to `BASE_URL`.
fn env_key(ident: &str) -> String {
    split_words(ident)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Lower
        }
    }
}

/// Split an identifier into words.
///
/// Underscores always separate words. Inside a segment, every change of
/// character class starts a new word, except that an uppercase run followed
/// by a lowercase letter hands its last letter to the next word, so acronyms
/// stay together: `HTTPServer` gives `HTTP`, `Server`.
fn split_words(ident: &str) -> Vec<String> {
    let mut words = Vec::new();

    for segment in ident.split('_').filter(|s| !s.is_empty()) {
        let mut runs: Vec<(CharClass, String)> = Vec::new();
        for ch in segment.chars() {
            let class = CharClass::of(ch);
            match runs.last_mut() {
                Some((last, run)) if *last == class => run.push(ch),
                _ => runs.push((class, ch.to_string())),
            }
        }

        for i in 0..runs.len().saturating_sub(1) {
            if runs[i].0 == CharClass::Upper && runs[i + 1].0 == CharClass::Lower {
                if let Some(ch) = runs[i].1.pop() {
                    runs[i + 1].1.insert(0, ch);
                }
            }
        }

        words.extend(
            runs.into_iter()
                .map(|(_, run)| run)
                .filter(|run| !run.is_empty()),
        );
    }

    words
}
