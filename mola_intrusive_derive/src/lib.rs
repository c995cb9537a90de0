use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the container attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(
                key.span(),
                "expected attribute `crate_path`",
            ));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

struct FieldAttribute {
    selector: Ident,
}

/// Parses the field attribute in the format: `field = Selector`.
impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "field" {
            return Err(syn::Error::new(key.span(), "expected attribute `field`"));
        }

        let _: Token![=] = input.parse()?;
        let selector: Ident = input.parse()?;

        Ok(FieldAttribute { selector })
    }
}

/// Derive macro generating link field selectors.
///
/// Every field tagged with `#[node(field = Selector)]` gets a zero-sized
/// selector type named `Selector` implementing `LinkField`, so the struct can
/// be threaded through a list by that field.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Links in a packed struct may be misaligned, and lists take references to
/// them.
fn reject_packed(input: &DeriveInput) -> syn::Result<()> {
    for attr in &input.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("packed") {
                return Err(meta.error(
                    "Node derive macro does not support `repr(packed)`",
                ));
            }
            // Skip the argument of `align(N)`.
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::mola_intrusive };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let path = attr.parse_args::<NodeAttribute>()?.crate_path;
            crate_path = quote! { #path };
            break;
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Node derive macro does not support tuple or unit structs",
            ));
        }
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Node derive macro only supports structs with named fields",
            ));
        }
    };

    reject_packed(input)?;

    let mut selectors = vec![];
    for field in fields {
        let Some(ident) = &field.ident else { continue };
        for attr in &field.attrs {
            if attr.path().is_ident("node") {
                let selector = attr.parse_args::<FieldAttribute>()?.selector;
                selectors.push((selector, ident, &field.ty));
            }
        }
    }

    if selectors.is_empty() {
        return Err(syn::Error::new_spanned(
            struct_name,
            "Struct must have at least one field tagged `#[node(field = Selector)]`",
        ));
    }

    let has_generics = !input.generics.params.is_empty();
    let link_field = quote! { #intrusive_path::traits::LinkField };
    let mut expanded = quote! {};

    for (selector, field_ident, field_ty) in selectors {
        let doc = format!("Selects the `{field_ident}` link of [`{struct_name}`].");

        // Generic owners need a phantom so the selector uses every parameter.
        let declaration = if has_generics {
            quote! {
                #[doc = #doc]
                #vis struct #selector #impl_generics (
                    ::core::marker::PhantomData<fn() -> #struct_name #ty_generics>
                ) #where_clause;
            }
        } else {
            quote! {
                #[doc = #doc]
                #vis struct #selector;
            }
        };

        expanded.extend(quote! {
            #declaration

            unsafe impl #impl_generics #link_field for #selector #ty_generics #where_clause {
                type Owner = #struct_name #ty_generics;
                type Link = #field_ty;

                const OFFSET: usize =
                    ::core::mem::offset_of!(#struct_name #ty_generics, #field_ident);
            }

            // The field must be referenceable: a plain field of the link type.
            const _: () = {
                #[allow(dead_code)]
                fn check #impl_generics (owner: &#struct_name #ty_generics) -> &#field_ty
                #where_clause
                {
                    &owner.#field_ident
                }
            };
        });
    }

    Ok(expanded)
}
