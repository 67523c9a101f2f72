use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{
    parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type,
    TypePath,
};

/// `#[node(crate_path = "...")]`, for deriving inside the list crate itself.
struct NodeAttribute {
    crate_path: syn::Path,
}

impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }
        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        Ok(NodeAttribute {
            crate_path: value.parse()?,
        })
    }
}

/// The `link` field and the optional `data` field of a node struct.
struct NodeFields<'a> {
    link: &'a Field,
    data: Option<&'a Field>,
}

/// Derive macro for forward list nodes.
///
/// The struct must have a `link: ForwardLink` field and may have a `data`
/// field. `Link` is always generated; `NodeWithData` only when `data` exists,
/// so a value-less sentinel derives the same way as a value node.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let crate_path = crate_path(input)?;
    let traits_path = quote! { #crate_path::linked_list::forward::traits };
    let fields = node_fields(input)?;
    check_link_type(&fields.link.ty)?;

    let link_impl = link_impl(input, &traits_path);
    let data_impl = match fields.data {
        Some(data) => data_impl(input, &traits_path, &data.ty),
        None => TokenStream2::new(),
    };

    Ok(quote! {
        #link_impl
        #data_impl
    })
}

fn crate_path(input: &DeriveInput) -> syn::Result<TokenStream2> {
    match input.attrs.iter().find(|attr| attr.path().is_ident("node")) {
        Some(attr) => {
            let path = attr.parse_args::<NodeAttribute>()?.crate_path;
            Ok(quote! { #path })
        }
        None => Ok(quote! { ::mola_forward_list }),
    }
}

fn node_fields(input: &DeriveInput) -> syn::Result<NodeFields<'_>> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(fields),
        ..
    }) = &input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    let mut link = None;
    let mut data = None;
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        if ident == "link" {
            link = Some(field);
        } else if ident == "data" {
            data = Some(field);
        } else {
            return Err(syn::Error::new_spanned(
                ident,
                "unexpected field name: expected `link` or `data`",
            ));
        }
    }

    let link = link.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "struct must have a field named `link`")
    })?;
    Ok(NodeFields { link, data })
}

fn check_link_type(ty: &Type) -> syn::Result<()> {
    let is_forward_link = match ty {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "ForwardLink"),
        _ => false,
    };
    if is_forward_link {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(ty, "field `link` must be a `ForwardLink`"))
    }
}

fn link_impl(input: &DeriveInput, traits_path: &TokenStream2) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #traits_path::Link for #name #ty_generics #where_clause {
            #[inline]
            fn next(&self) -> Option<#traits_path::SlotIndex> {
                #traits_path::Link::next(&self.link)
            }

            #[inline]
            fn set_next(&mut self, next: Option<#traits_path::SlotIndex>) {
                #traits_path::Link::set_next(&mut self.link, next);
            }
        }
    }
}

fn data_impl(input: &DeriveInput, traits_path: &TokenStream2, data_type: &Type) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #traits_path::NodeWithData for #name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn into_data(self) -> Self::Data {
                self.data
            }
        }
    }
}
