use syn::{FnArg, Ident, ImplItem, ItemImpl, Pat, ReturnType, Type, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// One method of a `#[reflect_methods]` impl block.
pub(crate) struct ReflectMethod {
    pub ident: Ident,
    pub vis: syn::Visibility,
    /// `&self` or `&mut self`, `false` for associated functions.
    pub receiver: bool,
    pub params: Vec<(String, Type)>,
    pub output: Option<Type>,
}

/// A parsed `#[reflect_methods]` impl block.
///
/// `item` is the block as it will be emitted, with method level
/// `#[reflect(...)]` attributes removed.
pub(crate) struct ReflectMethods {
    pub item: ItemImpl,
    pub methods: Vec<ReflectMethod>,
}

impl ReflectMethods {
    pub fn from_item(mut item: ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new(
                path.span(),
                "`#[reflect_methods]` expects an inherent impl block",
            ));
        }

        let mut methods = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(function) = impl_item else {
                continue;
            };
            if take_ignore_attribute(&mut function.attrs)? {
                continue;
            }
            methods.push(parse_method(function)?);
        }

        Ok(Self { item, methods })
    }
}

/// Remove `#[reflect(...)]` from `attrs`, reporting whether it said `ignore`.
fn take_ignore_attribute(attrs: &mut Vec<syn::Attribute>) -> syn::Result<bool> {
    let mut ignore = false;
    for attr in attrs.iter() {
        if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    ignore = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown method attribute, expected `ignore`"))
                }
            })?;
        }
    }
    attrs.retain(|attr| !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME));
    Ok(ignore)
}

fn check_type(ty: &Type) -> syn::Result<()> {
    match ty {
        Type::Reference(_) => Err(syn::Error::new(
            ty.span(),
            "references cannot pass through reflection, take or return an owned value \
             or mark the method `#[reflect(ignore)]`",
        )),
        Type::ImplTrait(_) => Err(syn::Error::new(
            ty.span(),
            "`impl Trait` cannot pass through reflection, mark the method `#[reflect(ignore)]`",
        )),
        _ => Ok(()),
    }
}

fn parse_method(function: &syn::ImplItemFn) -> syn::Result<ReflectMethod> {
    let sig = &function.sig;
    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new(
            token.span(),
            "async methods cannot be reflected, mark the method `#[reflect(ignore)]`",
        ));
    }
    if let Some(token) = &sig.unsafety {
        return Err(syn::Error::new(
            token.span(),
            "unsafe methods cannot be reflected, mark the method `#[reflect(ignore)]`",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "generic methods cannot be reflected, mark the method `#[reflect(ignore)]`",
        ));
    }

    let mut receiver = false;
    let mut params = Vec::new();
    for input in &sig.inputs {
        match input {
            FnArg::Receiver(this) => {
                if this.reference.is_none() || this.colon_token.is_some() {
                    return Err(syn::Error::new(
                        this.span(),
                        "only `&self` and `&mut self` receivers can be reflected",
                    ));
                }
                receiver = true;
            }
            FnArg::Typed(arg) => {
                check_type(&arg.ty)?;
                let name = match &*arg.pat {
                    Pat::Ident(pat) => pat.ident.to_string(),
                    _ => format!("arg{}", params.len()),
                };
                params.push((name, (*arg.ty).clone()));
            }
        }
    }

    let output = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => {
            check_type(ty)?;
            Some((**ty).clone())
        }
    };

    Ok(ReflectMethod {
        ident: sig.ident.clone(),
        vis: function.vis.clone(),
        receiver,
        params,
        output,
    })
}
