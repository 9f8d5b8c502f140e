use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Expr, Fields, Ident, Result, Type, Visibility};

macro_rules! bail {
    ($msg:expr) => {
        return ::core::result::Result::Err(::syn::Error::new(
            ::proc_macro2::Span::call_site(),
            $msg,
        ))
    };
    ($span:expr, $msg:expr) => {
        return ::core::result::Result::Err(::syn::Error::new_spanned($span, $msg))
    };
}

#[proc_macro_derive(RegisterMap, attributes(reg))]
pub fn register_map_derive(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input);

    impl_register_map(&input).unwrap_or_else(|err| err.into_compile_error().into())
}

fn impl_register_map(ast: &DeriveInput) -> Result<TokenStream> {
    let name = &ast.ident;
    let vis = &ast.vis;
    let ptr_vis = parse_visibility(vis)?;

    check_repr(ast)?;
    if !ast.generics.params.is_empty() {
        bail!(&ast.generics, "RegisterMap derive does not support generic structs");
    }

    let Data::Struct(DataStruct { ref fields, .. }) = ast.data else {
        bail!(ast, "RegisterMap derive supports only structs");
    };
    let Fields::Named(named) = fields else {
        bail!(ast, "RegisterMap derive supports only structs with named fields");
    };

    let ptr_name = Ident::new(&format!("{}Ptr", name), Span::call_site());
    let mod_name = Ident::new(&format!("_mod_{}", name), Span::call_site());
    let mut all_methods = quote!();
    let mut layout_checks = quote!();
    for field in named.named.iter() {
        let Some(field_name) = field.ident.as_ref() else {
            bail!(field, "RegisterMap derive supports only named fields");
        };
        let options = RegOptions::parse(field)?;
        if let Some(offset) = &options.offset {
            let msg = format!("`{name}::{field_name}` is not at the declared offset");
            layout_checks.extend(quote!(
                const _: () = ::core::assert!(
                    ::core::mem::offset_of!(#name, #field_name) == (#offset) as usize,
                    #msg
                );
            ));
        }
        if !options.reserved {
            all_methods.extend(register_accessor(field, field_name, &options)?);
        }
    }

    let doc_msg_top = format!("A pointer to the register map `{name}`.");
    let doc_msg_from_nonnull = format!(
        "\
        Creates a new `{ptr_name}`, a pointer to `{name}`.\n\
        \n\
        # Safety\n\
        - `ptr` must point to a valid instance of `{name}`;\n\
        - `ptr` must be valid for the whole lifetime `'a`;\n\
        - all registers of `{name}` must allow volatile reads/writes."
    );
    let doc_msg_from_ptr = format!(
        "\
        Creates a new `{ptr_name}`, a pointer to `{name}`.\n\
        \n\
        # Safety\n\
        - `ptr` must not be null;\n\
        - `ptr` must point to a valid instance of `{name}`;\n\
        - `ptr` must be valid for the whole lifetime `'a`;\n\
        - all registers of `{name}` must allow volatile reads/writes."
    );
    let doc_msg_from_mut =
        format!("Return a pointer to `{name}` from a mutable (exclusive) reference.");
    let all = quote!(
        #[allow(non_snake_case)]
        mod #mod_name {
            use super::*;
            #[doc = #doc_msg_top]
            #ptr_vis struct #ptr_name<'a> {
                ptr: ::core::ptr::NonNull<#name>,
                _ref: ::core::marker::PhantomData<&'a #name>,
            }
            impl<'a> #ptr_name<'a> {
                #[doc = #doc_msg_from_nonnull]
                #[inline]
                const unsafe fn from_nonnull(ptr: ::core::ptr::NonNull<#name>) -> Self {
                    Self {
                        ptr,
                        _ref: ::core::marker::PhantomData,
                    }
                }

                #[doc = #doc_msg_from_ptr]
                #[inline]
                pub const unsafe fn from_ptr(ptr: *mut #name) -> Self {
                    unsafe { Self::from_nonnull(::core::ptr::NonNull::new_unchecked(ptr)) }
                }

                #[doc = #doc_msg_from_mut]
                #[inline]
                pub fn from_mut(reg: &'a mut #name) -> Self {
                    // the exclusive borrow is valid for 'a
                    unsafe { Self::from_ptr(reg) }
                }

                /// Returns a raw pointer to the underlying register map.
                #[inline]
                pub const fn as_ptr(&self) -> *mut #name {
                    self.ptr.as_ptr()
                }
                #all_methods
            }
            unsafe impl<'a> ::devreg::RegMapPtr<'a> for #ptr_name<'a> {
                type RegMap = #name;
                #[inline]
                unsafe fn from_nonnull(ptr: ::core::ptr::NonNull<Self::RegMap>) -> Self {
                    unsafe { Self::from_nonnull(ptr) }
                }
                #[inline]
                unsafe fn from_ptr(ptr: *mut Self::RegMap) -> Self {
                    unsafe { Self::from_ptr(ptr) }
                }
                #[inline]
                fn from_mut(reg: &'a mut Self::RegMap) -> Self {
                    Self::from_mut(reg)
                }
                #[inline]
                fn as_ptr(&self) -> *mut Self::RegMap {
                    self.as_ptr()
                }
            }
            unsafe impl ::devreg::RegisterMap for #name {
                type Ptr<'a> = #ptr_name<'a>;
            }
        }
        #vis use #mod_name::#ptr_name;
        #layout_checks
    );
    Ok(all.into())
}

fn parse_visibility(vis: &Visibility) -> Result<proc_macro2::TokenStream> {
    Ok(match vis {
        Visibility::Inherited => quote!(pub(super)),
        Visibility::Public(_) => quote!(pub),
        Visibility::Restricted(vis_restricted) => {
            if vis_restricted.in_token.is_some() {
                bail!(
                    vis,
                    "RegisterMap derive does not support `pub(in ...)` visibilities"
                );
            }
            let path = &vis_restricted.path;
            if path.is_ident("crate") {
                quote!(pub(crate))
            } else if path.is_ident("super") {
                quote!(pub(in super::super))
            } else if path.is_ident("self") {
                quote!(pub(super))
            } else {
                bail!(vis, "RegisterMap derive found an unexpected visibility");
            }
        }
    })
}

fn is_register_type(ident: &Ident) -> bool {
    ident == "u8" || ident == "u16" || ident == "u32" || ident == "u64" || ident == "u128"
}

#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum RegAccess {
    RO,
    WO,
    #[default]
    RW,
}

/// Everything the `#[reg(...)]` attributes of one field say.
#[derive(Default)]
struct RegOptions {
    access: Option<RegAccess>,
    reserved: bool,
    mask: Option<Expr>,
    reset: Option<Expr>,
    hook: Option<Type>,
    offset: Option<Expr>,
}

impl RegOptions {
    fn parse(field: &syn::Field) -> Result<Self> {
        let mut options = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("reg") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let access = if meta.path.is_ident("RO") {
                    Some(RegAccess::RO)
                } else if meta.path.is_ident("WO") {
                    Some(RegAccess::WO)
                } else if meta.path.is_ident("RW") {
                    Some(RegAccess::RW)
                } else {
                    None
                };
                if let Some(access) = access {
                    if options.access.replace(access).is_some() {
                        return Err(meta.error("register access specified more than once"));
                    }
                    return Ok(());
                }

                if meta.path.is_ident("reserved") {
                    options.reserved = true;
                    return Ok(());
                }
                if meta.path.is_ident("mask") {
                    options.mask = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                if meta.path.is_ident("reset") {
                    options.reset = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                if meta.path.is_ident("hook") {
                    options.hook = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                if meta.path.is_ident("offset") {
                    options.offset = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                Err(meta.error(
                    "expected one of `RO`, `WO`, `RW`, `reserved`, `mask`, `reset`, `hook`, `offset`",
                ))
            })?;
        }

        if options.reserved
            && (options.access.is_some()
                || options.mask.is_some()
                || options.reset.is_some()
                || options.hook.is_some())
        {
            bail!(
                field,
                "reserved fields have no accessor: only `offset` may be combined with `reserved`"
            );
        }
        if options.access == Some(RegAccess::RO) {
            if let Some(mask) = &options.mask {
                bail!(mask, "read-only registers have no write mask");
            }
            if let Some(reset) = &options.reset {
                bail!(reset, "read-only registers cannot be reset");
            }
        }
        Ok(options)
    }

    fn policy(&self) -> proc_macro2::TokenStream {
        let hook = match &self.hook {
            Some(hook) => quote!(#hook),
            None => quote!(::devreg::hook::NoSideEffect),
        };
        let mask = match &self.mask {
            Some(mask) => quote!({ (#mask) as u128 }),
            None => quote!({ u128::MAX }),
        };
        match self.access.unwrap_or_default() {
            RegAccess::RO => quote!(::devreg::access::ReadOnly<#hook>),
            RegAccess::WO => quote!(::devreg::access::WriteOnly<#mask, #hook>),
            RegAccess::RW => quote!(::devreg::access::ReadWrite<#mask, #hook>),
        }
    }

    fn reset(&self) -> proc_macro2::TokenStream {
        match &self.reset {
            Some(reset) => quote!({ (#reset) as u128 }),
            None => quote!(0),
        }
    }
}

fn check_repr(input: &DeriveInput) -> Result<()> {
    let mut repr_c = false;

    for attr in &input.attrs {
        if attr.path().is_ident("repr") {
            attr.parse_nested_meta(|meta| {
                // #[repr(C)]
                if meta.path.is_ident("C") {
                    repr_c = true;
                    return Ok(());
                }

                // #[repr(transparent)]
                if meta.path.is_ident("transparent") {
                    return Err(
                        meta.error("RegisterMap derive does not support #[repr(transparent)]")
                    );
                }

                // #[repr(align(N))]
                if meta.path.is_ident("align") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let lit: syn::LitInt = content.parse()?;
                    lit.base10_parse::<usize>()?;
                    return Ok(());
                }

                // #[repr(packed)] or #[repr(packed(N))]
                if meta.path.is_ident("packed") {
                    return Err(meta.error("RegisterMap derive does not support #[repr(packed)]"));
                }

                Err(meta.error("RegisterMap derive found an unrecognized #[repr(...)] attribute"))
            })?;
        }
    }

    if repr_c {
        Ok(())
    } else {
        bail!("RegisterMap derive requires #[repr(C)]")
    }
}

fn register_accessor(
    field: &syn::Field,
    name: &Ident,
    options: &RegOptions,
) -> Result<proc_macro2::TokenStream> {
    let ty = match &field.ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            match type_path.path.get_ident() {
                Some(ident) if is_register_type(ident) => ident,
                _ => bail!(
                    &field.ty,
                    "registers must be of type u8, u16, u32, u64 or u128; \
                     mark other fields with #[reg(reserved)]"
                ),
            }
        }
        _ => bail!(
            &field.ty,
            "registers must be of type u8, u16, u32, u64 or u128; \
             mark other fields with #[reg(reserved)]"
        ),
    };
    let policy = options.policy();
    let reset = options.reset();
    let doc = parse_docs(field);
    Ok(quote!(
        #doc
        #[inline]
        pub fn #name (&self) -> ::devreg::Reg<'a, #ty, #policy, #reset> {
            unsafe { ::devreg::Reg::__MACRO_ONLY__from_ptr(::core::ptr::addr_of_mut!((*self.as_ptr()).#name)) }
        }
    ))
}

fn parse_docs(field: &syn::Field) -> proc_macro2::TokenStream {
    let mut docs = quote!();
    for attr in &field.attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let Ok(name_value) = attr.meta.require_name_value() {
            let text = &name_value.value;
            docs.extend(quote!(#[doc = #text]));
        }
    }
    docs
}
