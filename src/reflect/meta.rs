//! Type metadata generated from declarations
//!
//! `reflect_struct!` wraps a struct definition and records its fields,
//! its base type (composition exposed through `Deref`) and the traits it
//! claims to implement. `reflect_impl!` wraps the inherent impl block plus
//! any trait impl blocks of the type and records each method signature.
//! Claimed traits are checked by the compiler, so the metadata cannot drift
//! from the code.

use serde::Serialize;
use std::fmt;

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub type_name: &'static str,
}

/// A declared method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub visibility: &'static str,
    pub name: &'static str,
    pub params: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<&'static str>,
    /// Trait whose impl block declares the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_trait: Option<&'static str>,
}

impl MethodInfo {
    /// Full signature, e.g. `pub fn words(&self) -> &[String]`
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.visibility.is_empty() {
            write!(f, "{} ", self.visibility)?;
        }
        write!(f, "fn {}({})", self.name, self.params)?;
        if let Some(ret) = self.returns {
            write!(f, " -> {}", ret)?;
        }
        Ok(())
    }
}

/// Everything the introspector knows about one type
#[derive(Debug)]
pub struct TypeInfo {
    pub name: &'static str,
    pub path: &'static str,
    pub fields: Vec<FieldInfo>,
    pub methods: &'static [MethodInfo],
    pub base: Option<fn() -> &'static TypeInfo>,
    pub interfaces: Vec<&'static str>,
}

impl TypeInfo {
    /// Base types from the direct parent upwards
    pub fn superclasses(&self) -> Vec<&'static TypeInfo> {
        let mut chain = Vec::new();
        let mut next = self.base;
        while let Some(base) = next {
            let info = base();
            chain.push(info);
            next = info.base;
        }
        chain
    }
}

/// Types that carry generated metadata
pub trait Reflect {
    fn type_info() -> &'static TypeInfo;
}

/// Methods declared through `reflect_impl!`
pub trait DeclaredMethods {
    const METHODS: &'static [MethodInfo] = &[];
}

macro_rules! reflect_struct {
    (@base) => {
        None
    };
    (@base $base:ident) => {
        Some(<$base as $crate::reflect::Reflect>::type_info as fn() -> &'static $crate::reflect::TypeInfo)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident
        $(extends $base:ident via $base_field:ident)?
        $(implements [$($iface:ident),* $(,)?])?
        {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        $(
            impl ::std::ops::Deref for $name {
                type Target = $base;

                fn deref(&self) -> &$base {
                    &self.$base_field
                }
            }
        )?

        $($(
            const _: fn() = || {
                fn assert_implemented<T: ?Sized + $iface>() {}
                assert_implemented::<$name>();
            };
        )*)?

        impl $crate::reflect::Reflect for $name {
            fn type_info() -> &'static $crate::reflect::TypeInfo {
                static INFO: ::once_cell::sync::Lazy<$crate::reflect::TypeInfo> =
                    ::once_cell::sync::Lazy::new(|| $crate::reflect::TypeInfo {
                        name: stringify!($name),
                        path: concat!(module_path!(), "::", stringify!($name)),
                        fields: vec![
                            $(
                                $crate::reflect::FieldInfo {
                                    name: stringify!($field),
                                    type_name: ::std::any::type_name::<$fty>(),
                                },
                            )*
                        ],
                        methods: <$name as $crate::reflect::DeclaredMethods>::METHODS,
                        base: $crate::reflect::reflect_struct!(@base $($base)?),
                        interfaces: vec![$($(stringify!($iface)),*)?],
                    });
                &INFO
            }
        }
    };
}

macro_rules! reflect_impl {
    (
        impl $name:ident {
            $(
                $(#[$mmeta:meta])*
                $mvis:vis fn $method:ident ( $($params:tt)* ) $(-> $ret:ty)? $body:block
            )*
        }
        $(
            impl $iface:ident for $iname:ident {
                $(
                    $(#[$tmeta:meta])*
                    fn $tmethod:ident ( $($tparams:tt)* ) $(-> $tret:ty)? $tbody:block
                )*
            }
        )*
    ) => {
        impl $name {
            $(
                $(#[$mmeta])*
                $mvis fn $method ( $($params)* ) $(-> $ret)? $body
            )*
        }

        $(
            impl $iface for $iname {
                $(
                    $(#[$tmeta])*
                    fn $tmethod ( $($tparams)* ) $(-> $tret)? $tbody
                )*
            }
        )*

        impl $crate::reflect::DeclaredMethods for $name {
            const METHODS: &'static [$crate::reflect::MethodInfo] = &[
                $(
                    $crate::reflect::MethodInfo {
                        visibility: stringify!($mvis),
                        name: stringify!($method),
                        params: stringify!($($params)*),
                        returns: $crate::reflect::reflect_impl!(@ret $($ret)?),
                        from_trait: None,
                    },
                )*
                $($(
                    $crate::reflect::MethodInfo {
                        visibility: "",
                        name: stringify!($tmethod),
                        params: stringify!($($tparams)*),
                        returns: $crate::reflect::reflect_impl!(@ret $($tret)?),
                        from_trait: Some(stringify!($iface)),
                    },
                )*)*
            ];
        }
    };
    (@ret) => {
        None
    };
    (@ret $ret:ty) => {
        Some(stringify!($ret))
    };
}

pub(crate) use reflect_impl;
pub(crate) use reflect_struct;
