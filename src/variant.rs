//! Named style variants
//!
//! Every themeable choice (navigation style, color scheme, banner size, ...)
//! is a closed enum whose variants carry a stable lowercase name. Names coming
//! from a site file are resolved case-insensitively, and anything unknown
//! resolves to the enum's declared default instead of failing.

use tracing::{debug, warn};

/// A closed set of named variants with a declared default
pub trait Variant: Copy + Default + PartialEq + 'static {
    /// What the variant selects, used in log messages
    const KIND: &'static str;

    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Stable lowercase name of the variant
    fn name(self) -> &'static str;

    /// Resolve a name, returning `None` when it is not a known variant
    fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a name, falling back to the default variant
    fn from_name(name: &str) -> Self {
        if let Some(variant) = Self::lookup(name) {
            return variant;
        }

        let fallback = Self::default();
        if name.trim().is_empty() {
            debug!("No {} given, using '{}'", Self::KIND, fallback.name());
        } else {
            warn!(
                "Unknown {} '{}', falling back to '{}'",
                Self::KIND,
                name,
                fallback.name()
            );
        }
        fallback
    }

    /// Whether this is the declared default variant
    fn is_default(self) -> bool {
        self == Self::default()
    }
}

/// Declare a variant enum.
///
/// ```ignore
/// variants! {
///     /// Button look
///     pub enum ButtonStyle: "button style", default Plain {
///         Plain => "default",
///         Pill => "pill",
///     }
/// }
/// ```
///
/// The generated enum serializes as its name and deserializes through
/// [`Variant::from_name`], so unknown names in a site file become the default.
macro_rules! variants {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal, default $default:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::variant::Variant for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                <Self as $crate::variant::Variant>::from_name(&name)
            }
        }

        impl From<$name> for String {
            fn from(variant: $name) -> Self {
                $crate::variant::Variant::name(variant).to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::variant::Variant::name(*self))
            }
        }
    };
}

pub(crate) use variants;
