//! Macros for declaring automaton identifiers.

/// Declare a fieldless enum usable as a state or input action type.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// and `Debug`, implements `Display`, and gets a `name()` method plus an
/// `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use fsa::symbol_enum;
///
/// symbol_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "Green");
/// assert_eq!(Light::ALL.len(), 3);
/// assert_eq!(Light::Yellow.to_string(), "Yellow");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
