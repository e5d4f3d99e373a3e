//! Macros for ergonomic identifier definitions.

/// Generate a closed identifier enum with explicit wire names.
///
/// Each variant serializes as its label, so the enum can key a JSON
/// configuration directly. The generated type implements
/// [`Identifier`](crate::core::Identifier) and `Display` (both yield the
/// label) and exposes every variant through an associated `ALL` constant.
///
/// # Example
///
/// ```
/// use waypoint::core::Identifier;
/// use waypoint::identifier_enum;
///
/// identifier_enum! {
///     pub enum Mood {
///         Normal = "normal",
///         Busy = "busy",
///     }
/// }
///
/// assert_eq!(Mood::Busy.name(), "busy");
/// assert_eq!(Mood::ALL, &[Mood::Normal, Mood::Busy]);
/// ```
#[macro_export]
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Identifier for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Identifier::name(self))
            }
        }
    };
}
