/// Declares a flat record struct and implements [`Record`](crate::Record) for it.
///
/// Each field may carry a tag after `=>`, written the way RouterOS attributes are
/// described: `"<wire-key>[,<modifier>...]"`. Untagged fields use their lower-cased
/// name as the wire key. The descriptor table is resolved once per type, on first use.
///
/// Field types must implement [`Scalar`](crate::Scalar): `String`, `bool` or a
/// primitive integer.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{record, Record};
///
/// record! {
///     /// A GRE tunnel interface.
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct InterfaceGre {
///         pub id: String => ".id",
///         pub name: String => "name",
///         pub remote_address: String => "remote-address",
///         pub disabled: bool => "disabled",
///         pub keepalive: i64 => "keepalive,ttlToSeconds",
///         pub comment: String,
///     }
/// }
///
/// let keys: Vec<_> = InterfaceGre::descriptors()
///     .iter()
///     .map(|d| d.wire_key.as_str())
///     .collect();
/// assert_eq!(
///     keys,
///     vec![".id", "name", "remote-address", "disabled", "keepalive", "comment"]
/// );
/// ```
#[macro_export]
macro_rules! record {
    (@tag) => {
        ""
    };

    (@tag $tag:literal) => {
        $tag
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn descriptors() -> &'static [$crate::FieldDescriptor] {
                static DESCRIPTORS: ::std::sync::OnceLock<::std::vec::Vec<$crate::FieldDescriptor>> =
                    ::std::sync::OnceLock::new();
                DESCRIPTORS.get_or_init(|| {
                    ::std::vec![
                        $(
                            $crate::FieldDescriptor::resolve(
                                ::std::stringify!($field),
                                $crate::record!(@tag $($tag)?),
                                <$ty as $crate::Scalar>::KIND,
                            ),
                        )*
                    ]
                })
            }

            fn field(&self, name: &str) -> $crate::Result<$crate::Value> {
                match name {
                    $(
                        ::std::stringify!($field) => Ok($crate::Scalar::to_value(&self.$field)),
                    )*
                    _ => Err($crate::Error::unknown_field(name)),
                }
            }

            #[allow(unused_variables)]
            fn set_field(&mut self, name: &str, value: $crate::Value) -> $crate::Result<()> {
                match name {
                    $(
                        ::std::stringify!($field) => {
                            self.$field = <$ty as $crate::Scalar>::from_value(name, value)?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::Error::unknown_field(name)),
                }
            }
        }
    };
}
