//! Macros for reducing boilerplate when declaring record types
//!
//! `impl_record!` generates the [`Record`](crate::core::entity::Record) impl
//! for a struct, including its static field table.

/// Implement `Record` for a struct with an `id: Option<i64>` field
///
/// Each listed field becomes a logical field usable in filter and sort
/// expressions. Supported kinds:
/// - `optional_integer`: an `Option<i64>` field
/// - `integer`: an `i64` field
/// - `text`: a `String` field
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Team {
///     pub id: Option<i64>,
///     pub name: String,
///     pub size: i64,
/// }
///
/// impl_record!(Team, "team", "teams", {
///     id: optional_integer,
///     name: text,
///     size: integer,
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    (@field $builder:ident, $type:ident, $field:ident, optional_integer) => {
        $builder.integer(stringify!($field), |r: &$type| r.$field)
    };
    (@field $builder:ident, $type:ident, $field:ident, integer) => {
        $builder.integer(stringify!($field), |r: &$type| Some(r.$field))
    };
    (@field $builder:ident, $type:ident, $field:ident, text) => {
        $builder.text(stringify!($field), |r: &$type| r.$field.as_str())
    };
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        {
            $( $field:ident : $kind:ident ),* $(,)?
        }
    ) => {
        impl $crate::core::entity::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = Some(id);
            }

            fn field_table() -> &'static $crate::core::field::FieldTable<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::core::field::FieldTable<$type>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    let builder = $crate::core::field::FieldTable::<$type>::builder();
                    $( let builder = $crate::impl_record!(@field builder, $type, $field, $kind); )*
                    builder.build()
                })
            }
        }
    };
}
