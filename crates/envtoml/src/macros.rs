//! The `record!` macro.

/// Declare a struct that decodes from a document.
///
/// The struct is emitted as written, together with [`Record`](crate::Record)
/// and [`FromTree`](crate::FromTree) impls. Each `pub` field is read from the
/// key derived from its name (see [`to_snake_case`](crate::to_snake_case)) or
/// from an explicit `#[key = "..."]`, which must follow any doc comments.
/// Fields that are private or have restricted visibility are skipped: they
/// take `Default::default()` in [`decode`](crate::decode) and keep their
/// current value in [`load`](crate::load).
///
/// ```
/// envtoml::record! {
///     #[derive(Debug)]
///     pub struct Database {
///         /// Login user.
///         pub user: String,
///         #[key = "pass"]
///         pub password: String,
///         pub ports: Vec<u16>,
///         cache: Vec<String>,
///     }
/// }
///
/// let document: envtoml::Document = r#"
///     user = "admin"
///     pass = "secret"
///     ports = [5432]
///     [development]
///     user = "root"
/// "#
/// .parse()
/// .unwrap();
/// let db: Database = envtoml::decode(&document, "development").unwrap();
/// assert_eq!(db.user, "root");
/// assert_eq!(db.password, "secret");
/// ```
#[macro_export]
macro_rules! record {
    (@munch [$($meta:tt)*] [$vis:vis] $name:ident [$($done:tt)*]
        $(#[doc = $doc:literal])*
        $(#[key = $key:literal])?
        pub $field:ident : $ty:ty
        $(, $($rest:tt)*)?
    ) => {
        $crate::record!(@munch [$($meta)*] [$vis] $name
            [$($done)* { [$(#[doc = $doc])*] [pub] $field [$ty] Visible [$($key)?] }]
            $($($rest)*)?
        );
    };

    (@munch [$($meta:tt)*] [$vis:vis] $name:ident [$($done:tt)*]
        $(#[doc = $doc:literal])*
        $(#[key = $key:literal])?
        pub ($($restrict:tt)*) $field:ident : $ty:ty
        $(, $($rest:tt)*)?
    ) => {
        $crate::record!(@munch [$($meta)*] [$vis] $name
            [$($done)* { [$(#[doc = $doc])*] [pub($($restrict)*)] $field [$ty] Hidden [$($key)?] }]
            $($($rest)*)?
        );
    };

    (@munch [$($meta:tt)*] [$vis:vis] $name:ident [$($done:tt)*]
        $(#[doc = $doc:literal])*
        $(#[key = $key:literal])?
        $field:ident : $ty:ty
        $(, $($rest:tt)*)?
    ) => {
        $crate::record!(@munch [$($meta)*] [$vis] $name
            [$($done)* { [$(#[doc = $doc])*] [] $field [$ty] Hidden [$($key)?] }]
            $($($rest)*)?
        );
    };

    (@munch [$($meta:tt)*] [$vis:vis] $name:ident
        [$({
            [$($doc:tt)*] [$($fvis:tt)*] $field:ident [$ty:ty] $visibility:ident [$($key:literal)?]
        })*]
    ) => {
        $($meta)*
        $vis struct $name {
            $($($doc)* $($fvis)* $field: $ty,)*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::FieldDescriptor] = &[
                $($crate::FieldDescriptor::new(
                    stringify!($field),
                    $crate::record!(@tag $($key)?),
                    $crate::Visibility::$visibility,
                ),)*
            ];

            fn decode_table(
                table: &$crate::toml::Table,
                env: &str,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                let mut cursor = $crate::FieldCursor::new::<Self>(table, env);
                ::std::result::Result::Ok(Self {
                    $($field: $crate::record!(@take cursor $visibility),)*
                })
            }

            fn decode_into(
                &mut self,
                table: &$crate::toml::Table,
                env: &str,
            ) -> ::std::result::Result<(), $crate::DecodeError> {
                let mut cursor = $crate::FieldCursor::new::<Self>(table, env);
                $($crate::record!(@assign cursor self.$field, $visibility);)*
                ::std::result::Result::Ok(())
            }
        }

        impl $crate::FromTree for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Record;

            fn from_node(
                node: &$crate::toml::Value,
                env: &str,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                $crate::decode_record(node, env)
            }
        }
    };

    (@tag) => {
        ::std::option::Option::None
    };
    (@tag $key:literal) => {
        ::std::option::Option::Some($key)
    };

    (@take $cursor:ident Visible) => {
        $cursor.next_field()?
    };
    (@take $cursor:ident Hidden) => {{
        $cursor.skip_field();
        ::std::default::Default::default()
    }};

    (@assign $cursor:ident $target:expr, Visible) => {
        $target = $cursor.next_field()?;
    };
    (@assign $cursor:ident $target:expr, Hidden) => {
        $cursor.skip_field();
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@munch [$(#[$meta])*] [$vis] $name [] $($body)*);
    };
}
