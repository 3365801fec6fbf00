//! Expansion of generated route tables.

/// Expands a generated route table
///
/// Every `"<id>" => Name ...;` line becomes a typed route struct (see
/// [`route!`]) and the whole block a `ROUTES` [`RouteMap`](crate::RouteMap).
/// A field may carry `as "key"` when the parameter name is not a usable
/// identifier; the key is then what the path resolver sees.
///
/// # Examples
///
/// ```
/// use routegen_runtime::{path, BasePath};
///
/// routegen_runtime::routes! {
///     /*MARKER*/
///     "/" => Root;
///     "/blog/[slug]" => BlogBySlug { slug: ::std::string::String = slug };
///     "/files/[file-name]" => FilesByFileName { file_name as "file-name": ::std::string::String = file_name };
///     "/items/[id=int]" => ItemsById { id: u32 = id.to_string() };
///     /*/MARKER*/
/// }
///
/// let resolver = BasePath::default();
/// assert_eq!(path(&resolver, &ItemsById::new(7)), "/items/7");
/// assert_eq!(path(&resolver, &FilesByFileName::new("a.txt".into())), "/files/a.txt");
/// assert_eq!(BlogBySlug::ID, "/blog/[slug]");
/// assert_eq!(ROUTES.prefixes(), vec!["/blog/*", "/files/*", "/items/*"]);
/// ```
#[macro_export]
macro_rules! routes {
    ($($id:literal => $name:ident $({ $($field:ident $(as $key:literal)? : $ty:ty = $value:expr),+ $(,)? })? ;)*) => {
        $(
            $crate::route!($id => $name $({ $($field $(as $key)? : $ty = $value),+ })?);
        )*

        /// Every generated route
        pub static ROUTES: $crate::RouteMap = $crate::RouteMap::new(&[
            $($crate::RouteEntry::new($id, &[$($($crate::__route_key!($field $(as $key)?)),+)?]),)*
        ]);
    };
}

/// Parameter key of a generated field: the explicit `as` key, else the field name
#[doc(hidden)]
#[macro_export]
macro_rules! __route_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident as $key:literal) => {
        $key
    };
}

/// Expands one generated route line into a struct implementing [`Route`](crate::Route)
///
/// Each field is paired with the expression producing its string value; the
/// expression sees the fields as references. Absent optional values are
/// left out of the path parameters. Every route also carries a free-form
/// `query` bag, so no field may itself be called `query`.
#[macro_export]
macro_rules! route {
    ($id:literal => $name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub query: $crate::Params,
        }

        impl $name {
            pub const ID: &'static str = $id;

            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_query(mut self, key: impl ::core::convert::Into<::std::string::String>, value: impl ::core::convert::Into<::std::string::String>) -> Self {
                self.query.insert(key.into(), value.into());
                self
            }
        }

        impl $crate::Route for $name {
            fn id(&self) -> &str {
                Self::ID
            }

            fn path_params(&self) -> $crate::Params {
                $crate::Params::new()
            }

            fn query(&self) -> &$crate::Params {
                &self.query
            }
        }
    };
    ($id:literal => $name:ident { $($field:ident $(as $key:literal)? : $ty:ty = $value:expr),+ $(,)? }) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $field: $ty,)+
            pub query: $crate::Params,
        }

        impl $name {
            pub const ID: &'static str = $id;

            pub fn new($($field: $ty),+) -> Self {
                Self {
                    $($field,)+
                    query: $crate::Params::new(),
                }
            }

            pub fn with_query(mut self, key: impl ::core::convert::Into<::std::string::String>, value: impl ::core::convert::Into<::std::string::String>) -> Self {
                self.query.insert(key.into(), value.into());
                self
            }
        }

        impl $crate::Route for $name {
            fn id(&self) -> &str {
                Self::ID
            }

            fn path_params(&self) -> $crate::Params {
                let Self { $($field,)+ .. } = self;
                $crate::__private::collect_params([
                    $(($crate::__route_key!($field $(as $key)?), $crate::IntoParam::into_param($value)),)+
                ])
            }

            fn query(&self) -> &$crate::Params {
                &self.query
            }
        }
    };
}
