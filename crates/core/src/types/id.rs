//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// IDs are ordered so "newest first" can sort by descending ID.
///
/// # Example
///
/// ```rust
/// # use gallery_core::define_id;
/// define_id!(AlbumId);
/// define_id!(PrintId);
///
/// let album_id = AlbumId::new(1);
/// let print_id = PrintId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: AlbumId = print_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Photos are the only catalog entity
define_id!(PhotoId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_id_ordering() {
        assert!(PhotoId::new(7) > PhotoId::new(1));
        assert_eq!(PhotoId::new(3).as_i32(), 3);
    }

    #[test]
    fn test_photo_id_serde_transparent() {
        let json = serde_json::to_string(&PhotoId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: PhotoId = serde_json::from_str("42").unwrap();
        assert_eq!(id, PhotoId::new(42));
    }

    #[test]
    fn test_photo_id_from_str() {
        assert_eq!(" 5 ".parse::<PhotoId>().unwrap(), PhotoId::new(5));
        assert!("five".parse::<PhotoId>().is_err());
    }
}
