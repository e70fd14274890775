//! Namespaced tags and key projections
//!
//! Every record in a backend is addressed by a tag of the form
//! `"{domain}.{key}"`. Keys are plain strings, or any value that projects to
//! one through [`SecretKey`].

use std::fmt;

use crate::error::{SecretStoreError, SecretStoreResult};

/// A validated backend lookup tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretTag(String);

impl SecretTag {
    /// Build the tag for `key` inside `domain`
    ///
    /// Fails with `InvalidInput` when the tag would contain a NUL character,
    /// which platform credential stores cannot represent.
    pub fn new(domain: &str, key: &str) -> SecretStoreResult<Self> {
        let tag = format!("{}.{}", domain, key);
        if tag.contains('\0') {
            return Err(SecretStoreError::InvalidInput(format!(
                "tag for key '{}' contains a NUL character",
                key.escape_default()
            )));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes handed to the backend
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for SecretTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value usable as a secret key through its raw string form
///
/// Implemented for `str` and `String`, and for enums declared with
/// [`secret_keys!`](crate::secret_keys).
pub trait SecretKey {
    /// The string the key stands for
    fn raw_key(&self) -> &str;
}

impl SecretKey for str {
    fn raw_key(&self) -> &str {
        self
    }
}

impl SecretKey for String {
    fn raw_key(&self) -> &str {
        self.as_str()
    }
}

impl<T: SecretKey + ?Sized> SecretKey for &T {
    fn raw_key(&self) -> &str {
        (**self).raw_key()
    }
}

/// Declare a fieldless enum whose variants stand for raw string keys
///
/// ```
/// use tagvault_core::{secret_keys, SecretKey};
///
/// secret_keys! {
///     pub enum AppSecret {
///         ApiToken => "api_token",
///         RefreshToken => "refresh_token",
///     }
/// }
///
/// assert_eq!(AppSecret::ApiToken.raw_key(), "api_token");
/// assert_eq!(AppSecret::RefreshToken.to_string(), "refresh_token");
/// ```
#[macro_export]
macro_rules! secret_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $raw:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::SecretKey for $name {
            fn raw_key(&self) -> &str {
                match self {
                    $( Self::$variant => $raw ),+
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                $crate::SecretKey::raw_key(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::SecretKey::raw_key(self))
            }
        }
    };
}
