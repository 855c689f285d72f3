//! Precondition checks that raise a typed error chosen by the caller.
//!
//! The call site names only the error kind; construction goes through the
//! kind's [`ErrorKind`] constructors, resolved at compile time:
//!
//! ```
//! use sayaka_common::shared::dispatch::{requires, InvalidArgument};
//!
//! fn page(n: u32) -> Result<u32, InvalidArgument> {
//!     requires::<InvalidArgument>(n > 0, Some("page starts at 1"))?;
//!     Ok(n - 1)
//! }
//! assert_eq!(page(0).unwrap_err().to_string(), "page starts at 1");
//! ```

use crate::domain::ConfigurationFault;

/// A category of failure that can be built from its type alone.
pub trait ErrorKind: Sized {
    /// Stable name of the kind, used in fault reports.
    const NAME: &'static str;

    /// The kind's default, message-less form.
    fn bare() -> Self;

    /// The kind carrying `message`. Kinds that declare no message form keep
    /// the default, which reports a [`ConfigurationFault`].
    fn with_message(_message: String) -> Result<Self, ConfigurationFault> {
        Err(ConfigurationFault::MissingMessageConstructor { kind: Self::NAME })
    }
}

/// Builds an error of kind `K`: `None` uses [`ErrorKind::bare`], `Some` uses
/// [`ErrorKind::with_message`]. Never both.
///
/// # Panics
///
/// If `message` is given and `K` has no message form. That is a defect in the
/// kind's declaration, not a recoverable condition.
pub fn throws<K: ErrorKind>(message: Option<&str>) -> K {
    match message {
        None => K::bare(),
        Some(m) => match K::with_message(m.to_string()) {
            Ok(err) => err,
            Err(fault) => panic!("{}", fault),
        },
    }
}

/// `Ok(())` when `condition` holds, otherwise `Err(throws::<K>(message))`.
pub fn requires<K: ErrorKind>(condition: bool, message: Option<&str>) -> Result<(), K> {
    if condition {
        Ok(())
    } else {
        Err(throws(message))
    }
}

/// Declares an error kind struct with a default message.
///
/// `error_kind!(pub Name, "default")` gets both constructors;
/// `error_kind!(bare pub Name, "default")` only gets [`ErrorKind::bare`].
#[macro_export]
macro_rules! error_kind {
    (bare $(#[$meta:meta])* $vis:vis $name:ident, $default:expr $(,)?) => {
        $crate::error_kind!(@common $(#[$meta])* $vis $name, $default);

        impl $crate::shared::dispatch::ErrorKind for $name {
            const NAME: &'static str = stringify!($name);

            fn bare() -> Self {
                Self { message: None }
            }
        }
    };
    (@common $(#[$meta:meta])* $vis:vis $name:ident, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            message: Option<String>,
        }

        impl $name {
            pub const DEFAULT_MESSAGE: &'static str = $default;

            pub fn message(&self) -> &str {
                self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
            }

            /// True when built with an explicit message.
            pub fn has_custom_message(&self) -> bool {
                self.message.is_some()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.message())
            }
        }

        impl ::std::error::Error for $name {}
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $default:expr $(,)?) => {
        $crate::error_kind!(@common $(#[$meta])* $vis $name, $default);

        impl $crate::shared::dispatch::ErrorKind for $name {
            const NAME: &'static str = stringify!($name);

            fn bare() -> Self {
                Self { message: None }
            }

            fn with_message(
                message: String,
            ) -> ::std::result::Result<Self, $crate::domain::ConfigurationFault> {
                Ok(Self {
                    message: Some(message),
                })
            }
        }
    };
}

error_kind!(
    /// A command argument is missing or malformed.
    pub InvalidArgument,
    "invalid argument"
);

error_kind!(
    /// The invoker lacks the authority a command needs.
    pub PermissionDenied,
    "permission denied"
);

error_kind!(
    /// An operation ran in a state that forbids it.
    pub IllegalState,
    "illegal state"
);

error_kind!(
    bare
    /// A branch that must never run. Carries no message.
    pub Unreachable,
    "entered unreachable code"
);
