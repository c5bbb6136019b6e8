//! Macros for domain enum conversions and error classification
//!
//! Two pieces of boilerplate repeat across the workspace: wire-form
//! conversions for id-style enums (Display + FromStr against the exact
//! type-id strings) and `ErrorClassification` implementations for module
//! errors that embed `DomainError`. Both are generated here.
//!
//! # Example
//!
//! ```rust
//! use deckname_domain::impl_type_id_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Postal,
//!     Electronic,
//! }
//!
//! impl_type_id_conversions!(Channel {
//!     Postal => "POSTAL",
//!     Electronic => "ELECTRONIC",
//! });
//! ```

/// Implements Display and FromStr traits for type-id enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their exact id strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their id strings
///   (conventionally SCREAMING_SNAKE_CASE)
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "EMAIL", "email", "Email" all work)
/// - Exact id string output
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_type_id_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

/// Macro to implement ErrorClassification by delegating to DomainError
///
/// Module-specific errors embed `DomainError` through a transparent variant
/// and delegate classification for it; every other variant states its own
/// retryability, severity, and criticality inline.
///
/// # Usage
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error)]
/// pub enum MyError {
///     #[error("Module-specific error: {0}")]
///     Specific(String),
///
///     #[error(transparent)]
///     Domain(#[from] DomainError),
/// }
///
/// impl_error_classification!(MyError, Domain,
///     Specific(_) => {
///         retryable: false,
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $domain_variant:ident
        $(,
            $variant:pat => {
                retryable: $retryable:expr,
                severity: $severity:expr,
                critical: $critical:expr
                $(, retry_after: $retry_after:expr)?
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::errors::ErrorClassification for $error_type {
            fn is_retryable(&self) -> bool {
                match self {
                    Self::$domain_variant(e) => e.is_retryable(),
                    $(
                        $variant => $retryable,
                    )*
                }
            }

            fn severity(&self) -> $crate::errors::ErrorSeverity {
                match self {
                    Self::$domain_variant(e) => e.severity(),
                    $(
                        $variant => $severity,
                    )*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$domain_variant(e) => e.is_critical(),
                    $(
                        $variant => $critical,
                    )*
                }
            }

            fn retry_after(&self) -> Option<std::time::Duration> {
                match self {
                    Self::$domain_variant(e) => e.retry_after(),
                    $(
                        $(
                            $variant => $retry_after,
                        )?
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}
