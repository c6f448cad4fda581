//! Error types for vindex registration, creation and lookup
//!
//! All failures surfaced by this workspace are represented by [`VindexError`].
//! We use `thiserror` for the `Display` and `Error` implementations.
//!
//! A mapping miss is never an error: unique vindexes report it as `None`,
//! non-unique vindexes as an empty keyspace id set.

use thiserror::Error;

/// Result type alias for vindex operations
pub type VindexResult<T> = std::result::Result<T, VindexError>;

/// Coarse classification of a [`VindexError`]
///
/// Callers such as the schema loader or the planner branch on the kind
/// rather than on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vindex type was registered twice (initialization defect)
    AlreadyRegistered,
    /// No constructor is registered under the requested vindex type
    NotFound,
    /// Configuration or input rejected by a constructor or accessor
    Validation,
    /// The cursor or the storage behind it failed
    Storage,
    /// The request deadline passed
    Timeout,
    /// The request was cancelled
    Cancelled,
    /// The vindex lacks the requested capability
    Unsupported,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::AlreadyRegistered => "already_registered",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::Storage => "storage",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Unsupported => "unsupported",
        };
        f.write_str(s)
    }
}

/// Errors produced by the vindex registry, constructors and capability calls
///
/// # Categories
///
/// | Kind | Variants |
/// |------|----------|
/// | AlreadyRegistered | `AlreadyRegistered` |
/// | NotFound | `NotFound` |
/// | Validation | `MissingParam`, `InvalidParam`, `InvalidValue`, `InvalidCapabilities`, `Config` |
/// | Storage | `Storage` |
/// | Timeout | `DeadlineExceeded` |
/// | Cancelled | `Cancelled` |
/// | Unsupported | `Unsupported` |
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VindexError {
    /// A constructor is already registered under this vindex type
    #[error("vindex type {vindex_type} is already registered")]
    AlreadyRegistered {
        /// The duplicated type name
        vindex_type: String,
    },

    /// No constructor is registered under this vindex type
    #[error("vindex type {vindex_type} not found")]
    NotFound {
        /// The requested type name
        vindex_type: String,
    },

    /// A required constructor parameter is absent
    #[error("vindex {vindex}: missing required param '{param}'")]
    MissingParam {
        /// Instance name being constructed
        vindex: String,
        /// Parameter name
        param: String,
    },

    /// A constructor parameter is present but unusable
    #[error("vindex {vindex}: invalid param '{param}': {reason}")]
    InvalidParam {
        /// Instance name being constructed
        vindex: String,
        /// Parameter name
        param: String,
        /// Why the value was rejected
        reason: String,
    },

    /// An id or keyspace id could not be interpreted by the vindex
    #[error("vindex {vindex}: invalid value: {reason}")]
    InvalidValue {
        /// Instance name
        vindex: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A constructed vindex exposes a contradictory capability set
    #[error("vindex {vindex}: inconsistent capabilities: {reason}")]
    InvalidCapabilities {
        /// Instance name
        vindex: String,
        /// The violated rule
        reason: String,
    },

    /// Vindex configuration could not be read or parsed
    #[error("config error: {reason}")]
    Config {
        /// Details
        reason: String,
    },

    /// The cursor failed to execute a lookup query
    #[error("lookup failed: {reason}")]
    Storage {
        /// Storage-side failure description
        reason: String,
    },

    /// The request deadline passed before the call completed
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The request was cancelled
    #[error("request cancelled")]
    Cancelled,

    /// The vindex does not implement the requested capability
    #[error("vindex {vindex} does not support {capability}")]
    Unsupported {
        /// Instance name
        vindex: String,
        /// Capability name, e.g. "unique"
        capability: &'static str,
    },
}

impl VindexError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VindexError::AlreadyRegistered { .. } => ErrorKind::AlreadyRegistered,
            VindexError::NotFound { .. } => ErrorKind::NotFound,
            VindexError::MissingParam { .. }
            | VindexError::InvalidParam { .. }
            | VindexError::InvalidValue { .. }
            | VindexError::InvalidCapabilities { .. }
            | VindexError::Config { .. } => ErrorKind::Validation,
            VindexError::Storage { .. } => ErrorKind::Storage,
            VindexError::DeadlineExceeded => ErrorKind::Timeout,
            VindexError::Cancelled => ErrorKind::Cancelled,
            VindexError::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    /// Create a storage error from a cursor failure
    pub fn storage(reason: impl Into<String>) -> Self {
        VindexError::Storage {
            reason: reason.into(),
        }
    }

    /// Create a missing-parameter error
    pub fn missing_param(vindex: impl Into<String>, param: impl Into<String>) -> Self {
        VindexError::MissingParam {
            vindex: vindex.into(),
            param: param.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_param(
        vindex: impl Into<String>,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VindexError::InvalidParam {
            vindex: vindex.into(),
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-value error
    pub fn invalid_value(vindex: impl Into<String>, reason: impl Into<String>) -> Self {
        VindexError::InvalidValue {
            vindex: vindex.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        VindexError::Config {
            reason: reason.into(),
        }
    }

    /// True for the NotFound kind
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
