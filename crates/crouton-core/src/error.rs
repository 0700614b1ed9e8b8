mod adhoc;
mod driver;
mod field_is_relationship;
mod field_not_mapped;
mod invalid_schema;
mod not_mapped;
mod projection_type_mismatch;
mod recursive_projection;
mod relationship_not_mapped;

use adhoc::AdhocError;
use driver::DriverError;
use field_is_relationship::FieldIsRelationshipError;
use field_not_mapped::FieldNotMappedError;
use invalid_schema::InvalidSchemaError;
use not_mapped::NotMappedError;
use projection_type_mismatch::ProjectionTypeMismatchError;
use recursive_projection::RecursiveProjectionError;
use relationship_not_mapped::RelationshipNotMappedError;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Crouton.
///
/// Errors are one word wide and cheap to clone. Structured kinds are created
/// through the constructors on this type (`Error::field_not_mapped`, ...) and
/// inspected with the matching `is_*` predicates.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut inner = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) if inner.cause.is_none() => inner,
            // The consequent is shared or already chained; flatten it into a
            // message so the new cause can be attached.
            Ok(inner) => ErrorInner::flattened(Error {
                inner: Arc::new(inner),
            }),
            Err(shared) => ErrorInner::flattened(Error { inner: shared }),
        };
        inner.cause = Some(self);
        Error {
            inner: Arc::new(inner),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.inner.cause {
            err = cause;
        }
        err
    }
}

impl ErrorInner {
    fn flattened(err: Error) -> ErrorInner {
        ErrorInner {
            kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
            cause: None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    NotMapped(NotMappedError),
    FieldNotMapped(FieldNotMappedError),
    RelationshipNotMapped(RelationshipNotMappedError),
    FieldIsRelationship(FieldIsRelationshipError),
    RecursiveProjection(RecursiveProjectionError),
    ProjectionTypeMismatch(ProjectionTypeMismatchError),
    InvalidSchema(InvalidSchemaError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            NotMapped(err) => core::fmt::Display::fmt(err, f),
            FieldNotMapped(err) => core::fmt::Display::fmt(err, f),
            RelationshipNotMapped(err) => core::fmt::Display::fmt(err, f),
            FieldIsRelationship(err) => core::fmt::Display::fmt(err, f),
            RecursiveProjection(err) => core::fmt::Display::fmt(err, f),
            ProjectionTypeMismatch(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
