pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when calling the lookup functions.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client was configured with an invalid value, such as an empty token.
    Configuration,
    /// The request failed at the network layer or returned a non-success HTTP status.
    Transport,
    /// The response body was not valid JSON or did not have the expected shape.
    Decode,
    /// The service answered with its own error message.
    Service,
    /// The service answered with neither data nor an error message.
    EmptyResponse,
    /// A binary payload could not be decoded from its base64 text.
    Encoding,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    pub(crate) fn empty_response() -> Self {
        Self::new(ErrorKind::EmptyResponse, "No response from API")
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message attached to this error, if any.
    ///
    /// For [`ErrorKind::Service`] this is the text the service returned, unchanged.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Configuration => f.write_str("Configuration error")?,
            ErrorKind::Transport => f.write_str("Transport error")?,
            ErrorKind::Decode => f.write_str("Decode error")?,
            ErrorKind::Service => f.write_str("Service error")?,
            ErrorKind::EmptyResponse => f.write_str("Empty response error")?,
            ErrorKind::Encoding => f.write_str("Encoding error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[test]
fn display_includes_kind_and_message() {
    let err = Error::new(ErrorKind::Service, "Invalid token");
    assert_eq!("Service error: Invalid token", err.to_string());
    assert_eq!(Some("Invalid token"), err.message());
}
