use std::time::Duration;

use log::debug;
use url::Url;

pub(crate) mod operation;

use crate::{Error, ErrorKind};

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl Reply {
    /// A `200 OK` reply carrying `body`.
    #[must_use]
    pub fn ok<S: Into<String>>(body: S) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Returns the body of a successful reply.
    ///
    /// # Errors
    ///
    /// An [`Err`] of kind [`ErrorKind::Transport`] is returned for any status outside `2xx`,
    /// whatever the body holds.
    pub fn into_body(self) -> Result<String, Error> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(Error::new(
                ErrorKind::Transport,
                format!("HTTP status {}", self.status),
            ))
        }
    }
}

/// Blocking transport used to reach the service.
pub trait Client
where
    Self: Default,
{
    /// Issues a GET request to `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// An [`Err`] of kind [`ErrorKind::Transport`] is returned when the request cannot be
    /// completed. A non-success status is not an error at this level.
    fn fetch(&self, url: &Url, timeout: Duration) -> Result<Reply, Error>;
}

impl Client for reqwest::blocking::Client {
    fn fetch(&self, url: &Url, timeout: Duration) -> Result<Reply, Error> {
        // The response is consumed by `text`, which releases the connection on every path.
        let resp = self
            .get(url.clone())
            .timeout(timeout)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;
        let status = resp.status().as_u16();
        debug!("Service answered with status {status}");

        let body = resp
            .text()
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;

        Ok(Reply { status, body })
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_reply_producer, MockClient, NetworkErrorProducer, Producer, TIMEOUT_SINK,
    URL_SINK,
};

#[cfg(test)]
mod test {
    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Option<String>> = std::cell::RefCell::new(None);
        pub(crate) static TIMEOUT_SINK: std::cell::Cell<Option<Duration>> = std::cell::Cell::new(None);
    }

    /// Asserts that the expected URL is the same as the one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] will update the static thread local `URL_SINK` with the URL string that
    /// was passed to it, this allows for asserting that implementing functions or methods are
    /// building the correct URL.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<Reply> = EmptyArrayProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<Reply>> Client for MockClient<P> {
        fn fetch(&self, url: &Url, timeout: Duration) -> Result<Reply, Error> {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_string()));
            TIMEOUT_SINK.with(|sink| sink.set(Some(timeout)));
            P::produce()
        }
    }

    macro_rules! impl_reply_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<crate::api::Reply> for $producer {
                    fn produce() -> Result<crate::api::Reply, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_reply_producer! {
        EmptyArrayProducer => Ok(Reply::ok("[]")),
        NetworkErrorProducer => Err(Error::new(ErrorKind::Transport, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_reply_producer;
}
