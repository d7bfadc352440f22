use http::{HeaderValue, Uri};

use crate::CallbackError;

/// Configuration for [`DefaultCasCallback`](crate::DefaultCasCallback).
///
/// Holds the URL a successfully authenticated browser is redirected to and whether the
/// handler emits a debug line before doing so. Immutable once constructed; clone it freely
/// across tasks.
#[derive(Clone, Debug)]
pub struct CallbackConfig {
    success_url: Uri,
    location: HeaderValue,
    debug: bool,
}

impl CallbackConfig {
    /// Parse and validate the success-redirect URL.
    ///
    /// The URL is also pre-rendered as a `Location` header value here, so emitting the
    /// redirect cannot fail once the configuration has been accepted.
    pub fn new(success_url: &str) -> Result<Self, CallbackError> {
        let success_url: Uri = success_url.parse()?;
        let location = HeaderValue::from_str(&success_url.to_string())?;
        Ok(Self {
            success_url,
            location,
            debug: false,
        })
    }

    /// Switch the debug line logged before the success redirect. Off by default.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn success_url(&self) -> &Uri {
        &self.success_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub(crate) fn location(&self) -> &HeaderValue {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_url() {
        let config = CallbackConfig::new("https://app.example.com/home").unwrap();
        assert_eq!(config.success_url(), "https://app.example.com/home");
        assert_eq!(config.location(), "https://app.example.com/home");
        assert!(!config.debug());
    }

    #[test]
    fn rejects_unparsable_url() {
        assert!(matches!(
            CallbackConfig::new("not a url"),
            Err(CallbackError::InvalidSuccessUrl(_))
        ));
    }

    #[test]
    fn with_debug_flips_the_flag() {
        let config = CallbackConfig::new("https://app.example.com/home")
            .unwrap()
            .with_debug(true);
        assert!(config.debug());
    }
}
