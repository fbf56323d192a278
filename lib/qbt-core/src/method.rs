//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// The WebUI API only ever uses `GET` and `POST`: reads go through query
/// parameters, mutations through form-encoded or multipart bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - query state.
    #[display("GET")]
    Get,
    /// POST method - mutate state.
    #[display("POST")]
    Post,
}

impl Method {
    /// Returns `true` if the method is safe (does not modify resources).
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            other => Err(crate::Error::InvalidRequest(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn safety() {
        assert!(Method::Get.is_safe());
        assert!(!Method::Post.is_safe());
    }

    #[test]
    fn http_round_trip() {
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
        assert_eq!(Method::try_from(http::Method::GET).ok(), Some(Method::Get));
        assert!(Method::try_from(http::Method::DELETE).is_err());
    }
}
