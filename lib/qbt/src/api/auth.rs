//! Authentication endpoints (`auth/*`).

use qbt_core::{ApiError, Error, HttpClient, Method, Params, Result};

use crate::client::Client;

/// API methods under `auth`.
#[derive(Debug)]
pub struct AuthApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> AuthApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Log in and capture the session cookie.
    ///
    /// The server signals rejected credentials with HTTP 200 and a body
    /// other than `Ok.`, which surfaces here as [`Error::Login`] - never
    /// as a success.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("username", username);
        data.required_str("password", password);

        let response = self
            .client
            .request(Method::Post, "auth/login", None, Some(data))
            .await?;

        let status = response.status();
        let cookie = response.header("set-cookie").and_then(session_cookie);
        let body = response.into_body();

        if body.as_ref() != b"Ok." {
            let message = String::from_utf8_lossy(&body).into_owned();
            return Err(Error::Login(ApiError::new(status, message).with_body(body)));
        }

        match cookie {
            Some(cookie) => {
                tracing::debug!(username, "logged in");
                self.client.set_cookie(cookie);
                Ok(())
            }
            // Ok without a cookie: auth bypass is enabled for this host.
            None => Ok(()),
        }
    }

    /// Log out and invalidate the session cookie server-side.
    pub async fn logout(&self) -> Result<()> {
        self.client.post_form("auth/logout", Params::new()).await?;
        Ok(())
    }
}

/// First pair of a `Set-Cookie` value (`SID=...`), without attributes.
fn session_cookie(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    if pair.contains('=') {
        Some(pair.to_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_takes_the_first_pair() {
        assert_eq!(
            session_cookie("SID=abcdef123; HttpOnly; path=/").as_deref(),
            Some("SID=abcdef123")
        );
        assert_eq!(session_cookie("SID=abc").as_deref(), Some("SID=abc"));
        assert_eq!(session_cookie("garbage"), None);
    }
}
