// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Explicit session context for API-calling code.

use reqwest::RequestBuilder;

use crate::config::AuthMethod;

/// Credentials for the booking backend.
///
/// Login code constructs a `Session` and hands it to the client; logging
/// out means calling [`Session::logout`] (or dropping the client). There is
/// no ambient global auth state anywhere in this crate.
#[derive(Debug, Clone, Default)]
pub struct Session {
    auth: AuthMethod,
}

impl Session {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            auth: AuthMethod::None,
        }
    }

    /// Creates a session with a bearer token.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            auth: AuthMethod::Bearer {
                token: token.into(),
            },
        }
    }

    /// Creates a session with basic credentials.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth: AuthMethod::Basic {
                username: username.into(),
                password: password.into(),
            },
        }
    }

    /// Creates a session from a configured [`AuthMethod`].
    #[must_use]
    pub const fn from_auth(auth: AuthMethod) -> Self {
        Self { auth }
    }

    /// Clears the credentials, leaving an anonymous session.
    pub fn logout(&mut self) {
        self.auth = AuthMethod::None;
    }

    /// Whether the session carries credentials.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self.auth, AuthMethod::None)
    }

    /// Applies the session's credentials to an outgoing request.
    pub(crate) fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            AuthMethod::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthMethod::Bearer { token } => req.bearer_auth(token),
            AuthMethod::None => req,
        }
    }
}
