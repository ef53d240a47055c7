// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session data handed over by the auth service.

use serde::{Deserialize, Serialize};

use comanda_core::types::UserId;

use crate::traits::SessionProvider;

/// A signed-in user as stored by the auth flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    /// Bearer token for backend calls, if the auth service issued one.
    #[serde(default)]
    pub token: Option<String>,
}

/// A session fixed at startup. `None` means nobody is signed in.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(Option<Session>);

impl StaticSession {
    pub fn new(session: Option<Session>) -> Self {
        Self(session)
    }

    pub fn signed_out() -> Self {
        Self(None)
    }

    pub fn token(&self) -> Option<&str> {
        self.0.as_ref().and_then(|s| s.token.as_deref())
    }
}

impl SessionProvider for StaticSession {
    fn current_user_id(&self) -> Option<UserId> {
        self.0
            .as_ref()
            .map(|s| s.user_id.clone())
            .filter(|id| !id.0.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_has_no_user() {
        assert!(StaticSession::signed_out().current_user_id().is_none());
    }

    #[test]
    fn empty_user_id_counts_as_signed_out() {
        let session = StaticSession::new(Some(Session {
            user_id: UserId(String::new()),
            token: None,
        }));
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn session_decodes_without_token() {
        let session: Session = serde_json::from_str(r#"{ "user_id": "u-42" }"#).expect("decode");
        let provider = StaticSession::new(Some(session));
        assert_eq!(provider.current_user_id(), Some(UserId("u-42".into())));
        assert!(provider.token().is_none());
    }
}
