use crate::domain::model::Credential;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated {
        credential: Credential,
        profile: Option<UserProfile>,
        since: DateTime<Utc>,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Anonymous => "anonymous",
            SessionState::Authenticating => "authenticating",
            SessionState::Authenticated { .. } => "authenticated",
        }
    }
}

/// Login state of one user. The credential lives here and is handed to requests
/// explicitly; nothing is stored globally.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn credential(&self) -> Option<&Credential> {
        match &self.state {
            SessionState::Authenticated { credential, .. } => Some(credential),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated { profile, .. } => profile.as_ref(),
            _ => None,
        }
    }

    fn invalid(&self, action: &str) -> ClientError {
        ClientError::InvalidTransition {
            from: self.state.name().to_string(),
            action: action.to_string(),
        }
    }

    pub fn begin_login(&mut self) -> Result<()> {
        match self.state {
            SessionState::Anonymous => {
                self.state = SessionState::Authenticating;
                Ok(())
            }
            _ => Err(self.invalid("begin login")),
        }
    }

    pub fn complete_login(&mut self, credential: Credential) -> Result<()> {
        match self.state {
            SessionState::Authenticating => {
                self.state = SessionState::Authenticated {
                    credential,
                    profile: None,
                    since: Utc::now(),
                };
                Ok(())
            }
            _ => Err(self.invalid("complete login")),
        }
    }

    pub fn fail_login(&mut self) -> Result<()> {
        match self.state {
            SessionState::Authenticating => {
                self.state = SessionState::Anonymous;
                Ok(())
            }
            _ => Err(self.invalid("fail login")),
        }
    }

    pub fn attach_profile(&mut self, new_profile: UserProfile) -> Result<()> {
        if let SessionState::Authenticated { profile, .. } = &mut self.state {
            *profile = Some(new_profile);
            return Ok(());
        }
        Err(self.invalid("attach profile"))
    }

    pub fn logout(&mut self) -> Result<()> {
        match self.state {
            SessionState::Anonymous => Err(self.invalid("log out")),
            _ => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Drops the credential unconditionally.
    pub fn reset(&mut self) {
        self.state = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.state().name(), "anonymous");

        session.begin_login().unwrap();
        assert_eq!(session.state(), &SessionState::Authenticating);
        assert!(session.credential().is_none());

        session.complete_login(Credential::new("tok")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.credential().map(|c| c.as_str()), Some("tok"));
        assert!(session.profile().is_none());

        let profile = UserProfile {
            name: "alice".to_string(),
            ..UserProfile::default()
        };
        session.attach_profile(profile.clone()).unwrap();
        assert_eq!(session.profile(), Some(&profile));

        session.logout().unwrap();
        assert_eq!(session.state(), &SessionState::Anonymous);
    }

    #[test]
    fn test_out_of_order_transitions_are_rejected() {
        let mut session = Session::new();
        assert!(session.complete_login(Credential::new("x")).is_err());
        assert!(session.fail_login().is_err());
        assert!(session.attach_profile(UserProfile::default()).is_err());
        assert!(session.logout().is_err());

        session.begin_login().unwrap();
        let err = session.begin_login().unwrap_err();
        assert_eq!(err.to_string(), "Cannot begin login while session is authenticating");
    }

    #[test]
    fn test_failed_login_returns_to_anonymous() {
        let mut session = Session::new();
        session.begin_login().unwrap();
        session.fail_login().unwrap();
        assert_eq!(session.state(), &SessionState::Anonymous);
        session.begin_login().unwrap();
    }

    #[test]
    fn test_reset_always_succeeds() {
        let mut session = Session::new();
        session.reset();
        session.begin_login().unwrap();
        session.reset();
        assert_eq!(session.state(), &SessionState::Anonymous);
    }
}
