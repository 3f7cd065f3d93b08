use crate::api::UserApi;
use crate::domain::model::{ApiResponse, Credential};
use crate::domain::ports::Transport;
use crate::session::state::{Session, UserProfile};
use crate::utils::error::{ClientError, Result};
use serde_json::{json, Value};

fn token_from(response: &ApiResponse) -> Option<String> {
    let data: Value = response.data_as().ok()?;
    data.get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn require_credential(session: &Session, action: &str) -> Result<Credential> {
    session
        .credential()
        .cloned()
        .ok_or_else(|| ClientError::InvalidTransition {
            from: session.state().name().to_string(),
            action: action.to_string(),
        })
}

/// Exchanges username/password for a token and moves the session to authenticated.
/// Any failure leaves the session anonymous.
pub async fn login<T>(
    session: &mut Session,
    api: &UserApi<T>,
    username: &str,
    password: &str,
) -> Result<()>
where
    T: Transport<Response = ApiResponse>,
    T::Error: Into<ClientError>,
{
    session.begin_login()?;

    let credentials = json!({ "username": username.trim(), "password": password });
    let response = match api.login(credentials).await {
        Ok(response) => response,
        Err(e) => {
            session.fail_login()?;
            return Err(e.into());
        }
    };

    match token_from(&response) {
        Some(token) => {
            tracing::info!("Logged in as {}", username.trim());
            session.complete_login(Credential::new(token))
        }
        None => {
            session.fail_login()?;
            Err(ClientError::verification("Login response did not contain a token."))
        }
    }
}

pub async fn fetch_profile<T>(session: &mut Session, api: &UserApi<T>) -> Result<UserProfile>
where
    T: Transport<Response = ApiResponse>,
    T::Error: Into<ClientError>,
{
    let credential = require_credential(session, "fetch profile")?;
    let response = api.get_info(credential).await.map_err(Into::<ClientError>::into)?;

    if response.data_is_empty() {
        return Err(ClientError::verification(
            "Verification failed, please Login again.",
        ));
    }

    let profile: UserProfile = response.data_as()?;
    session.attach_profile(profile.clone())?;
    Ok(profile)
}

/// The session is only cleared once the backend acknowledged the logout.
pub async fn logout<T>(session: &mut Session, api: &UserApi<T>) -> Result<()>
where
    T: Transport<Response = ApiResponse>,
    T::Error: Into<ClientError>,
{
    let credential = require_credential(session, "log out")?;
    api.logout(credential).await.map_err(Into::<ClientError>::into)?;
    session.logout()?;
    tracing::debug!("Session cleared");
    Ok(())
}
