//! Session lifecycle: restore, login, logout, role switching and profile
//! updates, each persisted through [`SessionStorage`].

use crate::access::RoleAccess;
use crate::errors::SessionError;
use crate::storage::SessionStorage;
use crate::store::KeyValueStore;
use chrono::Utc;
use eduflow_config::FeatureFlags;
use eduflow_core::{PermissionResolver, Role};
use eduflow_models::{LoginRequest, UpdateProfileDto, User, UserId};
use tracing::{info, warn};
use validator::Validate;

const MOCK_AVATAR_URL: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150";

/// The signed-in user and their token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: User,
    pub token: String,
}

/// Resolves credentials into a token and a user.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, request: &LoginRequest) -> Result<(String, User), SessionError>;
}

/// Accepts any credentials and derives the identity from the email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, request: &LoginRequest) -> Result<(String, User), SessionError> {
        let (name, role, department) = match request.email.as_str() {
            "admin@school.com" => ("Admin User", Role::OrgAdmin, None),
            "hod@school.com" => (
                "Dr. Smith (HOD)",
                Role::HeadOfDepartment,
                Some("Computer Science".to_string()),
            ),
            _ => ("John Student", Role::Student, None),
        };

        let user = User {
            id: UserId::from_u128(1),
            name: name.to_string(),
            email: request.email.clone(),
            avatar: Some(MOCK_AVATAR_URL.to_string()),
            department,
            role,
        };
        let token = format!("mock_jwt_token_{}", Utc::now().timestamp_millis());

        Ok((token, user))
    }
}

pub struct SessionManager<S> {
    storage: SessionStorage<S>,
    features: FeatureFlags,
    authenticator: Box<dyn Authenticator>,
    state: Option<AuthState>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// A signed-out session over `store`, authenticating with [`MockAuthenticator`].
    pub fn new(store: S, features: FeatureFlags) -> Self {
        Self {
            storage: SessionStorage::new(store),
            features,
            authenticator: Box::new(MockAuthenticator),
            state: None,
        }
    }

    #[must_use]
    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Box::new(authenticator);
        self
    }

    /// Load a previously persisted session.
    ///
    /// Returns `Ok(true)` when a token and user were found. A stored role key
    /// takes precedence over the role inside the stored user. If that key is
    /// not a known role the session stays signed out and the error is returned.
    pub fn restore(&mut self) -> Result<bool, SessionError> {
        self.state = None;

        let (Some(token), Some(user)) = (self.storage.get_token()?, self.storage.get_user()?) else {
            return Ok(false);
        };

        let role = match self.storage.get_role() {
            Ok(stored) => stored.unwrap_or(user.role),
            Err(e) => {
                warn!(error = %e, user = %user.email, "Stored role rejected; session left signed out");
                return Err(e);
            }
        };

        info!(user = %user.email, role = %role, "Session restored");
        self.state = Some(AuthState {
            user: user.with_role(role),
            token,
        });
        Ok(true)
    }

    pub fn login(&mut self, request: LoginRequest) -> Result<&User, SessionError> {
        request.validate()?;

        let (token, user) = self.authenticator.authenticate(&request).inspect_err(|e| {
            warn!(email = %request.email, error = %e, "Login failed");
        })?;

        self.storage.set_token(&token)?;
        self.storage.set_user(&user)?;
        self.storage.set_role(user.role)?;

        info!(user = %user.email, role = %user.role, "User logged in");
        Ok(&self.state.insert(AuthState { user, token }).user)
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.clear_all()?;
        if let Some(state) = self.state.take() {
            info!(user = %state.user.email, "User logged out");
        }
        Ok(())
    }

    /// Change the signed-in user's active role.
    pub fn switch_role(&mut self, role: Role) -> Result<(), SessionError> {
        if !self.features.role_switching {
            warn!(role = %role, "Role switch attempted while disabled");
            return Err(SessionError::RoleSwitchingDisabled);
        }
        let state = self.state.as_mut().ok_or(SessionError::NotAuthenticated)?;

        let previous = state.user.role;
        let updated = state.user.clone().with_role(role);

        // Role key first: `restore` prefers it over the stored user.
        self.storage.set_role(role)?;
        if let Err(e) = self.storage.set_user(&updated) {
            if let Err(rollback) = self.storage.set_role(previous) {
                warn!(error = %rollback, role = %previous, "Failed to restore previous role key");
            }
            return Err(e.into());
        }
        state.user = updated;

        info!(user = %state.user.email, from = %previous, to = %role, "Role switched");
        Ok(())
    }

    pub fn update_profile(&mut self, changes: UpdateProfileDto) -> Result<&User, SessionError> {
        changes.validate()?;
        let state = self.state.as_mut().ok_or(SessionError::NotAuthenticated)?;

        let mut updated = state.user.clone();
        changes.apply_to(&mut updated);
        self.storage.set_user(&updated)?;
        state.user = updated;

        info!(user = %state.user.email, "Profile updated");
        Ok(&state.user)
    }

    pub fn user(&self) -> Option<&User> {
        self.state.as_ref().map(|state| &state.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.as_ref().map(|state| state.user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_some()
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    /// Role queries for the current session.
    pub fn access<'a>(&self, resolver: &'a PermissionResolver) -> RoleAccess<'a> {
        RoleAccess::new(self.role(), resolver)
    }

    pub fn into_store(self) -> S {
        self.storage.into_inner()
    }
}
