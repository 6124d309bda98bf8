use std::fmt::{self, Debug, Formatter};

use crate::configuration::{error::ConfigurationError, traits::ResolvableConfiguration};


const REDACTED: &str = "<redacted>";


/// Credentials as they came out of the flag/environment merge.
/// Any of them may still be empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UnresolvedCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

/// Credentials for the Netatmo API. All four fields are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}


impl ResolvableConfiguration for UnresolvedCredentials {
    type Resolved = Credentials;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        if self.client_id.is_empty() {
            return Err(ConfigurationError::NoClientId);
        }
        if self.client_secret.is_empty() {
            return Err(ConfigurationError::NoClientSecret);
        }
        if self.username.is_empty() {
            return Err(ConfigurationError::NoUsername);
        }
        if self.password.is_empty() {
            return Err(ConfigurationError::NoPassword);
        }

        Ok(Credentials {
            client_id: self.client_id,
            client_secret: self.client_secret,
            username: self.username,
            password: self.password,
        })
    }
}

impl Credentials {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}


fn redact_unless_empty(value: &str) -> &str {
    if value.is_empty() {
        ""
    } else {
        REDACTED
    }
}

impl Debug for UnresolvedCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnresolvedCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &redact_unless_empty(&self.client_secret))
            .field("username", &self.username)
            .field("password", &redact_unless_empty(&self.password))
            .finish()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UnresolvedCredentials {
        UnresolvedCredentials {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            username: "username".to_string(),
            password: "password".to_string(),
        }
    }

    #[test]
    fn complete_credentials_resolve() {
        let credentials = complete().resolve().unwrap();

        assert_eq!(credentials.client_id(), "id");
        assert_eq!(credentials.client_secret(), "secret");
        assert_eq!(credentials.username(), "username");
        assert_eq!(credentials.password(), "password");
    }

    #[test]
    fn first_empty_field_wins() {
        let credentials = UnresolvedCredentials {
            client_secret: String::new(),
            password: String::new(),
            ..complete()
        };

        assert!(matches!(
            credentials.resolve(),
            Err(ConfigurationError::NoClientSecret)
        ));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let resolved = format!("{:?}", complete().resolve().unwrap());
        let unresolved = format!("{:?}", complete());

        for output in [resolved, unresolved] {
            assert!(output.contains("username"));
            assert!(!output.contains("\"secret\""));
            assert!(!output.contains("\"password\""));
        }
    }
}
