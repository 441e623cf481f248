// credential.rs — Security credential value object.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_text, ValidationError};

/// A credential with its payload type erased for storage on a
/// [`Resource`](crate::Resource).
pub type AnyCredential = Credential<serde_json::Value>;

/// The security credential associated with a resource's identity.
///
/// A valid credential carries at least the identity token that represented
/// the initiator's access at the time the action was observed. The token
/// payload is generic — an opaque string, a structured assertion, or
/// anything serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential<T> {
    /// URI identifying what kind of token this is. Optional per the CADF
    /// schema, though without it a consumer cannot tell token types apart.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    credential_type: Option<String>,

    token: T,

    /// The trusted authority (a service) that can verify the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    authority: Option<String>,
}

impl<T> Credential<T> {
    /// A credential holding the given token. Requiredness of the token is
    /// presence — blank-checks only apply to string tokens, see
    /// [`Credential::from_text`].
    pub fn new(token: T) -> Self {
        Self {
            credential_type: None,
            token,
            authority: None,
        }
    }

    pub fn with_type(mut self, uri: impl Into<String>) -> Self {
        self.credential_type = Some(uri.into());
        self
    }

    pub fn with_authority(mut self, uri: impl Into<String>) -> Self {
        self.authority = Some(uri.into());
        self
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn credential_type(&self) -> Option<&str> {
        self.credential_type.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }
}

impl<T: Serialize> Credential<T> {
    /// Erase the token type for storage on a resource.
    pub fn into_any(self) -> Result<AnyCredential, ValidationError> {
        let token = serde_json::to_value(self.token).map_err(|source| {
            ValidationError::Serialization {
                field: "credential token",
                source,
            }
        })?;
        Ok(Credential {
            credential_type: self.credential_type,
            token,
            authority: self.authority,
        })
    }
}

impl Credential<String> {
    /// A string-token credential. String tokens must be non-blank.
    pub fn from_text(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        ensure_text("credential token", &token)?;
        Ok(Self::new(token))
    }
}
