// resource.rs — CADF resource value object.
//
// A resource describes one party of an audit event (who acted, what was
// acted on, who observed it). Resources are immutable once built and
// cheap to clone, so one value may serve several roles on the same event.

use serde::{Deserialize, Serialize};

use cadf_taxonomy::ResourceType;

use crate::attachment::AnyAttachment;
use crate::credential::AnyCredential;
use crate::error::{ensure_text, required, ValidationError};

/// Base URI of the CADF resource taxonomy; relative type URIs are
/// qualified against it.
const FULL_ROOT_URI: &str = "http://schemas.dmtf.org/cloud/audit/1.0/resource";

/// A resource referenced by an audit event as initiator, target, or
/// observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    id: String,

    /// A resource taxonomy path (`compute/machine/vm`) or an absolute
    /// external URI.
    #[serde(rename = "typeURI")]
    type_uri: String,

    /// Optional local name for the resource (not necessarily unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    credential: Option<AnyCredential>,

    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<AnyAttachment>>,
}

impl Resource {
    pub fn builder() -> ResourceBuilder {
        ResourceBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_uri(&self) -> &str {
        &self.type_uri
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn credential(&self) -> Option<&AnyCredential> {
        self.credential.as_ref()
    }

    pub fn attachments(&self) -> Option<&[AnyAttachment]> {
        self.attachments.as_deref()
    }

    /// The fully-qualified form of this resource's type URI.
    pub fn full_type_uri(&self) -> String {
        Self::qualify_type_uri(&self.type_uri)
    }

    /// Qualify a type URI against the CADF resource root, unless it is
    /// already absolute.
    pub fn qualify_type_uri(type_uri: &str) -> String {
        if type_uri.starts_with(FULL_ROOT_URI) {
            type_uri.to_string()
        } else {
            format!("{FULL_ROOT_URI}/{type_uri}")
        }
    }
}

/// Builder for [`Resource`]. `id` and a type URI are required; setters
/// validate their argument immediately.
#[derive(Debug, Default)]
pub struct ResourceBuilder {
    id: Option<String>,
    type_uri: Option<String>,
    name: Option<String>,
    credential: Option<AnyCredential>,
    attachments: Option<Vec<AnyAttachment>>,
}

impl ResourceBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_text("resource id", &id)?;
        self.id = Some(id);
        Ok(self)
    }

    /// Set the type from the closed resource taxonomy. Accepts terminal
    /// values and family builders alike (`ResourceType::compute()` as
    /// well as `...machine().vm()`).
    pub fn of_type(mut self, resource_type: impl Into<ResourceType>) -> Self {
        self.type_uri = Some(resource_type.into().as_str().to_string());
        self
    }

    /// Set the type from a raw URI — for fully-qualified external types
    /// that are not part of the CADF taxonomy.
    pub fn type_uri(mut self, uri: impl Into<String>) -> Result<Self, ValidationError> {
        let uri = uri.into();
        ensure_text("resource typeURI", &uri)?;
        self.type_uri = Some(uri);
        Ok(self)
    }

    pub fn name(mut self, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_text("resource name", &name)?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn credential(mut self, credential: AnyCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn attachments(mut self, attachments: Vec<AnyAttachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn build(self) -> Result<Resource, ValidationError> {
        Ok(Resource {
            id: required("resource id", self.id)?,
            type_uri: required("resource typeURI", self.type_uri)?,
            name: self.name,
            credential: self.credential,
            attachments: self.attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::Credential;

    #[test]
    fn id_and_type_are_required() {
        assert!(matches!(
            Resource::builder().build(),
            Err(ValidationError::Missing {
                field: "resource id"
            })
        ));
        assert!(matches!(
            Resource::builder().id("r1").unwrap().build(),
            Err(ValidationError::Missing {
                field: "resource typeURI"
            })
        ));
    }

    #[test]
    fn blank_id_fails_at_the_setter() {
        assert!(matches!(
            Resource::builder().id(""),
            Err(ValidationError::Blank {
                field: "resource id"
            })
        ));
    }

    #[test]
    fn of_type_accepts_terminal_values_and_family_builders() {
        let vm = Resource::builder()
            .id("r1")
            .unwrap()
            .of_type(ResourceType::compute().machine().vm())
            .build()
            .unwrap();
        assert_eq!(vm.type_uri(), "compute/machine/vm");

        let stack = Resource::builder()
            .id("r2")
            .unwrap()
            .of_type(ResourceType::data().template().stack())
            .build()
            .unwrap();
        assert_eq!(stack.type_uri(), "data/template/stack");
    }

    #[test]
    fn full_type_uri_prefixes_relative_paths_only() {
        let relative = Resource::builder()
            .id("r1")
            .unwrap()
            .of_type(ResourceType::storage().volume())
            .build()
            .unwrap();
        assert_eq!(
            relative.full_type_uri(),
            "http://schemas.dmtf.org/cloud/audit/1.0/resource/storage/volume"
        );

        let absolute = Resource::builder()
            .id("r2")
            .unwrap()
            .type_uri("http://schemas.dmtf.org/cloud/audit/1.0/resource/storage/volume")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(absolute.full_type_uri(), absolute.type_uri());
    }

    #[test]
    fn optional_fields_are_carried_through() {
        let credential = Credential::from_text("tok-1").unwrap().into_any().unwrap();
        let resource = Resource::builder()
            .id("user-1")
            .unwrap()
            .of_type(ResourceType::data().security().account().user())
            .name("jdoe")
            .unwrap()
            .credential(credential)
            .build()
            .unwrap();
        assert_eq!(resource.name(), Some("jdoe"));
        assert!(resource.credential().is_some());
        assert!(resource.attachments().is_none());
    }

    #[test]
    fn serde_uses_cadf_wire_names() {
        let resource = Resource::builder()
            .id("r1")
            .unwrap()
            .of_type(ResourceType::system())
            .build()
            .unwrap();
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["typeURI"], "system");
        assert_eq!(json["id"], "r1");
        assert!(json.get("name").is_none());
    }
}
