// attachment.rs — Extended/domain-specific attachment value object.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_text, required, ValidationError};
use crate::resource::Resource;

/// An attachment with its payload type erased for storage on a resource
/// or audit event.
pub type AnyAttachment = Attachment<serde_json::Value>;

/// Extended or domain-specific information about an event, a resource, or
/// their context.
///
/// `content_type` is a URI describing the payload; `content` is the
/// payload itself and is generic over any serializable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment<T> {
    content_type: String,

    content: T,

    /// Optional identifying name for the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl<T> Attachment<T> {
    pub fn builder() -> AttachmentBuilder<T> {
        AttachmentBuilder::default()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<T: Serialize> Attachment<T> {
    /// Erase the payload type for storage on a resource or audit event.
    pub fn into_any(self) -> Result<AnyAttachment, ValidationError> {
        let content = serde_json::to_value(self.content).map_err(|source| {
            ValidationError::Serialization {
                field: "attachment content",
                source,
            }
        })?;
        Ok(Attachment {
            content_type: self.content_type,
            content,
            name: self.name,
        })
    }
}

impl Attachment<Resource> {
    /// Wrap a resource as an attachment: the content type becomes the
    /// resource's fully-qualified type URI and the name its resource name.
    pub fn of_resource(resource: &Resource) -> Self {
        Self {
            content_type: resource.full_type_uri(),
            content: resource.clone(),
            name: resource.name().map(str::to_string),
        }
    }
}

/// Builder for [`Attachment`]. `content_type` and `content` are required.
#[derive(Debug)]
pub struct AttachmentBuilder<T> {
    content_type: Option<String>,
    content: Option<T>,
    name: Option<String>,
}

// Derived Default would require T: Default.
impl<T> Default for AttachmentBuilder<T> {
    fn default() -> Self {
        Self {
            content_type: None,
            content: None,
            name: None,
        }
    }
}

impl<T> AttachmentBuilder<T> {
    pub fn content_type(mut self, uri: impl Into<String>) -> Result<Self, ValidationError> {
        let uri = uri.into();
        ensure_text("attachment contentType", &uri)?;
        self.content_type = Some(uri);
        Ok(self)
    }

    pub fn content(mut self, content: T) -> Self {
        self.content = Some(content);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_text("attachment name", &name)?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn build(self) -> Result<Attachment<T>, ValidationError> {
        Ok(Attachment {
            content_type: required("attachment contentType", self.content_type)?,
            content: required("attachment content", self.content)?,
            name: self.name,
        })
    }
}
