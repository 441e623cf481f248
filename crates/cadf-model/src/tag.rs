// tag.rs — CADF tag value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{required, ValidationError};

/// A name/value tag attached to an audit event.
///
/// The canonical string form is the name alone when the value is empty,
/// otherwise `name?value=<value>` — e.g.
/// `//GRC20.gov/cloud/auditplan?value=audit10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    value: String,
}

impl Tag {
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The canonical query-style form of this tag.
    pub fn canonical(&self) -> String {
        if self.value.is_empty() {
            self.name.clone()
        } else {
            format!("{}?value={}", self.name, self.value)
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Builder for [`Tag`]. Both fields are required; the value may be the
/// empty string.
#[derive(Debug, Default)]
pub struct TagBuilder {
    name: Option<String>,
    value: Option<String>,
}

impl TagBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Tag, ValidationError> {
        Ok(Tag {
            name: required("tag name", self.name)?,
            value: required("tag value", self.value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_is_name_when_value_empty() {
        let tag = Tag::builder().name("plan").value("").build().unwrap();
        assert_eq!(tag.canonical(), "plan");
        assert_eq!(tag.to_string(), "plan");
    }

    #[test]
    fn canonical_appends_value_when_present() {
        let tag = Tag::builder().name("plan").value("10").build().unwrap();
        assert_eq!(tag.canonical(), "plan?value=10");
    }

    #[test]
    fn both_fields_are_required() {
        assert!(matches!(
            Tag::builder().name("plan").build(),
            Err(ValidationError::Missing { field: "tag value" })
        ));
        assert!(matches!(
            Tag::builder().value("10").build(),
            Err(ValidationError::Missing { field: "tag name" })
        ));
    }
}
