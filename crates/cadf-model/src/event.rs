// event.rs — The CADF audit event aggregate and its builder.
//
// An audit event records who (initiator) did what (action) to what
// (target), who saw it (observer), and how it concluded (outcome). All
// three parties are full Resource values — an explicit simplification
// over the CADF schema's identifier-only references. Events are immutable
// once built; a partial builder never yields an event.

use std::fmt;

use serde::{Deserialize, Serialize};

use cadf_taxonomy::{Action, Outcome};

use crate::attachment::AnyAttachment;
use crate::error::{ensure_text, required, ValidationError};
use crate::measurement::AnyMeasurement;
use crate::resource::Resource;
use crate::tag::Tag;

/// The fixed `typeURI` of every CADF event record. Not caller-settable.
pub const EVENT_TYPE_URI: &str = "http://schemas.dmtf.org/cloud/audit/1.0/event";

/// The CADF event type classification.
///
/// This list is FINAL — these are the only top-level values the CADF
/// schema permits for the `eventType` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Periodic probes/samples of a resource's state.
    Monitor,
    /// An action performed on or by a resource.
    Activity,
    /// A policy/security decision about a resource.
    Control,
}

impl EventType {
    /// The wire name of this event type.
    pub fn name(self) -> &'static str {
        match self {
            EventType::Monitor => "monitor",
            EventType::Activity => "activity",
            EventType::Control => "control",
        }
    }

    /// Look an event type up by its wire name.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "monitor" => Ok(EventType::Monitor),
            "activity" => Ok(EventType::Activity),
            "control" => Ok(EventType::Control),
            other => Err(ValidationError::UnknownEventType(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_type_uri() -> String {
    EVENT_TYPE_URI.to_string()
}

/// A complete, schema-valid CADF audit event record.
///
/// Construct through [`AuditEvent::builder`]; every instance satisfies
/// the record-level invariants (all required fields present and valid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    #[serde(rename = "typeURI", default = "default_type_uri")]
    type_uri: String,

    id: String,

    event_type: EventType,

    /// ISO-8601 timestamp with an explicit numeric UTC offset, e.g.
    /// `2024-01-01T00:00:00.000+00:00`. Stored verbatim as supplied.
    event_time: String,

    action: Action,

    outcome: Outcome,

    initiator: Resource,

    target: Resource,

    observer: Resource,

    /// Expected when `event_type` is [`EventType::Monitor`], though not
    /// structurally enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    measurements: Option<Vec<AnyMeasurement>>,

    /// Descriptive name. Never a substitute for `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Domain-relative severity assigned by the observer; non-normative.
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<AnyAttachment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    secure_attachments: Option<Vec<AnyAttachment>>,
}

impl AuditEvent {
    pub fn builder() -> AuditEventBuilder {
        AuditEventBuilder::default()
    }

    pub fn type_uri(&self) -> &str {
        &self.type_uri
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn event_time(&self) -> &str {
        &self.event_time
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn initiator(&self) -> &Resource {
        &self.initiator
    }

    pub fn target(&self) -> &Resource {
        &self.target
    }

    pub fn observer(&self) -> &Resource {
        &self.observer
    }

    pub fn measurements(&self) -> Option<&[AnyMeasurement]> {
        self.measurements.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn attachments(&self) -> Option<&[AnyAttachment]> {
        self.attachments.as_deref()
    }

    pub fn secure_attachments(&self) -> Option<&[AnyAttachment]> {
        self.secure_attachments.as_deref()
    }
}

/// Builder for [`AuditEvent`].
///
/// Setters validate their argument immediately and fail at the offending
/// call; `build()` performs the final completeness check over the eight
/// required fields (`id`, `event_type`, `event_time`, `action`,
/// `outcome`, `initiator`, `target`, `observer`).
#[derive(Debug, Default)]
pub struct AuditEventBuilder {
    id: Option<String>,
    event_type: Option<EventType>,
    event_time: Option<String>,
    action: Option<Action>,
    outcome: Option<Outcome>,
    initiator: Option<Resource>,
    target: Option<Resource>,
    observer: Option<Resource>,
    measurements: Option<Vec<AnyMeasurement>>,
    name: Option<String>,
    severity: Option<String>,
    tags: Option<Vec<Tag>>,
    attachments: Option<Vec<AnyAttachment>>,
    secure_attachments: Option<Vec<AnyAttachment>>,
}

impl AuditEventBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_text("event id", &id)?;
        self.id = Some(id);
        Ok(self)
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Set the event time, stored verbatim.
    ///
    /// The caller must supply an ISO-8601 string with an explicit numeric
    /// offset (`2024-01-01T00:00:00.000+00:00`). A `Z` suffix or a
    /// missing offset is a caller error; the builder neither parses nor
    /// corrects the value. Use [`crate::time::format_event_time`] to
    /// produce a conforming string from a `chrono` timestamp.
    pub fn event_time(mut self, event_time: impl Into<String>) -> Result<Self, ValidationError> {
        let event_time = event_time.into();
        ensure_text("event time", &event_time)?;
        self.event_time = Some(event_time);
        Ok(self)
    }

    pub fn action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn initiator(mut self, initiator: Resource) -> Self {
        self.initiator = Some(initiator);
        self
    }

    pub fn target(mut self, target: Resource) -> Self {
        self.target = Some(target);
        self
    }

    pub fn observer(mut self, observer: Resource) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn measurements(mut self, measurements: Vec<AnyMeasurement>) -> Self {
        self.measurements = Some(measurements);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn attachments(mut self, attachments: Vec<AnyAttachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn secure_attachments(mut self, secure_attachments: Vec<AnyAttachment>) -> Self {
        self.secure_attachments = Some(secure_attachments);
        self
    }

    /// Final completeness check; returns the immutable event only when
    /// every required field is present.
    pub fn build(self) -> Result<AuditEvent, ValidationError> {
        let event = AuditEvent {
            type_uri: default_type_uri(),
            id: required("event id", self.id)?,
            event_type: required("event type", self.event_type)?,
            event_time: required("event time", self.event_time)?,
            action: required("event action", self.action)?,
            outcome: required("event outcome", self.outcome)?,
            initiator: required("event initiator", self.initiator)?,
            target: required("event target", self.target)?,
            observer: required("event observer", self.observer)?,
            measurements: self.measurements,
            name: self.name,
            severity: self.severity,
            tags: self.tags,
            attachments: self.attachments,
            secure_attachments: self.secure_attachments,
        };
        tracing::debug!(
            id = %event.id,
            action = %event.action,
            outcome = %event.outcome,
            "audit event assembled"
        );
        Ok(event)
    }
}
