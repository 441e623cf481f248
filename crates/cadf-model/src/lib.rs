//! # cadf-model
//!
//! The CADF audit event record model: typed value objects, builders, and
//! record-level validation.
//!
//! Taxonomy values come from [`cadf_taxonomy`]; this crate assembles them
//! with [`Resource`]s, [`Measurement`]s, [`Tag`]s, and [`Attachment`]s
//! into an immutable, schema-valid [`AuditEvent`]. Builders validate each
//! argument at the offending call and re-check completeness at `build()`;
//! a partial builder never produces an event.
//!
//! ## Quick Example
//!
//! ```rust
//! use cadf_model::{AuditEvent, EventType, Resource};
//! use cadf_taxonomy::{Action, Outcome, ResourceType};
//!
//! # fn main() -> Result<(), cadf_model::ValidationError> {
//! let vm = Resource::builder()
//!     .id("vm-1")?
//!     .of_type(ResourceType::compute().machine().vm())
//!     .build()?;
//!
//! let event = AuditEvent::builder()
//!     .id("evt-1")?
//!     .event_type(EventType::Activity)
//!     .event_time("2024-01-01T00:00:00.000+00:00")?
//!     .action(Action::create())
//!     .outcome(Outcome::Success)
//!     .initiator(vm.clone())
//!     .target(vm.clone())
//!     .observer(vm)
//!     .build()?;
//! assert_eq!(event.action().as_str(), "create");
//! # Ok(())
//! # }
//! ```

pub mod attachment;
pub mod credential;
pub mod error;
pub mod event;
pub mod identifier;
pub mod measurement;
pub mod resource;
pub mod tag;
pub mod time;

pub use attachment::{AnyAttachment, Attachment};
pub use credential::{AnyCredential, Credential};
pub use error::ValidationError;
pub use event::{AuditEvent, AuditEventBuilder, EventType, EVENT_TYPE_URI};
pub use measurement::{AnyMeasurement, Measurement, Metric};
pub use resource::Resource;
pub use tag::Tag;
