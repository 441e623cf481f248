//! # cadf-taxonomy
//!
//! The closed CADF taxonomies (actions, resource types, outcomes) with
//! bidirectional path encoding.
//!
//! Each taxonomy is a static tree of named segments. Typed builder chains
//! produce values whose canonical string is the `/`-joined root-to-leaf
//! segment sequence; [`Action::from_path`] and [`ResourceType::from_path`]
//! replay a string against the same tree and reject anything outside the
//! closed vocabulary. [`Outcome::from_path`] is total and classifies
//! unknown input as `unknown`.
//!
//! ## Quick Example
//!
//! ```rust
//! use cadf_taxonomy::{Action, Outcome, ResourceType};
//!
//! let action = Action::monitor().start();
//! assert_eq!(action.as_str(), "capture/start");
//! assert_eq!(Action::from_path("monitor/start").unwrap(), action);
//!
//! let vm = ResourceType::compute().machine().vm();
//! assert_eq!(vm.as_str(), "compute/machine/vm");
//!
//! assert_eq!(Outcome::from_path("no-such-outcome"), Outcome::Unknown);
//! ```

pub mod action;
pub mod error;
pub mod outcome;
pub mod path;
pub mod resource_type;

pub use action::Action;
pub use error::TaxonomyError;
pub use outcome::Outcome;
pub use path::TaxonomyPath;
pub use resource_type::ResourceType;
