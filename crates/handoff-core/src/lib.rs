//! Model layer for the Handoff lead-tracking application.
//!
//! Each entity mirrors one database table and guards its columns with the
//! validators in [`validate`]. The crate does no I/O; loading and storing rows
//! is left to whichever persistence layer sits on top.

pub mod company;
pub mod entity;
pub mod error;
pub mod handoff;
pub mod lead;
pub mod lead_source;
pub mod profile;
pub mod sales_role;
pub mod schema;
pub mod token;
pub mod validate;

pub use company::{Company, NewCompany};
pub use entity::Entity;
pub use error::{Error, ErrorKind, Result};
pub use handoff::{Handoff, NewHandoff};
pub use lead::{Lead, NewLead};
pub use lead_source::{LeadSource, NewLeadSource};
pub use profile::{NewProfile, Profile};
pub use sales_role::{NewSalesRole, SalesRole};
pub use validate::{DateInput, IdInput};
