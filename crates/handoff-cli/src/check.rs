//! Validate JSON documents into entities and collect their projections.

use clap::ValueEnum;
use handoff_core::{
  Company, Entity, Handoff, Lead, LeadSource, NewCompany, NewHandoff, NewLead,
  NewLeadSource, NewProfile, NewSalesRole, Profile, SalesRole,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Which table the records in a document belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
  Company,
  Profile,
  SalesRole,
  LeadSource,
  Lead,
  Handoff,
}

/// Outcome of checking one document.
#[derive(Debug, Default)]
pub struct Report {
  /// Serialized projections of every record that validated, in input order.
  pub accepted: Vec<Map<String, Value>>,
  pub rejected: usize,
}

/// Check every record in `document` (a single object or an array of them).
/// With `fail_fast`, stop at the first rejected record.
pub fn check(kind: EntityKind, document: Value, fail_fast: bool) -> Report {
  let records = match document {
    Value::Array(records) => records,
    other => vec![other],
  };

  let mut report = Report::default();
  for (index, record) in records.into_iter().enumerate() {
    match project(kind, record) {
      Ok(map) => report.accepted.push(map),
      Err(err) => {
        tracing::warn!(
          index,
          kind = ?err.kind(),
          field = err.field().unwrap_or("-"),
          "record rejected: {}",
          err.message()
        );
        report.rejected += 1;
        if fail_fast {
          break;
        }
      }
    }
  }
  tracing::info!(
    entity = ?kind,
    accepted = report.accepted.len(),
    rejected = report.rejected,
    "check finished"
  );
  report
}

fn project(
  kind: EntityKind,
  record: Value,
) -> handoff_core::Result<Map<String, Value>> {
  match kind {
    EntityKind::Company => build::<NewCompany, Company>(record),
    EntityKind::Profile => build::<NewProfile, Profile>(record),
    EntityKind::SalesRole => build::<NewSalesRole, SalesRole>(record),
    EntityKind::LeadSource => build::<NewLeadSource, LeadSource>(record),
    EntityKind::Lead => build::<NewLead, Lead>(record),
    EntityKind::Handoff => build::<NewHandoff, Handoff>(record),
  }
}

fn build<N, E>(record: Value) -> handoff_core::Result<Map<String, Value>>
where
  N: DeserializeOwned,
  E: Entity + TryFrom<N, Error = handoff_core::Error>,
{
  let input: N = serde_json::from_value(record)?;
  E::try_from(input)?.to_serializable()
}
