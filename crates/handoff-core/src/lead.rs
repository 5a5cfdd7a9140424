//! Sales leads, each attributed to a company and one of its lead sources.

use bigdecimal::BigDecimal;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  entity::serialize_timestamp,
  validate::{
    DateInput, IdInput, optional_email, optional_text, text, validate_date_time,
    validate_uuid,
  },
};

const ID: &str = "leadId";
const COMPANY_ID: &str = "leadCompanyId";
const LEAD_SOURCE_ID: &str = "leadLeadSourceId";
const CONTACT_EMAIL: &str = "leadContactEmail";
const CONTACT_NAME: &str = "leadContactName";
const CONTACT_PHONE: &str = "leadContactPhone";
const DATE_TIME: &str = "leadDateTime";
const NAME: &str = "leadName";
const SALESFORCE_ID: &str = "leadSalesForceId";
const STATUS: &str = "leadStatus";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
  lead_id:             Uuid,
  lead_company_id:     Uuid,
  lead_lead_source_id: Uuid,
  lead_contact_email:  Option<String>,
  lead_contact_name:   String,
  lead_contact_phone:  Option<String>,
  /// When the lead came in; microsecond precision.
  #[serde(serialize_with = "serialize_timestamp")]
  lead_date_time:      DateTime<Utc>,
  lead_name:           Option<String>,
  lead_sales_force_id: Option<String>,
  /// `DECIMAL(9,2)`; serialized as a string to keep the exact value.
  lead_sold_amount:    Option<BigDecimal>,
  lead_status:         Option<String>,
}

/// Unvalidated input to [`Lead::new`]. A missing `lead_date_time` means
/// "now".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
  pub lead_id:             IdInput,
  pub lead_company_id:     IdInput,
  pub lead_lead_source_id: IdInput,
  pub lead_contact_email:  Option<String>,
  pub lead_contact_name:   String,
  pub lead_contact_phone:  Option<String>,
  pub lead_date_time:      Option<DateInput>,
  pub lead_name:           Option<String>,
  pub lead_sales_force_id: Option<String>,
  pub lead_sold_amount:    Option<BigDecimal>,
  pub lead_status:         Option<String>,
}

impl Lead {
  pub fn new(input: NewLead) -> Result<Self> {
    Ok(Self {
      lead_id:             validate_uuid(ID, input.lead_id)?,
      lead_company_id:     validate_uuid(COMPANY_ID, input.lead_company_id)?,
      lead_lead_source_id: validate_uuid(
        LEAD_SOURCE_ID,
        input.lead_lead_source_id,
      )?,
      lead_contact_email:  optional_email(
        CONTACT_EMAIL,
        input.lead_contact_email.as_deref(),
        128,
      )?,
      lead_contact_name:   text(CONTACT_NAME, &input.lead_contact_name, 64)?,
      lead_contact_phone:  optional_text(
        CONTACT_PHONE,
        input.lead_contact_phone.as_deref(),
        32,
      )?,
      lead_date_time:      date_time(input.lead_date_time)?,
      lead_name:           optional_text(NAME, input.lead_name.as_deref(), 128)?,
      lead_sales_force_id: optional_text(
        SALESFORCE_ID,
        input.lead_sales_force_id.as_deref(),
        255,
      )?,
      lead_sold_amount:    input.lead_sold_amount,
      lead_status:         optional_text(STATUS, input.lead_status.as_deref(), 64)?,
    })
  }

  pub fn id(&self) -> Uuid { self.lead_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn company_id(&self) -> Uuid { self.lead_company_id }

  pub fn set_company_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_company_id = validate_uuid(COMPANY_ID, id.into())?;
    Ok(())
  }

  pub fn lead_source_id(&self) -> Uuid { self.lead_lead_source_id }

  pub fn set_lead_source_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_lead_source_id = validate_uuid(LEAD_SOURCE_ID, id.into())?;
    Ok(())
  }

  pub fn contact_email(&self) -> Option<&str> {
    self.lead_contact_email.as_deref()
  }

  pub fn set_contact_email(&mut self, address: Option<&str>) -> Result<()> {
    self.lead_contact_email = optional_email(CONTACT_EMAIL, address, 128)?;
    Ok(())
  }

  pub fn contact_name(&self) -> &str { &self.lead_contact_name }

  pub fn set_contact_name(&mut self, name: &str) -> Result<()> {
    self.lead_contact_name = text(CONTACT_NAME, name, 64)?;
    Ok(())
  }

  pub fn contact_phone(&self) -> Option<&str> {
    self.lead_contact_phone.as_deref()
  }

  pub fn set_contact_phone(&mut self, phone: Option<&str>) -> Result<()> {
    self.lead_contact_phone = optional_text(CONTACT_PHONE, phone, 32)?;
    Ok(())
  }

  pub fn date_time(&self) -> DateTime<Utc> { self.lead_date_time }

  /// `None` stamps the current time.
  pub fn set_date_time(&mut self, at: Option<DateInput>) -> Result<()> {
    self.lead_date_time = date_time(at)?;
    Ok(())
  }

  pub fn name(&self) -> Option<&str> { self.lead_name.as_deref() }

  pub fn set_name(&mut self, name: Option<&str>) -> Result<()> {
    self.lead_name = optional_text(NAME, name, 128)?;
    Ok(())
  }

  pub fn sales_force_id(&self) -> Option<&str> {
    self.lead_sales_force_id.as_deref()
  }

  pub fn set_sales_force_id(&mut self, id: Option<&str>) -> Result<()> {
    self.lead_sales_force_id = optional_text(SALESFORCE_ID, id, 255)?;
    Ok(())
  }

  pub fn sold_amount(&self) -> Option<&BigDecimal> {
    self.lead_sold_amount.as_ref()
  }

  pub fn set_sold_amount(&mut self, amount: Option<BigDecimal>) {
    self.lead_sold_amount = amount;
  }

  pub fn status(&self) -> Option<&str> { self.lead_status.as_deref() }

  pub fn set_status(&mut self, status: Option<&str>) -> Result<()> {
    self.lead_status = optional_text(STATUS, status, 64)?;
    Ok(())
  }
}

fn date_time(at: Option<DateInput>) -> Result<DateTime<Utc>> {
  match at {
    Some(at) => validate_date_time(DATE_TIME, at),
    None => {
      tracing::trace!(field = DATE_TIME, "no timestamp supplied, using now");
      Ok(Utc::now().trunc_subsecs(6))
    }
  }
}

impl TryFrom<NewLead> for Lead {
  type Error = crate::Error;

  fn try_from(input: NewLead) -> Result<Self> { Self::new(input) }
}

impl Entity for Lead {
  const TABLE: &'static str = "lead";

  fn primary_key(&self) -> Uuid { self.lead_id }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use chrono::Timelike;
  use serde_json::{Value, json};

  use super::*;
  use crate::ErrorKind;

  fn input() -> NewLead {
    serde_json::from_value(json!({
      "leadId":           "5f0e1d2c-3b4a-4958-8776-a5b4c3d2e1f0",
      "leadCompanyId":    "c2a0e9d8-7b6a-4c5d-8e9f-0a1b2c3d4e5f",
      "leadLeadSourceId": "0d4c5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f",
      "leadContactName":  "Pat Lee",
      "leadContactEmail": "pat@example.org",
      "leadDateTime":     "2018-02-14 10:30:00.000001",
      "leadSoldAmount":   "1234.50",
    }))
    .unwrap()
  }

  #[test]
  fn optional_columns_default_to_null() {
    let lead = Lead::new(input()).unwrap();
    let map = lead.to_serializable().unwrap();
    assert_eq!(map["leadContactPhone"], Value::Null);
    assert_eq!(map["leadStatus"], Value::Null);
    assert_eq!(map["leadName"], Value::Null);
    assert_eq!(map["leadDateTime"], "2018-02-14 10:30:00.000001");
    assert_eq!(map["leadLeadSourceId"], "0d4c5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f");
  }

  #[test]
  fn sold_amount_passes_through() {
    let mut lead = Lead::new(input()).unwrap();
    assert_eq!(
      lead.sold_amount(),
      Some(&BigDecimal::from_str("1234.50").unwrap())
    );
    lead.set_sold_amount(None);
    assert_eq!(lead.sold_amount(), None);
  }

  #[test]
  fn missing_date_time_defaults_to_now() {
    let mut input = input();
    input.lead_date_time = None;
    let before = Utc::now().trunc_subsecs(6);
    let lead = Lead::new(input).unwrap();
    assert!(lead.date_time() >= before);
    assert_eq!(lead.date_time().nanosecond() % 1_000, 0);
  }

  #[test]
  fn malformed_date_time_is_an_invalid_argument() {
    let mut lead = Lead::new(input()).unwrap();
    let err = lead
      .set_date_time(Some("Feb 14 2018".into()))
      .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.field(), Some("leadDateTime"));
  }

  #[test]
  fn blank_optional_text_is_stored_as_none() {
    let mut lead = Lead::new(input()).unwrap();
    lead.set_status(Some("  ")).unwrap();
    assert_eq!(lead.status(), None);
    lead.set_status(Some("qualified")).unwrap();
    assert_eq!(lead.status(), Some("qualified"));

    let err = lead.set_contact_phone(Some(&"5".repeat(33))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(lead.contact_phone(), None);
  }

  #[test]
  fn contact_name_is_required() {
    let mut input = input();
    input.lead_contact_name = "<p></p>".into();
    let err = Lead::new(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.field(), Some("leadContactName"));
  }
}
