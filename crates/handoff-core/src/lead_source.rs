//! Where a company's leads come from (referral, web form, trade show, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  validate::{IdInput, hex_token, validate_uuid},
};

const ID: &str = "leadSourceId";
const COMPANY_ID: &str = "leadSourceCompanyId";
const NAME: &str = "leadSourceName";
const TYPE: &str = "leadSourceType";

/// Width of the source name and type columns.
pub const NAME_LEN: usize = 64;

/// A lead source owned by a company. Same shape as
/// [`SalesRole`](crate::SalesRole).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSource {
  lead_source_id:         Uuid,
  lead_source_company_id: Uuid,
  lead_source_name:       String,
  lead_source_type:       String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeadSource {
  pub lead_source_id:         IdInput,
  pub lead_source_company_id: IdInput,
  pub lead_source_name:       String,
  pub lead_source_type:       String,
}

impl LeadSource {
  pub fn new(input: NewLeadSource) -> Result<Self> {
    Ok(Self {
      lead_source_id:         validate_uuid(ID, input.lead_source_id)?,
      lead_source_company_id: validate_uuid(
        COMPANY_ID,
        input.lead_source_company_id,
      )?,
      lead_source_name:       hex_token(NAME, &input.lead_source_name, NAME_LEN)?,
      lead_source_type:       hex_token(TYPE, &input.lead_source_type, NAME_LEN)?,
    })
  }

  pub fn id(&self) -> Uuid { self.lead_source_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_source_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn company_id(&self) -> Uuid { self.lead_source_company_id }

  pub fn set_company_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_source_company_id = validate_uuid(COMPANY_ID, id.into())?;
    Ok(())
  }

  pub fn name(&self) -> &str { &self.lead_source_name }

  pub fn set_name(&mut self, name: &str) -> Result<()> {
    self.lead_source_name = hex_token(NAME, name, NAME_LEN)?;
    Ok(())
  }

  pub fn source_type(&self) -> &str { &self.lead_source_type }

  pub fn set_source_type(&mut self, source_type: &str) -> Result<()> {
    self.lead_source_type = hex_token(TYPE, source_type, NAME_LEN)?;
    Ok(())
  }
}

impl TryFrom<NewLeadSource> for LeadSource {
  type Error = crate::Error;

  fn try_from(input: NewLeadSource) -> Result<Self> { Self::new(input) }
}

impl Entity for LeadSource {
  const TABLE: &'static str = "leadSource";

  fn primary_key(&self) -> Uuid { self.lead_source_id }
}
