//! A lead passed from one profile to another.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  validate::{IdInput, hex_token, validate_uuid},
};

const ID: &str = "leadHandoffId";
const LEAD_ID: &str = "leadHandoffLeadId";
const GIVER_ID: &str = "leadHandoffGiverProfileId";
const RECEIVER_ID: &str = "leadHandoffReceiverProfileId";
const ACTION: &str = "leadHandoffAction";

pub const ACTION_LEN: usize = 64;

/// Records that `giver` handed `lead` to `receiver`. Both profiles and the
/// lead are foreign keys; nothing here checks that they exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Handoff {
  lead_handoff_id:                  Uuid,
  lead_handoff_lead_id:             Uuid,
  lead_handoff_giver_profile_id:    Uuid,
  lead_handoff_receiver_profile_id: Uuid,
  lead_handoff_action:              String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHandoff {
  pub lead_handoff_id:                  IdInput,
  pub lead_handoff_lead_id:             IdInput,
  pub lead_handoff_giver_profile_id:    IdInput,
  pub lead_handoff_receiver_profile_id: IdInput,
  pub lead_handoff_action:              String,
}

impl Handoff {
  pub fn new(input: NewHandoff) -> Result<Self> {
    Ok(Self {
      lead_handoff_id:                  validate_uuid(ID, input.lead_handoff_id)?,
      lead_handoff_lead_id:             validate_uuid(
        LEAD_ID,
        input.lead_handoff_lead_id,
      )?,
      lead_handoff_giver_profile_id:    validate_uuid(
        GIVER_ID,
        input.lead_handoff_giver_profile_id,
      )?,
      lead_handoff_receiver_profile_id: validate_uuid(
        RECEIVER_ID,
        input.lead_handoff_receiver_profile_id,
      )?,
      lead_handoff_action:              hex_token(
        ACTION,
        &input.lead_handoff_action,
        ACTION_LEN,
      )?,
    })
  }

  pub fn id(&self) -> Uuid { self.lead_handoff_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_handoff_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn lead_id(&self) -> Uuid { self.lead_handoff_lead_id }

  pub fn set_lead_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_handoff_lead_id = validate_uuid(LEAD_ID, id.into())?;
    Ok(())
  }

  pub fn giver_profile_id(&self) -> Uuid { self.lead_handoff_giver_profile_id }

  pub fn set_giver_profile_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.lead_handoff_giver_profile_id = validate_uuid(GIVER_ID, id.into())?;
    Ok(())
  }

  pub fn receiver_profile_id(&self) -> Uuid {
    self.lead_handoff_receiver_profile_id
  }

  pub fn set_receiver_profile_id(
    &mut self,
    id: impl Into<IdInput>,
  ) -> Result<()> {
    self.lead_handoff_receiver_profile_id =
      validate_uuid(RECEIVER_ID, id.into())?;
    Ok(())
  }

  pub fn action(&self) -> &str { &self.lead_handoff_action }

  pub fn set_action(&mut self, action: &str) -> Result<()> {
    self.lead_handoff_action = hex_token(ACTION, action, ACTION_LEN)?;
    Ok(())
  }
}

impl TryFrom<NewHandoff> for Handoff {
  type Error = crate::Error;

  fn try_from(input: NewHandoff) -> Result<Self> { Self::new(input) }
}

impl Entity for Handoff {
  const TABLE: &'static str = "leadHandoff";

  fn primary_key(&self) -> Uuid { self.lead_handoff_id }
}
