//! Sales roles a company assigns to its profiles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  validate::{IdInput, hex_token, validate_uuid},
};

const ID: &str = "salesRoleId";
const COMPANY_ID: &str = "salesRoleCompanyId";
const NAME: &str = "salesRoleName";
const TYPE: &str = "salesRoleType";

/// Width of the role name and type columns.
pub const NAME_LEN: usize = 64;

/// A role defined by a company. The name is chosen by the company, the type
/// from a fixed list; both are stored as 64-character lowercase hex tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRole {
  sales_role_id:         Uuid,
  sales_role_company_id: Uuid,
  sales_role_name:       String,
  sales_role_type:       String,
}

/// Unvalidated input to [`SalesRole::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesRole {
  pub sales_role_id:         IdInput,
  pub sales_role_company_id: IdInput,
  pub sales_role_name:       String,
  pub sales_role_type:       String,
}

impl SalesRole {
  pub fn new(input: NewSalesRole) -> Result<Self> {
    Ok(Self {
      sales_role_id:         validate_uuid(ID, input.sales_role_id)?,
      sales_role_company_id: validate_uuid(COMPANY_ID, input.sales_role_company_id)?,
      sales_role_name:       hex_token(NAME, &input.sales_role_name, NAME_LEN)?,
      sales_role_type:       hex_token(TYPE, &input.sales_role_type, NAME_LEN)?,
    })
  }

  pub fn id(&self) -> Uuid { self.sales_role_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.sales_role_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn company_id(&self) -> Uuid { self.sales_role_company_id }

  pub fn set_company_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.sales_role_company_id = validate_uuid(COMPANY_ID, id.into())?;
    Ok(())
  }

  pub fn name(&self) -> &str { &self.sales_role_name }

  pub fn set_name(&mut self, name: &str) -> Result<()> {
    self.sales_role_name = hex_token(NAME, name, NAME_LEN)?;
    Ok(())
  }

  pub fn role_type(&self) -> &str { &self.sales_role_type }

  pub fn set_role_type(&mut self, role_type: &str) -> Result<()> {
    self.sales_role_type = hex_token(TYPE, role_type, NAME_LEN)?;
    Ok(())
  }
}

impl TryFrom<NewSalesRole> for SalesRole {
  type Error = crate::Error;

  fn try_from(input: NewSalesRole) -> Result<Self> { Self::new(input) }
}

impl Entity for SalesRole {
  const TABLE: &'static str = "salesRole";

  fn primary_key(&self) -> Uuid { self.sales_role_id }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  const ROLE_ID: &str = "b3f1c7a2-5d4e-4f6a-9b8c-1d2e3f4a5b6c";
  const COMPANY: &str = "c2a0e9d8-7b6a-4c5d-8e9f-0a1b2c3d4e5f";

  fn input(name: &str) -> NewSalesRole {
    NewSalesRole {
      sales_role_id:         ROLE_ID.into(),
      sales_role_company_id: COMPANY.into(),
      sales_role_name:       name.to_string(),
      sales_role_type:       "b".repeat(64),
    }
  }

  #[test]
  fn constructs_and_serializes_ids_as_strings() {
    let role = SalesRole::new(input(&"a".repeat(64))).unwrap();
    let map = role.to_serializable().unwrap();

    assert_eq!(map["salesRoleId"], ROLE_ID);
    assert_eq!(map["salesRoleCompanyId"], COMPANY);
    assert_eq!(map["salesRoleId"].as_str().unwrap().len(), 36);
    assert_eq!(map["salesRoleName"], "a".repeat(64));
    assert_eq!(map["salesRoleType"], "b".repeat(64));
    assert_eq!(map.len(), 4);
  }

  #[test]
  fn non_hex_name_is_a_range_error() {
    let err = SalesRole::new(input("nothex!!")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("salesRoleName"));
  }

  #[test]
  fn name_is_lowercased() {
    let role = SalesRole::new(input(&"AB".repeat(32))).unwrap();
    assert_eq!(role.name(), "ab".repeat(32));
  }

  #[test]
  fn failed_setter_keeps_previous_value() {
    let mut role = SalesRole::new(input(&"a".repeat(64))).unwrap();
    assert!(role.set_role_type(&"c".repeat(63)).is_err());
    assert_eq!(role.role_type(), "b".repeat(64));

    assert!(role.set_company_id("nope").is_err());
    assert_eq!(role.company_id().to_string(), COMPANY);

    let id = Uuid::new_v4();
    role.set_id(id).unwrap();
    assert_eq!(role.id(), id);
    assert_eq!(role.primary_key(), id);
  }
}
