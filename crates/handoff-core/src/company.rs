//! The tenant: every profile, role, source and lead belongs to a company.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  validate::{IdInput, email, optional_text, text, validate_uuid},
};

const ID: &str = "companyId";
const COUNTRY: &str = "companyCountry";
const EMAIL: &str = "companyEmail";
const NAME: &str = "companyName";
const PHONE: &str = "companyPhone";
const POSTAL_CODE: &str = "companyPostalCode";
const SALESFORCE_ORG_ID: &str = "companySalesforceOrgId";
const STATE: &str = "companyState";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
  company_id:                Uuid,
  company_country:           String,
  company_email:             String,
  company_name:              String,
  company_phone:             Option<String>,
  company_postal_code:       String,
  company_salesforce_org_id: Option<String>,
  company_state:             String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
  pub company_id:                IdInput,
  pub company_country:           String,
  pub company_email:             String,
  pub company_name:              String,
  pub company_phone:             Option<String>,
  pub company_postal_code:       String,
  pub company_salesforce_org_id: Option<String>,
  pub company_state:             String,
}

impl Company {
  pub fn new(input: NewCompany) -> Result<Self> {
    Ok(Self {
      company_id:                validate_uuid(ID, input.company_id)?,
      company_country:           text(COUNTRY, &input.company_country, 128)?,
      company_email:             email(EMAIL, &input.company_email, 128)?,
      company_name:              text(NAME, &input.company_name, 128)?,
      company_phone:             optional_text(
        PHONE,
        input.company_phone.as_deref(),
        32,
      )?,
      company_postal_code:       text(
        POSTAL_CODE,
        &input.company_postal_code,
        32,
      )?,
      company_salesforce_org_id: optional_text(
        SALESFORCE_ORG_ID,
        input.company_salesforce_org_id.as_deref(),
        255,
      )?,
      company_state:             text(STATE, &input.company_state, 10)?,
    })
  }

  pub fn id(&self) -> Uuid { self.company_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.company_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn country(&self) -> &str { &self.company_country }

  pub fn set_country(&mut self, country: &str) -> Result<()> {
    self.company_country = text(COUNTRY, country, 128)?;
    Ok(())
  }

  pub fn email(&self) -> &str { &self.company_email }

  pub fn set_email(&mut self, address: &str) -> Result<()> {
    self.company_email = email(EMAIL, address, 128)?;
    Ok(())
  }

  pub fn name(&self) -> &str { &self.company_name }

  pub fn set_name(&mut self, name: &str) -> Result<()> {
    self.company_name = text(NAME, name, 128)?;
    Ok(())
  }

  pub fn phone(&self) -> Option<&str> { self.company_phone.as_deref() }

  pub fn set_phone(&mut self, phone: Option<&str>) -> Result<()> {
    self.company_phone = optional_text(PHONE, phone, 32)?;
    Ok(())
  }

  pub fn postal_code(&self) -> &str { &self.company_postal_code }

  pub fn set_postal_code(&mut self, postal_code: &str) -> Result<()> {
    self.company_postal_code = text(POSTAL_CODE, postal_code, 32)?;
    Ok(())
  }

  pub fn salesforce_org_id(&self) -> Option<&str> {
    self.company_salesforce_org_id.as_deref()
  }

  pub fn set_salesforce_org_id(&mut self, org_id: Option<&str>) -> Result<()> {
    self.company_salesforce_org_id =
      optional_text(SALESFORCE_ORG_ID, org_id, 255)?;
    Ok(())
  }

  /// State or province code.
  pub fn state(&self) -> &str { &self.company_state }

  pub fn set_state(&mut self, state: &str) -> Result<()> {
    self.company_state = text(STATE, state, 10)?;
    Ok(())
  }
}

impl TryFrom<NewCompany> for Company {
  type Error = crate::Error;

  fn try_from(input: NewCompany) -> Result<Self> { Self::new(input) }
}

impl Entity for Company {
  const TABLE: &'static str = "company";

  fn primary_key(&self) -> Uuid { self.company_id }
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};

  use super::*;
  use crate::ErrorKind;

  fn input() -> NewCompany {
    NewCompany {
      company_id:                "c2a0e9d8-7b6a-4c5d-8e9f-0a1b2c3d4e5f".into(),
      company_country:           "USA".into(),
      company_email:             " sales@example.com ".into(),
      company_name:              "Acme <i>Roofing</i>".into(),
      company_phone:             None,
      company_postal_code:       "87102".into(),
      company_salesforce_org_id: Some("00D5e000000abcd".into()),
      company_state:             "NM".into(),
    }
  }

  #[test]
  fn sanitizes_on_construction() {
    let company = Company::new(input()).unwrap();
    assert_eq!(company.email(), "sales@example.com");
    assert_eq!(company.name(), "Acme Roofing");
    assert_eq!(company.phone(), None);
  }

  #[test]
  fn serializes_nullable_columns_as_null() {
    let map = Company::new(input()).unwrap().to_serializable().unwrap();
    assert_eq!(map["companyPhone"], Value::Null);
    assert_eq!(map["companySalesforceOrgId"], json!("00D5e000000abcd"));
    assert_eq!(map["companyId"], "c2a0e9d8-7b6a-4c5d-8e9f-0a1b2c3d4e5f");
  }

  #[test]
  fn state_is_bounded() {
    let mut input = input();
    input.company_state = "New Mexico!".into();
    let err = Company::new(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("companyState"));
  }

  #[test]
  fn blank_name_is_an_invalid_argument() {
    let mut company = Company::new(input()).unwrap();
    let err = company.set_name("   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(company.name(), "Acme Roofing");

    company.set_phone(Some("505-555-0100")).unwrap();
    assert_eq!(company.phone(), Some("505-555-0100"));
  }
}
