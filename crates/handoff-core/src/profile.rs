//! User profiles: the people who give and receive leads.
//!
//! A profile carries its password hash and salt so it can be written back to
//! the `profile` table, but neither ever leaves through serialization.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Entity, Result,
  entity::serialize_timestamp,
  validate::{
    DateInput, IdInput, email, hex_token, optional_text, text,
    validate_date_time, validate_uuid,
  },
};

const ID: &str = "profileId";
const COMPANY_ID: &str = "profileCompanyId";
const SALES_ROLE_ID: &str = "profileSalesRoleId";
const ACTIVATION_TOKEN: &str = "profileActivationToken";
const EMAIL: &str = "profileEmail";
const HASH: &str = "profileHash";
const IMAGE: &str = "profileImage";
const LAST_LOGIN: &str = "profileLastLogin";
const NAME: &str = "profileName";
const SALT: &str = "profileSalt";
const SALESFORCE_ID: &str = "profileSalesForceId";

pub const ACTIVATION_TOKEN_LEN: usize = 32;
pub const HASH_LEN: usize = 128;
pub const SALT_LEN: usize = 64;

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  profile_id:               Uuid,
  profile_company_id:       Uuid,
  profile_sales_role_id:    Uuid,
  /// Whether the account is active and billed.
  profile_active:           bool,
  profile_activation_token: Option<String>,
  profile_email:            String,
  #[serde(skip_serializing)]
  profile_hash:             String,
  /// Path of the single profile image.
  profile_image:            String,
  #[serde(serialize_with = "serialize_timestamp")]
  profile_last_login:       DateTime<Utc>,
  profile_name:             String,
  #[serde(skip_serializing)]
  profile_salt:             String,
  profile_sales_force_id:   Option<String>,
}

/// Unvalidated input to [`Profile::new`]. A missing `profile_last_login`
/// means "now".
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
  pub profile_id:               IdInput,
  pub profile_company_id:       IdInput,
  pub profile_sales_role_id:    IdInput,
  pub profile_active:           bool,
  pub profile_activation_token: Option<String>,
  pub profile_email:            String,
  pub profile_hash:             String,
  pub profile_image:            String,
  pub profile_last_login:       Option<DateInput>,
  pub profile_name:             String,
  pub profile_salt:             String,
  pub profile_sales_force_id:   Option<String>,
}

impl Profile {
  pub fn new(input: NewProfile) -> Result<Self> {
    Ok(Self {
      profile_id:               validate_uuid(ID, input.profile_id)?,
      profile_company_id:       validate_uuid(
        COMPANY_ID,
        input.profile_company_id,
      )?,
      profile_sales_role_id:    validate_uuid(
        SALES_ROLE_ID,
        input.profile_sales_role_id,
      )?,
      profile_active:           input.profile_active,
      profile_activation_token: activation_token(
        input.profile_activation_token.as_deref(),
      )?,
      profile_email:            email(EMAIL, &input.profile_email, 128)?,
      profile_hash:             hex_token(HASH, &input.profile_hash, HASH_LEN)?,
      profile_image:            text(IMAGE, &input.profile_image, 255)?,
      profile_last_login:       last_login(input.profile_last_login)?,
      profile_name:             text(NAME, &input.profile_name, 64)?,
      profile_salt:             hex_token(SALT, &input.profile_salt, SALT_LEN)?,
      profile_sales_force_id:   optional_text(
        SALESFORCE_ID,
        input.profile_sales_force_id.as_deref(),
        255,
      )?,
    })
  }

  pub fn id(&self) -> Uuid { self.profile_id }

  pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.profile_id = validate_uuid(ID, id.into())?;
    Ok(())
  }

  pub fn company_id(&self) -> Uuid { self.profile_company_id }

  pub fn set_company_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.profile_company_id = validate_uuid(COMPANY_ID, id.into())?;
    Ok(())
  }

  pub fn sales_role_id(&self) -> Uuid { self.profile_sales_role_id }

  pub fn set_sales_role_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
    self.profile_sales_role_id = validate_uuid(SALES_ROLE_ID, id.into())?;
    Ok(())
  }

  pub fn active(&self) -> bool { self.profile_active }

  pub fn set_active(&mut self, active: bool) { self.profile_active = active; }

  pub fn activation_token(&self) -> Option<&str> {
    self.profile_activation_token.as_deref()
  }

  /// `None` clears the token once the account has been activated.
  pub fn set_activation_token(&mut self, token: Option<&str>) -> Result<()> {
    self.profile_activation_token = activation_token(token)?;
    Ok(())
  }

  pub fn email(&self) -> &str { &self.profile_email }

  pub fn set_email(&mut self, address: &str) -> Result<()> {
    self.profile_email = email(EMAIL, address, 128)?;
    Ok(())
  }

  pub fn hash(&self) -> &str { &self.profile_hash }

  pub fn set_hash(&mut self, hash: &str) -> Result<()> {
    self.profile_hash = hex_token(HASH, hash, HASH_LEN)?;
    Ok(())
  }

  pub fn image(&self) -> &str { &self.profile_image }

  pub fn set_image(&mut self, image: &str) -> Result<()> {
    self.profile_image = text(IMAGE, image, 255)?;
    Ok(())
  }

  pub fn last_login(&self) -> DateTime<Utc> { self.profile_last_login }

  /// Record a login time; `None` stamps the current time.
  pub fn set_last_login(&mut self, at: Option<DateInput>) -> Result<()> {
    self.profile_last_login = last_login(at)?;
    Ok(())
  }

  pub fn name(&self) -> &str { &self.profile_name }

  pub fn set_name(&mut self, name: &str) -> Result<()> {
    self.profile_name = text(NAME, name, 64)?;
    Ok(())
  }

  pub fn salt(&self) -> &str { &self.profile_salt }

  pub fn set_salt(&mut self, salt: &str) -> Result<()> {
    self.profile_salt = hex_token(SALT, salt, SALT_LEN)?;
    Ok(())
  }

  pub fn sales_force_id(&self) -> Option<&str> {
    self.profile_sales_force_id.as_deref()
  }

  pub fn set_sales_force_id(&mut self, id: Option<&str>) -> Result<()> {
    self.profile_sales_force_id = optional_text(SALESFORCE_ID, id, 255)?;
    Ok(())
  }
}

fn activation_token(token: Option<&str>) -> Result<Option<String>> {
  token
    .map(|t| hex_token(ACTIVATION_TOKEN, t, ACTIVATION_TOKEN_LEN))
    .transpose()
}

fn last_login(at: Option<DateInput>) -> Result<DateTime<Utc>> {
  match at {
    Some(at) => validate_date_time(LAST_LOGIN, at),
    None => {
      tracing::trace!(field = LAST_LOGIN, "no timestamp supplied, using now");
      Ok(Utc::now().trunc_subsecs(6))
    }
  }
}

// Hash and salt stay out of logs.
impl fmt::Debug for Profile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Profile")
      .field("profile_id", &self.profile_id)
      .field("profile_company_id", &self.profile_company_id)
      .field("profile_sales_role_id", &self.profile_sales_role_id)
      .field("profile_active", &self.profile_active)
      .field("profile_activation_token", &self.profile_activation_token)
      .field("profile_email", &self.profile_email)
      .field("profile_image", &self.profile_image)
      .field("profile_last_login", &self.profile_last_login)
      .field("profile_name", &self.profile_name)
      .field("profile_sales_force_id", &self.profile_sales_force_id)
      .finish_non_exhaustive()
  }
}

impl fmt::Debug for NewProfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NewProfile")
      .field("profile_id", &self.profile_id)
      .field("profile_email", &self.profile_email)
      .field("profile_name", &self.profile_name)
      .finish_non_exhaustive()
  }
}

impl TryFrom<NewProfile> for Profile {
  type Error = crate::Error;

  fn try_from(input: NewProfile) -> Result<Self> { Self::new(input) }
}

impl Entity for Profile {
  const TABLE: &'static str = "profile";

  fn primary_key(&self) -> Uuid { self.profile_id }
}
