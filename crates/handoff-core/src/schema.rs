//! DDL for the tables the entities map onto.
//!
//! Written in the subset MySQL and SQLite both accept. Column names are the
//! serialization keys, so a row and an entity's JSON projection line up one
//! to one (plus `profileHash`/`profileSalt`, which never serialize).

/// Full schema; tables are ordered so every foreign key target exists first.
pub const SCHEMA: &str = "
CREATE TABLE company (
    companyId              BINARY(16)   NOT NULL,
    companyCountry         VARCHAR(128) NOT NULL,
    companyEmail           VARCHAR(128) NOT NULL,
    companyName            VARCHAR(128) NOT NULL,
    companyPhone           VARCHAR(32),
    companyPostalCode      VARCHAR(32)  NOT NULL,
    companySalesforceOrgId VARCHAR(255),
    companyState           VARCHAR(10)  NOT NULL,
    UNIQUE (companyEmail),
    PRIMARY KEY (companyId)
);

CREATE TABLE salesRole (
    salesRoleId        BINARY(16) NOT NULL,
    salesRoleCompanyId BINARY(16) NOT NULL,
    salesRoleName      CHAR(64)   NOT NULL,
    salesRoleType      CHAR(64)   NOT NULL,
    FOREIGN KEY (salesRoleCompanyId) REFERENCES company(companyId),
    PRIMARY KEY (salesRoleId)
);

CREATE TABLE profile (
    profileId              BINARY(16)   NOT NULL,
    profileCompanyId       BINARY(16)   NOT NULL,
    profileSalesRoleId     BINARY(16)   NOT NULL,
    profileActive          TINYINT(1)   NOT NULL,
    profileActivationToken CHAR(32),
    profileEmail           VARCHAR(128) NOT NULL,
    profileHash            CHAR(128)    NOT NULL,
    profileImage           VARCHAR(255) NOT NULL,
    profileLastLogin       DATETIME(6)  NOT NULL,
    profileName            VARCHAR(64)  NOT NULL,
    profileSalt            CHAR(64)     NOT NULL,
    profileSalesForceId    VARCHAR(255),
    UNIQUE (profileEmail),
    FOREIGN KEY (profileCompanyId) REFERENCES company(companyId),
    FOREIGN KEY (profileSalesRoleId) REFERENCES salesRole(salesRoleId),
    PRIMARY KEY (profileId)
);

CREATE TABLE leadSource (
    leadSourceId        BINARY(16) NOT NULL,
    leadSourceCompanyId BINARY(16) NOT NULL,
    leadSourceName      CHAR(64)   NOT NULL,
    leadSourceType      CHAR(64)   NOT NULL,
    FOREIGN KEY (leadSourceCompanyId) REFERENCES company(companyId),
    PRIMARY KEY (leadSourceId)
);

CREATE TABLE lead (
    leadId           BINARY(16)   NOT NULL,
    leadCompanyId    BINARY(16)   NOT NULL,
    leadLeadSourceId BINARY(16)   NOT NULL,
    leadContactEmail VARCHAR(128),
    leadContactName  VARCHAR(64)  NOT NULL,
    leadContactPhone VARCHAR(32),
    leadDateTime     DATETIME(6)  NOT NULL,
    leadName         VARCHAR(128),
    leadSalesForceId VARCHAR(255),
    leadSoldAmount   DECIMAL(9,2),
    leadStatus       VARCHAR(64),
    FOREIGN KEY (leadCompanyId) REFERENCES company(companyId),
    FOREIGN KEY (leadLeadSourceId) REFERENCES leadSource(leadSourceId),
    PRIMARY KEY (leadId)
);

CREATE TABLE leadHandoff (
    leadHandoffId                BINARY(16) NOT NULL,
    leadHandoffLeadId            BINARY(16) NOT NULL,
    leadHandoffGiverProfileId    BINARY(16) NOT NULL,
    leadHandoffReceiverProfileId BINARY(16) NOT NULL,
    leadHandoffAction            CHAR(64)   NOT NULL,
    FOREIGN KEY (leadHandoffLeadId) REFERENCES lead(leadId),
    FOREIGN KEY (leadHandoffGiverProfileId) REFERENCES profile(profileId),
    FOREIGN KEY (leadHandoffReceiverProfileId) REFERENCES profile(profileId),
    PRIMARY KEY (leadHandoffId)
);

CREATE INDEX salesRoleCompanyIdx  ON salesRole(salesRoleCompanyId);
CREATE INDEX profileCompanyIdx    ON profile(profileCompanyId);
CREATE INDEX profileNameIdx       ON profile(profileName);
CREATE INDEX leadSourceCompanyIdx ON leadSource(leadSourceCompanyId);
CREATE INDEX leadCompanyIdx       ON lead(leadCompanyId);
CREATE INDEX leadHandoffLeadIdx   ON leadHandoff(leadHandoffLeadId);
";

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use rusqlite::{Connection, params};
  use uuid::Uuid;

  use super::*;
  use crate::{
    Company, Entity, Handoff, Lead, LeadSource, NewCompany, NewHandoff,
    NewLead, NewLeadSource, NewProfile, NewSalesRole, Profile, SalesRole,
    validate::{IdInput, validate_uuid},
  };

  fn connection() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory db");
    conn.execute_batch(SCHEMA).expect("schema applies");
    conn
  }

  fn columns(conn: &Connection, table: &str) -> BTreeSet<String> {
    let mut stmt = conn
      .prepare(&format!("SELECT name FROM pragma_table_info('{table}')"))
      .unwrap();
    stmt
      .query_map([], |row| row.get::<_, String>(0))
      .unwrap()
      .collect::<Result<_, _>>()
      .unwrap()
  }

  fn keys<E: Entity>(entity: &E) -> BTreeSet<String> {
    entity.to_serializable().unwrap().keys().cloned().collect()
  }

  fn company() -> Company {
    Company::new(NewCompany {
      company_id:                Uuid::new_v4().into(),
      company_country:           "USA".into(),
      company_email:             "ops@example.com".into(),
      company_name:              "Acme".into(),
      company_phone:             None,
      company_postal_code:       "87102".into(),
      company_salesforce_org_id: None,
      company_state:             "NM".into(),
    })
    .unwrap()
  }

  #[test]
  fn columns_match_serialized_keys() {
    let conn = connection();
    let company_id: IdInput = Uuid::new_v4().into();

    assert_eq!(columns(&conn, Company::TABLE), keys(&company()));

    let role = SalesRole::new(NewSalesRole {
      sales_role_id:         Uuid::new_v4().into(),
      sales_role_company_id: company_id.clone(),
      sales_role_name:       "a".repeat(64),
      sales_role_type:       "b".repeat(64),
    })
    .unwrap();
    assert_eq!(columns(&conn, SalesRole::TABLE), keys(&role));

    let source = LeadSource::new(NewLeadSource {
      lead_source_id:         Uuid::new_v4().into(),
      lead_source_company_id: company_id.clone(),
      lead_source_name:       "c".repeat(64),
      lead_source_type:       "d".repeat(64),
    })
    .unwrap();
    assert_eq!(columns(&conn, LeadSource::TABLE), keys(&source));

    let lead = Lead::new(NewLead {
      lead_id:             Uuid::new_v4().into(),
      lead_company_id:     company_id.clone(),
      lead_lead_source_id: source.id().into(),
      lead_contact_email:  None,
      lead_contact_name:   "Pat".into(),
      lead_contact_phone:  None,
      lead_date_time:      None,
      lead_name:           None,
      lead_sales_force_id: None,
      lead_sold_amount:    None,
      lead_status:         None,
    })
    .unwrap();
    assert_eq!(columns(&conn, Lead::TABLE), keys(&lead));

    let handoff = Handoff::new(NewHandoff {
      lead_handoff_id:                  Uuid::new_v4().into(),
      lead_handoff_lead_id:             lead.id().into(),
      lead_handoff_giver_profile_id:    Uuid::new_v4().into(),
      lead_handoff_receiver_profile_id: Uuid::new_v4().into(),
      lead_handoff_action:              "e".repeat(64),
    })
    .unwrap();
    assert_eq!(columns(&conn, Handoff::TABLE), keys(&handoff));

    let profile = Profile::new(NewProfile {
      profile_id:               Uuid::new_v4().into(),
      profile_company_id:       company_id,
      profile_sales_role_id:    role.id().into(),
      profile_active:           false,
      profile_activation_token: None,
      profile_email:            "pat@example.com".into(),
      profile_hash:             "f".repeat(128),
      profile_image:            "pat.png".into(),
      profile_last_login:       None,
      profile_name:             "Pat".into(),
      profile_salt:             "0".repeat(64),
      profile_sales_force_id:   None,
    })
    .unwrap();
    let mut expected = keys(&profile);
    expected.insert("profileHash".into());
    expected.insert("profileSalt".into());
    assert_eq!(columns(&conn, Profile::TABLE), expected);
  }

  #[test]
  fn binary_ids_round_trip_through_a_row() {
    let conn = connection();
    let company = company();

    conn
      .execute(
        "INSERT INTO company (companyId, companyCountry, companyEmail,
           companyName, companyPostalCode, companyState)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
          company.id().as_bytes().to_vec(),
          company.country(),
          company.email(),
          company.name(),
          company.postal_code(),
          company.state(),
        ],
      )
      .unwrap();

    let stored: Vec<u8> = conn
      .query_row("SELECT companyId FROM company", [], |row| row.get(0))
      .unwrap();
    let id = validate_uuid("companyId", IdInput::Bytes(stored)).unwrap();
    assert_eq!(id, company.id());
  }
}
