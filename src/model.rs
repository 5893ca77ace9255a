//! Form data model for a company registration.
//!
//! The wire format keeps the backend's Spanish camelCase field names via
//! serde renames; the Rust side uses English names. Two fields are derived
//! and never edited directly:
//! - `nombreEmpresaSinEspacios` — uppercase, whitespace-stripped company name
//! - `usuarioMaster.username` — `MASTER` + uppercase, whitespace-stripped
//!   full name of the master user
//!
//! Both are kept in sync by the setters; `normalize` re-derives them after
//! deserializing a payload from an external source.

use serde::{Deserialize, Serialize};

/// Uppercase a name and strip all whitespace (including interior runs).
pub fn compact_name(name: &str) -> String {
    name.split_whitespace().collect::<String>().to_uppercase()
}

/// Derive the master username from the master user's full name.
///
/// `derive_username("Juan Perez")` == `"MASTERJUANPEREZ"`. Deterministic and
/// idempotent: re-applying the function to its own output is a no-op, so a
/// username is never double-prefixed.
pub fn derive_username(full_name: &str) -> String {
    let compact = compact_name(full_name);
    if compact.starts_with("MASTER") {
        compact
    } else {
        format!("MASTER{compact}")
    }
}

/// Legal representative of the company (second wizard step).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalRepresentative {
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "correoElectronico")]
    pub email: String,
}

/// Administrator account created for the new tenant (third wizard step).
///
/// `full_name` and `username` are private so the username cannot drift out of
/// sync: [`MasterUser::set_full_name`] is the only way to change the name and
/// it re-derives the username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterUser {
    #[serde(rename = "nombreCompleto")]
    full_name: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    username: String,
}

impl MasterUser {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Set the full name and re-derive the username from it.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
        self.username = derive_username(&self.full_name);
    }
}

/// Aggregated payload collected across all wizard steps.
///
/// Owned by the caller; the coordinator receives it by value as a snapshot
/// and never mutates the live form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "nombreEmpresa")]
    company_name: String,
    #[serde(rename = "nombreEmpresaSinEspacios")]
    company_name_compact: String,
    #[serde(rename = "digitoVerificador")]
    pub verification_digit: u8,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "representanteLegal")]
    pub legal_representative: LegalRepresentative,
    #[serde(rename = "usuarioMaster")]
    pub master_user: MasterUser,
}

impl RegistrationPayload {
    /// Empty initial form. Resetting the form after a successful
    /// registration returns to this state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_name_compact(&self) -> &str {
        &self.company_name_compact
    }

    /// Set the company name and re-derive the whitespace-stripped variant.
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company_name = name.into();
        self.company_name_compact = compact_name(&self.company_name);
    }

    /// Re-derive both derived fields from their sources.
    ///
    /// Call after deserializing a payload from an external file, where the
    /// derived fields may be missing or inconsistent.
    pub fn normalize(&mut self) {
        self.company_name_compact = compact_name(&self.company_name);
        let full_name = self.master_user.full_name.clone();
        self.master_user.set_full_name(full_name);
    }
}
