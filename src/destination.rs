//! Destination (environment) configuration for the registration endpoint.
//!
//! The selected destination is threaded explicitly from the CLI into the
//! coordinator invocation; there is no ambient "current environment" state.
//! An unselected destination surfaces as a configuration error at submit
//! time.

use clap::ValueEnum;

/// Named remote endpoint the registration is submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Destination {
    /// Ambiente de Pruebas
    Qa,
    /// Ambiente de Producción
    Prd,
}

/// Fixed per-destination configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub api_url: &'static str,
    /// Default access link handed to the user when the server response does
    /// not supply one.
    pub access_link: &'static str,
}

const QA_CONFIG: DestinationConfig = DestinationConfig {
    name: "QA",
    description: "Ambiente de Pruebas",
    api_url: "https://consware.app.n8n.cloud/webhook/regitrarQA",
    access_link: "https://pruebapp.gasup.com.co/front/#/auth",
};

const PRD_CONFIG: DestinationConfig = DestinationConfig {
    name: "PRD",
    description: "Ambiente de Producción",
    api_url: "https://consware.app.n8n.cloud/webhook/registrarPRD",
    access_link: "https://app.gasup.com.co/front/#/auth",
};

impl Destination {
    pub const ALL: [Destination; 2] = [Destination::Qa, Destination::Prd];

    pub fn config(self) -> &'static DestinationConfig {
        match self {
            Destination::Qa => &QA_CONFIG,
            Destination::Prd => &PRD_CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_destination_has_a_distinct_endpoint() {
        let qa = Destination::Qa.config();
        let prd = Destination::Prd.config();
        assert_ne!(qa.api_url, prd.api_url);
        assert_ne!(qa.access_link, prd.access_link);
    }

    #[test]
    fn destination_table_covers_all_variants() {
        for dest in Destination::ALL {
            let config = dest.config();
            assert!(config.api_url.starts_with("https://"));
            assert!(config.access_link.starts_with("https://"));
            assert!(!config.name.is_empty());
        }
    }
}
