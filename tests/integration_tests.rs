//! Integration tests for the registrar CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a registrar Command
fn registrar() -> Command {
    cargo_bin_cmd!("registrar")
}

/// A structurally complete payload file, as `--input` expects it.
fn write_payload(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("payload.json");
    fs::write(
        &path,
        r#"{
            "identificacion": "900123456",
            "nombreEmpresa": "Acme Corp",
            "nombreEmpresaSinEspacios": "ACMECORP",
            "digitoVerificador": 0,
            "celular": "3001234567",
            "pais": "COL",
            "representanteLegal": {
                "identificacion": "1020304050",
                "nombreCompleto": "Pedro Rep",
                "celular": "3017654321",
                "correoElectronico": "pedro@acme.co"
            },
            "usuarioMaster": {
                "nombreCompleto": "Maria Admin",
                "identificacion": "1090807060",
                "celular": "",
                "correo": "maria@acme.co",
                "username": "MASTERMARIAADMIN"
            }
        }"#,
    )
    .unwrap();
    path
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_help() {
        registrar()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("registration wizard"));
    }

    #[test]
    fn test_version() {
        registrar().arg("--version").assert().success();
    }

    #[test]
    fn test_register_help_lists_destination_values() {
        registrar()
            .args(["register", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--destination"))
            .stdout(predicate::str::contains("qa"))
            .stdout(predicate::str::contains("prd"));
    }
}

// =============================================================================
// Destinations
// =============================================================================

mod destinations {
    use super::*;

    #[test]
    fn test_destinations_lists_both_environments() {
        registrar()
            .arg("destinations")
            .assert()
            .success()
            .stdout(predicate::str::contains("QA"))
            .stdout(predicate::str::contains("PRD"))
            .stdout(predicate::str::contains("Ambiente de Pruebas"))
            .stdout(predicate::str::contains("https://consware.app.n8n.cloud/webhook/"));
    }
}

// =============================================================================
// Register (non-interactive)
// =============================================================================

mod register {
    use super::*;

    #[test]
    fn test_register_without_destination_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let payload = write_payload(&dir);

        registrar()
            .args(["register", "--input"])
            .arg(&payload)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Debe seleccionar un entorno"));
    }

    #[test]
    fn test_register_json_ui_reports_configuration_error_in_outcome() {
        let dir = TempDir::new().unwrap();
        let payload = write_payload(&dir);

        registrar()
            .args(["register", "--ui", "json", "--input"])
            .arg(&payload)
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"success\": false"))
            .stdout(predicate::str::contains("Debe seleccionar un entorno"));
    }

    #[test]
    fn test_register_with_missing_input_file_fails() {
        registrar()
            .args(["register", "--input", "/nonexistent/payload.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read payload file"));
    }

    #[test]
    fn test_register_with_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        registrar()
            .args(["register", "--input"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse payload file"));
    }

    #[test]
    fn test_register_rejects_unknown_destination() {
        registrar()
            .args(["register", "--destination", "staging"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}
