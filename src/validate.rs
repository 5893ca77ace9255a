//! Pure, step-scoped field validators.
//!
//! Each validator maps a payload snapshot to a field-name → message map; an
//! empty map means the step is valid. Validators never touch the network and
//! never look outside their own step. Error keys use the backend field names
//! so they line up with what the review screen and logs show.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::RegistrationPayload;
use crate::wizard::WizardStep;

/// Field-name → error-message map for one step. Empty ⇔ valid.
pub type ValidationErrors = BTreeMap<&'static str, String>;

pub const PHONE_LENGTH: usize = 10;
pub const DIGIT_VERIFIER_MIN: u8 = 0;
pub const DIGIT_VERIFIER_MAX: u8 = 9;

/// Countries the backend provisions tenants for.
pub struct Country {
    pub label: &'static str,
    pub code: &'static str,
}

pub const COUNTRIES: [Country; 4] = [
    Country { label: "Colombia", code: "COL" },
    Country { label: "Panamá", code: "PAN" },
    Country { label: "México", code: "MEX" },
    Country { label: "Perú", code: "PER" },
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid static regex")
});

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the company-information step.
///
/// The verification digit is checked by range, never by truthiness: 0 is a
/// valid digit and must not be reported as missing.
pub fn validate_company(data: &RegistrationPayload) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.identification.trim().is_empty() {
        errors.insert("identificacion", "La identificación es requerida".into());
    }
    if data.company_name().trim().is_empty() {
        errors.insert("nombreEmpresa", "El nombre de la empresa es requerido".into());
    }
    if !(DIGIT_VERIFIER_MIN..=DIGIT_VERIFIER_MAX).contains(&data.verification_digit) {
        errors.insert(
            "digitoVerificador",
            format!(
                "El dígito verificador debe ser entre {DIGIT_VERIFIER_MIN} y {DIGIT_VERIFIER_MAX}"
            ),
        );
    }
    if data.phone.trim().is_empty() {
        errors.insert("celular", "El celular es requerido".into());
    } else if !is_valid_phone(&data.phone) {
        errors.insert(
            "celular",
            format!("El celular debe tener exactamente {PHONE_LENGTH} dígitos"),
        );
    }
    if data.country.trim().is_empty() {
        errors.insert("pais", "El país es requerido".into());
    }

    errors
}

/// Validate the legal-representative step.
pub fn validate_legal_representative(data: &RegistrationPayload) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let rep = &data.legal_representative;

    if rep.identification.trim().is_empty() {
        errors.insert("identificacion", "La identificación es requerida".into());
    }
    if rep.full_name.trim().is_empty() {
        errors.insert("nombreCompleto", "El nombre completo es requerido".into());
    }
    if rep.phone.trim().is_empty() {
        errors.insert("celular", "El celular es requerido".into());
    } else if !is_valid_phone(&rep.phone) {
        errors.insert(
            "celular",
            format!("El celular debe tener exactamente {PHONE_LENGTH} dígitos"),
        );
    }
    if rep.email.trim().is_empty() {
        errors.insert("correoElectronico", "El correo electrónico es requerido".into());
    } else if !is_valid_email(&rep.email) {
        errors.insert("correoElectronico", "El correo electrónico no es válido".into());
    }

    errors
}

/// Validate the master-user step. The phone is deliberately optional here,
/// unlike the representative step.
pub fn validate_master_user(data: &RegistrationPayload) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let user = &data.master_user;

    if user.full_name().trim().is_empty() {
        errors.insert("nombreCompleto", "El nombre completo es requerido".into());
    }
    if user.identification.trim().is_empty() {
        errors.insert("identificacion", "La identificación es requerida".into());
    }
    if user.email.trim().is_empty() {
        errors.insert("correo", "El correo electrónico es requerido".into());
    } else if !is_valid_email(&user.email) {
        errors.insert("correo", "El correo electrónico no es válido".into());
    }

    errors
}

/// Dispatch to the validator that owns the given step. The review step has
/// no fields of its own and always validates clean.
pub fn validate_step(step: WizardStep, data: &RegistrationPayload) -> ValidationErrors {
    match step {
        WizardStep::Company => validate_company(data),
        WizardStep::LegalRepresentative => validate_legal_representative(data),
        WizardStep::MasterUser => validate_master_user(data),
        WizardStep::Review => ValidationErrors::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LegalRepresentative;

    fn valid_payload() -> RegistrationPayload {
        let mut payload = RegistrationPayload::new();
        payload.identification = "900123456".into();
        payload.set_company_name("Acme Corp");
        payload.verification_digit = 3;
        payload.phone = "3001234567".into();
        payload.country = "COL".into();
        payload.legal_representative = LegalRepresentative {
            identification: "1020304050".into(),
            full_name: "Pedro Rep".into(),
            phone: "3017654321".into(),
            email: "pedro@acme.co".into(),
        };
        payload.master_user.set_full_name("Maria Admin");
        payload.master_user.identification = "1090807060".into();
        payload.master_user.email = "maria@acme.co".into();
        payload
    }

    // =========================================
    // Company step
    // =========================================

    #[test]
    fn valid_company_step_has_no_errors() {
        assert!(validate_company(&valid_payload()).is_empty());
    }

    #[test]
    fn verification_digit_zero_is_valid() {
        let mut payload = valid_payload();
        payload.verification_digit = 0;
        let errors = validate_company(&payload);
        assert!(!errors.contains_key("digitoVerificador"), "0 must not be treated as missing");
    }

    #[test]
    fn verification_digit_out_of_range_is_rejected() {
        let mut payload = valid_payload();
        payload.verification_digit = 10;
        assert!(validate_company(&payload).contains_key("digitoVerificador"));
    }

    #[test]
    fn company_required_fields_are_reported() {
        let payload = RegistrationPayload::new();
        let errors = validate_company(&payload);
        assert!(errors.contains_key("identificacion"));
        assert!(errors.contains_key("nombreEmpresa"));
        assert!(errors.contains_key("celular"));
        assert!(errors.contains_key("pais"));
    }

    #[test]
    fn company_phone_must_be_ten_digits() {
        for bad in ["300123456", "30012345678", "30012345ab", "300 123456"] {
            let mut payload = valid_payload();
            payload.phone = bad.into();
            assert!(
                validate_company(&payload).contains_key("celular"),
                "expected error for {bad:?}"
            );
        }
        let mut payload = valid_payload();
        payload.phone = "3001234567".into();
        assert!(!validate_company(&payload).contains_key("celular"));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut payload = valid_payload();
        payload.identification = "   ".into();
        assert!(validate_company(&payload).contains_key("identificacion"));
    }

    // =========================================
    // Legal representative step
    // =========================================

    #[test]
    fn valid_representative_step_has_no_errors() {
        assert!(validate_legal_representative(&valid_payload()).is_empty());
    }

    #[test]
    fn representative_phone_is_required() {
        let mut payload = valid_payload();
        payload.legal_representative.phone = "".into();
        assert!(validate_legal_representative(&payload).contains_key("celular"));
    }

    #[test]
    fn representative_email_pattern_is_enforced() {
        for bad in ["no-at.example", "a@b", "a@b.", "@b.co", "a @b.co"] {
            let mut payload = valid_payload();
            payload.legal_representative.email = bad.into();
            assert!(
                validate_legal_representative(&payload).contains_key("correoElectronico"),
                "expected error for {bad:?}"
            );
        }
        let mut payload = valid_payload();
        payload.legal_representative.email = "a@b.co".into();
        assert!(!validate_legal_representative(&payload).contains_key("correoElectronico"));
    }

    // =========================================
    // Master user step
    // =========================================

    #[test]
    fn valid_master_user_step_has_no_errors() {
        assert!(validate_master_user(&valid_payload()).is_empty());
    }

    #[test]
    fn master_user_phone_is_optional() {
        let mut payload = valid_payload();
        payload.master_user.phone = "".into();
        assert!(validate_master_user(&payload).is_empty());
    }

    #[test]
    fn master_user_email_is_required_and_pattern_checked() {
        let mut payload = valid_payload();
        payload.master_user.email = "".into();
        assert!(validate_master_user(&payload).contains_key("correo"));
        payload.master_user.email = "not-an-email".into();
        assert!(validate_master_user(&payload).contains_key("correo"));
    }

    // =========================================
    // Dispatch
    // =========================================

    #[test]
    fn review_step_always_validates_clean() {
        let errors = validate_step(WizardStep::Review, &RegistrationPayload::new());
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_are_never_merged_across_steps() {
        let mut payload = valid_payload();
        payload.legal_representative.email = "broken".into();
        // The company step stays clean even though the representative step fails.
        assert!(validate_step(WizardStep::Company, &payload).is_empty());
        assert!(!validate_step(WizardStep::LegalRepresentative, &payload).is_empty());
    }
}
