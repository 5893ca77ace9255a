//! Step navigation state machine for the registration wizard.
//!
//! Four fixed steps: company, legal representative, master user, review.
//! Forward navigation is gated by the current step's validator; backward
//! navigation is unconditional so users can revise earlier answers freely.

use crate::model::RegistrationPayload;
use crate::validate::{ValidationErrors, validate_step};

pub const STEP_COUNT: usize = 4;

/// One screen of the wizard, each owning a validation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Company,
    LegalRepresentative,
    MasterUser,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; STEP_COUNT] = [
        WizardStep::Company,
        WizardStep::LegalRepresentative,
        WizardStep::MasterUser,
        WizardStep::Review,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Company => "Empresa",
            WizardStep::LegalRepresentative => "Representante",
            WizardStep::MasterUser => "Usuario",
            WizardStep::Review => "Revisión",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Company => "Datos básicos",
            WizardStep::LegalRepresentative => "Información legal",
            WizardStep::MasterUser => "Administrador",
            WizardStep::Review => "Confirmar datos",
        }
    }
}

/// Tracks the current step index and enforces the navigation rules.
#[derive(Debug, Default)]
pub struct Wizard {
    current: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == STEP_COUNT - 1
    }

    /// Fraction of the wizard completed, for the step header.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / STEP_COUNT as f64
    }

    /// Advance past the current step if it validates.
    ///
    /// On validation failure the step index is unchanged and the errors are
    /// returned. At the last step this is a validation-only no-op.
    pub fn try_advance(&mut self, data: &RegistrationPayload) -> Result<(), ValidationErrors> {
        let errors = validate_step(self.current(), data);
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.current + 1 < STEP_COUNT {
            self.current += 1;
        }
        Ok(())
    }

    /// Go back one step. Unconditional; no-op at the first step. No data is
    /// lost going backward.
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to a step by index. Out-of-bounds indices are a no-op.
    pub fn go_to(&mut self, index: usize) {
        if index < STEP_COUNT {
            self.current = index;
        }
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
        payload.verification_digit = 0;
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

    #[test]
    fn advance_is_blocked_by_invalid_current_step() {
        let mut wizard = Wizard::new();
        let empty = RegistrationPayload::new();
        assert!(wizard.try_advance(&empty).is_err());
        assert_eq!(wizard.current(), WizardStep::Company);
    }

    #[test]
    fn advance_walks_all_steps_with_valid_data() {
        let mut wizard = Wizard::new();
        let payload = valid_payload();
        assert!(wizard.try_advance(&payload).is_ok());
        assert_eq!(wizard.current(), WizardStep::LegalRepresentative);
        assert!(wizard.try_advance(&payload).is_ok());
        assert_eq!(wizard.current(), WizardStep::MasterUser);
        assert!(wizard.try_advance(&payload).is_ok());
        assert_eq!(wizard.current(), WizardStep::Review);
        assert!(wizard.is_last());
    }

    #[test]
    fn advance_at_last_step_is_a_no_op() {
        let mut wizard = Wizard::new();
        let payload = valid_payload();
        for _ in 0..STEP_COUNT + 2 {
            wizard.try_advance(&payload).unwrap();
        }
        assert_eq!(wizard.current(), WizardStep::Review);
    }

    #[test]
    fn back_is_unconditional_and_bypasses_validation() {
        let mut wizard = Wizard::new();
        let payload = valid_payload();
        wizard.try_advance(&payload).unwrap();

        // Data may now be invalid; going back must still work.
        wizard.back();
        assert_eq!(wizard.current(), WizardStep::Company);
    }

    #[test]
    fn back_at_first_step_is_a_no_op() {
        let mut wizard = Wizard::new();
        wizard.back();
        assert!(wizard.is_first());
    }

    #[test]
    fn go_to_bounds_checks() {
        let mut wizard = Wizard::new();
        wizard.go_to(2);
        assert_eq!(wizard.current(), WizardStep::MasterUser);
        wizard.go_to(99);
        assert_eq!(wizard.current(), WizardStep::MasterUser);
    }

    #[test]
    fn progress_fraction_spans_the_wizard() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress_fraction(), 0.25);
        wizard.go_to(3);
        assert_eq!(wizard.progress_fraction(), 1.0);
    }
}
