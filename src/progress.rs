//! Progress state published to observers during a registration attempt.
//!
//! One `ProgressState` is created fresh per attempt, mutated exclusively by
//! the coordinator, and handed to observers as cloned snapshots so an
//! observer can never corrupt the live record.

use serde::Serialize;

/// Lifecycle status of a progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
    Error,
}

/// One tracked unit of work shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    /// Current human-readable status message, if any has been emitted.
    pub message: Option<String>,
    /// Simulated percentage, 0–100. 100 is reserved for true completion.
    pub percentage: Option<u8>,
}

/// Final result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalResult {
    pub access_link: String,
    pub username: String,
    pub message: String,
}

/// Full progress record for one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    pub steps: Vec<ProgressStep>,
    pub is_completed: bool,
    /// Populated only on success.
    pub final_result: Option<FinalResult>,
}

impl ProgressState {
    /// Fresh state for a new attempt: a single pending step.
    pub fn for_attempt() -> Self {
        Self {
            steps: vec![ProgressStep {
                id: 1,
                title: "Procesando Solicitud".into(),
                description: "Este proceso puede tomar varios minutos...".into(),
                status: StepStatus::Pending,
                message: None,
                percentage: None,
            }],
            is_completed: false,
            final_result: None,
        }
    }

    /// The single tracked step of this attempt.
    pub fn step(&self) -> &ProgressStep {
        &self.steps[0]
    }

    pub fn step_mut(&mut self) -> &mut ProgressStep {
        &mut self.steps[0]
    }

    /// Completed or errored; no further mutation is expected.
    pub fn is_terminal(&self) -> bool {
        self.is_completed || self.steps.iter().any(|s| s.status == StepStatus::Error)
    }
}
