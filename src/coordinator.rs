//! Submission/progress coordinator — owns the full lifecycle of one
//! registration attempt.
//!
//! The attempt issues exactly one network request and, while it is
//! outstanding, runs two decoupled tickers purely for user feedback: one
//! rotates through a fixed list of status messages, the other inches a
//! simulated percentage toward a cap strictly below 100. The real response
//! is the only thing that can terminate the attempt; the tickers carry no
//! authority over completion.
//!
//! Observer contract: the callback fires synchronously with the initial
//! `in_progress` snapshot before any ticker runs, then on every ticker
//! update, then exactly once more with the terminal snapshot after both
//! tickers are stopped. A terminal notification guarantees no further
//! notifications for this attempt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::destination::DestinationConfig;
use crate::errors::RegistrationError;
use crate::model::RegistrationPayload;
use crate::progress::{FinalResult, ProgressState, StepStatus};
use crate::response;
use crate::transport::RegistrationTransport;

/// Rotating status messages shown while the request is outstanding. The
/// ticker holds on the last entry once the list is exhausted.
pub const ROTATING_MESSAGES: [&str; 7] = [
    "Iniciando proceso de creación...",
    "Registrando empresa en el sistema...",
    "Configurando usuario master...",
    "Creando base de datos dedicada...",
    "Aplicando configuraciones del tenant...",
    "Finalizando configuración...",
    "Proceso en curso, por favor espera...",
];

pub const SUCCESS_MESSAGE: &str = "Empresa creada exitosamente";
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión con el servidor";
pub const MISSING_DESTINATION_MESSAGE: &str = "Debe seleccionar un entorno antes de continuar";

/// Observer invoked with a snapshot on every progress mutation.
pub type ProgressObserver = Arc<dyn Fn(ProgressState) + Send + Sync>;

/// Result contract back to the caller. Always resolved, never an error:
/// every failure category is folded into the progress state.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    pub progress: ProgressState,
}

/// Timing knobs for the simulated progress. Defaults advertise the
/// "several minutes" estimate: a full traversal to the cap takes about five
/// minutes at 1 % per three seconds, with a message change every 45 s.
#[derive(Debug, Clone)]
pub struct ProgressTuning {
    pub message_interval: Duration,
    pub percent_interval: Duration,
    pub percent_step: u8,
    /// Strictly below 100; reaching 100 is reserved for true completion.
    pub percent_cap: u8,
}

impl Default for ProgressTuning {
    fn default() -> Self {
        Self {
            message_interval: Duration::from_secs(45),
            percent_interval: Duration::from_secs(3),
            percent_step: 1,
            percent_cap: 95,
        }
    }
}

/// Orchestrates one registration attempt over the given transport.
pub struct Coordinator<T> {
    transport: T,
    tuning: ProgressTuning,
}

impl<T: RegistrationTransport> Coordinator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, tuning: ProgressTuning::default() }
    }

    pub fn with_tuning(transport: T, tuning: ProgressTuning) -> Self {
        Self { transport, tuning }
    }

    /// Run one registration attempt to a terminal state.
    ///
    /// Takes the payload by value as a snapshot: the caller's live form
    /// state is never touched. Exactly one request is issued; there are no
    /// automatic retries. With no destination configured the attempt fails
    /// fast — no timers, no network call, zero observer notifications.
    pub async fn submit(
        &self,
        payload: RegistrationPayload,
        destination: Option<&DestinationConfig>,
        observer: ProgressObserver,
    ) -> SubmissionOutcome {
        let Some(dest) = destination else {
            let error = RegistrationError::MissingDestination;
            tracing::warn!("registration attempted without a destination");
            let mut progress = ProgressState::for_attempt();
            let step = progress.step_mut();
            step.status = StepStatus::Error;
            step.message = Some(error.user_message());
            return SubmissionOutcome {
                success: false,
                message: error.user_message(),
                progress,
            };
        };

        let shared = Arc::new(Mutex::new(ProgressState::for_attempt()));

        // Initial notification, synchronous and before any ticker exists.
        {
            let mut progress = lock(&shared);
            let step = progress.step_mut();
            step.status = StepStatus::InProgress;
            step.message = Some(ROTATING_MESSAGES[0].to_string());
            step.percentage = Some(0);
            observer(progress.clone());
        }

        let tickers = TickerGuard::start(Arc::clone(&shared), Arc::clone(&observer), &self.tuning);

        tracing::info!(destination = dest.name, url = dest.api_url, "sending registration request");
        let result = self.transport.submit(dest.api_url, &payload).await;

        // Stop both tickers before interpreting the body so no simulated
        // update can land after the terminal notification.
        tickers.stop();

        match result {
            Ok(body) => {
                if response::has_business_error(&body) || !response::is_success_response(&body) {
                    let error = RegistrationError::Business {
                        message: response::extract_error_message(&body),
                    };
                    tracing::warn!(error = %error, "registration rejected");
                    fail(&shared, &observer, error.user_message())
                } else {
                    succeed(&shared, &observer, dest, &payload, &body)
                }
            }
            Err(transport_err) => {
                let error = RegistrationError::from(transport_err);
                tracing::warn!(error = %error, "registration request failed");
                fail(&shared, &observer, error.user_message())
            }
        }
    }
}

fn lock(shared: &Arc<Mutex<ProgressState>>) -> MutexGuard<'_, ProgressState> {
    shared.lock().expect("progress state lock poisoned")
}

fn fail(
    shared: &Arc<Mutex<ProgressState>>,
    observer: &ProgressObserver,
    message: String,
) -> SubmissionOutcome {
    let mut progress = lock(shared);
    let step = progress.step_mut();
    step.status = StepStatus::Error;
    step.message = Some(message.clone());
    // Percentage is deliberately left wherever the ticker last put it.
    observer(progress.clone());
    SubmissionOutcome { success: false, message, progress: progress.clone() }
}

fn succeed(
    shared: &Arc<Mutex<ProgressState>>,
    observer: &ProgressObserver,
    dest: &DestinationConfig,
    payload: &RegistrationPayload,
    body: &serde_json::Value,
) -> SubmissionOutcome {
    let mut progress = lock(shared);
    let step = progress.step_mut();
    step.status = StepStatus::Completed;
    step.message = Some(SUCCESS_MESSAGE.to_string());
    step.percentage = Some(100);
    progress.is_completed = true;

    let data = body.get("data");
    let server = |key: &str| {
        data.and_then(|d| d.get(key)).and_then(serde_json::Value::as_str).map(str::to_string)
    };
    progress.final_result = Some(FinalResult {
        access_link: server("accessLink").unwrap_or_else(|| dest.access_link.to_string()),
        username: server("username").unwrap_or_else(|| payload.master_user.username().to_string()),
        message: server("message").unwrap_or_else(|| {
            format!("¡Bienvenido! Tu empresa \"{}\" está lista para usar.", payload.company_name())
        }),
    });

    observer(progress.clone());
    SubmissionOutcome {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        progress: progress.clone(),
    }
}

/// Shared cleanup handle for the two progress tickers.
///
/// `stop` is idempotent and also runs on drop, so an attempt whose future is
/// dropped mid-flight cannot leak callbacks against a discarded state. The
/// stop flag is re-checked after taking the state lock: once a stop has been
/// observed under the lock, no further observer call can be emitted, which
/// keeps the terminal notification last.
struct TickerGuard {
    stopped: Arc<AtomicBool>,
    message_task: JoinHandle<()>,
    percent_task: JoinHandle<()>,
}

impl TickerGuard {
    fn start(
        shared: Arc<Mutex<ProgressState>>,
        observer: ProgressObserver,
        tuning: &ProgressTuning,
    ) -> Self {
        let stopped = Arc::new(AtomicBool::new(false));

        let message_task = tokio::spawn(Self::run_message_ticker(
            Arc::clone(&shared),
            Arc::clone(&observer),
            Arc::clone(&stopped),
            tuning.message_interval,
        ));
        let percent_task = tokio::spawn(Self::run_percent_ticker(
            shared,
            observer,
            Arc::clone(&stopped),
            tuning.percent_interval,
            tuning.percent_step,
            tuning.percent_cap,
        ));

        Self { stopped, message_task, percent_task }
    }

    /// Advance through the rotating messages, holding on the last one once
    /// the list is exhausted — never a blank message.
    async fn run_message_ticker(
        shared: Arc<Mutex<ProgressState>>,
        observer: ProgressObserver,
        stopped: Arc<AtomicBool>,
        period: Duration,
    ) {
        let mut index = 1usize; // the first message was emitted synchronously
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // immediate first tick
        loop {
            interval.tick().await;
            if stopped.load(Ordering::SeqCst) {
                return;
            }
            let mut progress = lock(&shared);
            if stopped.load(Ordering::SeqCst) {
                return;
            }
            let message = ROTATING_MESSAGES[index.min(ROTATING_MESSAGES.len() - 1)];
            progress.step_mut().message = Some(message.to_string());
            observer(progress.clone());
            if index < ROTATING_MESSAGES.len() - 1 {
                index += 1;
            }
        }
    }

    /// Inch the percentage toward the cap. Never reaches 100: that value is
    /// reserved for true completion.
    async fn run_percent_ticker(
        shared: Arc<Mutex<ProgressState>>,
        observer: ProgressObserver,
        stopped: Arc<AtomicBool>,
        period: Duration,
        step_size: u8,
        cap: u8,
    ) {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            if stopped.load(Ordering::SeqCst) {
                return;
            }
            let mut progress = lock(&shared);
            if stopped.load(Ordering::SeqCst) {
                return;
            }
            let current = progress.step().percentage.unwrap_or(0);
            if current < cap {
                progress.step_mut().percentage = Some(current.saturating_add(step_size).min(cap));
                observer(progress.clone());
            }
        }
    }

    /// Idempotent: setting the flag twice and aborting a finished task are
    /// both harmless.
    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.message_task.abort();
        self.percent_task.abort();
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.stop();
    }
}
