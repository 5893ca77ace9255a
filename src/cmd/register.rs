use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use registrar::coordinator::{Coordinator, ProgressObserver};
use registrar::destination::Destination;
use registrar::model::RegistrationPayload;
use registrar::transport::HttpTransport;
use registrar::ui::icons::CROSS;
use registrar::ui::{ProgressRenderer, UiMode};
use registrar::validate::{COUNTRIES, ValidationErrors};
use registrar::wizard::{Wizard, WizardStep};

/// Collect a payload (interactively or from a file) and submit it.
pub async fn cmd_register(
    destination: Option<Destination>,
    input: Option<&Path>,
    ui: UiMode,
) -> Result<()> {
    let payload = match input {
        Some(path) => load_payload(path)?,
        None => collect_payload()?,
    };

    let coordinator = Coordinator::new(HttpTransport::new());
    let config = destination.map(Destination::config);

    let outcome = match ui {
        UiMode::Full => {
            let renderer = Arc::new(ProgressRenderer::new());
            let sink = Arc::clone(&renderer);
            let observer: ProgressObserver = Arc::new(move |snapshot| sink.render(&snapshot));
            let outcome = coordinator.submit(payload, config, observer).await;
            if let Some(result) = &outcome.progress.final_result {
                renderer.print_final_result(result);
            }
            outcome
        }
        UiMode::Json => {
            let observer: ProgressObserver = Arc::new(|_| {});
            let outcome = coordinator.submit(payload, config, observer).await;
            println!(
                "{}",
                serde_json::to_string_pretty(&outcome)
                    .context("Failed to serialize submission outcome")?
            );
            outcome
        }
    };

    if !outcome.success {
        bail!("{}", outcome.message);
    }
    Ok(())
}

/// Read a completed payload from a JSON file and re-derive its derived
/// fields so a hand-edited file cannot smuggle an inconsistent username.
fn load_payload(path: &Path) -> Result<RegistrationPayload> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file at {}", path.display()))?;
    let mut payload: RegistrationPayload = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse payload file at {}", path.display()))?;
    payload.normalize();
    Ok(payload)
}

enum ReviewAction {
    Submit,
    EditCompany,
    EditRepresentative,
    EditUser,
    Cancel,
}

/// Walk the wizard steps interactively until the review step confirms.
fn collect_payload() -> Result<RegistrationPayload> {
    let theme = ColorfulTheme::default();
    let mut payload = RegistrationPayload::new();
    let mut wizard = Wizard::new();

    loop {
        print_step_header(&wizard);
        match wizard.current() {
            WizardStep::Company => prompt_company(&theme, &mut payload)?,
            WizardStep::LegalRepresentative => prompt_representative(&theme, &mut payload)?,
            WizardStep::MasterUser => prompt_master_user(&theme, &mut payload)?,
            WizardStep::Review => {
                print_review(&payload);
                match prompt_review_action(&theme)? {
                    ReviewAction::Submit => return Ok(payload),
                    ReviewAction::EditCompany => wizard.go_to(0),
                    ReviewAction::EditRepresentative => wizard.go_to(1),
                    ReviewAction::EditUser => wizard.go_to(2),
                    ReviewAction::Cancel => bail!("Registro cancelado por el usuario"),
                }
                continue;
            }
        }
        if let Err(errors) = wizard.try_advance(&payload) {
            print_validation_errors(&errors);
        }
    }
}

fn print_step_header(wizard: &Wizard) {
    let step = wizard.current();
    println!();
    println!(
        "{} {} {} {}",
        style(format!("Paso {}/{}", wizard.index() + 1, registrar::wizard::STEP_COUNT))
            .dim(),
        style(step.title()).yellow().bold(),
        style("—").dim(),
        step.description()
    );
}

fn prompt_company(theme: &ColorfulTheme, payload: &mut RegistrationPayload) -> Result<()> {
    payload.identification = Input::with_theme(theme)
        .with_prompt("Identificación (NIT)")
        .allow_empty(true)
        .with_initial_text(payload.identification.clone())
        .interact_text()?;

    payload.verification_digit = Input::with_theme(theme)
        .with_prompt("Dígito verificador")
        .default(payload.verification_digit)
        .interact_text()?;

    let name: String = Input::with_theme(theme)
        .with_prompt("Nombre de la empresa")
        .allow_empty(true)
        .with_initial_text(payload.company_name().to_string())
        .interact_text()?;
    payload.set_company_name(name);

    payload.phone = Input::with_theme(theme)
        .with_prompt("Celular")
        .allow_empty(true)
        .with_initial_text(payload.phone.clone())
        .interact_text()?;

    let default_country =
        COUNTRIES.iter().position(|c| c.code == payload.country).unwrap_or(0);
    let labels: Vec<&str> = COUNTRIES.iter().map(|c| c.label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("País")
        .items(&labels)
        .default(default_country)
        .interact()?;
    payload.country = COUNTRIES[selection].code.to_string();

    payload.city = Input::with_theme(theme)
        .with_prompt("Ciudad (opcional)")
        .allow_empty(true)
        .with_initial_text(payload.city.clone())
        .interact_text()?;

    payload.address = Input::with_theme(theme)
        .with_prompt("Dirección (opcional)")
        .allow_empty(true)
        .with_initial_text(payload.address.clone())
        .interact_text()?;

    Ok(())
}

fn prompt_representative(theme: &ColorfulTheme, payload: &mut RegistrationPayload) -> Result<()> {
    let rep = &mut payload.legal_representative;

    rep.identification = Input::with_theme(theme)
        .with_prompt("Identificación del representante")
        .allow_empty(true)
        .with_initial_text(rep.identification.clone())
        .interact_text()?;

    rep.full_name = Input::with_theme(theme)
        .with_prompt("Nombre completo")
        .allow_empty(true)
        .with_initial_text(rep.full_name.clone())
        .interact_text()?;

    rep.phone = Input::with_theme(theme)
        .with_prompt("Celular")
        .allow_empty(true)
        .with_initial_text(rep.phone.clone())
        .interact_text()?;

    rep.email = Input::with_theme(theme)
        .with_prompt("Correo electrónico")
        .allow_empty(true)
        .with_initial_text(rep.email.clone())
        .interact_text()?;

    Ok(())
}

fn prompt_master_user(theme: &ColorfulTheme, payload: &mut RegistrationPayload) -> Result<()> {
    let full_name: String = Input::with_theme(theme)
        .with_prompt("Nombre completo")
        .allow_empty(true)
        .with_initial_text(payload.master_user.full_name().to_string())
        .interact_text()?;
    payload.master_user.set_full_name(full_name);

    // The username is derived, never typed.
    println!(
        "  {} {}",
        style("Usuario master:").dim(),
        style(payload.master_user.username()).cyan().bold()
    );

    payload.master_user.identification = Input::with_theme(theme)
        .with_prompt("Identificación")
        .allow_empty(true)
        .with_initial_text(payload.master_user.identification.clone())
        .interact_text()?;

    payload.master_user.phone = Input::with_theme(theme)
        .with_prompt("Celular (opcional)")
        .allow_empty(true)
        .with_initial_text(payload.master_user.phone.clone())
        .interact_text()?;

    payload.master_user.email = Input::with_theme(theme)
        .with_prompt("Correo electrónico")
        .allow_empty(true)
        .with_initial_text(payload.master_user.email.clone())
        .interact_text()?;

    Ok(())
}

fn print_review(payload: &RegistrationPayload) {
    let section = |title: &str| println!("\n  {}", style(title).underlined());
    let field = |label: &str, value: &str| {
        println!("    {} {}", style(format!("{label}:")).dim(), value);
    };

    section("Empresa");
    field("Identificación", payload.identification.as_str());
    field("Dígito verificador", &payload.verification_digit.to_string());
    field("Nombre", payload.company_name());
    field("Celular", payload.phone.as_str());
    field("País", payload.country.as_str());
    if !payload.city.is_empty() {
        field("Ciudad", payload.city.as_str());
    }
    if !payload.address.is_empty() {
        field("Dirección", payload.address.as_str());
    }

    section("Representante legal");
    let rep = &payload.legal_representative;
    field("Identificación", rep.identification.as_str());
    field("Nombre", rep.full_name.as_str());
    field("Celular", rep.phone.as_str());
    field("Correo", rep.email.as_str());

    section("Usuario master");
    let user = &payload.master_user;
    field("Nombre", user.full_name());
    field("Identificación", user.identification.as_str());
    field("Correo", user.email.as_str());
    field("Usuario", user.username());
    println!();
}

fn prompt_review_action(theme: &ColorfulTheme) -> Result<ReviewAction> {
    let options = [
        "Registrar la empresa",
        "Editar datos de la empresa",
        "Editar representante legal",
        "Editar usuario master",
        "Cancelar",
    ];
    let selection = Select::with_theme(theme)
        .with_prompt("¿Confirmar el registro?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ReviewAction::Submit,
        1 => ReviewAction::EditCompany,
        2 => ReviewAction::EditRepresentative,
        3 => ReviewAction::EditUser,
        _ => ReviewAction::Cancel,
    })
}

fn print_validation_errors(errors: &ValidationErrors) {
    println!();
    for (field, message) in errors {
        println!("  {}{}: {}", CROSS, style(field).yellow(), style(message).red());
    }
}
