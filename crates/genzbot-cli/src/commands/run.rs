//! Implementation of the `genzbot run` command.
//!
//! Also used by `genzbot new --run` once generation has succeeded.

use std::io;
use std::path::Path;

use indicatif::ProgressBar;
use tracing::instrument;

use genzbot_adapters::{LocalFilesystem, SystemProcessRunner};
use genzbot_core::application::{EnvironmentProvisioner, ProvisionState};

use crate::{cli::RunArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args
        .dir
        .unwrap_or_else(|| config.defaults.output_dir.clone());
    provision(&root, &config, &output)
}

/// Create the virtual environment, install the manifest and run the service
/// in the foreground. Returns once the service exits.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn provision(root: &Path, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let mut provisioner = EnvironmentProvisioner::new(
        Box::new(SystemProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
    );
    if let Some(python) = &config.provision.python {
        provisioner = provisioner.with_python(python);
    }

    output.header(&format!("Provisioning {}", root.display()))?;

    let mut current: Option<(ProvisionState, ProgressBar)> = None;
    // The step callback cannot fail, so the first write error waits here.
    let mut write_error: Option<io::Error> = None;
    let result = provisioner.run_with(root, |state| {
        if let Some((done, bar)) = current.take() {
            bar.finish_and_clear();
            keep_first(&mut write_error, output.success(done.describe()));
        }
        if state == ProvisionState::LaunchService {
            // The service owns the terminal from here on.
            keep_first(
                &mut write_error,
                output.info(&format!(
                    "{} at http://127.0.0.1:5000 (Ctrl+C to stop)",
                    state.describe()
                )),
            );
        } else {
            current = Some((state, output.spinner(&format!("{}...", state.describe()))));
        }
    });

    if let Some((failed, bar)) = current.take() {
        bar.abandon();
        if result.is_err() {
            output.error(&format!("{} failed", failed.describe()))?;
        }
    }

    result?;
    if let Some(e) = write_error {
        return Err(e.into());
    }
    output.success("Bot stopped")?;
    Ok(())
}

fn keep_first(slot: &mut Option<io::Error>, result: io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "Failed to write provisioning progress");
        slot.get_or_insert(e);
    }
}
