//! Command execution

use tracing::instrument;

use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::PfxOutcome;
use crate::infrastructure::di::ServiceContainer;

/// Generate (or preview) the archive described by `cli`.
///
/// Reads the password from the container's settings before any input is
/// touched, then hands the request to the PFX service.
#[instrument(level = "debug", skip_all)]
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<PfxOutcome> {
    let password = container.settings.password()?;
    let outcome = container.pfx_service.generate(&cli.request(), password)?;

    match &outcome {
        PfxOutcome::DryRun { path, .. } => {
            output::notice("Dry run set (--dryrun). pfx will not be written.");
            output::detail(&format!("PFX file path = {}", path.display()));
        }
        PfxOutcome::Written { path, .. } => {
            output::success(&format!("PFX file created: {}", path.display()));
        }
    }
    Ok(outcome)
}
