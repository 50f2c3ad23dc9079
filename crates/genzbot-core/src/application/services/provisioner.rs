//! Environment provisioning and service launch.
//!
//! Provisioning is an explicit state machine:
//!
//! ```text
//! CreateEnv -> ActivateEnv -> InstallDependencies -> LaunchService -> Running
//! ```
//!
//! Each transition is one call to [`EnvironmentProvisioner::step`]. A failing
//! step returns an error and the sequence stops there; nothing is retried or
//! cleaned up. `ActivateEnv` spawns nothing: the later steps address the
//! environment's interpreter and package installer by resolved path.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Invocation, ProcessRunner},
    },
    domain::layout,
    error::GenZBotResult,
};

/// Operating system family of the machine running the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Unix,
    Windows,
}

impl HostPlatform {
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Directory of a venv holding its executables.
    pub const fn bin_dir(&self) -> &'static str {
        match self {
            Self::Unix => "bin",
            Self::Windows => "Scripts",
        }
    }

    pub fn executable(&self, name: &str) -> String {
        match self {
            Self::Unix => name.to_string(),
            Self::Windows => format!("{name}.exe"),
        }
    }

    /// Interpreter name used to create environments when none is configured.
    pub const fn default_python(&self) -> &'static str {
        match self {
            Self::Unix => "python3",
            Self::Windows => "python",
        }
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

/// Resolved paths of a project's isolated environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentLayout {
    pub root: PathBuf,
    pub venv: PathBuf,
    pub python: PathBuf,
    pub pip: PathBuf,
}

impl EnvironmentLayout {
    pub fn resolve(root: &Path, platform: HostPlatform) -> Self {
        let venv = root.join(layout::VENV_DIR);
        let bin = venv.join(platform.bin_dir());
        Self {
            root: root.to_path_buf(),
            python: bin.join(platform.executable("python")),
            pip: bin.join(platform.executable("pip")),
            venv,
        }
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(layout::MANIFEST)
    }

    pub fn service_entry(&self) -> PathBuf {
        self.root.join(layout::SERVICE_ENTRY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionState {
    CreateEnv,
    ActivateEnv,
    InstallDependencies,
    LaunchService,
    /// Terminal. The service ran in the foreground and exited cleanly.
    Running,
}

impl ProvisionState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateEnv => "CreateEnv",
            Self::ActivateEnv => "ActivateEnv",
            Self::InstallDependencies => "InstallDependencies",
            Self::LaunchService => "LaunchService",
            Self::Running => "Running",
        }
    }

    /// Short progress message for the step this state performs.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::CreateEnv => "Creating virtual environment",
            Self::ActivateEnv => "Activating the virtual environment",
            Self::InstallDependencies => "Installing dependencies",
            Self::LaunchService => "Running the app",
            Self::Running => "Bot is running",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for ProvisionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives a generated project from source tree to running service.
pub struct EnvironmentProvisioner {
    runner: Box<dyn ProcessRunner>,
    filesystem: Box<dyn Filesystem>,
    platform: HostPlatform,
    python: PathBuf,
}

impl EnvironmentProvisioner {
    pub fn new(runner: Box<dyn ProcessRunner>, filesystem: Box<dyn Filesystem>) -> Self {
        let platform = HostPlatform::current();
        Self {
            runner,
            filesystem,
            platform,
            python: PathBuf::from(platform.default_python()),
        }
    }

    /// Override the host platform. Also resets the interpreter to that
    /// platform's default, so call before [`with_python`](Self::with_python).
    pub fn with_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = platform;
        self.python = PathBuf::from(platform.default_python());
        self
    }

    /// Interpreter used by `CreateEnv`.
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = python.into();
        self
    }

    pub fn layout(&self, root: &Path) -> EnvironmentLayout {
        EnvironmentLayout::resolve(root, self.platform)
    }

    /// Fail with [`ApplicationError::MissingArtifact`] unless `root` holds a
    /// generated service entry point and manifest.
    pub fn check_project(&self, root: &Path) -> GenZBotResult<()> {
        for required in [layout::SERVICE_ENTRY, layout::MANIFEST] {
            let path = root.join(required);
            if !self.filesystem.exists(&path) {
                return Err(ApplicationError::MissingArtifact { path }.into());
            }
        }
        Ok(())
    }

    /// Perform the work of `state` and return the state that follows it.
    ///
    /// Stepping from [`ProvisionState::Running`] does nothing.
    #[instrument(skip_all, fields(step = %state, root = %root.display()))]
    pub fn step(&self, state: ProvisionState, root: &Path) -> GenZBotResult<ProvisionState> {
        let env = self.layout(root);

        match state {
            ProvisionState::CreateEnv => {
                let invocation = Invocation::new(&self.python)
                    .arg("-m")
                    .arg("venv")
                    .arg(&env.venv);
                self.invoke(state, &invocation)?;
                Ok(ProvisionState::ActivateEnv)
            }
            ProvisionState::ActivateEnv => {
                if !self.filesystem.exists(&env.python) {
                    return Err(ApplicationError::ExternalProcess {
                        step: state.name(),
                        command: env.python.display().to_string(),
                        status: None,
                        reason: "the virtual environment has no interpreter".into(),
                    }
                    .into());
                }
                debug!(python = %env.python.display(), "Environment interpreter resolved");
                Ok(ProvisionState::InstallDependencies)
            }
            ProvisionState::InstallDependencies => {
                let invocation = Invocation::new(&env.pip)
                    .arg("install")
                    .arg("-r")
                    .arg(env.manifest());
                self.invoke(state, &invocation)?;
                Ok(ProvisionState::LaunchService)
            }
            ProvisionState::LaunchService => {
                let invocation = Invocation::new(&env.python).arg(env.service_entry());
                self.invoke(state, &invocation)?;
                Ok(ProvisionState::Running)
            }
            ProvisionState::Running => Ok(ProvisionState::Running),
        }
    }

    /// Step from `CreateEnv` until `Running`.
    pub fn run_to_completion(&self, root: &Path) -> GenZBotResult<ProvisionState> {
        self.run_with(root, |_| {})
    }

    /// Like [`run_to_completion`](Self::run_to_completion), calling
    /// `on_step` before each step starts.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn run_with(
        &self,
        root: &Path,
        mut on_step: impl FnMut(ProvisionState),
    ) -> GenZBotResult<ProvisionState> {
        self.check_project(root)?;

        let mut state = ProvisionState::CreateEnv;
        while !state.is_terminal() {
            on_step(state);
            info!(step = %state, "{}", state.describe());
            state = self.step(state, root)?;
        }

        info!("Provisioning finished");
        Ok(state)
    }

    fn invoke(&self, state: ProvisionState, invocation: &Invocation) -> GenZBotResult<()> {
        debug!(command = %invocation, "Spawning");

        let exit = self
            .runner
            .run(invocation)
            .map_err(|e| ApplicationError::ExternalProcess {
                step: state.name(),
                command: invocation.to_string(),
                status: None,
                reason: e.to_string(),
            })?;

        if exit.success() {
            return Ok(());
        }

        Err(ApplicationError::ExternalProcess {
            step: state.name(),
            command: invocation.to_string(),
            status: exit.code,
            reason: String::new(),
        }
        .into())
    }
}
