use {
    crate::config::DeploymentConfig,
    anyhow::{bail, Context},
    std::{fmt, path::Path, process::Command},
    tracing::debug,
};

/// One `stellar` CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<String>,
}

impl Invocation {
    pub const PROGRAM: &'static str = "stellar";

    /// Upload and instantiate the contract wasm. Prints the new contract id.
    pub fn deploy(network: &str, source: &str, wasm: &Path) -> Self {
        Self {
            args: vec![
                "contract".into(),
                "deploy".into(),
                "--wasm".into(),
                wasm.display().to_string(),
                "--source".into(),
                source.into(),
                "--network".into(),
                network.into(),
            ],
        }
    }

    pub fn initialize(
        network: &str,
        source: &str,
        contract_id: &str,
        config: &DeploymentConfig,
    ) -> anyhow::Result<Self> {
        let endpoint = config
            .endpoint_json()
            .context("failed to serialize the chain endpoint")?;

        Ok(Self {
            args: vec![
                "contract".into(),
                "invoke".into(),
                "--id".into(),
                contract_id.into(),
                "--source".into(),
                source.into(),
                "--network".into(),
                network.into(),
                "--".into(),
                "initialize".into(),
                "--owner".into(),
                config.owner.clone(),
                "--endpoint".into(),
                endpoint,
            ],
        })
    }

    /// Run to completion and return the trimmed stdout.
    pub fn run(&self) -> anyhow::Result<String> {
        debug!(command = %self, "running");

        let output = Command::new(Self::PROGRAM)
            .args(&self.args)
            .output()
            .with_context(|| format!("failed to spawn `{}`", Self::PROGRAM))?;

        if !output.status.success() {
            bail!(
                "`{self}` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Shell-pasteable rendering.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Self::PROGRAM)?;
        for arg in &self.args {
            if arg.chars().all(|c| c.is_ascii_alphanumeric() || "-_./:".contains(c)) {
                write!(f, " {arg}")?;
            } else {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            }
        }
        Ok(())
    }
}
