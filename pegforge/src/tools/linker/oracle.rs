use std::io::Read;
use std::process::{
    Child,
    Command,
    Stdio,
};
use std::time::Duration;

use anyhow::bail;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::PegRecord;
use crate::with_field_fn;

/// One linker design request: the five sequences pegLIT scores against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkerRequest {
    spacer:   String,
    scaffold: String,
    template: String,
    pbs:      String,
    motif:    String,
}

impl LinkerRequest {
    /// Builds the request for one candidate against the given scaffold.
    pub fn from_record(
        record: &PegRecord,
        scaffold: &str,
    ) -> Self {
        Self {
            spacer:   record.sgrna_seq().clone(),
            scaffold: scaffold.to_string(),
            template: record.rt_seq().clone(),
            pbs:      record.pbs_seq().clone(),
            motif:    record.extension3_seq().clone(),
        }
    }

    pub fn spacer(&self) -> &str {
        &self.spacer
    }

    pub fn scaffold(&self) -> &str {
        &self.scaffold
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn pbs(&self) -> &str {
        &self.pbs
    }

    pub fn motif(&self) -> &str {
        &self.motif
    }
}

/// External linker design computation.
///
/// Implementations are assumed to be pure functions of the request (no
/// cross-record side effects). Returning an empty candidate list is a valid
/// outcome; the orchestrator treats it as a per-record failure.
pub trait LinkerOracle {
    fn design_linker(
        &self,
        request: &LinkerRequest,
    ) -> anyhow::Result<Vec<String>>;
}

/// Closure-backed oracle, mainly for tests and embedding.
impl<F> LinkerOracle for F
where
    F: Fn(&LinkerRequest) -> anyhow::Result<Vec<String>>,
{
    fn design_linker(
        &self,
        request: &LinkerRequest,
    ) -> anyhow::Result<Vec<String>> {
        self(request)
    }
}

const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Oracle backed by an external pegLIT command.
///
/// The command receives the five request sequences as `--spacer`,
/// `--scaffold`, `--template`, `--pbs` and `--motif` arguments and must print
/// one linker candidate per stdout line, best first. Each invocation is
/// bounded by a timeout; a timed-out process is killed and counted as a
/// failed request.
#[derive(Debug, Clone)]
pub struct PegLitProcess {
    command: String,
    timeout: Duration,
}

impl PegLitProcess {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }

    with_field_fn!(timeout, Duration);

    fn spawn(
        &self,
        request: &LinkerRequest,
    ) -> anyhow::Result<Child> {
        debug!("invoking {} for spacer {}", self.command, request.spacer());
        let child = Command::new(&self.command)
            .args(["--spacer", request.spacer()])
            .args(["--scaffold", request.scaffold()])
            .args(["--template", request.template()])
            .args(["--pbs", request.pbs()])
            .args(["--motif", request.motif()])
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        Ok(child)
    }
}

impl LinkerOracle for PegLitProcess {
    fn design_linker(
        &self,
        request: &LinkerRequest,
    ) -> anyhow::Result<Vec<String>> {
        let mut child = self.spawn(request)?;

        // The reader thread drains stdout; hitting EOF means the child has
        // finished (or was killed), so the subsequent wait() cannot block.
        let mut stdout = child.stdout.take();
        let (sender, receiver) = crossbeam::channel::bounded(1);
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            let result = match stdout.as_mut() {
                Some(pipe) => pipe.read_to_end(&mut buffer).map(|_| buffer),
                None => Ok(buffer),
            };
            let _ = sender.send(result);
        });

        let stdout = match receiver.recv_timeout(self.timeout) {
            Ok(result) => result?,
            Err(_) => {
                child.kill().ok();
                child.wait().ok();
                bail!("{} timed out after {:?}", self.command, self.timeout);
            },
        };

        let status = child.wait()?;
        if !status.success() {
            let mut stderr = Vec::new();
            if let Some(mut pipe) = child.stderr.take() {
                pipe.read_to_end(&mut stderr).ok();
            }
            bail!(
                "{} exited with {}: {}",
                self.command,
                status,
                String::from_utf8_lossy(&stderr).trim()
            );
        }

        let linkers = String::from_utf8_lossy(&stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(linkers)
    }
}
