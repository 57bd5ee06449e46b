//! Test process runner that records invocations instead of spawning them.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::utils::{ProcessRunner, ToolCommand, ToolOutput};

/// How a scripted program behaves.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Exits non-zero with this output
    Fails(String),
    /// Cannot be started
    Missing,
}

/// Runner that succeeds for every program unless scripted otherwise.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Mutex<Vec<ToolCommand>>,
    pub scripts: HashMap<String, Scripted>,
}

impl RecordingRunner {
    pub fn failing(program: &str, behaviour: Scripted) -> Self {
        Self {
            scripts: HashMap::from([(program.to_string(), behaviour)]),
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.program.clone())
            .collect()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        self.calls.lock().unwrap().push(command.clone());
        match self.scripts.get(&command.program) {
            None => Ok(ToolOutput {
                success: true,
                code: Some(0),
                combined_output: String::new(),
            }),
            Some(Scripted::Fails(output)) => Ok(ToolOutput {
                success: false,
                code: Some(1),
                combined_output: output.clone(),
            }),
            Some(Scripted::Missing) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }
}
