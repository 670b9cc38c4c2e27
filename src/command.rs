use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any action that can be triggered by an invoker.
///
/// The receiver and the operation are baked in at construction time;
/// `execute` takes nothing but the sink the narration is written to.
/// Commands are immutable once built and may be executed any number of
/// times.
pub trait Command {
    /// Executes the command, writing its observable effect to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Invoker that holds at most one command at a time.
///
/// Binding a new command discards the previous one. There is no history
/// and no undo stack.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self { command: None }
    }

    /// Bind `command` to the single button, replacing the previous binding.
    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// Execute the bound command, or report that none is bound.
    ///
    /// An unbound button is an informational outcome, not an error.
    pub fn press_button(&self, out: &mut dyn Write) -> Result<()> {
        match &self.command {
            Some(command) => command.execute(out),
            None => {
                writeln!(out, "No command set!")?;
                Ok(())
            }
        }
    }
}
