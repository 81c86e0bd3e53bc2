use crate::command_processor::{CommandArgs, CommandOutcome, CommandProcessor, Session};
use crate::config::Config;
use crate::output::{Output, PROMPT};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
    session: Session,
}

impl Application {
    pub fn new(config: Config, output: Box<dyn Output>) -> Self {
        log::info!("Initializing British Spoken Time application");
        Self { command_processor: CommandProcessor::new(), session: Session::new(config, output) }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the interactive loop until the user exits or closes the input.
    pub async fn run(&mut self) -> Result<()> {
        log::info!("Starting main application loop");
        let mut rl = DefaultEditor::new()?;
        self.session.output.show_welcome();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    let outcome = match self.process_line(&line).await {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            log::error!("Failed to process command: {:?}", err);
                            self.session.output.show_error(&err.to_string());
                            CommandOutcome::Continue
                        }
                    };
                    if outcome.shows_blank_line() {
                        self.session.output.show_blank_line();
                    }
                    if outcome.should_exit() {
                        log::info!("Exit command received, terminating application");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    log::info!("Input closed, terminating application");
                    self.session.output.show_exit();
                    break;
                }
                Err(err) => {
                    log::error!("Failed to read input: {:?}", err);
                    return Err(err.into());
                }
            }
        }

        log::debug!("Main application loop completed");
        Ok(())
    }

    /// Handle one line of input. Blank lines are skipped.
    pub async fn process_line(&mut self, line: &str) -> Result<CommandOutcome> {
        if line.trim().is_empty() {
            log::trace!("Empty input received, skipping");
            return Ok(CommandOutcome::ContinueQuiet);
        }
        log::debug!("Processing user input: '{}'", line);
        let args = CommandArgs::parse(line)?;
        self.command_processor.execute(args, &mut self.session).await
    }
}
