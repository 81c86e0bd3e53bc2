use crate::config::Config;
use crate::output::Output;
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

pub mod config_handler;
pub mod exit_handler;
pub mod help_handler;
pub mod time_handler;

/// Default handler priority; lower runs first
pub const DEFAULT_PRIORITY: u32 = 100;

/// One line of user input split into a command word and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    /// The trimmed line as typed
    pub raw: String,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>, raw: String) -> Self {
        Self { command, args, raw }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim().to_string();
        let normalized_input = preprocess_input(&raw);
        let mut tokens = normalized_input.split_whitespace().map(str::to_string);
        let command = tokens.next().ok_or_else(|| anyhow!("No command provided"))?;
        let args: Vec<String> = tokens.collect();
        debug!("Parsed command: {:?}, args: {:?}", command, args);
        Ok(CommandArgs { command, args, raw })
    }
}

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// What the shell should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep reading, separating the next prompt with a blank line
    Continue,
    /// Keep reading without the blank line
    ContinueQuiet,
    Exit,
}

impl CommandOutcome {
    pub fn should_exit(self) -> bool {
        self == CommandOutcome::Exit
    }

    pub fn shows_blank_line(self) -> bool {
        self == CommandOutcome::Continue
    }
}

/// State shared by all handlers for the lifetime of the shell
pub struct Session {
    pub config: Config,
    pub output: Box<dyn Output>,
}

impl Session {
    pub fn new(config: Config, output: Box<dyn Output>) -> Self {
        Self { config, output }
    }
}

pub trait CommandHandler: Debug + Send + Sync {
    fn execute<'a>(
        &'a self,
        args: CommandArgs,
        session: &'a mut Session,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + 'a>>;
    fn can_handle(&self, command: &str) -> bool;
    fn priority(&self) -> u32 {
        DEFAULT_PRIORITY
    }
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::with_handlers(vec![
            Box::new(time_handler::TimeHandler),
            Box::new(config_handler::ConfigHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ])
    }

    pub fn with_handlers(mut handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        handlers.sort_by_key(|handler| handler.priority());
        debug!("Loaded {} command handlers", handlers.len());
        Self { handlers }
    }

    pub async fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<CommandOutcome> {
        debug!("Attempting to execute command: {}", args.command);
        debug!("Parsed arguments: {:?}", args.args);
        let command_name = args.command.clone();
        for handler in &self.handlers {
            if handler.can_handle(&command_name) {
                info!("Executing command '{}' with {:?}", command_name, handler);
                return match handler.execute(args, session).await {
                    Ok(outcome) => {
                        debug!("Command '{}' finished with {:?}", command_name, outcome);
                        Ok(outcome)
                    }
                    Err(e) => {
                        log::error!("Failed to execute command '{}': {:?}", command_name, e);
                        Err(e)
                    }
                };
            }
        }
        warn!("Unrecognized command: {}", command_name);
        session.output.show_error("Unrecognized command. Type 'help' for a list of available commands.");
        Ok(CommandOutcome::Continue)
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}
