//! Config command handler
//!
//! `config` shows the current settings, `config logs enable|disable`
//! switches console logging for the rest of the session.

use super::{CommandArgs, CommandHandler, CommandOutcome, Session};
use crate::logging::apply_console_logging;
use anyhow::Result;
use log::{info, warn};
use std::future::Future;
use std::pin::Pin;

const LOGS_KEY: &str = "logs";
const ENABLE_ACTION: &str = "enable";
const DISABLE_ACTION: &str = "disable";

#[derive(Debug)]
pub struct ConfigHandler;

impl CommandHandler for ConfigHandler {
    fn execute<'a>(
        &'a self,
        args: CommandArgs,
        session: &'a mut Session,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + 'a>> {
        Box::pin(async move {
            match args.args.as_slice() {
                [] => show_current_config(session),
                [key, action] if key.as_str() == LOGS_KEY => match action.as_str() {
                    ENABLE_ACTION => set_console_logs(session, true),
                    DISABLE_ACTION => set_console_logs(session, false),
                    _ => {
                        warn!("Invalid logs action: {}", action);
                        session.output.show_error("Invalid action for logs. Use 'enable' or 'disable'");
                    }
                },
                _ => show_usage(session),
            }
            Ok(CommandOutcome::Continue)
        })
    }
    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
    fn priority(&self) -> u32 {
        8
    }
}

fn set_console_logs(session: &mut Session, enabled: bool) {
    info!(
        "Changing console logging from {} to {}",
        session.config.logging.console_enabled, enabled
    );
    session.config.logging.console_enabled = enabled;
    apply_console_logging(&session.config.logging);
    let state = if enabled { "enabled" } else { "disabled" };
    session.output.show_success(&format!("Console logging {}", state));
}

fn show_current_config(session: &mut Session) {
    let logging = &session.config.logging;
    let state = if logging.console_enabled { "enabled" } else { "disabled" };
    let lines = [
        "Current Configuration:".to_string(),
        format!("  Console Logs: {}", state),
        format!("  Log Level: {}", logging.level_filter()),
    ];
    for line in &lines {
        session.output.show_info(line);
    }
}

fn show_usage(session: &mut Session) {
    session.output.show_error("Invalid config command format");
    session.output.show_info("Usage:");
    session.output.show_info("  config               - Show current configuration");
    session.output.show_info("  config logs enable   - Enable console logging");
    session.output.show_info("  config logs disable  - Disable console logging");
}
