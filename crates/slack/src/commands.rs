use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use catfacts_core::errors::DomainError;
use catfacts_core::store::{FactPicker, FactStore, RandomFactPicker};

use crate::responses::{self, CommandResponse};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactCommand {
    About,
    Info,
    Categories,
    /// Wildcard command. Any first token that is not a named command is kept as
    /// a tag filter.
    Fact { tag: Option<String> },
}

impl FactCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Info => "info",
            Self::Categories => "cats",
            Self::Fact { .. } => "fact",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no facts are loaded")]
    NoFactsAvailable,
}

impl From<DomainError> for CommandError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NoFactsAvailable => Self::NoFactsAvailable,
        }
    }
}

impl From<CommandError> for DomainError {
    fn from(value: CommandError) -> Self {
        match value {
            CommandError::NoFactsAvailable => Self::NoFactsAvailable,
        }
    }
}

/// Classifies slash-command text. Only the first whitespace-separated token is
/// significant; trailing words are ignored by every command.
pub fn parse_fact_command(input: &str) -> FactCommand {
    let Some(first) = input.split_whitespace().next() else {
        return FactCommand::Fact { tag: None };
    };

    match first {
        "about" => FactCommand::About,
        "info" => FactCommand::Info,
        "cats" => FactCommand::Categories,
        tag => FactCommand::Fact { tag: Some(tag.to_owned()) },
    }
}

pub struct CommandRouter<P = RandomFactPicker> {
    store: Arc<FactStore>,
    picker: P,
}

impl CommandRouter<RandomFactPicker> {
    pub fn new(store: Arc<FactStore>) -> Self {
        Self::with_picker(store, RandomFactPicker)
    }
}

impl<P> CommandRouter<P>
where
    P: FactPicker,
{
    pub fn with_picker(store: Arc<FactStore>, picker: P) -> Self {
        Self { store, picker }
    }

    /// Parses `input` and runs exactly one handler.
    pub fn dispatch(&self, input: &str) -> Result<CommandResponse, CommandError> {
        let command = parse_fact_command(input);
        debug!(
            event_name = "slack.command.parsed",
            command = command.name(),
            "slash command parsed"
        );
        self.route(command)
    }

    pub fn route(&self, command: FactCommand) -> Result<CommandResponse, CommandError> {
        match command {
            FactCommand::About => Ok(responses::about_message()),
            FactCommand::Info => Ok(responses::info_message()),
            FactCommand::Categories => {
                // Facts without tags still answer with an empty list; no facts at all is an error.
                if self.store.is_empty() {
                    return Err(CommandError::NoFactsAvailable);
                }
                Ok(responses::categories_message(&self.store.categories()))
            }
            FactCommand::Fact { tag } => {
                let fact = self.store.pick(tag.as_deref(), &self.picker)?;
                Ok(responses::fact_message(fact))
            }
        }
    }
}
