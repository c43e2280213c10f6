//! Public HTTP surface.
//!
//! - `GET  /`      : plain-text greeting
//! - `GET  /slack` : slash command, text taken from the `text` query parameter
//! - `POST /slack` : slash command, text taken from the `text` form field
//! - `GET  /health`: fact store readiness

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use catfacts_core::errors::{ApplicationError, DomainError};
use catfacts_core::FactStore;
use catfacts_slack::responses::GREETING_TEXT;
use catfacts_slack::{CommandResponse, CommandRouter};
use serde::Deserialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::health;

#[derive(Clone)]
pub struct SlackState {
    commands: Arc<CommandRouter>,
}

/// Slack posts more fields (`user_id`, `channel_id`, ...); only `text` is read.
#[derive(Debug, Default, Deserialize)]
pub struct SlashCommandParams {
    pub text: Option<String>,
}

pub fn router(store: Arc<FactStore>) -> Router {
    let commands = Arc::new(CommandRouter::new(store.clone()));

    Router::new()
        .route("/", get(index))
        .route("/slack", get(slack_query).post(slack_form))
        .with_state(SlackState { commands })
        .merge(health::router(store))
}

async fn index() -> &'static str {
    GREETING_TEXT
}

async fn slack_query(
    State(state): State<SlackState>,
    query: Result<Query<SlashCommandParams>, QueryRejection>,
) -> Response {
    let text = match query {
        Ok(Query(params)) => params.text.unwrap_or_default(),
        Err(rejection) => {
            warn!(
                event_name = "slack.command.unreadable_query",
                error = %rejection,
                "slash command query could not be parsed; treating as empty command text"
            );
            String::new()
        }
    };

    handle_command(&state, &text)
}

async fn slack_form(
    State(state): State<SlackState>,
    form: Result<Form<SlashCommandParams>, FormRejection>,
) -> Response {
    let text = match form {
        Ok(Form(params)) => params.text.unwrap_or_default(),
        Err(rejection) => {
            warn!(
                event_name = "slack.command.unreadable_body",
                error = %rejection,
                "slash command body could not be parsed; treating as empty command text"
            );
            String::new()
        }
    };

    handle_command(&state, &text)
}

fn handle_command(state: &SlackState, text: &str) -> Response {
    let correlation_id = Uuid::new_v4().to_string();
    debug!(
        event_name = "slack.command.received",
        correlation_id = %correlation_id,
        command_text = %text,
        "slash command received"
    );

    match state.commands.dispatch(text) {
        Ok(CommandResponse::Text(body)) => {
            info!(
                event_name = "slack.command.dispatched",
                correlation_id = %correlation_id,
                response_kind = "text",
                "slash command answered"
            );
            body.into_response()
        }
        Ok(CommandResponse::Payload(payload)) => {
            info!(
                event_name = "slack.command.dispatched",
                correlation_id = %correlation_id,
                response_kind = "payload",
                "slash command answered"
            );
            Json(payload).into_response()
        }
        Err(command_error) => {
            let interface = ApplicationError::from(DomainError::from(command_error))
                .into_interface(correlation_id.as_str());
            error!(
                event_name = "slack.command.failed",
                correlation_id = %correlation_id,
                error = %interface,
                "slash command failed"
            );
            let status = StatusCode::from_u16(interface.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, interface.user_message()).into_response()
        }
    }
}
