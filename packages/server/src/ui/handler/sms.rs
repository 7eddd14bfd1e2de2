//! SMS webhook handler.

use std::sync::Arc;

use axum::{
    extract::{
        Form, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::{Method, header},
    response::IntoResponse,
};
use veda_shared::time::{get_jst_timestamp, timestamp_to_jst_rfc3339};

use crate::{
    domain::Timestamp,
    infrastructure::dto::{
        http::SmsWebhookParams,
        twiml::{MessagingResponse, TWIML_CONTENT_TYPE},
    },
    ui::state::AppState,
};

/// Webhook the provider calls for every inbound SMS.
///
/// Fields are read from the query string and, on POST, from the form body,
/// where form values win. A part that cannot be decoded is treated as
/// carrying no fields, so a request with nothing usable gets the no-message
/// reply rather than an HTTP error.
pub async fn sms_reply(
    method: Method,
    State(state): State<Arc<AppState>>,
    query: Result<Query<SmsWebhookParams>, QueryRejection>,
    form: Result<Form<SmsWebhookParams>, FormRejection>,
) -> impl IntoResponse {
    tracing::info!("Webhook received a new {} request", method);

    let query = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!("Could not decode webhook query: {}", rejection);
            SmsWebhookParams::default()
        }
    };
    // On GET the form extractor reads the query string too
    let form = match form {
        Ok(Form(params)) => params,
        Err(rejection) => {
            tracing::warn!("Could not decode webhook form: {}", rejection);
            SmsWebhookParams::default()
        }
    };
    let params = form.or_query(query);

    let received_at = Timestamp::new(get_jst_timestamp());
    let message = params.into_inbound(received_at);
    tracing::info!(
        sid = message.message_sid.as_deref().unwrap_or("-"),
        received_at = %timestamp_to_jst_rfc3339(received_at.value()),
        "Message received from {}: {:?}",
        message.sender_label(),
        message.body.as_deref().unwrap_or_default()
    );

    let reply = state.reply_usecase().reply(&message);
    tracing::info!("Replying with: '{}'", reply.text());

    (
        [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)],
        MessagingResponse::from(&reply).to_xml(),
    )
}
