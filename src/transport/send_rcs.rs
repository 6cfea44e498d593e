use serde::Serialize;

use crate::domain::{AppId, DeliveryReport, MessageText, RecipientAddress, SendResult};

const RCS_CHANNEL: &str = "RCS";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    app_id: &'a str,
    recipient: RecipientBody<'a>,
    message: MessageBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_report: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RecipientBody<'a> {
    identified_by: IdentifiedBy<'a>,
}

#[derive(Debug, Serialize)]
struct IdentifiedBy<'a> {
    channel_identities: [ChannelIdentity<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChannelIdentity<'a> {
    identity: &'a str,
    channel: &'static str,
}

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    text_message: TextMessage<'a>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    text: &'a str,
}

/// Encode the `messages:send` body for a single recipient.
///
/// The default `"none"` delivery report is left off the wire.
pub fn encode_send_rcs_body(
    app_id: &AppId,
    recipient: &RecipientAddress,
    text: &MessageText,
    delivery_report: &DeliveryReport,
) -> Result<String, serde_json::Error> {
    let body = SendMessageBody {
        app_id: app_id.as_str(),
        recipient: RecipientBody {
            identified_by: IdentifiedBy {
                channel_identities: [ChannelIdentity {
                    identity: recipient.as_str(),
                    channel: RCS_CHANNEL,
                }],
            },
        },
        message: MessageBody {
            text_message: TextMessage {
                text: text.as_str(),
            },
        },
        delivery_report: (!delivery_report.is_none()).then(|| delivery_report.as_str()),
    };
    serde_json::to_string(&body)
}

pub fn decode_send_rcs_json_response(json: &str) -> Result<SendResult, TransportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(SendResult::new(value))
}
