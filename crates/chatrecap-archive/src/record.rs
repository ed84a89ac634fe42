//! Lenient conversion of raw export records into the archive model.

use chatrecap_types::{Conversation, Message, Role, SYNTHETIC_ROOT_NODE_ID};
use serde::Deserialize;
use serde_json::Value;

use crate::text::extract_text;

/// Raw conversation record. Every field is optional and loosely typed so a
/// single odd field never rejects the whole archive.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConversationRecord {
    id: Option<Value>,
    conversation_id: Option<Value>,
    title: Option<Value>,
    create_time: Option<Value>,
    mapping: Option<Value>,
}

pub(crate) fn conversation_from_value(index: usize, value: Value) -> Conversation {
    if !value.is_object() {
        tracing::warn!(index, "archive entry is not an object; treating it as empty");
        return Conversation::default();
    }
    let record: ConversationRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(index, error = %err, "unreadable conversation record; treating it as empty");
            return Conversation::default();
        }
    };

    let id = as_string(record.conversation_id.as_ref()).or_else(|| as_string(record.id.as_ref()));
    Conversation {
        id,
        title: as_string(record.title.as_ref()),
        created_at: record.create_time.as_ref().and_then(timestamp),
        messages: record
            .mapping
            .as_ref()
            .map(messages_from_mapping)
            .unwrap_or_default(),
    }
}

fn messages_from_mapping(mapping: &Value) -> Vec<Message> {
    let Some(nodes) = mapping.as_object() else {
        return Vec::new();
    };
    nodes
        .iter()
        .filter(|(node_id, _)| node_id.as_str() != SYNTHETIC_ROOT_NODE_ID)
        .filter_map(|(_, node)| node.get("message"))
        .filter(|message| is_present_message(message))
        .map(|message| Message::new(role_of(message), extract_text(message)))
        .collect()
}

/// A message counts only when it is a non-empty object.
fn is_present_message(message: &Value) -> bool {
    message.as_object().is_some_and(|m| !m.is_empty())
}

fn role_of(message: &Value) -> Role {
    message
        .get("author")
        .and_then(|author| author.get("role"))
        .and_then(Value::as_str)
        .map(Role::from_label)
        .unwrap_or(Role::Other)
}

fn as_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Unix seconds; zero, non-finite, and non-numeric values count as absent.
fn timestamp(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|secs| secs.is_finite() && *secs != 0.0)
}
