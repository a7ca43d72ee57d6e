//! Chat Intent Parser
//!
//! Classifies an AI reply into exactly one intent by looking for a trailing
//! directive marker. Pure function; nothing here touches rendering or the
//! network. Creation is checked before reference: the prompt forbids mixing
//! the two markers, so a reply carrying both is treated as creation.

const CREATE_MARKER: &str = "CREATE_NEW_TASK:";
const REFERENCE_MARKER: &str = "RELEVANT_TASKS:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    /// No marker; display text unchanged
    Plain,
    /// `CREATE_NEW_TASK:<title>`; the title may be empty, and the caller is
    /// responsible for skipping creation then (trust boundary with the
    /// prompt, not a parser guarantee)
    CreateTask { title: String },
    /// `RELEVANT_TASKS:<comma-separated-ids>`
    ReferenceTasks { ids: Vec<String> },
}

/// Parsed reply: the text to display (marker stripped) plus the intent.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub display_text: String,
    pub intent: ChatIntent,
}

pub fn parse_reply(reply: &str) -> ParsedReply {
    if let Some(at) = reply.find(CREATE_MARKER) {
        let title = reply[at + CREATE_MARKER.len()..].trim().to_string();
        return ParsedReply {
            display_text: reply[..at].trim().to_string(),
            intent: ChatIntent::CreateTask { title },
        };
    }
    if let Some(at) = reply.find(REFERENCE_MARKER) {
        let ids = reply[at + REFERENCE_MARKER.len()..]
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        return ParsedReply {
            display_text: reply[..at].trim().to_string(),
            intent: ChatIntent::ReferenceTasks { ids },
        };
    }
    ParsedReply {
        display_text: reply.trim().to_string(),
        intent: ChatIntent::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_marker_is_extracted() {
        let parsed = parse_reply("Great idea! CREATE_NEW_TASK:Water the plants");
        assert_eq!(parsed.display_text, "Great idea!");
        assert_eq!(
            parsed.intent,
            ChatIntent::CreateTask { title: "Water the plants".to_string() }
        );
    }

    #[test]
    fn reference_marker_ids_are_trimmed() {
        let parsed = parse_reply("Here are some tasks! RELEVANT_TASKS:abc-123, def-456");
        assert_eq!(parsed.display_text, "Here are some tasks!");
        assert_eq!(
            parsed.intent,
            ChatIntent::ReferenceTasks {
                ids: vec!["abc-123".to_string(), "def-456".to_string()]
            }
        );
    }

    #[test]
    fn empty_id_entries_are_filtered() {
        let parsed = parse_reply("Look! RELEVANT_TASKS:abc-123,, def-456, ");
        assert_eq!(
            parsed.intent,
            ChatIntent::ReferenceTasks {
                ids: vec!["abc-123".to_string(), "def-456".to_string()]
            }
        );
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        let parsed = parse_reply("You're doing great!");
        assert_eq!(parsed.display_text, "You're doing great!");
        assert_eq!(parsed.intent, ChatIntent::Plain);
    }

    #[test]
    fn creation_takes_priority_over_reference() {
        let parsed = parse_reply("Ok! RELEVANT_TASKS:a,b CREATE_NEW_TASK:New thing");
        assert!(matches!(parsed.intent, ChatIntent::CreateTask { .. }));
    }

    #[test]
    fn whitespace_only_title_yields_empty_title() {
        let parsed = parse_reply("Sure! CREATE_NEW_TASK:   ");
        assert_eq!(
            parsed.intent,
            ChatIntent::CreateTask { title: String::new() }
        );
    }
}
