//! AI Gateway - Prompt Builders
//!
//! Every prompt the app sends lives here, next to the static fallbacks used
//! when the completion endpoint fails. The chat prompt instructs the model
//! to end replies with one of two directive markers; the front-end parser
//! is the counterpart that strips and interprets them.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// One line of recent chat context, as sent by the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLine {
    #[serde(rename = "fromUser")]
    pub from_user: bool,
    pub text: String,
}

/// Build the full chat prompt: persona, current task list, directive-marker
/// instructions, recent conversation, and the new user message.
pub fn chat_prompt(tasks: &[Task], history: &[ChatLine], input: &str) -> String {
    let task_lines = tasks
        .iter()
        .map(|t| {
            format!(
                "{}. {} ({})",
                t.id,
                t.title,
                if t.done { "completed" } else { "not completed yet" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let context = history
        .iter()
        .map(|line| {
            if line.from_user {
                format!("User: {}", line.text)
            } else {
                format!("Widget: {}", line.text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are Widget, a friendly and enthusiastic alien who helps humans with their tasks. \
You're cute, supportive, and love celebrating their achievements.\n\n\
Current tasks:\n{task_lines}\n\n\
IMPORTANT INSTRUCTIONS:\n\
If user wants to create a task, respond with a fun message one sentence max, and end it with \"CREATE_NEW_TASK:Task Title\"\n\
If user asks about existing tasks, respond with a fun message, and end it with \"RELEVANT_TASKS:1,2,3\" \
Take careful note of the task ids, they can be a bit long.\n\n\
If you are suggesting relevant tasks without context, showcase the ones that aren't done yet.\n\n\
Only use ONE format, never both in the same response. Default to showing relevant tasks, \
do not create a new task unless it makes sense and you have a specific task and title to create.\n\n\
DO NOT EVER MAKE A TASK UNLESS YOU HAVE A SPECIFIC TITLE FOR IT, NO GENERIC TITLES, \
ASK FOLLOW UP QUESTIONS IF YOU ARE NOT SURE WHAT THE USER WANTS TO CREATE. \
NEVER MAKE ONE CALLED \"task title\" or \"new task title\" or anything like that. \
IF YOU ARE ASKING A FOLLOW UP, NO NEED TO SHOW RELEVANT TASKS. Use proper capitalization on this part.\n\n\
Your message should be short and concise, one sentence max! No longer!\n\n\
Recent conversation:\n{context}\n\n\
User: {input}"
    )
}

/// Ask for a single representative emoji for a task title.
pub fn emoji_prompt(title: &str) -> String {
    format!(
        "Given this task title: \"{title}\", suggest a single emoji that best represents it. \
Only respond with the emoji, nothing else. For example, for \"Go running\" respond with \"🏃\". \
For \"Make dinner\" respond with \"🍳\"."
    )
}

/// Ask for a short encouragement line about a task.
pub fn encouragement_prompt(title: &str) -> String {
    format!(
        "You are Widget, a cute and encouraging AI friend. Generate a single short encouraging \
message (max 10 words) about the task \"{title}\". The message should be lowercase, cute, and \
include an emoji at the end. Example: \"stretching helps you feel amazing! 🌸\" or \
\"keeping organized makes everything better! ✨\""
    )
}

/// Hand-written encouragement lines for the suggested goals.
pub fn predefined_encouragements(title: &str) -> Option<&'static [&'static str]> {
    match title {
        "Meal Prep" => Some(&[
            "yummy! meal prep makes the whole week better! 🥗",
            "cooking time! i love watching humans make food! 🍳",
            "getting organized with food is super smart! proud of you! 🌟",
        ]),
        "Stretching" => Some(&[
            "a bit of stretching every day will keep you healthy! 🌸",
            "time to get those muscles moving! you've got this! ✨",
            "stretching is my favorite! let's do this together! 🎈",
        ]),
        "Brush Teeth" => Some(&[
            "sparkly teeth make the happiest smiles! ✨",
            "keeping those teeth clean is super important! proud of you! 🦷",
            "brush brush brush! you're doing great! 🌟",
        ]),
        "Put away laundry" => Some(&[
            "clean room, happy space! you're doing amazing! 🧺",
            "folding clothes is like giving them little hugs! 🌸",
            "organizing is so fun! let's make everything neat! ✨",
        ]),
        _ => None,
    }
}

/// Fallbacks when the completion endpoint is unavailable.
pub const FALLBACK_ENCOURAGEMENTS: &[&str] = &[
    "you're doing great! i believe in you! 🌟",
    "every little step counts! proud of you! ✨",
    "yay! let's do this together! 🎈",
];

pub fn pick<'a>(messages: &'a [&'a str]) -> &'a str {
    messages
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_ENCOURAGEMENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, done: bool) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            icon: "📝".into(),
            done,
            user_id: "user-1".into(),
            created_at: 0,
        }
    }

    #[test]
    fn chat_prompt_lists_tasks_with_ids_and_state() {
        let tasks = vec![task("abc-123", "Make bed", false), task("def-456", "Meal Prep", true)];
        let prompt = chat_prompt(&tasks, &[], "hi");
        assert!(prompt.contains("abc-123. Make bed (not completed yet)"));
        assert!(prompt.contains("def-456. Meal Prep (completed)"));
    }

    #[test]
    fn chat_prompt_carries_both_directive_markers() {
        let prompt = chat_prompt(&[], &[], "hi");
        assert!(prompt.contains("CREATE_NEW_TASK:"));
        assert!(prompt.contains("RELEVANT_TASKS:"));
        assert!(prompt.ends_with("User: hi"));
    }

    #[test]
    fn chat_prompt_includes_recent_context() {
        let history = vec![
            ChatLine { from_user: true, text: "hello".into() },
            ChatLine { from_user: false, text: "hi friend!".into() },
        ];
        let prompt = chat_prompt(&[], &history, "what now?");
        assert!(prompt.contains("User: hello"));
        assert!(prompt.contains(": hi friend!"));
    }

    #[test]
    fn known_titles_have_predefined_lines() {
        assert!(predefined_encouragements("Brush Teeth").is_some());
        assert!(predefined_encouragements("Fly to the moon").is_none());
    }

    #[test]
    fn pick_returns_a_member() {
        let lines = predefined_encouragements("Stretching").unwrap();
        assert!(lines.contains(&pick(lines)));
    }
}
