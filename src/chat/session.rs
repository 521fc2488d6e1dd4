use serde::{Deserialize, Serialize};

/// Closing line shown when the user ends the conversation.
pub const FAREWELL: &str = "Conversation ended. Thank you for chatting!";

/// A role-tagged turn sent to the chat API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Who produced a displayed chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A line of the displayed conversation transcript.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub sender: Sender,
    pub message: String,
}

/// Per-session conversation state.
///
/// Constructed when the chat starts and discarded when it ends. The
/// transcript (`chat_history`) is what the user sees; the context is
/// what the API sees.
pub struct ChatSession {
    pub chat_history: Vec<ChatLine>,
    pub conversation_context: Vec<ChatMessage>,
    pub chat_active: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            chat_history: Vec::new(),
            conversation_context: Vec::new(),
            chat_active: true,
        }
    }

    /// Whether `input` is a local termination command.
    ///
    /// "exit" and "end" (case-insensitive, surrounding whitespace
    /// ignored) end the conversation without reaching the API.
    pub fn is_exit_command(input: &str) -> bool {
        matches!(input.trim().to_lowercase().as_str(), "exit" | "end")
    }

    /// Record the user's message in both the context and the transcript.
    pub fn push_user(&mut self, message: &str) {
        self.conversation_context.push(ChatMessage::user(message));
        self.chat_history.push(ChatLine {
            sender: Sender::User,
            message: message.to_string(),
        });
    }

    /// Record the assistant's reply in both the context and the transcript.
    pub fn push_assistant(&mut self, message: &str) {
        self.conversation_context
            .push(ChatMessage::assistant(message));
        self.chat_history.push(ChatLine {
            sender: Sender::Bot,
            message: message.to_string(),
        });
    }

    /// End the conversation, appending the farewell line.
    pub fn end(&mut self) {
        self.chat_history.push(ChatLine {
            sender: Sender::Bot,
            message: FAREWELL.to_string(),
        });
        self.chat_active = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(ChatSession::is_exit_command("exit"));
        assert!(ChatSession::is_exit_command("  Exit "));
        assert!(ChatSession::is_exit_command("END"));
        assert!(ChatSession::is_exit_command(" end\t"));
        assert!(!ChatSession::is_exit_command("exit please"));
        assert!(!ChatSession::is_exit_command("hello"));
    }

    #[test]
    fn test_push_user_updates_context_and_history() {
        let mut session = ChatSession::new();
        session.push_user("What should I eat?");

        assert_eq!(session.conversation_context.len(), 1);
        assert_eq!(session.conversation_context[0].role, "user");
        assert_eq!(session.chat_history.len(), 1);
        assert_eq!(session.chat_history[0].sender, Sender::User);
    }

    #[test]
    fn test_end_marks_inactive_and_appends_farewell() {
        let mut session = ChatSession::new();
        session.push_user("hi");
        session.end();

        assert!(!session.chat_active);
        let last = session.chat_history.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.message, FAREWELL);
        // The termination never enters the API context.
        assert_eq!(session.conversation_context.len(), 1);
    }
}
