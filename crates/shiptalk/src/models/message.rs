use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
        }
    }
}

/// A role-tagged block of text sent to the completion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Message {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The system instruction and user payload for a single tool request.
///
/// Built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub system: Message,
    pub user: Message,
}

impl Conversation {
    pub fn new<S: Into<String>, U: Into<String>>(system: S, user: U) -> Self {
        Self {
            system: Message::system(system),
            user: Message::user(user),
        }
    }

    /// Messages in the order they are submitted
    pub fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversation_order() {
        let conversation = Conversation::new("be terse", "{}");
        let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User]);
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::user("hello");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "role": "user", "content": "hello" })
        );
    }
}
