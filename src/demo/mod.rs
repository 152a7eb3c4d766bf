use serde::{Deserialize, Serialize};

pub mod conversation;
pub mod matcher;
pub mod responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sources: None,
        }
    }

    pub fn assistant(reply: Reply) -> Self {
        Self {
            role: Role::Assistant,
            text: reply.text,
            sources: Some(reply.sources),
        }
    }

    pub fn greeting() -> Self {
        Self {
            role: Role::Assistant,
            text: responses::GREETING.to_string(),
            sources: None,
        }
    }
}

/// Answer produced by the matcher for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Search,
    Chat,
}

impl DisplayMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Chat => "Chat",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Search => "Search documentation...",
            Self::Chat => "Type your message...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, Reply, Role};

    #[test]
    fn user_message_serializes_without_sources() {
        let json = serde_json::to_string(&Message::user("hello")).expect("message should serialize");
        assert_eq!(json, r#"{"role":"user","text":"hello"}"#);
    }

    #[test]
    fn assistant_message_keeps_source_order() {
        let message = Message::assistant(Reply {
            text: "answer".to_string(),
            sources: vec!["B".to_string(), "A".to_string()],
        });
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(
            message.sources.as_deref(),
            Some(&["B".to_string(), "A".to_string()][..])
        );
    }
}
