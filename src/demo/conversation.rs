use crate::demo::matcher::ResponseMatcher;
use crate::demo::{DisplayMode, Message};
use serde::Deserialize;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info, warn};

/// What to do with a submission that arrives while a reply is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingPolicy {
    #[default]
    Serialize,
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingResponse,
}

/// Handle for one accepted user query whose reply has not been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeTicket {
    pub id: u64,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    EmptyInput,
    AwaitingResponse,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input is empty"),
            Self::AwaitingResponse => write!(f, "a reply is still pending"),
        }
    }
}

pub struct Conversation {
    transcript: Vec<Message>,
    input: String,
    mode: DisplayMode,
    pending: VecDeque<ExchangeTicket>,
    next_ticket: u64,
    policy: PendingPolicy,
    matcher: ResponseMatcher,
}

impl std::error::Error for SubmitRejected {}

impl Conversation {
    pub fn new(matcher: ResponseMatcher, policy: PendingPolicy) -> Self {
        Self {
            transcript: vec![Message::greeting()],
            input: String::new(),
            mode: DisplayMode::default(),
            pending: VecDeque::new(),
            next_ticket: 1,
            policy,
            matcher,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn state(&self) -> ConversationState {
        if self.pending.is_empty() {
            ConversationState::Idle
        } else {
            ConversationState::AwaitingResponse
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state() == ConversationState::AwaitingResponse
    }

    /// Whether a submit would currently be accepted.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && (self.policy == PendingPolicy::Overlap || !self.is_loading())
    }

    /// Moves the current input into the transcript as a user message.
    ///
    /// On success the input is cleared and the returned ticket must be handed
    /// back to [`Conversation::complete`] once the simulated delay elapses.
    /// Rejected submissions leave every piece of state untouched.
    pub fn submit(&mut self) -> Result<ExchangeTicket, SubmitRejected> {
        let query = self.input.trim();
        if query.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.policy == PendingPolicy::Serialize && self.is_loading() {
            return Err(SubmitRejected::AwaitingResponse);
        }

        let ticket = ExchangeTicket {
            id: self.next_ticket,
            query: query.to_string(),
        };
        self.next_ticket += 1;

        self.transcript.push(Message::user(ticket.query.clone()));
        self.input.clear();
        self.pending.push_back(ticket.clone());
        info!(ticket = ticket.id, pending = self.pending.len(), "query submitted");
        Ok(ticket)
    }

    /// Appends the assistant reply for `ticket_id`.
    ///
    /// Returns false when the ticket is unknown or was already completed.
    pub fn complete(&mut self, ticket_id: u64) -> bool {
        let Some(position) = self.pending.iter().position(|t| t.id == ticket_id) else {
            warn!(ticket = ticket_id, "reply for unknown exchange ignored");
            return false;
        };
        let Some(ticket) = self.pending.remove(position) else {
            return false;
        };

        let reply = self.matcher.respond(&ticket.query);
        debug!(ticket = ticket.id, sources = reply.sources.len(), "reply appended");
        self.transcript.push(Message::assistant(reply));
        true
    }

    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::{Conversation, ConversationState, PendingPolicy, SubmitRejected};
    use crate::demo::matcher::ResponseMatcher;
    use crate::demo::responses::{CANNED_RESPONSES, GREETING};
    use crate::demo::Role;

    fn conversation(policy: PendingPolicy) -> Conversation {
        Conversation::new(ResponseMatcher::new(Some(11)), policy)
    }

    fn type_and_submit(
        conversation: &mut Conversation,
        text: &str,
    ) -> Result<super::ExchangeTicket, SubmitRejected> {
        *conversation.input_mut() = text.to_string();
        conversation.submit()
    }

    #[test]
    fn starts_idle_with_greeting() {
        let conversation = conversation(PendingPolicy::Serialize);
        assert_eq!(conversation.state(), ConversationState::Idle);
        assert_eq!(conversation.transcript().len(), 1);
        assert_eq!(conversation.transcript()[0].text, GREETING);
        assert_eq!(conversation.transcript()[0].role, Role::Assistant);
        assert!(conversation.transcript()[0].sources.is_none());
    }

    #[test]
    fn rejection_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SubmitRejected::AwaitingResponse);
        assert_eq!(err.to_string(), "a reply is still pending");
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        for input in ["", "   ", "\t\n"] {
            let result = type_and_submit(&mut conversation, input);
            assert_eq!(result, Err(SubmitRejected::EmptyInput));
            assert_eq!(conversation.transcript().len(), 1);
            assert_eq!(conversation.state(), ConversationState::Idle);
            assert_eq!(conversation.input(), input);
        }
    }

    #[test]
    fn submit_appends_trimmed_user_message_and_clears_input() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        let ticket = type_and_submit(&mut conversation, "  What about integration?  ")
            .expect("submission should be accepted");

        assert_eq!(ticket.query, "What about integration?");
        assert_eq!(conversation.input(), "");
        assert!(conversation.is_loading());
        let last = conversation.transcript().last().expect("user message");
        assert_eq!(last.role, Role::User);
        assert_eq!(last.text, "What about integration?");
    }

    #[test]
    fn completed_exchange_grows_transcript_by_two() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        let before = conversation.transcript().len();

        let ticket = type_and_submit(&mut conversation, "pricing").expect("accepted");
        assert!(conversation.complete(ticket.id));

        assert_eq!(conversation.transcript().len(), before + 2);
        assert_eq!(conversation.state(), ConversationState::Idle);
        let reply = conversation.transcript().last().expect("assistant message");
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.text, CANNED_RESPONSES[0].answer);
    }

    #[test]
    fn serialize_policy_rejects_while_awaiting() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        let first = type_and_submit(&mut conversation, "features").expect("accepted");

        let second = type_and_submit(&mut conversation, "security");
        assert_eq!(second, Err(SubmitRejected::AwaitingResponse));
        assert_eq!(conversation.input(), "security");
        assert!(!conversation.can_submit());
        assert_eq!(conversation.transcript().len(), 2);

        assert!(conversation.complete(first.id));
        assert!(conversation.can_submit());
        assert!(conversation.submit().is_ok());
    }

    #[test]
    fn overlap_policy_queues_replies_in_submission_order() {
        let mut conversation = conversation(PendingPolicy::Overlap);
        let first = type_and_submit(&mut conversation, "pricing").expect("accepted");
        let second = type_and_submit(&mut conversation, "security").expect("accepted");
        assert_eq!(conversation.pending.len(), 2);

        assert!(conversation.complete(first.id));
        assert!(conversation.is_loading());
        assert!(conversation.complete(second.id));
        assert!(!conversation.is_loading());

        let texts: Vec<_> = conversation.transcript()[1..]
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            [
                "pricing",
                "security",
                CANNED_RESPONSES[0].answer,
                CANNED_RESPONSES[3].answer,
            ]
        );
    }

    #[test]
    fn completing_unknown_or_finished_ticket_is_ignored() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        assert!(!conversation.complete(42));

        let ticket = type_and_submit(&mut conversation, "pricing").expect("accepted");
        assert!(conversation.complete(ticket.id));
        assert!(!conversation.complete(ticket.id));
        assert_eq!(conversation.transcript().len(), 3);
    }

    #[test]
    fn transcript_json_lists_messages_in_order() {
        let mut conversation = conversation(PendingPolicy::Serialize);
        let ticket = type_and_submit(&mut conversation, "security").expect("accepted");
        conversation.complete(ticket.id);

        let json = conversation.transcript_json().expect("transcript should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let messages = value.as_array().expect("array of messages");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["sources"][0], "Security Whitepaper");
    }
}
