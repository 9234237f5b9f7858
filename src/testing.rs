use std::cell::RefCell;
use std::collections::VecDeque;

use crate::errors::OmneuroError;
use crate::openai::{ChatCompletion, Conversation};

/// Replays canned replies in order and records every conversation it is sent.
pub struct ScriptedClient {
    replies: RefCell<VecDeque<Result<String, OmneuroError>>>,
    calls: RefCell<Vec<Conversation>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String, OmneuroError>>) -> Self {
        ScriptedClient {
            replies: RefCell::new(replies.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Conversation> {
        self.calls.borrow().clone()
    }
}

impl ChatCompletion for ScriptedClient {
    fn complete(&self, conversation: &Conversation) -> Result<String, OmneuroError> {
        self.calls.borrow_mut().push(conversation.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(OmneuroError::EmptyResponse))
    }
}
