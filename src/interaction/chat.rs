use tracing::{info, instrument};

use crate::{
    base::types::{ChatAnswer, ChatQuery},
    responder::Responder,
};

use super::InteractionResult;

/// Answers a chat question after checking its length.
#[instrument(skip_all)]
pub fn chat(responder: &Responder, query: &ChatQuery) -> InteractionResult<ChatAnswer> {
    query.validate()?;

    let answer = responder.answer(&query.question);
    info!("Answered a {} character question.", query.question.chars().count());

    Ok(ChatAnswer { answer })
}
