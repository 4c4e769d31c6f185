use crate::base::{knowledge::KnowledgeBase, types::StatusMessage};

/// Liveness payload of the root endpoint.
pub fn health(knowledge: &KnowledgeBase) -> StatusMessage {
    StatusMessage {
        message: format!("{} backend is running", knowledge.organization),
    }
}
