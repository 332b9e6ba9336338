use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("hub is full ({limit} subscribers)")]
    Full { limit: usize },
}
