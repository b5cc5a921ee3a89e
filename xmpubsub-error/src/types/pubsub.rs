use std::any::Any;

use crate::{ErrorExt, StatusCode};

/// Ошибки подписки на узел pubsub.
#[derive(Debug, Clone)]
pub enum PubsubError {
    /// Имя узла не подходит для запроса (например, пустое)
    InvalidNode { node: String },
    /// Запрос собран, но транспорт не смог его отправить
    QuerySendFailed { node: String, reason: String },
}

impl PubsubError {
    /// Имя узла, к которому относится ошибка.
    pub fn node(&self) -> &str {
        match self {
            Self::InvalidNode { node }
            | Self::QuerySendFailed { node, .. } => node,
        }
    }
}

impl std::fmt::Display for PubsubError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::InvalidNode { node } => write!(f, "Invalid pubsub node name: '{node}'"),
            Self::QuerySendFailed { node, reason } => {
                write!(f, "Failed to send items query for node '{node}': {reason}")
            }
        }
    }
}

impl std::error::Error for PubsubError {}

impl ErrorExt for PubsubError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidNode { .. } => StatusCode::InvalidNode,
            Self::QuerySendFailed { .. } => StatusCode::SendFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
