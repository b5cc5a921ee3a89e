use crate::{ErrorExt, StatusCode};

/// Ошибки отправки станз через транспорт.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// Поток закрыт
    Closed,
    /// Транспорт отказался принять станзу
    SendFailed { reason: String },
}

impl std::fmt::Display for TransportError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "Stream closed"),
            Self::SendFailed { reason } => write!(f, "Failed to send stanza: {reason}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl ErrorExt for TransportError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Closed => StatusCode::ConnectionClosed,
            Self::SendFailed { .. } => StatusCode::SendFailed,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
