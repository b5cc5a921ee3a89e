use std::{fmt, sync::Arc};

use crate::{ErrorExt, StatusCode};

/// Ошибка операции библиотеки: доменная ошибка за общим интерфейсом.
///
/// Дешёво клонируется; конкретный тип достаётся через
/// [`StackError::downcast_ref`].
#[derive(Clone)]
pub struct StackError {
    inner: Arc<dyn ErrorExt>,
}

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            inner: Arc::new(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    /// Попытка downcast к конкретному типу ошибки
    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("StackError")
            .field("inner", &self.inner.to_string())
            .field("status_code", &self.status_code())
            .finish()
    }
}

impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(e: E) -> Self {
        StackError::new(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::{PubsubError, TransportError};

    #[test]
    fn test_downcast() {
        let stack = StackError::new(PubsubError::InvalidNode {
            node: String::new(),
        });

        assert!(stack.downcast_ref::<PubsubError>().is_some());
        assert!(stack.downcast_ref::<TransportError>().is_none());
    }

    /// Тест проверяет, что Display и source отдают корневую ошибку.
    #[test]
    fn test_display_and_source() {
        let stack: StackError = TransportError::SendFailed {
            reason: "socket reset".to_string(),
        }
        .into();

        assert_eq!(stack.to_string(), "Failed to send stanza: socket reset");
        assert_eq!(stack.status_code(), StatusCode::SendFailed);
        assert!(stack.source().is_some());
        assert!(format!("{stack:?}").contains("SendFailed"));
    }
}
