use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс ошибок библиотеки (object-safe).
///
/// Доменная ошибка (`PubsubError`, `TransportError`, ошибка разбора адреса)
/// сообщает свой [`StatusCode`] и отдаёт себя для downcast из
/// [`StackError`](crate::StackError).
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode;

    /// Возвращает ошибку как [`Any`](std::any::Any) для downcast.
    fn as_any(&self) -> &dyn Any;
}
