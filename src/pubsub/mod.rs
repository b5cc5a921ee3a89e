//! Клиентская часть XMPP publish–subscribe.
//!
//! - `registry`: реестр подписок узел → обработчик.
//! - `matching`: сопоставление отправителя и ответа с запросом.
//! - `query`: сборка исходящих IQ-запросов.
//! - `dispatch`: разбор контейнера `items` и вызов обработчика.
//! - `task`: [`PubsubTask`], классификатор станз и машина состояний.
//! - `stats`: счётчики работы задачи.

pub mod dispatch;
pub mod matching;
pub mod query;
pub mod registry;
pub mod stats;
pub mod task;

pub use dispatch::*;
pub use matching::*;
pub use query::*;
pub use registry::*;
pub use stats::*;
pub use task::*;
