//! Дерево элементов XMPP-станз.
//!
//! Минимальная модель XML, с которой работает pubsub-задача:
//!
//! - `qname`: квалифицированные имена (`{namespace}local`).
//! - `element`: элемент с атрибутами и дочерними узлами, построитель.
//! - `names`: имена и строковые константы протокола.
//! - `writer`: сериализация элемента в текст XML.
//!
//! Разбор входящего потока в дерево выполняет транспорт; сюда приходят уже
//! готовые элементы.

pub mod element;
pub mod names;
pub mod qname;
mod writer;

pub use element::*;
pub use names::*;
pub use qname::*;
