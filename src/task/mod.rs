//! Стык с планировщиком задач.
//!
//! Планировщик вызывает у задачи два метода: `handle_stanza` на каждую
//! входящую станзу и `process_response` в цикле, пока задача не вернёт
//! [`TaskState::Blocked`]. Всё выполняется в одном логическом потоке.
//!
//! - `context`: родитель задач (свой адрес, отправитель, выдача id).
//! - `engine`: минимальный планировщик для бинарника и тестов.
//! - `sender`: трейт отправки станз и in-memory реализация `Outbox`.

pub mod context;
pub mod engine;
pub mod sender;

pub use context::*;
pub use engine::*;
pub use sender::*;

use crate::xml::Element;

/// Результат одного шага обработки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Очередь пуста, управление возвращается планировщику.
    Blocked,
    /// За этот шаг обработан ровно один элемент очереди.
    Responded,
}

/// Задача, участвующая в кооперативной обработке станз.
pub trait Task {
    /// Идентификатор задачи; используется как `id` исходящих IQ.
    fn task_id(&self) -> &str;

    /// Решает, принадлежит ли станза этой задаче. `true` означает, что
    /// станза забрана и другим задачам не предлагается.
    fn handle_stanza(
        &mut self,
        stanza: &Element,
    ) -> bool;

    /// Выполняет один шаг: забирает из очереди не больше одного элемента.
    fn process_response(&mut self) -> TaskState;
}
