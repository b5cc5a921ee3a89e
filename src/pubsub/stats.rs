/// Счётчики работы одной pubsub-задачи.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PubsubStats {
    /// Забрано push-уведомлений.
    pub events_claimed: u64,
    /// Забрано ответов `result` на запрос элементов.
    pub responses_claimed: u64,
    /// Забрано ответов `error`.
    pub errors_claimed: u64,
    /// Станз, которые классификатор отклонил.
    pub rejected: u64,
    /// Вызовов обработчиков узлов.
    pub items_dispatched: u64,
    /// Вызовов `on_pubsub_error`.
    pub error_hooks: u64,
}

impl PubsubStats {
    /// Всего станз, забранных задачей.
    pub fn claimed(&self) -> u64 {
        self.events_claimed + self.responses_claimed + self.errors_claimed
    }
}
