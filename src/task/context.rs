use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{jid::Jid, task::StanzaSender};

/// Родитель задач: собственный адрес клиента, общий отправитель и счётчик
/// идентификаторов.
///
/// Клоны разделяют отправитель и счётчик, поэтому id уникальны в пределах
/// одного соединения.
#[derive(Clone)]
pub struct TaskContext {
    jid: Jid,
    sender: Arc<dyn StanzaSender>,
    next_id: Arc<AtomicU64>,
}

impl TaskContext {
    pub fn new(
        jid: Jid,
        sender: Arc<dyn StanzaSender>,
    ) -> Self {
        Self {
            jid,
            sender,
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Собственный адрес клиента.
    pub fn jid(&self) -> &Jid {
        &self.jid
    }

    pub fn sender(&self) -> Arc<dyn StanzaSender> {
        Arc::clone(&self.sender)
    }

    /// Следующий идентификатор задачи в десятичной записи.
    pub fn next_task_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl std::fmt::Debug for TaskContext {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("TaskContext")
            .field("jid", &self.jid)
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish()
    }
}
