use tracing::{debug, trace};

use crate::{
    task::{Task, TaskState},
    xml::{Element, NS_CLIENT},
};

/// Минимальный кооперативный планировщик.
///
/// Предлагает входящую станзу задачам в порядке добавления до первой,
/// которая её забрала, затем прокачивает эту задачу до `Blocked`. Забранная
/// станза другим задачам не предлагается.
#[derive(Default)]
pub struct TaskEngine {
    tasks: Vec<Box<dyn Task>>,
    unclaimed: u64,
}

impl TaskEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет задачу и возвращает её идентификатор.
    pub fn add_task<T: Task + 'static>(
        &mut self,
        task: T,
    ) -> String {
        let id = task.task_id().to_string();
        debug!(task_id = %id, "Task added");
        self.tasks.push(Box::new(task));
        id
    }

    /// Удаляет задачу вместе с её реестром и очередью.
    pub fn remove_task(
        &mut self,
        task_id: &str,
    ) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_id() != task_id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(task_id, "Task removed");
        }
        removed
    }

    /// Доставляет входящую станзу. Возвращает `true`, если её забрала одна
    /// из задач.
    pub fn deliver(
        &mut self,
        stanza: &Element,
    ) -> bool {
        for task in self.tasks.iter_mut() {
            if task.handle_stanza(stanza) {
                let steps = run_until_blocked(task.as_mut());
                trace!(task_id = task.task_id(), steps, "Stanza claimed");
                return true;
            }
        }

        self.unclaimed += 1;
        trace!(stanza = %stanza.to_xml_in(NS_CLIENT), "Stanza not claimed by any task");
        false
    }

    /// Прокачивает все задачи до `Blocked`; возвращает число обработанных
    /// элементов.
    pub fn run_all(&mut self) -> usize {
        self.tasks
            .iter_mut()
            .map(|task| run_until_blocked(task.as_mut()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Сколько станз не забрала ни одна задача.
    pub fn unclaimed_count(&self) -> u64 {
        self.unclaimed
    }
}

fn run_until_blocked(task: &mut dyn Task) -> usize {
    let mut steps = 0;
    while task.process_response() == TaskState::Responded {
        steps += 1;
    }
    steps
}
