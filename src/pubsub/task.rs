use std::{collections::VecDeque, sync::Arc};

use tracing::{debug, trace, warn};
use xmpubsub_error::{PubsubError, StackError, XmppResult};

use super::{
    dispatch_items, items_query, match_response_iq, match_stanza_from, NodeRegistry, PubsubStats,
};
use crate::{
    jid::Jid,
    task::{StanzaSender, Task, TaskContext, TaskState},
    xml::{
        Element, QN_ERROR, QN_MESSAGE, QN_PUBSUB, QN_PUBSUB_EVENT, QN_PUBSUB_EVENT_ITEMS,
        QN_PUBSUB_ITEMS, QN_TYPE, STR_ERROR,
    },
};

/// Точки расширения pubsub-задачи.
///
/// Реализуется типом состояния `H`, которое задача передаёт обработчикам
/// узлов.
pub trait PubsubHooks {
    /// Вызывается один раз на каждый ответ `type="error"`. В аргументе
    /// элемент `<error/>` из ответа, если он есть.
    fn on_pubsub_error(
        &mut self,
        _error: Option<&Element>,
    ) {
    }
}

impl PubsubHooks for () {}

/// Клиентская задача подписки на узлы одного pubsub-сервиса.
///
/// Забирает из потока станз push-уведомления от `target` и ответы на свои
/// запросы (IQ с `id`, равным идентификатору задачи), ставит их в очередь
/// и по одному разбирает в [`Task::process_response`]. Элементы каждого
/// контейнера `items` получает обработчик, зарегистрированный для узла на
/// момент разбора.
pub struct PubsubTask<H> {
    task_id: String,
    target: Jid,
    own_jid: Jid,
    sender: Arc<dyn StanzaSender>,
    registry: NodeRegistry<H>,
    pending: VecDeque<Element>,
    hooks: H,
    stats: PubsubStats,
}

impl<H: PubsubHooks> PubsubTask<H> {
    /// Создаёт задачу для сервиса `target`. Пустой `target` означает
    /// собственный сервер клиента.
    pub fn new(
        ctx: &TaskContext,
        target: Jid,
        hooks: H,
    ) -> Self {
        let task_id = ctx.next_task_id();
        debug!(task_id = %task_id, target = %target, "Pubsub task created");
        Self {
            task_id,
            target,
            own_jid: ctx.jid().clone(),
            sender: ctx.sender(),
            registry: NodeRegistry::new(),
            pending: VecDeque::new(),
            hooks,
            stats: PubsubStats::default(),
        }
    }

    /// Регистрирует обработчик узла и отправляет запрос его текущих
    /// элементов.
    ///
    /// Обработчик регистрируется сразу, независимо от того, удалось ли
    /// собрать и отправить запрос. Повторная подписка на тот же узел
    /// заменяет обработчик. Ошибки сборки и отправки возвращаются без
    /// повторов.
    pub fn subscribe<F>(
        &mut self,
        node: &str,
        handler: F,
    ) -> XmppResult<()>
    where
        F: FnMut(&mut H, &Element) + 'static,
    {
        let replaced = self.registry.insert(node, Box::new(handler));
        debug!(task_id = %self.task_id, node, replaced, "Subscribed to node");

        let query = items_query(&self.target, &self.task_id, node)?;
        self.sender.send_stanza(&query).map_err(|err| {
            warn!(task_id = %self.task_id, node, error = %err, "Items query not sent");
            StackError::new(PubsubError::QuerySendFailed {
                node: node.to_string(),
                reason: err.to_string(),
            })
        })
    }

    /// Убирает обработчик узла. В сеть ничего не отправляется, ожидающий
    /// ответ на запрос элементов по-прежнему будет забран и разобран, но
    /// его элементы никому не достанутся.
    pub fn unsubscribe(
        &mut self,
        node: &str,
    ) -> bool {
        let removed = self.registry.remove(node);
        debug!(task_id = %self.task_id, node, removed, "Unsubscribed from node");
        removed
    }

    pub fn is_subscribed(
        &self,
        node: &str,
    ) -> bool {
        self.registry.contains(node)
    }

    /// Узлы с обработчиками, по алфавиту.
    pub fn subscribed_nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.registry.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn target(&self) -> &Jid {
        &self.target
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn stats(&self) -> PubsubStats {
        self.stats
    }

    /// Извлекает из станзы полезную нагрузку, если станза принадлежит
    /// задаче.
    fn classify(
        &mut self,
        stanza: &Element,
    ) -> Option<Element> {
        if stanza.name() == &QN_MESSAGE {
            if !match_stanza_from(stanza, &self.target, &self.own_jid) {
                return None;
            }
            let event = stanza.first_named(&QN_PUBSUB_EVENT)?;
            self.stats.events_claimed += 1;
            return Some(event.clone());
        }

        if !match_response_iq(stanza, &self.target, &self.task_id, &self.own_jid) {
            return None;
        }
        if stanza.attr(&QN_TYPE) == Some(STR_ERROR) {
            // Маркер ошибки и `<error/>` лежат на самой станзе.
            self.stats.errors_claimed += 1;
            return Some(stanza.clone());
        }
        let pubsub = stanza.first_named(&QN_PUBSUB)?;
        self.stats.responses_claimed += 1;
        Some(pubsub.clone())
    }
}

impl<H: PubsubHooks> Task for PubsubTask<H> {
    fn task_id(&self) -> &str {
        &self.task_id
    }

    fn handle_stanza(
        &mut self,
        stanza: &Element,
    ) -> bool {
        match self.classify(stanza) {
            Some(payload) => {
                debug!(
                    task_id = %self.task_id,
                    payload = %payload.name(),
                    queued = self.pending.len() + 1,
                    "Stanza claimed"
                );
                self.pending.push_back(payload);
                true
            }
            None => {
                self.stats.rejected += 1;
                trace!(task_id = %self.task_id, stanza = %stanza.name(), "Stanza rejected");
                false
            }
        }
    }

    fn process_response(&mut self) -> TaskState {
        let Some(payload) = self.pending.pop_front() else {
            return TaskState::Blocked;
        };

        if payload.attr(&QN_TYPE) == Some(STR_ERROR) {
            let error = payload.first_named(&QN_ERROR);
            warn!(
                task_id = %self.task_id,
                target = %self.target,
                error = %error.map(ToString::to_string).unwrap_or_default(),
                "Pubsub error response"
            );
            self.stats.error_hooks += 1;
            self.hooks.on_pubsub_error(error);
            return TaskState::Responded;
        }

        let items_name = if payload.name() == &QN_PUBSUB_EVENT {
            QN_PUBSUB_EVENT_ITEMS
        } else if payload.name() == &QN_PUBSUB {
            QN_PUBSUB_ITEMS
        } else {
            trace!(task_id = %self.task_id, payload = %payload.name(), "Unexpected payload ignored");
            return TaskState::Responded;
        };

        for items in payload.named(&items_name) {
            let dispatched = dispatch_items(&mut self.registry, &mut self.hooks, items);
            self.stats.items_dispatched += dispatched as u64;
        }
        TaskState::Responded
    }
}

impl<H> std::fmt::Debug for PubsubTask<H> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("PubsubTask")
            .field("task_id", &self.task_id)
            .field("target", &self.target)
            .field("registry", &self.registry)
            .field("pending", &self.pending.len())
            .field("stats", &self.stats)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
