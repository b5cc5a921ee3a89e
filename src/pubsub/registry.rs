use std::{collections::HashMap, fmt};

use crate::xml::Element;

/// Обработчик элементов узла.
///
/// Получает изменяемый доступ к состоянию задачи `H` и один элемент
/// (`item` или `retract`) за вызов.
pub type NodeHandler<H> = Box<dyn FnMut(&mut H, &Element)>;

/// Реестр подписок: имя узла → обработчик.
///
/// Имя встречается не больше одного раза; повторная регистрация заменяет
/// обработчик. Реестр владеет своими ключами: после удаления узла или
/// самого реестра от имени ничего не остаётся. В сеть реестр ничего не
/// отправляет.
pub struct NodeRegistry<H> {
    nodes: HashMap<Box<str>, NodeHandler<H>>,
}

impl<H> NodeRegistry<H> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Регистрирует обработчик (upsert). Возвращает `true`, если для узла уже
    /// был обработчик и он заменён.
    pub fn insert(
        &mut self,
        node: &str,
        handler: NodeHandler<H>,
    ) -> bool {
        self.nodes.insert(Box::from(node), handler).is_some()
    }

    /// Удаляет обработчик, если он есть.
    pub fn remove(
        &mut self,
        node: &str,
    ) -> bool {
        self.nodes.remove(node).is_some()
    }

    pub fn contains(
        &self,
        node: &str,
    ) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn get_mut(
        &mut self,
        node: &str,
    ) -> Option<&mut NodeHandler<H>> {
        self.nodes.get_mut(node)
    }

    /// Имена узлов в произвольном порядке.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|k| &**k)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<H> Default for NodeRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for NodeRegistry<H> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut nodes: Vec<&str> = self.nodes().collect();
        nodes.sort_unstable();
        f.debug_struct("NodeRegistry").field("nodes", &nodes).finish()
    }
}
