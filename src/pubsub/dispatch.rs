use tracing::{error, trace};

use super::NodeRegistry;
use crate::xml::{
    Element, QName, QN_NODE, QN_PUBSUB_EVENT_ITEM, QN_PUBSUB_EVENT_RETRACT, QN_PUBSUB_ITEM,
};

/// Дочерние элементы `items`, которые передаются обработчику узла.
pub const ITEM_KINDS: [QName; 3] = [QN_PUBSUB_ITEM, QN_PUBSUB_EVENT_ITEM, QN_PUBSUB_EVENT_RETRACT];

pub fn is_item_kind(name: &QName) -> bool {
    ITEM_KINDS.iter().any(|kind| kind == name)
}

/// Передаёт элементы контейнера `items` обработчику его узла.
///
/// Дочерние элементы обходятся в порядке документа; каждый `item` или
/// `retract` даёт ровно один вызов обработчика, прочие пропускаются.
/// Если узел не зарегистрирован, ничего не происходит. Возвращает число
/// вызовов.
///
/// Контейнер без атрибута `node` нарушает контракт вызывающей стороны.
pub fn dispatch_items<H>(
    registry: &mut NodeRegistry<H>,
    hooks: &mut H,
    items: &Element,
) -> usize {
    let node = items.attr(&QN_NODE);
    debug_assert!(node.is_some(), "items container without node attribute: {items}");
    let Some(node) = node else {
        error!(element = %items, "Items container without node attribute");
        return 0;
    };

    let Some(handler) = registry.get_mut(node) else {
        trace!(node, "No handler for node, items dropped");
        return 0;
    };

    let mut dispatched = 0;
    for child in items.elements() {
        if !is_item_kind(child.name()) {
            trace!(node, name = %child.name(), "Skipping unknown child");
            continue;
        }
        handler(hooks, child);
        dispatched += 1;
    }

    trace!(node, dispatched, "Items dispatched");
    dispatched
}
