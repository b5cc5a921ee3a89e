use xmpubsub_error::{ensure, PubsubError, XmppResult};

use crate::{
    jid::Jid,
    xml::{Element, QN_ID, QN_IQ, QN_NODE, QN_PUBSUB, QN_PUBSUB_ITEMS, QN_TO, QN_TYPE, STR_GET},
};

/// Собирает пустой `<iq type=.. to=.. id=../>`.
///
/// Атрибут `to` опускается, если адрес пустой: такой запрос уходит
/// собственному серверу клиента.
pub fn make_iq(
    iq_type: &str,
    to: &Jid,
    id: &str,
) -> Element {
    let mut iq = Element::new(QN_IQ);
    iq.set_attr(QN_TYPE, iq_type);
    if !to.is_empty() {
        iq.set_attr(QN_TO, to.to_string());
    }
    iq.set_attr(QN_ID, id);
    iq
}

/// Запрос текущих элементов узла:
///
/// ```xml
/// <iq type="get" to="TARGET" id="ID">
///   <pubsub xmlns="http://jabber.org/protocol/pubsub">
///     <items node="NODE"/>
///   </pubsub>
/// </iq>
/// ```
pub fn items_query(
    target: &Jid,
    id: &str,
    node: &str,
) -> XmppResult<Element> {
    ensure!(
        !node.is_empty(),
        PubsubError::InvalidNode {
            node: node.to_string()
        }
    );

    let items = Element::builder(QN_PUBSUB_ITEMS).attr(QN_NODE, node).build();
    let pubsub = Element::builder(QN_PUBSUB).child(items).build();

    let mut iq = make_iq(STR_GET, target, id);
    iq.add_child(pubsub);
    Ok(iq)
}
