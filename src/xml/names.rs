use super::QName;

pub const NS_CLIENT: &str = "jabber:client";
pub const NS_PUBSUB: &str = "http://jabber.org/protocol/pubsub";
pub const NS_PUBSUB_EVENT: &str = "http://jabber.org/protocol/pubsub#event";
pub const NS_STANZAS: &str = "urn:ietf:params:xml:ns:xmpp-stanzas";
/// Зарезервированное пространство имён префикса `xml`; не объявляется.
pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";

// Станзы
pub const QN_MESSAGE: QName = QName::from_static(NS_CLIENT, "message");
pub const QN_IQ: QName = QName::from_static(NS_CLIENT, "iq");
pub const QN_ERROR: QName = QName::from_static(NS_CLIENT, "error");

// Запрос и ответ pubsub
pub const QN_PUBSUB: QName = QName::from_static(NS_PUBSUB, "pubsub");
pub const QN_PUBSUB_ITEMS: QName = QName::from_static(NS_PUBSUB, "items");
pub const QN_PUBSUB_ITEM: QName = QName::from_static(NS_PUBSUB, "item");

// Push-уведомления
pub const QN_PUBSUB_EVENT: QName = QName::from_static(NS_PUBSUB_EVENT, "event");
pub const QN_PUBSUB_EVENT_ITEMS: QName = QName::from_static(NS_PUBSUB_EVENT, "items");
pub const QN_PUBSUB_EVENT_ITEM: QName = QName::from_static(NS_PUBSUB_EVENT, "item");
pub const QN_PUBSUB_EVENT_RETRACT: QName = QName::from_static(NS_PUBSUB_EVENT, "retract");

// Атрибуты
pub const QN_TYPE: QName = QName::from_static("", "type");
pub const QN_ID: QName = QName::from_static("", "id");
pub const QN_FROM: QName = QName::from_static("", "from");
pub const QN_TO: QName = QName::from_static("", "to");
pub const QN_NODE: QName = QName::from_static("", "node");

// Значения атрибута `type`
pub const STR_GET: &str = "get";
pub const STR_SET: &str = "set";
pub const STR_RESULT: &str = "result";
pub const STR_ERROR: &str = "error";
