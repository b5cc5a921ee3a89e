//! Client-side XMPP publish/subscribe.
//!
//! A [`PubsubTask`] picks push notifications and items-query responses out
//! of the inbound stanza stream, queues them, and dispatches every `item`
//! and `retract` to the handler registered for its node.

/// Settings loading (defaults, `xmpubsub.toml`, `XMPUBSUB_*` env).
pub mod config;
/// XMPP addresses.
pub mod jid;
/// Flexible logging (formatting, filters, sinks).
pub mod logging;
/// Pub/Sub: registry, stanza classification, item dispatch.
pub mod pubsub;
/// Task seam: scheduler, task context, outbound stanza sender.
pub mod task;
/// Element tree, qualified names and XML serialization.
pub mod xml;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use config::Settings;
/// Addresses.
pub use jid::{Jid, JidError};
/// Logging setup.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Pub/Sub API.
pub use pubsub::{NodeHandler, NodeRegistry, PubsubHooks, PubsubStats, PubsubTask};
/// Scheduler integration.
pub use task::{Outbox, StanzaSender, Task, TaskContext, TaskEngine, TaskState};
/// Element tree.
pub use xml::{Element, ElementBuilder, QName};
/// Operation errors and result types.
pub use xmpubsub_error::{
    ErrorExt, PubsubError, StackError, StatusCode, TransportError, XmppResult,
};
