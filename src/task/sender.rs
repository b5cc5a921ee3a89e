use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;
use xmpubsub_error::{TransportError, XmppResult};

use crate::xml::{Element, NS_CLIENT};

/// Отправка исходящих станз.
///
/// Реализуется транспортом. Ошибка возвращается вызывающему коду как есть,
/// без повторов.
pub trait StanzaSender: Send + Sync {
    fn send_stanza(
        &self,
        stanza: &Element,
    ) -> XmppResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OutboxMode {
    Open,
    Failing(String),
    Closed,
}

#[derive(Debug)]
struct OutboxState {
    sent: Vec<Element>,
    mode: OutboxMode,
}

/// In-memory отправитель: складывает станзы в буфер.
///
/// Клоны разделяют один буфер, поэтому тест может держать копию и
/// проверять, что ушло в сеть.
#[derive(Debug, Clone)]
pub struct Outbox {
    inner: Arc<Mutex<OutboxState>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(OutboxState {
                sent: Vec::new(),
                mode: OutboxMode::Open,
            })),
        }
    }

    /// Забирает отправленные станзы, очищая буфер.
    pub fn take_sent(&self) -> Vec<Element> {
        std::mem::take(&mut self.inner.lock().sent)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Последующие отправки завершаются `TransportError::SendFailed`.
    pub fn set_failing(
        &self,
        reason: impl Into<String>,
    ) {
        self.inner.lock().mode = OutboxMode::Failing(reason.into());
    }

    /// Последующие отправки завершаются `TransportError::Closed`.
    pub fn close(&self) {
        self.inner.lock().mode = OutboxMode::Closed;
    }

    pub fn reopen(&self) {
        self.inner.lock().mode = OutboxMode::Open;
    }
}

impl Default for Outbox {
    fn default() -> Self {
        Self::new()
    }
}

impl StanzaSender for Outbox {
    fn send_stanza(
        &self,
        stanza: &Element,
    ) -> XmppResult<()> {
        let mut guard = self.inner.lock();
        let state = &mut *guard;
        match &state.mode {
            OutboxMode::Open => {
                trace!(stanza = %stanza.to_xml_in(NS_CLIENT), "Outbound stanza");
                state.sent.push(stanza.clone());
                Ok(())
            }
            OutboxMode::Failing(reason) => Err(TransportError::SendFailed {
                reason: reason.clone(),
            }
            .into()),
            OutboxMode::Closed => Err(TransportError::Closed.into()),
        }
    }
}
