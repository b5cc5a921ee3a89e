//! Демонстрационный клиент xmpubsub
//!
//! Подписывается на узлы pubsub-сервиса через in-memory транспорт,
//! прогоняет через планировщик сценарий из ответа на запрос элементов,
//! push-уведомления и ошибки и печатает, что получили обработчики.

use std::{cell::RefCell, path::PathBuf, rc::Rc, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use xmpubsub::{
    init_logging,
    xml::{
        NS_CLIENT, QN_ERROR, QN_FROM, QN_ID, QN_IQ, QN_MESSAGE, QN_NODE, QN_PUBSUB,
        QN_PUBSUB_EVENT, QN_PUBSUB_EVENT_ITEM, QN_PUBSUB_EVENT_ITEMS, QN_PUBSUB_EVENT_RETRACT,
        QN_PUBSUB_ITEM, QN_PUBSUB_ITEMS, QN_TYPE, STR_ERROR, STR_RESULT,
    },
    Element, Jid, Outbox, PubsubHooks, PubsubTask, Settings, TaskContext, TaskEngine,
};

/// Аргументы командной строки
#[derive(Parser)]
#[command(name = "xmpubsub")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("XMPUBSUB_GIT_COMMIT"), ")"))]
#[command(about = "Client-side XMPP pubsub demo over an in-memory transport", long_about = None)]
struct Cli {
    /// Файл настроек
    #[arg(short, long, env = "XMPUBSUB_CONFIG", help = "Путь к файлу настроек (TOML)")]
    config: Option<PathBuf>,
    /// Собственный адрес
    #[arg(long, help = "Собственный адрес клиента, например john@site.com/phone")]
    own_jid: Option<String>,
    /// Адрес pubsub-сервиса
    #[arg(long, help = "Адрес pubsub-сервиса; пустая строка означает свой сервер")]
    service: Option<String>,
    /// Узлы для подписки
    #[arg(long = "node", help = "Узел для подписки (можно указать несколько раз)")]
    nodes: Vec<String>,
    /// Включить подробный вывод (debug)
    #[arg(short, long, help = "Включить подробный вывод для отладки")]
    verbose: bool,
}

/// Состояние задачи: журнал того, что увидели обработчики.
#[derive(Default)]
struct DemoState {
    seen: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<u32>>,
}

impl PubsubHooks for DemoState {
    fn on_pubsub_error(
        &mut self,
        error: Option<&Element>,
    ) {
        *self.errors.borrow_mut() += 1;
        warn!(error = %error.map(|e| e.to_xml_in(NS_CLIENT)).unwrap_or_default(), "Pubsub error");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(own_jid) = cli.own_jid {
        settings.own_jid = own_jid;
    }
    if let Some(service) = cli.service {
        settings.service = service;
    }
    if !cli.nodes.is_empty() {
        settings.nodes = cli.nodes;
    }
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }

    let logging = init_logging(settings.logging.clone()).context("failed to initialize logging")?;
    info!(
        commit = env!("XMPUBSUB_GIT_COMMIT"),
        built = env!("XMPUBSUB_BUILD_TIME"),
        "xmpubsub demo starting"
    );

    let own_jid = settings.own_jid().context("invalid own_jid")?;
    let service = settings.service_jid().context("invalid service address")?;

    let outbox = Outbox::new();
    let ctx = TaskContext::new(own_jid, Arc::new(outbox.clone()));
    let mut engine = TaskEngine::new();

    let state = DemoState::default();
    let seen = Rc::clone(&state.seen);
    let errors = Rc::clone(&state.errors);

    let mut task = PubsubTask::new(&ctx, service.clone(), state);
    for node in &settings.nodes {
        let name = node.clone();
        let subscribed = task.subscribe(node, move |state: &mut DemoState, item: &Element| {
            let id = item.attr(&QN_ID).unwrap_or_default();
            let line = format!("{name}: {} {id}", item.name().local_part());
            info!("{line}");
            state.seen.borrow_mut().push(line);
        });
        match subscribed {
            Ok(()) => {}
            // Неверное имя узла не мешает подписке на остальные.
            Err(err) if err.status_code().is_client_error() => {
                warn!(node = %node, code = %err.status_code(), error = %err, "Node skipped");
            }
            Err(err) => return Err(err).with_context(|| format!("subscribe to '{node}'")),
        }
    }
    let task_id = engine.add_task(task);

    for stanza in outbox.take_sent() {
        info!(stanza = %stanza.to_xml_in(NS_CLIENT), "Sent");
    }

    for stanza in script(&service, &task_id, &settings.nodes) {
        engine.deliver(&stanza);
    }

    println!("task {task_id}: {} item(s), {} error(s)", seen.borrow().len(), errors.borrow());
    for line in seen.borrow().iter() {
        println!("  {line}");
    }
    println!("unclaimed stanzas: {}", engine.unclaimed_count());

    logging.shutdown();
    Ok(())
}

/// Входящие станзы сценария: ответ на каждый запрос, push для первого
/// узла, посторонняя станза и ошибка.
fn script(
    service: &Jid,
    task_id: &str,
    nodes: &[String],
) -> Vec<Element> {
    let from = service.to_string();
    let mut stanzas = Vec::new();

    for node in nodes {
        let items = Element::builder(QN_PUBSUB_ITEMS)
            .attr(QN_NODE, node.as_str())
            .child(Element::builder(QN_PUBSUB_ITEM).attr(QN_ID, "current").build())
            .build();
        let mut iq = Element::builder(QN_IQ)
            .attr(QN_TYPE, STR_RESULT)
            .attr(QN_ID, task_id)
            .child(Element::builder(QN_PUBSUB).child(items).build())
            .build();
        if !service.is_empty() {
            iq.set_attr(QN_FROM, from.as_str());
        }
        stanzas.push(iq);
    }

    if let Some(node) = nodes.first() {
        let items = Element::builder(QN_PUBSUB_EVENT_ITEMS)
            .attr(QN_NODE, node.as_str())
            .child(Element::builder(QN_PUBSUB_EVENT_ITEM).attr(QN_ID, "fresh").build())
            .child(Element::builder(QN_PUBSUB_EVENT_RETRACT).attr(QN_ID, "current").build())
            .build();
        let mut message = Element::builder(QN_MESSAGE)
            .child(Element::builder(QN_PUBSUB_EVENT).child(items).build())
            .build();
        if !service.is_empty() {
            message.set_attr(QN_FROM, from.as_str());
        }
        stanzas.push(message);
    }

    stanzas.push(
        Element::builder(QN_MESSAGE)
            .attr(QN_FROM, "stranger@elsewhere.org")
            .build(),
    );

    let mut error = Element::builder(QN_IQ)
        .attr(QN_TYPE, STR_ERROR)
        .attr(QN_ID, task_id)
        .child(Element::builder(QN_ERROR).attr(QN_TYPE, "cancel").build())
        .build();
    if !service.is_empty() {
        error.set_attr(QN_FROM, from.as_str());
    }
    stanzas.push(error);

    stanzas
}
