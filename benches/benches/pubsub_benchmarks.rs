use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use xmpubsub::{
    pubsub::{dispatch_items, items_query, NodeRegistry},
    xml::{
        QName, QN_FROM, QN_ID, QN_MESSAGE, QN_NODE, QN_PUBSUB_EVENT, QN_PUBSUB_EVENT_ITEM,
        QN_PUBSUB_EVENT_ITEMS, QN_PUBSUB_EVENT_RETRACT, NS_CLIENT,
    },
    Element, Jid, Outbox, PubsubTask, Task, TaskContext, TaskState,
};

const SERVICE: &str = "pubsub.example.com";

fn items_container(count: usize) -> Element {
    let mut items = Element::builder(QN_PUBSUB_EVENT_ITEMS).attr(QN_NODE, "news");
    for i in 0..count {
        let name = match i % 3 {
            0 => QN_PUBSUB_EVENT_ITEM,
            1 => QN_PUBSUB_EVENT_RETRACT,
            _ => QName::new("urn:example:noise", "noise"),
        };
        items = items.child(Element::builder(name).attr(QN_ID, i.to_string()).build());
    }
    items.build()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_items");
    for count in [1usize, 16, 256] {
        let items = items_container(count);
        let mut registry: NodeRegistry<u64> = NodeRegistry::new();
        registry.insert("news", Box::new(|calls: &mut u64, _: &Element| *calls += 1));

        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            let mut calls = 0u64;
            b.iter(|| black_box(dispatch_items(&mut registry, &mut calls, black_box(items))));
        });
    }
    group.finish();
}

fn bench_classify_and_step(c: &mut Criterion) {
    let ctx = TaskContext::new(Jid::empty(), Arc::new(Outbox::new()));
    let mut task = PubsubTask::new(&ctx, SERVICE.parse().unwrap(), ());
    task.subscribe("news", |_: &mut (), _: &Element| {}).unwrap();

    let push = Element::builder(QN_MESSAGE)
        .attr(QN_FROM, SERVICE)
        .child(
            Element::builder(QN_PUBSUB_EVENT)
                .child(items_container(8))
                .build(),
        )
        .build();
    let foreign = Element::builder(QN_MESSAGE)
        .attr(QN_FROM, "someone@elsewhere.org")
        .build();

    c.bench_function("classify_and_step_push", |b| {
        b.iter(|| {
            assert!(task.handle_stanza(black_box(&push)));
            while task.process_response() == TaskState::Responded {}
        })
    });

    c.bench_function("classify_reject_foreign", |b| {
        b.iter(|| black_box(task.handle_stanza(black_box(&foreign))))
    });
}

fn bench_items_query(c: &mut Criterion) {
    let target: Jid = SERVICE.parse().unwrap();
    c.bench_function("items_query_serialize", |b| {
        b.iter(|| {
            let iq = items_query(black_box(&target), "42", black_box("news")).unwrap();
            black_box(iq.to_xml_in(NS_CLIENT))
        })
    });
}

criterion_group!(
    benches,
    bench_dispatch,
    bench_classify_and_step,
    bench_items_query
);
criterion_main!(benches);
