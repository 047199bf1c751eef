// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crossbeam_channel::bounded;
use sonar_core::asset::AssetPath;
use sonar_core::catalog::{LoadPriority, ObjectResolver, StreamableLoader};
use sonar_data::assets::AudioEvent;
use sonar_infra::{ObjectStore, ThreadedStreamableLoader};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn paths(raw: &[&str]) -> Vec<AssetPath> {
    raw.iter().map(|p| AssetPath::new(*p)).collect()
}

/// Loads every path except those containing "Broken".
fn audio_factory(path: &AssetPath) -> Option<AudioEvent> {
    (!path.as_str().contains("Broken")).then(|| AudioEvent::new(path.clone()))
}

#[test]
fn loaded_objects_become_resolvable() {
    sonar_telemetry::init_test_logging();
    let store = Arc::new(ObjectStore::new());
    let loader = ThreadedStreamableLoader::new(store.clone(), audio_factory).unwrap();

    let (done_tx, done_rx) = bounded(1);
    let handle = loader
        .request_async_load(
            paths(&["/Game/A.A", "/Game/Broken.Broken"]),
            LoadPriority::High,
            Box::new(move || done_tx.send(thread::current().id()).unwrap()),
        )
        .unwrap();

    let completion_thread = done_rx.recv_timeout(TIMEOUT).expect("request should complete");
    assert_ne!(completion_thread, thread::current().id());
    assert!(handle.is_complete());

    assert_eq!(
        store.resolve(&AssetPath::new("/Game/A.A")).map(|e| e.name.clone()),
        Some("A".to_string())
    );
    assert!(
        store.resolve(&AssetPath::new("/Game/Broken.Broken")).is_none(),
        "a failed load leaves nothing to resolve"
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_request_completes_on_the_caller() {
    let store = Arc::new(ObjectStore::<AudioEvent>::new());
    let loader = ThreadedStreamableLoader::new(store, audio_factory).unwrap();

    let caller = thread::current().id();
    let ran_on = Arc::new(Mutex::new(None));
    let ran_on_cb = ran_on.clone();
    let handle = loader
        .request_async_load(
            Vec::new(),
            LoadPriority::High,
            Box::new(move || *ran_on_cb.lock().unwrap() = Some(thread::current().id())),
        )
        .unwrap();

    assert!(handle.is_complete());
    assert_eq!(*ran_on.lock().unwrap(), Some(caller));
}

#[test]
fn high_priority_requests_jump_the_queue() {
    let (entered_tx, entered_rx) = bounded::<()>(1);
    let (gate_tx, gate_rx) = bounded::<()>(1);
    let store = Arc::new(ObjectStore::<AudioEvent>::new());
    let loader = ThreadedStreamableLoader::new(store, move |path: &AssetPath| {
        if path.as_str().contains("Gate") {
            // Hold the worker until every other request is queued.
            let _ = entered_tx.send(());
            let _ = gate_rx.recv_timeout(TIMEOUT);
        }
        Some(AudioEvent::new(path.clone()))
    })
    .unwrap();

    let order = Arc::new(Mutex::new(Vec::new()));
    let (done_tx, done_rx) = bounded(3);
    let submit = |raw: &'static str, priority: LoadPriority| {
        let order = order.clone();
        let done_tx = done_tx.clone();
        loader
            .request_async_load(
                paths(&[raw]),
                priority,
                Box::new(move || {
                    order.lock().unwrap().push(raw);
                    done_tx.send(()).unwrap();
                }),
            )
            .unwrap();
    };

    submit("/Game/Gate.Gate", LoadPriority::Normal);
    entered_rx
        .recv_timeout(TIMEOUT)
        .expect("worker should start on the gated request");
    submit("/Game/Normal.Normal", LoadPriority::Normal);
    submit("/Game/High.High", LoadPriority::High);
    gate_tx.send(()).unwrap();

    for _ in 0..3 {
        done_rx.recv_timeout(TIMEOUT).expect("all requests should complete");
    }
    assert_eq!(
        *order.lock().unwrap(),
        vec!["/Game/Gate.Gate", "/Game/High.High", "/Game/Normal.Normal"]
    );
}

#[test]
fn dropping_the_loader_finishes_pending_requests() {
    let store = Arc::new(ObjectStore::<AudioEvent>::new());
    let loader = ThreadedStreamableLoader::new(store.clone(), audio_factory).unwrap();

    let completed = Arc::new(Mutex::new(0));
    for i in 0..4 {
        let completed = completed.clone();
        let path = format!("/Game/E{i}.E{i}");
        loader
            .request_async_load(
                paths(&[path.as_str()]),
                LoadPriority::Normal,
                Box::new(move || *completed.lock().unwrap() += 1),
            )
            .unwrap();
    }
    drop(loader);

    assert_eq!(*completed.lock().unwrap(), 4);
    assert_eq!(store.len(), 4);
}

#[test]
fn panicking_callback_does_not_stop_the_worker() {
    let store = Arc::new(ObjectStore::<AudioEvent>::new());
    let loader = ThreadedStreamableLoader::new(store, audio_factory).unwrap();

    loader
        .request_async_load(
            paths(&["/Game/A.A"]),
            LoadPriority::High,
            Box::new(|| panic!("callback failure")),
        )
        .unwrap();

    let (done_tx, done_rx) = bounded(1);
    loader
        .request_async_load(
            paths(&["/Game/B.B"]),
            LoadPriority::High,
            Box::new(move || done_tx.send(()).unwrap()),
        )
        .unwrap();
    assert!(done_rx.recv_timeout(TIMEOUT).is_ok());
}
