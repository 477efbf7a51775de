use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use course_builder::actor::{BuilderActor, BuilderError, ChangeObserver, StoreChange};
use course_builder::engine::{MoveIntent, MoveOutcome, NoOpReason};
use course_builder::lifecycle::{BuilderConfig, CourseSystem};
use course_builder::model::{ModuleCreate, ModuleId, ResourceCreate, ResourceUpdate};
use course_builder::store::{CourseStore, DeletePolicy, ReferenceError, ValidationError};

/// Records every change together with the store size it observed.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(StoreChange, usize)>>,
}

impl Recorder {
    fn changes(&self) -> Vec<StoreChange> {
        self.seen.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }
}

#[async_trait]
impl ChangeObserver for Recorder {
    async fn on_change(&self, change: &StoreChange, store: &CourseStore) {
        self.seen
            .lock()
            .unwrap()
            .push((change.clone(), store.resources().len()));
    }
}

/// End-to-end pass through the running actor: build a course, rearrange it, search it.
#[tokio::test]
async fn test_course_system_integration() {
    let system = CourseSystem::new();
    let client = &system.client;

    // Empty state
    assert!(client.snapshot().await.expect("snapshot").is_empty());

    // Two modules with resources, plus an unassigned one
    let intro = client
        .create_module(ModuleCreate::new("Intro"))
        .await
        .expect("Failed to create module");
    let lab = client
        .create_module(ModuleCreate::new("Lab"))
        .await
        .expect("Failed to create module");
    let syllabus = client
        .create_resource(ResourceCreate::link("Syllabus", "https://example.com/s", Some(intro.id)))
        .await
        .expect("Failed to create resource");
    let guide = client
        .create_resource(ResourceCreate::link("Intro guide", "https://example.com/g", Some(lab.id)))
        .await
        .expect("Failed to create resource");
    let loose = client
        .create_resource(ResourceCreate::link("Reading list", "https://example.com/r", None))
        .await
        .expect("Failed to create resource");

    // Reorder modules
    assert_eq!(
        client.reorder_modules(1, 0).await.expect("reorder"),
        MoveOutcome::Reordered
    );
    let snapshot = client.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.module_position(lab.id), Some(0));

    // Drag the loose resource onto the syllabus: it joins Intro
    let outcome = client.move_resource(loose.id, syllabus.id).await.expect("move");
    assert_eq!(
        outcome,
        MoveOutcome::Reassigned {
            resource: loose.id,
            from: None,
            to: Some(intro.id),
        }
    );

    // Drop the guide into the unassigned pool
    client.drop_resource(guide.id, None).await.expect("drop");
    let moved = client.resource(guide.id).await.expect("get").expect("exists");
    assert!(moved.is_unassigned());

    // Search is remembered by view()
    let display = client.search("INTRO").await.expect("search");
    assert_eq!(display.query, "intro");
    let view = client.view().await.expect("view");
    assert_eq!(view, display);
    assert_eq!(view.module(intro.id).expect("intro visible").resources.len(), 2);
    assert!(view.module(lab.id).is_none());
    assert_eq!(view.unassigned.len(), 1);

    let outline = client.outline(Some(intro.id)).await.expect("outline");
    assert_eq!(outline.len(), 1);
    assert!(outline[0].active);

    // Clearing the query restores everything
    let all = client.search("").await.expect("search");
    assert_eq!(all.modules.len(), 2);

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_crud_errors_pass_through_unchanged() {
    let system = CourseSystem::new();

    let err = system
        .client
        .create_module(ModuleCreate::new("  "))
        .await
        .unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::EmptyModuleName));

    let err = system
        .client
        .create_resource(ResourceCreate::link("Docs", "https://x.example", Some(ModuleId(99))))
        .await
        .unwrap_err();
    assert_eq!(err.reference(), Some(&ReferenceError::ModuleNotFound(ModuleId(99))));

    let err = system
        .client
        .rename_module(ModuleId(5), "Renamed".into())
        .await
        .unwrap_err();
    assert_eq!(err.reference(), Some(&ReferenceError::ModuleNotFound(ModuleId(5))));

    assert!(system.client.snapshot().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_delete_policy_applies_unless_overridden() {
    let config = BuilderConfig {
        delete_policy: DeletePolicy::Unassign,
        ..BuilderConfig::default()
    };
    let system = CourseSystem::start(&config, Vec::new());
    let client = &system.client;

    let m1 = client.create_module(ModuleCreate::new("M1")).await.unwrap();
    let m2 = client.create_module(ModuleCreate::new("M2")).await.unwrap();
    let a = client
        .create_resource(ResourceCreate::link("Alpha", "https://a.example", Some(m1.id)))
        .await
        .unwrap();
    let b = client
        .create_resource(ResourceCreate::link("Beta", "https://b.example", Some(m2.id)))
        .await
        .unwrap();

    let removal = client.delete_module(m1.id).await.unwrap();
    assert_eq!(removal.unassigned, [a.id]);
    assert!(client.resource(a.id).await.unwrap().unwrap().is_unassigned());

    let removal = client
        .delete_module_with(m2.id, DeletePolicy::Cascade)
        .await
        .unwrap();
    assert_eq!(removal.removed.len(), 1);
    assert_eq!(client.resource(b.id).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_observers_see_applied_changes_only() {
    let recorder = Arc::new(Recorder::default());
    let observers: Vec<Arc<dyn ChangeObserver>> = vec![recorder.clone()];
    let system = CourseSystem::start(&BuilderConfig::default(), observers);
    let client = &system.client;

    let m = client.create_module(ModuleCreate::new("M")).await.unwrap();
    let _ = client.create_module(ModuleCreate::new("")).await;
    let a = client
        .create_resource(ResourceCreate::link("Alpha", "https://a.example", Some(m.id)))
        .await
        .unwrap();
    client
        .update_resource(
            a.id,
            ResourceUpdate {
                title: Some("Alpha 2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    // no-op: already there
    client.drop_resource(a.id, Some(m.id)).await.unwrap();
    client.drop_resource(a.id, None).await.unwrap();
    client.delete_resource(a.id).await.unwrap();
    client.delete_module(m.id).await.unwrap();
    // reads never notify
    client.snapshot().await.unwrap();

    let changes = recorder.changes();
    assert_eq!(changes.len(), 6, "{changes:#?}");
    assert!(matches!(changes[0], StoreChange::ModuleCreated(_)));
    assert!(matches!(changes[1], StoreChange::ResourceCreated(_)));
    assert!(matches!(&changes[2], StoreChange::ResourceUpdated(r) if r.title == "Alpha 2"));
    assert_eq!(
        changes[3],
        StoreChange::Moved {
            intent: MoveIntent::DropResource {
                resource: a.id,
                target: None
            },
            outcome: MoveOutcome::Reassigned {
                resource: a.id,
                from: Some(m.id),
                to: None
            },
        }
    );
    assert_eq!(changes[4], StoreChange::ResourceDeleted(a.id));
    assert!(matches!(changes[5], StoreChange::ModuleDeleted { module_id, .. } if module_id == m.id));

    // Observers run after the mutation, so they see the settled store.
    let sizes: Vec<usize> = recorder.seen.lock().unwrap().iter().map(|(_, n)| *n).collect();
    assert_eq!(sizes, [0, 1, 1, 1, 0, 0]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hover_sweep_is_applied_against_current_state() {
    let (actor, client) = BuilderActor::new(4);
    let handle = tokio::spawn(actor.run(Vec::new()));

    for name in ["A", "B", "C", "D"] {
        client.create_module(ModuleCreate::new(name)).await.unwrap();
    }

    // Dragging A from the top to the bottom, one hover per slot
    for i in 0..3 {
        assert_eq!(client.reorder_modules(i, i + 1).await.unwrap(), MoveOutcome::Reordered);
    }
    assert_eq!(module_names(&client).await, ["B", "C", "D", "A"]);

    // A hover that started before a module vanished
    assert_eq!(
        client.reorder_modules(9, 0).await.unwrap(),
        MoveOutcome::Unchanged(NoOpReason::IndexOutOfRange { index: 9, len: 4 })
    );

    // Concurrent bursts interleave in some order but never lose a module
    let burst: Vec<_> = (0..16)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.reorder_modules(i % 4, (i * 3) % 4).await })
        })
        .collect();
    for task in burst {
        task.await.unwrap().unwrap();
    }
    let mut names = module_names(&client).await;
    names.sort();
    assert_eq!(names, ["A", "B", "C", "D"]);

    client.shutdown().await.unwrap();
    handle.await.unwrap();
}

async fn module_names(client: &course_builder::actor::BuilderClient) -> Vec<String> {
    client
        .snapshot()
        .await
        .unwrap()
        .modules
        .into_iter()
        .map(|m| m.name)
        .collect()
}

#[tokio::test]
async fn test_clients_fail_after_shutdown() {
    let system = CourseSystem::new();
    let straggler = system.client.clone();

    system.shutdown().await.expect("Failed to shut down");

    assert_eq!(
        straggler.create_module(ModuleCreate::new("Late")).await,
        Err(BuilderError::ActorClosed)
    );
}

#[tokio::test]
async fn test_actor_can_start_from_existing_store() {
    let mut store = CourseStore::new();
    let m = store.create_module(ModuleCreate::new("Seeded")).unwrap();

    let (actor, client) = BuilderActor::with_store(8, store);
    let handle = tokio::spawn(actor.run(Vec::new()));

    assert_eq!(client.module(m.id).await.unwrap(), Some(m));
    let next = client.create_module(ModuleCreate::new("Second")).await.unwrap();
    assert_eq!(next.id, ModuleId(2));

    drop(client);
    handle.await.unwrap();
}
