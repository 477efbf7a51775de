use course_builder::model::{
    ContentHandle, FileUpload, MediaType, ModuleCreate, ModuleId, ModuleUpdate, PayloadCreate,
    ResourceCreate, ResourceId, ResourceKind, ResourceUpdate,
};
use course_builder::store::{
    CourseStore, DeletePolicy, ReferenceError, StoreError, ValidationError,
};

fn link(title: &str, module_id: Option<ModuleId>) -> ResourceCreate {
    ResourceCreate::link(title, "https://example.com/page", module_id)
}

fn pdf(name: &str) -> FileUpload {
    FileUpload::new(name, 2048, MediaType::Pdf, ContentHandle(format!("blob/{name}")))
}

fn titles(store: &CourseStore) -> Vec<&str> {
    store.resources().iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_create_module_appends_and_trims_name() {
    let mut store = CourseStore::new();
    let a = store.create_module(ModuleCreate::new("  Week 1 ")).unwrap();
    let b = store.create_module(ModuleCreate::new("Week 2")).unwrap();

    assert_eq!(a.name, "Week 1");
    assert_ne!(a.id, b.id);
    assert_eq!(store.modules().iter().map(|m| m.id).collect::<Vec<_>>(), [a.id, b.id]);
}

#[test]
fn test_create_module_rejects_blank_name() {
    let mut store = CourseStore::new();
    let err = store.create_module(ModuleCreate::new("   ")).unwrap_err();
    assert_eq!(err, StoreError::Validation(ValidationError::EmptyModuleName));
    assert!(store.modules().is_empty());
}

#[test]
fn test_create_resource_validates_title_bounds() {
    let mut store = CourseStore::new();

    assert_eq!(
        store.create_resource(link("", None)).unwrap_err(),
        ValidationError::MissingTitle.into()
    );
    assert_eq!(
        store.create_resource(link(" x ", None)).unwrap_err(),
        ValidationError::TitleTooShort { len: 1 }.into()
    );
    let long = "a".repeat(101);
    assert_eq!(
        store.create_resource(link(&long, None)).unwrap_err(),
        ValidationError::TitleTooLong { len: 101 }.into()
    );

    let max = "b".repeat(100);
    assert!(store.create_resource(link(&max, None)).is_ok());
    assert!(store.create_resource(link("ok", None)).is_ok());
    assert_eq!(store.resources().len(), 2);
}

#[test]
fn test_create_resource_rejects_relative_or_malformed_url() {
    let mut store = CourseStore::new();
    for url in ["/relative/path", "not a url", "example.com"] {
        let err = store
            .create_resource(ResourceCreate::link("Docs", url, None))
            .unwrap_err();
        assert!(
            matches!(err, StoreError::Validation(ValidationError::InvalidUrl { .. })),
            "{url} should be rejected, got {err:?}"
        );
    }
    assert!(store.resources().is_empty());
}

#[test]
fn test_create_file_requires_a_file() {
    let mut store = CourseStore::new();
    let params = ResourceCreate {
        title: "Slides".into(),
        module_id: None,
        payload: PayloadCreate::File(None),
    };
    assert_eq!(
        store.create_resource(params).unwrap_err(),
        ValidationError::MissingFile.into()
    );
}

#[test]
fn test_media_type_parses_mime_and_short_names() {
    assert_eq!("application/pdf".parse::<MediaType>().unwrap(), MediaType::Pdf);
    assert_eq!("image/jpeg".parse::<MediaType>().unwrap(), MediaType::Jpeg);
    assert_eq!("PNG".parse::<MediaType>().unwrap(), MediaType::Png);
    assert_eq!(
        "image/gif".parse::<MediaType>().unwrap_err(),
        ValidationError::UnsupportedMediaType("image/gif".into())
    );
}

#[test]
fn test_create_resource_with_unknown_module_is_a_reference_error() {
    let mut store = CourseStore::new();
    let err = store.create_resource(link("Orphan", Some(ModuleId(42)))).unwrap_err();
    assert_eq!(err, ReferenceError::ModuleNotFound(ModuleId(42)).into());
    assert!(store.resources().is_empty());
}

#[test]
fn test_failed_create_does_not_consume_an_id() {
    let mut store = CourseStore::new();
    let _ = store.create_resource(link("", None));
    let first = store.create_resource(link("First", None)).unwrap();
    assert_eq!(first.id, ResourceId(1));
}

#[test]
fn test_update_preserves_identity_and_position() {
    let mut store = CourseStore::new();
    let m1 = store.create_module(ModuleCreate::new("One")).unwrap();
    let m2 = store.create_module(ModuleCreate::new("Two")).unwrap();
    let a = store.create_resource(link("Alpha", Some(m1.id))).unwrap();
    store.create_resource(link("Beta", Some(m1.id))).unwrap();

    let renamed = store
        .update_module(m1.id, ModuleUpdate { name: "Uno".into() })
        .unwrap();
    assert_eq!(renamed.id, m1.id);
    assert_eq!(store.modules()[0].name, "Uno");
    assert_eq!(store.modules()[1].id, m2.id);

    let edited = store
        .update_resource(
            a.id,
            ResourceUpdate {
                title: Some("Alpha v2".into()),
                url: Some("https://example.com/v2".into()),
                file: None,
            },
        )
        .unwrap();
    assert_eq!(edited.id, a.id);
    assert_eq!(edited.url().unwrap().as_str(), "https://example.com/v2");
    assert_eq!(titles(&store), ["Alpha v2", "Beta"]);
}

#[test]
fn test_rejected_update_leaves_resource_untouched() {
    let mut store = CourseStore::new();
    let a = store.create_resource(link("Alpha", None)).unwrap();

    // valid title, invalid url: nothing may be applied
    let err = store
        .update_resource(
            a.id,
            ResourceUpdate {
                title: Some("Renamed".into()),
                url: Some("::".into()),
                file: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::InvalidUrl { .. })));
    assert_eq!(store.resource(a.id).unwrap(), &a);
}

#[test]
fn test_update_rejects_payload_of_the_other_kind() {
    let mut store = CourseStore::new();
    let a = store.create_resource(link("Alpha", None)).unwrap();
    let err = store
        .update_resource(
            a.id,
            ResourceUpdate {
                file: Some(pdf("x.pdf")),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::KindMismatch {
            kind: ResourceKind::Link,
            field: "file"
        }
        .into()
    );
}

#[test]
fn test_editing_a_file_without_new_upload_keeps_the_binary() {
    let mut store = CourseStore::new();
    let f = store
        .create_resource(ResourceCreate::file("Slides", pdf("week1.pdf"), None))
        .unwrap();

    let edited = store
        .update_resource(
            f.id,
            ResourceUpdate {
                title: Some("Week 1 slides".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(edited.title, "Week 1 slides");
    assert_eq!(edited.file(), f.file());

    let replaced = store
        .update_resource(
            f.id,
            ResourceUpdate {
                file: Some(pdf("week1-final.pdf")),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(replaced.file().unwrap().file_name, "week1-final.pdf");
}

#[test]
fn test_update_unknown_ids_are_reference_errors() {
    let mut store = CourseStore::new();
    assert_eq!(
        store
            .update_module(ModuleId(9), ModuleUpdate { name: "x".into() })
            .unwrap_err(),
        ReferenceError::ModuleNotFound(ModuleId(9)).into()
    );
    assert_eq!(
        store
            .update_resource(ResourceId(9), ResourceUpdate::default())
            .unwrap_err(),
        ReferenceError::ResourceNotFound(ResourceId(9)).into()
    );
}

#[test]
fn test_delete_module_cascades_to_its_resources_only() {
    let mut store = CourseStore::new();
    let m1 = store.create_module(ModuleCreate::new("M1")).unwrap();
    let m2 = store.create_module(ModuleCreate::new("M2")).unwrap();
    let x = store.create_resource(link("X", Some(m1.id))).unwrap();
    store.create_resource(link("Kept", Some(m2.id))).unwrap();
    let y = store.create_resource(link("Y", Some(m1.id))).unwrap();
    store.create_resource(link("Loose", None)).unwrap();

    let removal = store.delete_module(m1.id).unwrap();

    assert_eq!(removal.module.id, m1.id);
    assert_eq!(removal.removed.iter().map(|r| r.id).collect::<Vec<_>>(), [x.id, y.id]);
    assert!(removal.unassigned.is_empty());
    assert_eq!(store.modules().iter().map(|m| m.id).collect::<Vec<_>>(), [m2.id]);
    assert_eq!(titles(&store), ["Kept", "Loose"]);
}

#[test]
fn test_delete_module_with_unassign_policy_keeps_resources_in_order() {
    let mut store = CourseStore::new();
    let m1 = store.create_module(ModuleCreate::new("M1")).unwrap();
    store.create_resource(link("Loose", None)).unwrap();
    let x = store.create_resource(link("X", Some(m1.id))).unwrap();
    let y = store.create_resource(link("Y", Some(m1.id))).unwrap();

    let removal = store.delete_module_with(m1.id, DeletePolicy::Unassign).unwrap();

    assert_eq!(removal.unassigned, [x.id, y.id]);
    assert!(removal.removed.is_empty());
    assert!(store.resources().iter().all(|r| r.module_id.is_none()));
    assert_eq!(titles(&store), ["Loose", "X", "Y"]);
}

#[test]
fn test_delete_resource_and_unknown_ids() {
    let mut store = CourseStore::new();
    let a = store.create_resource(link("Alpha", None)).unwrap();
    store.create_resource(link("Beta", None)).unwrap();

    assert_eq!(store.delete_resource(a.id).unwrap().id, a.id);
    assert_eq!(titles(&store), ["Beta"]);
    assert_eq!(
        store.delete_resource(a.id).unwrap_err(),
        ReferenceError::ResourceNotFound(a.id).into()
    );
    assert_eq!(
        store.delete_module(ModuleId(3)).unwrap_err(),
        ReferenceError::ModuleNotFound(ModuleId(3)).into()
    );
}

#[test]
fn test_snapshot_reports_empty_state_and_containers() {
    let mut store = CourseStore::new();
    assert!(store.snapshot().is_empty());

    let m = store.create_module(ModuleCreate::new("M")).unwrap();
    store.create_resource(link("In", Some(m.id))).unwrap();
    store.create_resource(link("Out", None)).unwrap();

    let snapshot = store.snapshot();
    assert!(!snapshot.is_empty());
    assert_eq!(snapshot.container(Some(m.id))[0].title, "In");
    assert_eq!(snapshot.container(None)[0].title, "Out");
    assert_eq!(snapshot.module_position(m.id), Some(0));
}

#[test]
fn test_file_size_is_rounded_to_nearest_kb() {
    let mut upload = pdf("a.pdf");
    upload.file_size_bytes = 1535;
    assert_eq!(upload.size_kb(), 1);
    upload.file_size_bytes = 1536;
    assert_eq!(upload.size_kb(), 2);
    upload.file_size_bytes = 0;
    assert_eq!(upload.size_kb(), 0);
    upload.file_size_bytes = u64::MAX;
    assert_eq!(upload.size_kb(), u64::MAX / 1024);
}
