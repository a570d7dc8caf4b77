use hangar_core::CancelToken;
use hangar_evaluators::{ProjectEvaluator, UnityEvaluator};
use hangar_index::Database;
use hangar_runtime::{now_timestamp, sync_directory, SyncReport};
use hangar_testing::{write_unity_project, StaticEvaluator, StaticProject};
use hangar_types::Config;
use std::fs;

const TAG_A: &str = "hangar_testing::StaticEvaluator";
const TAG_B: &str = "hangar_testing::OtherEvaluator";

fn boxed(evaluator: StaticEvaluator) -> Box<dyn ProjectEvaluator> {
    Box::new(evaluator)
}

fn registered(db: &Database, path: &str) {
    db.upsert_directory(path, &now_timestamp()).unwrap();
}

fn run(
    db: &mut Database,
    dir: &str,
    evaluators: &[Box<dyn ProjectEvaluator>],
) -> SyncReport {
    sync_directory(
        db,
        dir,
        &Config::default(),
        evaluators,
        &CancelToken::new(),
        |_| {},
    )
    .unwrap()
}

#[test]
fn initial_pass_creates_all_discovered_projects() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");
    let evaluators = vec![boxed(StaticEvaluator::new(
        TAG_A,
        vec![
            StaticProject::new("p0", "v1"),
            StaticProject::new("p1", "v1"),
        ],
    ))];

    let report = run(&mut db, "/work", &evaluators);
    assert_eq!(report.created, 2);
    assert_eq!(report.removed, 0);
    assert!(report.is_clean());

    let projects = db.list_projects_in("/work").unwrap();
    assert_eq!(projects.len(), 2);
    for project in &projects {
        assert_eq!(project.framework, "v1");
        assert_eq!(project.evaluator_tag, TAG_A);
        assert_eq!(project.record_updated_at, report.pass_epoch);
    }
}

#[test]
fn rescan_without_changes_is_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");
    let evaluators = vec![boxed(StaticEvaluator::new(
        TAG_A,
        vec![StaticProject::new("p0", "v1")],
    ))];

    run(&mut db, "/work", &evaluators);
    let second = run(&mut db, "/work", &evaluators);

    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 1);
    assert_eq!(second.removed, 0);
    assert_eq!(db.list_projects_in("/work").unwrap().len(), 1);
}

#[test]
fn rescan_updates_framework_in_place() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");

    run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![StaticProject::new("p0", "v0")],
        ))],
    );
    db.set_nickname("/work/p0", Some("keeper"), &now_timestamp())
        .unwrap();

    run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![StaticProject::new("p0", "v2")],
        ))],
    );

    let record = db.find_project("/work/p0").unwrap().unwrap();
    assert_eq!(record.framework, "v2");
    assert_eq!(record.nickname.as_deref(), Some("keeper"));
    assert_eq!(db.list_projects_in("/work").unwrap().len(), 1);
}

#[test]
fn rescan_deletes_projects_no_evaluator_claims() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");

    run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![
                StaticProject::new("p0", "v1"),
                StaticProject::new("p1", "v1"),
            ],
        ))],
    );

    let report = run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![StaticProject::new("p0", "v1")],
        ))],
    );

    assert_eq!(report.removed, 1);
    assert!(db.find_project("/work/p0").unwrap().is_some());
    assert!(db.find_project("/work/p1").unwrap().is_none());
}

#[test]
fn last_evaluator_wins_contested_paths() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");
    let evaluators = vec![
        boxed(StaticEvaluator::new(
            TAG_A,
            vec![StaticProject::new("p0", "a-framework")],
        )),
        boxed(StaticEvaluator::new(
            TAG_B,
            vec![StaticProject::new("p0", "b-framework")],
        )),
    ];

    run(&mut db, "/work", &evaluators);

    let record = db.find_project("/work/p0").unwrap().unwrap();
    assert_eq!(record.evaluator_tag, TAG_B);
    assert_eq!(record.framework, "b-framework");
    assert_eq!(db.list_projects_in("/work").unwrap().len(), 1);
}

#[test]
fn failed_evaluator_does_not_abort_the_pass() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");

    // First pass: the evaluator knows p0 and p1.
    run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![
                StaticProject::new("p0", "v1"),
                StaticProject::new("p1", "v1"),
            ],
        ))],
    );

    // Second pass: it yields p0 then blows up, while a second evaluator
    // still contributes.
    let report = run(
        &mut db,
        "/work",
        &[
            boxed(
                StaticEvaluator::new(
                    TAG_A,
                    vec![
                        StaticProject::new("p0", "v1"),
                        StaticProject::new("p1", "v1"),
                    ],
                )
                .failing_after(1),
            ),
            boxed(StaticEvaluator::new(
                TAG_B,
                vec![StaticProject::new("q0", "v1")],
            )),
        ],
    );

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].tag, TAG_A);

    // Partial findings committed; the sweep still ran, so p1 (not
    // re-touched by the failed evaluator) is gone. Documented sharp edge.
    assert!(db.find_project("/work/p0").unwrap().is_some());
    assert!(db.find_project("/work/q0").unwrap().is_some());
    assert!(db.find_project("/work/p1").unwrap().is_none());
}

#[test]
fn cancelled_pass_leaves_the_store_untouched() {
    let mut db = Database::open_in_memory().unwrap();
    registered(&db, "/work");

    run(
        &mut db,
        "/work",
        &[boxed(StaticEvaluator::new(
            TAG_A,
            vec![StaticProject::new("p0", "v1")],
        ))],
    );

    let cancel = CancelToken::new();
    cancel.cancel();
    let result = sync_directory(
        &mut db,
        "/work",
        &Config::default(),
        &[boxed(StaticEvaluator::new(TAG_A, vec![]))],
        &cancel,
        |_| {},
    );
    assert!(result.is_err());

    // Nothing was committed and nothing swept.
    assert!(db.find_project("/work/p0").unwrap().is_some());
}

#[test]
fn unity_projects_on_disk_converge_across_rescans() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let p0 = write_unity_project(root, "p0", "2022.3.10f1", "aaaa").unwrap();
    let p1 = write_unity_project(root, "p1", "2022.3.10f1", "bbbb").unwrap();

    let mut db = Database::open_in_memory().unwrap();
    let root_key = root.to_string_lossy().into_owned();
    registered(&db, &root_key);
    let evaluators: Vec<Box<dyn ProjectEvaluator>> = vec![Box::new(UnityEvaluator)];

    let report = run(&mut db, &root_key, &evaluators);
    assert_eq!(report.created, 2);
    let frameworks: Vec<String> = db
        .list_projects_in(&root_key)
        .unwrap()
        .into_iter()
        .map(|p| p.framework)
        .collect();
    assert!(frameworks.contains(&"2022.3.10f1/aaaa".to_string()));
    assert!(frameworks.contains(&"2022.3.10f1/bbbb".to_string()));

    // Remove p1 from disk; the rescan drops it and keeps p0.
    fs::remove_dir_all(&p1).unwrap();
    let report = run(&mut db, &root_key, &evaluators);
    assert_eq!(report.removed, 1);

    let remaining = db.list_projects_in(&root_key).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].full_path,
        hangar_core::normalize_path(&p0).to_string_lossy()
    );
}
