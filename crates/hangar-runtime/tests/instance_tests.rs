use hangar_core::CancelToken;
use hangar_evaluators::ProjectEvaluator;
use hangar_index::Database;
use hangar_runtime::Instance;
use hangar_testing::{LoaderScript, StaticEvaluator, StaticProject};
use hangar_types::{Config, LoadResult, ProjectHandle};

const TAG: &str = "hangar_testing::StaticEvaluator";

fn instance_with(projects: Vec<StaticProject>) -> Instance {
    let evaluators: Vec<Box<dyn ProjectEvaluator>> =
        vec![Box::new(StaticEvaluator::new(TAG, projects))];
    Instance::new(
        Database::open_in_memory().unwrap(),
        Config::default(),
        evaluators,
    )
}

fn scanned_instance() -> Instance {
    let instance = instance_with(vec![
        StaticProject::new("p0", "v1"),
        StaticProject::new("p1", "v1"),
    ]);
    instance.add_directory("/work").unwrap();
    instance
        .sync_directory("/work", &CancelToken::new(), |_| {})
        .unwrap();
    instance
}

#[test]
fn nickname_lookup_wins_over_path_lookup() {
    let instance = scanned_instance();
    instance.set_nickname("/work/p0", Some("myNick")).unwrap();

    let found = instance.find_project("myNick").unwrap().unwrap();
    assert_eq!(found.full_path, "/work/p0");
    assert_eq!(found.nickname.as_deref(), Some("myNick"));
}

#[test]
fn full_path_and_shorthand_both_resolve() {
    let instance = scanned_instance();

    let by_path = instance.find_project("/work/p1").unwrap().unwrap();
    assert_eq!(by_path.full_path, "/work/p1");

    // "<directory-basename>/<subpath>" shorthand.
    let by_shorthand = instance.find_project("work/p1").unwrap().unwrap();
    assert_eq!(by_shorthand.full_path, "/work/p1");

    assert!(instance.find_project("nope").unwrap().is_none());
}

#[test]
fn removing_a_directory_drops_its_projects() {
    let instance = scanned_instance();
    assert_eq!(instance.projects().unwrap().len(), 2);

    assert!(instance.remove_directory("/work").unwrap());
    assert!(instance.projects().unwrap().is_empty());
    assert!(!instance.remove_directory("/work").unwrap());
}

#[test]
fn load_dispatches_to_the_recorded_evaluator() {
    let instance = scanned_instance();
    let project = instance.find_project("/work/p0").unwrap().unwrap();

    let result = instance.load(&project).unwrap();
    assert!(result.is_launched());
}

#[test]
fn load_with_unregistered_evaluator_is_a_structured_failure() {
    let instance = scanned_instance();
    let orphan = ProjectHandle {
        full_path: "/work/p0".to_string(),
        evaluator_tag: "hangar_evaluators::RetiredEvaluator".to_string(),
        framework: "v1".to_string(),
        nickname: None,
    };

    let LoadResult::Failed(fail) = instance.load(&orphan).unwrap() else {
        panic!("expected a structured failure");
    };
    assert_eq!(fail.title, "Indecipherable Project");
    assert!(fail.remediations.is_empty());
}

#[test]
fn malformed_evaluator_tag_is_a_format_error() {
    let instance = scanned_instance();
    let mangled = ProjectHandle {
        full_path: "/work/p0".to_string(),
        evaluator_tag: "no-separator".to_string(),
        framework: "v1".to_string(),
        nickname: None,
    };

    assert!(instance.evaluator_for("no-separator").is_err());
    assert!(instance.load(&mangled).is_err());
}

#[test]
fn display_helpers_never_fail() {
    let instance = scanned_instance();
    let known = instance.find_project("/work/p0").unwrap().unwrap();
    assert_eq!(instance.platform_name(&known), "Static");
    assert_eq!(instance.display_framework(&known), "static v1");

    let orphan = ProjectHandle {
        full_path: "/x".to_string(),
        evaluator_tag: "gone::Evaluator".to_string(),
        framework: "raw-tag".to_string(),
        nickname: None,
    };
    assert_eq!(instance.platform_name(&orphan), "unknown");
    assert_eq!(instance.display_framework(&orphan), "raw-tag");

    let mangled = ProjectHandle {
        evaluator_tag: "mangled".to_string(),
        ..orphan
    };
    assert_eq!(instance.platform_name(&mangled), "unknown");
    assert_eq!(instance.display_framework(&mangled), "raw-tag");
}

#[test]
fn launching_feeds_the_recents_list() {
    let instance = scanned_instance();
    let project = instance.find_project("/work/p0").unwrap().unwrap();

    assert!(instance.load(&project).unwrap().is_launched());
    instance.push_recent(&project).unwrap();

    let recents = instance.recents().unwrap();
    assert_eq!(recents.len(), 1);
    assert_eq!(recents[0].full_path, "/work/p0");
}

#[test]
fn scripted_load_failures_surface_their_title() {
    let evaluators: Vec<Box<dyn ProjectEvaluator>> = vec![Box::new(
        StaticEvaluator::new(TAG, vec![StaticProject::new("p0", "v1")]).with_loader_script(
            LoaderScript::Fail {
                title: "Missing Tool".to_string(),
            },
        ),
    )];
    let instance = Instance::new(
        Database::open_in_memory().unwrap(),
        Config::default(),
        evaluators,
    );
    instance.add_directory("/work").unwrap();
    instance
        .sync_directory("/work", &CancelToken::new(), |_| {})
        .unwrap();

    let project = instance.find_project("/work/p0").unwrap().unwrap();
    let LoadResult::Failed(fail) = instance.load(&project).unwrap() else {
        panic!("expected failure");
    };
    assert_eq!(fail.title, "Missing Tool");
}
