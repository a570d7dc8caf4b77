mod common;

use common::TestFixture;
use hangar_testing::write_unity_project;
use predicates::prelude::*;

#[test]
fn launching_an_unknown_project_exits_one() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["project", "launch", "/no/such/project"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn launch_failure_prints_remediations_and_exits_two() {
    let fixture = TestFixture::new();
    fixture.isolate_tool_discovery();
    let project = write_unity_project(fixture.work_dir(), "game", "2022.3.10f1", "ff3792e53c62")
        .unwrap();
    fixture.add_work_dir();

    fixture
        .command()
        .args(["project", "launch", project.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("## Editor Not Installed ##"))
        .stdout(predicate::str::contains("## Options ##"))
        .stdout(predicate::str::contains("-- Install Unity 2022.3.10f1"))
        .stdout(predicate::str::contains("-- Get Unity Hub"));
}

#[test]
fn interactive_launch_quits_cleanly_on_zero() {
    let fixture = TestFixture::new();
    fixture.isolate_tool_discovery();
    let project = write_unity_project(fixture.work_dir(), "game", "2022.3.10f1", "ff3792e53c62")
        .unwrap();
    fixture.add_work_dir();

    fixture
        .command()
        .args([
            "project",
            "launch",
            project.to_str().unwrap(),
            "--interactive",
        ])
        .write_stdin("0\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("0: Quit"))
        .stdout(predicate::str::contains("1: Install Unity 2022.3.10f1"));
}

#[test]
fn nicknamed_projects_launch_by_nickname() {
    let fixture = TestFixture::new();
    fixture.isolate_tool_discovery();
    let project = write_unity_project(fixture.work_dir(), "game", "2022.3.10f1", "ff3792e53c62")
        .unwrap();
    fixture.add_work_dir();

    fixture
        .command()
        .args(["project", "nick", project.to_str().unwrap(), "myGame"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nickname \"myGame\" set"));

    fixture
        .command()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("myGame - "));

    // Resolving by nickname reaches the load stage (exit 2: no editor),
    // not the not-found path (exit 1).
    fixture
        .command()
        .args(["project", "launch", "myGame"])
        .assert()
        .code(2);

    fixture
        .command()
        .args(["project", "unnick", project.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nickname cleared"));

    fixture
        .command()
        .args(["project", "launch", "myGame"])
        .assert()
        .code(1);
}

#[test]
fn recent_list_is_empty_until_something_launches() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("r")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
