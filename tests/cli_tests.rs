use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn lookup_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("hubfind").unwrap();
    cmd.arg("--api-base")
        .arg(server.base_url())
        .arg("--chart-base")
        .arg(server.base_url())
        .timeout(std::time::Duration::from_secs(30));
    cmd
}

fn mock_octocat(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/users/octocat");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "login": "octocat",
                "name": "The Octocat",
                "avatar_url": "https://avatars.example/octocat.png",
                "html_url": "https://github.com/octocat",
                "public_repos": 8,
                "public_gists": 0,
                "followers": 3938,
                "following": 9,
                "company": null,
                "email": null,
                "blog": "https://github.blog",
                "location": "San Francisco",
                "created_at": "2011-01-25T18:44:36Z"
            }));
    });
}

#[test]
fn cli_help_shows_about() {
    let mut cmd = Command::cargo_bin("hubfind").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("GitHub profile lookup"));
}

#[test]
fn cli_version_shows_name() {
    let mut cmd = Command::cargo_bin("hubfind").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("hubfind"));
}

#[test]
fn one_shot_lookup_renders_all_panels() {
    let server = MockServer::start();
    mock_octocat(&server);
    server.mock(|when, then| {
        when.method(GET)
            .path("/users/octocat/repos")
            .query_param("sort", "updated");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {
                    "name": "hello-world",
                    "html_url": "https://github.com/octocat/hello-world",
                    "description": null,
                    "stargazers_count": 42,
                    "watchers_count": 42,
                    "forks_count": 7
                }
            ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/octocat");
        then.status(200)
            .header("Content-Type", "image/svg+xml")
            .body("<svg></svg>");
    });

    let mut cmd = lookup_cmd(&server);
    cmd.arg("octocat");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("The Octocat"))
        .stdout(predicates::str::contains("Public Repos: 8"))
        .stdout(predicates::str::contains("Company: Can't Find"))
        .stdout(predicates::str::contains("Latest Repos"))
        .stdout(predicates::str::contains("hello-world"))
        .stdout(predicates::str::contains("No Description"))
        .stdout(predicates::str::contains("Stars: 42"))
        .stdout(predicates::str::contains("Contribution Graph"));
}

#[test]
fn one_shot_unknown_user_exits_nonzero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/nobody");
        then.status(404);
    });

    let mut cmd = lookup_cmd(&server);
    cmd.arg("nobody");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Username not found!"));
}

#[test]
fn one_shot_without_repos_shows_empty_message() {
    let server = MockServer::start();
    mock_octocat(&server);
    server.mock(|when, then| {
        when.method(GET).path("/users/octocat/repos");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/octocat");
        then.status(500);
    });

    let mut cmd = lookup_cmd(&server);
    cmd.arg("octocat");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Latest Repos"))
        .stdout(predicates::str::contains("No recent repositories to display"))
        .stdout(predicates::str::contains("Contribution Graph").not());
}

#[test]
fn prompt_ignores_empty_input_and_quits() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let mut cmd = lookup_cmd(&server);
    cmd.write_stdin("\n\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Search GitHub username:"));

    any_request.assert_hits(0);
}

#[test]
fn prompt_open_before_any_search_is_harmless() {
    let server = MockServer::start();

    let mut cmd = lookup_cmd(&server);
    cmd.write_stdin("open\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Nothing to open yet"));
}
