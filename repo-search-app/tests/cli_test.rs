use assert_cmd::cargo;
use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use tempfile::tempdir;

const SEARCH_BODY: &str = r#"{
    "total_count": 2,
    "items": [
        {
            "full_name": "octo/repo",
            "language": "Go",
            "stargazers_count": 5,
            "owner": { "avatar_url": "AVATAR_URL" }
        },
        {
            "full_name": "octo/other",
            "stargazers_count": 1,
            "watchers_count": 2,
            "forks_count": 3,
            "open_issues": 4
        }
    ]
}"#;

fn repo_search(api_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("repo-search"));
    cmd.env_remove("REPO_SEARCH_API_URL")
        .arg("--api-url")
        .arg(api_url);
    cmd
}

#[test]
fn test_search_lists_results() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create();

    repo_search(&url)
        .arg("octo")
        .assert()
        .success()
        .stdout(predicate::str::contains("octo/repo"))
        .stdout(predicate::str::contains("[Go] 5 stars"))
        .stdout(predicate::str::contains("[Unknown] 1 stars"))
        .stdout(predicate::str::contains("(2 repos)"));

    mock.assert();
}

#[test]
fn test_search_json_output() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create();

    let output = repo_search(&url)
        .arg("octo")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["title"], "octo/repo");
    assert_eq!(records[0]["stars_count"], 5);
    assert_eq!(records[1]["language"], "Unknown");
    assert_eq!(records[1]["open_issues_count"], 4);
    assert_eq!(records[1]["avatar_url"], "");
}

#[test]
fn test_detail_saves_avatar() {
    let mut server = Server::new();
    let url = server.url();

    let _mock_search = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(SEARCH_BODY.replace("AVATAR_URL", &format!("{}/u/1.png", url)))
        .create();

    let mock_avatar = server
        .mock("GET", "/u/1.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body([0x89, b'P', b'N', b'G'])
        .create();

    let dir = tempdir().unwrap();
    let avatar_path = dir.path().join("avatar.png");

    repo_search(&url)
        .arg("octo")
        .arg("--detail")
        .arg("0")
        .arg("--avatar-out")
        .arg(&avatar_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Written in Go"))
        .stdout(predicate::str::contains("5 stars"))
        .stdout(predicate::str::contains("0 watchers"))
        .stdout(predicate::str::contains("0 forks"))
        .stdout(predicate::str::contains("0 open issues"));

    mock_avatar.assert();
    assert_eq!(std::fs::read(&avatar_path).unwrap(), vec![0x89, b'P', b'N', b'G']);
}

#[test]
fn test_detail_without_avatar_url_is_blank() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create();

    let dir = tempdir().unwrap();
    let avatar_path = dir.path().join("avatar.png");

    repo_search(&url)
        .arg("octo")
        .arg("-d")
        .arg("1")
        .arg("-o")
        .arg(&avatar_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Written in Unknown"))
        .stdout(predicate::str::contains("2 watchers"))
        .stdout(predicate::str::contains("4 open issues"));

    assert!(!avatar_path.exists());
}

#[test]
fn test_detail_out_of_range_is_not_an_error() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create();

    repo_search(&url)
        .arg("octo")
        .arg("--detail")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("no result 7"));
}

#[test]
fn test_decode_failure_is_reported() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(r#"{"message":"nothing here"}"#)
        .create();

    repo_search(&url)
        .arg("octo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not decode search response"));
}

#[test]
fn test_server_error_is_reported() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(500)
        .create();

    repo_search(&url)
        .arg("octo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("search for \"octo\" failed"));
}

#[test]
fn test_interactive_session() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/search/repositories?q=octo")
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create();

    repo_search(&url)
        .write_stdin("octo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("octo/other"))
        .stdout(predicate::str::contains("(2 repos)"));
}

#[test]
fn test_avatar_out_without_detail_is_rejected() {
    let server = Server::new();
    let url = server.url();

    repo_search(&url)
        .arg("octo")
        .arg("--avatar-out")
        .arg("avatar.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--avatar-out requires --detail"));
}
