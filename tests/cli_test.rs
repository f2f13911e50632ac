use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn flick_finder(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flick-finder").unwrap();
    cmd.env_remove("FLICKR_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("flick-finder").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_show_creates_default_profile() {
    let config_dir = TempDir::new().unwrap();
    flick_finder(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default (default)"))
        .stdout(predicate::str::contains("api.flickr.com"));

    assert!(config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_count_field() {
    let config_dir = TempDir::new().unwrap();
    flick_finder(&config_dir)
        .args(["config", "set", "count-field", "pages"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("count_field = \"pages\""));
}

#[test]
fn test_config_set_unknown_field_fails() {
    let config_dir = TempDir::new().unwrap();
    flick_finder(&config_dir)
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"))
        .stderr(predicate::str::contains("Hint"));
}

#[test]
fn test_empty_phrase_is_rejected() {
    let config_dir = TempDir::new().unwrap();
    flick_finder(&config_dir)
        .args(["--api-key", "test-key", "search", "phrase", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phrase Empty."));
}

#[test]
fn test_out_of_range_latitude_is_rejected() {
    let config_dir = TempDir::new().unwrap();
    flick_finder(&config_dir)
        .args([
            "--api-key",
            "test-key",
            "search",
            "location",
            "--lat",
            "91",
            "--lon",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Latitude"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_phrase_search_against_mock_flickr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/"))
        .and(query_param("text", "cat"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "ok",
            "photos": {
                "total": "1",
                "photo": [{
                    "id": "1",
                    "title": "Sleepy cat",
                    "url_m": format!("{}/img/cat.jpg", server.uri())
                }]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img/cat.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]))
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let base_url = format!("{}/services/rest/", server.uri());
    let output = config_dir.path().join("cat.jpg");

    let assert = tokio::task::spawn_blocking({
        let config_dir_path = config_dir.path().to_path_buf();
        let output = output.clone();
        move || {
            let run = |args: &[&str]| {
                Command::cargo_bin("flick-finder")
                    .unwrap()
                    .env_remove("FLICKR_API_KEY")
                    .env("NO_COLOR", "1")
                    .arg("--config-dir")
                    .arg(&config_dir_path)
                    .args(args)
                    .assert()
            };

            run(&["config", "set", "url", base_url.as_str()]).success();
            run(&[
                "--api-key",
                "test-key",
                "search",
                "phrase",
                "cat",
                "--output",
                output.to_str().unwrap(),
            ])
        }
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Sleepy cat"))
        .stdout(predicate::str::contains("/img/cat.jpg"));
    assert_eq!(std::fs::read(&output).unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_with_no_results_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "ok",
            "photos": { "total": "0", "photo": [] }
        })))
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        format!(
            "default_profile = \"default\"\n\n[profiles.default]\nbase_url = \"{}/services/rest/\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let config_dir_path = config_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("flick-finder")
            .unwrap()
            .env_remove("FLICKR_API_KEY")
            .env("NO_COLOR", "1")
            .arg("--config-dir")
            .arg(&config_dir_path)
            .args(["--api-key", "test-key", "search", "phrase", "zzqx"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Cannot find photos with zzqx"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_image_fetch_failure_exits_without_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stat": "ok",
            "photos": {
                "total": "1",
                "photo": [{
                    "id": "1",
                    "title": "Gone cat",
                    "url_m": format!("{}/img/gone.jpg", server.uri())
                }]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        format!(
            "default_profile = \"default\"\n\n[profiles.default]\nbase_url = \"{}/services/rest/\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let config_dir_path = config_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("flick-finder")
            .unwrap()
            .env_remove("FLICKR_API_KEY")
            .env_remove("RUST_LOG")
            .arg("--config-dir")
            .arg(&config_dir_path)
            .args(["--api-key", "test-key", "search", "phrase", "cat"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .failure()
        .stdout(predicate::str::contains("Gone cat").not())
        .stderr(predicate::str::contains("Image does not exist").not())
        .stderr(predicate::str::contains("gone.jpg").not());
}
