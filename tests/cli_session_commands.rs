mod common;

use clap::Parser;

use common::{add_request, setup_service, update_request, Service};
use mld::cli::commands::session;
use mld::cli::{Cli, Commands};
use mld::domain::models::TrainingSessionDto;

async fn run_cli(service: &Service, argv: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(argv)?;
    match cli.command {
        Commands::Session(args) => session::run(args.command, service, true).await,
        _ => panic!("expected a session command"),
    }
}

async fn stored(service: &Service, id: &str) -> TrainingSessionDto {
    service
        .get_session(id)
        .await
        .unwrap()
        .success()
        .expect("session should exist")
}

#[tokio::test]
async fn test_update_only_changes_given_fields() {
    let service = setup_service().await;
    let seeded = service
        .add_session(add_request("Baseline", "first run", "abc123"))
        .await
        .unwrap();
    service
        .update_session(&seeded.id, {
            let mut request = update_request(10, 3, 0.25);
            request.name = "Baseline".to_string();
            request.description = Some("first run".to_string());
            request.git_hash = Some("abc123".to_string());
            request
        })
        .await
        .unwrap()
        .success()
        .expect("session should exist");

    run_cli(&service, &["mld", "session", "update", seeded.id.as_str(), "--iteration", "5"])
        .await
        .unwrap();

    let after = stored(&service, &seeded.id).await;
    assert_eq!(after.name, "Baseline");
    assert_eq!(after.description.as_deref(), Some("first run"));
    assert_eq!(after.git_hash.as_deref(), Some("abc123"));
    assert_eq!(after.iteration, 5);
    assert_eq!(after.epoch, 3);
    assert!((after.loss - 0.25).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_update_keeps_null_description() {
    let service = setup_service().await;
    let seeded = service
        .add_session(add_request("Sparse", "", ""))
        .await
        .unwrap();
    let mut request = update_request(0, 0, 0.0);
    request.name = "Sparse".to_string();
    request.description = None;
    request.git_hash = None;
    let cleared = service.update_session(&seeded.id, request).await.unwrap();
    assert!(cleared.is_success());

    run_cli(&service, &["mld", "session", "update", seeded.id.as_str(), "--epoch", "2"])
        .await
        .unwrap();

    let after = stored(&service, &seeded.id).await;
    assert!(after.description.is_none());
    assert!(after.git_hash.is_none());
    assert_eq!(after.epoch, 2);
}

#[tokio::test]
async fn test_update_unknown_session_fails() {
    let service = setup_service().await;

    let result = run_cli(&service, &["mld", "session", "update", "missing", "--iteration", "1"]).await;

    assert!(result.is_err());
    assert!(service.list_sessions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_then_delete_through_cli() {
    let service = setup_service().await;

    run_cli(&service, &["mld", "session", "add", "Run", "-d", "desc", "-g", "ff00"])
        .await
        .unwrap();
    let sessions = service.list_sessions().await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].git_hash.as_deref(), Some("ff00"));

    let id = sessions[0].id.clone();
    run_cli(&service, &["mld", "session", "delete", id.as_str()]).await.unwrap();
    assert!(service.get_session(&id).await.unwrap().is_not_found());
}
