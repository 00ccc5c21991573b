//! HTTP-level integration tests for the QA report endpoint.

mod common;

use std::fs;
use std::path::Path;

use axum::http::StatusCode;
use common::{body_json, get_auth, test_user};
use uuid::Uuid;

use govnav_core::roles::{ROLE_ADMIN, ROLE_CONTRIBUTOR};
use govnav_qa::CHECKPOINTS;

/// Lay out a healthy fixture project: valid schema, migrations, seed, .env.
fn write_fixture_project(root: &Path) {
    let prisma = root.join("prisma");
    fs::create_dir_all(prisma.join("migrations").join("20260101000000_init")).unwrap();
    fs::write(
        prisma.join("schema.prisma"),
        r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}
generator client {
  provider = "prisma-client-js"
}
model AISystem {
  id        String    @id @default(uuid())
  createdAt DateTime  @default(now())
  updatedAt DateTime  @updatedAt
  deletedAt DateTime?
  owner     User      @relation(fields: [ownerId], references: [id])
  ownerId   String
  @@index([ownerId])
}
model User { id String @id }
model PolicyPack { id String @id }
"#,
    )
    .unwrap();
    fs::write(prisma.join("seed.ts"), "export async function seed() {}").unwrap();
    fs::write(root.join(".env"), "DATABASE_URL=postgres://localhost/govnav\n").unwrap();
}

/// Admin gets a full report, one result per checkpoint, in catalog order.
#[tokio::test]
async fn qa_report_returns_full_catalog() {
    let config = common::test_config();
    let app = common::build_test_app_with_config(config.clone());
    let admin = test_user(&config, Uuid::new_v4(), &[ROLE_ADMIN]);

    let project = tempfile::tempdir().unwrap();
    write_fixture_project(project.path());

    let uri = format!("/api/v1/qa/report?path={}", project.path().display());
    let response = get_auth(app, &uri, &admin.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), CHECKPOINTS.len());
    for (result, checkpoint) in results.iter().zip(CHECKPOINTS) {
        assert_eq!(result["id"], checkpoint.id);
    }

    assert_eq!(json["data"]["summary"]["failures"], 0);
}

/// A nonexistent project still yields a complete report, with failures.
#[tokio::test]
async fn qa_report_on_missing_project_degrades_gracefully() {
    let config = common::test_config();
    let app = common::build_test_app_with_config(config.clone());
    let admin = test_user(&config, Uuid::new_v4(), &[ROLE_ADMIN]);

    let response = get_auth(
        app,
        "/api/v1/qa/report?path=/nonexistent/project/root",
        &admin.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["results"].as_array().unwrap().len(),
        CHECKPOINTS.len()
    );
    assert!(json["data"]["summary"]["failures"].as_u64().unwrap() > 0);
}

/// Non-admin callers are rejected with 403.
#[tokio::test]
async fn qa_report_forbidden_for_non_admin() {
    let config = common::test_config();
    let app = common::build_test_app_with_config(config.clone());
    let user = test_user(&config, Uuid::new_v4(), &[ROLE_CONTRIBUTOR]);

    let response = get_auth(app, "/api/v1/qa/report?path=/tmp", &user.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
