use std::sync::Arc;

use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use costudy_server::errors::{CoStudyError, Result};
use costudy_server::models::assignments::entities::{Assignment, AssignmentFields};
use costudy_server::models::assignments::requests::UpdateAssignmentRequest;
use costudy_server::models::submissions::entities::{
    Submission, SubmissionFields, SubmissionStatus,
};
use costudy_server::models::submissions::requests::GradeSubmissionRequest;
use costudy_server::models::{DeleteResult, InsertOneResult, PageWindow, UpdateResult};
use costudy_server::routes as app_routes;
use costudy_server::storage::Storage;

use crate::common::routes;

/// 每个操作都失败的存储
struct BrokenStorage;

fn broken<T>() -> Result<T> {
    Err(CoStudyError::database_operation("connection reset"))
}

#[async_trait]
impl Storage for BrokenStorage {
    async fn list_assignments(&self, _window: PageWindow) -> Result<Vec<Assignment>> {
        broken()
    }

    async fn list_assignments_by_difficulty(
        &self,
        _difficulty: Option<&str>,
    ) -> Result<Vec<Assignment>> {
        broken()
    }

    async fn get_assignment_by_id(&self, _id: &str) -> Result<Option<Assignment>> {
        broken()
    }

    async fn create_assignment(
        &self,
        _id: Option<String>,
        _fields: AssignmentFields,
    ) -> Result<InsertOneResult> {
        broken()
    }

    async fn update_assignment(
        &self,
        _id: &str,
        _update: UpdateAssignmentRequest,
    ) -> Result<UpdateResult> {
        broken()
    }

    async fn delete_assignment(&self, _id: &str) -> Result<DeleteResult> {
        broken()
    }

    async fn count_assignments(&self) -> Result<u64> {
        broken()
    }

    async fn create_submission(
        &self,
        _id: Option<String>,
        _fields: SubmissionFields,
    ) -> Result<InsertOneResult> {
        broken()
    }

    async fn list_submissions_by_status(
        &self,
        _status: SubmissionStatus,
    ) -> Result<Vec<Submission>> {
        broken()
    }

    async fn list_submissions_by_user(&self, _user: &str) -> Result<Vec<Submission>> {
        broken()
    }

    async fn grade_submission(
        &self,
        _id: &str,
        _grade: GradeSubmissionRequest,
    ) -> Result<UpdateResult> {
        broken()
    }
}

async fn assert_store_failure(req: test::TestRequest) {
    let storage: Arc<dyn Storage> = Arc::new(BrokenStorage);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .configure(app_routes::configure_assignments_routes)
            .configure(app_routes::configure_submissions_routes),
    )
    .await;

    let res = test::call_service(&app, req.to_request()).await;
    assert_eq!(res.status().as_u16(), 500);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], 5001);
    assert_eq!(body["message"], "Error fetching data");
    assert!(body.get("timestamp").is_some());
}

#[actix_web::test]
async fn listing_assignments_reports_store_failure() {
    assert_store_failure(test::TestRequest::get().uri(routes::ASSIGNMENTS)).await;
    assert_store_failure(test::TestRequest::get().uri(routes::ASSIGNMENTS_V1)).await;
    assert_store_failure(
        test::TestRequest::get().uri(&routes::assignments_by_difficulty("easy")),
    )
    .await;
}

#[actix_web::test]
async fn single_assignment_operations_report_store_failure() {
    assert_store_failure(test::TestRequest::get().uri(&routes::assignment("a1"))).await;
    assert_store_failure(test::TestRequest::delete().uri(&routes::assignment("a1"))).await;
    assert_store_failure(
        test::TestRequest::post()
            .uri(routes::ASSIGNMENTS)
            .set_json(json!({ "title": "Essay" })),
    )
    .await;
    assert_store_failure(
        test::TestRequest::put()
            .uri(&routes::assignment("a1"))
            .set_json(json!({
                "updatedTitle": "t",
                "updatedDifficulty": "easy",
                "updatedDate": "d",
                "updatedMarks": 1,
                "updatedImage": "i",
                "updatedDescription": "x"
            })),
    )
    .await;
}

#[actix_web::test]
async fn counting_assignments_reports_store_failure() {
    assert_store_failure(test::TestRequest::get().uri(routes::TOTAL_ASSIGNMENTS)).await;
}

#[actix_web::test]
async fn submission_operations_report_store_failure() {
    assert_store_failure(test::TestRequest::get().uri(routes::SUBMITTED)).await;
    assert_store_failure(
        test::TestRequest::post()
            .uri(routes::SUBMITTED)
            .set_json(json!({ "user": "a@x.com" })),
    )
    .await;
    assert_store_failure(
        test::TestRequest::put()
            .uri(&routes::mark_assignment("s1"))
            .set_json(json!({ "status": "completed", "givenMark": 1, "feedback": "f" })),
    )
    .await;
}
