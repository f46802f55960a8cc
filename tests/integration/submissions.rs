use serde_json::json;

use crate::common::{TestApp, routes};

mod submitting {
    use super::*;

    #[tokio::test]
    async fn new_submission_is_pending_and_listed() {
        let app = TestApp::spawn().await;
        let id = app.create_submission("a@x.com", "Essay").await;

        let res = app.get(routes::SUBMITTED).await;

        assert_eq!(res.status, 200);
        let items = res.body.as_array().expect("array body");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["_id"], id.as_str());
        assert_eq!(items[0]["status"], "pending");
        assert_eq!(items[0]["pdf"], "https://drive/answer.pdf");
    }

    #[tokio::test]
    async fn graded_submission_leaves_the_pending_list() {
        let app = TestApp::spawn().await;
        let graded = app.create_submission("a@x.com", "Essay").await;
        let waiting = app.create_submission("b@x.com", "Poem").await;

        let res = app
            .put(
                &routes::mark_assignment(&graded),
                &json!({ "status": "completed", "givenMark": 45, "feedback": "good" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["matchedCount"], 1);
        assert_eq!(res.body["modifiedCount"], 1);
        assert_eq!(res.body["upsertedCount"], 0);

        let pending = app.get(routes::SUBMITTED).await;
        let items = pending.body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["_id"], waiting.as_str());
    }
}

mod grading {
    use super::*;

    #[tokio::test]
    async fn grading_an_unknown_id_creates_a_document() {
        let app = TestApp::spawn().await;

        let res = app
            .put(
                &routes::mark_assignment("ghost-7"),
                &json!({ "status": "completed", "givenMark": "A", "feedback": "ok" }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["matchedCount"], 0);
        assert_eq!(res.body["upsertedCount"], 1);
        assert_eq!(res.body["upsertedId"], "ghost-7");
    }

    #[tokio::test]
    async fn upserted_pending_grade_shows_up_in_the_pending_list() {
        let app = TestApp::spawn().await;

        let res = app
            .put(
                &routes::mark_assignment("ghost"),
                &json!({ "status": "pending", "givenMark": 1, "feedback": "f" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!({
                "acknowledged": true,
                "matchedCount": 0,
                "modifiedCount": 0,
                "upsertedCount": 1,
                "upsertedId": "ghost"
            })
        );

        let pending = app.get(routes::SUBMITTED).await;
        assert_eq!(
            pending.body,
            json!([{
                "_id": "ghost",
                "status": "pending",
                "givenMark": 1,
                "examineerFeedback": "f"
            }])
        );
    }

    #[tokio::test]
    async fn grade_values_are_stored_verbatim() {
        let app = TestApp::spawn().await;
        let id = app.create_submission("a@x.com", "Essay").await;
        let cookie = app.login_cookie("a@x.com").await;

        let res = app
            .put(
                &routes::mark_assignment(&id),
                &json!({ "status": "completed", "givenMark": null, "feedback": 3 }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let mine = app
            .get_with_cookie(&routes::my_assignments("a@x.com"), &cookie)
            .await;
        let item = mine.body[0].as_object().unwrap();
        assert_eq!(item["givenMark"], serde_json::Value::Null);
        assert_eq!(item["examineerFeedback"], 3);
        assert_eq!(item["marks"], 50);
    }

    #[tokio::test]
    async fn grade_body_must_be_complete() {
        let app = TestApp::spawn().await;
        let id = app.create_submission("a@x.com", "Essay").await;

        let res = app
            .put(
                &routes::mark_assignment(&id),
                &json!({ "status": "completed" }),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], 1000);
    }
}

mod my_submissions {
    use super::*;

    #[tokio::test]
    async fn owner_sees_only_projected_fields() {
        let app = TestApp::spawn().await;
        let id = app.create_submission("a@x.com", "Essay").await;
        app.create_submission("b@x.com", "Other").await;
        app.put(
            &routes::mark_assignment(&id),
            &json!({ "status": "completed", "givenMark": 45, "feedback": "good" }),
        )
        .await;
        let cookie = app.login_cookie("a@x.com").await;

        let res = app
            .get_with_cookie(&routes::my_assignments("a@x.com"), &cookie)
            .await;

        assert_eq!(res.status, 200);
        let items = res.body.as_array().expect("array body");
        assert_eq!(items.len(), 1);
        let item = items[0].as_object().unwrap();
        let mut keys: Vec<&str> = item.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "_id",
                "examineerFeedback",
                "givenMark",
                "marks",
                "status",
                "title",
                "user"
            ]
        );
        assert_eq!(item["givenMark"], 45);
        assert_eq!(item["examineerFeedback"], "good");
        assert_eq!(item["status"], "completed");
    }

    #[tokio::test]
    async fn asking_for_another_users_email_is_forbidden() {
        let app = TestApp::spawn().await;
        app.create_submission("b@x.com", "Essay").await;
        let cookie = app.login_cookie("a@x.com").await;

        let res = app
            .get_with_cookie(&routes::my_assignments("b@x.com"), &cookie)
            .await;

        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], 1003);
    }

    #[tokio::test]
    async fn missing_email_query_is_forbidden() {
        let app = TestApp::spawn().await;
        let cookie = app.login_cookie("a@x.com").await;

        let res = app
            .get_with_cookie("/api/v1/my-assignment", &cookie)
            .await;

        assert_eq!(res.status, 403);
    }
}
