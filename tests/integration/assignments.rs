use serde_json::json;

use crate::common::{TestApp, routes};

mod listing {
    use super::*;

    #[tokio::test]
    async fn lists_every_assignment_in_insertion_order_without_paging() {
        let app = TestApp::spawn().await;
        for title in ["A1", "A2", "A3"] {
            app.create_assignment(title, "easy").await;
        }

        let res = app.get(routes::ASSIGNMENTS).await;

        assert_eq!(res.status, 200);
        let titles: Vec<&str> = res
            .body
            .as_array()
            .expect("array body")
            .iter()
            .map(|a| a["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["A1", "A2", "A3"]);
    }

    #[tokio::test]
    async fn page_and_size_select_a_window() {
        let app = TestApp::spawn().await;
        for title in ["A1", "A2", "A3", "A4", "A5"] {
            app.create_assignment(title, "easy").await;
        }

        let res = app
            .get(&format!("{}?page=1&size=2", routes::ASSIGNMENTS))
            .await;

        assert_eq!(res.status, 200);
        let items = res.body.as_array().expect("array body");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "A3");
        assert_eq!(items[1]["title"], "A4");
    }

    #[tokio::test]
    async fn unparsable_paging_falls_back_to_full_list() {
        let app = TestApp::spawn().await;
        for title in ["A1", "A2", "A3"] {
            app.create_assignment(title, "easy").await;
        }

        let res = app
            .get(&format!("{}?page=abc&size=xyz", routes::ASSIGNMENTS))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn difficulty_label_filters_exactly() {
        let app = TestApp::spawn().await;
        app.create_assignment("A1", "easy").await;
        app.create_assignment("A2", "hard").await;
        app.create_assignment("A3", "easy").await;

        let easy = app.get(&routes::assignments_by_difficulty("easy")).await;
        assert_eq!(easy.status, 200);
        assert_eq!(easy.body.as_array().unwrap().len(), 2);
        assert!(
            easy.body
                .as_array()
                .unwrap()
                .iter()
                .all(|a| a["difficulty"] == "easy")
        );

        let unknown = app.get(&routes::assignments_by_difficulty("Easy")).await;
        assert_eq!(unknown.status, 200);
        assert_eq!(unknown.body, json!([]));

        let all = app.get(routes::ASSIGNMENTS_V1).await;
        assert_eq!(all.body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn total_count_tracks_inserts_and_deletes() {
        let app = TestApp::spawn().await;
        let first = app.create_assignment("A1", "easy").await;
        app.create_assignment("A2", "medium").await;

        let res = app.get(routes::TOTAL_ASSIGNMENTS).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "count": 2 }));

        app.delete(&routes::assignment(&first)).await;
        let res = app.get(routes::TOTAL_ASSIGNMENTS).await;
        assert_eq!(res.body, json!({ "count": 1 }));
    }
}

mod single {
    use super::*;

    #[tokio::test]
    async fn created_assignment_is_returned_with_unknown_fields() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Essay", "medium").await;

        let res = app.get(&routes::assignment(&id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["_id"], id.as_str());
        assert_eq!(res.body["title"], "Essay");
        assert_eq!(res.body["marks"], 50);
        assert_eq!(res.body["author"], "owner@x.com");
    }

    #[tokio::test]
    async fn caller_supplied_id_is_kept() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::ASSIGNMENTS,
                &json!({ "_id": "custom-1", "title": "Poem", "marks": "ten" }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["acknowledged"], true);
        assert_eq!(res.inserted_id(), "custom-1");

        let fetched = app.get(&routes::assignment("custom-1")).await;
        assert_eq!(fetched.body["marks"], "ten");
    }

    #[tokio::test]
    async fn non_string_values_are_stored_verbatim() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::ASSIGNMENTS,
                &json!({ "title": 42, "date": 1714521600000_i64, "difficulty": 3 }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        let id = res.inserted_id();

        let fetched = app.get(&routes::assignment(&id)).await;
        assert_eq!(
            fetched.body,
            json!({ "_id": id, "title": 42, "date": 1714521600000_i64, "difficulty": 3 })
        );

        // 非字符串难度不参与按难度筛选
        let by_label = app.get(&routes::assignments_by_difficulty("3")).await;
        assert_eq!(by_label.body, json!([]));
    }

    #[tokio::test]
    async fn explicit_null_is_kept() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::ASSIGNMENTS,
                &json!({ "title": "t", "description": null }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let fetched = app.get(&routes::assignment(&res.inserted_id())).await;
        let body = fetched.body.as_object().unwrap();
        assert!(body.contains_key("description"));
        assert_eq!(body["description"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn update_accepts_numbers_and_nulls() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Essay", "easy").await;

        let res = app
            .put(
                &routes::assignment(&id),
                &json!({
                    "updatedTitle": 7,
                    "updatedDifficulty": "hard",
                    "updatedDate": 1714521600000_i64,
                    "updatedMarks": "80",
                    "updatedImage": null,
                    "updatedDescription": null
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["modifiedCount"], 1);

        let fetched = app.get(&routes::assignment(&id)).await;
        assert_eq!(fetched.body["title"], 7);
        assert_eq!(fetched.body["date"], 1714521600000_i64);
        assert_eq!(fetched.body["marks"], "80");
        assert_eq!(fetched.body["thumbnail"], serde_json::Value::Null);
        assert_eq!(fetched.body["author"], "owner@x.com");

        let hard = app.get(&routes::assignments_by_difficulty("hard")).await;
        assert_eq!(hard.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_assignment_is_null() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::assignment("does-not-exist")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.text, "null");
    }

    #[tokio::test]
    async fn update_replaces_six_fields_and_keeps_the_rest() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Old", "easy").await;

        let res = app
            .put(
                &routes::assignment(&id),
                &json!({
                    "updatedTitle": "New",
                    "updatedDifficulty": "hard",
                    "updatedDate": "2024-06-01",
                    "updatedMarks": 80,
                    "updatedImage": "https://img/2.png",
                    "updatedDescription": "rewritten"
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["matchedCount"], 1);
        assert_eq!(res.body["modifiedCount"], 1);

        let fetched = app.get(&routes::assignment(&id)).await;
        assert_eq!(fetched.body["title"], "New");
        assert_eq!(fetched.body["difficulty"], "hard");
        assert_eq!(fetched.body["date"], "2024-06-01");
        assert_eq!(fetched.body["marks"], 80);
        assert_eq!(fetched.body["thumbnail"], "https://img/2.png");
        assert_eq!(fetched.body["description"], "rewritten");
        assert_eq!(fetched.body["author"], "owner@x.com");
    }

    #[tokio::test]
    async fn update_of_missing_assignment_matches_nothing() {
        let app = TestApp::spawn().await;

        let res = app
            .put(
                &routes::assignment("ghost"),
                &json!({
                    "updatedTitle": "New",
                    "updatedDifficulty": "hard",
                    "updatedDate": "2024-06-01",
                    "updatedMarks": 80,
                    "updatedImage": "https://img/2.png",
                    "updatedDescription": "rewritten"
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["matchedCount"], 0);
        assert_eq!(res.body["modifiedCount"], 0);
    }

    #[tokio::test]
    async fn update_with_missing_fields_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Old", "easy").await;

        let res = app
            .put(&routes::assignment(&id), &json!({ "updatedTitle": "New" }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], 1000);

        let fetched = app.get(&routes::assignment(&id)).await;
        assert_eq!(fetched.body["title"], "Old");
    }

    #[tokio::test]
    async fn delete_reports_how_many_were_removed() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Gone", "easy").await;

        let res = app.delete(&routes::assignment(&id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["deletedCount"], 1);

        let again = app.delete(&routes::assignment(&id)).await;
        assert_eq!(again.status, 200);
        assert_eq!(again.body["deletedCount"], 0);

        let fetched = app.get(&routes::assignment(&id)).await;
        assert_eq!(fetched.text, "null");
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_bad_request() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::ASSIGNMENTS, "{ not json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], 1000);
    }
}
