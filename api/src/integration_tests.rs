//! Endpoint tests for the testimonial resource API
//!
//! Mounts the real router over a seeded in-memory store (zero simulated
//! latency) and exercises the HTTP surface end to end, including the
//! envelope contract the carousel client depends on.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::adapters::{seed_testimonials, MemoryTestimonialStore};
    use crate::app::TestimonialService;
    use crate::{app, AppState};

    fn seeded_server() -> TestServer {
        let store = Arc::new(MemoryTestimonialStore::with_records(seed_testimonials()));
        let state = AppState {
            testimonial_service: Arc::new(TestimonialService::immediate(store)),
        };
        TestServer::new(app(state)).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = seeded_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn list_returns_envelope_with_count() {
        let server = seeded_server();
        let response = server.get("/testimonials").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 6);
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn list_is_sorted_newest_first() {
        let server = seeded_server();
        let body: Value = server.get("/testimonials").await.json();

        let stamps: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["createdAt"].as_str().unwrap())
            .collect();
        let mut sorted = stamps.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }

    #[tokio::test]
    async fn featured_filter_returns_exactly_flagged_records_newest_first() {
        let server = seeded_server();
        let body: Value = server
            .get("/testimonials")
            .add_query_param("featured", "true")
            .await
            .json();

        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        // Seeds 1, 2, 3 are featured; newest first.
        assert_eq!(ids, vec!["3", "2", "1"]);
        for record in body["data"].as_array().unwrap() {
            assert_eq!(record["featured"], true);
        }
    }

    #[tokio::test]
    async fn featured_takes_precedence_over_industry() {
        let server = seeded_server();
        let body: Value = server
            .get("/testimonials")
            .add_query_param("featured", "true")
            .add_query_param("industry", "Environmental Technology")
            .await
            .json();

        // The industry filter is ignored when featured=true is present.
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn featured_false_falls_through_to_industry_filter() {
        let server = seeded_server();
        let body: Value = server
            .get("/testimonials")
            .add_query_param("featured", "false")
            .add_query_param("industry", "Technology")
            .await
            .json();

        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "Sarah Johnson");
    }

    #[tokio::test]
    async fn industry_filter_is_exact_match() {
        let server = seeded_server();

        let body: Value = server
            .get("/testimonials")
            .add_query_param("industry", "Data Analytics")
            .await
            .json();
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["company"], "DataFlow Solutions");

        let body: Value = server
            .get("/testimonials")
            .add_query_param("industry", "data analytics")
            .await
            .json();
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn get_by_id_returns_record() {
        let server = seeded_server();
        let response = server.get("/testimonials/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Sarah Johnson");
    }

    #[tokio::test]
    async fn get_missing_id_is_404_with_envelope() {
        let server = seeded_server();
        let response = server.get("/testimonials/999").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Testimonial not found");
    }

    #[tokio::test]
    async fn create_returns_201_with_fresh_id_and_equal_timestamps() {
        let server = seeded_server();
        let response = server
            .post("/testimonials")
            .json(&json!({"name": "A", "role": "B", "company": "C", "content": "D"}))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "7");
        assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);

        // The record is now listed.
        let list: Value = server.get("/testimonials").await.json();
        assert_eq!(list["count"], 7);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_400_naming_the_field() {
        let server = seeded_server();
        let response = server
            .post("/testimonials")
            .json(&json!({"name": "A", "role": "B", "content": "D"}))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required field: company");
    }

    #[tokio::test]
    async fn create_with_rating_out_of_range_is_400() {
        let server = seeded_server();
        let response = server
            .post("/testimonials")
            .json(&json!({
                "name": "A", "role": "B", "company": "C", "content": "D",
                "rating": 7
            }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Rating must be between 1 and 5");
    }

    #[tokio::test]
    async fn update_merges_fields_and_preserves_creation_time() {
        let server = seeded_server();
        let before: Value = server.get("/testimonials/2").await.json();

        let response = server
            .put("/testimonials/2")
            .json(&json!({"content": "Still great a year later.", "rating": 4}))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "2");
        assert_eq!(body["data"]["content"], "Still great a year later.");
        assert_eq!(body["data"]["rating"], 4);
        assert_eq!(body["data"]["createdAt"], before["data"]["createdAt"]);
        assert_eq!(body["data"]["name"], "Michael Chen");
    }

    #[tokio::test]
    async fn update_cannot_overwrite_id_or_created_at() {
        let server = seeded_server();
        let before: Value = server.get("/testimonials/2").await.json();

        let body: Value = server
            .put("/testimonials/2")
            .json(&json!({
                "id": "999",
                "createdAt": "1999-01-01T00:00:00Z",
                "content": "Tampered"
            }))
            .await
            .json();

        assert_eq!(body["data"]["id"], "2");
        assert_eq!(body["data"]["createdAt"], before["data"]["createdAt"]);
    }

    #[tokio::test]
    async fn update_missing_id_is_404() {
        let server = seeded_server();
        let response = server
            .put("/testimonials/999")
            .json(&json!({"content": "Hello"}))
            .await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn update_with_bad_rating_is_400_before_lookup() {
        let server = seeded_server();
        let response = server
            .put("/testimonials/999")
            .json(&json!({"rating": 0}))
            .await;
        // Validation wins over not-found.
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn delete_succeeds_once_then_404() {
        let server = seeded_server();

        let response = server.delete("/testimonials/4").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Testimonial deleted successfully");

        let gone = server.get("/testimonials/4").await;
        gone.assert_status_not_found();

        let again = server.delete("/testimonials/4").await;
        again.assert_status_not_found();
        assert_eq!(again.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let server = seeded_server();
        server.delete("/testimonials/6").await.assert_status_ok();

        let created: Value = server
            .post("/testimonials")
            .json(&json!({"name": "A", "role": "B", "company": "C", "content": "D"}))
            .await
            .json();

        // Counter was seeded past id 6; deletion does not free it.
        assert_eq!(created["data"]["id"], "7");
    }
}
