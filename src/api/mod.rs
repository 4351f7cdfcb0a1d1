pub mod bookings;
pub mod health;
pub mod materials;
pub mod notes;
pub mod reviews;
pub mod sessions;
pub mod swagger;
pub mod users;

use actix_web::web;

use crate::utils::AppError;

/// Registers every route plus the JSON/query error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings answer with the same JSON error shape
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    );

    cfg
        // Root & Health
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))

        // ==================== USERS ====================
        .service(
            web::resource("/users")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::upsert_user)),
        )
        .route("/usersForAdmin", web::get().to(users::search_users))
        .route("/users/role/{id}", web::patch().to(users::update_role))

        // ==================== SESSIONS ====================
        .route("/session", web::post().to(sessions::create_session))
        .route("/all-sessions", web::get().to(sessions::list_sessions))
        .route("/sessions", web::get().to(sessions::list_sessions))
        .route("/session/{id}", web::get().to(sessions::get_session))
        .route("/session/resend-request/{id}", web::patch().to(sessions::resend_request))
        .route("/tutor-sessions", web::get().to(sessions::tutor_sessions))
        .route("/approved-sessions", web::get().to(sessions::approved_sessions))

        // ==================== BOOKINGS & REVIEWS ====================
        .service(
            web::resource("/bookings")
                .route(web::get().to(bookings::list_bookings))
                .route(web::post().to(bookings::create_booking)),
        )
        .route("/reviews", web::post().to(reviews::create_review))
        .route("/reviews/{session_id}", web::get().to(reviews::list_reviews))

        // ==================== NOTES ====================
        .service(
            web::resource("/notes")
                .route(web::get().to(notes::list_notes))
                .route(web::post().to(notes::create_note)),
        )
        .service(
            web::resource("/notes/{id}")
                .route(web::patch().to(notes::update_note))
                .route(web::delete().to(notes::delete_note)),
        )

        // ==================== MATERIALS ====================
        .service(
            web::resource("/materials")
                .route(web::get().to(materials::list_materials))
                .route(web::post().to(materials::create_material)),
        )
        .service(
            web::resource("/materials/{id}")
                .route(web::patch().to(materials::update_material))
                .route(web::delete().to(materials::delete_material)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{drop_db, live_db, offline_db};
    use actix_web::{http::StatusCode, test, App};

    macro_rules! app_with {
        ($db:expr) => {
            test::init_service(App::new().app_data(web::Data::new($db)).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn test_root_banner() {
        let app = app_with!(offline_db().await);

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "📚 Collaborative Study Platform Server is running!");
    }

    #[actix_web::test]
    async fn test_malformed_ids_answer_400() {
        let app = app_with!(offline_db().await);

        let requests = vec![
            test::TestRequest::get().uri("/session/not-hex"),
            test::TestRequest::patch().uri("/session/resend-request/123"),
            test::TestRequest::delete().uri("/notes/zzz"),
            test::TestRequest::delete().uri("/materials/zzz"),
            test::TestRequest::patch()
                .uri("/users/role/abc")
                .set_json(serde_json::json!({ "role": "admin" })),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body["error"].as_str().unwrap().contains("Invalid"));
        }
    }

    #[actix_web::test]
    async fn test_owner_scoped_listings_require_email() {
        let app = app_with!(offline_db().await);

        for uri in ["/tutor-sessions", "/approved-sessions?email=", "/notes"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_body_without_email_is_rejected_as_json() {
        let app = app_with!(offline_db().await);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "name": "No Email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404() {
        let app = app_with!(offline_db().await);

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_session_end_to_end() {
        let db = live_db().await;
        let app = app_with!(db.clone());

        let req = test::TestRequest::post()
            .uri("/session")
            .set_json(serde_json::json!({ "tutorEmail": "t@x.com", "title": "Chemistry" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = test::read_body_json(resp).await;
        let id = created["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/tutor-sessions?email=t@x.com").to_request();
        let sessions: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let listed = sessions.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["_id"], id.as_str());
        assert_eq!(listed[0]["status"], "pending");
        assert_eq!(listed[0]["title"], "Chemistry");

        let req = test::TestRequest::patch()
            .uri(&format!("/session/resend-request/{}", id))
            .to_request();
        let result: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(result["modifiedCount"], 0);

        let req = test::TestRequest::get().uri(&format!("/session/{}", id)).to_request();
        let detail: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["status"], "pending");
        assert!(detail["averageRating"].is_null());
        assert_eq!(detail["reviews"].as_array().unwrap().len(), 0);

        drop_db(&db).await;
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_user_registration_end_to_end() {
        let db = live_db().await;
        let app = app_with!(db.clone());

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "email": "ana@example.com", "name": "Ana" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let first_login = users[0]["lastLoggedAt"].as_str().unwrap().to_string();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "email": "Ana@Example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let result: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(result["matchedCount"], 1);

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
        assert!(users[0]["lastLoggedAt"].as_str().unwrap() > first_login.as_str());

        drop_db(&db).await;
    }
}
