//! Full HTTP round trips through `init_routes` against an in-memory SQLite schema.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::shared::api::{custom_json_config, custom_path_config};
use crate::tests::support::sqlite_db::sqlite_db;
use crate::{init_routes, AppState};

macro_rules! sqlite_app {
    () => {{
        let db = sqlite_db().await;
        let state = AppState::from_db(db.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(db))
                .app_data(custom_json_config())
                .app_data(custom_path_config())
                .configure(init_routes),
        )
        .await
    }};
}

fn ada_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "experiences": [{
            "company": "Analytical Engines Ltd",
            "position": "Engineer",
            "from_date": "1840-01-01"
        }],
        "educations": [{
            "institution": "Home Tutoring",
            "degree": "Mathematics",
            "from_date": "1828-01-01",
            "to_date": "1835-01-01"
        }],
        "skills": [{ "name": "Mathematics", "level": "advanced" }]
    })
}

#[actix_web::test]
async fn ada_lovelace_lifecycle() {
    let app = sqlite_app!();

    let req = test::TestRequest::post()
        .uri("/api/cvs")
        .set_json(ada_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    let cv_id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["experiences"][0]["cv_id"], cv_id.as_str());
    assert_eq!(created["data"]["skills"][0]["level"], "advanced");

    let req = test::TestRequest::get()
        .uri(&format!("/api/cvs/{cv_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["data"]["experiences"], created["data"]["experiences"]);
    assert_eq!(fetched["data"]["educations"], created["data"]["educations"]);
    assert_eq!(fetched["data"]["skills"], created["data"]["skills"]);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/cvs/{cv_id}"))
        .set_json(json!({ "name": "Augusta Ada King" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let patched: Value = test::read_body_json(resp).await;
    assert_eq!(patched["data"]["name"], "Augusta Ada King");
    assert_eq!(patched["data"]["email"], "ada@example.com");
    assert_eq!(patched["data"]["skills"], created["data"]["skills"]);

    let experience_id = created["data"]["experiences"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/experiences/{experience_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cvs/{cv_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/cvs/{cv_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/experiences/{experience_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_email_over_http_is_conflict() {
    let app = sqlite_app!();

    let req = test::TestRequest::post()
        .uri("/api/cvs")
        .set_json(ada_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/cvs")
        .set_json(ada_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
}

#[actix_web::test]
async fn delete_of_unknown_cv_is_not_found() {
    let app = sqlite_app!();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cvs/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn readiness_reports_a_live_database() {
    let app = sqlite_app!();

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
