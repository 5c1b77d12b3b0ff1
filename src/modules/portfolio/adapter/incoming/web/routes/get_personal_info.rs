use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/personal-info")]
pub async fn get_personal_info_handler(data: web::Data<AppState>) -> impl Responder {
    let result = data.get_personal_info.execute().await;
    let using_fallback = result.is_fallback();

    ApiResponse::success_with_fallback(result.value, using_fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_personal_info;
    use crate::tests::support::stubs::StubPortfolioStore;

    #[actix_web::test]
    async fn store_row_reports_using_fallback_false() {
        let app_state = TestAppStateBuilder::default()
            .with_store(StubPortfolioStore {
                personal_info: Some(sample_personal_info()),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_personal_info_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/personal-info").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["usingFallback"], false);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["email"], "dev@example.com");
    }

    #[actix_web::test]
    async fn unreachable_store_serves_fallback() {
        let app_state = TestAppStateBuilder::default()
            .with_store(StubPortfolioStore {
                fail_reads: true,
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_personal_info_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/personal-info").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["usingFallback"], true);
        // fallback records carry no id
        assert!(body["data"].get("id").is_none());
        assert!(body["data"]["email"].is_string());
    }
}
