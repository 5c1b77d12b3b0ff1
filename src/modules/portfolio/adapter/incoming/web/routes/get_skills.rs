use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let result = data.get_skills.execute().await;
    let using_fallback = result.is_fallback();

    ApiResponse::success_with_fallback(result.value, using_fallback)
}
