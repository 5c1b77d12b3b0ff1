use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    let result = data.get_education.execute().await;
    let using_fallback = result.is_fallback();

    ApiResponse::success_with_fallback(result.value, using_fallback)
}
