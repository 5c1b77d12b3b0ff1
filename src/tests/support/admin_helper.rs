use actix_web::web;

use crate::portfolio::adapter::incoming::web::extractors::admin::AdminConfig;

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";

pub fn test_admin_config() -> web::Data<AdminConfig> {
    web::Data::new(AdminConfig::new(TEST_ADMIN_SECRET))
}
