use actix_web::web;
use std::sync::Arc;

use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::use_cases::{
    add_certificate::AddCertificateUseCase, delete_certificate::DeleteCertificateUseCase,
    get_certificates::GetCertificatesUseCase, get_education::GetEducationUseCase,
    get_personal_info::GetPersonalInfoUseCase, get_projects::GetProjectsUseCase,
    get_skills::GetSkillsUseCase, update_certificate::UpdateCertificateUseCase,
    update_profile_picture::UpdateProfilePictureUseCase, update_resume::UpdateResumeUrlUseCase,
};
use crate::tests::support::stubs::StubPortfolioStore;
use crate::AppState;

/// Wires real use cases over a [`StubPortfolioStore`], so route tests
/// exercise the fallback policy end to end.
pub struct TestAppStateBuilder {
    store: StubPortfolioStore,
    fallback: FallbackContent,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: StubPortfolioStore::default(),
            fallback: FallbackContent::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: StubPortfolioStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackContent) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let fallback = Arc::new(self.fallback);

        web::Data::new(AppState {
            get_personal_info: Arc::new(GetPersonalInfoUseCase::new(
                store.clone(),
                Arc::clone(&fallback),
            )),
            get_education: Arc::new(GetEducationUseCase::new(
                store.clone(),
                Arc::clone(&fallback),
            )),
            get_skills: Arc::new(GetSkillsUseCase::new(store.clone(), Arc::clone(&fallback))),
            get_projects: Arc::new(GetProjectsUseCase::new(
                store.clone(),
                Arc::clone(&fallback),
            )),
            get_certificates: Arc::new(GetCertificatesUseCase::new(store.clone())),
            update_profile_picture: Arc::new(UpdateProfilePictureUseCase::new(store.clone())),
            update_resume: Arc::new(UpdateResumeUrlUseCase::new(store.clone())),
            add_certificate: Arc::new(AddCertificateUseCase::new(store.clone())),
            update_certificate: Arc::new(UpdateCertificateUseCase::new(store.clone())),
            delete_certificate: Arc::new(DeleteCertificateUseCase::new(store)),
        })
    }
}
