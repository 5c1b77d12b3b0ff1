use crate::portfolio::application::ports::outgoing::{PortfolioStore, PortfolioStoreError};
use crate::portfolio::domain::entities::PersonalInfo;

/// Writes never fall back: the caller must know whether the mutation
/// happened.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePersonalInfoError {
    /// The singleton row (id = 1) does not exist. Updates never insert.
    RecordMissing,
    StoreError(String),
}

#[derive(Debug, Clone)]
pub struct UpdateProfilePictureUseCase<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> UpdateProfilePictureUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
pub trait IUpdateProfilePictureUseCase: Send + Sync {
    async fn execute(&self, url: &str) -> Result<PersonalInfo, UpdatePersonalInfoError>;
}

#[async_trait::async_trait]
impl<S> IUpdateProfilePictureUseCase for UpdateProfilePictureUseCase<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, url: &str) -> Result<PersonalInfo, UpdatePersonalInfoError> {
        self.store
            .set_profile_picture(url)
            .await
            .map_err(|PortfolioStoreError::Database(msg)| {
                UpdatePersonalInfoError::StoreError(msg)
            })?
            .ok_or(UpdatePersonalInfoError::RecordMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_personal_info;
    use crate::tests::support::stubs::StubPortfolioStore;

    #[tokio::test]
    async fn updates_picture_on_singleton_row() {
        let store = StubPortfolioStore {
            personal_info: Some(sample_personal_info()),
            ..Default::default()
        };
        let use_case = UpdateProfilePictureUseCase::new(store);

        let updated = use_case
            .execute("https://cdn.example.dev/me.png")
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(
            updated.profile_picture_url.as_deref(),
            Some("https://cdn.example.dev/me.png")
        );
    }

    #[tokio::test]
    async fn second_update_wins() {
        let store = StubPortfolioStore {
            personal_info: Some(sample_personal_info()),
            ..Default::default()
        };
        let use_case = UpdateProfilePictureUseCase::new(store);

        use_case.execute("https://cdn.example.dev/a.png").await.unwrap();
        let updated = use_case.execute("https://cdn.example.dev/b.png").await.unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(
            updated.profile_picture_url.as_deref(),
            Some("https://cdn.example.dev/b.png")
        );
    }

    #[tokio::test]
    async fn missing_singleton_row_is_an_error() {
        let use_case = UpdateProfilePictureUseCase::new(StubPortfolioStore::default());

        let result = use_case.execute("https://cdn.example.dev/me.png").await;

        assert_eq!(result, Err(UpdatePersonalInfoError::RecordMissing));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = StubPortfolioStore {
            personal_info: Some(sample_personal_info()),
            fail_writes: true,
            ..Default::default()
        };
        let use_case = UpdateProfilePictureUseCase::new(store);

        match use_case.execute("https://cdn.example.dev/me.png").await {
            Err(UpdatePersonalInfoError::StoreError(_)) => {}
            other => panic!("expected StoreError, got {other:?}"),
        }
    }
}
