//! Credential store gateway.
//!
//! Two real operations against the `logins` collection: lookup-by-email and
//! insert-new-user. Lookups are exact-match on plaintext fields (see
//! DESIGN.md for the plaintext-storage caveat).

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::errors::AppError;
use crate::models::user::UserRecord;

/// Pluggable credential store. The process constructs one Mongo-backed
/// instance at startup and injects it into the handlers; tests substitute an
/// in-memory stub.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    /// Single exact-match query on both fields.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError>;

    async fn insert(&self, record: &UserRecord) -> Result<(), AppError>;
}

pub struct MongoCredentialStore {
    logins: Collection<UserRecord>,
}

impl MongoCredentialStore {
    pub fn new(db: &Database) -> Self {
        Self {
            logins: db.collection("logins"),
        }
    }
}

#[async_trait]
impl CredentialStore for MongoCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.logins.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        Ok(self
            .logins
            .find_one(doc! { "email": email, "password": password })
            .await?)
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), AppError> {
        self.logins.insert_one(record).await?;
        Ok(())
    }
}

/// Registers a new user. Uniqueness is enforced by lookup-before-insert:
/// at most one record per email.
pub async fn register(
    store: &dyn CredentialStore,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    if store.find_by_email(email).await?.is_some() {
        return Err(AppError::DuplicateUser);
    }
    store
        .insert(&UserRecord {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
}

/// Authenticates a user by exact (email, password) match.
pub async fn authenticate(
    store: &dyn CredentialStore,
    email: &str,
    password: &str,
) -> Result<UserRecord, AppError> {
    store
        .find_by_credentials(email, password)
        .await?
        .ok_or(AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// In-memory stand-in for the Mongo-backed store.
    struct MemoryStore {
        records: Mutex<Vec<UserRecord>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CredentialStore for MemoryStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().find(|r| r.email == email).cloned())
        }

        async fn find_by_credentials(
            &self,
            email: &str,
            password: &str,
        ) -> Result<Option<UserRecord>, AppError> {
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .find(|r| r.email == email && r.password == password)
                .cloned())
        }

        async fn insert(&self, record: &UserRecord) -> Result<(), AppError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let store = MemoryStore::new();

        assert!(register(&store, "a@b.com", "secret").await.is_ok());

        let err = register(&store, "a@b.com", "other").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let store = MemoryStore::new();
        register(&store, "a@b.com", "secret").await.unwrap();

        let err = authenticate(&store, "a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let store = MemoryStore::new();

        let err = authenticate(&store, "nobody@b.com", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_exact_match() {
        let store = MemoryStore::new();
        register(&store, "a@b.com", "secret").await.unwrap();

        let user = authenticate(&store, "a@b.com", "secret").await.unwrap();
        assert_eq!(user.email, "a@b.com");
    }
}
