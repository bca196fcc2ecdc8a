use serde::Deserialize;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{NewUser, User};

/// User lookup: `?email=<email>&password=<password>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let email_ok = match self.email.as_deref().filter(|e| !e.is_empty()) {
            Some(email) => user.has_email(email),
            None => true,
        };
        let password_ok = match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => user.password == password,
            None => true,
        };

        email_ok && password_ok
    }
}

impl Store {
    pub async fn list_users(&self, filter: &UserFilter) -> Vec<User> {
        let users: Vec<User> = self
            .load()
            .await
            .users
            .into_iter()
            .filter(|u| filter.matches(u))
            .collect();

        tracing::debug!(
            "User lookup for {:?}: {} found",
            filter.email,
            users.len()
        );
        users
    }

    /// First user matching both email and password
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        if email.is_empty() || password.is_empty() {
            return None;
        }

        let filter = UserFilter {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        self.list_users(&filter).await.into_iter().next()
    }

    /// Append a user, rejecting an email that is already registered
    pub async fn create_user(&self, new: NewUser) -> Result<User> {
        let user = self
            .update(|doc| {
                if doc.users.iter().any(|u| u.has_email(&new.email)) {
                    tracing::info!("Signup rejected, email already registered");
                    return Err(AppError::UserAlreadyExists);
                }

                let user = new.into_user(doc.next_user_id()?);
                doc.users.push(user.clone());
                Ok(user)
            })
            .await?;

        tracing::info!("User {} created ({})", user.id, user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store;
    use crate::models::Role;
    use tempfile::TempDir;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "secret".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = open_store(dir.path().join("store.json")).unwrap();

        store
            .create_user(new_user("Boss@Shop.com", Role::Manager))
            .await
            .unwrap();

        assert!(matches!(
            store.create_user(new_user("boss@shop.com", Role::Customer)).await,
            Err(AppError::UserAlreadyExists)
        ));
        assert_eq!(store.list_users(&UserFilter::default()).await.len(), 1);
    }

    #[tokio::test]
    async fn test_filters_and_authenticate() {
        let dir = TempDir::new().unwrap();
        let store = open_store(dir.path().join("store.json")).unwrap();
        store
            .create_user(new_user("a@shop.com", Role::Manager))
            .await
            .unwrap();
        store
            .create_user(new_user("b@shop.com", Role::Customer))
            .await
            .unwrap();

        let by_email = UserFilter {
            email: Some("B@SHOP.COM".to_string()),
            password: None,
        };
        let found = store.list_users(&by_email).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let user = store.authenticate("a@shop.com", "secret").await.unwrap();
        assert_eq!(user.role, Role::Manager);
        assert!(store.authenticate("a@shop.com", "wrong").await.is_none());
        assert!(store.authenticate("", "").await.is_none());
    }
}
