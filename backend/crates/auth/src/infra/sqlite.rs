//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::SqlitePool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Idempotent schema creation for the credential store.
///
/// Runs at startup instead of a migration system; re-running it is a no-op.
pub async fn init_schema(pool: &SqlitePool) -> AuthResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            role TEXT NOT NULL DEFAULT 'user',
            phone_number TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<i64> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                email,
                username,
                first_name,
                last_name,
                password_hash,
                is_active,
                role,
                phone_number,
                created_at,
                updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.password_hash.as_phc_string())
        .bind(true)
        .bind(user.role.code())
        .bind(&user.phone_number)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, email, username, first_name, last_name,
                password_hash, is_active, role, phone_number,
                created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, email, username, first_name, last_name,
                password_hash, is_active, role, phone_number,
                created_at, updated_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn update_password(&self, id: i64, hash: &HashedPassword) -> AuthResult<()> {
        sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(hash.as_phc_string())
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_phone_number(&self, id: i64, phone_number: &str) -> AuthResult<()> {
        sqlx::query("UPDATE users SET phone_number = ?, updated_at = ? WHERE id = ?")
            .bind(phone_number)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Row mapper for the users table
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    is_active: bool,
    role: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt password hash: {e}")))?;

        Ok(User {
            id: self.id,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash,
            role: UserRole::from_code(&self.role),
            is_active: self.is_active,
            phone_number: self.phone_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::login::{LoginInput, LoginUseCase};
    use crate::application::profile::{ChangePasswordInput, ProfileUseCase};
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::token::TokenService;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;

    async fn repo() -> Arc<SqliteAuthRepository> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        Arc::new(SqliteAuthRepository::new(pool))
    }

    fn alice() -> RegisterInput {
        RegisterInput {
            username: "alice".into(),
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            password: "Secret123".into(),
            role: "user".into(),
            phone_number: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn test_register_persists_hashed_password() {
        let repo = repo().await;
        let out = RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        let user = repo.find_by_id(out.user_id).await.unwrap().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active);
        // The digest never contains the plaintext
        assert!(!user.password_hash.as_phc_string().contains("Secret123"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username_rejected() {
        let repo = repo().await;
        let use_case = RegisterUseCase::new(repo.clone());
        use_case.execute(alice()).await.unwrap();

        let mut dup = alice();
        dup.email = "other@example.com".into();
        assert!(matches!(
            use_case.execute(dup).await,
            Err(AuthError::UsernameTaken)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let repo = repo().await;
        let use_case = RegisterUseCase::new(repo.clone());
        use_case.execute(alice()).await.unwrap();

        let mut dup = alice();
        dup.username = "alice2".into();
        assert!(matches!(
            use_case.execute(dup).await,
            Err(AuthError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let repo = repo().await;
        RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        let out = LoginUseCase::new(repo, tokens.clone())
            .execute(LoginInput {
                username: "alice".into(),
                password: "Secret123".into(),
            })
            .await
            .unwrap();

        let claims = tokens.verify(&out.access_token).unwrap();
        assert_eq!(claims.username, "alice");
        assert!(!claims.is_admin());
    }

    #[tokio::test]
    async fn test_login_wrong_password_rejected() {
        let repo = repo().await;
        RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        let result = LoginUseCase::new(repo, tokens)
            .execute(LoginInput {
                username: "alice".into(),
                password: "WrongPassword".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_rejected() {
        let repo = repo().await;
        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        let result = LoginUseCase::new(repo, tokens)
            .execute(LoginInput {
                username: "nobody".into(),
                password: "Secret123".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_change_password_wrong_current_leaves_hash_intact() {
        let repo = repo().await;
        let out = RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        let profile = ProfileUseCase::new(repo.clone());
        let result = profile
            .change_password(
                out.user_id,
                ChangePasswordInput {
                    password: "NotTheCurrent".into(),
                    new_password: "Fresh456".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(AuthError::PasswordChangeRejected)));

        // Old password still logs in
        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        assert!(
            LoginUseCase::new(repo, tokens)
                .execute(LoginInput {
                    username: "alice".into(),
                    password: "Secret123".into(),
                })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let repo = repo().await;
        let out = RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        ProfileUseCase::new(repo.clone())
            .change_password(
                out.user_id,
                ChangePasswordInput {
                    password: "Secret123".into(),
                    new_password: "Fresh456".into(),
                },
            )
            .await
            .unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        let login = LoginUseCase::new(repo, tokens);
        assert!(matches!(
            login
                .execute(LoginInput {
                    username: "alice".into(),
                    password: "Secret123".into(),
                })
                .await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(
            login
                .execute(LoginInput {
                    username: "alice".into(),
                    password: "Fresh456".into(),
                })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_change_phone_number() {
        let repo = repo().await;
        let out = RegisterUseCase::new(repo.clone()).execute(alice()).await.unwrap();

        ProfileUseCase::new(repo.clone())
            .change_phone_number(out.user_id, "555-0199")
            .await
            .unwrap();

        let user = repo.find_by_id(out.user_id).await.unwrap().unwrap();
        assert_eq!(user.phone_number, "555-0199");
    }
}
