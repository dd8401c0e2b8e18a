//! Authentication service for account registration and credential checks.
//!
//! Handles the full registration flow (input validation, admin code redemption,
//! password hashing, duplicate email detection) and login verification against
//! the stored Argon2 hash. Session handling stays in the controller layer; this
//! service only decides whether credentials are acceptable.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    dto::{
        api::FieldErrorDto,
        auth::{LoginDto, RegisterDto},
    },
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{CreateUserParams, User},
    service::{admin::code::AdminCodeService, validation},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Normalizes the submitted fields (trimmed name, lowercased email, empty
    /// phone treated as absent), validates them, and hashes the password before
    /// it touches the database. A valid admin code grants the account admin
    /// privileges and consumes the code; an invalid or missing code results in
    /// a regular account.
    ///
    /// # Arguments
    /// - `dto`: Registration data as submitted by the client
    /// - `admin_codes`: Admin code service holding the one-time setup code
    ///
    /// # Returns
    /// - `Ok(User)`: The created account
    /// - `Err(AppError)`: Validation failure, duplicate email, or database error
    pub async fn register(
        &self,
        dto: RegisterDto,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_lowercase();
        let phone = dto
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);

        let mut errors = Vec::new();

        if name.chars().count() < 2 {
            errors.push(FieldErrorDto::new(
                "name",
                "Name is required and must be at least 2 characters",
            ));
        }
        if !validation::is_valid_email(&email) {
            errors.push(FieldErrorDto::new("email", "Valid email is required"));
        }
        if dto.password.chars().count() < 8 {
            errors.push(FieldErrorDto::new(
                "password",
                "Password must be at least 8 characters",
            ));
        }
        if let Some(phone) = &phone {
            if !validation::is_valid_phone(phone) {
                errors.push(FieldErrorDto::new(
                    "phone",
                    "Phone number must be at least 10 digits",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::new(errors).into());
        }

        // An invalid or expired code downgrades the account to non-admin
        // instead of failing registration.
        let admin = match &dto.admin_code {
            Some(code) => admin_codes.validate_and_consume(code).await,
            None => false,
        };

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(dto.password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?
            .to_string();

        match repo
            .create(CreateUserParams {
                name,
                email,
                password_hash,
                phone,
                admin,
            })
            .await
        {
            Ok(user) => Ok(user),
            // Two concurrent registrations can both pass the lookup above;
            // the unique index on email decides the winner.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Conflict("Email already registered".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies login credentials and returns the matching account.
    ///
    /// Unknown email addresses and wrong passwords produce the same error so
    /// the response does not reveal which one failed.
    ///
    /// # Arguments
    /// - `dto`: Login credentials as submitted by the client
    ///
    /// # Returns
    /// - `Ok(User)`: Credentials matched a registered account
    /// - `Err(AppError)`: Invalid credentials or database error
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();

        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        if Argon2::default()
            .verify_password(dto.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
