use super::*;


/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create regular user
    let user = factory::user::UserFactory::new(db).admin(false).build().await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check with empty permissions list
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.email, user.email);

    Ok(())
}

/// Tests unauthenticated request is rejected.
///
/// Verifies that the AuthGuard denies access when the session carries
/// no user id at all.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests session referencing a deleted user is rejected.
///
/// Verifies that the AuthGuard denies access when the session user id
/// has no matching database record.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_stale_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Session points at a user that was never created
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
