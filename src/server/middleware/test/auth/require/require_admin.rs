use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
