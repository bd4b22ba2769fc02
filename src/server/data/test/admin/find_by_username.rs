use super::*;

/// Tests looking an admin up by username.
///
/// Expected: Ok(Some) for the stored admin and Ok(None) otherwise
#[tokio::test]
async fn finds_admin_by_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .username("coordenacao")
        .build()
        .await?;

    let repo = AdminRepository::new(db);

    let found = repo.find_by_username("coordenacao").await?;
    assert_eq!(found.map(|a| a.id), Some(admin.id));
    assert!(repo.find_by_username("someone-else").await?.is_none());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err when storing the same username twice
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let created = repo
        .create("triagem".to_string(), "$2b$10$hash".to_string())
        .await?;

    assert_eq!(created.role, "admin");
    assert!(repo
        .create("triagem".to_string(), "$2b$10$other".to_string())
        .await
        .is_err());

    Ok(())
}
