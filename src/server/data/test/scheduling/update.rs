use super::*;

/// Tests cancelling an appointment through a partial update.
///
/// Expected: Ok(Some) with only the status changed
#[tokio::test]
async fn updates_status_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scheduling)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scheduling = factory::scheduling::SchedulingFactory::new(db)
        .location(Some("Unidade Norte".to_string()))
        .build()
        .await?;

    let repo = SchedulingRepository::new(db);
    let updated = repo
        .update(UpdateSchedulingParams {
            id: scheduling.id.clone(),
            user_id: None,
            scheduled_at: None,
            location: None,
            status: Some(SchedulingStatus::Canceled),
        })
        .await?
        .expect("scheduling should exist");

    assert_eq!(updated.status, "canceled");
    assert_eq!(updated.user_id, scheduling.user_id);
    assert_eq!(updated.location.as_deref(), Some("Unidade Norte"));

    Ok(())
}

/// Tests updating and deleting an appointment that doesn't exist.
///
/// Expected: Ok(None) from update and Ok(false) from delete
#[tokio::test]
async fn missing_scheduling_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scheduling)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchedulingRepository::new(db);
    let id = "0b4b5c7e-1111-4000-8000-000000000000".to_string();

    let updated = repo
        .update(UpdateSchedulingParams {
            id: id.clone(),
            user_id: Some("donor-1".to_string()),
            scheduled_at: None,
            location: None,
            status: None,
        })
        .await?;

    assert!(updated.is_none());
    assert!(!repo.delete(&id).await?);

    Ok(())
}
