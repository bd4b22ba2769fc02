use super::*;

/// Tests booking an appointment.
///
/// Expected: Ok with a UUID id and the status label stored
#[tokio::test]
async fn creates_scheduling() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scheduling)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc.with_ymd_and_hms(2030, 5, 4, 13, 30, 0).unwrap();

    let repo = SchedulingRepository::new(db);
    let scheduling = repo
        .create(CreateSchedulingParams {
            user_id: "donor-42".to_string(),
            scheduled_at: at,
            location: Some("Hemocentro Central".to_string()),
            status: SchedulingStatus::Scheduled,
        })
        .await?;

    assert!(uuid::Uuid::parse_str(&scheduling.id).is_ok());
    assert_eq!(scheduling.scheduled_at, at);
    assert_eq!(scheduling.status, "scheduled");

    Ok(())
}

/// Tests listing appointments in chronological order.
///
/// Expected: Ok with the earliest appointment first
#[tokio::test]
async fn lists_by_appointment_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scheduling)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchedulingRepository::new(db);
    for day in [20, 3, 11] {
        repo.create(CreateSchedulingParams {
            user_id: format!("donor-{day}"),
            scheduled_at: Utc.with_ymd_and_hms(2030, 1, day, 9, 0, 0).unwrap(),
            location: None,
            status: SchedulingStatus::Scheduled,
        })
        .await?;
    }

    let users: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|s| s.user_id)
        .collect();

    assert_eq!(users, vec!["donor-3", "donor-11", "donor-20"]);

    Ok(())
}
