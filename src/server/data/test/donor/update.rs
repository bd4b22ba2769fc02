use super::*;

/// Tests a partial donor update.
///
/// Verifies that only the supplied fields change and that `updated_at` moves forward.
///
/// Expected: Ok(Some) with name and blood type changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::donor::create_donor(db).await?;

    let repo = DonorRepository::new(db);
    let updated = repo
        .update(
            &donor.id,
            UpdateDonorParams {
                name: Some("Renata Moraes".to_string()),
                blood_type: Some(BloodType::BNegative),
                ..Default::default()
            },
        )
        .await?
        .expect("donor should exist");

    assert_eq!(updated.name, "Renata Moraes");
    assert_eq!(updated.blood_type, "B-");
    assert_eq!(updated.email, donor.email);
    assert_eq!(updated.phone, donor.phone);
    assert!(updated.updated_at >= donor.updated_at);

    Ok(())
}

/// Tests updating a donor that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let result = repo
        .update(
            "6f1c2d3e-0000-4000-8000-000000000000",
            UpdateDonorParams {
                name: Some("Nobody Here".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
