use super::*;

/// Tests creating a donor.
///
/// Verifies that the repository generates a UUID, stores the blood type and gender
/// labels, and serializes contact preferences into the JSON column.
///
/// Expected: Ok with donor persisted
#[tokio::test]
async fn creates_donor_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let donor = repo
        .create(donor_params("Carlos Andrade", BloodType::AbNegative))
        .await?;

    assert!(uuid::Uuid::parse_str(&donor.id).is_ok());
    assert_eq!(donor.blood_type, "AB-");
    assert_eq!(donor.gender, "Masculino");
    assert_eq!(
        donor.contact_preferences,
        Some(serde_json::json!(["email", "whatsapp"]))
    );
    assert_eq!(donor.created_at, donor.updated_at);

    let stored = entity::prelude::Donor::find_by_id(donor.id.clone())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that two donors never share an id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let first = repo.create(donor_params("Ana Beatriz", BloodType::APositive)).await?;
    let second = repo.create(donor_params("Bruno Costa", BloodType::APositive)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
