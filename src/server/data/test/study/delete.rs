use super::*;

/// Tests deleting a study removes the study row and its nested rows.
///
/// Expected: Ok with no remaining rows in any of the three tables
#[tokio::test]
async fn removes_study_and_nested_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::study::create_study(db).await?;
    let level_row = factory::study::create_level(db, &stored.id, 1).await?;
    factory::study::create_value(db, level_row.id, 1).await?;

    let repo = StudyRepository::new(db);
    repo.delete(&stored.id).await?;

    assert_eq!(entity::prelude::Study::find().count(db).await?, 0);
    assert_eq!(entity::prelude::StudyLevel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::StudyLevelValue::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an identifier that was never created.
///
/// Expected: Ok, no error surfaced
#[tokio::test]
async fn unknown_id_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    let result = repo.delete("no-such-study").await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests deleting one study leaves the others untouched.
///
/// Expected: Ok with the other study and its rows intact
#[tokio::test]
async fn leaves_other_studies_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::study::create_study(db).await?;
    let kept = factory::study::create_study(db).await?;
    factory::study::create_level(db, &kept.id, 1).await?;

    let repo = StudyRepository::new(db);
    repo.delete(&doomed.id).await?;

    let remaining = repo.find_by_id(&kept.id).await?;
    assert!(remaining.is_some());
    assert_eq!(remaining.unwrap().levels.len(), 1);

    Ok(())
}
