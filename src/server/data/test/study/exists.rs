use super::*;

/// Tests the existence check for a stored identifier.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_stored_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::study::create_study(db).await?;

    let repo = StudyRepository::new(db);
    assert!(repo.exists(&stored.id).await?);

    Ok(())
}

/// Tests the existence check for an unknown identifier.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    assert!(!repo.exists("no-such-study").await?);

    Ok(())
}
