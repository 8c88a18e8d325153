use super::*;

/// Tests retrieving a study by identifier with its nested document.
///
/// Verifies that the repository returns the study row together with its
/// level and value rows.
///
/// Expected: Ok(Some(Study)) with nested levels and values
#[tokio::test]
async fn returns_study_with_nested_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::study::create_study(db).await?;
    let level_row = factory::study::create_level(db, &stored.id, 1).await?;
    factory::study::create_value(db, level_row.id, 1).await?;
    factory::study::create_value(db, level_row.id, 2).await?;

    let repo = StudyRepository::new(db);
    let result = repo.find_by_id(&stored.id).await?;

    assert!(result.is_some());
    let study = result.unwrap();
    assert_eq!(study.id, stored.id);
    assert_eq!(study.name, stored.name);
    assert_eq!(study.levels.len(), 1);
    assert_eq!(study.levels[0].name, level_row.name);
    assert_eq!(study.levels[0].values.len(), 2);

    Ok(())
}

/// Tests retrieving an identifier that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    let result = repo.find_by_id("no-such-study").await?;

    assert!(result.is_none());

    Ok(())
}
