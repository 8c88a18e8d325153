use super::*;

/// Tests creating a new study without any levels.
///
/// Verifies that the repository successfully creates a new study record with
/// the specified identifier, name, description, and creator, and that the
/// returned document matches what was stored.
///
/// Expected: Ok with study created
#[tokio::test]
async fn creates_study_without_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    let result = repo.upsert(study_doc("study-a", "Test Study", vec![])).await;

    assert!(result.is_ok());
    let study = result.unwrap();
    assert_eq!(study.id, "study-a");
    assert_eq!(study.name, "Test Study");
    assert!(study.levels.is_empty());

    // Verify study exists in database
    let db_study = entity::prelude::Study::find_by_id("study-a").one(db).await?;
    assert!(db_study.is_some());
    assert_eq!(db_study.unwrap().name, "Test Study");

    Ok(())
}

/// Tests creating a study with nested levels and values.
///
/// Verifies that the repository creates the study row and its associated
/// level and value rows with the caller-supplied ordering indices.
///
/// Expected: Ok with study, levels, and values created
#[tokio::test]
async fn creates_study_with_levels_and_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = vec![
        level(1, "Dose", vec![value(1, "Low"), value(2, "High")]),
        level(2, "Duration", vec![value(1, "Short")]),
    ];

    let repo = StudyRepository::new(db);
    let study = repo
        .upsert(study_doc("study-b", "Dose Response", levels))
        .await?;

    assert_eq!(study.levels.len(), 2);
    assert_eq!(study.levels[0].name, "Dose");
    assert_eq!(study.levels[0].values.len(), 2);
    assert_eq!(study.levels[1].values.len(), 1);

    // Verify level rows were created
    let db_levels = entity::prelude::StudyLevel::find()
        .filter(entity::study_level::Column::StudyId.eq("study-b"))
        .all(db)
        .await?;
    assert_eq!(db_levels.len(), 2);

    let dose = db_levels.iter().find(|l| l.name == "Dose").unwrap();
    let db_values = entity::prelude::StudyLevelValue::find()
        .filter(entity::study_level_value::Column::LevelId.eq(dose.id))
        .all(db)
        .await?;
    assert_eq!(db_values.len(), 2);

    Ok(())
}

/// Tests upserting an existing identifier replaces the stored document.
///
/// Verifies that a second upsert under the same identifier updates the study
/// row in place and replaces the level and value rows wholesale rather than
/// accumulating them.
///
/// Expected: Ok with a single study holding only the new levels
#[tokio::test]
async fn replaces_existing_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    repo.upsert(study_doc(
        "study-c",
        "Before",
        vec![level(1, "Old Level", vec![value(1, "Old Value")])],
    ))
    .await?;

    let replaced = repo
        .upsert(study_doc(
            "study-c",
            "After",
            vec![level(1, "New Level", vec![])],
        ))
        .await?;

    assert_eq!(replaced.name, "After");
    assert_eq!(replaced.levels.len(), 1);
    assert_eq!(replaced.levels[0].name, "New Level");

    // Still a single study row
    let study_count = entity::prelude::Study::find().count(db).await?;
    assert_eq!(study_count, 1);

    // Old nested rows are gone
    let level_count = entity::prelude::StudyLevel::find().count(db).await?;
    assert_eq!(level_count, 1);
    let value_count = entity::prelude::StudyLevelValue::find().count(db).await?;
    assert_eq!(value_count, 0);

    Ok(())
}

/// Tests that levels and values read back in the order they were supplied.
///
/// Ordering indices are caller-supplied and not re-sequenced; the stored
/// sequence is the supplied sequence regardless of the index values.
///
/// Expected: Ok with sequence preserved
#[tokio::test]
async fn preserves_supplied_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let levels = vec![
        level(5, "Fifth", vec![value(9, "Nine"), value(3, "Three")]),
        level(2, "Second", vec![]),
    ];

    let repo = StudyRepository::new(db);
    let study = repo.upsert(study_doc("study-d", "Ordered", levels)).await?;

    assert_eq!(study.levels[0].order, 5);
    assert_eq!(study.levels[1].order, 2);
    assert_eq!(study.levels[0].values[0].order, 9);
    assert_eq!(study.levels[0].values[1].order, 3);

    Ok(())
}
