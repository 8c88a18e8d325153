use super::*;

/// Tests listing when the collection is empty.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_studies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    let studies = repo.find_all().await?;

    assert!(studies.is_empty());

    Ok(())
}

/// Tests that listing returns every stored study exactly once.
///
/// Order of the result is not asserted; only membership and multiplicity.
///
/// Expected: Ok with all created studies present once each
#[tokio::test]
async fn returns_every_study_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::study::create_study(db).await?;
    let second = factory::study::create_study(db).await?;
    let third = factory::study::create_study(db).await?;

    let repo = StudyRepository::new(db);
    let studies = repo.find_all().await?;

    assert_eq!(studies.len(), 3);
    for stored in [&first, &second, &third] {
        assert_eq!(
            studies.iter().filter(|s| s.id == stored.id).count(),
            1,
            "study {} should appear exactly once",
            stored.id
        );
    }

    Ok(())
}

/// Tests that nested documents are populated per study in the listing.
///
/// Expected: Ok with each study carrying only its own levels
#[tokio::test]
async fn keeps_nested_documents_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_study_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::study::create_study(db).await?;
    let second = factory::study::create_study(db).await?;
    factory::study::create_level(db, &first.id, 1).await?;
    factory::study::create_level(db, &first.id, 2).await?;
    factory::study::create_level(db, &second.id, 1).await?;

    let repo = StudyRepository::new(db);
    let studies = repo.find_all().await?;

    let first_listed = studies.iter().find(|s| s.id == first.id).unwrap();
    let second_listed = studies.iter().find(|s| s.id == second.id).unwrap();
    assert_eq!(first_listed.levels.len(), 2);
    assert_eq!(second_listed.levels.len(), 1);

    Ok(())
}
