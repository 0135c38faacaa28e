use anyhow::Result;
use skilled_helpers::adapters::advisor::KeywordAdvisor;
use skilled_helpers::domain::model::{Focus, View, WorkerSubmission};
use skilled_helpers::{open_directory, AppConfig, CatalogError, CategoryFilter, WorkerCategory};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.data_dir = dir.path().to_string_lossy().into_owned();
    config
}

fn carpenter() -> WorkerSubmission {
    WorkerSubmission {
        name: "Joseph".to_string(),
        category: "Carpenter".to_string(),
        services: "Door repair, Custom shelves".to_string(),
        description: "Woodwork for homes".to_string(),
        hourly_rate: "280".to_string(),
        location: "Kochi".to_string(),
        phone: "+91 90000 11111".to_string(),
        image_url: String::new(),
    }
}

#[test]
fn test_added_worker_is_first_and_persisted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_for(&temp_dir);

    let mut directory = open_directory(&config)?;
    let before: Vec<String> = directory
        .store()
        .list_workers()
        .iter()
        .map(|w| w.id.clone())
        .collect();

    let added = directory.request_add_worker(&carpenter())?;
    assert_eq!(added.focus, Focus::Directory(CategoryFilter::All));
    assert!(!before.contains(&added.entity.id));

    let after: Vec<String> = directory
        .store()
        .list_workers()
        .iter()
        .map(|w| w.id.clone())
        .collect();
    assert_eq!(after[0], added.entity.id);
    assert_eq!(&after[1..], &before[..]);

    let reopened = open_directory(&config)?;
    assert_eq!(reopened.store().list_workers()[0], added.entity);
    Ok(())
}

#[test]
fn test_search_finds_new_worker_by_service_tag() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut directory = open_directory(&config_for(&temp_dir))?;
    directory.request_add_worker(&carpenter())?;

    directory.select_category(WorkerCategory::Plumber.into());
    directory.submit_search("SHELVES");

    assert_eq!(directory.state().category, CategoryFilter::All);
    let visible = directory.visible_workers();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Joseph");
    Ok(())
}

#[test]
fn test_rejected_submissions_leave_store_alone() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut directory = open_directory(&config_for(&temp_dir))?;
    let size = directory.store().list_workers().len();

    let mut nameless = carpenter();
    nameless.name = "  ".to_string();
    assert!(matches!(
        directory.request_add_worker(&nameless),
        Err(CatalogError::MissingFieldError { .. })
    ));

    let mut wrong_category = carpenter();
    wrong_category.category = "Astronaut".to_string();
    assert!(matches!(
        directory.request_add_worker(&wrong_category),
        Err(CatalogError::UnknownCategoryError { .. })
    ));

    assert_eq!(directory.store().list_workers().len(), size);
    assert!(!temp_dir.path().join("skilledHelpers_workers_v1.json").exists());
    Ok(())
}

#[test]
fn test_request_filter_round() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut directory = open_directory(&config_for(&temp_dir))?;

    let all = directory.request_filter(CategoryFilter::All, "");
    assert_eq!(all.len(), 3);
    assert_eq!(directory.request_filter(CategoryFilter::All, "   "), all);
    assert!(directory
        .request_filter(WorkerCategory::Gardener.into(), "")
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_keyword_suggestion_sets_category() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut directory = open_directory(&config_for(&temp_dir))?;
    directory.change_view(View::About);

    let category = directory
        .request_category_suggestion(&KeywordAdvisor, "water leaking under the sink pipe")
        .await?;

    assert_eq!(category, CategoryFilter::Only(WorkerCategory::Plumber));
    assert_eq!(directory.state().view, View::Home);
    assert_eq!(directory.visible_workers().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_blank_symptoms_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut directory = open_directory(&config_for(&temp_dir))?;

    let result = directory
        .request_category_suggestion(&KeywordAdvisor, "   ")
        .await;
    assert!(matches!(result, Err(CatalogError::MissingFieldError { .. })));
    assert_eq!(directory.state().category, CategoryFilter::All);
    Ok(())
}

#[test]
fn test_purge_legacy_on_open() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("skilledHelpers_workers.json"), "[]")?;

    let mut config = config_for(&temp_dir);
    config.storage.purge_legacy = true;
    let directory = open_directory(&config)?;

    assert_eq!(directory.store().list_workers().len(), 3);
    assert!(!temp_dir.path().join("skilledHelpers_workers.json").exists());
    Ok(())
}
