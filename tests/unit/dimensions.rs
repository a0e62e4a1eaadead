use tenday_backend::error::AppError;
use tenday_backend::services::dimensions_service::{CreateDimensionRequest, UpdateDimensionRequest};
use tenday_backend::services::{DimensionsService, RequestContext};
use tenday_backend::store::MemoryStore;
use uuid::Uuid;

fn request(name: &str, color: &str) -> CreateDimensionRequest {
    CreateDimensionRequest {
        name: name.to_string(),
        color_code: color.to_string(),
        icon_name: "star".to_string(),
        display_order: None,
    }
}

#[test]
fn seeding_is_idempotent() {
    let store = MemoryStore::new();
    let ctx = RequestContext::for_user(Uuid::new_v4());

    let seeded = DimensionsService::seed_defaults(&store, &ctx).unwrap();
    let names: Vec<&str> = seeded.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Health", "Work", "Investing", "Reading", "Spending", "Other"]);

    let again = DimensionsService::seed_defaults(&store, &ctx).unwrap();
    assert_eq!(again.len(), 6);
    assert_eq!(DimensionsService::list(&store, &ctx).unwrap().len(), 6);
}

#[test]
fn create_appends_and_rejects_duplicates() {
    let store = MemoryStore::new();
    let ctx = RequestContext::for_user(Uuid::new_v4());
    DimensionsService::seed_defaults(&store, &ctx).unwrap();

    let music = DimensionsService::create(&store, &ctx, &request("Music", "#112233")).unwrap();
    assert_eq!(music.display_order, 7);
    assert!(music.is_active);

    assert!(matches!(
        DimensionsService::create(&store, &ctx, &request("health", "#112233")),
        Err(AppError::Conflict { .. })
    ));
    assert!(matches!(
        DimensionsService::create(&store, &ctx, &request("Art", "blue")),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn deactivated_dimensions_leave_the_active_list() {
    let store = MemoryStore::new();
    let ctx = RequestContext::for_user(Uuid::new_v4());
    let seeded = DimensionsService::seed_defaults(&store, &ctx).unwrap();

    DimensionsService::deactivate(&store, &ctx, seeded[0].id).unwrap();
    assert_eq!(DimensionsService::list_active(&store, &ctx).unwrap().len(), 5);

    let renamed = DimensionsService::update(
        &store,
        &ctx,
        seeded[1].id,
        &UpdateDimensionRequest {
            name: Some("Career".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(renamed.name, "Career");

    assert!(DimensionsService::update(&store, &ctx, seeded[1].id, &UpdateDimensionRequest::default()).is_err());

    let stranger = RequestContext::for_user(Uuid::new_v4());
    assert!(matches!(
        DimensionsService::deactivate(&store, &stranger, seeded[2].id),
        Err(AppError::NotFound { .. })
    ));
}
