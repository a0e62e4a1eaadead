use tenday_backend::error::AppError;
use tenday_backend::services::profiles_service::{
    CreateProfileRequest, DEFAULT_NICKNAME, UpdateProfileRequest,
};
use tenday_backend::services::{ProfilesService, RequestContext};
use tenday_backend::store::MemoryStore;
use uuid::Uuid;

fn setup() -> (MemoryStore, RequestContext) {
    (MemoryStore::new(), RequestContext::for_user(Uuid::new_v4()))
}

#[test]
fn profile_is_created_once_with_a_default_nickname() {
    let (store, ctx) = setup();
    assert!(matches!(
        ProfilesService::get(&store, &ctx),
        Err(AppError::NotFound { .. })
    ));

    let created = ProfilesService::create(&store, &ctx, &CreateProfileRequest::default()).unwrap();
    assert_eq!(created.nickname, DEFAULT_NICKNAME);
    assert_eq!(created.user_id, ctx.user_id);
    assert_eq!(created.ai_service_provider, None);
    assert_eq!(ProfilesService::get(&store, &ctx).unwrap(), created);

    let again = ProfilesService::create(&store, &ctx, &CreateProfileRequest::default());
    assert!(matches!(again, Err(AppError::Conflict { .. })));
}

#[test]
fn update_changes_only_the_given_fields() {
    let (store, ctx) = setup();
    ProfilesService::create(
        &store,
        &ctx,
        &CreateProfileRequest {
            nickname: Some("  Ada  ".to_string()),
            avatar_url: Some("https://img.example.com/ada.png".to_string()),
            ai_service_provider: Some("deepseek".to_string()),
        },
    )
    .unwrap();

    let updated = ProfilesService::update(
        &store,
        &ctx,
        &UpdateProfileRequest {
            nickname: Some("Lovelace".to_string()),
            ai_service_provider: Some(None),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.nickname, "Lovelace");
    assert_eq!(updated.avatar_url.as_deref(), Some("https://img.example.com/ada.png"));
    assert_eq!(updated.ai_service_provider, None);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn invalid_profile_input_is_rejected() {
    let (store, ctx) = setup();
    let bad_avatar = CreateProfileRequest {
        avatar_url: Some("not a url".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ProfilesService::create(&store, &ctx, &bad_avatar),
        Err(AppError::Validation { .. })
    ));

    let unknown_provider = CreateProfileRequest {
        ai_service_provider: Some("oracle".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ProfilesService::create(&store, &ctx, &unknown_provider),
        Err(AppError::Validation { .. })
    ));

    ProfilesService::create(&store, &ctx, &CreateProfileRequest::default()).unwrap();
    assert!(matches!(
        ProfilesService::update(&store, &ctx, &UpdateProfileRequest::default()),
        Err(AppError::Validation { .. })
    ));
    let blank = UpdateProfileRequest {
        nickname: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ProfilesService::update(&store, &ctx, &blank),
        Err(AppError::Validation { .. })
    ));
    let bad_url = UpdateProfileRequest {
        avatar_url: Some(Some("nope".to_string())),
        ..Default::default()
    };
    assert!(matches!(
        ProfilesService::update(&store, &ctx, &bad_url),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn updating_a_missing_profile_is_not_found() {
    let (store, ctx) = setup();
    let req = UpdateProfileRequest {
        nickname: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ProfilesService::update(&store, &ctx, &req),
        Err(AppError::NotFound { .. })
    ));
}
