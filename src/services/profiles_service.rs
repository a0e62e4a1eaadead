use serde::Deserialize;
use validator::{Validate, ValidateUrl};

use crate::db::models::user_profile::{NewUserProfile, ProfileChanges, UserProfile};
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::store::ProfileStore;
use crate::validation::profile::{validate_create_profile, validate_update_profile};

pub const DEFAULT_NICKNAME: &str = "Pioneer";

#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "Nickname must be between 1 and 50 characters"))]
    pub nickname: Option<String>,
    #[validate(url(message = "Avatar must be a URL"))]
    pub avatar_url: Option<String>,
    pub ai_service_provider: Option<String>,
}

/// `Some(None)` clears a field.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "Nickname must be between 1 and 50 characters"))]
    pub nickname: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub ai_service_provider: Option<Option<String>>,
}

pub struct ProfilesService;

impl ProfilesService {
    pub fn create<S: ProfileStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &CreateProfileRequest,
    ) -> AppResult<UserProfile> {
        req.validate()?;
        let nickname = req
            .nickname
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_NICKNAME)
            .to_string();
        validate_create_profile(&nickname, req.ai_service_provider.as_deref())?;

        if store.find_profile(ctx.user_id)?.is_some() {
            return Err(AppError::conflict_with_code(
                "Profile already exists",
                None,
                "PROFILE_EXISTS",
            ));
        }

        let created = store.insert_profile(&NewUserProfile {
            user_id: ctx.user_id,
            nickname,
            avatar_url: req.avatar_url.clone(),
            ai_service_provider: req.ai_service_provider.clone(),
        })?;
        tracing::info!(user_id = %ctx.user_id, profile_id = %created.id, "Profile created");
        Ok(created)
    }

    pub fn get<S: ProfileStore + ?Sized>(store: &S, ctx: &RequestContext) -> AppResult<UserProfile> {
        store
            .find_profile(ctx.user_id)?
            .ok_or_else(|| AppError::not_found("profile"))
    }

    pub fn update<S: ProfileStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &UpdateProfileRequest,
    ) -> AppResult<UserProfile> {
        req.validate()?;
        if let Some(Some(url)) = req.avatar_url.as_ref() {
            if !url.validate_url() {
                return Err(AppError::validation("Avatar must be a URL"));
            }
        }
        let changes = ProfileChanges {
            nickname: req.nickname.as_ref().map(|n| n.trim().to_string()),
            avatar_url: req.avatar_url.clone(),
            ai_service_provider: req.ai_service_provider.clone(),
        };
        validate_update_profile(&changes)?;
        let _existing = Self::get(store, ctx)?;

        let updated = store.update_profile(ctx.user_id, &changes)?;
        tracing::info!(user_id = %ctx.user_id, "Profile updated");
        Ok(updated)
    }
}
