use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::dimension::{Dimension, DimensionChanges, NewDimension};
use crate::error::{AppError, AppResult};
use crate::services::context::RequestContext;
use crate::store::DimensionStore;
use crate::validation::dimension::{validate_create_dimension, validate_update_dimension};

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateDimensionRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(custom(function = "crate::validation::rules::validate_hex_color"))]
    pub color_code: String,
    #[validate(custom(function = "crate::validation::rules::validate_not_blank"))]
    pub icon_name: String,
    pub display_order: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpdateDimensionRequest {
    pub name: Option<String>,
    pub color_code: Option<String>,
    pub icon_name: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// (name, icon, color) of the dimensions a new journal starts with.
pub const DEFAULT_DIMENSIONS: [(&str, &str, &str); 6] = [
    ("Health", "favorite", "#A8C3A9"),
    ("Work", "work", "#E89CAB"),
    ("Investing", "trending_up", "#81C784"),
    ("Reading", "menu_book", "#E8C996"),
    ("Spending", "credit_card", "#9DC5EF"),
    ("Other", "lightbulb", "#C3B1E1"),
];

pub struct DimensionsService;

impl DimensionsService {
    pub fn create<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        req: &CreateDimensionRequest,
    ) -> AppResult<Dimension> {
        req.validate()?;
        validate_create_dimension(&req.name, &req.color_code, &req.icon_name)?;

        let existing = store.list_dimensions(ctx.user_id)?;
        if existing
            .iter()
            .any(|d| d.name.eq_ignore_ascii_case(req.name.trim()))
        {
            return Err(AppError::conflict_with_code(
                "Dimension name already exists",
                Some("name".to_string()),
                "DIMENSION_NAME_EXISTS",
            ));
        }
        let next_order = existing.iter().map(|d| d.display_order).max().unwrap_or(0) + 1;

        let created = store.insert_dimension(&NewDimension {
            user_id: ctx.user_id,
            name: req.name.trim().to_string(),
            color_code: req.color_code.clone(),
            icon_name: req.icon_name.clone(),
            display_order: req.display_order.unwrap_or(next_order),
            is_active: true,
        })?;
        tracing::info!(user_id = %ctx.user_id, dimension_id = %created.id, name = %created.name, "Dimension created");
        Ok(created)
    }

    pub fn update<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        dimension_id: Uuid,
        req: &UpdateDimensionRequest,
    ) -> AppResult<Dimension> {
        let changes = DimensionChanges {
            name: req.name.as_ref().map(|n| n.trim().to_string()),
            color_code: req.color_code.clone(),
            icon_name: req.icon_name.clone(),
            display_order: req.display_order,
            is_active: req.is_active,
        };
        validate_update_dimension(&changes)?;
        let _existing = Self::get_by_id(store, ctx, dimension_id)?;

        let updated = store.update_dimension(dimension_id, &changes)?;
        tracing::info!(user_id = %ctx.user_id, dimension_id = %dimension_id, "Dimension updated");
        Ok(updated)
    }

    pub fn deactivate<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        dimension_id: Uuid,
    ) -> AppResult<Dimension> {
        Self::update(
            store,
            ctx,
            dimension_id,
            &UpdateDimensionRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
    }

    pub fn get_by_id<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
        dimension_id: Uuid,
    ) -> AppResult<Dimension> {
        store
            .find_dimension(dimension_id)?
            .filter(|d| d.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("dimension"))
    }

    pub fn list<S: DimensionStore + ?Sized>(store: &S, ctx: &RequestContext) -> AppResult<Vec<Dimension>> {
        store.list_dimensions(ctx.user_id)
    }

    pub fn list_active<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
    ) -> AppResult<Vec<Dimension>> {
        store.list_active_dimensions(ctx.user_id)
    }

    /// Creates the default set when the user has no dimensions yet; otherwise
    /// returns what exists.
    pub fn seed_defaults<S: DimensionStore + ?Sized>(
        store: &S,
        ctx: &RequestContext,
    ) -> AppResult<Vec<Dimension>> {
        let existing = store.list_dimensions(ctx.user_id)?;
        if !existing.is_empty() {
            return Ok(existing);
        }
        let mut created = Vec::with_capacity(DEFAULT_DIMENSIONS.len());
        for (order, (name, icon, color)) in DEFAULT_DIMENSIONS.iter().enumerate() {
            created.push(store.insert_dimension(&NewDimension {
                user_id: ctx.user_id,
                name: name.to_string(),
                color_code: color.to_string(),
                icon_name: icon.to_string(),
                display_order: order as i32 + 1,
                is_active: true,
            })?);
        }
        tracing::info!(user_id = %ctx.user_id, count = created.len(), "Default dimensions seeded");
        Ok(created)
    }
}
