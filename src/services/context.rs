use uuid::Uuid;

/// Identity of the caller; every service call is scoped to this user.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub user_id: Uuid,
}

impl RequestContext {
    pub fn for_user(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
