use serde::Deserialize;

use super::repo_types::{ArmyChanges, NewArmy};

/// Body of `POST /armies/`. Unknown fields such as `id` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArmyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: i64,
}

/// Body of `PUT /armies/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateArmyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateArmyRequest> for NewArmy {
    fn from(r: CreateArmyRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            user_id: r.user_id,
        }
    }
}

impl From<UpdateArmyRequest> for ArmyChanges {
    fn from(r: UpdateArmyRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}
