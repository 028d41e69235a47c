use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Army row in the `army` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Army {
    pub id: i64,
    #[sqlx(rename = "title")]
    pub name: String,
    pub description: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "createTime", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "modifiedTime", with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,
    pub is_deleted: bool,
}

/// Insert input. Server-owned columns have no field here.
#[derive(Debug, Clone)]
pub struct NewArmy {
    pub name: String,
    pub description: String,
    pub user_id: i64,
}

/// The only columns an update may touch.
#[derive(Debug, Clone)]
pub struct ArmyChanges {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn army_serializes_with_wire_names() {
        let army = Army {
            id: 3,
            name: "Ultramarines".into(),
            description: "Blue boys".into(),
            user_id: 7,
            created_at: datetime!(2024-05-01 10:00:00 UTC),
            modified_at: datetime!(2024-05-02 11:30:00 UTC),
            is_deleted: false,
        };

        let json = serde_json::to_value(&army).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Ultramarines");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["createTime"], "2024-05-01T10:00:00Z");
        assert_eq!(json["modifiedTime"], "2024-05-02T11:30:00Z");
        assert_eq!(json["isDeleted"], false);
        assert!(json.get("user_id").is_none());
    }
}
