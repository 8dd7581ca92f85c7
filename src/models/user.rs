use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserCompact {
    pub id: UserId,
    pub href: Option<ItemUrl>,
    pub name: Option<UserName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: UserId,
    pub href: Option<ItemUrl>,
    pub name: Option<UserName>,
    pub email: Option<String>,
    pub date_last_active: Option<DateString>,
    pub date_created: Option<DateString>,
    pub href_runs: Option<ItemUrl>,
    pub href_projects: Option<ItemUrl>,
}
