use super::UserCompact;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    pub id: ProjectId,
    pub href: Option<ItemUrl>,
    pub name: String,
    pub href_samples: Option<ItemUrl>,
    pub href_app_results: Option<ItemUrl>,
    #[serde(rename = "HrefBaseSpaceUI")]
    pub href_base_space_ui: Option<HrefUrl>,
    pub date_created: Option<DateString>,
    pub user_owned_by: Option<UserCompact>,
}

