use super::UserCompact;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunCompact {
    pub id: RunId,
    pub href: Option<ItemUrl>,
    pub name: Option<String>,
    pub experiment_name: Option<String>,
    pub status: Option<RunStatus>,
    pub date_created: Option<DateString>,
    pub user_owned_by: Option<UserCompact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Run {
    pub id: RunId,
    pub href: Option<ItemUrl>,
    #[serde(rename = "HrefBaseSpaceUI")]
    pub href_base_space_ui: Option<HrefUrl>,
    pub name: Option<String>,
    pub experiment_name: Option<String>,
    pub status: Option<RunStatus>,
    pub date_created: Option<DateString>,
    pub user_owned_by: Option<UserCompact>,
    pub user_uploaded_by: Option<UserCompact>,
    pub href_files: Option<ItemUrl>,
    pub href_samples: Option<ItemUrl>,
}
