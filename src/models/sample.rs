use super::UserCompact;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    pub id: SampleId,
    pub href: Option<ItemUrl>,
    pub name: Option<String>,
    /// Identifier given by the user, unlike [Sample::id] which is given by the platform.
    pub sample_id: Option<String>,
    pub status: Option<String>,
    pub status_summary: Option<String>,
    pub num_reads_raw: Option<u64>,
    #[serde(rename = "NumReadsPF")]
    pub num_reads_pf: Option<u64>,
    pub is_paired_end: Option<bool>,
    pub read1: Option<u32>,
    pub read2: Option<u32>,
    pub date_created: Option<DateString>,
    pub user_owned_by: Option<UserCompact>,
    pub href_files: Option<ItemUrl>,
}
