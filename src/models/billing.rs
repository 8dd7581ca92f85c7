use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchasedProduct {
    pub purchase_id: PurchaseId,
    pub date_purchased: Option<DateString>,
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub persistence_status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Purchase {
    pub id: PurchaseId,
    pub status: Option<String>,
    pub refund_status: Option<String>,
    pub date_created: Option<DateString>,
    pub date_updated: Option<DateString>,
    pub invoice_number: Option<String>,
    pub amount: Option<f64>,
    pub amount_of_tax: Option<f64>,
    pub amount_total: Option<f64>,
    pub refund_secret: Option<String>,
    #[serde(default)]
    pub products: Vec<PurchasedProduct>,
}
