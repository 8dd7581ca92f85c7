use super::base::BaseApi;
use crate::errors::RequestError;
use crate::models::{Purchase, PurchasedProduct};
use crate::params::{HeaderParams, ParamValue, QueryParameters, QueryParams};
use crate::transport::{HttpTransport, Transport};
use crate::types::{AccessToken, ApiServerUrl, Method, PurchaseIdRef};

/// Endpoints of the billing server, which is separate from the main API server.
#[derive(Debug, Clone)]
pub struct BillingApi<T: Transport = HttpTransport> {
    base: BaseApi<T>,
}

impl BillingApi<HttpTransport> {
    pub fn new(access_token: impl Into<AccessToken>, server_url: impl Into<ApiServerUrl>) -> Self {
        Self::from(BaseApi::new(access_token, server_url))
    }
}

impl<T: Transport> From<BaseApi<T>> for BillingApi<T> {
    fn from(base: BaseApi<T>) -> Self {
        Self { base }
    }
}

impl<T: Transport> BillingApi<T> {
    pub fn base(&self) -> &BaseApi<T> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseApi<T> {
        &mut self.base
    }

    pub fn get_purchase_by_id(&self, id: &PurchaseIdRef) -> Result<Purchase, RequestError> {
        self.base.request(
            &format!("purchases/{}", id),
            Method::Get,
            &QueryParams::new(),
            &HeaderParams::new(),
            None,
            false,
        )
    }

    /// Products purchased by the current user, filtered by tags or product IDs.
    pub fn get_user_products(
        &self,
        query: &QueryParameters,
    ) -> Result<Vec<PurchasedProduct>, RequestError> {
        self.base.request_list(
            "users/current/products",
            Method::Get,
            query.parameter_dict(),
            &HeaderParams::new(),
        )
    }

    /// Refund a purchase. Requires the refund secret given when the purchase was made.
    pub fn refund_purchase(
        &self,
        purchase_id: &PurchaseIdRef,
        refund_secret: &str,
        comment: Option<&str>,
    ) -> Result<Purchase, RequestError> {
        let mut query = QueryParams::from([(
            "RefundSecret".to_string(),
            ParamValue::from(refund_secret),
        )]);
        if let Some(comment) = comment {
            query.insert("Comment".to_string(), comment.into());
        }
        self.base.request(
            &format!("purchases/{}/refund", purchase_id),
            Method::Post,
            &query,
            &HeaderParams::new(),
            None,
            true,
        )
    }
}
