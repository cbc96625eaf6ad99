//! Wire and storage models. Field names follow the public JSON contract
//! (`publisher`, `domains`, `desktopAds`, `mobileAds`, `publisherName`).

use plist_derive::api_model;
use serde_json::Value;

/// A named website owned by exactly one publisher.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct Domain {
    /// Domain name, unique across every publisher.
    pub domain: String,
    /// Opaque desktop ad configuration.
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub desktop_ads: Value,
    /// Opaque mobile ad configuration.
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub mobile_ads: Value,
}

impl Domain {
    pub fn new(domain: impl Into<String>, desktop_ads: Value, mobile_ads: Value) -> Self {
        Self { domain: domain.into(), desktop_ads, mobile_ads }
    }

    /// True when both ad configurations are equal.
    #[must_use]
    pub fn same_ads(&self, other: &Self) -> bool {
        self.desktop_ads == other.desktop_ads && self.mobile_ads == other.mobile_ads
    }
}

/// A publisher with its domains in insertion order.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct Publisher {
    /// Publisher name, unique within the catalog.
    pub publisher: String,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl Publisher {
    pub fn new(publisher: impl Into<String>, domains: Vec<Domain>) -> Self {
        Self { publisher: publisher.into(), domains }
    }
}

/// Body of `POST /api/addPublisher`.
#[api_model(deny_unknown_fields = false)]
pub struct AddPublisherRequest {
    pub publisher: String,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl From<AddPublisherRequest> for Publisher {
    fn from(req: AddPublisherRequest) -> Self {
        Self { publisher: req.publisher, domains: req.domains }
    }
}

/// Body of `POST /api/addDomain`.
#[api_model(deny_unknown_fields = false)]
pub struct AddDomainRequest {
    pub domain: String,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub desktop_ads: Value,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub mobile_ads: Value,
    /// Publisher that will own the domain.
    pub publisher_name: String,
}

impl AddDomainRequest {
    /// Splits the request into the target publisher name and the new domain.
    #[must_use]
    pub fn into_parts(self) -> (String, Domain) {
        (self.publisher_name, Domain::new(self.domain, self.desktop_ads, self.mobile_ads))
    }
}

/// Body of `PUT /api/updateDomain`.
#[api_model(deny_unknown_fields = false)]
pub struct UpdateDomainRequest {
    /// The domain as the client last saw it.
    pub original_domain: Domain,
    /// The values to store.
    pub input_domain: Domain,
}

/// Success body for write operations.
#[api_model]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Failure body; `publisher` names the owner on domain conflicts.
#[api_model]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}
