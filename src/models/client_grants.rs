//! Client grants: which APIs a client may request tokens for.

use super::wire::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Whether organizations can be used with client credentials exchanges
    /// for a grant. The service treats an unset value as `Deny`.
    pub enum OrganizationUsage {
        Deny => "deny",
        Allow => "allow",
        Require => "require",
    }
}

wire_enum! {
    /// The type of application access a client grant allows.
    pub enum ClientGrantSubjectType {
        Client => "client",
        User => "user",
    }
}

/// A client grant as returned by the Management API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientGrant {
    /// Identifier of the grant, set by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Audience (identifier) of the API the grant is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Identifier of the client the grant belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Granted scopes
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_usage: Option<OrganizationUsage>,
    /// If enabled, any organization can be used with this grant. Otherwise
    /// the grant must be assigned to organizations explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_organization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<ClientGrantSubjectType>,
    /// Types of `authorization_details` allowed for this grant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_details_types: Option<Vec<String>>,
    /// When enabled, every scope of the resource server is granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_all_scopes: Option<bool>,
}

/// Body of a client grant update. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientGrantUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_usage: Option<OrganizationUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_organization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_details_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_all_scopes: Option<bool>,
}
