//! Resource server access policies.

use super::wire::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Policy for user flows on a resource server.
    pub enum SubjectTypeAuthorizationUserPolicy {
        AllowAll => "allow_all",
        RequireClientGrant => "require_client_grant",
        DenyAll => "deny_all",
    }
}

wire_enum! {
    /// Policy for client flows on a resource server.
    pub enum SubjectTypeAuthorizationClientPolicy {
        RequireClientGrant => "require_client_grant",
        DenyAll => "deny_all",
    }
}

/// Application access permissions of a resource server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectTypeAuthorization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SubjectTypeAuthorizationUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<SubjectTypeAuthorizationClient>,
}

/// Access permissions for user flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectTypeAuthorizationUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SubjectTypeAuthorizationUserPolicy>,
}

/// Access permissions for client flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectTypeAuthorizationClient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SubjectTypeAuthorizationClientPolicy>,
}
