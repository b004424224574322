//! Management and Authentication API data types.
//!
//! Request and response bodies for the resources this crate works with, and
//! the enums those bodies carry. Enum wire strings are declared once per
//! enum through [`wire::WireEnum`].

pub mod client_grants;
pub mod connections;
pub mod logout;
pub mod organizations;
pub mod resource_servers;
pub mod wire;

pub use client_grants::{ClientGrant, ClientGrantSubjectType, ClientGrantUpdateRequest, OrganizationUsage};
pub use connections::SetUserRootAttributes;
pub use logout::LogoutInitiators;
pub use organizations::{
    BrandingColors, OrganizationBranding, OrganizationUpdateRequest, TokenQuota,
    TokenQuotaClientCredentials,
};
pub use resource_servers::{
    SubjectTypeAuthorization, SubjectTypeAuthorizationClient,
    SubjectTypeAuthorizationClientPolicy, SubjectTypeAuthorizationUser,
    SubjectTypeAuthorizationUserPolicy,
};
pub use wire::WireEnum;
