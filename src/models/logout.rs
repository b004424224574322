//! Back-channel logout initiators.

use super::wire::wire_enum;

wire_enum! {
    /// What triggered a back-channel logout request.
    pub enum LogoutInitiators {
        /// Initiated by a relying party (RP)
        RpLogout => "rp-logout",
        /// Initiated by an external identity provider (IdP)
        IdpLogout => "idp-logout",
        /// Initiated by a password change
        PasswordChanged => "password-changed",
        /// Initiated when a session expires
        SessionExpired => "session-expired",
        /// Initiated by session deletion
        SessionRevoked => "session-revoked",
        /// Initiated by an account deletion
        AccountDeleted => "account-deleted",
        /// Initiated by an email identifier change
        EmailIdentifierChanged => "email-identifier-changed",
    }
}
