//! Connection settings.

use super::wire::wire_enum;

wire_enum! {
    /// When root attributes (`name`, `given_name`, `family_name`, `nickname`,
    /// `picture`) of a user are synchronised from an external IdP, and whether
    /// the user is created on login.
    pub enum SetUserRootAttributes {
        /// Create the user if needed and update root attributes on every login.
        /// Root attributes cannot be updated independently.
        OnEachLogin => "on_each_login",
        /// Create the user and set root attributes on first login only
        OnFirstLogin => "on_first_login",
        /// Never create the user or set root attributes from the IdP
        NeverOnLogin => "never_on_login",
    }
}

impl Default for SetUserRootAttributes {
    fn default() -> Self {
        Self::OnEachLogin
    }
}
