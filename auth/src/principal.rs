/// Capability of a stored account record to act as an authenticatable
/// principal.
///
/// Any domain record exposing an identifying key, a password hash and a role
/// name can be handed to [`crate::Authenticator`].
pub trait Principal {
    /// Unique identifying key (the token subject).
    fn key(&self) -> &str;

    /// Stored password hash in PHC string format.
    fn password_hash(&self) -> &str;

    /// Name of the single role assigned to the principal.
    fn role(&self) -> &str;
}
