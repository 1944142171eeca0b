pub mod memory;
pub mod role;
pub mod user;

pub use memory::InMemoryRoleRepository;
pub use memory::InMemoryUserRepository;
pub use role::PostgresRoleRepository;
pub use user::PostgresUserRepository;
