pub mod in_memory_token_repository;
pub mod postgres_token_repository;
pub mod token_repository;

pub use in_memory_token_repository::InMemoryTokenRepository;
pub use postgres_token_repository::PostgresTokenRepository;
pub use token_repository::{TokenRepository, ACCESS_TOKEN_KEY};
