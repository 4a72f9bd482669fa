use thiserror::Error;

/// Failures while starting or connecting to the Redis fixture.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("failed to run redis container: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("failed to connect to redis fixture: {0}")]
    Redis(#[from] redis::RedisError),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;
