//! bcrypt implementation of the PasswordHasherTrait.
//!
//! bcrypt is adaptive: the cost factor sets how expensive hashing is, so it
//! can be raised as hardware gets faster. Hashing runs on a blocking thread
//! to keep the async executor responsive.

use async_trait::async_trait;

use vf_core::services::auth::PasswordHasherTrait;

/// bcrypt password hasher
pub struct BcryptPasswordHasher {
    /// bcrypt cost factor
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor
    ///
    /// Tests use a low cost to stay fast; production uses the default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasherTrait for BcryptPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, String> {
        let plain = plain.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| format!("Hashing task failed: {}", e))?
            .map_err(|e| format!("bcrypt hashing failed: {}", e))
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, String> {
        let plain = plain.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await
            .map_err(|e| format!("Verification task failed: {}", e))?
            .map_err(|e| format!("bcrypt verification failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps these tests fast; the cost factor does not change the
    // hash/verify contract
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_and_verify_roundtrip() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);

        let hash = hasher.hash("password123").await.unwrap();
        assert_ne!(hash, "password123");
        assert!(hash.starts_with("$2"));

        assert!(hasher.verify("password123", &hash).await.unwrap());
        assert!(!hasher.verify("wrong-password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);

        let a = hasher.hash("password123").await.unwrap();
        let b = hasher.hash("password123").await.unwrap();

        // Salted: equal inputs still produce distinct hashes
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);
        assert!(hasher.verify("password123", "not-a-hash").await.is_err());
    }
}
