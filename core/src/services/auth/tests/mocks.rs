//! Mock capability implementations for auth service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vf_shared::utils::validation::validators;

use crate::services::auth::traits::{EmailServiceTrait, PasswordHasherTrait};

/// Mock email service that records the last code sent per address
pub struct MockEmailService {
    pub sent_messages: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_messages.lock().unwrap().get(email).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("email service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        validators::is_valid_email(email)
    }
}

/// Mock password hasher with a reversible marker format
///
/// Fast and deterministic; the real bcrypt implementation has its own tests
/// in the infrastructure crate.
pub struct MockPasswordHasher {
    pub should_fail: bool,
}

impl MockPasswordHasher {
    pub fn new(should_fail: bool) -> Self {
        Self { should_fail }
    }
}

#[async_trait]
impl PasswordHasherTrait for MockPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("hasher error".to_string());
        }
        Ok(format!("hashed::{}", plain))
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, String> {
        if self.should_fail {
            return Err("hasher error".to_string());
        }
        Ok(hash == format!("hashed::{}", plain))
    }
}
