pub mod user;
pub mod verification_code;

pub use user::{MockUserRepository, UserRepository};
pub use verification_code::{MockVerificationCodeRepository, VerificationCodeRepository};
