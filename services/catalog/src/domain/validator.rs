//! Single-purpose state checks run before a read or write proceeds.
//!
//! A validator owns the state it inspects plus the domain label used in its
//! message. Validators never mutate anything, so running one twice gives the
//! same answer.

use kino_domain::rating::ContentRating;

use crate::error::ErrorCode;

/// Failure reported by a [`Validator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub trait Validator: Send + Sync {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails with `ROW_ALREADY_DELETED` when the checked row is soft-deleted.
#[derive(Debug, Clone, Copy)]
pub struct IsDeletedValidator {
    is_deleted: bool,
    domain: &'static str,
}

impl IsDeletedValidator {
    pub fn new(is_deleted: bool, domain: &'static str) -> Self {
        Self { is_deleted, domain }
    }
}

impl Validator for IsDeletedValidator {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_deleted {
            return Err(ValidationError::new(
                ErrorCode::RowAlreadyDeleted,
                format!("{} IS ALREADY DELETED", self.domain),
            ));
        }
        Ok(())
    }
}

/// Fails with `RATE_NOT_MATCHED` when the profile's clearance is below the
/// rating the content requires.
#[derive(Debug, Clone, Copy)]
pub struct RateValidator {
    cleared: ContentRating,
    required: ContentRating,
    domain: &'static str,
}

impl RateValidator {
    pub fn new(cleared: ContentRating, required: ContentRating, domain: &'static str) -> Self {
        Self {
            cleared,
            required,
            domain,
        }
    }
}

impl Validator for RateValidator {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.cleared.permits(self.required) {
            return Err(ValidationError::new(
                ErrorCode::RateNotMatched,
                format!(
                    "{} REQUIRES {} BUT PROFILE IS CLEARED FOR {}",
                    self.domain, self.required, self.cleared
                ),
            ));
        }
        Ok(())
    }
}

/// Ordered validators; the first failure aborts the chain.
#[derive(Default)]
pub struct ValidatorChain {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl Validator for ValidatorChain {
    fn validate(&self) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|v| v.validate())
    }
}
