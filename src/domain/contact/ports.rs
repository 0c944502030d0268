use async_trait::async_trait;

use super::models::{
    email::{ContactEmail, EmailError, EmailMessage},
    submission::{ContactRequest, ContactSubmission, SubmissionValidationError},
};

/// The contact pipeline as seen from the inbound edge: one submission in,
/// one outcome back.
#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    async fn submit(&self, request: ContactRequest) -> Result<(), ContactServiceError>;
}

/// The delivery channel the pipeline dispatches through.
///
/// Rendering lives with the channel because the operator identity baked into
/// both templates is channel configuration, not submission data.
#[async_trait]
pub trait ContactNotifier: Send + Sync + 'static {
    /// The operator's fixed mailbox, recipient of every notification.
    fn operator_mailbox(&self) -> &ContactEmail;

    /// Renders the email telling the operator a message arrived.
    fn build_operator_notification(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError>;

    /// Renders the auto-reply acknowledging the submission to its sender.
    fn build_sender_confirmation(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError>;

    /// Hands one rendered email to the provider.
    async fn send(
        &self,
        recipient: &ContactEmail,
        reply_to: Option<&ContactEmail>,
        message: &EmailMessage,
    ) -> Result<(), ContactNotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactNotifierError {
    #[error("Validation error: {0}")]
    InvalidEmailMessage(#[from] EmailError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Which of the two sends a delivery error occurred in. Logged for operator
/// diagnosis; never part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStage {
    Notification,
    Confirmation,
}

impl DeliveryStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStage::Notification => "notification",
            DeliveryStage::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ContactServiceError {
    #[error("Submission validation error: {0}")]
    ValidationError(#[from] SubmissionValidationError),

    #[error("Failed to deliver the {stage} email")]
    DeliveryError {
        stage: DeliveryStage,
        #[source]
        source: ContactNotifierError,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
