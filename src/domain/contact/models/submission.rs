use super::email::{ContactEmail, EmailError};

/// A contact-form submission as it arrives on the wire.
///
/// Fields default to the empty string so an omitted field and an empty field
/// take the same rejection path instead of failing inside the extractor.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn new(name: &str, email: &str, message: &str) -> ContactRequest {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SenderNameError {
    #[error("Sender name cannot be empty or whitespace.")]
    EmptyOrWhitespace,
}

/// The sender's self-reported name. No length cap, no character restrictions;
/// the name is escaped at rendering time instead.
#[derive(Debug, PartialEq, Clone)]
pub struct SenderName(String);

impl SenderName {
    pub fn parse(s: String) -> Result<SenderName, SenderNameError> {
        if s.trim().is_empty() {
            return Err(SenderNameError::EmptyOrWhitespace);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum MessageBodyError {
    #[error("Message body cannot be empty or whitespace.")]
    EmptyOrWhitespace,
}

/// The free-form message body.
#[derive(Debug, PartialEq, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, MessageBodyError> {
        if s.trim().is_empty() {
            return Err(MessageBodyError::EmptyOrWhitespace);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionValidationError {
    #[error("Invalid sender name: {0}")]
    InvalidName(#[from] SenderNameError),
    #[error("Invalid sender email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("Invalid message body: {0}")]
    InvalidMessage(#[from] MessageBodyError),
}

/// A submission that passed validation. Only values of this type ever reach
/// the delivery dispatch.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: SenderName,
    pub email: ContactEmail,
    pub message: MessageBody,
}

impl ContactSubmission {
    pub fn new(req: ContactRequest) -> Result<ContactSubmission, SubmissionValidationError> {
        Ok(Self {
            name: SenderName::parse(req.name)?,
            email: ContactEmail::parse(req.email)?,
            message: MessageBody::parse(req.message)?,
        })
    }
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = SubmissionValidationError;
    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        ContactSubmission::new(request)
    }
}
