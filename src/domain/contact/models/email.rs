#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Recipient address cannot be empty")]
    EmptyAddress,
    #[error("Invalid email subject: {0}")]
    InvalidSubject(String),
    #[error("Invalid email Html content: {0}")]
    InvalidHtmlContent(String),
    #[error("Invalid email text content: {0}")]
    InvalidTextContent(String),
}

/// An email address as supplied by the sender.
///
/// The contact pipeline deliberately performs no format validation: the
/// address is only required to be non-empty. A bogus address surfaces later
/// as a rejected confirmation send, not as a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, EmailError> {
        if s.trim().is_empty() {
            return Err(EmailError::EmptyAddress);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A fully rendered email document, ready to hand to the delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    subject: EmailSubject,
    html_content: EmailHtmlContent,
    text_content: EmailTextContent,
}

impl EmailMessage {
    pub fn new(
        subject: EmailSubject,
        html_content: EmailHtmlContent,
        text_content: EmailTextContent,
    ) -> Self {
        Self {
            subject,
            html_content,
            text_content,
        }
    }

    pub fn subject_as_ref(&self) -> &EmailSubject {
        &self.subject
    }
    pub fn html_as_ref(&self) -> &EmailHtmlContent {
        &self.html_content
    }
    pub fn text_as_ref(&self) -> &EmailTextContent {
        &self.text_content
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSubject(String);

impl TryFrom<String> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmailError::InvalidSubject(
                "EmailSubject cannot be empty.".into(),
            ));
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailHtmlContent(String);

impl TryFrom<String> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmailError::InvalidHtmlContent(
                "EmailHtmlContent cannot be empty.".into(),
            ));
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailHtmlContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTextContent(String);

impl TryFrom<String> for EmailTextContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmailError::InvalidTextContent(
                "EmailTextContent cannot be empty.".into(),
            ));
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailTextContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
