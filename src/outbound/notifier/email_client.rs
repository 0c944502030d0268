use crate::configuration::{ContactSettings, EmailClientSettings};
use crate::domain::contact::{
    models::{
        email::{ContactEmail, EmailHtmlContent, EmailMessage, EmailSubject, EmailTextContent},
        submission::ContactSubmission,
    },
    ports::{ContactNotifier, ContactNotifierError},
};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Postmark-style delivery channel. One authenticated client is built at
/// startup and reused for the lifetime of the process.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ContactEmail,
    authorization_token: Secret<String>,
    operator_mailbox: ContactEmail,
    operator_name: String,
}

impl EmailClient {
    pub fn new(configuration: EmailClientSettings, contact: ContactSettings) -> Self {
        let sender = configuration
            .sender()
            .expect("Invalid sender email address");
        let operator_mailbox = contact
            .operator()
            .expect("Invalid operator email address");
        let timeout = configuration.timeout();

        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url: configuration.base_url,
            sender,
            authorization_token: configuration.authorization_token,
            operator_mailbox,
            operator_name: contact.operator_name,
        }
    }
}

#[async_trait]
impl ContactNotifier for EmailClient {
    fn operator_mailbox(&self) -> &ContactEmail {
        &self.operator_mailbox
    }

    fn build_operator_notification(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError> {
        let name = escape_html(submission.name.as_ref());
        let email = escape_html(submission.email.as_ref());
        let message = escape_html(submission.message.as_ref());

        let subject = EmailSubject::try_from(format!(
            "Portfolio Contact: Message from {}",
            submission.name
        ))?;

        let html_content = EmailHtmlContent::try_from(format!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
                <h2>New Portfolio Contact Message</h2>\
                <h3>Contact Details:</h3>\
                <p><strong>Name:</strong> {name}</p>\
                <p><strong>Email:</strong> {email}</p>\
                <h3>Message:</h3>\
                <p>{message}</p>\
                <p>This message was sent from your portfolio website contact form.</p>\
            </div>"
        ))?;

        let text_content = EmailTextContent::try_from(format!(
            "New portfolio contact message.\n\n\
            Name: {}\n\
            Email: {}\n\n\
            {}\n",
            submission.name,
            submission.email,
            submission.message.as_ref()
        ))?;

        Ok(EmailMessage::new(subject, html_content, text_content))
    }

    fn build_sender_confirmation(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError> {
        let name = escape_html(submission.name.as_ref());
        let message = escape_html(submission.message.as_ref());
        let operator_name = escape_html(&self.operator_name);
        let operator_email = escape_html(self.operator_mailbox.as_ref());

        let subject = EmailSubject::try_from("Thank you for contacting me!".to_string())?;

        let html_content = EmailHtmlContent::try_from(format!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
                <h2>Thank You for Your Message!</h2>\
                <p>Hi {name},</p>\
                <p>Thank you for reaching out through my portfolio website. \
                I've received your message and will get back to you as soon as possible.</p>\
                <h3>Your Message:</h3>\
                <p>{message}</p>\
                <p>I typically respond within 24-48 hours. If you have any urgent inquiries, \
                feel free to reach out directly at {operator_email}.</p>\
                <p>Best regards,<br /><strong>{operator_name}</strong></p>\
            </div>"
        ))?;

        let text_content = EmailTextContent::try_from(format!(
            "Hi {},\n\n\
            Thank you for reaching out through my portfolio website. \
            I've received your message and will get back to you as soon as possible.\n\n\
            Your message:\n{}\n\n\
            I typically respond within 24-48 hours. If you have any urgent inquiries, \
            feel free to reach out directly at {}.\n\n\
            Best regards,\n{}\n",
            submission.name,
            submission.message.as_ref(),
            self.operator_mailbox,
            self.operator_name
        ))?;

        Ok(EmailMessage::new(subject, html_content, text_content))
    }

    #[tracing::instrument(
        name = "Sending an email through the delivery provider",
        skip(self, message),
        fields(recipient = %recipient)
    )]
    async fn send(
        &self,
        recipient: &ContactEmail,
        reply_to: Option<&ContactEmail>,
        message: &EmailMessage,
    ) -> Result<(), ContactNotifierError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject: message.subject_as_ref().as_ref(),
            html_body: message.html_as_ref().as_ref(),
            text_body: message.text_as_ref().as_ref(),
            reply_to: reply_to.map(|r| r.as_ref()),
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ContactNotifierError::Unexpected(anyhow::Error::from(e)))?
            .error_for_status()
            .map_err(|e| ContactNotifierError::Unexpected(anyhow::Error::from(e)))?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Escapes user-supplied text before it is interpolated into an HTML body.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
