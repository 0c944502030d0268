use async_trait::async_trait;

use super::{
    models::submission::{ContactRequest, ContactSubmission},
    ports::{
        ContactNotifier, ContactNotifierError, ContactService, ContactServiceError, DeliveryStage,
    },
};

/// Orchestrates one contact submission end to end: validate, notify the
/// operator, acknowledge to the sender. The acknowledgement is only attempted
/// once the provider has accepted the notification.
#[derive(Debug)]
pub struct ContactPipeline<N>
where
    N: ContactNotifier,
{
    notifier: N,
}

impl<N> ContactPipeline<N>
where
    N: ContactNotifier,
{
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl<N> ContactService for ContactPipeline<N>
where
    N: ContactNotifier,
{
    #[tracing::instrument(
        name = "Relaying a contact submission",
        skip(self, request),
        fields(
            sender_email = %request.email,
            sender_name = %request.name,
        )
    )]
    async fn submit(&self, request: ContactRequest) -> Result<(), ContactServiceError> {
        let submission = ContactSubmission::try_from(request)?;

        let notification = self
            .notifier
            .build_operator_notification(&submission)
            .map_err(|e| ContactServiceError::Unexpected(e.into()))?;
        if let Err(e) = self
            .notifier
            .send(
                self.notifier.operator_mailbox(),
                Some(&submission.email),
                &notification,
            )
            .await
        {
            return Err(delivery_failure(DeliveryStage::Notification, e));
        }

        let confirmation = self
            .notifier
            .build_sender_confirmation(&submission)
            .map_err(|e| ContactServiceError::Unexpected(e.into()))?;
        if let Err(e) = self
            .notifier
            .send(&submission.email, None, &confirmation)
            .await
        {
            return Err(delivery_failure(DeliveryStage::Confirmation, e));
        }

        Ok(())
    }
}

fn delivery_failure(stage: DeliveryStage, source: ContactNotifierError) -> ContactServiceError {
    tracing::error!(
        failed_send = %stage,
        error = ?source,
        "Failed to deliver contact email"
    );
    ContactServiceError::DeliveryError { stage, source }
}
