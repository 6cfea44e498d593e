use crate::domain::value::{DeliveryReport, MessageText, RecipientAddress};

/// One recipient or an ordered list of them.
///
/// Either shape collapses into one ordered list before anything is sent. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    One(RecipientAddress),
    Many(Vec<RecipientAddress>),
}

impl Recipients {
    pub fn into_vec(self) -> Vec<RecipientAddress> {
        match self {
            Self::One(recipient) => vec![recipient],
            Self::Many(recipients) => recipients,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(recipients) => recipients.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RecipientAddress> for Recipients {
    fn from(value: RecipientAddress) -> Self {
        Self::One(value)
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::One(value.into())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::One(value.into())
    }
}

impl<T: Into<RecipientAddress>> From<Vec<T>> for Recipients {
    fn from(value: Vec<T>) -> Self {
        Self::Many(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RecipientAddress>, const N: usize> From<[T; N]> for Recipients {
    fn from(value: [T; N]) -> Self {
        Self::Many(value.into_iter().map(Into::into).collect())
    }
}

/// A text message addressed to one or more recipients.
///
/// The client fans this out into one gateway request per recipient.
#[derive(Debug, Clone)]
pub struct SendRcs {
    recipients: Vec<RecipientAddress>,
    text: MessageText,
    delivery_report: DeliveryReport,
}

impl SendRcs {
    /// Build a request; recipients are normalized here, before any network call.
    pub fn new(to: impl Into<Recipients>, message: impl ToString) -> Self {
        Self {
            recipients: to.into().into_vec(),
            text: MessageText::new(message),
            delivery_report: DeliveryReport::default(),
        }
    }

    /// Override the delivery-report preference (defaults to `"none"`).
    pub fn with_delivery_report(mut self, delivery_report: DeliveryReport) -> Self {
        self.delivery_report = delivery_report;
        self
    }

    pub fn recipients(&self) -> &[RecipientAddress] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn delivery_report(&self) -> &DeliveryReport {
        &self.delivery_report
    }
}
