//! Outbound email and SMS.
//!
//! Sending never fails from the caller's point of view. When a provider is not
//! configured or rejects the message, the sender logs a warning and reports
//! `Delivery::Simulated` with the reason, and the request that triggered the message
//! still succeeds.

pub mod email;
pub mod sms;

use crate::model::notification::DeliveryDebugDto;

/// Outcome of an outbound notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The provider accepted the message.
    Delivered,
    /// Nothing was sent; `reason` explains why.
    Simulated { reason: String },
}

impl Delivery {
    pub fn simulated(reason: impl Into<String>) -> Self {
        Self::Simulated {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Debug block returned to the client, present only for simulated deliveries.
    ///
    /// `code` carries a verification code so the flow can be completed without a provider.
    pub fn debug_info(&self, code: Option<String>) -> Option<DeliveryDebugDto> {
        match self {
            Self::Delivered => None,
            Self::Simulated { reason } => Some(DeliveryDebugDto {
                simulated: true,
                reason: reason.clone(),
                code,
            }),
        }
    }
}
