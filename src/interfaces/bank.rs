use crate::domain::bank::{
    BankOutcome, BankPaymentRequest, BankPaymentResponse, BankRejection, FailureKind,
};
use crate::domain::ports::AcquiringBank;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// HTTP client for the acquiring bank's authorization endpoint.
///
/// One `POST {base}/payments` per submission, no internal retry. Only
/// HTTP-status-carrying rejections become business outcomes; transport
/// faults, undecodable bodies and statuses outside the classification
/// table propagate as errors so they surface as operational incidents.
#[derive(Debug, Clone)]
pub struct BankClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BankClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PaymentError::BankTransport)?;
        let endpoint = base_url.join("payments")?;
        Ok(Self { http, endpoint })
    }
}

/// Maps a non-success HTTP status to its business classification, if any.
///
/// 429 and every 5xx are safe to retry unchanged; any other 4xx requires a
/// changed request. Everything else carries no business meaning.
fn classify(status: StatusCode) -> Option<FailureKind> {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Some(FailureKind::Transient)
    } else if status.is_client_error() {
        Some(FailureKind::Permanent)
    } else {
        None
    }
}

#[async_trait]
impl AcquiringBank for BankClient {
    async fn submit(&self, request: BankPaymentRequest) -> Result<BankOutcome> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(PaymentError::BankTransport)?;

        let status = response.status();
        if status.is_success() {
            let body: BankPaymentResponse =
                response.json().await.map_err(PaymentError::BankDecode)?;
            return Ok(BankOutcome::Processed(body));
        }

        match classify(status) {
            Some(kind) => {
                tracing::warn!(
                    status = status.as_u16(),
                    transient = kind.is_transient(),
                    "bank rejected the authorization call"
                );
                Ok(BankOutcome::Rejected(BankRejection {
                    status: status.as_u16(),
                    kind,
                }))
            }
            None => Err(PaymentError::UnexpectedBankStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_table() {
        let cases = [
            (400, Some(FailureKind::Permanent)),
            (404, Some(FailureKind::Permanent)),
            (422, Some(FailureKind::Permanent)),
            (429, Some(FailureKind::Transient)),
            (500, Some(FailureKind::Transient)),
            (503, Some(FailureKind::Transient)),
            (301, None),
            (101, None),
        ];

        for (code, expected) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify(status), expected, "status {code}");
        }
    }

    #[test]
    fn success_statuses_are_never_classified() {
        for code in [200, 201, 204] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify(status), None);
        }
    }
}
