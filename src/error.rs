use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Faults with no business classification.
///
/// Validation failures and classified bank rejections are ordinary data and
/// never appear here; this enum is for everything that must surface as an
/// operational incident instead of being mapped to an outcome. Display
/// output never contains card numbers or security codes.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("bank request failed: {0}")]
    BankTransport(#[source] reqwest::Error),
    #[error("bank response could not be decoded: {0}")]
    BankDecode(#[source] reqwest::Error),
    #[error("unexpected status {0} from the bank")]
    UnexpectedBankStatus(u16),
    #[error("invalid bank endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("storage failure: {0}")]
    Storage(String),
}
