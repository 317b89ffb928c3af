use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingOverview {
    pub plan: String,
    pub status: String,
    pub period_start: chrono::DateTime<chrono::Utc>,
    pub period_end: chrono::DateTime<chrono::Utc>,
    pub amount_due: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: uuid::Uuid,
    pub brand: String,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Void,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: uuid::Uuid,
    pub number: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
}

/// State of the payment-provider onboarding ("connect") flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectStatus {
    pub provider: String,
    pub onboarded: bool,
    pub charges_enabled: bool,
    pub payouts_enabled: bool,
}
