//! Payment-management DTOs shared by the admin, tenant-finance, and
//! user-payment screens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSchedule {
    pub frequency: PayoutFrequency,
    pub next_payout_at: chrono::DateTime<chrono::Utc>,
    pub minimum_amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    pub platform_fee_pct: f64,
    pub fixed_fee: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    /// Tenant the transaction was charged under; absent for platform fees.
    pub tenant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRecord {
    pub id: uuid::Uuid,
    pub initiated_at: chrono::DateTime<chrono::Utc>,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
}

/// A paid service the end user is subscribed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSubscription {
    pub id: uuid::Uuid,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub renews_at: chrono::DateTime<chrono::Utc>,
    pub active: bool,
}

/// Balance summary for the tenant finance screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceOverview {
    pub available_balance: f64,
    pub pending_balance: f64,
    pub currency: String,
    pub last_payout_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Spend summary for the end-user payments screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPaymentOverview {
    pub monthly_spend: f64,
    pub currency: String,
    pub active_services: i64,
    pub next_renewal_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAnalytics {
    pub period: String,
    pub volume: f64,
    pub fee_revenue: f64,
    pub refund_rate_pct: f64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Succeeded).unwrap(),
            "\"succeeded\""
        );
        let status: TransactionStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, TransactionStatus::Refunded);
    }

    #[test]
    fn payout_schedule_roundtrip() {
        let schedule = PayoutSchedule {
            frequency: PayoutFrequency::Weekly,
            next_payout_at: "2025-06-02T00:00:00Z".parse().unwrap(),
            minimum_amount: 25.0,
            currency: "USD".to_string(),
        };
        let back: PayoutSchedule =
            serde_json::from_str(&serde_json::to_string(&schedule).unwrap()).unwrap();
        assert_eq!(back, schedule);
    }
}
