//! Demo-mode fixture table.
//!
//! Canned payloads keyed by HTTP method + path, shaped exactly like the
//! backend's responses so the DTOs in `contracts` decode them unchanged.
//! Unmapped endpoints answer with a generic success envelope instead of
//! failing; the miss is logged so it stays visible during development.

use contracts::shared::api::ApiEnvelope;
use serde_json::json;

pub fn respond(method: &str, path: &str) -> ApiEnvelope {
    let path = path.split('?').next().unwrap_or(path).trim_end_matches('/');

    match (method, path) {
        ("GET", "/api/dashboard/stats") => ApiEnvelope::ok(json!({
            "total_tenants": 42,
            "active_users": 1318,
            "monthly_revenue": 48_250.75,
            "pending_payouts": 6_430.00,
            "open_invoices": 17,
        })),
        ("GET", "/api/dashboard/activity") => ApiEnvelope::ok(json!([
            {"occurred_at": "2025-06-12T09:14:00Z", "message": "Tenant acme upgraded to the Scale plan"},
            {"occurred_at": "2025-06-12T08:41:00Z", "message": "Payout of $1,250.00 initiated for globex"},
            {"occurred_at": "2025-06-11T22:03:00Z", "message": "3 new users joined initech"},
            {"occurred_at": "2025-06-11T17:26:00Z", "message": "Invoice INV-2025-0614 was paid"},
        ])),
        ("GET", "/api/analytics/summary") => ApiEnvelope::ok(json!([
            {"period": "2025-04", "signups": 86, "churned": 7, "conversion_pct": 3.9},
            {"period": "2025-05", "signups": 112, "churned": 9, "conversion_pct": 4.4},
            {"period": "2025-06", "signups": 71, "churned": 4, "conversion_pct": 4.1},
        ])),
        ("GET", "/api/reports") => ApiEnvelope::ok(json!([
            {"id": "a7c91b44-6f3a-4e0d-9b82-5d417c2f8e10", "title": "Monthly revenue breakdown", "generated_at": "2025-06-01T06:00:00Z", "ready": true},
            {"id": "c3e85d12-9a70-4b6f-8c24-f09b31a7d655", "title": "Tenant growth cohorts", "generated_at": "2025-06-08T06:00:00Z", "ready": true},
            {"id": "f1b20c98-4d56-47a3-b7e9-62c8d0a94312", "title": "Quarterly compliance export", "generated_at": "2025-06-12T06:00:00Z", "ready": false},
        ])),

        ("GET", "/api/billing/overview") => ApiEnvelope::ok(json!({
            "plan": "Scale",
            "status": "active",
            "period_start": "2025-06-01T00:00:00Z",
            "period_end": "2025-07-01T00:00:00Z",
            "amount_due": 499.00,
            "currency": "USD",
        })),
        ("GET", "/api/billing/payment-methods") | ("GET", "/api/user/payments/methods") => {
            ApiEnvelope::ok(json!([
                {"id": "0d9e4f77-21b5-4c08-a3d6-7e9f215c8b40", "brand": "visa", "last4": "4242", "exp_month": 11, "exp_year": 2027, "is_default": true},
                {"id": "6a3b8d15-90cf-4712-bc5e-d84a02f67193", "brand": "mastercard", "last4": "5100", "exp_month": 3, "exp_year": 2026, "is_default": false},
            ]))
        }
        ("POST", "/api/billing/payment-methods/default")
        | ("POST", "/api/user/payments/methods/default") => ApiEnvelope::ok(json!({
            "message": "Default payment method updated",
        })),
        ("GET", "/api/billing/invoices") => ApiEnvelope::ok(json!([
            {"id": "8c4f1a29-5e7b-46d0-93a8-b12e6c0d7f54", "number": "INV-2025-0614", "issued_at": "2025-06-01T00:00:00Z", "amount": 499.00, "currency": "USD", "status": "paid"},
            {"id": "2b7d9e40-13c6-48f5-a27b-90e4d8a1c369", "number": "INV-2025-0521", "issued_at": "2025-05-01T00:00:00Z", "amount": 499.00, "currency": "USD", "status": "paid"},
            {"id": "e5a08c73-6b92-4d1f-8e30-47f1b9d2c688", "number": "INV-2025-0433", "issued_at": "2025-04-01T00:00:00Z", "amount": 449.00, "currency": "USD", "status": "void"},
        ])),
        ("GET", "/api/billing/connect") => ApiEnvelope::ok(json!({
            "provider": "stripe",
            "onboarded": true,
            "charges_enabled": true,
            "payouts_enabled": false,
        })),

        ("GET", "/api/tenant/profile") => ApiEnvelope::ok(json!({
            "id": "b49f6e12-8a05-47d3-9c61-20e7f5b8a394",
            "name": "Acme Corporation",
            "slug": "acme",
            "contact_email": "billing@acme.test",
            "created_at": "2024-02-17T10:30:00Z",
        })),
        ("PUT", "/api/tenant/profile") => ApiEnvelope::ok(json!({
            "message": "Tenant profile updated",
        })),
        ("GET", "/api/tenant/settings") => ApiEnvelope::ok(json!({
            "timezone": "America/New_York",
            "locale": "en-US",
            "notifications_enabled": true,
        })),
        ("GET", "/api/tenant/branding") => ApiEnvelope::ok(json!({
            "primary_color": "#4f46e5",
            "logo_url": "https://cdn.platform-gateway.test/acme/logo.svg",
            "custom_domain": null,
        })),

        ("GET", "/api/admin/payments/schedule") => ApiEnvelope::ok(json!({
            "frequency": "weekly",
            "next_payout_at": "2025-06-16T00:00:00Z",
            "minimum_amount": 25.00,
            "currency": "USD",
        })),
        ("PUT", "/api/admin/payments/schedule") => ApiEnvelope::ok(json!({
            "message": "Payout schedule updated",
        })),
        ("GET", "/api/admin/payments/fees") => ApiEnvelope::ok(json!({
            "platform_fee_pct": 2.9,
            "fixed_fee": 0.30,
            "currency": "USD",
        })),
        ("GET", "/api/admin/payments/transactions") => ApiEnvelope::ok(json!([
            {"id": "7f2e0b58-4c91-4da6-b073-8e5a12f9c604", "created_at": "2025-06-12T11:05:00Z", "description": "Subscription charge — acme", "amount": 499.00, "currency": "USD", "status": "succeeded", "tenant": "acme"},
            {"id": "91c4d7a3-0e68-452f-9b17-d20c8f6e3a55", "created_at": "2025-06-12T09:48:00Z", "description": "Subscription charge — globex", "amount": 199.00, "currency": "USD", "status": "pending", "tenant": "globex"},
            {"id": "c8a61f05-7d39-4b82-a4e0-31f9b5d0c726", "created_at": "2025-06-11T16:22:00Z", "description": "Refund — initech", "amount": -49.00, "currency": "USD", "status": "refunded", "tenant": "initech"},
        ])),
        ("GET", "/api/admin/payments/analytics") => ApiEnvelope::ok(json!([
            {"period": "2025-04", "volume": 182_400.00, "fee_revenue": 5_289.60, "refund_rate_pct": 1.3, "currency": "USD"},
            {"period": "2025-05", "volume": 201_750.00, "fee_revenue": 5_850.75, "refund_rate_pct": 0.9, "currency": "USD"},
            {"period": "2025-06", "volume": 96_130.00, "fee_revenue": 2_787.77, "refund_rate_pct": 1.1, "currency": "USD"},
        ])),

        ("GET", "/api/tenant/finance/overview") => ApiEnvelope::ok(json!({
            "available_balance": 12_480.50,
            "pending_balance": 3_270.00,
            "currency": "USD",
            "last_payout_at": "2025-06-09T00:00:00Z",
        })),
        ("GET", "/api/tenant/finance/transactions") => ApiEnvelope::ok(json!([
            {"id": "4e8b2c70-9f15-4a63-b8d4-06c3e1f7a982", "created_at": "2025-06-12T10:12:00Z", "description": "Order #10492", "amount": 129.00, "currency": "USD", "status": "succeeded", "tenant": "acme"},
            {"id": "ab05d3f8-62e9-4c17-90b6-5f48a2d1e733", "created_at": "2025-06-11T19:37:00Z", "description": "Order #10491", "amount": 89.00, "currency": "USD", "status": "succeeded", "tenant": "acme"},
            {"id": "59f7e1c4-3b80-4d25-a69e-72d014c8b356", "created_at": "2025-06-11T08:54:00Z", "description": "Order #10487 (chargeback)", "amount": -129.00, "currency": "USD", "status": "failed", "tenant": "acme"},
        ])),
        ("GET", "/api/tenant/finance/payouts") => ApiEnvelope::ok(json!([
            {"id": "d2c94b67-1e50-483a-b7f2-8a36e0d5c419", "initiated_at": "2025-06-09T00:00:00Z", "amount": 4_810.00, "currency": "USD", "status": "succeeded"},
            {"id": "70a5f8d1-4c26-49e3-8b90-e17d3b2f6c84", "initiated_at": "2025-06-02T00:00:00Z", "amount": 5_125.50, "currency": "USD", "status": "succeeded"},
            {"id": "368d0e92-7a41-4f58-9c63-b405f1e8d277", "initiated_at": "2025-05-26T00:00:00Z", "amount": 4_377.25, "currency": "USD", "status": "succeeded"},
        ])),
        ("GET", "/api/tenant/finance/settings") => ApiEnvelope::ok(json!({
            "frequency": "weekly",
            "next_payout_at": "2025-06-16T00:00:00Z",
            "minimum_amount": 100.00,
            "currency": "USD",
        })),

        ("GET", "/api/user/payments/overview") => ApiEnvelope::ok(json!({
            "monthly_spend": 64.97,
            "currency": "USD",
            "active_services": 3,
            "next_renewal_at": "2025-06-18T00:00:00Z",
        })),
        ("GET", "/api/user/payments/services") => ApiEnvelope::ok(json!([
            {"id": "15b8d4f0-6c27-4a93-b5e1-9d04f2c7a368", "name": "Workspace Pro", "price": 29.99, "currency": "USD", "renews_at": "2025-06-18T00:00:00Z", "active": true},
            {"id": "83e6a2c9-0d51-4f78-862b-c49e7f1d0b35", "name": "Extra Storage", "price": 9.99, "currency": "USD", "renews_at": "2025-06-21T00:00:00Z", "active": true},
            {"id": "c0f49d36-8b12-45e7-a928-16d5b3e0f784", "name": "Priority Support", "price": 24.99, "currency": "USD", "renews_at": "2025-07-02T00:00:00Z", "active": true},
        ])),
        ("GET", "/api/user/payments/history") => ApiEnvelope::ok(json!([
            {"id": "92d7b0e5-3f48-4c16-8a57-e24c9d1f6b80", "created_at": "2025-06-02T14:20:00Z", "description": "Workspace Pro — June", "amount": 29.99, "currency": "USD", "status": "succeeded", "tenant": "acme"},
            {"id": "48c1e9a7-5d20-4b83-97f4-06a3d8e2c519", "created_at": "2025-05-21T11:42:00Z", "description": "Extra Storage — May", "amount": 9.99, "currency": "USD", "status": "succeeded", "tenant": "acme"},
            {"id": "e7a30c84-2f96-4d51-b068-91f5c4d7e223", "created_at": "2025-05-02T14:20:00Z", "description": "Workspace Pro — May", "amount": 29.99, "currency": "USD", "status": "succeeded", "tenant": "acme"},
        ])),

        _ => {
            // Permissive on purpose: demo mode should never hard-fail a
            // screen. The miss is logged because it can hide a wrong path.
            log::warn!("no demo fixture for {} {}", method, path);
            ApiEnvelope::ok(json!({
                "message": "Demo data for this endpoint is not available yet.",
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::billing::{BillingOverview, Invoice, PaymentMethod};
    use contracts::domain::dashboard::DashboardStats;
    use contracts::domain::payments::{
        FeeConfig, FinanceOverview, PayoutRecord, PayoutSchedule, Transaction,
        UserPaymentOverview,
    };
    use contracts::domain::tenant::{TenantBranding, TenantProfile, TenantSettings};

    #[test]
    fn dashboard_stats_fixture_decodes() {
        let stats: DashboardStats = respond("GET", "/api/dashboard/stats").decode().unwrap();
        assert_eq!(stats.total_tenants, 42);
    }

    #[test]
    fn billing_fixtures_decode_into_dtos() {
        let _: BillingOverview = respond("GET", "/api/billing/overview").decode().unwrap();
        let methods: Vec<PaymentMethod> = respond("GET", "/api/billing/payment-methods")
            .decode()
            .unwrap();
        assert!(methods.iter().any(|m| m.is_default));
        let invoices: Vec<Invoice> = respond("GET", "/api/billing/invoices").decode().unwrap();
        assert_eq!(invoices.len(), 3);
    }

    #[test]
    fn tenant_fixtures_decode_into_dtos() {
        let profile: TenantProfile = respond("GET", "/api/tenant/profile").decode().unwrap();
        assert_eq!(profile.slug, "acme");
        let _: TenantSettings = respond("GET", "/api/tenant/settings").decode().unwrap();
        let branding: TenantBranding = respond("GET", "/api/tenant/branding").decode().unwrap();
        assert!(branding.custom_domain.is_none());
    }

    #[test]
    fn payment_fixtures_decode_into_dtos() {
        let _: PayoutSchedule = respond("GET", "/api/admin/payments/schedule")
            .decode()
            .unwrap();
        let _: FeeConfig = respond("GET", "/api/admin/payments/fees").decode().unwrap();
        let transactions: Vec<Transaction> = respond("GET", "/api/admin/payments/transactions")
            .decode()
            .unwrap();
        assert!(transactions.iter().any(|t| t.amount < 0.0));
        let _: FinanceOverview = respond("GET", "/api/tenant/finance/overview")
            .decode()
            .unwrap();
        let payouts: Vec<PayoutRecord> = respond("GET", "/api/tenant/finance/payouts")
            .decode()
            .unwrap();
        assert_eq!(payouts.len(), 3);
        let _: UserPaymentOverview = respond("GET", "/api/user/payments/overview")
            .decode()
            .unwrap();
    }

    #[test]
    fn query_strings_do_not_affect_the_lookup() {
        let stats: DashboardStats = respond("GET", "/api/dashboard/stats?refresh=1")
            .decode()
            .unwrap();
        assert_eq!(stats.active_users, 1318);
    }

    #[test]
    fn unmapped_endpoint_answers_with_generic_success() {
        let envelope = respond("GET", "/api/does-not-exist");
        assert!(envelope.success);
        assert!(envelope.data.is_some());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn method_is_part_of_the_key() {
        // GET on a POST-only path falls through to the placeholder
        let envelope = respond("GET", "/api/billing/payment-methods/default");
        let message = envelope.data.unwrap();
        assert_eq!(
            message["message"],
            "Demo data for this endpoint is not available yet."
        );
    }
}
