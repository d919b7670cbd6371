//! Hosted payment forms.
//!
//! An offsite flow is started by POSTing a flat form to the payment service
//! from the shopper's browser. [`OffsitePaymentForm`] describes that form so
//! the caller can render it into the right browsing context.

use serde::{Deserialize, Serialize};

use crate::payment::{Address, PaymentRequestData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsitePaymentForm {
    /// Absolute URL the form posts to.
    pub action: String,
    pub method: String,
    /// Browsing context the form is submitted into, e.g. `_top` or an iframe name.
    pub target: String,
    /// Ordered form fields. Empty values are omitted.
    pub fields: Vec<(String, String)>,
}

impl OffsitePaymentForm {
    pub fn new(action: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: "POST".to_string(),
            target: target.into(),
            fields: Vec::new(),
        }
    }

    /// Build the form for a hosted payment request.
    pub fn from_request(
        action: impl Into<String>,
        target: impl Into<String>,
        data: &PaymentRequestData,
    ) -> Self {
        let mut form = Self::new(action, target);

        form.push("bc_auth_token", &data.auth_token);
        form.push("payment_method_id", &data.payment_method.id);
        form.push_opt("gateway", data.payment_method.gateway.as_deref());
        form.push("order_id", &data.order.order_id);
        form.push("currency", &data.order.currency);
        form.push("amount", &data.order.grand_total.to_string());
        form.push_opt("order_token", data.order.token.as_deref());
        form.push_opt("return_url", data.order.callback_url.as_deref());
        form.push("store_id", &data.store.store_id);
        form.push_opt("store_hash", data.store.store_hash.as_deref());

        if let Some(customer) = &data.customer {
            form.push_opt("customer_id", customer.customer_id.as_deref());
            form.push_opt("customer_email", customer.email.as_deref());
        }
        if let Some(address) = &data.billing_address {
            form.push_address("billing_address", address);
        }
        if let Some(address) = &data.shipping_address {
            form.push_address("shipping_address", address);
        }

        form
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `application/x-www-form-urlencoded` body of the form.
    pub fn encoded_body(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Markup for a form that submits itself as soon as it is loaded.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<form action="{}" method="{}" target="{}" style="display: none">"#,
            escape_html(&self.action),
            escape_html(&self.method),
            escape_html(&self.target),
        );
        for (key, value) in &self.fields {
            html.push_str(&format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape_html(key),
                escape_html(value)
            ));
        }
        html.push_str("</form><script>document.forms[document.forms.length - 1].submit();</script>");
        html
    }

    fn push(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.fields.push((key.to_string(), value.to_string()));
        }
    }

    fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    fn push_address(&mut self, prefix: &str, address: &Address) {
        let parts = [
            ("first_name", &address.first_name),
            ("last_name", &address.last_name),
            ("company", &address.company),
            ("street_1", &address.address_line1),
            ("street_2", &address.address_line2),
            ("city", &address.city),
            ("state", &address.province_code),
            ("zip", &address.postal_code),
            ("country_code", &address.country_code),
            ("phone", &address.phone),
            ("email", &address.email),
        ];
        for (name, value) in parts {
            self.push_opt(&format!("{prefix}_{name}"), value.as_deref());
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{Customer, Order, PaymentMethod, PaymentMethodType, Store};

    fn hosted_request() -> PaymentRequestData {
        PaymentRequestData {
            auth_token: "auth-token".to_string(),
            payment_method: PaymentMethod {
                id: "paypal".to_string(),
                method_type: PaymentMethodType::Hosted,
                gateway: None,
                method: None,
            },
            payment: None,
            order: Order {
                order_id: "245".to_string(),
                currency: "AUD".to_string(),
                grand_total: 12500,
                token: None,
                callback_url: Some("https://store.example/checkout/order-confirmation".to_string()),
            },
            store: Store {
                store_id: "1504098821".to_string(),
                store_hash: None,
                store_name: None,
                store_language: None,
            },
            customer: Some(Customer {
                customer_id: Some("0".to_string()),
                ..Default::default()
            }),
            billing_address: Some(Address {
                first_name: Some("Foo".to_string()),
                city: Some("Sydney".to_string()),
                postal_code: Some("2000".to_string()),
                ..Default::default()
            }),
            shipping_address: None,
            source: None,
            quote_meta: None,
            order_meta: None,
        }
    }

    #[test]
    fn test_fields_from_request() {
        let form = OffsitePaymentForm::from_request(
            "https://bigpay.dev/pay/initialize",
            "_top",
            &hosted_request(),
        );

        assert_eq!(form.method, "POST");
        assert_eq!(form.field("payment_method_id"), Some("paypal"));
        assert_eq!(form.field("amount"), Some("12500"));
        assert_eq!(form.field("currency"), Some("AUD"));
        assert_eq!(
            form.field("return_url"),
            Some("https://store.example/checkout/order-confirmation")
        );
        assert_eq!(form.field("customer_id"), Some("0"));
        assert_eq!(form.field("billing_address_city"), Some("Sydney"));
        assert_eq!(form.field("billing_address_zip"), Some("2000"));
        assert_eq!(form.field("gateway"), None);
        assert_eq!(form.field("shipping_address_city"), None);
    }

    #[test]
    fn test_encoded_body() {
        let mut form = OffsitePaymentForm::new("https://bigpay.dev/pay/initialize", "_top");
        form.push("return_url", "https://store.example/?a=1&b=2");
        form.push("note", "");
        assert_eq!(
            form.encoded_body(),
            "return_url=https%3A%2F%2Fstore.example%2F%3Fa%3D1%26b%3D2"
        );
    }

    #[test]
    fn test_html_is_escaped() {
        let mut form = OffsitePaymentForm::new("https://bigpay.dev/pay/initialize", "target_iframe");
        form.push("customer_email", "\"><script>alert(1)</script>");
        let html = form.to_html();

        assert!(html.contains(r#"target="target_iframe""#));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("\"><script>alert"));
    }
}
