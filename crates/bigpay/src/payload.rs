//! Wire payloads sent to the bigpay API.
//!
//! Request data arrives in camelCase from checkout; the API expects
//! snake_case bodies with a slightly different shape. These types borrow from
//! the request so mapping never copies card data.

use serde::Serialize;

use crate::payment::{Address, Customer, Order, PaymentInstrument, PaymentRequestData, Store};

#[derive(Debug, Serialize)]
pub struct AddressBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_1: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> From<&'a Address> for AddressBody<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            first_name: address.first_name.as_deref(),
            last_name: address.last_name.as_deref(),
            company: address.company.as_deref(),
            street_1: address.address_line1.as_deref(),
            street_2: address.address_line2.as_deref(),
            city: address.city.as_deref(),
            state_code: address.province_code.as_deref(),
            zip: address.postal_code.as_deref(),
            country_code: address.country_code.as_deref(),
            phone: address.phone.as_deref(),
            email: address.email.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreditCardBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'a str>,
}

impl<'a> CreditCardBody<'a> {
    fn from_instrument(instrument: &'a PaymentInstrument) -> Option<Self> {
        instrument.cc_number.as_ref()?;
        Some(Self {
            account_name: instrument.cc_name.as_deref(),
            number: instrument.cc_number.as_deref(),
            verification_value: instrument.cc_cvv.as_deref(),
            month: instrument.cc_expiry.as_ref().map(|e| e.month.as_str()),
            year: instrument.cc_expiry.as_ref().map(|e| e.year.as_str()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct VaultedInstrumentBody<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PaymentBody<'a> {
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigpay_token: Option<VaultedInstrumentBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_payment_instrument: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<&'a str>,
}

impl<'a> PaymentBody<'a> {
    fn from_request(data: &'a PaymentRequestData) -> Self {
        let instrument = data.payment.as_ref();
        Self {
            method: data
                .payment_method
                .method
                .as_deref()
                .unwrap_or(&data.payment_method.id),
            gateway: data.payment_method.gateway.as_deref(),
            credit_card: instrument.and_then(CreditCardBody::from_instrument),
            credit_card_token: instrument.and_then(|i| i.nonce.as_deref()),
            bigpay_token: instrument
                .and_then(|i| i.instrument_id.as_deref())
                .map(|token| VaultedInstrumentBody { token }),
            vault_payment_instrument: instrument.and_then(|i| i.should_save_instrument),
            device_info: instrument.and_then(|i| i.device_data.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalsBody {
    pub grand_total: u64,
}

#[derive(Debug, Serialize)]
pub struct OrderBody<'a> {
    pub id: &'a str,
    pub currency: &'a str,
    pub totals: TotalsBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressBody<'a>>,
}

impl<'a> OrderBody<'a> {
    fn from_request(order: &'a Order, data: &'a PaymentRequestData) -> Self {
        Self {
            id: &order.order_id,
            currency: &order.currency,
            totals: TotalsBody {
                grand_total: order.grand_total,
            },
            token: order.token.as_deref(),
            billing_address: data.billing_address.as_ref().map(AddressBody::from),
            shipping_address: data.shipping_address.as_ref().map(AddressBody::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreBody<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
}

impl<'a> From<&'a Store> for StoreBody<'a> {
    fn from(store: &'a Store) -> Self {
        Self {
            id: &store.store_id,
            hash: store.store_hash.as_deref(),
            name: store.store_name.as_deref(),
            language: store.store_language.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
}

impl<'a> From<&'a Customer> for CustomerBody<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            id: customer.customer_id.as_deref(),
            email: customer.email.as_deref(),
            first_name: customer.first_name.as_deref(),
            last_name: customer.last_name.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetaBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<&'a serde_json::Value>,
}

/// Body of a payment submission.
#[derive(Debug, Serialize)]
pub struct PaymentPayload<'a> {
    pub payment: PaymentBody<'a>,
    pub order: OrderBody<'a>,
    pub store: StoreBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaBody<'a>>,
}

impl<'a> PaymentPayload<'a> {
    pub fn from_request(data: &'a PaymentRequestData) -> Self {
        let meta = (data.quote_meta.is_some() || data.order_meta.is_some()).then(|| MetaBody {
            quote: data.quote_meta.as_ref(),
            order: data.order_meta.as_ref(),
        });

        Self {
            payment: PaymentBody::from_request(data),
            order: OrderBody::from_request(&data.order, data),
            store: StoreBody::from(&data.store),
            customer: data.customer.as_ref().map(CustomerBody::from),
            source: data.source.as_deref(),
            meta,
        }
    }
}

/// Body of a client token request.
#[derive(Debug, Serialize)]
pub struct ClientTokenPayload<'a> {
    pub gateway: &'a str,
    pub order: OrderBody<'a>,
    pub store: StoreBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerBody<'a>>,
}

impl<'a> ClientTokenPayload<'a> {
    pub fn from_request(data: &'a PaymentRequestData) -> Self {
        Self {
            gateway: data
                .payment_method
                .gateway
                .as_deref()
                .unwrap_or(&data.payment_method.id),
            order: OrderBody::from_request(&data.order, data),
            store: StoreBody::from(&data.store),
            customer: data.customer.as_ref().map(CustomerBody::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{CardExpiry, PaymentMethod, PaymentMethodType};

    fn request() -> PaymentRequestData {
        PaymentRequestData {
            auth_token: "auth-token".to_string(),
            payment_method: PaymentMethod {
                id: "braintree".to_string(),
                method_type: PaymentMethodType::Api,
                gateway: Some("braintree".to_string()),
                method: Some("credit-card".to_string()),
            },
            payment: Some(PaymentInstrument {
                cc_name: Some("BigCommerce".to_string()),
                cc_number: Some("4111111111111111".to_string()),
                cc_cvv: Some("123".to_string()),
                cc_expiry: Some(CardExpiry {
                    month: "10".to_string(),
                    year: "2030".to_string(),
                }),
                ..Default::default()
            }),
            order: Order {
                order_id: "245".to_string(),
                currency: "USD".to_string(),
                grand_total: 19000,
                token: Some("order-token".to_string()),
                callback_url: None,
            },
            store: Store {
                store_id: "1504098821".to_string(),
                store_hash: Some("k1drp8k8".to_string()),
                store_name: None,
                store_language: Some("en".to_string()),
            },
            customer: Some(Customer {
                customer_id: Some("0".to_string()),
                email: Some("shopper@bigcommerce.com".to_string()),
                ..Default::default()
            }),
            billing_address: Some(Address {
                first_name: Some("Foo".to_string()),
                address_line1: Some("12345 Testing Way".to_string()),
                province_code: Some("TX".to_string()),
                postal_code: Some("78701".to_string()),
                country_code: Some("US".to_string()),
                ..Default::default()
            }),
            shipping_address: None,
            source: Some("bigcommerce-checkout-js".to_string()),
            quote_meta: None,
            order_meta: None,
        }
    }

    #[test]
    fn test_payment_payload_shape() {
        let data = request();
        let body = serde_json::to_value(PaymentPayload::from_request(&data)).unwrap();

        assert_eq!(body["payment"]["method"], "credit-card");
        assert_eq!(body["payment"]["gateway"], "braintree");
        assert_eq!(body["payment"]["credit_card"]["number"], "4111111111111111");
        assert_eq!(body["payment"]["credit_card"]["month"], "10");
        assert_eq!(body["order"]["id"], "245");
        assert_eq!(body["order"]["totals"]["grand_total"], 19000);
        assert_eq!(body["order"]["billing_address"]["street_1"], "12345 Testing Way");
        assert_eq!(body["order"]["billing_address"]["state_code"], "TX");
        assert!(body["order"].get("shipping_address").is_none());
        assert_eq!(body["store"]["hash"], "k1drp8k8");
        assert_eq!(body["customer"]["email"], "shopper@bigcommerce.com");
        assert_eq!(body["source"], "bigcommerce-checkout-js");
        assert!(body.get("meta").is_none());
    }

    #[test]
    fn test_payment_payload_nonce_and_vaulted_instrument() {
        let mut data = request();
        data.payment = Some(PaymentInstrument {
            nonce: Some("fake-nonce".to_string()),
            instrument_id: Some("instr-1".to_string()),
            should_save_instrument: Some(true),
            ..Default::default()
        });
        data.quote_meta = Some(serde_json::json!({ "request": { "geoCountryCode": "AU" } }));

        let body = serde_json::to_value(PaymentPayload::from_request(&data)).unwrap();

        assert!(body["payment"].get("credit_card").is_none());
        assert_eq!(body["payment"]["credit_card_token"], "fake-nonce");
        assert_eq!(body["payment"]["bigpay_token"]["token"], "instr-1");
        assert_eq!(body["payment"]["vault_payment_instrument"], true);
        assert_eq!(body["meta"]["quote"]["request"]["geoCountryCode"], "AU");
    }

    #[test]
    fn test_client_token_payload_uses_gateway() {
        let mut data = request();
        let body = serde_json::to_value(ClientTokenPayload::from_request(&data)).unwrap();
        assert_eq!(body["gateway"], "braintree");
        assert_eq!(body["store"]["id"], "1504098821");

        data.payment_method.gateway = None;
        let body = serde_json::to_value(ClientTokenPayload::from_request(&data)).unwrap();
        assert_eq!(body["gateway"], "braintree");
        assert!(body.get("payment").is_none());
    }
}
