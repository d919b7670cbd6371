use std::path::Path;

use bigpay_client::{BigpayError, Client};
use serde::de::DeserializeOwned;

const USAGE: &str = "usage: bigpay-client <command> <request.json> [target]

commands:
  submit-payment                 submit an API payment
  offsite-payment                print the hosted payment form (optional target)
  client-token                   generate a client token
  load-instruments               list a shopper's stored instruments
  load-instruments-with-address  list instruments trusted for a shipping address
  delete-instrument              delete a stored instrument";

fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, BigpayError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| BigpayError::Config(format!("cannot read {}: {e}", path.display())))?;
    Ok(serde_json::from_str(&raw)?)
}

async fn run(
    client: &Client,
    command: &str,
    path: &Path,
    target: Option<&str>,
) -> Result<String, BigpayError> {
    let resp = match command {
        "submit-payment" => client.submit_payment(&read_request(path)?).await?,
        "client-token" => client.generate_client_token(&read_request(path)?).await?,
        "load-instruments" => client.load_instruments(&read_request(path)?).await?,
        "load-instruments-with-address" => {
            client
                .load_instruments_with_address(&read_request(path)?)
                .await?
        }
        "delete-instrument" => {
            client
                .delete_shopper_instrument(&read_request(path)?)
                .await?
        }
        "offsite-payment" => {
            let form = client
                .initialize_offsite_payment(&read_request(path)?, target)
                .await?;
            return Ok(form.to_html());
        }
        other => return Err(BigpayError::Config(format!("unknown command: {other}"))),
    };

    Ok(serde_json::to_string_pretty(&resp)?)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, path) = match (args.first(), args.get(1)) {
        (Some(command), Some(path)) => (command.as_str(), Path::new(path)),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let target = args.get(2).map(String::as_str);

    let client = match Client::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(host = %client.config().host, %command, "bigpay client ready");

    match run(&client, command, path, target).await {
        Ok(output) => println!("{output}"),
        Err(BigpayError::Rejected(resp)) => {
            eprintln!("ERROR: request rejected with status {}", resp.status);
            if let Ok(body) = serde_json::to_string_pretty(&resp.data) {
                eprintln!("{body}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigpay_client::ClientConfig;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_file(body: serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.to_string().as_bytes()).unwrap();
        file
    }

    fn hosted_payment_request() -> serde_json::Value {
        serde_json::json!({
            "authToken": "auth-token",
            "paymentMethod": { "id": "paypal", "type": "PAYMENT_TYPE_HOSTED" },
            "order": { "orderId": "245", "currency": "USD", "grandTotal": 19000 },
            "store": { "storeId": "1504098821" }
        })
    }

    #[tokio::test]
    async fn test_load_instruments_prints_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/stores/1504098821/shoppers/0/instruments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "vaulted_instruments": [{ "bigpay_token": "123" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::with_config(ClientConfig::new(server.uri()));
        let file = request_file(serde_json::json!({
            "storeId": "1504098821",
            "customerId": "0",
            "authToken": "shopper-token"
        }));

        let output = run(&client, "load-instruments", file.path(), None)
            .await
            .unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["status"], 200);
        assert_eq!(printed["data"]["vaulted_instruments"][0]["bigpay_token"], "123");
    }

    #[tokio::test]
    async fn test_offsite_payment_prints_form_for_target() {
        let client = Client::with_config(ClientConfig::new("https://bigpay.dev"));
        let file = request_file(hosted_payment_request());

        let output = run(&client, "offsite-payment", file.path(), Some("target_iframe"))
            .await
            .unwrap();

        assert!(output.contains("<form"));
        assert!(output.contains(r#"action="https://bigpay.dev/pay/initialize""#));
        assert!(output.contains(r#"target="target_iframe""#));
        assert!(output.contains(r#"name="order_id" value="245""#));
    }

    #[tokio::test]
    async fn test_unknown_command_is_a_config_error() {
        let client = Client::with_config(ClientConfig::new("https://bigpay.dev"));
        let file = request_file(hosted_payment_request());

        let err = run(&client, "refund", file.path(), None).await.unwrap_err();

        assert!(matches!(err, BigpayError::Config(ref m) if m == "unknown command: refund"));
    }

    #[tokio::test]
    async fn test_unreadable_or_invalid_request_file() {
        let client = Client::with_config(ClientConfig::new("https://bigpay.dev"));

        let err = run(&client, "client-token", Path::new("/nonexistent/request.json"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, BigpayError::Config(_)));

        let file = request_file(serde_json::json!({ "authToken": "auth-token" }));
        let err = run(&client, "client-token", file.path(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, BigpayError::Serde(_)));
    }
}
