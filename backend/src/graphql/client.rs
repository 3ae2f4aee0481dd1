//! Query execution against the upstream shop GraphQL API.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlResponseError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponseError {
    message: String,
}

pub async fn execute_query<V: Serialize, T: DeserializeOwned>(
    document: &str,
    operation_name: &str,
    variables: V,
) -> anyhow::Result<T> {
    let endpoint =
        std::env::var("SHOP_GRAPHQL_URL").unwrap_or("http://127.0.0.1:8000/graphql/".to_string());
    let client = reqwest::Client::new();

    let request = GraphqlRequest {
        query: document,
        operation_name,
        variables,
    };
    let response = client.post(endpoint).json(&request).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::debug!(
        "graphql {}: response len = {}",
        operation_name,
        response_txt.len()
    );

    let response: GraphqlResponse<T> = serde_json::from_str(&response_txt)?;
    unwrap_response(operation_name, response)
}

fn unwrap_response<T>(operation_name: &str, response: GraphqlResponse<T>) -> anyhow::Result<T> {
    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("GraphQL errors from {}: {}", operation_name, messages);
    }
    response
        .data
        .ok_or_else(|| anyhow::anyhow!("GraphQL response for {} carried no data", operation_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u64,
    }

    #[test]
    fn data_is_unwrapped() {
        let response: GraphqlResponse<Payload> =
            serde_json::from_str(r#"{"data":{"value":7}}"#).unwrap();
        let payload = unwrap_response("Test", response).unwrap();
        assert_eq!(payload, Payload { value: 7 });
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let response: GraphqlResponse<Payload> = serde_json::from_str(
            r#"{"data":null,"errors":[{"message":"first"},{"message":"second"}]}"#,
        )
        .unwrap();
        let error = unwrap_response("Test", response).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("first"));
        assert!(message.contains("second"));
    }

    #[test]
    fn missing_data_is_an_error() {
        let response: GraphqlResponse<Payload> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(unwrap_response("Test", response).is_err());
    }
}
