use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use stock_alerts_api_types::{
    lenient::from_str_lenient,
    requests::{ActionResponse, EmailRequest, StockRequest},
    MonitoredStock,
};

use crate::error::{AppError, AppResult};

pub(crate) async fn get_stock_alerts<R>(path: &str) -> AppResult<Vec<R>>
where
    R: DeserializeOwned,
{
    let body = fetch_text(path).await?;
    decode_list(path, &body)
}

pub(crate) async fn get_monitored_stocks(path: &str) -> AppResult<Vec<MonitoredStock>> {
    let body = fetch_text(path).await?;
    decode_list(path, &body)
}

pub(crate) async fn subscribe(path: &str, email: String) -> AppResult<ActionResponse> {
    post_api(path, &EmailRequest { email }).await
}

pub(crate) async fn unsubscribe(path: &str, email: String) -> AppResult<ActionResponse> {
    post_api(path, &EmailRequest { email }).await
}

pub(crate) async fn request_stock(path: &str, symbol: String) -> AppResult<ActionResponse> {
    let reply = post_text(path, &StockRequest { symbol }).await?;
    decode_rejectable(path, reply)
}

async fn post_api<B>(path: &str, body: &B) -> AppResult<ActionResponse>
where
    B: Serialize,
{
    let reply = post_text(path, body).await?;
    decode_action(path, reply)
}

/// Status and body of a finished POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn status_error(&self, url: &str) -> AppError {
        AppError::HttpStatus {
            url: url.to_string(),
            status: self.status,
        }
    }
}

/// Any non-2xx status is an error regardless of the body.
pub(crate) fn decode_action(url: &str, reply: HttpReply) -> AppResult<ActionResponse> {
    if !reply.ok() {
        return Err(reply.status_error(url));
    }
    Ok(serde_json::from_str(&reply.body)?)
}

/// Like [`decode_action`], but a non-2xx reply whose body explains the rejection is
/// returned as an unsuccessful [`ActionResponse`].
pub(crate) fn decode_rejectable(url: &str, reply: HttpReply) -> AppResult<ActionResponse> {
    if reply.ok() {
        return Ok(serde_json::from_str(&reply.body)?);
    }
    match serde_json::from_str::<ActionResponse>(&reply.body) {
        Ok(response) => Ok(ActionResponse {
            success: false,
            message: response.message,
        }),
        Err(_) => Err(reply.status_error(url)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes a body that must be a JSON array.
///
/// The shape is checked before the elements so that an error object served with
/// a 200 is reported as such instead of as a missing field.
pub(crate) fn decode_list<T>(url: &str, body: &str) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let value: Value = from_str_lenient(body)?;
    if !value.is_array() {
        return Err(AppError::UnexpectedShape {
            url: url.to_string(),
            expected: "an array",
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(feature = "csr")]
async fn fetch_text(path: &str) -> AppResult<String> {
    use gloo_net::http::Request;

    let response = Request::get(path).send().await?;
    if !response.ok() {
        return Err(AppError::HttpStatus {
            url: path.to_string(),
            status: response.status(),
        });
    }
    Ok(response.text().await?)
}

#[cfg(feature = "csr")]
async fn post_text<B>(path: &str, body: &B) -> AppResult<HttpReply>
where
    B: Serialize,
{
    use gloo_net::http::Request;

    let response = Request::post(path).json(body)?.send().await?;
    let status = response.status();
    // an unreadable error body still reports the status
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if !response.ok() => {
            log::warn!("{path} responded with HTTP {status} and an unreadable body: {e}");
            String::new()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(HttpReply { status, body })
}

#[cfg(not(feature = "csr"))]
async fn fetch_text(path: &str) -> AppResult<String> {
    Err(browser_only(path))
}

#[cfg(not(feature = "csr"))]
async fn post_text<B>(path: &str, _body: &B) -> AppResult<HttpReply>
where
    B: Serialize,
{
    Err(browser_only(path))
}

#[cfg(not(feature = "csr"))]
fn browser_only(path: &str) -> AppError {
    crate::error::SystemError::Message(format!("{path} can only be requested from the browser"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_alerts_api_types::AlertRecord;

    #[test]
    fn non_array_monitored_stocks_is_a_shape_error() {
        let err = decode_list::<MonitoredStock>(
            "/monitored-stocks-api",
            r#"{"success": false, "message": "Error reading stock data."}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::UnexpectedShape {
                found: "an object",
                ..
            }
        ));
    }

    #[test]
    fn array_of_monitored_stocks() {
        let stocks = decode_list::<MonitoredStock>(
            "/monitored-stocks-api",
            r#"[{"symbol": "AAPL", "company_name": "Apple Inc."}, {"symbol": "XYZ"}]"#,
        )
        .unwrap();
        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[1].company_name, None);
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        let err = decode_list::<AlertRecord>("/stock-alerts", "<html>").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn alert_payload_with_nan_price_still_decodes() {
        let alerts = decode_list::<AlertRecord>(
            "/stock-alerts",
            r#"[
                {"symbol": "GOOD", "current_price": 10.0, "moving_averages": {"50": 9.0}},
                {"symbol": "BAD", "current_price": NaN, "moving_averages": {"50": NaN}}
            ]"#,
        )
        .unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts[1].price().is_none());
    }

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply {
            status,
            body: body.to_string(),
        }
    }

    const NO_SYMBOL: &str = r#"{"success": false, "message": "No stock symbol provided."}"#;

    #[test]
    fn explained_rejection_keeps_the_backend_message() {
        let response = decode_rejectable("/request-stock", reply(400, NO_SYMBOL)).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "No stock symbol provided.");
    }

    #[test]
    fn rejection_never_reports_success() {
        let response = decode_rejectable(
            "/request-stock",
            reply(409, r#"{"success": true, "message": "Already monitored."}"#),
        )
        .unwrap();
        assert!(!response.success);
    }

    #[test]
    fn unexplained_rejection_is_a_status_error() {
        let err = decode_rejectable("/request-stock", reply(500, "<h1>oops</h1>")).unwrap_err();
        assert!(matches!(err, AppError::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn email_endpoints_treat_any_error_status_as_failure() {
        let err = decode_action("/subscribe", reply(400, NO_SYMBOL)).unwrap_err();
        assert!(matches!(err, AppError::HttpStatus { status: 400, .. }));
        let ok = decode_action(
            "/subscribe",
            reply(200, r#"{"success": true, "message": "Subscribed."}"#),
        )
        .unwrap();
        assert!(ok.success);
    }

    #[test]
    fn element_errors_surface() {
        let err = decode_list::<MonitoredStock>("/monitored-stocks-api", r#"[{"name": "x"}]"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
