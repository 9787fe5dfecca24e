use bytes::Bytes;
use dmsign_core::{Context, Result};
use dmsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // The signer never retries or times out, so configure both on the client.
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("dmsign-example/0.1")
        .build()
        .map_err(|e| dmsign_core::Error::config_invalid("failed to build client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = "https://api.dmarket.com/exchange/v1/market/items?gameId=a8db&limit=1&currency=USD";
    println!("GET {url}");

    let req = http::Request::get(url).body(Bytes::new())?;
    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", resp.body());
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
