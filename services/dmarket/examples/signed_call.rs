use dmsign_core::{Context, OsEnv, Result};
use dmsign_dmarket::{Client, DefaultCredentialProvider};
use dmsign_http_send_reqwest::ReqwestHttpSend;
use http::Method;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads DMARKET_PUBLIC_KEY and DMARKET_SECRET_KEY.
    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let client = match Client::from_provider(ctx, DefaultCredentialProvider::new()).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            eprintln!("Set DMARKET_PUBLIC_KEY and DMARKET_SECRET_KEY to run this example.");
            return Ok(());
        }
    };

    let path = "/trade-aggregator/v1/last-sales";
    let params = json!({"gameId": "a8db", "title": "AK-47 | B the Monster (Factory New)"});
    println!("Calling GET {path} with params: {params}");
    match client.call(Method::GET, path, params.as_object()).await {
        Ok(resp) => println!("{resp:#}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    // Create a target priced at $0.02 from the cheapest offer on the market.
    let params = json!({"gameId": "a8db", "limit": 1, "currency": "USD"});
    let offers = client
        .call(Method::GET, "/exchange/v1/market/items", params.as_object())
        .await?;
    let Some(offer) = offers["objects"].get(0) else {
        eprintln!("No offer found on the market");
        return Ok(());
    };

    let body = build_target_body(offer);
    let path = "/exchange/v1/target/create";
    println!("Calling POST {path} with body: {body:#}");
    match client.call(Method::POST, path, body.as_object()).await {
        Ok(resp) => println!("{resp:#}"),
        Err(e) => eprintln!("Error creating target: {e}"),
    }

    Ok(())
}

fn build_target_body(offer: &Value) -> Value {
    json!({"targets": [{
        "amount": 1,
        "gameId": offer["gameId"],
        "price": {"amount": "2", "currency": "USD"},
        "attributes": {
            "gameId": offer["gameId"],
            "categoryPath": offer["extra"]["categoryPath"],
            "title": offer["title"],
            "name": offer["title"],
            "image": offer["image"],
            "ownerGets": {"amount": "1", "currency": "USD"},
        },
    }]})
}
