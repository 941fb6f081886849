use comprobante::cart::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CartConfig::default().base_url);
    let client = match CartClient::new(&CartConfig::new(base_url)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Cannot create client: {e}");
            std::process::exit(1);
        }
    };

    match client.cart_quantity().await {
        Ok(n) => println!("Items in cart: {n}"),
        Err(e) => eprintln!("Cart quantity failed: {e}"),
    }
}
