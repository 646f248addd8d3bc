pub mod products;

pub async fn greeting() -> &'static str {
    "Hello from Azure Deploy POC!"
}

pub async fn health() -> &'static str {
    "Healthy"
}
