use std::io;

use sinch_rcs::{SendOutcome, SendRcs, SinchClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Comma-separated list, e.g. "+46700000001, +46700000002".
    let phones = std::env::var("SINCH_RCS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SINCH_RCS_TO environment variable is required",
        )
    })?;
    let message = std::env::var("SINCH_RCS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sinch-rcs demo.".to_owned());

    let client = SinchClient::from_env()?;
    let recipients = phones.split(',').map(str::to_owned).collect::<Vec<_>>();
    let request = SendRcs::new(recipients, message);

    match client.send_rcs(request).await? {
        SendOutcome::Single(result) => println!("{}", result.as_json()),
        SendOutcome::Batch(results) => {
            for result in results {
                println!("{}", result.as_json());
            }
        }
    }

    Ok(())
}
