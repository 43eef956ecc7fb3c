//! Run passive liveness on a face image.
//!
//! ```sh
//! GLAIR_USERNAME=... GLAIR_PASSWORD=... GLAIR_API_KEY=... \
//!     cargo run -p glair-vision --example passive_liveness -- ./face.jpeg
//! ```

use glair_vision::{
    Client, Configuration, ErrorCode, Image, LeveledLogger, LogLevel,
    face::PassiveLivenessInput,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let image = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "face.jpeg".to_string());

    let mut configuration = Configuration::new(
        std::env::var("GLAIR_USERNAME").unwrap_or_default(),
        std::env::var("GLAIR_PASSWORD").unwrap_or_default(),
        std::env::var("GLAIR_API_KEY").unwrap_or_default(),
    );
    configuration.with_logger(LeveledLogger::new(LogLevel::Debug));
    let client = Client::new(configuration);

    let result = client
        .face_bio()
        .passive_liveness(PassiveLivenessInput {
            image: Image::from_path(image),
            request_id: None,
        })
        .await;

    match result {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to format result: {e}"),
        },
        Err(e) => match e.code() {
            ErrorCode::Api => eprintln!("API Error: {:?}", e.response()),
            code => eprintln!("Error: {code}: {e}"),
        },
    }
}
