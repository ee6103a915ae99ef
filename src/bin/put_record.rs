use kinesis_client::{types::PutRecordInput, Config, KinesisClient};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

const STREAM: &str = "People";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let client = KinesisClient::builder().await.config(&config).build();

    let id = Ulid::new().to_string();
    let input = PutRecordInput::builder()
        .stream_name(config.stream_name().unwrap_or_else(|| STREAM.into()))
        .data(format!(r#"{{"Id":"{id}"}}"#))
        .partition_key(id)
        .build();

    match client.put_record(input).await {
        Ok(output) => {
            info!(
                "Shard: {}, SequenceNumber: {}",
                output.shard_id(),
                output.sequence_number()
            );
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }
}
