use kinesis_client::{
    types::{PutRecordsInput, PutRecordsRequestEntry},
    Config, KinesisClient,
};
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

const STREAM: &str = "People";
const COUNT: usize = 10;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let client = KinesisClient::builder().await.config(&config).build();

    let entries = (0..COUNT).map(|_| {
        let id = Ulid::new().to_string();
        PutRecordsRequestEntry::builder()
            .data(format!(r#"{{"Id":"{id}"}}"#))
            .partition_key(id)
            .build()
    });
    let input = PutRecordsInput::builder()
        .records(entries)
        .stream_name(config.stream_name().unwrap_or_else(|| STREAM.into()))
        .build();

    match client.put_records(input).await {
        Ok(output) => {
            info!(
                "Put {} records, {} failed",
                output.records().len(),
                output.failed_record_count().unwrap_or_default()
            );
            for (index, entry) in output.failed() {
                warn!(
                    "Record {index} failed: {} {}",
                    entry.error_code().unwrap_or_default(),
                    entry.error_message().unwrap_or_default()
                );
            }
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }
}
