use kinesis_client::{types::RegisterStreamConsumerInput, Config, KinesisClient};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const CONSUMER: &str = "reader";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let stream_arn = config
        .stream_arn()
        .expect("`stream_arn` is required in the config file");
    let client = KinesisClient::builder().await.config(&config).build();

    let input = RegisterStreamConsumerInput::builder()
        .stream_arn(stream_arn)
        .consumer_name(config.consumer_name().unwrap_or_else(|| CONSUMER.into()))
        .build();

    match client.register_stream_consumer(input).await {
        Ok(output) => {
            let consumer = output.into_consumer();
            info!(
                "Consumer ARN: {} ({})",
                consumer.arn(),
                consumer.status().as_str()
            );
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }
}
