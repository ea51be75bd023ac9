use clap::Parser;
use vanmoof_key_extractor::core::{ConfigProvider, CredentialsProvider};
use vanmoof_key_extractor::utils::{logger, validation::Validate};
use vanmoof_key_extractor::{
    ApiClient, CliConfig, KeyPipeline, LocalStorage, PayloadFile, PayloadSource, RunOutcome,
    TerminalPrompt, VanMoofError,
};

fn print_banner() {
    println!();
    println!("*********************************");
    println!("      VanMoof Key Extractor     ");
    println!("*********************************");
    println!();
}

fn print_outcome(outcome: &RunOutcome) {
    let record = &outcome.record;
    println!();
    println!("Bike Type: {}", record.device_type);
    println!("Frame Number: {}", record.frame_number);
    println!("MAC Address: {}", record.mac_address);
    println!("Encryption Key: {}", record.encryption_key);
    println!("Passcode: {}", record.passcode);
    println!();

    if let PayloadFile::Persisted(path) = &outcome.file {
        println!(
            "A file with all the JSON data has been written to {}",
            path.display()
        );
        println!();
    }
}

async fn run(config: &CliConfig) -> Result<RunOutcome, VanMoofError> {
    config.validate()?;

    let source = match &config.json_file {
        Some(path) => PayloadSource::LocalFile(path.clone()),
        None => {
            let prompt = TerminalPrompt::new(config.username.clone(), config.password.clone());
            PayloadSource::Live(prompt.credentials()?)
        }
    };

    let api = ApiClient::from_config(config)?;
    let storage = LocalStorage::new(config.output_dir());
    let pipeline = KeyPipeline::new(api, storage);

    pipeline.run(source).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    print_banner();

    match run(&config).await {
        Ok(outcome) => print_outcome(&outcome),
        Err(e) => {
            tracing::error!("❌ Failed ({:?}): {}", e.category(), e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
