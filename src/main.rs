use clap::Parser;
use urlqr::core::render;
use urlqr::utils::{logger, validation::Validate};
use urlqr::{CliConfig, Generator, LocalStorage, QrcodeMatrixEncoder, Storage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting urlqr");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let generator = Generator::new(QrcodeMatrixEncoder);
    let code = match generator.run(&config.url, &config.encode_options()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("QR generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.preview {
        println!("{}", render::to_terminal_string(&code.matrix, 2));
    }

    let storage = LocalStorage::new(config.output_path.clone());
    match storage.write_file(&code.filename, &code.png) {
        Ok(path) => {
            tracing::info!("QR code saved to {}", path);
            println!("✅ QR code generated for: {}", code.url);
            println!("📁 Saved to: {}", path);
            println!(
                "   Error correction: {} (~{}% recovery) | Box size: {} | Border size: {}",
                code.options.ec_level,
                code.options.ec_level.recovery_percent(),
                code.options.box_size,
                code.options.border_size
            );
        }
        Err(e) => {
            tracing::error!("Failed to save QR code: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
