use clap::Parser;
use service_portal::core::server::start_server;
use service_portal::utils::{logger, validation::Validate};
use service_portal::ServerSettings;

#[derive(Parser, Debug)]
#[command(name = "service-portal")]
#[command(about = "Static web server with a JSON services endpoint")]
struct Args {
    /// Path to TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listening host
    #[arg(long)]
    host: Option<String>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the directory static files are served from
    #[arg(long)]
    web_root: Option<String>,

    /// Override the number of worker threads
    #[arg(long)]
    workers: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut settings = match &args.config {
        Some(path) => match ServerSettings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => ServerSettings::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(web_root) = args.web_root {
        settings.server.web_root = web_root;
    }
    if let Some(workers) = args.workers {
        settings.server.worker_threads = workers;
    }

    logger::init_logger(&settings.logging.level, settings.log_format(), args.verbose);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.verbose {
        tracing::debug!("Server settings: {:?}", settings);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.server.worker_threads)
        .enable_all()
        .build()?;

    tracing::info!(
        "Using {} worker threads",
        settings.server.worker_threads
    );

    if let Err(e) = runtime.block_on(start_server(&settings)) {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
