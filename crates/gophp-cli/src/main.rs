use clap::{Parser, Subcommand};
use gophpffi::{
    commands::{
        build, generate,
        init::{self, InitCommand},
        make, SourceArgs,
    },
    logger, GlobalOpts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gophpffi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Go-PHP FFI service generator",
    long_about = "gophpffi generates PHP FFI bindings for Go shared libraries.\n\nFunctions marked with `//export Name` in a Go source file become methods of a PHP service class."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Go service from a template
    Init(InitCommand),
    /// Generate the PHP service class from a Go source file
    Generate(SourceArgs),
    /// Build the Go shared library (.so/.dylib/.dll)
    Build(SourceArgs),
    /// Generate bindings and build the library
    Make(SourceArgs),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let result = match cli.command {
        Commands::Init(cmd) => init::handle_init(cmd, &cli.global),
        Commands::Generate(args) => generate::handle_generate(args, &cli.global),
        Commands::Build(args) => build::handle_build(args, &cli.global),
        Commands::Make(args) => make::handle_make(args, &cli.global),
    };

    if let Err(e) = result {
        logger::error(&format!("{:#}", e));
        logger::show_log_path();
        std::process::exit(1);
    }
}
