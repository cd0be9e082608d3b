use clap::Parser;
use tracing::{info, Level};
use lms::catalog::domain::CatalogService;
use lms::checkout::domain::CheckoutService;
use lms::core::domain::Configuration;
use lms::gateway::GatewayPublisherVia;
use lms::library::factory::create_library;
use lms::users::domain::RegistryService;
use lms::utils::logs::{setup_tracing, LogFormat};
use lms::{BookEntity, Condition, Librarian, UserEntity};

/// Runs a short lending session against an in-memory library branch.
#[derive(Parser, Debug)]
#[command(name = "library", version, about)]
struct Args {
    /// Branch the library serves
    #[arg(long, env = "LIBRARY_BRANCH", default_value = "main")]
    branch: String,

    /// Where domain events go: log or memory
    #[arg(long, env = "LIBRARY_PUBLISHER", default_value = "log")]
    publisher: String,

    /// Log output: text or json
    #[arg(long, env = "LIBRARY_LOG_FORMAT", default_value = "text")]
    log_format: String,

    #[arg(long, env = "LIBRARY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level: Level = args.log_level.parse()?;
    setup_tracing(LogFormat::from(args.log_format), level);

    let config = Configuration::new(args.branch.as_str())
        .with_publisher(GatewayPublisherVia::from(args.publisher));
    let mut library = create_library(&config);
    info!("Library branch {} is open.", library.branch_id());

    let maria = Librarian::new("Maria");
    maria.add_book(&mut library, BookEntity::printed("War and Peace", "Leo Tolstoy", 1869, 1225, Condition::Good)?)?;
    maria.add_book(&mut library, BookEntity::electronic("The Master and Margarita", "Mikhail Bulgakov", 1966, 5.0, "epub")?)?;
    maria.add_book(&mut library, BookEntity::printed("Crime and Punishment", "Fyodor Dostoevsky", 1866, 480, Condition::Poor)?)?;
    maria.register_user(&mut library, UserEntity::new("Anna"))?;
    maria.register_user(&mut library, maria.as_user().clone())?;

    library.show_all_books()?;
    library.lend_book("War and Peace", "Anna")?;
    library.lend_book("The Master and Margarita", "Maria")?;
    if let Err(err) = library.lend_book("War and Peace", "Maria") {
        info!("Lending refused: {}", err);
    }
    library.show_user_books("Anna")?;
    library.show_available_books()?;
    library.return_book("War and Peace", "Anna")?;
    library.show_user_books("Anna")?;

    let download = library.download_book("The Master and Margarita")?;
    info!("{}", download);
    let condition = library.repair_book("Crime and Punishment")?;
    info!("Crime and Punishment is now in {} condition.", condition);

    let listing = library.show_all_books()?;
    info!("Closing with {} books in the catalog.", listing.len());
    Ok(())
}
