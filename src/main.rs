use clap::Parser;
use skilled_helpers::config::cli::Command;
use skilled_helpers::domain::model::{Product, ProductSubmission, WorkerProfile, WorkerSubmission};
use skilled_helpers::utils::error::ErrorSeverity;
use skilled_helpers::utils::{logger, validation::Validate};
use skilled_helpers::{
    build_advisor, open_directory, AppConfig, CatalogError, CategoryFilter, CliConfig, CATEGORIES,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    config.logging.verbose |= cli.verbose;

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> Result<(), CatalogError> {
    let mut directory = open_directory(config)?;

    match command {
        Command::Categories => {
            for entry in CATEGORIES {
                println!("{:<14} {}", entry.name, entry.icon);
            }
        }
        Command::Workers { category, query } => {
            let filter = CategoryFilter::from_label(&category)
                .ok_or(CatalogError::UnknownCategoryError { label: category })?;
            let workers = directory.request_filter(filter, &query);
            if workers.is_empty() {
                println!("No professionals found");
            }
            for worker in &workers {
                print_worker(worker);
            }
        }
        Command::Products => {
            let products = directory.products();
            if products.is_empty() {
                println!("Shelf is empty");
            }
            for product in &products {
                print_product(product);
            }
        }
        Command::AddWorker(args) => {
            let added = directory.request_add_worker(&WorkerSubmission {
                name: args.name,
                category: args.category,
                services: args.services,
                description: args.description,
                hourly_rate: args.rate,
                location: args.location,
                phone: args.phone,
                image_url: args.image,
            })?;
            println!("✅ Added worker {}", added.entity.id);
            print_worker(&added.entity);
            if !added.save.is_saved() {
                println!("⚠️ Saved for this session only");
            }
        }
        Command::AddProduct(args) => {
            let added = directory.request_add_product(&ProductSubmission {
                name: args.name,
                category: args.category,
                price: args.price,
                image: args.image,
            })?;
            println!("✅ Added product {}", added.entity.id);
            print_product(&added.entity);
            if !added.save.is_saved() {
                println!("⚠️ Saved for this session only");
            }
        }
        Command::Suggest { symptoms } => {
            let advisor = build_advisor(config)?;
            let category = directory
                .request_category_suggestion(advisor.as_ref(), &symptoms)
                .await?;
            println!("🤖 Suggested category: {}", category);
            for worker in directory.visible_workers() {
                print_worker(&worker);
            }
        }
        Command::Reset => {
            let status = directory.reset_catalog();
            println!(
                "♻️ Catalog reset ({})",
                if status.is_saved() { "saved" } else { "not saved" }
            );
        }
    }

    Ok(())
}

fn print_worker(worker: &WorkerProfile) {
    println!(
        "[{}] {} - {} - ₹{}/hr - ★{} ({}){}",
        worker.id,
        worker.name,
        worker.category,
        worker.hourly_rate,
        worker.rating,
        worker.review_count,
        if worker.verified { " - VERIFIED" } else { "" }
    );
    println!("    {} | {}", worker.location, worker.phone);
    if !worker.services.is_empty() {
        println!("    {}", worker.services.join(", "));
    }
}

fn print_product(product: &Product) {
    println!(
        "[{}] {} - {} - ₹{} - ★{}",
        product.id, product.name, product.category, product.price, product.rating
    );
}
