use anyhow::Context;
use clap::Parser;
use hbnb_client::app::pages::add_review::ReviewForm;
use hbnb_client::app::pages::login::LoginForm;
use hbnb_client::domain::model::PriceFilter;
use hbnb_client::utils::{logger, validation::Validate};
use hbnb_client::{
    App, CliConfig, Command, FileSessionStore, HttpApiClient, NavigationContext, Settings,
    TerminalSurface,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::from_cli(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    let api = HttpApiClient::new(&settings.api_base_url)
        .with_context(|| format!("Cannot build API client for {}", settings.api_base_url))?;
    let session = FileSessionStore::new(&settings.session_path);
    let mut app = App::new(api, session, TerminalSurface::stdout());

    match cli.command {
        Command::Places { max_price } => {
            let filter = match max_price.as_deref() {
                Some(value) => match PriceFilter::parse(value) {
                    Some(filter) => Some(filter),
                    None => {
                        eprintln!("❌ Invalid --max-price '{}': use \"all\" or a number", value);
                        std::process::exit(2);
                    }
                },
                None => settings.default_max_price,
            };
            app.open_listing(filter).await?;
        }
        Command::Place { id, href } => {
            let context = match href {
                Some(href) => NavigationContext::from_href(&href),
                None => NavigationContext::new(id),
            };
            app.open_detail(&context).await?;
        }
        Command::Login { email, password } => {
            let next = app.submit_login(&LoginForm { email, password }).await?;
            if next.is_none() {
                std::process::exit(1);
            }
        }
        Command::Logout => {
            let next = app.logout().await?;
            app.open(next).await?;
        }
        Command::Review {
            place_id,
            text,
            rating,
        } => {
            let context = NavigationContext::new(Some(place_id));
            let next = app
                .submit_review(&context, &ReviewForm { text, rating })
                .await?;
            if next.is_none() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
