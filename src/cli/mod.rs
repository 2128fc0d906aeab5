use anyhow::Context;
use chrono::NaiveDate;
use clap::{Arg, ArgAction, Command};
use std::env;
use tracing::info;

use crate::{
    validation::validate_trip_plan_command, OpenRouterClient, TripPlanCommand,
};

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate AI trip itineraries with OpenRouter")
        .arg(
            Arg::new("location")
                .help("Destination for the trip")
                .required_unless_present("list-models")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .value_name("DATE")
                .help("First day of the trip (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .value_name("DATE")
                .help("Last day of the trip (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("people")
                .short('n')
                .long("people")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("1"),
        )
        .arg(
            Arg::new("preferences")
                .short('p')
                .long("preferences")
                .value_name("LIST")
                .help("Semicolon-delimited preference names")
                .default_value(""),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The OpenRouter model to use"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("OpenRouter API key (or set OPENROUTER_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("OpenRouter base URL (or set OPENROUTER_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("structured")
                .short('s')
                .long("structured")
                .help("Request a structured { itinerary, summary } response")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-models")
                .long("list-models")
                .help("List model identifiers supported by the provider")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("OPENROUTER_API_KEY").ok())
        .context("OpenRouter API key is required. Set OPENROUTER_API_KEY environment variable or use --api-key")?;

    let timeout_seconds: u64 = matches
        .get_one::<String>("timeout")
        .unwrap()
        .parse()
        .context("--timeout must be a whole number of seconds")?;

    let mut client = OpenRouterClient::new(api_key)
        .with_timeout(std::time::Duration::from_secs(timeout_seconds));

    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("OPENROUTER_BASE_URL").ok())
    {
        client = client.with_base_url(base_url);
    }

    if let Some(model) = matches.get_one::<String>("model") {
        client.set_default_model(model.clone());
    }

    if matches.get_flag("list-models") {
        for model in client.list_supported_models().await? {
            println!("{}", model);
        }
        return Ok(());
    }

    let location = matches.get_one::<String>("location").unwrap().clone();
    let date_from: NaiveDate = matches
        .get_one::<String>("from")
        .context("--from is required")?
        .parse()
        .context("--from must be a date in YYYY-MM-DD form")?;
    let date_to: NaiveDate = matches
        .get_one::<String>("to")
        .context("--to is required")?
        .parse()
        .context("--to must be a date in YYYY-MM-DD form")?;
    let number_of_people: i32 = matches
        .get_one::<String>("people")
        .unwrap()
        .parse()
        .context("--people must be a whole number")?;
    let preferences = matches.get_one::<String>("preferences").unwrap().clone();

    let command = TripPlanCommand {
        date_from,
        date_to,
        location,
        number_of_people,
        preferences_list: (!preferences.is_empty()).then(|| preferences.clone()),
        trip_plan_description: None,
        ai_plan_accepted: false,
    };

    // Same rules the app applies before persisting a plan. The catalog
    // membership check needs the backend and stays with the app workflow.
    validate_trip_plan_command(&command)?;

    info!(
        location = %command.location,
        model = client.default_model(),
        "generating itinerary"
    );

    if matches.get_flag("structured") {
        let proposal = client.generate_structured_itinerary(&command).await?;
        for entry in &proposal.itinerary {
            println!("{}", entry);
        }
        println!("\n{}", proposal.summary);
    } else {
        let itinerary = client
            .generate_itinerary(
                command.date_from,
                command.date_to,
                &command.location,
                command.number_of_people,
                &preferences,
            )
            .await?;
        println!("{}", itinerary);
    }

    Ok(())
}
