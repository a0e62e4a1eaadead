use chrono::{Local, NaiveDate};
use clap::{Arg, ArgMatches, Command};
use tenday_backend::config::Config;
use tenday_backend::db::create_pool;
use tenday_backend::domain::calendar;
use tenday_backend::error::{AppError, AppResult};
use tenday_backend::init_tracing;
use tenday_backend::services::cycles_service::EstablishHorizonRequest;
use tenday_backend::services::{CyclesService, DimensionsService, ReportsService, RequestContext};
use tenday_backend::store::PgStore;
use uuid::Uuid;

fn cli() -> Command {
    let user = Arg::new("user")
        .short('u')
        .long("user")
        .value_name("UUID")
        .help("User whose journal to operate on")
        .required(true);
    let today = Arg::new("today")
        .long("today")
        .value_name("YYYY-MM-DD")
        .help("Date to treat as today (defaults to the local date)");

    Command::new("tenday")
        .about("Ten-day cycle journal maintenance")
        .subcommand_required(true)
        .subcommand(
            Command::new("init-horizon")
                .about("Generate every cycle of a planning horizon")
                .arg(user.clone())
                .arg(today.clone())
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_name("YEAR")
                        .help("Plan January 1 to December 31 of this year")
                        .conflicts_with_all(["start", "end"]),
                )
                .arg(Arg::new("start").long("start").value_name("YYYY-MM-DD").requires("end"))
                .arg(Arg::new("end").long("end").value_name("YYYY-MM-DD").requires("start"))
                .arg(
                    Arg::new("cycle-length")
                        .long("cycle-length")
                        .value_name("DAYS")
                        .help("Days per cycle (defaults to CYCLE_LENGTH_DAYS)"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_name("N")
                        .help("Number of cycles (defaults to as many as the horizon needs)"),
                ),
        )
        .subcommand(
            Command::new("seed-dimensions")
                .about("Create the default dimensions for a user without any")
                .arg(user.clone()),
        )
        .subcommand(
            Command::new("recompute")
                .about("Recompute the completion rate of one cycle")
                .arg(user.clone())
                .arg(today.clone())
                .arg(Arg::new("cycle").long("cycle").value_name("UUID").required(true)),
        )
        .subcommand(
            Command::new("refresh-statuses")
                .about("Advance cycle statuses to match today")
                .arg(
                    Arg::new("user")
                        .short('u')
                        .long("user")
                        .value_name("UUID")
                        .help("Limit to one user"),
                )
                .arg(today.clone()),
        )
        .subcommand(
            Command::new("current")
                .about("Show the cycle containing today")
                .arg(user.clone())
                .arg(today),
        )
        .subcommand(
            Command::new("stats")
                .about("Show lifetime totals for a user")
                .arg(user),
        )
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> AppResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::validation(format!("Invalid --{} '{}': {}", name, raw, e)))
        })
        .transpose()
}

fn required_arg<T>(matches: &ArgMatches, name: &str) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_arg(matches, name)?
        .ok_or_else(|| AppError::validation(format!("Missing --{}", name)))
}

fn today(matches: &ArgMatches) -> AppResult<NaiveDate> {
    Ok(parse_arg::<NaiveDate>(matches, "today")?.unwrap_or_else(|| Local::now().date_naive()))
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))?;
    println!("{}", out);
    Ok(())
}

fn run(config: &Config, matches: &ArgMatches) -> AppResult<()> {
    let pool = create_pool(&config.database())?;
    let store = PgStore::new(pool);

    match matches.subcommand() {
        Some(("init-horizon", sub)) => {
            let ctx = RequestContext::for_user(required_arg::<Uuid>(sub, "user")?);
            let (start_date, end_date) = match parse_arg::<i32>(sub, "year")? {
                Some(year) => calendar::year_horizon(year)?,
                None => (required_arg(sub, "start")?, required_arg(sub, "end")?),
            };
            let req = EstablishHorizonRequest {
                start_date,
                end_date,
                cycle_length_days: parse_arg(sub, "cycle-length")?,
                total_cycle_count: parse_arg(sub, "count")?,
            };
            let cycles =
                CyclesService::establish_horizon(&store, &ctx, &config.calendar(), &req, today(sub)?)?;
            print_json(&cycles)
        }
        Some(("seed-dimensions", sub)) => {
            let ctx = RequestContext::for_user(required_arg::<Uuid>(sub, "user")?);
            print_json(&DimensionsService::seed_defaults(&store, &ctx)?)
        }
        Some(("recompute", sub)) => {
            let ctx = RequestContext::for_user(required_arg::<Uuid>(sub, "user")?);
            let cycle_id = required_arg::<Uuid>(sub, "cycle")?;
            print_json(&CyclesService::recompute_completion(&store, &ctx, cycle_id, today(sub)?)?)
        }
        Some(("refresh-statuses", sub)) => {
            let user_id = parse_arg::<Uuid>(sub, "user")?;
            let changed = CyclesService::refresh_statuses(&store, user_id, today(sub)?)?;
            print_json(&changed)
        }
        Some(("current", sub)) => {
            let ctx = RequestContext::for_user(required_arg::<Uuid>(sub, "user")?);
            let today = today(sub)?;
            match CyclesService::current(&store, &ctx, today)? {
                Some(cycle) => print_json(&CyclesService::get_stats(&store, &ctx, cycle.id, today)?),
                None => {
                    println!("No cycle contains {}", today);
                    Ok(())
                }
            }
        }
        Some(("stats", sub)) => {
            let ctx = RequestContext::for_user(required_arg::<Uuid>(sub, "user")?);
            print_json(&ReportsService::global_stats(&store, &ctx)?)
        }
        _ => Err(AppError::validation("Unknown command")),
    }
}

fn main() {
    let matches = cli().get_matches();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    init_tracing(&config);

    if let Err(e) = run(&config, &matches) {
        tracing::error!(code = e.code(), error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
