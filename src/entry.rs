use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use scaleprobe::args::DriverArgs;
use scaleprobe::config::{apply_config, load_config};
use scaleprobe::driver::{self, LoadPlan};
use scaleprobe::error::AppResult;
use scaleprobe::http::build_client;
use scaleprobe::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    init_logging(args.verbose, args.no_color);

    if let Some(loaded) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &loaded.file)?;
    }
    let plan = LoadPlan::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(plan))
}

fn parse_args() -> AppResult<(DriverArgs, ArgMatches)> {
    let matches = DriverArgs::command().get_matches();
    let args = DriverArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(plan: LoadPlan) -> AppResult<()> {
    let client = build_client()?;
    debug!(
        targets = plan.targets().len(),
        sustained = ?plan.sustained,
        reduced = ?plan.reduced,
        "Resolved load plan"
    );
    let report = driver::run(&plan, &client).await;
    debug!(total = report.total_dispatched(), "Dispatched requests");
    Ok(())
}
