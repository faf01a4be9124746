//! Run orchestration: connect, read the catalog, drive the scheduler.

use crate::logging::mask_connection_password;
use anyhow::Context;
use faker_core::OperationTally;
use faker_generator::ValueSynthesizer;
use faker_postgresql::{
    prepare_tables, PgStore, PolicyMap, PostgreSQLFakerArgs, RowMutator, Scheduler,
};
use tracing::info;

/// Column policies for the run: the policy file when given, else the built-in finance rules.
pub fn load_policies(args: &PostgreSQLFakerArgs) -> anyhow::Result<PolicyMap> {
    match &args.mutate.policy_file {
        Some(path) => {
            let policies = PolicyMap::from_file(path)
                .with_context(|| format!("Failed to load policy file {}", path.display()))?;
            info!(
                "Loaded {} column policies from {}",
                policies.len(),
                path.display()
            );
            Ok(policies)
        }
        None => Ok(PolicyMap::finance_defaults()),
    }
}

/// Run a PostgreSQL mutation session and return the final tally.
pub async fn run_postgresql(args: PostgreSQLFakerArgs) -> anyhow::Result<OperationTally> {
    let policies = load_policies(&args)?;
    let connection_string = args.connection.connection_string();
    let tables = args.mutate.target_tables();

    info!(
        "Connecting to PostgreSQL: {}",
        mask_connection_password(&connection_string)
    );
    let mut store = PgStore::connect(&connection_string)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let tables = prepare_tables(&mut store, &args.mutate.schema, &tables)
        .await
        .context("Failed to prepare target tables")?;

    match args.mutate.seed {
        Some(seed) => info!(
            "Running {} operations (seed={})",
            args.mutate.operations, seed
        ),
        None => info!("Running {} operations (unseeded)", args.mutate.operations),
    }

    let synth = ValueSynthesizer::new(args.mutate.seed);
    let mutator = RowMutator::new(store, synth).with_policies(policies);
    let mut scheduler = Scheduler::new(mutator, tables);
    let tally = scheduler
        .run(args.mutate.operations)
        .await
        .context("Mutation run aborted")?;

    info!("Done. Counts: {}", tally);
    Ok(tally)
}
