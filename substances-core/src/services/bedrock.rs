//! BedrockEconomy adaptation
//!
//! The BedrockEconomy surface differs between deployed versions, so each
//! operation is a priority-ordered chain of strategies. A strategy first
//! checks that its accessor exists, then calls it:
//! - accessor or method missing, or an unusable answer: try the next one
//! - the provider throws or panics: stop, the invocation has failed
//! - accepted: stop, that is the answer
//!
//! Failures here are expected on drifted versions and only logged at debug.

use std::panic::{self, AssertUnwindSafe};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{Account, Money};
use crate::ports::{BedrockEconomy, ErrorCallback, ProviderError, ProviderResult, SettleCallback};

use super::gateway::panic_failure;

/// Direction of a balance mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    Subtract,
    Add,
}

impl Mutation {
    fn describe(&self) -> &'static str {
        match self {
            Mutation::Subtract => "reduce balance",
            Mutation::Add => "add balance",
        }
    }
}

/// Outcome of one strategy
#[derive(Debug)]
enum Attempt<T> {
    /// The strategy's accessor or method does not exist on this version
    Unavailable(&'static str),
    /// The call went through but gave nothing usable
    Declined,
    Accepted(T),
    /// The provider threw; the chain stops here
    Failed(ProviderError),
}

impl<T> Attempt<T> {
    fn from_error(error: ProviderError) -> Self {
        match error {
            ProviderError::Unsupported { operation } => Attempt::Unavailable(operation),
            failed => Attempt::Failed(failed),
        }
    }
}

type BalanceAttempt = fn(&dyn BedrockEconomy, &Account) -> Attempt<Money>;
type MutationAttempt = fn(&dyn BedrockEconomy, &Account, i64, Mutation) -> Attempt<()>;

struct Strategy<F> {
    name: &'static str,
    attempt: F,
}

static BALANCE_CHAIN: [Strategy<BalanceAttempt>; 2] = [
    Strategy {
        name: "legacy",
        attempt: legacy_balance,
    },
    Strategy {
        name: "api",
        attempt: api_balance,
    },
];

static MUTATION_CHAIN: [Strategy<MutationAttempt>; 3] = [
    Strategy {
        name: "legacy",
        attempt: legacy_mutation,
    },
    Strategy {
        name: "closure",
        attempt: closure_mutation,
    },
    Strategy {
        name: "api",
        attempt: api_mutation,
    },
];

/// Query a balance, falling back to zero when every strategy is exhausted
pub(crate) fn balance(economy: &dyn BedrockEconomy, account: &Account) -> Money {
    let attempts = BALANCE_CHAIN
        .iter()
        .map(|strategy| (strategy.name, shielded(|| (strategy.attempt)(economy, account))));

    run_chain("get balance", attempts).unwrap_or(Money::ZERO)
}

/// Apply a mutation; true once some strategy accepted it
pub(crate) fn mutate(
    economy: &dyn BedrockEconomy,
    account: &Account,
    amount: Money,
    mutation: Mutation,
) -> bool {
    let Some(units) = amount.whole_units() else {
        warn!(
            "Cannot {} of {}: amount exceeds BedrockEconomy's integer range",
            mutation.describe(),
            amount
        );
        return false;
    };
    let attempts = MUTATION_CHAIN.iter().map(|strategy| {
        (
            strategy.name,
            shielded(|| (strategy.attempt)(economy, account, units, mutation)),
        )
    });

    run_chain(mutation.describe(), attempts).is_some()
}

/// Walk the attempts lazily; later strategies never run once one answers
fn run_chain<T>(
    operation: &str,
    attempts: impl Iterator<Item = (&'static str, Attempt<T>)>,
) -> Option<T> {
    for (name, attempt) in attempts {
        match attempt {
            Attempt::Accepted(value) => {
                debug!("BedrockEconomy: {} handled by {} accessor", operation, name);
                return Some(value);
            }
            Attempt::Unavailable(missing) => {
                debug!(
                    "BedrockEconomy: {} accessor cannot {} ({} unavailable)",
                    name, operation, missing
                );
            }
            Attempt::Declined => {
                debug!("BedrockEconomy: {} accessor declined to {}", name, operation);
            }
            Attempt::Failed(e) => {
                debug!("Failed to {} using {} accessor: {}", operation, name, e);
                return None;
            }
        }
    }

    debug!("BedrockEconomy: no accessor could {}", operation);
    None
}

/// Run one strategy; a panic inside the provider counts as a throw
fn shielded<T>(attempt: impl FnOnce() -> Attempt<T>) -> Attempt<T> {
    panic::catch_unwind(AssertUnwindSafe(attempt))
        .unwrap_or_else(|payload| Attempt::Failed(panic_failure(payload)))
}

fn legacy_balance(economy: &dyn BedrockEconomy, account: &Account) -> Attempt<Money> {
    match economy.legacy() {
        Some(api) => balance_answer(api.get_player_balance(&account.name)),
        None => Attempt::Unavailable("legacy"),
    }
}

fn api_balance(economy: &dyn BedrockEconomy, account: &Account) -> Attempt<Money> {
    match economy.api() {
        Some(api) => balance_answer(api.get_player_balance(&account.name)),
        None => Attempt::Unavailable("getAPI"),
    }
}

fn balance_answer(result: ProviderResult<Option<Decimal>>) -> Attempt<Money> {
    match result {
        Ok(Some(balance)) => Attempt::Accepted(Money::from_provider(balance)),
        Ok(None) => Attempt::Declined,
        Err(e) => Attempt::from_error(e),
    }
}

fn legacy_mutation(
    economy: &dyn BedrockEconomy,
    account: &Account,
    amount: i64,
    mutation: Mutation,
) -> Attempt<()> {
    let Some(api) = economy.legacy() else {
        return Attempt::Unavailable("legacy");
    };

    let result = match mutation {
        Mutation::Subtract => api.subtract_from_player_balance(&account.name, amount),
        Mutation::Add => api.add_to_player_balance(&account.name, amount),
    };

    match result {
        Ok(true) => Attempt::Accepted(()),
        Ok(false) => Attempt::Declined,
        Err(e) => Attempt::from_error(e),
    }
}

/// Accepted means queued: settlement is reported only to the callbacks
fn closure_mutation(
    economy: &dyn BedrockEconomy,
    account: &Account,
    amount: i64,
    mutation: Mutation,
) -> Attempt<()> {
    let Some(api) = economy.closure() else {
        return Attempt::Unavailable("CLOSURE");
    };

    let (on_success, on_error) = settlement_callbacks(account, amount, mutation);
    let result = match mutation {
        Mutation::Subtract => api.subtract(
            &account.xuid,
            &account.name,
            amount,
            0,
            on_success,
            on_error,
        ),
        Mutation::Add => api.add(&account.xuid, &account.name, amount, 0, on_success, on_error),
    };

    match result {
        Ok(()) => Attempt::Accepted(()),
        Err(e) => Attempt::from_error(e),
    }
}

fn api_mutation(
    economy: &dyn BedrockEconomy,
    account: &Account,
    amount: i64,
    mutation: Mutation,
) -> Attempt<()> {
    let Some(api) = economy.api() else {
        return Attempt::Unavailable("getAPI");
    };

    let result = match mutation {
        Mutation::Subtract => api.subtract_from_player_balance(&account.name, amount),
        Mutation::Add => api.add_to_player_balance(&account.name, amount),
    };

    // The advertised API's boolean is not meaningful across versions
    match result {
        Ok(_) => Attempt::Accepted(()),
        Err(e) => Attempt::from_error(e),
    }
}

fn settlement_callbacks(
    account: &Account,
    amount: i64,
    mutation: Mutation,
) -> (SettleCallback, ErrorCallback) {
    let settled_name = account.name.clone();
    let failed_name = account.name.clone();
    let operation = mutation.describe();

    let on_success: SettleCallback = Box::new(move || {
        debug!(
            "BedrockEconomy settled {} of {} for {}",
            operation, amount, settled_name
        );
    });
    let on_error: ErrorCallback = Box::new(move |e| {
        debug!(
            "BedrockEconomy rejected {} of {} for {}: {}",
            operation, amount, failed_name, e
        );
    });

    (on_success, on_error)
}
