//! Integration tests for the economy gateway
//!
//! Every back end is simulated in-process behind the port traits, so these
//! run without a game server.
//!
//! Run with: cargo test --test gateway_tests -- --nocapture

use std::cell::Cell;
use std::io;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use substances_core::adapters::ExtensionRegistry;
use substances_core::config::EconomySettings;
use substances_core::ports::economy::ret;
use substances_core::ports::{
    BedrockBalanceApi, BedrockClosureApi, BedrockEconomy, CoinApi, EconomyApi, ErrorCallback,
    ProviderError, ProviderHandle, ProviderResult, SettleCallback,
};
use substances_core::services::{EconomyGateway, Resolution};
use substances_core::{Account, Money, ProviderKind};

// ============================================================================
// Simulated back ends
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Normal,
    /// Every call fails
    Throw,
    /// Queries work, mutations fail
    ThrowOnMutation,
    /// Every call panics
    Panic,
}

/// Shared balance store behind every simulated back end
struct Ledger {
    balance: Mutex<Decimal>,
    behavior: Behavior,
    calls: Mutex<Vec<String>>,
}

impl Ledger {
    fn new(balance: Decimal) -> Arc<Self> {
        Self::with_behavior(balance, Behavior::Normal)
    }

    fn with_behavior(balance: Decimal, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            balance: Mutex::new(balance),
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn balance(&self) -> Decimal {
        *self.balance.lock().unwrap()
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, call: &str, mutation: bool) -> ProviderResult<()> {
        self.calls.lock().unwrap().push(call.to_string());
        match self.behavior {
            Behavior::Normal => Ok(()),
            Behavior::ThrowOnMutation if !mutation => Ok(()),
            Behavior::Throw | Behavior::ThrowOnMutation => {
                Err(ProviderError::failed(format!("{} exploded", call)))
            }
            Behavior::Panic => panic!("{} panicked", call),
        }
    }

    fn subtract(&self, amount: Decimal) -> bool {
        let mut balance = self.balance.lock().unwrap();
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        true
    }

    fn add(&self, amount: Decimal) {
        *self.balance.lock().unwrap() += amount;
    }
}

/// EconomyAPI-style back end
struct EconomyPlugin(Arc<Ledger>);

impl EconomyApi for EconomyPlugin {
    fn my_money(&self, _account: &Account) -> ProviderResult<Decimal> {
        self.0.enter("myMoney", false)?;
        Ok(self.0.balance())
    }

    fn reduce_money(&self, _account: &Account, amount: Decimal) -> ProviderResult<i32> {
        self.0.enter("reduceMoney", true)?;
        Ok(if self.0.subtract(amount) {
            ret::SUCCESS
        } else {
            ret::INVALID
        })
    }

    fn add_money(&self, _account: &Account, amount: Decimal) -> ProviderResult<i32> {
        self.0.enter("addMoney", true)?;
        self.0.add(amount);
        Ok(ret::SUCCESS)
    }
}

/// CoinAPI-style back end
struct CoinPlugin(Arc<Ledger>);

impl CoinApi for CoinPlugin {
    fn my_coin(&self, _account: &Account) -> ProviderResult<Decimal> {
        self.0.enter("myCoin", false)?;
        Ok(self.0.balance())
    }

    fn reduce_coin(&self, _account: &Account, amount: Decimal) -> ProviderResult<i32> {
        self.0.enter("reduceCoin", true)?;
        Ok(if self.0.subtract(amount) {
            ret::SUCCESS
        } else {
            ret::INVALID
        })
    }

    fn add_coin(&self, _account: &Account, amount: Decimal) -> ProviderResult<i32> {
        self.0.enter("addCoin", true)?;
        self.0.add(amount);
        Ok(ret::SUCCESS)
    }
}

/// BedrockEconomy name-keyed API; `label` tells legacy and generic apart
struct BedrockApi {
    ledger: Arc<Ledger>,
    label: &'static str,
}

impl BedrockBalanceApi for BedrockApi {
    fn get_player_balance(&self, _name: &str) -> ProviderResult<Option<Decimal>> {
        self.ledger
            .enter(&format!("{}.getPlayerBalance", self.label), false)?;
        Ok(Some(self.ledger.balance()))
    }

    fn subtract_from_player_balance(&self, _name: &str, amount: i64) -> ProviderResult<bool> {
        self.ledger
            .enter(&format!("{}.subtract {}", self.label, amount), true)?;
        Ok(self.ledger.subtract(Decimal::from(amount)))
    }

    fn add_to_player_balance(&self, _name: &str, amount: i64) -> ProviderResult<bool> {
        self.ledger
            .enter(&format!("{}.add {}", self.label, amount), true)?;
        self.ledger.add(Decimal::from(amount));
        Ok(true)
    }
}

/// BedrockEconomy closure API: accepts now, settles when told to
struct BedrockClosure {
    ledger: Arc<Ledger>,
    pending: Mutex<Vec<(i64, SettleCallback)>>,
}

impl BedrockClosure {
    fn new(ledger: Arc<Ledger>) -> Arc<Self> {
        Arc::new(Self {
            ledger,
            pending: Mutex::new(Vec::new()),
        })
    }

    /// Apply every queued mutation
    fn settle(&self) {
        for (delta, on_success) in self.pending.lock().unwrap().drain(..) {
            if delta < 0 {
                self.ledger.subtract(Decimal::from(-delta));
            } else {
                self.ledger.add(Decimal::from(delta));
            }
            on_success();
        }
    }
}

impl BedrockClosureApi for BedrockClosure {
    fn subtract(
        &self,
        _xuid: &str,
        _name: &str,
        amount: i64,
        _decimals: u8,
        on_success: SettleCallback,
        _on_error: ErrorCallback,
    ) -> ProviderResult<()> {
        self.ledger
            .enter(&format!("closure.subtract {}", amount), true)?;
        self.pending.lock().unwrap().push((-amount, on_success));
        Ok(())
    }

    fn add(
        &self,
        _xuid: &str,
        _name: &str,
        amount: i64,
        _decimals: u8,
        on_success: SettleCallback,
        _on_error: ErrorCallback,
    ) -> ProviderResult<()> {
        self.ledger.enter(&format!("closure.add {}", amount), true)?;
        self.pending.lock().unwrap().push((amount, on_success));
        Ok(())
    }
}

/// A BedrockEconomy install with a chosen set of accessors
#[derive(Default)]
struct BedrockPlugin {
    legacy: Option<Arc<BedrockApi>>,
    closure: Option<Arc<BedrockClosure>>,
    api: Option<Arc<BedrockApi>>,
}

impl BedrockEconomy for BedrockPlugin {
    fn legacy(&self) -> Option<Arc<dyn BedrockBalanceApi>> {
        self.legacy
            .clone()
            .map(|api| api as Arc<dyn BedrockBalanceApi>)
    }

    fn closure(&self) -> Option<Arc<dyn BedrockClosureApi>> {
        self.closure
            .clone()
            .map(|api| api as Arc<dyn BedrockClosureApi>)
    }

    fn api(&self) -> Option<Arc<dyn BedrockBalanceApi>> {
        self.api.clone().map(|api| api as Arc<dyn BedrockBalanceApi>)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

fn settings(provider: &str) -> EconomySettings {
    EconomySettings {
        provider: provider.to_string(),
        currency_symbol: "$".to_string(),
    }
}

fn steve() -> Account {
    Account::new("Steve", "2535400000000001")
}

fn money(amount: Decimal) -> Money {
    Money::new(amount).unwrap()
}

fn economy_api_gateway(ledger: &Arc<Ledger>) -> EconomyGateway {
    let registry = ExtensionRegistry::new().with(
        "EconomyAPI",
        ProviderHandle::EconomyApi(Arc::new(EconomyPlugin(ledger.clone()))),
    );
    EconomyGateway::new(&settings("economyapi"), &registry)
}

fn coin_api_gateway(ledger: &Arc<Ledger>) -> EconomyGateway {
    let registry = ExtensionRegistry::new().with(
        "CoinAPI",
        ProviderHandle::CoinApi(Arc::new(CoinPlugin(ledger.clone()))),
    );
    EconomyGateway::new(&settings("coinapi"), &registry)
}

fn bedrock_gateway(plugin: BedrockPlugin) -> EconomyGateway {
    let registry = ExtensionRegistry::new().with(
        "BedrockEconomy",
        ProviderHandle::BedrockEconomy(Arc::new(plugin)),
    );
    EconomyGateway::new(&settings("BedrockEconomy"), &registry)
}

fn legacy_only(ledger: &Arc<Ledger>) -> BedrockPlugin {
    BedrockPlugin {
        legacy: Some(Arc::new(BedrockApi {
            ledger: ledger.clone(),
            label: "legacy",
        })),
        ..BedrockPlugin::default()
    }
}

/// Sink for formatted log lines
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return what it logged
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(move || LogBuffer(sink.clone()))
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    (result, logs)
}

/// Captured lines logged at `level` ("ERROR", "WARN", "INFO", "DEBUG")
fn lines_at<'a>(logs: &'a str, level: &str) -> Vec<&'a str> {
    logs.lines()
        .filter(|line| line.trim_start().starts_with(level))
        .collect()
}

/// One bound gateway per provider kind over the same ledger
fn all_kinds(ledger: &Arc<Ledger>) -> Vec<(&'static str, EconomyGateway)> {
    vec![
        ("economyapi", economy_api_gateway(ledger)),
        ("coinapi", coin_api_gateway(ledger)),
        ("bedrockeconomy", bedrock_gateway(legacy_only(ledger))),
    ]
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_unavailable_gateways_degrade() {
    let registry = ExtensionRegistry::new();
    let amount = money(dec!(1));

    for provider in ["economyapi", "bedrockeconomy", "coinapi", "vaultcoins", ""] {
        let gateway = EconomyGateway::new(&settings(provider), &registry);

        assert!(!gateway.is_available(), "{} should be unavailable", provider);
        assert_eq!(gateway.balance(&steve()), Money::ZERO);
        assert!(!gateway.debit(&steve(), amount));
        assert!(!gateway.credit(&steve(), amount));
        assert!(!gateway.credit(&steve(), Money::ZERO));
    }
}

#[test]
fn test_unknown_identifier_resolves_nothing() {
    let lookups = Cell::new(0);
    let resolver = |_kind: &ProviderKind| -> Option<ProviderHandle> {
        lookups.set(lookups.get() + 1);
        Some(ProviderHandle::EconomyApi(Arc::new(EconomyPlugin(
            Ledger::new(dec!(100)),
        ))))
    };

    let gateway = EconomyGateway::new(&settings("iconomy"), &resolver);

    assert!(!gateway.is_available());
    assert_eq!(gateway.resolution(), Resolution::UnknownProvider);
    assert_eq!(lookups.get(), 0, "no extension lookup for an unknown provider");
}

#[test]
fn test_known_identifier_looked_up_once() {
    let lookups = Cell::new(0);
    let ledger = Ledger::new(dec!(10));
    let resolver = |kind: &ProviderKind| -> Option<ProviderHandle> {
        lookups.set(lookups.get() + 1);
        assert_eq!(kind, &ProviderKind::EconomyApi);
        Some(ProviderHandle::EconomyApi(Arc::new(EconomyPlugin(
            ledger.clone(),
        ))))
    };

    let gateway = EconomyGateway::new(&settings("ECONOMYAPI"), &resolver);
    gateway.balance(&steve());
    gateway.balance(&steve());

    assert!(gateway.is_available());
    assert_eq!(gateway.resolution(), Resolution::Bound);
    assert_eq!(lookups.get(), 1);
}

// ============================================================================
// Balance and sufficiency
// ============================================================================

#[test]
fn test_has_at_least_matches_balance_comparison() {
    let amount = dec!(10.00);

    for balance in [dec!(0), amount - dec!(0.01), amount, amount + dec!(0.01)] {
        let ledger = Ledger::new(balance);
        for (kind, gateway) in all_kinds(&ledger) {
            let observed = gateway.balance(&steve());
            assert_eq!(
                gateway.has_at_least(&steve(), money(amount)),
                observed >= money(amount),
                "{} with balance {}",
                kind,
                balance
            );
        }
    }
}

#[test]
fn test_balance_is_never_cached() {
    let ledger = Ledger::new(dec!(5));
    let gateway = economy_api_gateway(&ledger);

    assert_eq!(gateway.balance(&steve()).amount(), dec!(5));
    ledger.add(dec!(7));
    assert_eq!(gateway.balance(&steve()).amount(), dec!(12));
    assert_eq!(ledger.calls(), vec!["myMoney", "myMoney"]);
}

#[test]
fn test_negative_provider_balance_reads_as_zero() {
    let ledger = Ledger::new(dec!(-20));
    let gateway = coin_api_gateway(&ledger);

    assert_eq!(gateway.balance(&steve()), Money::ZERO);
    assert!(gateway.has_at_least(&steve(), Money::ZERO));
}

// ============================================================================
// Debit and credit
// ============================================================================

#[test]
fn test_debit_never_overdraws() {
    let ledger = Ledger::new(dec!(9.99));
    for (kind, gateway) in all_kinds(&ledger) {
        assert!(!gateway.debit(&steve(), money(dec!(10))), "{}", kind);
    }
    assert_eq!(ledger.balance(), dec!(9.99));
    assert!(
        ledger.calls().iter().all(|call| !call.contains("subtract")
            && !call.contains("reduce")),
        "no mutation may reach the back end: {:?}",
        ledger.calls()
    );
}

#[test]
fn test_debit_with_exhausted_bedrock_chain() {
    let gateway = bedrock_gateway(BedrockPlugin::default());

    assert!(gateway.is_available());
    assert_eq!(gateway.balance(&steve()), Money::ZERO);
    assert!(!gateway.debit(&steve(), money(dec!(1))));
    assert!(!gateway.credit(&steve(), money(dec!(1))));
}

#[test]
fn test_debit_moves_money() {
    let ledger = Ledger::new(dec!(50));
    let gateway = economy_api_gateway(&ledger);

    assert!(gateway.debit(&steve(), money(dec!(12.50))));
    assert_eq!(ledger.balance(), dec!(37.50));
    assert!(gateway.debit(&steve(), money(dec!(37.50))));
    assert_eq!(gateway.balance(&steve()), Money::ZERO);
}

#[test]
fn test_credit_has_no_balance_precondition() {
    let ledger = Ledger::new(dec!(0));
    let closure = BedrockClosure::new(ledger.clone());
    let bedrock = BedrockPlugin {
        closure: Some(closure),
        ..BedrockPlugin::default()
    };
    let gateways = vec![
        economy_api_gateway(&ledger),
        coin_api_gateway(&ledger),
        bedrock_gateway(bedrock),
    ];

    for gateway in &gateways {
        assert!(gateway.credit(&steve(), money(dec!(3))));
    }
    assert!(!ledger.calls().iter().any(|call| call == "myMoney" || call == "myCoin"));
}

#[test]
fn test_bedrock_amounts_are_whole_units() {
    let ledger = Ledger::new(dec!(20));
    let gateway = bedrock_gateway(legacy_only(&ledger));

    assert!(gateway.debit(&steve(), money(dec!(7.90))));
    assert_eq!(ledger.balance(), dec!(13));
    assert!(ledger.calls().contains(&"legacy.subtract 7".to_string()));
}

// ============================================================================
// BedrockEconomy fallback chain
// ============================================================================

#[test]
fn test_bedrock_generic_api_used_when_legacy_absent() {
    let ledger = Ledger::new(dec!(40));
    let gateway = bedrock_gateway(BedrockPlugin {
        api: Some(Arc::new(BedrockApi {
            ledger: ledger.clone(),
            label: "api",
        })),
        ..BedrockPlugin::default()
    });

    assert_eq!(gateway.balance(&steve()).amount(), dec!(40));
    assert!(gateway.debit(&steve(), money(dec!(15))));
    assert!(gateway.credit(&steve(), money(dec!(5))));
    assert_eq!(ledger.balance(), dec!(30));
    assert_eq!(
        ledger.calls(),
        vec![
            "api.getPlayerBalance",
            "api.getPlayerBalance",
            "api.subtract 15",
            "api.add 5",
        ]
    );
}

#[test]
fn test_bedrock_legacy_preferred_over_closure_and_api() {
    let ledger = Ledger::new(dec!(10));
    let gateway = bedrock_gateway(BedrockPlugin {
        legacy: Some(Arc::new(BedrockApi {
            ledger: ledger.clone(),
            label: "legacy",
        })),
        closure: Some(BedrockClosure::new(ledger.clone())),
        api: Some(Arc::new(BedrockApi {
            ledger: ledger.clone(),
            label: "api",
        })),
    });

    assert!(gateway.debit(&steve(), money(dec!(4))));
    assert_eq!(
        ledger.calls(),
        vec![
            "legacy.getPlayerBalance",
            "legacy.subtract 4",
        ]
    );
}

#[test]
fn test_bedrock_closure_success_means_accepted_not_settled() {
    let ledger = Ledger::new(dec!(10));
    let closure = BedrockClosure::new(ledger.clone());
    let gateway = bedrock_gateway(BedrockPlugin {
        closure: Some(closure.clone()),
        api: Some(Arc::new(BedrockApi {
            ledger: ledger.clone(),
            label: "api",
        })),
        ..BedrockPlugin::default()
    });

    assert!(gateway.debit(&steve(), money(dec!(6))));
    // Accepted but not yet settled
    assert_eq!(ledger.balance(), dec!(10));

    closure.settle();
    assert_eq!(ledger.balance(), dec!(4));
    assert!(!ledger.calls().iter().any(|call| call.starts_with("api.subtract")));
}

// ============================================================================
// Provider failures never cross the gateway
// ============================================================================

#[test]
fn test_throwing_providers_degrade_every_operation() {
    for behavior in [Behavior::Throw, Behavior::Panic] {
        let ledger = Ledger::with_behavior(dec!(100), behavior);
        for (kind, gateway) in all_kinds(&ledger) {
            let amount = money(dec!(1));

            assert!(gateway.is_available(), "{}", kind);
            assert_eq!(gateway.balance(&steve()), Money::ZERO, "{}", kind);
            assert!(!gateway.has_at_least(&steve(), amount), "{}", kind);
            assert!(!gateway.debit(&steve(), amount), "{}", kind);
            assert!(!gateway.credit(&steve(), amount), "{}", kind);
            assert_eq!(gateway.format(amount), "$1.00");
        }
        assert_eq!(ledger.balance(), dec!(100));
    }
}

#[test]
fn test_throwing_mutation_reports_failure() {
    let ledger = Ledger::with_behavior(dec!(100), Behavior::ThrowOnMutation);
    for (kind, gateway) in all_kinds(&ledger) {
        assert_eq!(gateway.balance(&steve()).amount(), dec!(100), "{}", kind);
        assert!(!gateway.debit(&steve(), money(dec!(5))), "{}", kind);
        assert!(!gateway.credit(&steve(), money(dec!(5))), "{}", kind);
    }
    assert_eq!(ledger.balance(), dec!(100));
}

#[test]
fn test_bedrock_throw_stops_fallback() {
    let throwing = Ledger::with_behavior(dec!(100), Behavior::ThrowOnMutation);
    let healthy = Ledger::new(dec!(100));
    let gateway = bedrock_gateway(BedrockPlugin {
        legacy: Some(Arc::new(BedrockApi {
            ledger: throwing.clone(),
            label: "legacy",
        })),
        api: Some(Arc::new(BedrockApi {
            ledger: healthy.clone(),
            label: "api",
        })),
        ..BedrockPlugin::default()
    });

    assert!(!gateway.debit(&steve(), money(dec!(5))));
    assert!(healthy.calls().is_empty());
    assert_eq!(throwing.balance(), dec!(100));
}

// ============================================================================
// Log severity
// ============================================================================

#[test]
fn test_unknown_provider_logs_warning() {
    let (gateway, logs) = capture_logs(|| {
        EconomyGateway::new(&settings("goldbank"), &ExtensionRegistry::new())
    });

    assert!(!gateway.is_available());
    let warnings = lines_at(&logs, "WARN");
    assert_eq!(warnings.len(), 1, "{}", logs);
    assert!(warnings[0].contains("Unknown economy provider: goldbank"));
    assert!(lines_at(&logs, "ERROR").is_empty());
}

#[test]
fn test_missing_extension_logs_warning() {
    let (_, logs) = capture_logs(|| {
        EconomyGateway::new(&settings("economyapi"), &ExtensionRegistry::new())
    });

    let warnings = lines_at(&logs, "WARN");
    assert_eq!(warnings.len(), 1, "{}", logs);
    assert!(warnings[0].contains("EconomyAPI plugin not found"));
}

#[test]
fn test_exhausted_bedrock_chain_logs_debug_only() {
    let gateway = bedrock_gateway(BedrockPlugin::default());

    let (balance, logs) = capture_logs(|| gateway.balance(&steve()));

    assert_eq!(balance, Money::ZERO);
    assert!(lines_at(&logs, "DEBUG")
        .iter()
        .any(|line| line.contains("no accessor could get balance")));
    assert!(lines_at(&logs, "WARN").is_empty(), "{}", logs);
    assert!(lines_at(&logs, "ERROR").is_empty(), "{}", logs);
}

#[test]
fn test_bedrock_throw_and_panic_log_debug_only() {
    for behavior in [Behavior::Throw, Behavior::Panic] {
        let ledger = Ledger::with_behavior(dec!(10), behavior);
        let gateway = bedrock_gateway(legacy_only(&ledger));

        let ((balance, credited), logs) = capture_logs(|| {
            (
                gateway.balance(&steve()),
                gateway.credit(&steve(), money(dec!(1))),
            )
        });

        assert_eq!(balance, Money::ZERO);
        assert!(!credited);
        let debug = lines_at(&logs, "DEBUG");
        assert!(
            debug
                .iter()
                .any(|line| line.contains("Failed to get balance using legacy accessor")),
            "{:?}: {}",
            behavior,
            logs
        );
        assert!(debug
            .iter()
            .any(|line| line.contains("Failed to add balance using legacy accessor")));
        assert!(lines_at(&logs, "ERROR").is_empty(), "{:?}: {}", behavior, logs);
    }
}

#[test]
fn test_economy_api_throw_logs_error() {
    let ledger = Ledger::with_behavior(dec!(10), Behavior::Throw);
    let gateway = economy_api_gateway(&ledger);

    let (_, logs) = capture_logs(|| {
        gateway.balance(&steve());
        gateway.credit(&steve(), money(dec!(1)));
    });

    let errors = lines_at(&logs, "ERROR");
    assert_eq!(errors.len(), 2, "{}", logs);
    assert!(errors[0].contains("Failed to get balance: provider call failed: myMoney exploded"));
    assert!(errors[1].contains("Failed to add balance"));
}

#[test]
fn test_coin_api_mutation_throw_logs_error() {
    let ledger = Ledger::with_behavior(dec!(10), Behavior::ThrowOnMutation);
    let gateway = coin_api_gateway(&ledger);

    let (debited, logs) = capture_logs(|| gateway.debit(&steve(), money(dec!(1))));

    assert!(!debited);
    let errors = lines_at(&logs, "ERROR");
    assert_eq!(errors.len(), 1, "{}", logs);
    assert!(errors[0].contains("Failed to reduce balance"));
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_format_two_decimals_with_prefix() {
    let gateway = EconomyGateway::new(&settings("economyapi"), &ExtensionRegistry::new());

    assert_eq!(gateway.format(money(dec!(5))), "$5.00");
    assert_eq!(gateway.format(money(dec!(3.1))), "$3.10");
    assert_eq!(gateway.format(Money::ZERO), "$0.00");
    assert_eq!(gateway.currency_symbol(), "$");
}
