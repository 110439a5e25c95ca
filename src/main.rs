//! Ternary Logic Calculator - CLI Entry Point
//!
//! Commands:
//! - `trit-calc ops` - List operations by arity
//! - `trit-calc eval <op> <a> [b]` - Evaluate an operation
//! - `trit-calc table <op>` - Print the truth table
//! - `trit-calc kmap <op>` - Print the Karnaugh map and its notation
//! - `trit-calc test` - Built-in self-test

use clap::{Parser, Subcommand};
use serde::Serialize;
use tritlogic::{Arity, Trit};

#[derive(Parser)]
#[command(name = "trit-calc")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A ternary logic calculator: trit operations, truth tables and Karnaugh maps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log engine calls at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operation catalog
    Ops,
    /// Apply an operation to one or two trits
    Eval {
        /// Operation name, e.g. AND or ROT-UP
        op: String,
        /// First input: -, 0 or +
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second input (dyadic operations only)
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },
    /// Print the truth table of an operation
    Table {
        /// Operation name
        op: String,
    },
    /// Print the Karnaugh map of an operation
    Kmap {
        /// Operation name
        op: String,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();
    tritlogic::logger::init_cli_logger(cli.verbose);

    match cli.command {
        Some(Commands::Ops) => {
            list_operations(cli.json);
        }
        Some(Commands::Eval { op, a, b }) => {
            evaluate_operation(&op, &a, b.as_deref(), cli.json);
        }
        Some(Commands::Table { op }) => {
            print_truth_table(&op, cli.json);
        }
        Some(Commands::Kmap { op }) => {
            print_karnaugh_map(&op, cli.json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Ternary Logic Calculator v0.1.0");
            println!("Three-valued logic over -, 0 and +");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_operations();
        }
    }
}

/// Print an error and exit with status 1.
fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}", err);
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(e),
    }
}

fn parse_trit(text: &str) -> Trit {
    text.parse().unwrap_or_else(|e| fail(e))
}

fn list_operations(json: bool) {
    #[derive(Serialize)]
    struct Entry {
        name: &'static str,
        arity: Arity,
        description: &'static str,
    }

    let entries: Vec<Entry> = tritlogic::Operation::ALL
        .into_iter()
        .map(|op| Entry { name: op.name(), arity: op.arity(), description: op.description() })
        .collect();

    if json {
        print_json(&entries);
        return;
    }

    for (title, arity) in [("Monadic (1 input)", Arity::Monadic), ("Dyadic (2 inputs)", Arity::Dyadic)] {
        println!("━━━ {} ━━━", title);
        for entry in entries.iter().filter(|e| e.arity == arity) {
            println!("  {:<9} {}", entry.name, entry.description);
        }
        println!();
    }
}

fn evaluate_operation(name: &str, a: &str, b: Option<&str>, json: bool) {
    let op = tritlogic::algebra::lookup(name).unwrap_or_else(|e| fail(e));
    let a = parse_trit(a);
    let b = b.map(parse_trit);

    let result = tritlogic::algebra::catalog::apply(op, a, b).unwrap_or_else(|e| fail(e));

    if json {
        #[derive(Serialize)]
        struct Evaluation {
            operation: tritlogic::Operation,
            a: Trit,
            #[serde(skip_serializing_if = "Option::is_none")]
            b: Option<Trit>,
            result: Trit,
        }
        let b = if op.is_monadic() { None } else { b };
        print_json(&Evaluation { operation: op, a, b, result });
        return;
    }

    match (op.arity(), b) {
        (Arity::Dyadic, Some(b)) => println!("{} {} {} = {}", a, op, b, result),
        _ => println!("{} {} = {}", op, a, result),
    }
}

fn print_truth_table(name: &str, json: bool) {
    let table = tritlogic::truth_table(name).unwrap_or_else(|e| fail(e));

    if json {
        print_json(&table);
        return;
    }

    println!("{} ({}): {}", table.operation, table.arity, table.operation.description());
    println!();
    print!("{}", table);
}

fn print_karnaugh_map(name: &str, json: bool) {
    let map = tritlogic::karnaugh_map(name).unwrap_or_else(|e| fail(e));

    if json {
        print_json(&map);
        return;
    }

    let notation = match map.arity() {
        Arity::Monadic => tritlogic::vector_notation(name),
        Arity::Dyadic => tritlogic::matrix_notation(name),
    }
    .unwrap_or_else(|e| fail(e));

    match map.arity() {
        Arity::Monadic => println!("{} K-map", map.operation()),
        Arity::Dyadic => println!("{} K-map (rows = a, columns = b)", map.operation()),
    }
    println!();
    print!("{}", map);
    println!();
    println!("{} = {}", map.operation(), notation);
}

fn demo_operations() {
    use tritlogic::evaluate;
    use Trit::{Minus, Plus, Zero};

    println!("━━━ Ternary Logic Demo ━━━");
    println!();

    println!("Trits (ordered - < 0 < +):");
    for t in Trit::ALL {
        println!("  {:?} = {} (order {}, value {})", t, t, t.order(), t.signed_value());
    }
    println!();

    println!("Some operations:");
    let samples = [
        ("NOT", Plus, None),
        ("ROT-UP", Plus, None),
        ("AND", Plus, Some(Zero)),
        ("XOR", Minus, Some(Plus)),
        ("SUM", Plus, Some(Plus)),
        ("ANY", Zero, Some(Minus)),
    ];
    for (name, a, b) in samples {
        match (evaluate(name, a, b), b) {
            (Ok(r), Some(b)) => println!("  {} {} {} = {}", a, name, b, r),
            (Ok(r), None) => println!("  {} {} = {}", name, a, r),
            (Err(e), _) => fail(e),
        }
    }
    println!();

    match tritlogic::matrix_notation("SUM") {
        Ok(m) => println!("SUM = {}", m),
        Err(e) => fail(e),
    }
}

fn run_self_test() {
    use tritlogic::{evaluate, truth_table, AlgebraError, Operation};
    use Trit::{Minus, Plus, Zero};

    println!("━━━ Ternary Logic Self-Test ━━━");
    println!();

    let eval = |name: &str, a: Trit, b: Option<Trit>| evaluate(name, a, b).ok();
    let pairs = || Trit::ALL.into_iter().flat_map(|a| Trit::ALL.into_iter().map(move |b| (a, b)));

    let checks: Vec<(&str, bool)> = vec![
        ("Closure over the catalog", Operation::ALL.into_iter().all(|op| {
            let second = |b: Trit| if op.is_monadic() { None } else { Some(b) };
            pairs().all(|(a, b)| eval(op.name(), a, second(b)).is_some())
        })),
        ("NOT involution", Trit::ALL.into_iter().all(|a| {
            eval("NOT", a, None).and_then(|n| eval("NOT", n, None)) == Some(a)
        })),
        ("ROT-DOWN undoes ROT-UP", Trit::ALL.into_iter().all(|a| {
            eval("ROT-UP", a, None).and_then(|u| eval("ROT-DOWN", u, None)) == Some(a)
        })),
        ("AND/OR commutative and idempotent", pairs().all(|(a, b)| {
            eval("AND", a, Some(b)) == eval("AND", b, Some(a))
                && eval("OR", a, Some(b)) == eval("OR", b, Some(a))
                && eval("AND", a, Some(a)) == Some(a)
                && eval("OR", a, Some(a)) == Some(a)
        })),
        ("XOR matches its composition", pairs().all(|(a, b)| {
            let left = eval("AND", a.not(), Some(b));
            let right = eval("AND", a, Some(b.not()));
            let composed = match (left, right) {
                (Some(l), Some(r)) => eval("OR", l, Some(r)),
                _ => None,
            };
            eval("XOR", a, Some(b)) == composed
        })),
        ("SUM wraps (+ + + = -)", eval("SUM", Plus, Some(Plus)) == Some(Minus)),
        ("SUB(a, a) = 0", Trit::ALL.into_iter().all(|a| eval("SUB", a, Some(a)) == Some(Zero))),
        ("SUB folds -2 and 2 (- - + = +, + - - = -)", eval("SUB", Minus, Some(Plus)) == Some(Plus)
            && eval("SUB", Plus, Some(Minus)) == Some(Minus)),
        ("MUL sign rules", eval("MUL", Minus, Some(Minus)) == Some(Plus)
            && eval("MUL", Minus, Some(Plus)) == Some(Minus)),
        ("Truth table sizes", Operation::ALL.into_iter().all(|op| {
            let expected = if op.is_monadic() { 3 } else { 9 };
            truth_table(op.name()).map(|t| t.len()) == Ok(expected)
        })),
        ("Unknown operation rejected", matches!(
            evaluate("NAND", Plus, Some(Plus)),
            Err(AlgebraError::UnknownOperation(_))
        )),
        ("Dyadic without second input rejected", matches!(
            evaluate("AND", Plus, None),
            Err(AlgebraError::ArityMismatch { .. })
        )),
    ];

    let mut passed = 0;
    let mut failed = 0;
    for (name, ok) in checks {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
