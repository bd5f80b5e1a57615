//! Demo sections run by the `sampler-demo` binary.
//!
//! Each section writes its banner and results to the given writer, so the
//! binary passes stdout and the tests pass a `Vec<u8>`.

use std::io::{self, Write};

use clap::ValueEnum;
use sampler_common::list::{apply, filter, reduce};
use sampler_numeric::arithmetic::{factorial, is_prime, power};
use sampler_numeric::higher_order::{add_ten, compose, double, is_even, square, sum};
use sampler_state::{make_accumulator, make_counter, make_multiplier};

use crate::explorer::explore_process;
use crate::platform::PlatformInfo;
use crate::pointers::{analyze_escape, double_in_place, double_value, swap_in_place, swap_values};

/// One part of the walkthrough; `All` runs every part in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Pointers,
    Process,
    Arithmetic,
    Closures,
    HigherOrder,
    All,
}

impl Section {
    /// Run order when `All` is selected.
    pub const ORDERED: [Section; 5] = [
        Section::Pointers,
        Section::Process,
        Section::Arithmetic,
        Section::Closures,
        Section::HigherOrder,
    ];

    /// Expands `All` and drops duplicates, keeping run order.
    #[must_use]
    pub fn resolve(selected: &[Section]) -> Vec<Section> {
        if selected.is_empty() || selected.contains(&Section::All) {
            return Self::ORDERED.to_vec();
        }
        Self::ORDERED
            .into_iter()
            .filter(|s| selected.contains(s))
            .collect()
    }
}

/// Inputs for the demo sections.
///
/// The defaults are the walkthrough's canonical values: factorials of
/// 0, 5 and 10, primality of 17, 20 and 25, and the sequence 1..=10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub factorials: Vec<i64>,
    pub primes: Vec<i64>,
    pub powers: Vec<(i64, i64)>,
    pub sequence: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            factorials: vec![0, 5, 10],
            primes: vec![17, 20, 25],
            powers: vec![(2, 8), (5, 3)],
            sequence: (1..=10).collect(),
        }
    }
}

/// Writes one section (or all of them) to `out`.
pub fn run_section(
    out: &mut impl Write,
    section: Section,
    config: &DemoConfig,
    platform: &impl PlatformInfo,
) -> io::Result<()> {
    match section {
        Section::Pointers => demonstrate_pointers(out),
        Section::Process => demonstrate_process(out, platform),
        Section::Arithmetic => demonstrate_arithmetic(out, config),
        Section::Closures => demonstrate_closures(out),
        Section::HigherOrder => demonstrate_higher_order(out, &config.sequence),
        Section::All => Section::ORDERED
            .iter()
            .try_for_each(|&s| run_section(&mut *out, s, config, platform)),
    }
}

fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n========== {title} ==========")
}

/// Copy vs. in-place mutation, and stack vs. boxed values.
pub fn demonstrate_pointers(out: &mut impl Write) -> io::Result<()> {
    banner(out, "Value vs Reference")?;

    let num1 = 10;
    let mut num2 = 10;
    writeln!(out, "Before double_value: {num1}")?;
    let copy = double_value(num1);
    writeln!(out, "After double_value: {num1} (copy became {copy})")?;
    writeln!(out, "Before double_in_place: {num2}")?;
    double_in_place(&mut num2);
    writeln!(out, "After double_in_place: {num2}")?;

    let (a, b) = (5, 10);
    writeln!(out, "Before swap_values: {a} {b}")?;
    let (a, b) = swap_values(a, b);
    writeln!(out, "After swap_values (rebound): {a} {b}")?;

    let (mut c, mut d) = (5, 10);
    writeln!(out, "Before swap_in_place: {c} {d}")?;
    swap_in_place(&mut c, &mut d);
    writeln!(out, "After swap_in_place: {c} {d}")?;

    writeln!(out, "{}", analyze_escape())
}

/// Process ids and the handle/element address contrast.
pub fn demonstrate_process(out: &mut impl Write, platform: &impl PlatformInfo) -> io::Result<()> {
    banner(out, "Process Information")?;
    writeln!(out, "{}", explore_process(platform))
}

/// Factorial, primality and power over the configured inputs.
///
/// Domain errors are printed and the section carries on.
pub fn demonstrate_arithmetic(out: &mut impl Write, config: &DemoConfig) -> io::Result<()> {
    banner(out, "Math Operations")?;

    for &n in &config.factorials {
        match factorial(n) {
            Ok(result) => writeln!(out, "{n}! = {result}")?,
            Err(err) => writeln!(out, "Factorial error: {}", err.reason())?,
        }
    }

    for &n in &config.primes {
        match is_prime(n) {
            Ok(result) => writeln!(out, "{n} is prime? {result}")?,
            Err(err) => writeln!(out, "Prime error: {}", err.reason())?,
        }
    }

    for &(base, exponent) in &config.powers {
        match power(base, exponent) {
            Ok(result) => writeln!(out, "{base}^{exponent} = {result}")?,
            Err(err) => writeln!(out, "Power error: {}", err.reason())?,
        }
    }
    Ok(())
}

/// Counters, multipliers and an accumulator split into its handles.
pub fn demonstrate_closures(out: &mut impl Write) -> io::Result<()> {
    banner(out, "Closures")?;

    let mut counter_a = make_counter(0);
    let mut counter_b = make_counter(100);
    let a_calls = [counter_a(), counter_a(), counter_a()];
    let b_calls = [counter_b(), counter_b()];
    writeln!(out, "Counter A calls: {a_calls:?}")?;
    writeln!(out, "Counter B calls: {b_calls:?}")?;

    let doubler = make_multiplier(2);
    let tripler = make_multiplier(3);
    let number = 5;
    writeln!(out, "Original: {number}")?;
    writeln!(out, "Double: {}", doubler(number))?;
    writeln!(out, "Triple: {}", tripler(number))?;

    let acc = make_accumulator(100);
    let (add, subtract, get) = acc.handles();
    add(50);
    add(25);
    subtract(30);
    writeln!(out, "Accumulator (100 +50 +25 -30): {}", get())
}

/// `apply`, `filter`, `reduce` and `compose` over `nums`.
pub fn demonstrate_higher_order(out: &mut impl Write, nums: &[i64]) -> io::Result<()> {
    banner(out, "Higher-Order Functions")?;

    let squared = apply(nums, |&x| square(x));
    writeln!(out, "Squared: {squared:?}")?;

    let evens = filter(nums, |&x| is_even(x));
    writeln!(out, "Even numbers: {evens:?}")?;

    let total = reduce(nums, 0, |acc, &x| sum(acc, x));
    writeln!(out, "Sum: {total}")?;

    let double_then_add_ten = compose(add_ten, double);
    writeln!(out, "Double then add 10 (5): {}", double_then_add_ten(5))
}
