// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use ordspan_core::fold::{Folded, Step, fold};
use ordspan_core::range::Range;
use ordspan_core::slice::slice;
use ordspan_spaces::prelude::*;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct ScenarioResult {
    name: String,
    count: usize,
    folded: String,
    sliced: String,
    elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct ProtocolReport {
    description: String,
    scenarios: Vec<ScenarioResult>,
}

fn collect<V, S>(range: Range<V, S>) -> Vec<V>
where
    V: ordspan_core::SpanValue,
    S: ordspan_core::space::ValueSpace<V>,
{
    fold(range, Vec::new(), |value, mut acc| {
        acc.push(value);
        Step::Continue(acc)
    })
    .into_acc()
}

fn ascending_letters() -> ScenarioResult {
    let range = Range::new('a', 'g', CharSpace);
    let t0 = Instant::now();
    let reversed = fold(range, String::new(), |value, mut acc| {
        acc.insert(0, value);
        Step::Continue(acc)
    })
    .into_acc();
    let window: String = slice(&range, 2..=50).into_iter().collect();
    let elapsed = t0.elapsed();
    info!(
        count = range.count(),
        member_d = range.included('d'),
        member_h = range.included('h'),
        "letters a..g"
    );
    ScenarioResult {
        name: "letters_a_to_g".into(),
        count: range.count(),
        folded: reversed,
        sliced: window,
        elapsed_us: elapsed.as_micros(),
    }
}

fn descending_letters() -> ScenarioResult {
    let range = Range::new('z', 'a', CharSpace);
    let t0 = Instant::now();
    let count = range.count();
    let member_b = range.included('b');
    let elapsed = t0.elapsed();
    info!(count, member_b, "letters z..a");
    ScenarioResult {
        name: "letters_z_to_a".into(),
        count,
        folded: format!("member('b')={member_b}"),
        sliced: String::new(),
        elapsed_us: elapsed.as_micros(),
    }
}

fn strided_integers() -> ScenarioResult {
    let space = StrideSpace::new(7i64).expect("non-zero stride");
    let range = Range::new(0i64, 70_000, space);
    let t0 = Instant::now();
    let sum = fold(range, 0i64, |value, acc| Step::Continue(acc + value)).into_acc();
    let window = slice(&range, -3..=-1);
    let elapsed = t0.elapsed();
    info!(
        count = range.count(),
        sum,
        on_lattice = range.included(49),
        off_lattice = range.included(50),
        "integers 0..70000 by 7"
    );
    ScenarioResult {
        name: "integers_stride_7".into(),
        count: range.count(),
        folded: format!("sum={sum}"),
        sliced: format!("{window:?}"),
        elapsed_us: elapsed.as_micros(),
    }
}

fn suspend_and_resume() -> ScenarioResult {
    let range = Range::new('a', 'g', CharSpace);
    let t0 = Instant::now();
    let outcome = fold(range, String::new(), |value, mut acc| {
        acc.push(value);
        if value == 'c' {
            Step::Suspend(acc)
        } else {
            Step::Continue(acc)
        }
    });
    let finished = match outcome {
        Folded::Suspended(acc, cont) => {
            info!(partial = %acc, "fold suspended, resuming");
            cont.resume(acc).into_acc()
        }
        other => other.into_acc(),
    };
    let elapsed = t0.elapsed();
    ScenarioResult {
        name: "suspend_resume".into(),
        count: range.count(),
        folded: finished,
        sliced: String::new(),
        elapsed_us: elapsed.as_micros(),
    }
}

fn halt_early() -> ScenarioResult {
    let range = Range::new('a', 'g', CharSpace);
    let t0 = Instant::now();
    let seen = fold(range, String::new(), |value, mut acc| {
        acc.push(value);
        if value == 'c' {
            Step::Halt(acc)
        } else {
            Step::Continue(acc)
        }
    })
    .into_acc();
    let elapsed = t0.elapsed();
    info!(seen = %seen, "fold halted at 'c'");
    ScenarioResult {
        name: "halt_at_c".into(),
        count: range.count(),
        folded: seen,
        sliced: String::new(),
        elapsed_us: elapsed.as_micros(),
    }
}

fn ad_hoc_space() -> ScenarioResult {
    let decades = FnSpace::builder()
        .next(|v: i64| v + 10)
        .previous(|v: i64| v - 10)
        .included(|start, end, c: i64| start <= c && c <= end && (c - start) % 10 == 0)
        .count(|start: i64, end: i64| ((end - start) / 10) as usize + 1)
        .build()
        .expect("all required operations supplied");
    let range = Range::new(1900i64, 2020, decades);
    let t0 = Instant::now();
    let values = collect(range.by_ref());
    let window = slice(&range, -2..=-1);
    let elapsed = t0.elapsed();
    info!(count = range.count(), "ad-hoc decade space");
    ScenarioResult {
        name: "fn_space_decades".into(),
        count: range.count(),
        folded: format!("{values:?}"),
        sliced: format!("{window:?}"),
        elapsed_us: elapsed.as_micros(),
    }
}

fn main() {
    enable_tracing();

    let scenarios = vec![
        ascending_letters(),
        descending_letters(),
        strided_integers(),
        suspend_and_resume(),
        halt_early(),
        ad_hoc_space(),
    ];

    let report = ProtocolReport {
        description:
            "Range protocol walkthrough: folding, membership, slicing, suspension and ad-hoc spaces."
                .into(),
        scenarios,
    };

    let file = File::create("protocol_report.json").expect("create protocol_report.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================== Walkthrough Done =======================");
    println!("=================================================================");
    println!();
    println!("Wrote: protocol_report.json");
}
