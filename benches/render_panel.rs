//! Benchmarks for one poll cycle's CPU work: decoding a reply and composing the panel
//!
//! Run with: cargo bench --bench render_panel

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use telemachus_dash_render::panel_frame;
use telemachus_dash_sources::{decode_snapshot, DemoSource};

const REPLY: &[u8] = br#"{"T": 3725.5, "St": 2, "SAS": true, "RCS": false, "LGT": true,
"BRK": false, "GEAR": false, "Throt": 0.8, "H": 90.0, "P": 12.5, "R": -3.0, "ToPro": 1.2,
"Vel": 850.0, "OVel": 1900.0, "G": 2.1, "Alt": 35000, "Atm": 0.02, "Q": 3.1,
"Ap": 82000, "Pe": -250000, "TTAp": 95, "TTPe": -1400, "Incl": 0.3, "Ecc": 0.7,
"Elec": 140, "Elecmax": 150, "Kero": 1200, "Keromax": 2880, "LOX": 1466, "LOXmax": 3520,
"Mono": -1, "Monomax": 30, "Solid": 0, "Solidmax": 400, "Name": "Bench Rocket"}"#;

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_reply", |b| {
        b.iter(|| decode_snapshot(black_box(REPLY)))
    });
}

fn bench_panel(c: &mut Criterion) {
    let snapshot = DemoSource::with_seed(1).snapshot_at(90.0);
    c.bench_function("panel_frame", |b| b.iter(|| panel_frame(black_box(&snapshot))));
}

criterion_group!(benches, bench_decode, bench_panel);
criterion_main!(benches);
