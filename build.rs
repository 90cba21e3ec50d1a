//! Generates the 12-bit trig lookup tables used by `src/trig.rs`.
//!
//! One turn is divided into 4096 entries; each table is emitted as a
//! `static [f32; 4096]` so lookups compile to a masked index with no
//! runtime trig calls.

use std::env;
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const TABLE_LEN: usize = 4096;

fn emit_table(out: &mut String, name: &str, f: impl Fn(f64) -> f64) {
    writeln!(out, "static {}: [f32; {}] = [", name, TABLE_LEN).unwrap();
    for i in 0..TABLE_LEN {
        let theta = 2.0 * PI * (i as f64) / (TABLE_LEN as f64);
        let value = f(theta) as f32;
        if value == 0.0 {
            writeln!(out, "    0.0,").unwrap();
        } else {
            writeln!(out, "    {:?},", value).unwrap();
        }
    }
    writeln!(out, "];").unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("trig_lut.rs");

    let mut out = String::new();
    emit_table(&mut out, "SINE_LUT", f64::sin);
    emit_table(&mut out, "COSINE_LUT", f64::cos);
    emit_table(&mut out, "COS_MINUS_ONE_LUT", |t| t.cos() - 1.0);

    fs::write(&dest, out).expect("failed to write trig tables");
    println!("cargo:rerun-if-changed=build.rs");
}
