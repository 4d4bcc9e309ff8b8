use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use indoc::formatdoc;

/// Widest pattern the generated triangle covers.
const TABLE_WIDTH: usize = 64;

fn main() {
    let mut pascal = vec![vec![0u64; TABLE_WIDTH + 1]; TABLE_WIDTH + 1];
    for n in 0..=TABLE_WIDTH {
        pascal[n][0] = 1;
        for k in 1..=n {
            pascal[n][k] = pascal[n - 1][k - 1] + pascal[n - 1][k];
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir).join("tables.rs");
    let mut f = File::create(&out_path).unwrap();

    f.write_all(
        formatdoc!(
            "pub const TABLE_WIDTH: u32 = {width};
            pub static PASCAL: [[u64; {size}]; {size}] = {:?};",
            pascal,
            width = TABLE_WIDTH,
            size = TABLE_WIDTH + 1
        )
        .as_bytes(),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
