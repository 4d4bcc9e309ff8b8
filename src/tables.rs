//! Pascal triangle generated by `build.rs`: `PASCAL[n][k] == C(n, k)` for `n, k <= TABLE_WIDTH`.

include!(concat!(env!("OUT_DIR"), "/tables.rs"));
